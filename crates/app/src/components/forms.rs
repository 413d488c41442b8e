//! Bodies of the shared modal. Each form owns its input state and reports a
//! typed payload; the page hands it to its controller.

use dioxus::prelude::*;
use shared_types::{AdminCredentials, Login, NewDoctor, PatientSignup, SPECIALTIES, TIME_SLOTS};
use shared_ui::{Button, FormSelect, Input};

#[component]
pub fn AdminLoginForm(on_submit: EventHandler<AdminCredentials>) -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    rsx! {
        form {
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(AdminCredentials {
                    username: username(),
                    password: password(),
                });
            },
            Input {
                label: "Username",
                id: "username",
                required: true,
                value: username(),
                on_input: move |e: FormEvent| username.set(e.value()),
            }
            Input {
                label: "Password",
                input_type: "password",
                id: "password",
                required: true,
                value: password(),
                on_input: move |e: FormEvent| password.set(e.value()),
            }
            Button { button_type: "submit", "Login" }
        }
    }
}

/// Email/password login shared by doctors and patients.
#[component]
pub fn LoginForm(on_submit: EventHandler<Login>) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    rsx! {
        form {
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(Login {
                    email: email(),
                    password: password(),
                });
            },
            Input {
                label: "Email",
                input_type: "email",
                id: "email",
                required: true,
                value: email(),
                on_input: move |e: FormEvent| email.set(e.value()),
            }
            Input {
                label: "Password",
                input_type: "password",
                id: "password",
                required: true,
                value: password(),
                on_input: move |e: FormEvent| password.set(e.value()),
            }
            Button { button_type: "submit", "Login" }
        }
    }
}

#[component]
pub fn PatientSignupForm(on_submit: EventHandler<PatientSignup>) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);

    rsx! {
        form {
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(PatientSignup {
                    name: name(),
                    email: email(),
                    password: password(),
                    phone: phone(),
                    address: address(),
                });
            },
            Input {
                label: "Name",
                id: "name",
                required: true,
                value: name(),
                on_input: move |e: FormEvent| name.set(e.value()),
            }
            Input {
                label: "Email",
                input_type: "email",
                id: "email",
                required: true,
                value: email(),
                on_input: move |e: FormEvent| email.set(e.value()),
            }
            Input {
                label: "Password",
                input_type: "password",
                id: "password",
                required: true,
                value: password(),
                on_input: move |e: FormEvent| password.set(e.value()),
            }
            Input {
                label: "Phone",
                input_type: "tel",
                id: "phone",
                required: true,
                value: phone(),
                on_input: move |e: FormEvent| phone.set(e.value()),
            }
            Input {
                label: "Address",
                id: "address",
                required: true,
                value: address(),
                on_input: move |e: FormEvent| address.set(e.value()),
            }
            Button { button_type: "submit", "Sign Up" }
        }
    }
}

#[component]
pub fn AddDoctorForm(on_submit: EventHandler<NewDoctor>) -> Element {
    let mut name = use_signal(String::new);
    let mut specialty = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut slots = use_signal(Vec::<String>::new);

    rsx! {
        form {
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                // Keep the slots in display order regardless of click order.
                let picked = slots.read();
                let available_times = TIME_SLOTS
                    .iter()
                    .filter(|slot| picked.iter().any(|p| p == *slot))
                    .map(|slot| slot.to_string())
                    .collect();
                on_submit.call(NewDoctor {
                    name: name(),
                    email: email(),
                    password: password(),
                    phone: phone(),
                    specialty: specialty(),
                    available_times,
                });
            },
            Input {
                label: "Doctor Name",
                id: "doctorName",
                required: true,
                value: name(),
                on_input: move |e: FormEvent| name.set(e.value()),
            }
            FormSelect {
                label: "Specialization",
                placeholder: "Select specialization",
                required: true,
                value: specialty(),
                onchange: move |e: FormEvent| specialty.set(e.value()),
                for (value , label) in SPECIALTIES.iter() {
                    option { value: "{value}", "{label}" }
                }
            }
            Input {
                label: "Email",
                input_type: "email",
                id: "doctorEmail",
                required: true,
                value: email(),
                on_input: move |e: FormEvent| email.set(e.value()),
            }
            Input {
                label: "Password",
                input_type: "password",
                id: "doctorPassword",
                required: true,
                value: password(),
                on_input: move |e: FormEvent| password.set(e.value()),
            }
            Input {
                label: "Phone",
                input_type: "tel",
                id: "doctorPhone",
                required: true,
                value: phone(),
                on_input: move |e: FormEvent| phone.set(e.value()),
            }
            fieldset { class: "slot-picker",
                legend { "Availability" }
                for slot in TIME_SLOTS.iter() {
                    label { key: "{slot}",
                        input {
                            r#type: "checkbox",
                            name: "availability",
                            value: "{slot}",
                            checked: slots.read().iter().any(|s| s == *slot),
                            onchange: move |e: FormEvent| {
                                let mut picked = slots.write();
                                picked.retain(|s| s != *slot);
                                if e.checked() {
                                    picked.push(slot.to_string());
                                }
                            },
                        }
                        " {slot}"
                    }
                }
            }
            Button { button_type: "submit", "Add Doctor" }
        }
    }
}
