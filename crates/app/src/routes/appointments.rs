use dioxus::prelude::*;
use portal::{ListState, ModalState, Page, PatientAppointments as Controller};
use shared_types::{Appointment, PatientAppointmentFilter};
use shared_ui::{
    DataTable, DataTableMessage, FormSelect, Input, PageHeader, PatientAppointmentRow, SearchBar,
    PATIENT_APPOINTMENT_COLUMNS,
};
use std::rc::Rc;

use crate::components::PortalHeader;
use crate::services::{use_services, SignalListView};

/// The logged-in patient's own bookings.
#[component]
pub fn PatientAppointments() -> Element {
    let services = use_services();
    let modal = use_signal(ModalState::default);
    let appointments = use_signal(ListState::<Appointment>::default);
    let mut condition = use_signal(String::new);
    let mut doctor = use_signal(String::new);
    let controller = use_hook(|| {
        Rc::new(Controller::new(
            services.api.clone(),
            services.session.clone(),
            Rc::new(SignalListView(appointments)),
        ))
    });

    use_hook({
        let controller = controller.clone();
        move || {
            spawn(async move { controller.load_list().await });
        }
    });

    let refresh = move || {
        let filter = PatientAppointmentFilter::from_inputs(&condition(), &doctor());
        let controller = controller.clone();
        spawn(async move { controller.on_filter_change(filter).await });
    };
    let on_condition = {
        let refresh = refresh.clone();
        move |e: FormEvent| {
            condition.set(e.value());
            refresh();
        }
    };
    let on_doctor = move |e: FormEvent| {
        doctor.set(e.value());
        refresh();
    };

    let columns: Vec<String> = PATIENT_APPOINTMENT_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .collect();
    let colspan = columns.len();

    rsx! {
        PortalHeader { page: Page::PatientAppointments, modal }
        main { class: "container",
            PageHeader { title: "Your Appointments" }
            SearchBar {
                Input {
                    id: "searchBar",
                    placeholder: "Search by doctor name",
                    value: doctor(),
                    on_input: on_doctor,
                }
                FormSelect {
                    value: condition(),
                    onchange: on_condition,
                    option { value: "allAppointments", "All Appointments" }
                    option { value: "future", "Upcoming Appointments" }
                    option { value: "past", "Past Appointments" }
                }
            }
            DataTable { columns,
                match &*appointments.read() {
                    ListState::Loading => rsx! {
                        DataTableMessage { colspan, message: "Loading..." }
                    },
                    ListState::Ready(rows) => rsx! {
                        for (i, appointment) in rows.iter().enumerate() {
                            PatientAppointmentRow { key: "{i}", appointment: appointment.clone() }
                        }
                    },
                    ListState::Empty(message) | ListState::Failed(message) => rsx! {
                        DataTableMessage { colspan, message: message.clone() }
                    },
                }
            }
        }
    }
}
