use chrono::Local;
use dioxus::prelude::*;
use portal::{DoctorDashboard as Controller, ListState, ModalState, Page};
use shared_types::Appointment;
use shared_ui::{
    AppointmentRow, Button, ButtonVariant, DataTable, DataTableMessage, Input, PageHeader,
    SearchBar, APPOINTMENT_COLUMNS,
};
use std::rc::Rc;

use crate::components::PortalHeader;
use crate::services::{use_services, SignalListView};

/// The signed-in doctor's appointments for one day.
#[component]
pub fn DoctorDashboard() -> Element {
    let services = use_services();
    let modal = use_signal(ModalState::default);
    let appointments = use_signal(ListState::<Appointment>::default);
    let mut search = use_signal(String::new);
    let mut date = use_signal(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
    let controller = use_hook(|| {
        Rc::new(Controller::new(
            services.api.clone(),
            services.session.clone(),
            Rc::new(SignalListView(appointments)),
            Local::now().date_naive(),
        ))
    });

    use_hook({
        let controller = controller.clone();
        move || {
            spawn(async move { controller.load_list().await });
        }
    });

    let on_search = {
        let controller = controller.clone();
        move |e: FormEvent| {
            let text = e.value();
            search.set(text.clone());
            let controller = controller.clone();
            spawn(async move { controller.on_search(&text).await });
        }
    };
    let on_date = {
        let controller = controller.clone();
        move |e: FormEvent| {
            let value = e.value();
            date.set(value.clone());
            let controller = controller.clone();
            spawn(async move {
                let selected = controller.on_date_change(&value).await;
                date.set(selected.format("%Y-%m-%d").to_string());
            });
        }
    };
    let on_today = move |_: MouseEvent| {
        let today = Local::now().date_naive();
        date.set(today.format("%Y-%m-%d").to_string());
        let controller = controller.clone();
        spawn(async move { controller.on_today(today).await });
    };

    let columns: Vec<String> = APPOINTMENT_COLUMNS.iter().map(|c| c.to_string()).collect();
    let colspan = columns.len();

    rsx! {
        PortalHeader { page: Page::DoctorDashboard, modal }
        main { class: "container",
            PageHeader { title: "Patient Appointments" }
            SearchBar {
                Input {
                    id: "searchBar",
                    placeholder: "Search by patient name",
                    value: search(),
                    on_input: on_search,
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: on_today,
                    "Today's Appointments"
                }
                Input {
                    id: "datePicker",
                    input_type: "date",
                    value: date(),
                    on_input: on_date,
                }
            }
            DataTable { columns,
                match &*appointments.read() {
                    ListState::Loading => rsx! {
                        DataTableMessage { colspan, message: "Loading..." }
                    },
                    ListState::Ready(rows) => rsx! {
                        for (i, appointment) in rows.iter().enumerate() {
                            AppointmentRow {
                                key: "{i}",
                                appointment: appointment.clone(),
                            }
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
