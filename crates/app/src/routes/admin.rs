use dioxus::prelude::*;
use portal::{AdminDashboard as Controller, ListState, ModalKind, ModalState, Page};
use shared_types::{Doctor, DoctorFilter, NewDoctor};
use shared_ui::{ModalOverlay, PageHeader};
use std::rc::Rc;

use crate::components::{AddDoctorForm, DoctorFilterBar, DoctorGrid, PortalHeader};
use crate::services::{use_services, SignalListView, SignalModalHost};

#[component]
pub fn AdminDashboard() -> Element {
    let services = use_services();
    let mut modal = use_signal(ModalState::default);
    let doctors = use_signal(ListState::<Doctor>::default);
    let controller = use_hook(|| {
        Rc::new(Controller::new(
            services.api.clone(),
            services.session.clone(),
            Rc::new(SignalListView(doctors)),
            services.notifier.clone(),
            Rc::new(SignalModalHost(modal)),
        ))
    });

    use_hook({
        let controller = controller.clone();
        move || {
            spawn(async move { controller.load_list().await });
        }
    });

    let on_filter = {
        let controller = controller.clone();
        move |filter: DoctorFilter| {
            let controller = controller.clone();
            spawn(async move { controller.on_filter_change(filter).await });
        }
    };
    let add_doctor = move |doctor: NewDoctor| {
        let controller = controller.clone();
        spawn(async move {
            controller.add_doctor(doctor).await;
        });
    };

    let open = modal.read().current() == Some(ModalKind::AddDoctor);

    rsx! {
        PortalHeader { page: Page::AdminDashboard, modal }
        main { class: "container",
            PageHeader {
                title: "Doctors",
                description: "Every doctor registered with the hospital.",
            }
            DoctorFilterBar { on_filter }
            DoctorGrid { state: doctors }
        }
        ModalOverlay {
            open,
            title: ModalKind::AddDoctor.title().to_string(),
            on_close: move |_| modal.write().close_modal(),
            AddDoctorForm { on_submit: add_doctor }
        }
    }
}
