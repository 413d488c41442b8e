use dioxus::prelude::*;
use portal::{ListState, ModalKind, ModalState, Page, PatientDashboard as Controller};
use shared_types::{Doctor, DoctorFilter, Login, PatientSignup};
use shared_ui::{ModalOverlay, PageHeader};
use std::rc::Rc;

use crate::components::{DoctorFilterBar, DoctorGrid, LoginForm, PatientSignupForm, PortalHeader};
use crate::services::{use_services, SignalListView, SignalModalHost};

/// Anonymous patient browsing the directory.
#[component]
pub fn PatientDashboard() -> Element {
    rsx! {
        PatientDirectory { page: Page::PatientDashboard }
    }
}

/// Logged-in patient home.
#[component]
pub fn LoggedPatientDashboard() -> Element {
    rsx! {
        PatientDirectory { page: Page::LoggedPatientDashboard }
    }
}

#[component]
fn PatientDirectory(page: Page) -> Element {
    let services = use_services();
    let mut modal = use_signal(ModalState::default);
    let doctors = use_signal(ListState::<Doctor>::default);
    let controller = use_hook(|| {
        Rc::new(Controller::new(
            services.api.clone(),
            services.session.clone(),
            Rc::new(SignalListView(doctors)),
            services.navigator.clone(),
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
    let login = {
        let controller = controller.clone();
        move |login: Login| {
            let controller = controller.clone();
            spawn(async move {
                controller.login(login).await;
            });
        }
    };
    let signup = move |signup: PatientSignup| {
        let controller = controller.clone();
        spawn(async move {
            controller.signup(signup).await;
        });
    };

    let open = modal.read().current();

    rsx! {
        PortalHeader { page, modal }
        main { class: "container",
            PageHeader {
                title: "Find a Doctor",
                description: "Search by name, or narrow by time of day and specialty.",
            }
            DoctorFilterBar { on_filter }
            DoctorGrid { state: doctors }
        }
        ModalOverlay {
            open: matches!(open, Some(ModalKind::PatientLogin | ModalKind::PatientSignup)),
            title: open.map(|kind| kind.title().to_string()).unwrap_or_default(),
            on_close: move |_| modal.write().close_modal(),
            match open {
                Some(ModalKind::PatientLogin) => rsx! { LoginForm { on_submit: login } },
                Some(ModalKind::PatientSignup) => rsx! { PatientSignupForm { on_submit: signup } },
                _ => rsx! {},
            }
        }
    }
}
