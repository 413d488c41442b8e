use dioxus::prelude::*;
use portal::{LoginPortal, ModalKind, ModalState, Page};
use shared_types::{AdminCredentials, Login, Role};
use shared_ui::{Button, Card, CardContent, CardHeader, CardSubtitle, CardTitle, ModalOverlay};
use std::rc::Rc;

use crate::components::{AdminLoginForm, LoginForm, PortalHeader};
use crate::services::use_services;

/// Role selection. Admin and doctor log in here; patients browse first.
#[component]
pub fn Landing() -> Element {
    let services = use_services();
    let mut modal = use_signal(ModalState::default);
    let portal = use_hook(|| {
        Rc::new(LoginPortal::new(
            services.api.clone(),
            services.session.clone(),
            services.navigator.clone(),
            services.notifier.clone(),
        ))
    });

    let admin_login = {
        let portal = portal.clone();
        move |credentials: AdminCredentials| {
            let portal = portal.clone();
            spawn(async move {
                portal.admin_login(credentials).await;
            });
        }
    };
    let doctor_login = {
        let portal = portal.clone();
        move |login: Login| {
            let portal = portal.clone();
            spawn(async move {
                portal.doctor_login(login).await;
            });
        }
    };
    let select_patient = {
        let portal = portal.clone();
        move |_: MouseEvent| portal.select_role(Role::Patient)
    };

    let open = modal.read().current();

    rsx! {
        PortalHeader { page: Page::Landing, modal }
        main { class: "container",
            div { class: "role-grid",
                RoleTile {
                    title: "Admin",
                    subtitle: "Manage the doctor directory",
                    Button { onclick: move |_| modal.write().show(ModalKind::AdminLogin), "Admin Login" }
                }
                RoleTile {
                    title: "Doctor",
                    subtitle: "Review your appointments",
                    Button { onclick: move |_| modal.write().show(ModalKind::DoctorLogin), "Doctor Login" }
                }
                RoleTile {
                    title: "Patient",
                    subtitle: "Find a doctor and book a visit",
                    Button { onclick: select_patient, "Continue as Patient" }
                }
            }
        }
        ModalOverlay {
            open: matches!(open, Some(ModalKind::AdminLogin | ModalKind::DoctorLogin)),
            title: open.map(|kind| kind.title().to_string()).unwrap_or_default(),
            on_close: move |_| modal.write().close_modal(),
            match open {
                Some(ModalKind::AdminLogin) => rsx! { AdminLoginForm { on_submit: admin_login } },
                Some(ModalKind::DoctorLogin) => rsx! { LoginForm { on_submit: doctor_login } },
                _ => rsx! {},
            }
        }
    }
}

#[component]
fn RoleTile(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "{title}" }
                CardSubtitle { "{subtitle}" }
            }
            CardContent { {children} }
        }
    }
}
