use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdHospital;
use dioxus_free_icons::Icon;
use portal::{HeaderController, ModalState, Page};
use shared_ui::{Button, ButtonVariant, HeaderBar};
use std::rc::Rc;

use crate::services::{use_services, SignalModalHost};

/// Session-gated top bar. The session check runs once, after the page mounts.
#[component]
pub fn PortalHeader(page: Page, modal: Signal<ModalState>) -> Element {
    let services = use_services();
    let controller = use_hook(|| {
        Rc::new(HeaderController::new(
            services.session.clone(),
            services.navigator.clone(),
            services.notifier.clone(),
            Rc::new(SignalModalHost(modal)),
        ))
    });
    let mut view = use_signal({
        let controller = controller.clone();
        move || controller.preview(page)
    });
    // Session writes, alerts and redirects wait until after the first render.
    use_effect({
        let controller = controller.clone();
        move || view.set(controller.render(page))
    });

    let actions = view().actions().iter().copied().map(|action| {
        let controller = controller.clone();
        let variant = if action.is_link() {
            ButtonVariant::Link
        } else {
            ButtonVariant::Secondary
        };
        rsx! {
            Button {
                key: "{action.label()}-{action.is_link()}",
                variant,
                onclick: move |_| controller.activate(action),
                "{action.label()}"
            }
        }
    });

    rsx! {
        HeaderBar {
            brand: rsx! {
                Icon { icon: LdHospital, width: 24, height: 24 }
                span { "Hospital Portal" }
            },
            {actions}
        }
    }
}
