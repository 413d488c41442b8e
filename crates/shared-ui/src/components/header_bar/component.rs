use dioxus::prelude::*;

/// Top bar: brand on the left, navigation controls on the right.
#[component]
pub fn HeaderBar(brand: Element, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "header-bar",
            div { class: "header-brand", {brand} }
            nav { class: "header-nav", {children} }
        }
    }
}
