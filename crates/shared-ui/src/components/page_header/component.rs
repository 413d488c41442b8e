use dioxus::prelude::*;

/// Dashboard heading with an optional one-line description.
#[component]
pub fn PageHeader(title: String, #[props(default)] description: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            h1 { class: "page-title", "{title}" }
            if !description.is_empty() {
                p { class: "page-description", "{description}" }
            }
        }
    }
}
