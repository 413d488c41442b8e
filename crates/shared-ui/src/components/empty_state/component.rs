use dioxus::prelude::*;

/// Inline message shown where a list would otherwise be.
#[component]
pub fn EmptyState(message: String, #[props(default = false)] error: bool) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        p {
            class: "empty-state",
            "data-error": error,
            "{message}"
        }
    }
}

/// Pulsing placeholder while the first response is pending.
#[component]
pub fn LoadingState() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loading-state", aria_busy: "true", "Loading..." }
    }
}
