use dioxus::prelude::*;

/// Filter row above a list: search box, selects and action buttons.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar", role: "search",
            {children}
        }
    }
}
