use dioxus::prelude::*;

/// Bordered panel used for doctor cards and the landing role tiles.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

/// Secondary line under the title, e.g. a doctor's specialty.
#[component]
pub fn CardSubtitle(children: Element) -> Element {
    rsx! {
        p { class: "card-subtitle", {children} }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Label/value line inside a card body.
#[component]
pub fn CardField(label: String, value: String) -> Element {
    rsx! {
        p { class: "card-field",
            span { class: "card-field-label", "{label}: " }
            span { class: "card-field-value", "{value}" }
        }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}

/// Responsive grid that lays cards out in columns.
#[component]
pub fn CardGrid(children: Element) -> Element {
    rsx! {
        div { class: "card-grid", {children} }
    }
}
