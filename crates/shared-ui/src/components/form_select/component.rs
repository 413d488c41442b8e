use dioxus::prelude::*;

/// Native `<select>` for filter bars and forms.
///
/// Children should be `option { value: "...", "Label" }` elements. When
/// `placeholder` is set it is rendered first with an empty value, which the
/// filters read as "no selection".
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<FormEvent>>,
    #[props(default)] label: String,
    #[props(default)] placeholder: String,
    #[props(default = false)] required: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "form-select-wrapper",
            if !label.is_empty() {
                span { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: value,
                required: required,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                if !placeholder.is_empty() {
                    option { value: "", "{placeholder}" }
                }
                {children}
            }
        }
    }
}
