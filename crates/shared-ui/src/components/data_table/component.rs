use dioxus::prelude::*;

/// Scrollable table with a fixed header row.
///
/// `columns` are the header labels; `children` are the body rows.
#[component]
pub fn DataTable(columns: Vec<String>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for column in columns {
                            th { "{column}" }
                        }
                    }
                }
                tbody { {children} }
            }
        }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Single full-width row carrying a status message in place of data.
#[component]
pub fn DataTableMessage(colspan: usize, message: String) -> Element {
    rsx! {
        tr { class: "data-table-message",
            td { colspan: "{colspan}", "{message}" }
        }
    }
}
