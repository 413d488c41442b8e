use dioxus::prelude::*;
use portal::ListState;
use shared_types::{Doctor, DoctorFilter, SPECIALTIES, TIME_FILTERS};
use shared_ui::{CardGrid, DoctorCard, EmptyState, FormSelect, Input, LoadingState, SearchBar};

/// Name search plus time and specialty dropdowns.
///
/// Every change re-reads all three inputs and reports the combined filter.
#[component]
pub fn DoctorFilterBar(on_filter: EventHandler<DoctorFilter>) -> Element {
    let mut name = use_signal(String::new);
    let mut time = use_signal(String::new);
    let mut specialty = use_signal(String::new);

    let emit = move || on_filter.call(DoctorFilter::from_inputs(&name(), &time(), &specialty()));

    rsx! {
        SearchBar {
            Input {
                id: "searchBar",
                placeholder: "Search by doctor name",
                value: name(),
                on_input: move |e: FormEvent| {
                    name.set(e.value());
                    emit();
                },
            }
            FormSelect {
                placeholder: "Sort by time",
                value: time(),
                onchange: move |e: FormEvent| {
                    time.set(e.value());
                    emit();
                },
                for (value , label) in TIME_FILTERS.iter() {
                    option { value: "{value}", "{label}" }
                }
            }
            FormSelect {
                placeholder: "Filter by specialty",
                value: specialty(),
                onchange: move |e: FormEvent| {
                    specialty.set(e.value());
                    emit();
                },
                for (value , label) in SPECIALTIES.iter() {
                    option { value: "{value}", "{label}" }
                }
            }
        }
    }
}

/// Card grid for the directory state.
#[component]
pub fn DoctorGrid(state: ReadSignal<ListState<Doctor>>) -> Element {
    match &*state.read() {
        ListState::Loading => rsx! { LoadingState {} },
        ListState::Ready(doctors) => rsx! {
            CardGrid {
                for doctor in doctors.iter() {
                    DoctorCard {
                        key: "{doctor.id.unwrap_or_default()}-{doctor.email}",
                        doctor: doctor.clone(),
                    }
                }
            }
        },
        ListState::Empty(message) => rsx! { EmptyState { message: message.clone() } },
        ListState::Failed(message) => rsx! { EmptyState { message: message.clone(), error: true } },
    }
}
