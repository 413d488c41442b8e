//! One backend record in, one fragment out. No state, no requests.

use dioxus::prelude::*;
use shared_types::{Appointment, Doctor};

use crate::components::{Button, ButtonVariant, Card, CardContent, CardField, CardFooter};
use crate::components::{CardHeader, CardSubtitle, CardTitle, DataTableCell, DataTableRow};

/// Column labels for [`AppointmentRow`].
pub const APPOINTMENT_COLUMNS: [&str; 5] =
    ["Patient ID", "Name", "Phone No.", "Email", "Prescription"];

/// Column labels for [`PatientAppointmentRow`].
pub const PATIENT_APPOINTMENT_COLUMNS: [&str; 4] = ["Doctor", "Date", "Time", "Status"];

/// Directory card for one doctor.
#[component]
pub fn DoctorCard(doctor: Doctor) -> Element {
    rsx! {
        Card { class: "doctor-card",
            CardHeader {
                CardTitle { "{doctor.name}" }
                CardSubtitle { "{doctor.specialty}" }
            }
            CardContent {
                CardField { label: "Email", value: doctor.email.clone() }
                CardField { label: "Phone", value: doctor.phone.clone() }
            }
            CardFooter {
                if doctor.available_times.is_empty() {
                    span { class: "slot slot-none", "No available times" }
                }
                for slot in doctor.available_times.iter() {
                    span { class: "slot", "{slot}" }
                }
            }
        }
    }
}

/// Doctor-side table row. Prescriptions are not issued from the portal, so
/// the action cell holds an inert button.
#[component]
pub fn AppointmentRow(appointment: Appointment) -> Element {
    let patient_id = appointment
        .patient_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());

    rsx! {
        DataTableRow {
            DataTableCell { "{patient_id}" }
            DataTableCell { "{appointment.patient_name}" }
            DataTableCell { "{appointment.patient_phone}" }
            DataTableCell { "{appointment.patient_email}" }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Outline,
                    class: "prescribe-button",
                    disabled: true,
                    "Add Prescription"
                }
            }
        }
    }
}

/// Patient-side table row.
#[component]
pub fn PatientAppointmentRow(appointment: Appointment) -> Element {
    rsx! {
        DataTableRow {
            DataTableCell { "{appointment.doctor_name}" }
            DataTableCell { "{appointment.date}" }
            DataTableCell { "{appointment.time}" }
            DataTableCell {
                span {
                    class: "status",
                    "data-status": "{appointment.status}",
                    "{appointment.status_label()}"
                }
            }
        }
    }
}
