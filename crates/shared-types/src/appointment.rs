use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::doctor::{non_blank, NO_FILTER};

// ── Appointment record ──────────────────────────────────────────────

/// Backend status code for an appointment that has not happened yet.
pub const STATUS_SCHEDULED: i32 = 0;
/// Backend status code for a completed appointment.
pub const STATUS_COMPLETED: i32 = 1;

/// A booked appointment, flattened for table rendering.
///
/// Decodes both the flat DTO shape (`patientName`, `appointmentDate`, ...)
/// and the entity shape with nested `patient` / `doctor` objects and a single
/// `appointmentTime` date-time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "AppointmentWire")]
pub struct Appointment {
    pub id: Option<i64>,
    pub patient_id: Option<i64>,
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_email: String,
    pub doctor_name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub status: i32,
}

impl Appointment {
    /// Human-readable status.
    pub fn status_label(&self) -> &'static str {
        match self.status {
            STATUS_SCHEDULED => "Scheduled",
            STATUS_COMPLETED => "Completed",
            _ => "Cancelled",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PartyWire {
    id: Option<i64>,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AppointmentWire {
    id: Option<i64>,
    patient_id: Option<i64>,
    patient_name: Option<String>,
    patient_phone: Option<String>,
    patient_email: Option<String>,
    doctor_name: Option<String>,
    patient: Option<PartyWire>,
    doctor: Option<PartyWire>,
    date: Option<String>,
    time: Option<String>,
    appointment_date: Option<String>,
    appointment_time_only: Option<String>,
    appointment_time: Option<String>,
    status: Option<i32>,
}

/// Split `YYYY-MM-DDTHH:MM[:SS]` into date and `HH:MM`.
fn split_date_time(value: &str) -> (String, String) {
    match value.split_once('T') {
        Some((date, time)) => (date.to_string(), time.chars().take(5).collect()),
        None => (value.to_string(), String::new()),
    }
}

impl From<AppointmentWire> for Appointment {
    fn from(wire: AppointmentWire) -> Self {
        let patient = wire.patient.unwrap_or_default();
        let doctor = wire.doctor.unwrap_or_default();
        let (stamp_date, stamp_time) = wire
            .appointment_time
            .as_deref()
            .map(split_date_time)
            .unwrap_or_default();

        let date = wire
            .date
            .or(wire.appointment_date)
            .unwrap_or(stamp_date);
        let time = wire
            .time
            .or(wire.appointment_time_only)
            .map(|t| t.chars().take(5).collect())
            .unwrap_or(stamp_time);

        Appointment {
            id: wire.id,
            patient_id: wire.patient_id.or(patient.id),
            patient_name: wire.patient_name.or(patient.name).unwrap_or_default(),
            patient_phone: wire.patient_phone.or(patient.phone).unwrap_or_default(),
            patient_email: wire.patient_email.or(patient.email).unwrap_or_default(),
            doctor_name: wire.doctor_name.or(doctor.name).unwrap_or_default(),
            date,
            time,
            status: wire.status.unwrap_or(STATUS_SCHEDULED),
        }
    }
}

/// Appointment list body: a bare array or `{ "appointments": [...] }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AppointmentList {
    Wrapped { appointments: Vec<Appointment> },
    Bare(Vec<Appointment>),
}

impl AppointmentList {
    pub fn into_vec(self) -> Vec<Appointment> {
        match self {
            AppointmentList::Wrapped { appointments } => appointments,
            AppointmentList::Bare(appointments) => appointments,
        }
    }
}

impl From<AppointmentList> for Vec<Appointment> {
    fn from(list: AppointmentList) -> Self {
        list.into_vec()
    }
}

// ── Query criteria ──────────────────────────────────────────────────

/// Doctor-side appointment query: one day, optionally narrowed by patient name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentQuery {
    pub date: NaiveDate,
    pub patient_name: Option<String>,
}

impl AppointmentQuery {
    pub fn new(date: NaiveDate, patient_name: &str) -> Self {
        Self {
            date,
            patient_name: non_blank(patient_name),
        }
    }

    /// Patient-name path segment, [`NO_FILTER`] when unset.
    pub fn name_segment(&self) -> &str {
        self.patient_name.as_deref().unwrap_or(NO_FILTER)
    }
}

/// Which half of a patient's history to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentCondition {
    Past,
    Future,
}

impl AppointmentCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentCondition::Past => "past",
            AppointmentCondition::Future => "future",
        }
    }

    /// Parse a select value; anything else means "no condition".
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "past" => Some(AppointmentCondition::Past),
            "future" => Some(AppointmentCondition::Future),
            _ => None,
        }
    }
}

/// Patient-side filter over their own appointments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientAppointmentFilter {
    pub condition: Option<AppointmentCondition>,
    pub doctor_name: Option<String>,
}

impl PatientAppointmentFilter {
    pub fn from_inputs(condition: &str, doctor_name: &str) -> Self {
        Self {
            condition: AppointmentCondition::from_key(condition),
            doctor_name: non_blank(doctor_name),
        }
    }

    /// Path segments in backend order (condition, name).
    pub fn path_segments(&self) -> [&str; 2] {
        [
            self.condition.map(|c| c.as_str()).unwrap_or(NO_FILTER),
            self.doctor_name.as_deref().unwrap_or(NO_FILTER),
        ]
    }
}
