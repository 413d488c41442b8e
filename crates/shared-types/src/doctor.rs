use serde::{Deserialize, Serialize};

// ── Doctor record ───────────────────────────────────────────────────

/// A doctor as returned by the directory endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// The backend spells this `speciality` on some responses.
    #[serde(default, alias = "speciality")]
    pub specialty: String,
    /// Ordered time-slot strings (e.g. "09:00-10:00").
    #[serde(default)]
    pub available_times: Vec<String>,
}

/// Payload submitted by the admin "Add Doctor" form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub specialty: String,
    pub available_times: Vec<String>,
}

// ── Directory constants ─────────────────────────────────────────────

/// Specialty options offered by the directory filter and the add form.
pub const SPECIALTIES: &[(&str, &str)] = &[
    ("cardiologist", "Cardiologist"),
    ("dermatologist", "Dermatologist"),
    ("neurologist", "Neurologist"),
    ("pediatrician", "Pediatrician"),
    ("orthopedic", "Orthopedic"),
    ("gynecologist", "Gynecologist"),
    ("psychiatrist", "Psychiatrist"),
    ("dentist", "Dentist"),
    ("ophthalmologist", "Ophthalmologist"),
    ("ent", "ENT Specialist"),
    ("urologist", "Urologist"),
    ("oncologist", "Oncologist"),
    ("gastroenterologist", "Gastroenterologist"),
    ("general", "General Physician"),
];

/// Half-day options for the time filter.
pub const TIME_FILTERS: &[(&str, &str)] = &[("AM", "Morning (AM)"), ("PM", "Afternoon (PM)")];

/// Hourly slots an admin can tick when adding a doctor.
pub const TIME_SLOTS: &[&str] = &[
    "09:00-10:00",
    "10:00-11:00",
    "11:00-12:00",
    "14:00-15:00",
    "15:00-16:00",
    "16:00-17:00",
];

// ── Filter criteria ─────────────────────────────────────────────────

/// Sentinel path segment the backend reads as "no criterion".
pub const NO_FILTER: &str = "null";

/// Directory filter built from the search box and the two dropdowns.
///
/// Every field is optional; the backend ANDs whatever is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorFilter {
    pub name: Option<String>,
    pub time: Option<String>,
    pub specialty: Option<String>,
}

impl DoctorFilter {
    /// Build a filter from raw input values, trimming and dropping blanks.
    pub fn from_inputs(name: &str, time: &str, specialty: &str) -> Self {
        Self {
            name: non_blank(name),
            time: non_blank(time),
            specialty: non_blank(specialty),
        }
    }

    /// True when no criterion is set, i.e. the filter selects everything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.time.is_none() && self.specialty.is_none()
    }

    /// Path segments in backend order (name, time, specialty), with
    /// [`NO_FILTER`] standing in for absent criteria.
    pub fn path_segments(&self) -> [&str; 3] {
        [
            self.name.as_deref().unwrap_or(NO_FILTER),
            self.time.as_deref().unwrap_or(NO_FILTER),
            self.specialty.as_deref().unwrap_or(NO_FILTER),
        ]
    }
}

pub(crate) fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ── Response envelopes ──────────────────────────────────────────────

/// Doctor list body: either `{ "doctors": [...] }` or a bare array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DoctorList {
    Wrapped { doctors: Vec<Doctor> },
    Bare(Vec<Doctor>),
}

impl DoctorList {
    pub fn into_vec(self) -> Vec<Doctor> {
        match self {
            DoctorList::Wrapped { doctors } => doctors,
            DoctorList::Bare(doctors) => doctors,
        }
    }
}

impl From<DoctorList> for Vec<Doctor> {
    fn from(list: DoctorList) -> Self {
        list.into_vec()
    }
}
