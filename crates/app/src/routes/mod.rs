pub mod admin;
pub mod appointments;
pub mod doctor;
pub mod landing;
pub mod not_found;
pub mod patient;

use dioxus::prelude::*;

use admin::AdminDashboard;
use appointments::PatientAppointments;
use doctor::DoctorDashboard;
use landing::Landing;
use not_found::NotFound;
use patient::{LoggedPatientDashboard, PatientDashboard};

/// Application routes. Paths mirror `portal::Page::path`.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/doctor")]
    DoctorDashboard {},
    #[route("/patient")]
    PatientDashboard {},
    #[route("/patient/home")]
    LoggedPatientDashboard {},
    #[route("/patient/appointments")]
    PatientAppointments {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
