use shared_types::{AppError, Appointment, PatientAppointmentFilter};
use std::rc::Rc;

use crate::api::HospitalApi;
use crate::header::SESSION_EXPIRED_NOTICE;
use crate::sequence::RequestSequence;
use crate::session::SessionStore;
use crate::view::{ListState, ListView};

pub const NO_PATIENT_APPOINTMENTS: &str = "No appointments found.";
pub const PATIENT_APPOINTMENTS_FAILED: &str =
    "Failed to load appointments. Please try again later.";

/// A logged-in patient's own appointments, filtered by past/future and doctor.
///
/// The header owns session expiry; without a credential this list only shows
/// the notice in place of rows.
pub struct PatientAppointments {
    api: Rc<dyn HospitalApi>,
    session: Rc<dyn SessionStore>,
    view: Rc<dyn ListView<Appointment>>,
    sequence: RequestSequence,
}

impl PatientAppointments {
    pub fn new(
        api: Rc<dyn HospitalApi>,
        session: Rc<dyn SessionStore>,
        view: Rc<dyn ListView<Appointment>>,
    ) -> Self {
        Self {
            api,
            session,
            view,
            sequence: RequestSequence::new(),
        }
    }

    pub async fn load_list(&self) {
        self.on_filter_change(PatientAppointmentFilter::default())
            .await;
    }

    pub async fn on_filter_change(&self, filter: PatientAppointmentFilter) {
        let Some(token) = self.session.token() else {
            tracing::warn!(error = %AppError::session_expired(), "patient appointments without credential");
            self.view
                .show(ListState::Failed(SESSION_EXPIRED_NOTICE.to_string()));
            return;
        };

        let ticket = self.sequence.begin();
        let result = self.api.patient_appointments(&filter, &token).await;
        if !self.sequence.is_current(ticket) {
            tracing::debug!(?filter, "discarding superseded patient appointments");
            return;
        }

        match result {
            Ok(appointments) => self
                .view
                .show(ListState::from_items(appointments, NO_PATIENT_APPOINTMENTS)),
            Err(e) => {
                tracing::error!(error = %e, ?filter, "failed to load patient appointments");
                self.view
                    .show(ListState::Failed(PATIENT_APPOINTMENTS_FAILED.to_string()));
            }
        }
    }
}
