use chrono::NaiveDate;
use shared_types::{AppError, Appointment, AppointmentQuery};
use std::cell::RefCell;
use std::rc::Rc;

use crate::api::HospitalApi;
use crate::header::SESSION_EXPIRED_NOTICE;
use crate::sequence::RequestSequence;
use crate::session::SessionStore;
use crate::view::{ListState, ListView};

pub const NO_APPOINTMENTS: &str = "No Appointments found for selected date.";
pub const APPOINTMENTS_LOAD_FAILED: &str = "Failed to load appointments. Please try again later.";

/// Doctor dashboard: the day's appointments, optionally narrowed by patient name.
pub struct DoctorDashboard {
    api: Rc<dyn HospitalApi>,
    session: Rc<dyn SessionStore>,
    view: Rc<dyn ListView<Appointment>>,
    criteria: RefCell<AppointmentQuery>,
    sequence: RequestSequence,
}

impl DoctorDashboard {
    /// `today` seeds the selected date.
    pub fn new(
        api: Rc<dyn HospitalApi>,
        session: Rc<dyn SessionStore>,
        view: Rc<dyn ListView<Appointment>>,
        today: NaiveDate,
    ) -> Self {
        Self {
            api,
            session,
            view,
            criteria: RefCell::new(AppointmentQuery::new(today, "")),
            sequence: RequestSequence::new(),
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.criteria.borrow().date
    }

    pub fn patient_name(&self) -> Option<String> {
        self.criteria.borrow().patient_name.clone()
    }

    /// Fetch appointments for the current criteria and render the table.
    pub async fn load_list(&self) {
        let Some(token) = self.session.token() else {
            tracing::warn!(error = %AppError::session_expired(), "doctor dashboard without credential");
            self.view
                .show(ListState::Failed(SESSION_EXPIRED_NOTICE.to_string()));
            return;
        };

        let query = self.criteria.borrow().clone();
        let ticket = self.sequence.begin();
        let result = self.api.list_appointments(&query, &token).await;
        if !self.sequence.is_current(ticket) {
            tracing::debug!(?query, "discarding superseded appointment response");
            return;
        }

        match result {
            Ok(appointments) => self
                .view
                .show(ListState::from_items(appointments, NO_APPOINTMENTS)),
            Err(e) => {
                tracing::error!(error = %e, ?query, "failed to load appointments");
                self.view
                    .show(ListState::Failed(APPOINTMENTS_LOAD_FAILED.to_string()));
            }
        }
    }

    /// Patient-name search box changed.
    pub async fn on_search(&self, text: &str) {
        let date = self.selected_date();
        *self.criteria.borrow_mut() = AppointmentQuery::new(date, text);
        self.load_list().await;
    }

    /// Date picker changed. Input is `YYYY-MM-DD`; anything else, including a
    /// cleared picker, is ignored.
    ///
    /// Returns the date now selected so the picker can be put back in sync.
    pub async fn on_date_change(&self, value: &str) -> NaiveDate {
        match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
            Ok(date) => {
                self.criteria.borrow_mut().date = date;
                self.load_list().await;
            }
            Err(e) => tracing::warn!(value, error = %e, "ignoring invalid appointment date"),
        }
        self.selected_date()
    }

    /// "Today" button.
    pub async fn on_today(&self, today: NaiveDate) {
        self.criteria.borrow_mut().date = today;
        self.load_list().await;
    }
}
