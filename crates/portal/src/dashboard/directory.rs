use shared_types::{Doctor, DoctorFilter};
use std::cell::Cell;
use std::rc::Rc;

use crate::api::HospitalApi;
use crate::navigation::Notifier;
use crate::sequence::RequestSequence;
use crate::view::{ListState, ListView};

pub const NO_DOCTORS: &str = "No doctors found.";
pub const NO_FILTERED_DOCTORS: &str = "No doctors found with the given filters.";
pub const DOCTORS_LOAD_FAILED: &str = "Failed to load doctors. Please try again later.";

/// Doctor card grid with the name / time / specialty filter bar.
///
/// Shared by the admin and patient dashboards; they differ only in the
/// notice shown when filtering fails.
///
/// A failed filter keeps the grid as it is, unless nothing has been shown
/// yet; then the load failure is rendered so the grid never sits on
/// "Loading..." with no request outstanding.
pub struct DoctorDirectory {
    api: Rc<dyn HospitalApi>,
    view: Rc<dyn ListView<Doctor>>,
    notifier: Rc<dyn Notifier>,
    filter_failed_notice: &'static str,
    sequence: RequestSequence,
    rendered: Cell<bool>,
}

impl DoctorDirectory {
    pub fn new(
        api: Rc<dyn HospitalApi>,
        view: Rc<dyn ListView<Doctor>>,
        notifier: Rc<dyn Notifier>,
        filter_failed_notice: &'static str,
    ) -> Self {
        Self {
            api,
            view,
            notifier,
            filter_failed_notice,
            sequence: RequestSequence::new(),
            rendered: Cell::new(false),
        }
    }

    /// Fetch every doctor and render the grid.
    pub async fn load_list(&self) {
        let ticket = self.sequence.begin();
        let result = self.api.list_doctors().await;
        if !self.sequence.is_current(ticket) {
            tracing::debug!("discarding superseded doctor list response");
            return;
        }

        match result {
            Ok(doctors) => self.show(ListState::from_items(doctors, NO_DOCTORS)),
            Err(e) => {
                tracing::error!(error = %e, "failed to load doctors");
                self.show(ListState::Failed(DOCTORS_LOAD_FAILED.to_string()));
            }
        }
    }

    /// Re-query with the current filter inputs.
    ///
    /// An empty filter is the unfiltered load.
    pub async fn on_filter_change(&self, filter: DoctorFilter) {
        if filter.is_empty() {
            return self.load_list().await;
        }

        let ticket = self.sequence.begin();
        let result = self.api.filter_doctors(&filter).await;
        if !self.sequence.is_current(ticket) {
            tracing::debug!(?filter, "discarding superseded doctor filter response");
            return;
        }

        match result {
            Ok(doctors) => self.show(ListState::from_items(doctors, NO_FILTERED_DOCTORS)),
            Err(e) => {
                tracing::error!(error = %e, ?filter, "failed to filter doctors");
                self.notifier.alert(self.filter_failed_notice);
                if !self.rendered.get() {
                    self.show(ListState::Failed(DOCTORS_LOAD_FAILED.to_string()));
                }
            }
        }
    }

    fn show(&self, state: ListState<Doctor>) {
        self.rendered.set(true);
        self.view.show(state);
    }
}
