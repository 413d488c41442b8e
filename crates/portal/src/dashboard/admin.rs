use shared_types::{Doctor, DoctorFilter, NewDoctor};
use std::rc::Rc;

use super::directory::DoctorDirectory;
use crate::api::HospitalApi;
use crate::modal::ModalHost;
use crate::navigation::Notifier;
use crate::session::SessionStore;
use crate::view::ListView;

pub const ADMIN_LOGIN_REQUIRED: &str = "Admin login required.";
pub const DOCTOR_ADDED: &str = "Doctor added successfully.";
pub const DOCTOR_ADD_FAILED: &str = "Failed to add doctor.";
pub const ADMIN_FILTER_FAILED: &str = "Something went wrong while filtering doctors.";

/// Admin dashboard: doctor directory plus the "Add Doctor" form.
pub struct AdminDashboard {
    directory: DoctorDirectory,
    api: Rc<dyn HospitalApi>,
    session: Rc<dyn SessionStore>,
    notifier: Rc<dyn Notifier>,
    modal: Rc<dyn ModalHost>,
}

impl AdminDashboard {
    pub fn new(
        api: Rc<dyn HospitalApi>,
        session: Rc<dyn SessionStore>,
        view: Rc<dyn ListView<Doctor>>,
        notifier: Rc<dyn Notifier>,
        modal: Rc<dyn ModalHost>,
    ) -> Self {
        let directory =
            DoctorDirectory::new(api.clone(), view, notifier.clone(), ADMIN_FILTER_FAILED);
        Self {
            directory,
            api,
            session,
            notifier,
            modal,
        }
    }

    pub async fn load_list(&self) {
        self.directory.load_list().await;
    }

    pub async fn on_filter_change(&self, filter: DoctorFilter) {
        self.directory.on_filter_change(filter).await;
    }

    /// Submit the add-doctor form. Returns whether the doctor was created.
    ///
    /// On success the modal closes and the directory reloads.
    pub async fn add_doctor(&self, doctor: NewDoctor) -> bool {
        let Some(token) = self.session.token() else {
            self.notifier.alert(ADMIN_LOGIN_REQUIRED);
            return false;
        };

        match self.api.save_doctor(&doctor, &token).await {
            Ok(resp) if resp.success => {
                tracing::info!(email = %doctor.email, "doctor added");
                self.notifier.alert(DOCTOR_ADDED);
                self.modal.close();
                self.load_list().await;
                true
            }
            Ok(resp) => {
                let message = if resp.message.trim().is_empty() {
                    DOCTOR_ADD_FAILED
                } else {
                    resp.message.as_str()
                };
                self.notifier.alert(message);
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to add doctor");
                self.notifier.alert(&e.friendly_message());
                false
            }
        }
    }
}
