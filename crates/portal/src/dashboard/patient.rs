use shared_types::{ApiResponse, Doctor, DoctorFilter, Login, PatientSignup, Role};
use std::rc::Rc;

use super::directory::DoctorDirectory;
use crate::api::HospitalApi;
use crate::auth::complete_login;
use crate::modal::ModalHost;
use crate::navigation::{Navigator, Notifier};
use crate::session::SessionStore;
use crate::view::ListView;

pub const PATIENT_FILTER_FAILED: &str = "❌ An error occurred while filtering doctors.";
pub const SIGNUP_FAILED: &str = "❌ An error occurred while signing up.";
pub const INVALID_PATIENT: &str = "❌ Invalid credentials!";
pub const PATIENT_LOGIN_FAILED: &str = "❌ Failed to login. Please try again later.";

/// Patient dashboard: doctor directory plus sign-up and login forms.
///
/// Serves both the anonymous and the logged-in patient home pages.
pub struct PatientDashboard {
    directory: DoctorDirectory,
    api: Rc<dyn HospitalApi>,
    session: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
    modal: Rc<dyn ModalHost>,
}

impl PatientDashboard {
    pub fn new(
        api: Rc<dyn HospitalApi>,
        session: Rc<dyn SessionStore>,
        view: Rc<dyn ListView<Doctor>>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
        modal: Rc<dyn ModalHost>,
    ) -> Self {
        let directory =
            DoctorDirectory::new(api.clone(), view, notifier.clone(), PATIENT_FILTER_FAILED);
        Self {
            directory,
            api,
            session,
            navigator,
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

    /// Register a patient. On success the modal closes and the page reloads.
    pub async fn signup(&self, signup: PatientSignup) -> bool {
        match self.api.patient_signup(&signup).await {
            Ok(resp) if resp.success => {
                self.notifier.alert(&resp.message);
                self.modal.close();
                self.navigator.reload();
                true
            }
            Ok(resp) => {
                self.notifier.alert(&resp.message);
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "signup failed");
                self.notifier.alert(SIGNUP_FAILED);
                false
            }
        }
    }

    /// Log a patient in, upgrading the role to `loggedPatient`.
    pub async fn login(&self, login: Login) -> bool {
        match self.api.patient_login(&login).await {
            Ok(ApiResponse {
                success: true,
                data: Some(token),
                ..
            }) => {
                complete_login(
                    self.session.as_ref(),
                    self.navigator.as_ref(),
                    Role::LoggedPatient,
                    &token,
                );
                true
            }
            Ok(resp) => {
                tracing::warn!(message = %resp.message, "patient login rejected");
                self.notifier.alert(INVALID_PATIENT);
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "patient login failed");
                self.notifier.alert(PATIENT_LOGIN_FAILED);
                false
            }
        }
    }
}
