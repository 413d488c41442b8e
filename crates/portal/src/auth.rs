use shared_types::{AdminCredentials, ApiResponse, AppError, Login, Role};
use std::rc::Rc;

use crate::api::HospitalApi;
use crate::navigation::{Navigator, Notifier, Page};
use crate::session::SessionStore;

pub const INVALID_ADMIN: &str = "Invalid admin credentials!";
pub const INVALID_DOCTOR: &str = "Invalid doctor credentials!";
pub const LOGIN_FAILED: &str = "Something went wrong. Please try again.";

/// Persist a fresh credential and role, then go to that role's dashboard.
pub(crate) fn complete_login(
    session: &dyn SessionStore,
    navigator: &dyn Navigator,
    role: Role,
    token: &str,
) {
    session.set_token(token);
    session.set_role(role);
    navigator.navigate(Page::home_for(role));
}

/// Landing-page role selection and the admin / doctor login forms.
pub struct LoginPortal {
    api: Rc<dyn HospitalApi>,
    session: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
}

impl LoginPortal {
    pub fn new(
        api: Rc<dyn HospitalApi>,
        session: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            session,
            navigator,
            notifier,
        }
    }

    /// Store the role and open its dashboard.
    pub fn select_role(&self, role: Role) {
        self.session.set_role(role);
        self.navigator.navigate(Page::home_for(role));
    }

    pub async fn admin_login(&self, credentials: AdminCredentials) -> bool {
        let result = self.api.admin_login(&credentials).await;
        self.finish(result, Role::Admin, INVALID_ADMIN)
    }

    pub async fn doctor_login(&self, login: Login) -> bool {
        let result = self.api.doctor_login(&login).await;
        self.finish(result, Role::Doctor, INVALID_DOCTOR)
    }

    fn finish(
        &self,
        result: Result<ApiResponse<String>, AppError>,
        role: Role,
        rejected_notice: &str,
    ) -> bool {
        match result {
            Ok(ApiResponse {
                success: true,
                data: Some(token),
                ..
            }) => {
                tracing::info!(role = role.as_str(), "login succeeded");
                complete_login(self.session.as_ref(), self.navigator.as_ref(), role, &token);
                true
            }
            Ok(resp) => {
                tracing::warn!(role = role.as_str(), message = %resp.message, "login rejected");
                self.notifier.alert(rejected_notice);
                false
            }
            Err(e) => {
                tracing::error!(error = %e, role = role.as_str(), "login request failed");
                self.notifier.alert(LOGIN_FAILED);
                false
            }
        }
    }
}
