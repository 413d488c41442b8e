use shared_types::{Role, ROLE_KEY, TOKEN_KEY};
use std::rc::Rc;

use crate::modal::{ModalHost, ModalKind};
use crate::navigation::{Navigator, Notifier, Page};
use crate::session::SessionStore;

/// Notice shown when a privileged role has no credential.
pub const SESSION_EXPIRED_NOTICE: &str = "Session expired or invalid login. Please log in again.";

/// A control in the header's navigation area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    AddDoctor,
    DoctorHome,
    PatientHome,
    Appointments,
    Login,
    SignUp,
    Logout,
    PatientLogout,
}

impl HeaderAction {
    pub fn label(&self) -> &'static str {
        match self {
            HeaderAction::AddDoctor => "Add Doctor",
            HeaderAction::DoctorHome | HeaderAction::PatientHome => "Home",
            HeaderAction::Appointments => "Appointments",
            HeaderAction::Login => "Login",
            HeaderAction::SignUp => "Sign Up",
            HeaderAction::Logout | HeaderAction::PatientLogout => "Logout",
        }
    }

    /// Logout controls render as links, the rest as buttons.
    pub fn is_link(&self) -> bool {
        matches!(self, HeaderAction::Logout | HeaderAction::PatientLogout)
    }
}

/// Navigation variant chosen from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderView {
    /// Logo only: landing page, unknown role, or an expired session.
    LogoOnly,
    Admin,
    Doctor,
    Patient,
    LoggedPatient,
}

impl HeaderView {
    fn for_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::Admin) => HeaderView::Admin,
            Some(Role::Doctor) => HeaderView::Doctor,
            Some(Role::Patient) => HeaderView::Patient,
            Some(Role::LoggedPatient) => HeaderView::LoggedPatient,
            None => HeaderView::LogoOnly,
        }
    }

    pub fn actions(&self) -> &'static [HeaderAction] {
        match self {
            HeaderView::LogoOnly => &[],
            HeaderView::Admin => &[HeaderAction::AddDoctor, HeaderAction::Logout],
            HeaderView::Doctor => &[HeaderAction::DoctorHome, HeaderAction::Logout],
            HeaderView::Patient => &[HeaderAction::Login, HeaderAction::SignUp],
            HeaderView::LoggedPatient => &[
                HeaderAction::PatientHome,
                HeaderAction::Appointments,
                HeaderAction::PatientLogout,
            ],
        }
    }
}

/// Session gate and navigation bar shared by every page.
pub struct HeaderController {
    session: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
    modal: Rc<dyn ModalHost>,
}

impl HeaderController {
    pub fn new(
        session: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
        modal: Rc<dyn ModalHost>,
    ) -> Self {
        Self {
            session,
            navigator,
            notifier,
            modal,
        }
    }

    /// Navigation `render` would pick for `page`, without touching the
    /// session, the router or the notifier.
    pub fn preview(&self, page: Page) -> HeaderView {
        if page == Page::Landing {
            return HeaderView::LogoOnly;
        }
        let session = self.session.session();
        if session.is_expired() {
            HeaderView::LogoOnly
        } else {
            HeaderView::for_role(session.role)
        }
    }

    /// Validate the session for `page` and pick the navigation to show.
    ///
    /// Landing on the root clears the session. A privileged role without a
    /// token loses its role, triggers a blocking notice and sends the user
    /// back to the landing page.
    pub fn render(&self, page: Page) -> HeaderView {
        if page == Page::Landing {
            self.session.clear();
            return HeaderView::LogoOnly;
        }

        let session = self.session.session();
        if session.is_expired() {
            tracing::warn!(role = ?session.role, "role without credential, resetting session");
            self.session.remove(ROLE_KEY);
            self.notifier.alert(SESSION_EXPIRED_NOTICE);
            self.navigator.navigate(Page::Landing);
            return HeaderView::LogoOnly;
        }

        HeaderView::for_role(session.role)
    }

    pub fn activate(&self, action: HeaderAction) {
        match action {
            HeaderAction::AddDoctor => self.modal.open(ModalKind::AddDoctor),
            HeaderAction::Login => self.modal.open(ModalKind::PatientLogin),
            HeaderAction::SignUp => self.modal.open(ModalKind::PatientSignup),
            HeaderAction::DoctorHome => self.navigator.navigate(Page::DoctorDashboard),
            HeaderAction::PatientHome => self.navigator.navigate(Page::LoggedPatientDashboard),
            HeaderAction::Appointments => self.navigator.navigate(Page::PatientAppointments),
            HeaderAction::Logout => self.logout(),
            HeaderAction::PatientLogout => self.logout_patient(),
        }
    }

    /// Forget the credential and role, then return to the landing page.
    pub fn logout(&self) {
        self.session.remove(TOKEN_KEY);
        self.session.remove(ROLE_KEY);
        self.navigator.navigate(Page::Landing);
    }

    /// Forget the credential but stay a browsing patient.
    pub fn logout_patient(&self) {
        self.session.remove(TOKEN_KEY);
        self.session.set_role(Role::Patient);
        self.navigator.navigate(Page::PatientDashboard);
    }
}
