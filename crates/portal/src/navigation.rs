use shared_types::Role;

/// Pages the portal can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    AdminDashboard,
    DoctorDashboard,
    PatientDashboard,
    LoggedPatientDashboard,
    PatientAppointments,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Landing => "/",
            Page::AdminDashboard => "/admin",
            Page::DoctorDashboard => "/doctor",
            Page::PatientDashboard => "/patient",
            Page::LoggedPatientDashboard => "/patient/home",
            Page::PatientAppointments => "/patient/appointments",
        }
    }

    /// Dashboard a role lands on after selecting it or logging in.
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Admin => Page::AdminDashboard,
            Role::Doctor => Page::DoctorDashboard,
            Role::Patient => Page::PatientDashboard,
            Role::LoggedPatient => Page::LoggedPatientDashboard,
        }
    }
}

/// Moves the user to another page.
pub trait Navigator {
    fn navigate(&self, page: Page);

    /// Re-enter the current page from scratch.
    fn reload(&self);
}

/// Blocking, user-visible notices.
pub trait Notifier {
    fn alert(&self, message: &str);
}
