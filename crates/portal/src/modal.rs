use std::cell::RefCell;

/// Forms the shared overlay can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    AddDoctor,
    AdminLogin,
    DoctorLogin,
    PatientLogin,
    PatientSignup,
}

impl ModalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalKind::AddDoctor => "addDoctor",
            ModalKind::AdminLogin => "adminLogin",
            ModalKind::DoctorLogin => "doctorLogin",
            ModalKind::PatientLogin => "patientLogin",
            ModalKind::PatientSignup => "patientSignup",
        }
    }

    /// Parse a modal key, accepting the legacy `loginPatient` /
    /// `signupPatient` spellings.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "addDoctor" => Some(ModalKind::AddDoctor),
            "adminLogin" => Some(ModalKind::AdminLogin),
            "doctorLogin" => Some(ModalKind::DoctorLogin),
            "patientLogin" | "loginPatient" => Some(ModalKind::PatientLogin),
            "patientSignup" | "signupPatient" => Some(ModalKind::PatientSignup),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ModalKind::AddDoctor => "Add Doctor",
            ModalKind::AdminLogin => "Admin Login",
            ModalKind::DoctorLogin => "Doctor Login",
            ModalKind::PatientLogin => "Patient Login",
            ModalKind::PatientSignup => "Patient Sign Up",
        }
    }
}

/// Visibility of the single shared overlay. At most one form is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    open: Option<ModalKind>,
}

impl ModalState {
    pub fn current(&self) -> Option<ModalKind> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Show the overlay with the form named by `key`.
    ///
    /// Unknown keys leave the state untouched and return `false`.
    pub fn open_modal(&mut self, key: &str) -> bool {
        match ModalKind::from_key(key) {
            Some(kind) => {
                self.open = Some(kind);
                true
            }
            None => {
                tracing::warn!(key, "unknown modal key");
                false
            }
        }
    }

    pub fn show(&mut self, kind: ModalKind) {
        self.open = Some(kind);
    }

    pub fn close_modal(&mut self) {
        self.open = None;
    }
}

/// Where controllers open and close the overlay.
pub trait ModalHost {
    fn open(&self, kind: ModalKind);
    fn close(&self);
}

impl ModalHost for RefCell<ModalState> {
    fn open(&self, kind: ModalKind) {
        self.borrow_mut().show(kind);
    }

    fn close(&self) {
        self.borrow_mut().close_modal();
    }
}
