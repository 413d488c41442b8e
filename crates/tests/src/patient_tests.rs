use portal::{
    ListState, ModalHost, ModalKind, Page, PatientDashboard, SessionStore, INVALID_PATIENT,
    NO_FILTERED_DOCTORS, PATIENT_FILTER_FAILED, PATIENT_LOGIN_FAILED, SIGNUP_FAILED,
};
use pretty_assertions::assert_eq;
use shared_types::{
    ApiResponse, AppError, Doctor, DoctorFilter, Login, PatientSignup, Role, ROLE_KEY, TOKEN_KEY,
};
use std::rc::Rc;

use crate::common::{doctor, Call, Harness, RecordingView};

fn dashboard(h: &Harness) -> (PatientDashboard, Rc<RecordingView<Doctor>>) {
    let view = Rc::new(RecordingView::default());
    let dashboard = PatientDashboard::new(
        h.api.clone(),
        h.session.clone(),
        view.clone(),
        h.navigator.clone(),
        h.notifier.clone(),
        h.modal.clone(),
    );
    (dashboard, view)
}

fn anonymous() -> Harness {
    Harness::with_store(portal::MemorySessionStore::with_session(Role::Patient, None))
}

fn signup() -> PatientSignup {
    PatientSignup {
        name: "Omar Haddad".into(),
        email: "omar@mail.org".into(),
        password: "secret12".into(),
        phone: "5550177".into(),
        address: "12 Elm St".into(),
    }
}

fn login() -> Login {
    Login {
        email: "omar@mail.org".into(),
        password: "secret12".into(),
    }
}

#[tokio::test]
async fn test_filter_by_specialty_renders_matches() {
    let h = anonymous();
    let matches = vec![doctor("Ann Lee", "Dentist")];
    *h.api.filtered.borrow_mut() = Ok(matches.clone());
    let (dashboard, view) = dashboard(&h);
    let filter = DoctorFilter::from_inputs("", "", "dentist");

    dashboard.on_filter_change(filter.clone()).await;

    assert_eq!(h.api.calls(), vec![Call::FilterDoctors(filter)]);
    assert_eq!(view.last(), Some(ListState::Ready(matches)));
}

#[tokio::test]
async fn test_filter_empty_result() {
    let h = anonymous();
    let (dashboard, view) = dashboard(&h);

    dashboard
        .on_filter_change(DoctorFilter::from_inputs("nobody", "PM", "ent"))
        .await;

    assert_eq!(
        view.last(),
        Some(ListState::Empty(NO_FILTERED_DOCTORS.to_string()))
    );
}

#[tokio::test]
async fn test_filter_error_alert() {
    let h = anonymous();
    *h.api.filtered.borrow_mut() = Err(AppError::network("offline"));
    let (dashboard, _view) = dashboard(&h);

    dashboard
        .on_filter_change(DoctorFilter::from_inputs("a", "", ""))
        .await;

    assert_eq!(h.notifier.alerts(), vec![PATIENT_FILTER_FAILED.to_string()]);
}

#[tokio::test]
async fn test_signup_success_closes_modal_and_reloads() {
    let h = anonymous();
    h.modal.open(ModalKind::PatientSignup);
    let (dashboard, _view) = dashboard(&h);

    assert!(dashboard.signup(signup()).await);

    assert_eq!(h.notifier.alerts(), vec!["Signup successful.".to_string()]);
    assert!(!h.modal.borrow().is_open());
    assert_eq!(h.navigator.reloads.get(), 1);
    assert_eq!(h.api.calls(), vec![Call::PatientSignup("omar@mail.org".into())]);
}

#[tokio::test]
async fn test_signup_rejection_shows_backend_message() {
    let h = anonymous();
    h.modal.open(ModalKind::PatientSignup);
    *h.api.signup.borrow_mut() = Ok(ApiResponse::failed("Patient with email id or phone no already exist"));
    let (dashboard, _view) = dashboard(&h);

    assert!(!dashboard.signup(signup()).await);

    assert_eq!(
        h.notifier.alerts(),
        vec!["Patient with email id or phone no already exist".to_string()]
    );
    assert!(h.modal.borrow().is_open());
    assert_eq!(h.navigator.reloads.get(), 0);
}

#[tokio::test]
async fn test_signup_transport_failure() {
    let h = anonymous();
    *h.api.signup.borrow_mut() = Err(AppError::network("offline"));
    let (dashboard, _view) = dashboard(&h);

    assert!(!dashboard.signup(signup()).await);

    assert_eq!(h.notifier.alerts(), vec![SIGNUP_FAILED.to_string()]);
}

#[tokio::test]
async fn test_login_upgrades_to_logged_patient() {
    let h = anonymous();
    *h.api.login.borrow_mut() = Ok(ApiResponse::ok("Login successful", "P1".to_string()));
    let (dashboard, _view) = dashboard(&h);

    assert!(dashboard.login(login()).await);

    assert_eq!(h.session.get(ROLE_KEY).as_deref(), Some("loggedPatient"));
    assert_eq!(h.session.get(TOKEN_KEY).as_deref(), Some("P1"));
    assert_eq!(h.navigator.pages(), vec![Page::LoggedPatientDashboard]);
}

#[tokio::test]
async fn test_rejected_login_writes_nothing() {
    let h = anonymous();
    let (dashboard, _view) = dashboard(&h);

    assert!(!dashboard.login(login()).await);

    assert_eq!(h.session.get(ROLE_KEY).as_deref(), Some("patient"));
    assert_eq!(h.session.get(TOKEN_KEY), None);
    assert!(h.navigator.pages().is_empty());
    assert_eq!(h.notifier.alerts(), vec![INVALID_PATIENT.to_string()]);
}

#[tokio::test]
async fn test_login_transport_failure() {
    let h = anonymous();
    *h.api.login.borrow_mut() = Err(AppError::network("offline"));
    let (dashboard, _view) = dashboard(&h);

    assert!(!dashboard.login(login()).await);

    assert_eq!(h.notifier.alerts(), vec![PATIENT_LOGIN_FAILED.to_string()]);
}
