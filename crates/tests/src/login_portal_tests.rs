use portal::{LoginPortal, Page, SessionStore, INVALID_ADMIN, INVALID_DOCTOR, LOGIN_FAILED};
use pretty_assertions::assert_eq;
use shared_types::{AdminCredentials, ApiResponse, AppError, Login, Role, ROLE_KEY, TOKEN_KEY};

use crate::common::{Call, Harness};

fn portal(h: &Harness) -> LoginPortal {
    LoginPortal::new(
        h.api.clone(),
        h.session.clone(),
        h.navigator.clone(),
        h.notifier.clone(),
    )
}

fn admin() -> AdminCredentials {
    AdminCredentials {
        username: "admin".into(),
        password: "admin@1234".into(),
    }
}

#[tokio::test]
async fn test_admin_login_persists_session_and_navigates() {
    let h = Harness::new();
    *h.api.login.borrow_mut() = Ok(ApiResponse::ok("Login successful", "T".to_string()));

    assert!(portal(&h).admin_login(admin()).await);

    assert_eq!(h.session.get(ROLE_KEY).as_deref(), Some("admin"));
    assert_eq!(h.session.get(TOKEN_KEY).as_deref(), Some("T"));
    assert_eq!(h.navigator.pages(), vec![Page::AdminDashboard]);
    assert_eq!(h.api.calls(), vec![Call::AdminLogin("admin".into())]);
    assert!(h.notifier.alerts().is_empty());
}

#[tokio::test]
async fn test_rejected_admin_login_writes_nothing() {
    let h = Harness::new();

    assert!(!portal(&h).admin_login(admin()).await);

    assert!(h.session.is_empty());
    assert!(h.navigator.pages().is_empty());
    assert_eq!(h.notifier.alerts(), vec![INVALID_ADMIN.to_string()]);
}

#[tokio::test]
async fn test_rejected_doctor_login_writes_nothing() {
    let h = Harness::new();
    let login = Login {
        email: "lee@clinic.org".into(),
        password: "wrong".into(),
    };

    assert!(!portal(&h).doctor_login(login).await);

    assert!(h.session.is_empty());
    assert_eq!(h.notifier.alerts(), vec![INVALID_DOCTOR.to_string()]);
}

#[tokio::test]
async fn test_doctor_login_goes_to_doctor_dashboard() {
    let h = Harness::new();
    *h.api.login.borrow_mut() = Ok(ApiResponse::ok("Login successful", "D1".to_string()));
    let login = Login {
        email: "lee@clinic.org".into(),
        password: "pw".into(),
    };

    assert!(portal(&h).doctor_login(login).await);

    assert_eq!(h.session.session().role, Some(Role::Doctor));
    assert_eq!(h.session.token().as_deref(), Some("D1"));
    assert_eq!(h.navigator.pages(), vec![Page::DoctorDashboard]);
}

#[tokio::test]
async fn test_transport_failure_shows_generic_notice() {
    let h = Harness::new();
    *h.api.login.borrow_mut() = Err(AppError::network("connection refused"));

    assert!(!portal(&h).admin_login(admin()).await);

    assert!(h.session.is_empty());
    assert_eq!(h.notifier.alerts(), vec![LOGIN_FAILED.to_string()]);
}

#[test]
fn test_select_patient_role() {
    let h = Harness::new();
    portal(&h).select_role(Role::Patient);
    assert_eq!(h.session.get(ROLE_KEY).as_deref(), Some("patient"));
    assert_eq!(h.session.get(TOKEN_KEY), None);
    assert_eq!(h.navigator.pages(), vec![Page::PatientDashboard]);
}
