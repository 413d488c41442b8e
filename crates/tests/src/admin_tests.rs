use portal::{
    AdminDashboard, ListState, ModalHost, ModalKind, ADMIN_FILTER_FAILED, ADMIN_LOGIN_REQUIRED,
    DOCTORS_LOAD_FAILED, DOCTOR_ADDED, DOCTOR_ADD_FAILED, NO_DOCTORS, NO_FILTERED_DOCTORS,
};
use pretty_assertions::assert_eq;
use shared_types::{ApiResponse, AppError, AppErrorKind, Doctor, DoctorFilter, Role};
use std::rc::Rc;

use crate::common::{doctor, new_doctor, Call, Harness, RecordingView};

fn dashboard(h: &Harness) -> (AdminDashboard, Rc<RecordingView<Doctor>>) {
    let view = Rc::new(RecordingView::default());
    let dashboard = AdminDashboard::new(
        h.api.clone(),
        h.session.clone(),
        view.clone(),
        h.notifier.clone(),
        h.modal.clone(),
    );
    (dashboard, view)
}

#[tokio::test]
async fn test_load_list_renders_cards() {
    let h = Harness::signed_in(Role::Admin, "T");
    let doctors = vec![doctor("Ann Lee", "Cardiologist"), doctor("Bo Kim", "Dentist")];
    *h.api.doctors.borrow_mut() = Ok(doctors.clone());
    let (dashboard, view) = dashboard(&h);

    dashboard.load_list().await;

    assert_eq!(view.last(), Some(ListState::Ready(doctors)));
}

#[tokio::test]
async fn test_empty_directory_shows_message() {
    let h = Harness::signed_in(Role::Admin, "T");
    let (dashboard, view) = dashboard(&h);

    dashboard.load_list().await;

    assert_eq!(view.last(), Some(ListState::Empty(NO_DOCTORS.to_string())));
}

#[tokio::test]
async fn test_load_failure_is_inline() {
    let h = Harness::signed_in(Role::Admin, "T");
    *h.api.doctors.borrow_mut() = Err(AppError::network("offline"));
    let (dashboard, view) = dashboard(&h);

    dashboard.load_list().await;

    assert_eq!(
        view.last(),
        Some(ListState::Failed(DOCTORS_LOAD_FAILED.to_string()))
    );
    assert!(h.notifier.alerts().is_empty());
}

#[tokio::test]
async fn test_empty_filter_is_the_unfiltered_load() {
    let h = Harness::signed_in(Role::Admin, "T");
    let (dashboard, view) = dashboard(&h);

    dashboard
        .on_filter_change(DoctorFilter::from_inputs("  ", "", ""))
        .await;

    assert_eq!(h.api.calls(), vec![Call::ListDoctors]);
    assert_eq!(view.last(), Some(ListState::Empty(NO_DOCTORS.to_string())));
}

#[tokio::test]
async fn test_filter_without_matches_shows_filtered_message() {
    let h = Harness::signed_in(Role::Admin, "T");
    let (dashboard, view) = dashboard(&h);
    let filter = DoctorFilter::from_inputs("zed", "AM", "");

    dashboard.on_filter_change(filter.clone()).await;

    assert_eq!(h.api.calls(), vec![Call::FilterDoctors(filter)]);
    assert_eq!(
        view.last(),
        Some(ListState::Empty(NO_FILTERED_DOCTORS.to_string()))
    );
}

#[tokio::test]
async fn test_filter_failure_alerts_and_keeps_list() {
    let h = Harness::signed_in(Role::Admin, "T");
    let doctors = vec![doctor("Ann Lee", "Cardiologist")];
    *h.api.doctors.borrow_mut() = Ok(doctors.clone());
    *h.api.filtered.borrow_mut() = Err(AppError::from_status(500, "boom"));
    let (dashboard, view) = dashboard(&h);

    dashboard.load_list().await;
    dashboard
        .on_filter_change(DoctorFilter::from_inputs("", "", "dentist"))
        .await;

    assert_eq!(view.renders(), 1);
    assert_eq!(view.last(), Some(ListState::Ready(doctors)));
    assert_eq!(h.notifier.alerts(), vec![ADMIN_FILTER_FAILED.to_string()]);
}

#[tokio::test]
async fn test_first_filter_failure_replaces_loading() {
    let h = Harness::signed_in(Role::Admin, "T");
    *h.api.filtered.borrow_mut() = Err(AppError::from_status(500, "boom"));
    let (dashboard, view) = dashboard(&h);

    dashboard
        .on_filter_change(DoctorFilter::from_inputs("", "", "dentist"))
        .await;

    assert_eq!(
        view.last(),
        Some(ListState::Failed(DOCTORS_LOAD_FAILED.to_string()))
    );
    assert_eq!(h.notifier.alerts(), vec![ADMIN_FILTER_FAILED.to_string()]);
}

#[tokio::test]
async fn test_add_doctor_requires_token() {
    let h = Harness::new();
    let (dashboard, _view) = dashboard(&h);

    assert!(!dashboard.add_doctor(new_doctor("rosa@clinic.org")).await);

    assert!(h.api.calls().is_empty());
    assert_eq!(h.notifier.alerts(), vec![ADMIN_LOGIN_REQUIRED.to_string()]);
}

#[tokio::test]
async fn test_add_doctor_success_closes_modal_and_reloads() {
    let h = Harness::signed_in(Role::Admin, "T");
    h.modal.open(ModalKind::AddDoctor);
    *h.api.doctors.borrow_mut() = Ok(vec![doctor("Rosa Diaz", "Cardiologist")]);
    let (dashboard, view) = dashboard(&h);

    assert!(dashboard.add_doctor(new_doctor("rosa@clinic.org")).await);

    assert_eq!(
        h.api.calls(),
        vec![
            Call::SaveDoctor {
                email: "rosa@clinic.org".into(),
                token: "T".into()
            },
            Call::ListDoctors,
        ]
    );
    assert_eq!(h.notifier.alerts(), vec![DOCTOR_ADDED.to_string()]);
    assert!(!h.modal.borrow().is_open());
    assert_eq!(view.last().map(|s| s.items().len()), Some(1));
}

#[tokio::test]
async fn test_add_doctor_conflict_shows_backend_message() {
    let h = Harness::signed_in(Role::Admin, "T");
    h.modal.open(ModalKind::AddDoctor);
    *h.api.save.borrow_mut() = Ok(ApiResponse::failed("Doctor already exists"));
    let (dashboard, _view) = dashboard(&h);

    assert!(!dashboard.add_doctor(new_doctor("rosa@clinic.org")).await);

    assert_eq!(h.notifier.alerts(), vec!["Doctor already exists".to_string()]);
    assert!(h.modal.borrow().is_open());
}

#[tokio::test]
async fn test_add_doctor_blank_rejection_uses_fallback() {
    let h = Harness::signed_in(Role::Admin, "T");
    *h.api.save.borrow_mut() = Ok(ApiResponse::failed(""));
    let (dashboard, _view) = dashboard(&h);

    dashboard.add_doctor(new_doctor("rosa@clinic.org")).await;

    assert_eq!(h.notifier.alerts(), vec![DOCTOR_ADD_FAILED.to_string()]);
}

#[tokio::test]
async fn test_add_doctor_transport_error_is_friendly() {
    let h = Harness::signed_in(Role::Admin, "T");
    let error = AppError::network("connection reset");
    assert_eq!(error.kind, AppErrorKind::Network);
    *h.api.save.borrow_mut() = Err(error.clone());
    let (dashboard, _view) = dashboard(&h);

    assert!(!dashboard.add_doctor(new_doctor("rosa@clinic.org")).await);

    assert_eq!(h.notifier.alerts(), vec![error.friendly_message()]);
}
