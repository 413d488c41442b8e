use chrono::NaiveDate;
use portal::{DoctorDashboard, ListState, APPOINTMENTS_LOAD_FAILED, NO_APPOINTMENTS};
use pretty_assertions::assert_eq;
use shared_types::{AppError, Appointment, AppointmentQuery, Role};
use std::rc::Rc;

use crate::common::{appointment, Call, Harness, RecordingView};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
}

fn dashboard(h: &Harness) -> (DoctorDashboard, Rc<RecordingView<Appointment>>) {
    let view = Rc::new(RecordingView::default());
    let dashboard = DoctorDashboard::new(h.api.clone(), h.session.clone(), view.clone(), day(4));
    (dashboard, view)
}

#[tokio::test]
async fn test_initial_load_uses_today_and_token() {
    let h = Harness::signed_in(Role::Doctor, "D1");
    let rows = vec![appointment("Omar Haddad", "Dr. Lee")];
    *h.api.appointments.borrow_mut() = Ok(rows.clone());
    let (dashboard, view) = dashboard(&h);

    dashboard.load_list().await;

    assert_eq!(
        h.api.calls(),
        vec![Call::ListAppointments(
            AppointmentQuery::new(day(4), ""),
            "D1".into()
        )]
    );
    assert_eq!(view.last(), Some(ListState::Ready(rows)));
}

#[tokio::test]
async fn test_no_appointments_for_date() {
    let h = Harness::signed_in(Role::Doctor, "D1");
    let (dashboard, view) = dashboard(&h);

    dashboard.on_date_change("2026-05-10").await;

    assert_eq!(dashboard.selected_date(), day(10));
    assert_eq!(
        view.last(),
        Some(ListState::Empty(NO_APPOINTMENTS.to_string()))
    );
}

#[tokio::test]
async fn test_search_then_today_keeps_name() {
    let h = Harness::signed_in(Role::Doctor, "D1");
    let (dashboard, _view) = dashboard(&h);

    dashboard.on_search("omar").await;
    dashboard.on_date_change("2026-05-20").await;
    dashboard.on_today(day(4)).await;

    let queries: Vec<AppointmentQuery> = h
        .api
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            Call::ListAppointments(query, _) => Some(query),
            _ => None,
        })
        .collect();
    assert_eq!(
        queries,
        vec![
            AppointmentQuery::new(day(4), "omar"),
            AppointmentQuery::new(day(20), "omar"),
            AppointmentQuery::new(day(4), "omar"),
        ]
    );
}

#[tokio::test]
async fn test_clearing_search_drops_name() {
    let h = Harness::signed_in(Role::Doctor, "D1");
    let (dashboard, _view) = dashboard(&h);

    dashboard.on_search("omar").await;
    dashboard.on_search("").await;

    assert_eq!(dashboard.patient_name(), None);
}

#[tokio::test]
async fn test_failure_is_rendered_inline() {
    let h = Harness::signed_in(Role::Doctor, "D1");
    *h.api.appointments.borrow_mut() = Err(AppError::from_status(401, "Invalid token"));
    let (dashboard, view) = dashboard(&h);

    dashboard.load_list().await;

    assert_eq!(
        view.last(),
        Some(ListState::Failed(APPOINTMENTS_LOAD_FAILED.to_string()))
    );
    assert!(h.notifier.alerts().is_empty());
}

#[tokio::test]
async fn test_cleared_date_picker_keeps_selected_day() {
    let h = Harness::signed_in(Role::Doctor, "D1");
    let (dashboard, view) = dashboard(&h);

    assert_eq!(dashboard.on_date_change("2026-05-12").await, day(12));
    assert_eq!(dashboard.on_date_change("").await, day(12));

    assert_eq!(h.api.calls().len(), 1);
    assert_eq!(view.renders(), 1);
}
