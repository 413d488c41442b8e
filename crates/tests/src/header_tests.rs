use portal::{HeaderAction, HeaderController, HeaderView, ModalKind, Page, SessionStore};
use pretty_assertions::assert_eq;
use shared_types::{Role, ROLE_KEY, TOKEN_KEY};

use crate::common::Harness;

fn header(h: &Harness) -> HeaderController {
    HeaderController::new(
        h.session.clone(),
        h.navigator.clone(),
        h.notifier.clone(),
        h.modal.clone(),
    )
}

#[test]
fn test_privileged_role_without_token_is_reset() {
    for role in [Role::Admin, Role::Doctor, Role::LoggedPatient] {
        let h = Harness::with_store(portal::MemorySessionStore::with_session(role, None));

        let view = header(&h).render(Page::home_for(role));

        assert_eq!(view, HeaderView::LogoOnly, "role {role:?}");
        assert_eq!(h.session.get(ROLE_KEY), None);
        assert_eq!(h.navigator.pages(), vec![Page::Landing]);
        assert_eq!(
            h.notifier.alerts(),
            vec![portal::SESSION_EXPIRED_NOTICE.to_string()]
        );
    }
}

#[test]
fn test_blank_token_counts_as_missing() {
    let h = Harness::signed_in(Role::Doctor, "   ");
    assert_eq!(header(&h).render(Page::DoctorDashboard), HeaderView::LogoOnly);
    assert_eq!(h.navigator.pages(), vec![Page::Landing]);
}

#[test]
fn test_valid_sessions_pick_role_navigation() {
    let cases = [
        (Role::Admin, HeaderView::Admin),
        (Role::Doctor, HeaderView::Doctor),
        (Role::LoggedPatient, HeaderView::LoggedPatient),
    ];
    for (role, expected) in cases {
        let h = Harness::signed_in(role, "T");
        assert_eq!(header(&h).render(Page::home_for(role)), expected);
        assert!(h.navigator.pages().is_empty());
        assert!(h.notifier.alerts().is_empty());
    }
}

#[test]
fn test_anonymous_patient_needs_no_token() {
    let h = Harness::with_store(portal::MemorySessionStore::with_session(Role::Patient, None));
    assert_eq!(header(&h).render(Page::PatientDashboard), HeaderView::Patient);
    assert!(h.notifier.alerts().is_empty());
}

#[test]
fn test_no_role_shows_logo_only() {
    let h = Harness::new();
    assert_eq!(header(&h).render(Page::PatientDashboard), HeaderView::LogoOnly);
    assert!(h.navigator.pages().is_empty());
}

#[test]
fn test_landing_clears_session() {
    let h = Harness::signed_in(Role::Admin, "T");
    assert_eq!(header(&h).render(Page::Landing), HeaderView::LogoOnly);
    assert!(h.session.is_empty());
    assert!(h.navigator.pages().is_empty());
}

#[test]
fn test_logout_clears_both_entries() {
    let h = Harness::signed_in(Role::Admin, "T");
    header(&h).activate(HeaderAction::Logout);
    assert_eq!(h.session.get(TOKEN_KEY), None);
    assert_eq!(h.session.get(ROLE_KEY), None);
    assert_eq!(h.navigator.pages(), vec![Page::Landing]);
}

#[test]
fn test_patient_logout_keeps_patient_role() {
    let h = Harness::signed_in(Role::LoggedPatient, "T");
    header(&h).activate(HeaderAction::PatientLogout);
    assert_eq!(h.session.get(TOKEN_KEY), None);
    assert_eq!(h.session.get(ROLE_KEY).as_deref(), Some("patient"));
    assert_eq!(h.navigator.pages(), vec![Page::PatientDashboard]);
}

#[test]
fn test_header_buttons_open_modals_and_pages() {
    let h = Harness::signed_in(Role::Admin, "T");
    let header = header(&h);

    header.activate(HeaderAction::AddDoctor);
    assert_eq!(h.modal.borrow().current(), Some(ModalKind::AddDoctor));

    header.activate(HeaderAction::SignUp);
    assert_eq!(h.modal.borrow().current(), Some(ModalKind::PatientSignup));

    header.activate(HeaderAction::Appointments);
    header.activate(HeaderAction::PatientHome);
    header.activate(HeaderAction::DoctorHome);
    assert_eq!(
        h.navigator.pages(),
        vec![
            Page::PatientAppointments,
            Page::LoggedPatientDashboard,
            Page::DoctorDashboard
        ]
    );
}

#[test]
fn test_preview_has_no_side_effects() {
    let h = Harness::with_store(portal::MemorySessionStore::with_session(Role::Doctor, None));
    let header = header(&h);

    assert_eq!(header.preview(Page::DoctorDashboard), HeaderView::LogoOnly);
    assert_eq!(h.session.get(ROLE_KEY).as_deref(), Some("doctor"));
    assert!(h.notifier.alerts().is_empty());
    assert!(h.navigator.pages().is_empty());

    assert_eq!(header.render(Page::DoctorDashboard), HeaderView::LogoOnly);
    assert_eq!(h.navigator.pages(), vec![Page::Landing]);
}

#[test]
fn test_preview_matches_render_for_valid_sessions() {
    for role in [Role::Admin, Role::Doctor, Role::LoggedPatient] {
        let h = Harness::signed_in(role, "T");
        let header = header(&h);
        assert_eq!(
            header.preview(Page::home_for(role)),
            header.render(Page::home_for(role))
        );
    }
    let h = Harness::signed_in(Role::Admin, "T");
    assert_eq!(header(&h).preview(Page::Landing), HeaderView::LogoOnly);
    assert!(!h.session.is_empty());
}
