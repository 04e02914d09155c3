//! Tests for the dialog controllers: phase transitions, focus capture
//! and restoration, Tab trapping, and idempotent close.
//!
//! Run with: `cargo test --test modal_test`

use portfolio_backend::gallery::modal::{ModalController, ModalKind, ModalPhase};
use portfolio_backend::gallery::protocol::{
    DOCUMENT_INITIAL_FOCUS, MODAL_INITIAL_FOCUS, blog_focusables, document_focusables,
};

fn targets(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_open_focuses_close_control_and_installs_trap() {
    let mut modal = ModalController::new(ModalKind::Project);
    assert_eq!(modal.phase(), ModalPhase::Closed);

    let effects = modal.open(
        targets(&["modal-close", "modal-link-0"]),
        MODAL_INITIAL_FOCUS,
        Some("project-card-2".to_string()),
    );

    assert_eq!(effects.focus.as_deref(), Some("modal-close"));
    assert_eq!(modal.phase(), ModalPhase::Opening);
    assert!(modal.is_visible());
    assert!(modal.trap_installed());
}

#[test]
fn test_settle_open_transitions_to_open() {
    let mut modal = ModalController::new(ModalKind::Project);
    modal.open(targets(&["modal-close"]), MODAL_INITIAL_FOCUS, None);

    modal.settle_open();
    assert_eq!(modal.phase(), ModalPhase::Open);

    // Settling a dialog that is not opening changes nothing.
    modal.settle_open();
    assert_eq!(modal.phase(), ModalPhase::Open);
}

#[test]
fn test_close_restores_focus_to_pre_open_element() {
    let mut modal = ModalController::new(ModalKind::Blog);
    modal.open(
        blog_focusables(false),
        MODAL_INITIAL_FOCUS,
        Some("blog-card-17".to_string()),
    );
    modal.settle_open();

    let effects = modal.close().expect("visible dialog closes");
    assert_eq!(effects.restore_focus.as_deref(), Some("blog-card-17"));

    modal.settle_close();
    assert_eq!(modal.phase(), ModalPhase::Closed);
}

#[test]
fn test_close_when_closed_is_a_noop() {
    let mut modal = ModalController::new(ModalKind::Project);
    assert!(modal.close().is_none());
    assert_eq!(modal.phase(), ModalPhase::Closed);

    // Closing twice after an open is also a no-op the second time.
    modal.open(targets(&["modal-close"]), MODAL_INITIAL_FOCUS, None);
    assert!(modal.close().is_some());
    modal.settle_close();
    assert!(modal.close().is_none());
}

#[test]
fn test_trap_is_removed_on_every_close() {
    let mut modal = ModalController::new(ModalKind::Blog);

    for _ in 0..3 {
        modal.open(blog_focusables(true), MODAL_INITIAL_FOCUS, None);
        assert!(modal.trap_installed());
        assert!(modal.close().is_some());
        modal.settle_close();
        assert!(!modal.trap_installed());
        assert!(modal.tab(false).is_none());
    }
}

#[test]
fn test_tab_cycles_forward_with_wraparound() {
    let mut modal = ModalController::new(ModalKind::Blog);
    modal.open(blog_focusables(true), MODAL_INITIAL_FOCUS, None);

    assert_eq!(modal.tab(false).as_deref(), Some("blog-like"));
    assert_eq!(modal.tab(false).as_deref(), Some("blog-edit"));
    assert_eq!(modal.tab(false).as_deref(), Some("blog-delete"));
    assert_eq!(modal.tab(false).as_deref(), Some("modal-close"));
}

#[test]
fn test_shift_tab_cycles_backward_with_wraparound() {
    let mut modal = ModalController::new(ModalKind::Blog);
    modal.open(blog_focusables(false), MODAL_INITIAL_FOCUS, None);

    // From the close control, Shift+Tab wraps to the last target.
    assert_eq!(modal.tab(true).as_deref(), Some("blog-like"));
    assert_eq!(modal.tab(true).as_deref(), Some("modal-close"));
}

#[test]
fn test_document_dialog_focuses_print_control_first() {
    let mut modal = ModalController::new(ModalKind::Document);
    let effects = modal.open(document_focusables(), DOCUMENT_INITIAL_FOCUS, None);

    assert_eq!(effects.focus.as_deref(), Some("pdf-print"));
    assert_eq!(modal.tab(false).as_deref(), Some("pdf-download"));
    assert_eq!(modal.tab(false).as_deref(), Some("pdf-close"));
}

#[test]
fn test_reopen_replaces_trap_instead_of_stacking() {
    let mut modal = ModalController::new(ModalKind::Blog);
    modal.open(blog_focusables(false), MODAL_INITIAL_FOCUS, None);
    modal.open(blog_focusables(true), MODAL_INITIAL_FOCUS, None);

    // One close is enough to remove the trap entirely.
    assert!(modal.close().is_some());
    modal.settle_close();
    assert!(!modal.trap_installed());
    assert!(modal.tab(false).is_none());
}

#[test]
fn test_escape_with_two_dialogs_visible_closes_each_independently() {
    // Nothing guards against the project and blog dialogs being visible
    // at once. Escape checks each one independently, so both close.
    let mut project = ModalController::new(ModalKind::Project);
    let mut blog = ModalController::new(ModalKind::Blog);
    project.open(
        targets(&["modal-close"]),
        MODAL_INITIAL_FOCUS,
        Some("card-a".to_string()),
    );
    blog.open(
        blog_focusables(false),
        MODAL_INITIAL_FOCUS,
        Some("card-b".to_string()),
    );

    let first = project.close().expect("project dialog was visible");
    let second = blog.close().expect("blog dialog was visible");

    assert_eq!(first.restore_focus.as_deref(), Some("card-a"));
    assert_eq!(second.restore_focus.as_deref(), Some("card-b"));
}

#[test]
fn test_open_without_focusables_installs_no_trap() {
    let mut modal = ModalController::new(ModalKind::Project);
    let effects = modal.open(Vec::new(), MODAL_INITIAL_FOCUS, None);

    assert_eq!(effects.focus, None);
    assert!(!modal.trap_installed());
    assert!(modal.tab(false).is_none());
    assert!(modal.is_visible());
}
