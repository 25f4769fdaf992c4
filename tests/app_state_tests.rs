//! Application state tests
//!
//! Tests for the submission lifecycle: validation, loading transitions,
//! settlement, and the per-panel copy indicators.

use std::time::{Duration, Instant};

use tahseen::enhance::EnhancementResult;
use tahseen::ui::app::{FocusPane, Panel, COPIED_INDICATOR_TTL, VALIDATION_MESSAGE};
use tahseen::ui::editor::Editor;
use tahseen::ui::theme::Theme;
use tahseen::ui::App;

/// Helper to create a test app
fn create_test_app() -> App {
    App::new(Theme::default_theme().clone())
}

/// The example response body from a well-formed remote call
fn sample_result() -> EnhancementResult {
    EnhancementResult {
        corrected: "هذا نص لا يحتوي على أخطاء.".to_string(),
        improved: "هذا نص أكثر سلاسة.".to_string(),
        literary: "نص أدبي غني بالتفاصيل.".to_string(),
    }
}

#[test]
fn test_submit_empty_input_is_a_validation_error() {
    let mut app = create_test_app();

    let submission = app.submit();

    assert!(submission.is_none());
    assert_eq!(app.error.as_deref(), Some(VALIDATION_MESSAGE));
    assert!(!app.loading, "no request may start for empty input");
}

#[test]
fn test_submit_whitespace_only_is_a_validation_error() {
    let mut app = create_test_app();
    app.editor = Editor::from_content("  \n\t  ");

    let submission = app.submit();

    assert!(submission.is_none());
    assert_eq!(app.error.as_deref(), Some(VALIDATION_MESSAGE));
    assert!(!app.loading);
}

#[test]
fn test_submit_valid_input_starts_loading() {
    let mut app = create_test_app();
    app.editor = Editor::from_content("هذا نص فيه غلطة");

    let submission = app.submit();

    assert_eq!(submission.as_deref(), Some("هذا نص فيه غلطة"));
    assert!(app.loading);
    assert!(app.error.is_none());
    assert!(app.result.is_none());
}

#[test]
fn test_submit_is_blocked_while_a_request_is_pending() {
    let mut app = create_test_app();
    app.editor = Editor::from_content("نص جديد");
    app.loading = true;

    assert!(app.submit().is_none());
    assert!(app.loading);
    assert!(app.error.is_none(), "a blocked submit leaves no error");
}

#[test]
fn test_new_submission_clears_previous_error_and_result() {
    let mut app = create_test_app();
    app.result = Some(sample_result());
    app.error = Some("قديم".to_string());
    app.editor = Editor::from_content("نص آخر");

    let submission = app.submit();

    assert!(submission.is_some());
    assert!(app.error.is_none());
    assert!(app.result.is_none(), "no stale data while the call is pending");
}

#[test]
fn test_success_populates_all_three_panels_verbatim() {
    let mut app = create_test_app();
    app.begin_request();

    app.finish_request(Ok(sample_result()));

    assert!(!app.loading);
    assert!(app.error.is_none());
    assert_eq!(
        app.panel_text(Panel::Corrected),
        Some("هذا نص لا يحتوي على أخطاء.")
    );
    assert_eq!(app.panel_text(Panel::Improved), Some("هذا نص أكثر سلاسة."));
    assert_eq!(
        app.panel_text(Panel::Literary),
        Some("نص أدبي غني بالتفاصيل.")
    );
}

#[test]
fn test_failure_shows_only_the_message_and_no_partial_result() {
    let mut app = create_test_app();
    app.begin_request();

    app.finish_request(Err("تعذّر تحسين النص.".to_string()));

    assert!(!app.loading);
    assert_eq!(app.error.as_deref(), Some("تعذّر تحسين النص."));
    assert!(app.result.is_none());
    assert!(app.panel_text(Panel::Corrected).is_none());
}

#[test]
fn test_copied_indicator_is_per_panel() {
    let mut app = create_test_app();
    app.finish_request(Ok(sample_result()));

    app.mark_copied(Panel::Improved);

    assert!(app.copied_visible(Panel::Improved));
    assert!(!app.copied_visible(Panel::Corrected));
    assert!(!app.copied_visible(Panel::Literary));
}

#[test]
fn test_copied_indicator_expires_after_its_window() {
    let mut app = create_test_app();
    app.finish_request(Ok(sample_result()));

    let stale = Instant::now()
        .checked_sub(COPIED_INDICATOR_TTL + Duration::from_secs(1))
        .expect("instant in the past");
    app.copied_at[Panel::Corrected.index()] = Some(stale);
    app.mark_copied(Panel::Literary);

    assert!(!app.copied_visible(Panel::Corrected), "stale indicator hides");
    assert!(app.copied_visible(Panel::Literary), "fresh indicator stays");
}

#[test]
fn test_copy_focused_returns_exactly_the_panel_text() {
    let mut app = create_test_app();
    app.finish_request(Ok(sample_result()));
    app.focus = FocusPane::Results(Panel::Literary);

    let copied = app.copy_focused();

    assert_eq!(copied.as_deref(), Some("نص أدبي غني بالتفاصيل."));
    assert!(app.copied_visible(Panel::Literary));
    assert!(!app.copied_visible(Panel::Corrected));
}

#[test]
fn test_copy_focused_needs_a_result_and_panel_focus() {
    let mut app = create_test_app();

    // Editor focus: nothing to copy
    assert!(app.copy_focused().is_none());

    // Panel focus without a result: still nothing
    app.focus = FocusPane::Results(Panel::Corrected);
    assert!(app.copy_focused().is_none());
    assert!(!app.copied_visible(Panel::Corrected));
}

#[test]
fn test_copy_focused_is_blocked_while_loading() {
    let mut app = create_test_app();
    app.result = Some(sample_result());
    app.loading = true;
    app.focus = FocusPane::Results(Panel::Corrected);

    assert!(app.copy_focused().is_none());
}

#[test]
fn test_focus_stays_on_the_editor_without_results() {
    let mut app = create_test_app();
    assert_eq!(app.focus, FocusPane::Editor);

    app.toggle_focus();
    assert_eq!(app.focus, FocusPane::Editor, "no panels to focus yet");
}

#[test]
fn test_focus_cycles_through_editor_and_panels() {
    let mut app = create_test_app();
    app.finish_request(Ok(sample_result()));
    assert_eq!(app.focus, FocusPane::Editor);

    app.toggle_focus();
    assert_eq!(app.focus, FocusPane::Results(Panel::Corrected));
    app.toggle_focus();
    assert_eq!(app.focus, FocusPane::Results(Panel::Improved));
    app.toggle_focus();
    assert_eq!(app.focus, FocusPane::Results(Panel::Literary));
    app.toggle_focus();
    assert_eq!(app.focus, FocusPane::Editor);
}

#[test]
fn test_results_area_appears_once_a_request_ran() {
    let mut app = create_test_app();
    assert!(!app.show_results());

    app.begin_request();
    assert!(app.show_results(), "placeholders replace the empty state");

    app.finish_request(Ok(sample_result()));
    assert!(app.show_results());

    // An error afterwards hides the panels again
    app.begin_request();
    app.finish_request(Err("خطأ".to_string()));
    assert!(!app.show_results());
}

#[test]
fn test_copied_window_is_two_seconds() {
    assert_eq!(COPIED_INDICATOR_TTL, Duration::from_secs(2));
}
