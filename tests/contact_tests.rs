mod common;

use std::rc::Rc;

use common::{filled_fields, CountingMailer};
use george_portfolio::contact::{
    submit, validate, ContactAction, ContactState, SubmitOutcome, FAILED_MESSAGE, SENT_MESSAGE,
};
use george_portfolio::error::ValidationError;
use george_portfolio::types::{ContactField, ContactFields, ToastKind};
use yew::prelude::Reducible;

fn filled_state() -> ContactState {
    ContactState {
        fields: filled_fields(),
        submitting: false,
    }
}

#[test]
fn test_initial_state_is_empty() {
    let state = ContactState::default();
    assert_eq!(state.fields, ContactFields::default());
    assert!(!state.submitting);
}

#[test]
fn test_edit_replaces_single_field() {
    let mut state = filled_state();
    state.edit(ContactField::Email, "new@example.org".to_string());
    assert_eq!(state.fields.email, "new@example.org");
    assert_eq!(state.fields.name, "Ada Lovelace");
}

#[test]
fn test_begin_sets_submitting_and_snapshots_fields() {
    let mut state = filled_state();
    let snapshot = state.begin().unwrap();
    assert!(state.submitting);
    assert_eq!(snapshot, filled_fields());
}

#[test]
fn test_begin_refused_while_submitting() {
    let mut state = filled_state();
    state.begin();
    assert_eq!(state.begin(), None);
}

#[test]
fn test_success_clears_fields() {
    let mut state = filled_state();
    state.begin();
    state.finish(SubmitOutcome::Sent);
    assert!(!state.submitting);
    assert_eq!(state.fields, ContactFields::default());
}

#[test]
fn test_failure_keeps_fields() {
    let state = Rc::new(filled_state());
    let state = state.reduce(ContactAction::Begin);
    assert!(state.submitting);
    let state = state.reduce(ContactAction::Finish(SubmitOutcome::Failed));
    assert!(!state.submitting);
    assert_eq!(state.fields, filled_fields());
}

#[test]
fn test_outcome_notices() {
    let sent = SubmitOutcome::Sent.notice();
    assert_eq!(sent.kind, ToastKind::Success);
    assert_eq!(sent.message, SENT_MESSAGE);

    let failed = SubmitOutcome::Failed.notice();
    assert_eq!(failed.kind, ToastKind::Error);
    assert_eq!(failed.message, FAILED_MESSAGE);
}

#[test]
fn test_validate_accepts_filled_form() {
    assert_eq!(validate(&filled_fields()), Ok(()));
}

#[test]
fn test_validate_reports_first_blank_field() {
    let mut fields = filled_fields();
    fields.message = "   ".to_string();
    assert_eq!(
        validate(&fields),
        Err(ValidationError::Missing(ContactField::Message))
    );
    assert_eq!(
        validate(&ContactFields::default()).unwrap_err().to_string(),
        "Name is required"
    );
}

#[test]
fn test_validate_rejects_malformed_email() {
    for email in ["ada", "ada@", "@example.com", "ada@example", "ada @example.com", "ada@example..com"] {
        let mut fields = filled_fields();
        fields.email = email.to_string();
        assert_eq!(validate(&fields), Err(ValidationError::InvalidEmail), "{}", email);
    }
}

#[test]
fn test_second_begin_keeps_same_state() {
    let state = Rc::new(filled_state()).reduce(ContactAction::Begin);
    let again = state.clone().reduce(ContactAction::Begin);
    assert!(Rc::ptr_eq(&state, &again));
    assert!(again.submitting);
}

#[tokio::test]
async fn test_successful_submit_sends_once_and_clears_fields() {
    let mailer = CountingMailer::succeeding();
    let mut state = filled_state();

    let fields = state.begin().unwrap();
    assert!(state.submitting);
    assert_eq!(state.begin(), None);

    let outcome = submit(&mailer, &fields).await;
    assert_eq!(mailer.calls(), 1);
    assert_eq!(mailer.sent.borrow()[0], filled_fields());
    assert_eq!(outcome, SubmitOutcome::Sent);

    state.finish(outcome);
    assert!(!state.submitting);
    assert_eq!(state.fields, ContactFields::default());
    assert_eq!(outcome.notice().kind, ToastKind::Success);
}

#[tokio::test]
async fn test_failed_submit_keeps_fields_and_reports_error() {
    let mailer = CountingMailer::failing();
    let state = Rc::new(filled_state()).reduce(ContactAction::Begin);
    assert!(state.submitting);

    let outcome = submit(&mailer, &state.fields).await;
    assert_eq!(mailer.calls(), 1);
    assert_eq!(outcome, SubmitOutcome::Failed);

    let state = state.reduce(ContactAction::Finish(outcome));
    assert!(!state.submitting);
    assert_eq!(state.fields, filled_fields());

    let notice = outcome.notice();
    assert_eq!(notice.kind, ToastKind::Error);
    assert_eq!(notice.message, FAILED_MESSAGE);
}

#[tokio::test]
async fn test_retry_after_failure_sends_same_message() {
    let mailer = CountingMailer::failing();
    let mut state = filled_state();

    let fields = state.begin().unwrap();
    state.finish(submit(&mailer, &fields).await);

    let fields = state.begin().unwrap();
    state.finish(submit(&mailer, &fields).await);

    assert_eq!(mailer.calls(), 2);
    assert_eq!(mailer.sent.borrow()[0], mailer.sent.borrow()[1]);
}
