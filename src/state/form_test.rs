use super::*;

fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
    ContactSubmission {
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
    }
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_minimal_valid_shapes() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("first.last@sub.example.co.uk"));
}

#[test]
fn email_missing_dot_segment_after_at_is_invalid() {
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a@.b"));
}

#[test]
fn email_missing_at_is_invalid() {
    assert!(!is_valid_email("a.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn email_empty_local_part_is_invalid() {
    assert!(!is_valid_email("@b.com"));
}

#[test]
fn email_second_at_is_invalid() {
    assert!(!is_valid_email("a@@b.com"));
    assert!(!is_valid_email("a@b@c.com"));
}

#[test]
fn email_whitespace_anywhere_is_invalid() {
    assert!(!is_valid_email(" a@b.com"));
    assert!(!is_valid_email("a@b.com "));
    assert!(!is_valid_email("a @b.com"));
}

// =============================================================
// Submission validation
// =============================================================

#[test]
fn valid_submission_passes() {
    assert_eq!(submission("Ann", "ann@example.com", "hi").validate(), Ok(()));
}

#[test]
fn empty_name_reports_missing_fields() {
    assert_eq!(
        submission("", "x@y.com", "hi").validate(),
        Err(ValidationError::MissingFields)
    );
}

#[test]
fn whitespace_only_field_reports_missing_fields() {
    assert_eq!(
        submission("Ann", "x@y.com", "   ").validate(),
        Err(ValidationError::MissingFields)
    );
}

#[test]
fn missing_fields_takes_precedence_over_invalid_email() {
    // Empty message plus a broken email: the field check runs first.
    assert_eq!(
        submission("Ann", "not-an-email", "").validate(),
        Err(ValidationError::MissingFields)
    );
}

#[test]
fn bad_email_reports_invalid_email() {
    assert_eq!(
        submission("Ann", "not-an-email", "hi").validate(),
        Err(ValidationError::InvalidEmail)
    );
}

#[test]
fn validation_error_messages() {
    assert_eq!(
        ValidationError::MissingFields.message(),
        "Please fill in all fields"
    );
    assert_eq!(
        ValidationError::InvalidEmail.message(),
        "Please enter a valid email address"
    );
}

// =============================================================
// Submit phase
// =============================================================

#[test]
fn submit_phase_defaults_to_idle() {
    assert_eq!(SubmitPhase::default(), SubmitPhase::Idle);
    assert_ne!(SubmitPhase::Idle, SubmitPhase::Submitting);
}

#[test]
fn try_begin_moves_idle_to_submitting() {
    let mut phase = SubmitPhase::Idle;
    assert!(phase.try_begin());
    assert_eq!(phase, SubmitPhase::Submitting);
}

#[test]
fn second_begin_while_submitting_is_refused() {
    // At most one submission in flight: a submit event arriving while one
    // is pending must be ignored.
    let mut phase = SubmitPhase::Idle;
    assert!(phase.try_begin());
    assert!(!phase.try_begin());
    assert_eq!(phase, SubmitPhase::Submitting);
}

#[test]
fn finish_returns_to_idle_and_allows_a_new_submission() {
    let mut phase = SubmitPhase::Idle;
    assert!(phase.try_begin());
    phase.finish();
    assert_eq!(phase, SubmitPhase::Idle);
    assert!(phase.try_begin());
}
