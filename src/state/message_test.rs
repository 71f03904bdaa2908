use super::*;

// =============================================================
// StatusMessage
// =============================================================

#[test]
fn message_expires_one_duration_after_creation() {
    let msg = StatusMessage::new(MessageKind::Success, "sent", 10_000.0);
    assert_eq!(msg.expires_at, 15_000.0);
}

#[test]
fn messages_get_distinct_ids() {
    let a = StatusMessage::new(MessageKind::Error, "a", 0.0);
    let b = StatusMessage::new(MessageKind::Error, "b", 0.0);
    assert_ne!(a.id, b.id);
}

#[test]
fn kind_maps_to_css_class() {
    assert_eq!(
        MessageKind::Success.css_class(),
        "form-message form-message--success"
    );
    assert_eq!(
        MessageKind::Error.css_class(),
        "form-message form-message--error"
    );
}

// =============================================================
// Removal
// =============================================================

#[test]
fn remove_message_drops_only_the_matching_id() {
    let a = StatusMessage::new(MessageKind::Success, "a", 0.0);
    let b = StatusMessage::new(MessageKind::Error, "b", 0.0);
    let a_id = a.id.clone();
    let mut messages = vec![a, b.clone()];

    remove_message(&mut messages, &a_id);
    assert_eq!(messages, vec![b]);
}

#[test]
fn remove_message_is_a_no_op_for_unknown_ids() {
    let a = StatusMessage::new(MessageKind::Success, "a", 0.0);
    let mut messages = vec![a.clone()];

    remove_message(&mut messages, "missing");
    assert_eq!(messages, vec![a]);
}
