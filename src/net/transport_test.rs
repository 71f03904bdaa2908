use super::*;

use futures::executor::block_on;

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Ann".to_owned(),
        email: "ann@example.com".to_owned(),
        message: "Table for two?".to_owned(),
    }
}

/// Transport that always fails, standing in for a dead endpoint.
struct FailingTransport;

impl SubmissionTransport for FailingTransport {
    fn submit(&self, _: &ContactSubmission) -> LocalBoxFuture<'static, Result<(), String>> {
        Box::pin(async { Err("endpoint unreachable".to_owned()) })
    }
}

#[test]
fn simulated_transport_resolves_ok() {
    // With hydrate off the latency sleep is skipped, so this completes
    // immediately on a native executor.
    let transport = SimulatedTransport::default();
    assert_eq!(block_on(transport.submit(&submission())), Ok(()));
}

#[test]
fn simulated_transport_default_latency_is_one_second() {
    assert_eq!(
        SimulatedTransport::default().latency,
        Duration::from_millis(1000)
    );
}

#[test]
fn failing_transport_surfaces_the_detail() {
    let transport: &dyn SubmissionTransport = &FailingTransport;
    let result = block_on(transport.submit(&submission()));
    assert_eq!(result, Err("endpoint unreachable".to_owned()));
}

#[test]
fn payload_serializes_all_fields() {
    let json = serde_json::to_value(submission()).expect("payload");
    assert_eq!(json["name"], "Ann");
    assert_eq!(json["email"], "ann@example.com");
    assert_eq!(json["message"], "Table for two?");
}
