//! Submission transport for the contact form.
//!
//! Client-side (hydrate): `SimulatedTransport` sleeps for the configured
//! latency and logs the JSON payload a real endpoint would receive.
//! Server-side (SSR) and native tests: the sleep is skipped.
//!
//! ERROR HANDLING
//! ==============
//! Transports return `Result<(), String>` so the form controller can show
//! a generic failure message and log the detail without crashing the page.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use futures::future::LocalBoxFuture;

use crate::state::form::ContactSubmission;

/// Simulated network latency for a submission.
pub const SUBMIT_LATENCY_MS: u64 = 1000;

/// Delivery seam for contact form submissions.
///
/// Implementations take a submission and resolve to success or a failure
/// detail string. The futures are `LocalBoxFuture` because everything runs
/// on the single browser thread.
pub trait SubmissionTransport {
    fn submit(&self, submission: &ContactSubmission) -> LocalBoxFuture<'static, Result<(), String>>;
}

/// Placeholder transport: fixed delay, then success.
pub struct SimulatedTransport {
    pub latency: Duration,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(SUBMIT_LATENCY_MS),
        }
    }
}

impl SubmissionTransport for SimulatedTransport {
    fn submit(&self, submission: &ContactSubmission) -> LocalBoxFuture<'static, Result<(), String>> {
        let payload = serde_json::to_string(submission);
        let latency = self.latency;
        Box::pin(async move {
            let payload = payload.map_err(|e| e.to_string())?;

            #[cfg(feature = "hydrate")]
            gloo_timers::future::sleep(latency).await;
            #[cfg(not(feature = "hydrate"))]
            let _ = latency;

            leptos::logging::log!("simulated contact submission: {payload}");
            Ok(())
        })
    }
}
