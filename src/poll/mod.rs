pub mod arbiter;
pub mod dispatcher;
pub mod worker;

pub use arbiter::Outcome;

use crate::config::HttpConfig;
use crate::sensor::DeriveReading;
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// What a finished session looked like: why it stopped and how many
/// readings made it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub outcome: Outcome,
    pub readings: usize,
}

/// Poll every endpoint once and drain results until completion, timeout,
/// or external cancellation, whichever comes first.
///
/// One reading line is written to `out` per successful poll, in arrival
/// order; early termination writes exactly one terminal message. The
/// token is shared: firing it from outside aborts in-flight polls, and a
/// timeout fires it from inside for the same reason.
pub async fn poll_sensors<W: Write>(
    endpoints: Vec<String>,
    deriver: Arc<dyn DeriveReading>,
    timeout: Duration,
    cancel: &CancellationToken,
    http: &HttpConfig,
    out: &mut W,
) -> Result<SessionReport> {
    let results = dispatcher::dispatch(endpoints, deriver, cancel, http);
    arbiter::drain_results(results, cancel, timeout, out).await
}
