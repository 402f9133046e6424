use super::SessionReport;
use crate::sensor::Reading;
use anyhow::Result;
use std::fmt;
use std::io::Write;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Why a polling session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every worker finished and the channel drained dry.
    Completed,
    /// The session deadline passed with workers still in flight.
    TimedOut,
    /// The shared token was fired from outside the session.
    Cancelled,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Completed => write!(f, "completed"),
            Outcome::TimedOut => write!(f, "timed out"),
            Outcome::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Drain the fan-in channel until one of three events wins: the channel
/// closes (all workers done), the deadline passes, or the shared token is
/// fired externally.
///
/// The wait is a blocking multiplex with no default arm: when nothing is
/// ready the task suspends instead of falling through. On timeout the
/// arbiter fires the token itself so in-flight workers stop rather than
/// running on unobserved. When several branches are ready at once the
/// `biased` ordering prefers prompt termination over draining the buffer.
pub(crate) async fn drain_results<W: Write>(
    mut results: mpsc::Receiver<Reading>,
    cancel: &CancellationToken,
    timeout: Duration,
    out: &mut W,
) -> Result<SessionReport> {
    // One sleep pinned up front: the deadline is absolute, not per-recv.
    let deadline = tokio::time::sleep(timeout);
    tokio::pin!(deadline);

    let mut readings = 0usize;
    let outcome = loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                writeln!(out, "Cancelled from the external code")?;
                break Outcome::Cancelled;
            }
            _ = &mut deadline => {
                cancel.cancel();
                writeln!(out, "Timeout reached")?;
                break Outcome::TimedOut;
            }
            next = results.recv() => match next {
                Some(reading) => {
                    writeln!(
                        out,
                        "Sensor ID: {}, Temperature: {:.2}",
                        reading.sensor_id, reading.temperature
                    )?;
                    readings += 1;
                }
                None => break Outcome::Completed,
            }
        }
    };

    debug!("session {outcome} after {readings} reading(s)");
    Ok(SessionReport { outcome, readings })
}
