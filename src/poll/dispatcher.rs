use super::worker;
use crate::config::HttpConfig;
use crate::sensor::{DeriveReading, Reading};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Start one poll worker per endpoint and hand back the fan-in channel.
///
/// Fan-out width equals endpoint count, with no pool cap. Fine at the
/// fleet sizes this tool targets (tens of sensors); a ceiling beyond that.
///
/// The receiver observes closure only after every worker has terminated:
/// workers hold `Sender` clones, and the completion supervisor keeps the
/// original alive until it has joined each handle. `recv()` returning
/// `None` therefore means "all pollers done", even when none of them
/// published anything.
pub(crate) fn dispatch(
    endpoints: Vec<String>,
    deriver: Arc<dyn DeriveReading>,
    cancel: &CancellationToken,
    http: &HttpConfig,
) -> mpsc::Receiver<Reading> {
    // Capacity matches fan-out width so no worker ever blocks on publish.
    let (tx, rx) = mpsc::channel(endpoints.len().max(1));

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(http.request_timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());

    let mut workers = Vec::with_capacity(endpoints.len());
    for endpoint in endpoints {
        workers.push(tokio::spawn(worker::poll_endpoint(
            client.clone(),
            endpoint,
            Arc::clone(&deriver),
            cancel.clone(),
            tx.clone(),
        )));
    }

    // Completion supervisor: join every worker, then drop the last sender.
    // The close happens-after all terminal worker actions.
    tokio::spawn(async move {
        let count = workers.len();
        for handle in workers {
            let _ = handle.await;
        }
        debug!("all {count} poller(s) finished");
        drop(tx);
    });

    rx
}
