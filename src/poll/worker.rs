use crate::sensor::{DeriveReading, Exchange, Reading};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Poll one endpoint: a single GET raced against the shared cancellation
/// token.
///
/// Publishes exactly one reading on success and nothing on any failure
/// path. Failures are logged and swallowed; a bad sensor never takes the
/// session down.
pub(crate) async fn poll_endpoint(
    client: reqwest::Client,
    endpoint: String,
    deriver: Arc<dyn DeriveReading>,
    cancel: CancellationToken,
    results: mpsc::Sender<Reading>,
) {
    let request = match client.get(&endpoint).build() {
        Ok(request) => request,
        Err(e) => {
            warn!("{endpoint}: failed to build request: {e}");
            return;
        }
    };

    let response = tokio::select! {
        biased;

        _ = cancel.cancelled() => {
            debug!("{endpoint}: poll aborted by cancellation");
            return;
        }
        result = client.execute(request) => match result {
            Ok(response) => response,
            Err(e) => {
                warn!("{endpoint}: poll failed: {e}");
                return;
            }
        }
    };

    let exchange = Exchange {
        status: response.status(),
        endpoint,
    };
    let reading = deriver.derive(&exchange);

    // Channel capacity equals fan-out width, so this send cannot block on a
    // live receiver; it only fails once the arbiter has already stopped.
    if results.send(reading).await.is_err() {
        debug!("{}: session over before reading could be published", exchange.endpoint);
    }
}
