use super::Reading;

/// The observable outcome of one completed poll exchange.
///
/// Carries what the poller knows for certain once a request has round-tripped:
/// which endpoint answered and with what status. Body semantics are left to
/// the [`DeriveReading`] implementation.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub endpoint: String,
    pub status: reqwest::StatusCode,
}

/// Derive a [`Reading`] from a completed exchange.
///
/// The poller imposes no response-body contract on sensors; turning an
/// exchange into a reading is a collaborator decision. The default
/// [`SimulatedReadings`](super::SimulatedReadings) fabricates values, and a
/// deployment that parses real payloads swaps in its own implementation.
/// Tests inject deterministic derivations through the same seam.
pub trait DeriveReading: Send + Sync {
    fn derive(&self, exchange: &Exchange) -> Reading;
}
