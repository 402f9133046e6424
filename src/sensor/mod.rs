pub mod simulated;
pub mod traits;

pub use simulated::SimulatedReadings;
pub use traits::{DeriveReading, Exchange};

/// One successful poll: an opaque sensor identifier plus a temperature.
///
/// Immutable once created; moved by value into the result channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub sensor_id: String,
    pub temperature: f64,
}
