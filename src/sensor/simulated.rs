use super::{DeriveReading, Exchange, Reading};
use rand::RngExt;
use uuid::Uuid;

/// Placeholder derivation: fresh UUID identifier, uniform 0..100 temperature.
///
/// Stands in for real payload parsing until sensor firmware settles on a
/// response format.
pub struct SimulatedReadings;

impl DeriveReading for SimulatedReadings {
    fn derive(&self, _exchange: &Exchange) -> Reading {
        Reading {
            sensor_id: Uuid::new_v4().to_string(),
            temperature: rand::rng().random_range(0.0..100.0),
        }
    }
}
