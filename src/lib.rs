#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::uninlined_format_args
)]

pub mod config;
pub mod endpoints;
pub mod poll;
pub mod sensor;

pub use config::Config;
pub use poll::{Outcome, SessionReport, poll_sensors};
pub use sensor::{DeriveReading, Reading, SimulatedReadings};
