//! Core data models for the congestion tax engine.
//!
//! This module contains all the domain models used throughout the engine.

mod assessment;
mod time_band;
mod vehicle;

pub use assessment::{ChargeInterval, TaxAssessment};
pub use time_band::TaxationTimeBand;
pub use vehicle::{City, Vehicle, VehicleType};
