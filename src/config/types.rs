//! Configuration file types for taxation rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{TaxationTimeBand, VehicleType};

/// City ruleset file structure (`cities/<city>.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct CityRulesConfig {
    /// Human-readable city name.
    pub name: String,
    /// Length of a single charge interval in minutes.
    pub charge_interval_minutes: i64,
    /// Vehicle types that are never taxed.
    #[serde(default)]
    pub free_vehicle_types: Vec<VehicleType>,
    /// Fee bands in lookup order.
    pub time_bands: Vec<TaxationTimeBand>,
}

/// Holiday calendar file structure (`holidays.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// The listed holidays.
    pub holidays: Vec<HolidayEntry>,
}

/// A single holiday.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    #[serde(default)]
    pub name: Option<String>,
}
