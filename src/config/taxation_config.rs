//! Immutable snapshot of a city's taxation rules.

use std::collections::{BTreeSet, HashSet};

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::error::TaxResult;
use crate::models::{City, TaxationTimeBand, VehicleType};

use super::source::TaxationSource;

/// The taxation rules in force for one city.
///
/// Built once from a [`TaxationSource`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxationConfig {
    city: City,
    charge_interval: Duration,
    free_vehicle_types: HashSet<VehicleType>,
    holidays: BTreeSet<NaiveDate>,
    time_bands: Vec<TaxationTimeBand>,
}

impl TaxationConfig {
    /// Creates a config from its component parts.
    pub fn new(
        city: City,
        charge_interval: Duration,
        free_vehicle_types: HashSet<VehicleType>,
        holidays: BTreeSet<NaiveDate>,
        time_bands: Vec<TaxationTimeBand>,
    ) -> Self {
        Self {
            city,
            charge_interval,
            free_vehicle_types,
            holidays,
            time_bands,
        }
    }

    /// Fetches every component of the ruleset from `source`.
    ///
    /// The first failing fetch aborts the whole snapshot; no partially
    /// populated config is ever returned.
    pub fn fetch(source: &dyn TaxationSource, city: City) -> TaxResult<Self> {
        let charge_interval = source.interval_length(city)?;
        let free_vehicle_types = source.free_vehicle_types(city)?;
        let holidays = source.holidays()?;
        let time_bands = source.time_bands(city)?;

        debug!(
            city = %city,
            interval_minutes = charge_interval.num_minutes(),
            free_vehicle_types = free_vehicle_types.len(),
            holidays = holidays.len(),
            time_bands = time_bands.len(),
            "Fetched taxation configuration"
        );

        Ok(Self::new(
            city,
            charge_interval,
            free_vehicle_types,
            holidays,
            time_bands,
        ))
    }

    /// Returns the city the rules belong to.
    pub fn city(&self) -> City {
        self.city
    }

    /// Returns the charge interval length.
    pub fn charge_interval(&self) -> Duration {
        self.charge_interval
    }

    /// Returns the toll-free vehicle types.
    pub fn free_vehicle_types(&self) -> &HashSet<VehicleType> {
        &self.free_vehicle_types
    }

    /// Returns the configured holidays.
    pub fn holidays(&self) -> &BTreeSet<NaiveDate> {
        &self.holidays
    }

    /// Returns the fee bands in lookup order.
    pub fn time_bands(&self) -> &[TaxationTimeBand] {
        &self.time_bands
    }

    /// Returns true if vehicles of this type are never taxed.
    pub fn is_free_vehicle(&self, vehicle_type: VehicleType) -> bool {
        self.free_vehicle_types.contains(&vehicle_type)
    }
}
