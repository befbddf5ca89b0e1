//! Daily congestion tax calculation.
//!
//! This module provides the [`TaxCalculator`], which lazily loads a city's
//! taxation rules once per process and computes the capped daily tax for a
//! vehicle's passages.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::config::{TaxationConfig, TaxationSource};
use crate::error::TaxResult;
use crate::models::{ChargeInterval, City, TaxAssessment, Vehicle};

use super::fee_lookup::toll_fee;
use super::intervals::partition_into_intervals;

/// The maximum tax charged per vehicle per day.
pub const DAILY_FEE_CAP: u32 = 60;

/// Computes the daily congestion tax for a city.
///
/// The city's rules are fetched from the [`TaxationSource`] on first use
/// and cached for the lifetime of the calculator. Concurrent first calls
/// trigger exactly one fetch; all of them observe the same snapshot.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use congestion_tax::calculation::TaxCalculator;
/// use congestion_tax::config::StaticTaxationSource;
/// use congestion_tax::models::{City, Vehicle, VehicleType};
/// use chrono::NaiveDateTime;
///
/// let calculator = TaxCalculator::new(Arc::new(StaticTaxationSource::gothenburg()), City::Gothenburg);
/// let car = Vehicle::new(VehicleType::Car);
///
/// // 2013-02-08 is a Friday: 06:27 (8) and 06:35 (13) share an interval
/// let passages = [
///     NaiveDateTime::parse_from_str("2013-02-08 06:27:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2013-02-08 06:35:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// ];
/// assert_eq!(calculator.get_tax(&car, &passages).unwrap(), 13);
/// ```
pub struct TaxCalculator {
    source: Arc<dyn TaxationSource>,
    city: City,
    config: OnceLock<TaxationConfig>,
    init_lock: Mutex<()>,
}

impl TaxCalculator {
    /// Creates a calculator for `city`. No rules are fetched until first use.
    pub fn new(source: Arc<dyn TaxationSource>, city: City) -> Self {
        Self {
            source,
            city,
            config: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Returns the city this calculator taxes.
    pub fn city(&self) -> City {
        self.city
    }

    /// Returns the taxation rules, fetching them on first call.
    ///
    /// Initialization runs under a lock with a second check inside it, so
    /// only one caller ever fetches. A failed fetch is returned to that
    /// caller and leaves the calculator uninitialized.
    pub fn config(&self) -> TaxResult<&TaxationConfig> {
        if let Some(config) = self.config.get() {
            return Ok(config);
        }

        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(config) = self.config.get() {
            return Ok(config);
        }

        let config = TaxationConfig::fetch(self.source.as_ref(), self.city)?;
        info!(
            city = %self.city,
            interval_minutes = config.charge_interval().num_minutes(),
            time_bands = config.time_bands().len(),
            "Taxation configuration initialized"
        );

        Ok(self.config.get_or_init(|| config))
    }

    /// Calculates the day's tax with a breakdown per charge interval.
    ///
    /// Passages may be given in any order. They are sorted, grouped into
    /// charge intervals, each interval is charged its highest passage fee,
    /// and the sum is capped at [`DAILY_FEE_CAP`].
    pub fn assess(&self, vehicle: &Vehicle, passages: &[NaiveDateTime]) -> TaxResult<TaxAssessment> {
        let config = self.config()?;

        if passages.is_empty() {
            return Ok(TaxAssessment::empty());
        }

        let mut sorted = passages.to_vec();
        sorted.sort_unstable();

        let intervals: Vec<ChargeInterval> =
            partition_into_intervals(&sorted, config.charge_interval())
                .into_iter()
                .map(|group| ChargeInterval {
                    start: group[0],
                    passages: group.to_vec(),
                    fee: group
                        .iter()
                        .map(|&passage| toll_fee(passage, vehicle, config))
                        .max()
                        .unwrap_or(0),
                })
                .collect();

        let uncapped_total = intervals
            .iter()
            .fold(0u32, |sum, interval| sum.saturating_add(interval.fee));
        let total = uncapped_total.min(DAILY_FEE_CAP);

        debug!(
            vehicle_type = %vehicle.vehicle_type,
            passages = passages.len(),
            intervals = intervals.len(),
            uncapped_total,
            total,
            "Assessed congestion tax"
        );

        Ok(TaxAssessment {
            total,
            uncapped_total,
            intervals,
        })
    }

    /// Calculates the total tax for one day of passages.
    pub fn get_tax(&self, vehicle: &Vehicle, passages: &[NaiveDateTime]) -> TaxResult<u32> {
        self.assess(vehicle, passages).map(|assessment| assessment.total)
    }
}
