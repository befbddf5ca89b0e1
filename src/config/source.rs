//! The configuration source contract.

use std::collections::{BTreeSet, HashSet};

use chrono::{Duration, NaiveDate};

use crate::error::TaxResult;
use crate::models::{City, TaxationTimeBand, VehicleType};

/// Supplies the taxation rules of a city.
///
/// Implementations may do I/O and may fail; the calculator calls each
/// method once per process and propagates any error unchanged.
pub trait TaxationSource: Send + Sync {
    /// The length of a single charge interval.
    fn interval_length(&self, city: City) -> TaxResult<Duration>;

    /// Vehicle types that are never taxed.
    fn free_vehicle_types(&self, city: City) -> TaxResult<HashSet<VehicleType>>;

    /// Public holidays. The day before each holiday is toll-free as well.
    fn holidays(&self) -> TaxResult<BTreeSet<NaiveDate>>;

    /// Time-of-day fee bands, in lookup order.
    fn time_bands(&self, city: City) -> TaxResult<Vec<TaxationTimeBand>>;
}
