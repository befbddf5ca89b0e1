//! Per-passage fee lookup.

use chrono::{NaiveDateTime, NaiveTime};

use crate::config::TaxationConfig;
use crate::models::{TaxationTimeBand, Vehicle};

use super::toll_free::is_toll_free_date;

/// Returns the fee of the first band containing `time`, or 0 if none does.
///
/// Bands are scanned in order, so an earlier band shadows any later band
/// overlapping it.
///
/// # Example
///
/// ```
/// use congestion_tax::calculation::band_fee;
/// use congestion_tax::models::TaxationTimeBand;
/// use chrono::NaiveTime;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let bands = [
///     TaxationTimeBand::new(t(7, 0), t(7, 59), 18),
///     TaxationTimeBand::new(t(7, 30), t(8, 29), 13),
/// ];
/// assert_eq!(band_fee(t(7, 45), &bands), 18);
/// assert_eq!(band_fee(t(8, 15), &bands), 13);
/// assert_eq!(band_fee(t(22, 0), &bands), 0);
/// ```
pub fn band_fee(time: NaiveTime, bands: &[TaxationTimeBand]) -> u32 {
    bands
        .iter()
        .find(|band| band.contains(time))
        .map_or(0, |band| band.fee)
}

/// Returns the fee for a single passage.
///
/// Free vehicles and toll-free dates pay nothing; otherwise the passage's
/// time of day is looked up in the configured bands.
pub fn toll_fee(passage: NaiveDateTime, vehicle: &Vehicle, config: &TaxationConfig) -> u32 {
    if config.is_free_vehicle(vehicle.vehicle_type)
        || is_toll_free_date(passage.date(), config.holidays())
    {
        return 0;
    }

    band_fee(passage.time(), config.time_bands())
}
