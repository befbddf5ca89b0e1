//! Built-in, in-memory taxation rules.

use std::collections::{BTreeSet, HashSet};

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::{TaxError, TaxResult};
use crate::models::{City, TaxationTimeBand, VehicleType};

use super::source::TaxationSource;

/// A [`TaxationSource`] backed by values held in memory.
///
/// Useful as a default ruleset when no configuration directory is
/// available, and as a fixture in tests.
///
/// # Example
///
/// ```
/// use congestion_tax::config::{StaticTaxationSource, TaxationSource};
/// use congestion_tax::models::City;
///
/// let source = StaticTaxationSource::gothenburg();
/// let interval = source.interval_length(City::Gothenburg).unwrap();
/// assert_eq!(interval.num_minutes(), 60);
/// ```
#[derive(Debug, Clone)]
pub struct StaticTaxationSource {
    city: City,
    interval: Duration,
    free_vehicle_types: HashSet<VehicleType>,
    holidays: BTreeSet<NaiveDate>,
    time_bands: Vec<TaxationTimeBand>,
}

impl StaticTaxationSource {
    /// Creates a source holding the given ruleset for `city`.
    pub fn new(
        city: City,
        interval: Duration,
        free_vehicle_types: HashSet<VehicleType>,
        holidays: BTreeSet<NaiveDate>,
        time_bands: Vec<TaxationTimeBand>,
    ) -> Self {
        Self {
            city,
            interval,
            free_vehicle_types,
            holidays,
            time_bands,
        }
    }

    /// The Gothenburg ruleset for 2013.
    pub fn gothenburg() -> Self {
        let free_vehicle_types = [
            VehicleType::Emergency,
            VehicleType::Bus,
            VehicleType::Diplomat,
            VehicleType::Motorcycle,
            VehicleType::Military,
            VehicleType::Foreign,
        ]
        .into_iter()
        .collect();

        let holidays = [
            (1, 1),
            (1, 6),
            (3, 29),
            (3, 31),
            (4, 1),
            (5, 1),
            (5, 9),
            (5, 19),
            (6, 6),
            (6, 22),
            (11, 2),
            (12, 25),
            (12, 26),
        ]
        .into_iter()
        .filter_map(|(month, day)| NaiveDate::from_ymd_opt(2013, month, day))
        .collect();

        let time_bands = [
            ((6, 0), (6, 29), 8),
            ((6, 30), (6, 59), 13),
            ((7, 0), (7, 59), 18),
            ((8, 0), (8, 29), 13),
            ((8, 30), (14, 59), 8),
            ((15, 0), (15, 29), 13),
            ((15, 30), (16, 59), 18),
            ((17, 0), (17, 59), 13),
            ((18, 0), (18, 29), 8),
        ]
        .into_iter()
        .filter_map(|((start_h, start_m), (end_h, end_m), fee)| {
            Some(TaxationTimeBand::new(
                NaiveTime::from_hms_opt(start_h, start_m, 0)?,
                NaiveTime::from_hms_opt(end_h, end_m, 59)?,
                fee,
            ))
        })
        .collect();

        Self::new(
            City::Gothenburg,
            Duration::minutes(60),
            free_vehicle_types,
            holidays,
            time_bands,
        )
    }

    fn ensure_city(&self, city: City) -> TaxResult<()> {
        if city == self.city {
            Ok(())
        } else {
            Err(TaxError::ConfigurationUnavailable {
                message: format!("no ruleset for city '{}'", city),
            })
        }
    }
}

impl TaxationSource for StaticTaxationSource {
    fn interval_length(&self, city: City) -> TaxResult<Duration> {
        self.ensure_city(city)?;
        Ok(self.interval)
    }

    fn free_vehicle_types(&self, city: City) -> TaxResult<HashSet<VehicleType>> {
        self.ensure_city(city)?;
        Ok(self.free_vehicle_types.clone())
    }

    fn holidays(&self) -> TaxResult<BTreeSet<NaiveDate>> {
        Ok(self.holidays.clone())
    }

    fn time_bands(&self, city: City) -> TaxResult<Vec<TaxationTimeBand>> {
        self.ensure_city(city)?;
        Ok(self.time_bands.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gothenburg_bands_cover_morning_peak() {
        let bands = StaticTaxationSource::gothenburg()
            .time_bands(City::Gothenburg)
            .unwrap();

        let peak = bands
            .iter()
            .find(|b| b.contains(NaiveTime::from_hms_opt(7, 45, 0).unwrap()))
            .unwrap();
        assert_eq!(peak.fee, 18);
    }

    #[test]
    fn test_gothenburg_bands_leave_no_gap_between_minutes() {
        let bands = StaticTaxationSource::gothenburg()
            .time_bands(City::Gothenburg)
            .unwrap();

        let half_minute = NaiveTime::from_hms_opt(6, 29, 30).unwrap();
        assert!(bands.iter().any(|b| b.contains(half_minute)));
    }

    #[test]
    fn test_gothenburg_holidays_are_2013() {
        let holidays = StaticTaxationSource::gothenburg().holidays().unwrap();
        assert_eq!(holidays.len(), 13);
        assert!(holidays.contains(&NaiveDate::from_ymd_opt(2013, 12, 25).unwrap()));
        assert!(holidays.iter().all(|d| d.format("%Y").to_string() == "2013"));
    }

    #[test]
    fn test_gothenburg_night_is_untaxed() {
        let bands = StaticTaxationSource::gothenburg()
            .time_bands(City::Gothenburg)
            .unwrap();
        let night = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
        assert!(bands.iter().all(|b| !b.contains(night)));
    }
}
