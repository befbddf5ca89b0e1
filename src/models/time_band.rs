//! Time-of-day fee bands.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A time-of-day range mapped to a fixed fee.
///
/// Both bounds are inclusive. Bands are kept in an ordered list and looked
/// up first-match, so overlapping bands are allowed.
///
/// # Example
///
/// ```
/// use congestion_tax::models::TaxationTimeBand;
/// use chrono::NaiveTime;
///
/// let band = TaxationTimeBand::new(
///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(6, 29, 59).unwrap(),
///     8,
/// );
/// assert!(band.contains(NaiveTime::from_hms_opt(6, 29, 59).unwrap()));
/// assert!(!band.contains(NaiveTime::from_hms_opt(6, 30, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxationTimeBand {
    /// First time of day the fee applies (inclusive).
    pub start_time: NaiveTime,
    /// Last time of day the fee applies (inclusive).
    pub end_time: NaiveTime,
    /// The fee charged for a passage inside the band.
    pub fee: u32,
}

impl TaxationTimeBand {
    /// Creates a new band.
    pub fn new(start_time: NaiveTime, end_time: NaiveTime, fee: u32) -> Self {
        Self {
            start_time,
            end_time,
            fee,
        }
    }

    /// Returns true if `time` lies within `[start_time, end_time]`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start_time && time <= self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let band = TaxationTimeBand::new(hms(7, 0, 0), hms(7, 59, 59), 18);
        assert!(band.contains(hms(7, 0, 0)));
        assert!(band.contains(hms(7, 30, 0)));
        assert!(band.contains(hms(7, 59, 59)));
    }

    #[test]
    fn test_outside_band() {
        let band = TaxationTimeBand::new(hms(7, 0, 0), hms(7, 59, 59), 18);
        assert!(!band.contains(hms(6, 59, 59)));
        assert!(!band.contains(hms(8, 0, 0)));
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = "start_time: \"15:30:00\"\nend_time: \"16:59:59\"\nfee: 18\n";
        let band: TaxationTimeBand = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(band, TaxationTimeBand::new(hms(15, 30, 0), hms(16, 59, 59), 18));
    }
}
