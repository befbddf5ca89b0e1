//! Tax assessment models.
//!
//! This module contains the [`TaxAssessment`] and [`ChargeInterval`] types
//! describing how a day's total was reached.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One charge interval: passages grouped under a single charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeInterval {
    /// The first passage of the interval; the window is anchored here.
    pub start: NaiveDateTime,
    /// All passages grouped into this interval, in ascending order.
    pub passages: Vec<NaiveDateTime>,
    /// The highest fee among the passages; the interval's charge.
    pub fee: u32,
}

/// The outcome of a day's congestion tax calculation.
///
/// # Example
///
/// ```
/// use congestion_tax::models::TaxAssessment;
///
/// let assessment = TaxAssessment::empty();
/// assert_eq!(assessment.total, 0);
/// assert!(!assessment.is_capped());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    /// The amount due, after applying the daily cap.
    pub total: u32,
    /// The sum of all interval charges before the cap.
    pub uncapped_total: u32,
    /// The charge intervals in chronological order.
    pub intervals: Vec<ChargeInterval>,
}

impl TaxAssessment {
    /// An assessment for a day without passages.
    pub fn empty() -> Self {
        Self {
            total: 0,
            uncapped_total: 0,
            intervals: Vec::new(),
        }
    }

    /// Returns true if the daily cap reduced the total.
    pub fn is_capped(&self) -> bool {
        self.total < self.uncapped_total
    }
}
