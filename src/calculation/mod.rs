//! Calculation logic for the congestion tax engine.
//!
//! This module contains the daily tax calculator together with its
//! building blocks: toll-free date detection, per-passage fee lookup in
//! ordered time bands, and grouping of passages into charge intervals.

mod calculator;
mod fee_lookup;
mod intervals;
mod toll_free;

pub use calculator::{DAILY_FEE_CAP, TaxCalculator};
pub use fee_lookup::{band_fee, toll_fee};
pub use intervals::partition_into_intervals;
pub use toll_free::{TollFreeReason, is_toll_free_date, toll_free_reason};
