//! Grouping of passages into charge intervals.

use chrono::{Duration, NaiveDateTime};

/// Splits sorted passages into charge intervals.
///
/// Each interval is anchored at its first passage `T` and holds every
/// following passage strictly before `T + interval`. The first passage at or
/// after that bound anchors the next interval. Every returned slice is
/// non-empty and the slices cover `sorted` in order.
///
/// `sorted` must be in ascending order.
///
/// # Example
///
/// ```
/// use congestion_tax::calculation::partition_into_intervals;
/// use chrono::{Duration, NaiveDateTime};
///
/// let at = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let passages = [
///     at("2013-02-07 06:00:00"),
///     at("2013-02-07 06:59:59"),
///     at("2013-02-07 07:00:00"),
/// ];
///
/// let intervals = partition_into_intervals(&passages, Duration::minutes(60));
/// assert_eq!(intervals.len(), 2);
/// assert_eq!(intervals[0].len(), 2);
/// assert_eq!(intervals[1], &passages[2..]);
/// ```
pub fn partition_into_intervals(
    sorted: &[NaiveDateTime],
    interval: Duration,
) -> Vec<&[NaiveDateTime]> {
    let mut intervals = Vec::new();
    let mut rest = sorted;

    while let Some(&anchor) = rest.first() {
        // A window ending past the representable range covers every
        // remaining passage.
        let len = match anchor.checked_add_signed(interval) {
            // A non-positive interval would leave the anchor outside its own
            // window; it still takes the anchor so the cursor always advances.
            Some(window_end) => rest.partition_point(|&t| t < window_end).max(1),
            None => rest.len(),
        };
        let (group, tail) = rest.split_at(len);
        intervals.push(group);
        rest = tail;
    }

    intervals
}
