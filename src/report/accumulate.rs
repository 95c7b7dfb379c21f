//! Running-total projection over a bucket sequence.

use time::Date;

use super::aggregation::{PeriodBucket, PeriodKey};

/// One period's running totals, used by progress charts and remaining-work
/// displays.
///
/// Cumulative figures get their own type and field names so a consumer can
/// never mistake a per-period sum for a running total or vice versa.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeBucket {
    /// The identity of the period, also its dashboard label.
    pub key: PeriodKey,

    /// The first calendar date of the period.
    pub period_start: Date,

    /// Actual progress achieved up to and including this period.
    pub volume_to_date: f64,

    /// Planned progress up to and including this period.
    pub target_volume_to_date: f64,

    /// The project-wide volume ceiling, passed through unchanged.
    pub total_volume: f64,

    /// The project-wide revenue ceiling, passed through unchanged.
    pub total_revenue: f64,
}

/// Projects per-period buckets into running cumulative totals.
///
/// For the bucket at index `i`, `volume_to_date` is the sum of
/// `period_actual` over buckets `0..=i` and `target_volume_to_date` the sum
/// of `period_plan`, so with non-negative inputs both series never decrease.
/// The project ceilings are carried through for progress-vs-ceiling
/// displays.
pub fn accumulate(buckets: &[PeriodBucket]) -> Vec<CumulativeBucket> {
    let mut volume_to_date = 0.0;
    let mut target_volume_to_date = 0.0;

    buckets
        .iter()
        .map(|bucket| {
            volume_to_date += bucket.period_actual;
            target_volume_to_date += bucket.period_plan;

            CumulativeBucket {
                key: bucket.key,
                period_start: bucket.period_start,
                volume_to_date,
                target_volume_to_date,
                total_volume: bucket.total_volume,
                total_revenue: bucket.total_revenue,
            }
        })
        .collect()
}
