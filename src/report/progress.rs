//! Overall completion ratio of a bucket sequence.

use super::aggregation::PeriodBucket;

/// Reduces a bucket sequence to a completion percentage: 100 times the sum
/// of actual progress over the sum of planned progress.
///
/// Returns `None` when no plan data exists (the plan sum is zero). That is
/// the "progress unknown" sentinel: callers must not display it as 0% and a
/// `NaN` never escapes this function.
pub fn progress(buckets: &[PeriodBucket]) -> Option<f64> {
    let planned: f64 = buckets.iter().map(|bucket| bucket.period_plan).sum();

    if planned == 0.0 {
        return None;
    }

    let actual: f64 = buckets.iter().map(|bucket| bucket.period_actual).sum();
    Some(100.0 * actual / planned)
}
