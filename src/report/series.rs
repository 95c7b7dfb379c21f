//! Chart-ready series extracted from bucket sequences.
//!
//! The chart components consume parallel label/value vectors, one entry per
//! x-axis point. This module only shapes data; rendering belongs to the
//! consuming views.

use super::{
    accumulate::CumulativeBucket,
    aggregation::PeriodBucket,
    revenue::RevenueBucket,
};

/// The dashboard labels of a bucket sequence, in order.
pub fn bucket_labels(buckets: &[PeriodBucket]) -> Vec<String> {
    buckets.iter().map(|bucket| bucket.key.to_string()).collect()
}

/// Shapes the per-period plan vs. actual chart.
///
/// # Returns
/// Tuple of (labels, planned values, actual values), index-aligned.
pub fn plan_actual_series(buckets: &[PeriodBucket]) -> (Vec<String>, Vec<f64>, Vec<f64>) {
    let labels = bucket_labels(buckets);
    let planned = buckets.iter().map(|bucket| bucket.period_plan).collect();
    let actuals = buckets.iter().map(|bucket| bucket.period_actual).collect();

    (labels, planned, actuals)
}

/// Shapes the cumulative progress chart: volume-to-date against
/// target-volume-to-date.
///
/// # Returns
/// Tuple of (labels, volume-to-date, target-volume-to-date), index-aligned.
pub fn progress_series(series: &[CumulativeBucket]) -> (Vec<String>, Vec<f64>, Vec<f64>) {
    let labels = series.iter().map(|point| point.key.to_string()).collect();
    let volumes = series.iter().map(|point| point.volume_to_date).collect();
    let targets = series
        .iter()
        .map(|point| point.target_volume_to_date)
        .collect();

    (labels, volumes, targets)
}

/// Shapes the revenue chart: revenue against paid amounts per period.
///
/// # Returns
/// Tuple of (labels, revenue values, paid values), index-aligned.
pub fn revenue_series(buckets: &[RevenueBucket]) -> (Vec<String>, Vec<f64>, Vec<f64>) {
    let labels = buckets.iter().map(|bucket| bucket.key.to_string()).collect();
    let revenues = buckets.iter().map(|bucket| bucket.period_revenue).collect();
    let paid = buckets.iter().map(|bucket| bucket.period_paid).collect();

    (labels, revenues, paid)
}
