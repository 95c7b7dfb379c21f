//! Time bucketing specialized for the monetary fields.
//!
//! The revenue chart (revenue vs. paid vs. project total) is requested
//! independently of the volume views and may run at a different
//! granularity, so it gets its own bucket type rather than sharing the
//! plan/actual pipeline's buckets. There is no target merge here: revenue
//! has no authored per-period target, only the project-wide ceiling.

use std::collections::HashMap;

use time::Date;

use crate::{DailyRecord, Granularity};

use super::aggregation::{PeriodKey, period_start_for};

/// One aggregation period's summed monetary figures.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueBucket {
    /// The identity of the period, also its dashboard label.
    pub key: PeriodKey,

    /// The first calendar date of the period.
    pub period_start: Date,

    /// Revenue earned during the period.
    pub period_revenue: f64,

    /// Amount paid out during the period.
    pub period_paid: f64,

    /// The project-wide revenue ceiling, constant across periods.
    pub total_revenue: f64,
}

/// Groups daily records into revenue buckets at the given granularity.
///
/// Bucketing follows the same period keys as [aggregate][crate::aggregate];
/// only the monetary fields are summed. Buckets are returned in
/// chronological order with `total_revenue` left at 0 for the pipeline to
/// fill in.
pub fn aggregate_revenue(
    records: &[DailyRecord],
    granularity: Granularity,
    start_date: Date,
) -> Vec<RevenueBucket> {
    let mut buckets: HashMap<PeriodKey, RevenueBucket> = HashMap::new();

    for record in records {
        let key = PeriodKey::for_date(record.date, granularity, start_date);
        let bucket = buckets.entry(key).or_insert_with(|| RevenueBucket {
            key,
            period_start: period_start_for(record.date, granularity, start_date),
            period_revenue: 0.0,
            period_paid: 0.0,
            total_revenue: 0.0,
        });

        bucket.period_revenue += record.revenue;
        bucket.period_paid += record.paid;
    }

    let mut buckets: Vec<_> = buckets.into_values().collect();
    buckets.sort_by_key(|bucket| bucket.period_start);
    buckets
}
