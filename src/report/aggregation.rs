//! Time bucketing for daily project records.
//!
//! Provides the period key that identifies a bucket, and the aggregation
//! that groups a project's daily records into daily, weekly, or monthly
//! buckets by summing every numeric field within each period.

use std::{collections::HashMap, fmt};

use time::{Date, Duration};

use crate::{DailyRecord, Granularity};

/// The identity of one aggregation period.
///
/// The key is the join point between generated buckets and externally
/// authored targets, and its [Display][fmt::Display] form is the label the
/// dashboards show for the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodKey {
    /// A single calendar day.
    Day(Date),

    /// Week `N` counted from the project start date, 1-based.
    ///
    /// Records dated before the start date floor toward negative infinity,
    /// so they keep week numbers of zero or below rather than being clamped
    /// into week 1. The label renders whatever the arithmetic produced.
    Week(i64),

    /// A calendar month, independent of the project start date.
    Month {
        /// The calendar year.
        year: i32,
        /// The calendar month, 1-based (January = 1).
        month: u8,
    },
}

impl PeriodKey {
    /// The key of the period `date` falls in at the given granularity.
    pub(super) fn for_date(date: Date, granularity: Granularity, start_date: Date) -> Self {
        match granularity {
            Granularity::Daily => PeriodKey::Day(date),
            Granularity::Weekly => {
                let days = (date - start_date).whole_days();
                PeriodKey::Week(days.div_euclid(7) + 1)
            }
            Granularity::Monthly => PeriodKey::Month {
                year: date.year(),
                month: u8::from(date.month()),
            },
        }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodKey::Day(date) => write!(f, "{date}"),
            PeriodKey::Week(number) => write!(f, "Week {number}"),
            PeriodKey::Month { year, month } => write!(f, "{year}-{month}"),
        }
    }
}

/// The first calendar date of the period `date` falls in.
///
/// Weekly periods are anchored to `start_date`; daily and monthly periods
/// ignore it.
pub(super) fn period_start_for(date: Date, granularity: Granularity, start_date: Date) -> Date {
    match granularity {
        Granularity::Daily => date,
        Granularity::Weekly => {
            let weeks = (date - start_date).whole_days().div_euclid(7);
            start_date + Duration::weeks(weeks)
        }
        Granularity::Monthly => date.replace_day(1).unwrap(),
    }
}

/// One aggregation period's summed daily figures.
///
/// The `period_` fields are sums over the records that fell into the
/// period; they are never overwritten with cumulative figures, which live
/// on [CumulativeBucket][crate::CumulativeBucket] instead. Target and
/// ceiling fields are zero until filled in by
/// [merge_targets][crate::merge_targets] and the report pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodBucket {
    /// The identity of the period, also its dashboard label.
    pub key: PeriodKey,

    /// The first calendar date of the period.
    pub period_start: Date,

    /// Revenue earned during the period.
    pub period_revenue: f64,

    /// Amount paid out during the period.
    pub period_paid: f64,

    /// Work volume completed during the period.
    pub period_volume: f64,

    /// Volume target recorded on the period's daily records.
    pub period_target_volume: f64,

    /// Planned progress for the period.
    pub period_plan: f64,

    /// Actual progress achieved during the period.
    pub period_actual: f64,

    /// The externally authored plan target for the period, 0 when none was
    /// authored.
    pub target_plan: f64,

    /// The externally authored actual target for the period, 0 when none
    /// was authored.
    pub target_actual: f64,

    /// The project-wide revenue ceiling, constant across periods.
    pub total_revenue: f64,

    /// The project-wide volume ceiling, constant across periods.
    pub total_volume: f64,
}

impl PeriodBucket {
    fn empty(key: PeriodKey, period_start: Date) -> Self {
        Self {
            key,
            period_start,
            period_revenue: 0.0,
            period_paid: 0.0,
            period_volume: 0.0,
            period_target_volume: 0.0,
            period_plan: 0.0,
            period_actual: 0.0,
            target_plan: 0.0,
            target_actual: 0.0,
            total_revenue: 0.0,
            total_volume: 0.0,
        }
    }
}

/// Groups daily records into period buckets at the given granularity.
///
/// Every record lands in exactly one bucket, so for any numeric field the
/// sum across all buckets equals the sum across the input records. Buckets
/// are returned in chronological order of their period start regardless of
/// the input order.
///
/// # Arguments
/// * `records` - The project's daily records, in any order
/// * `granularity` - The rollup resolution to bucket at
/// * `start_date` - The project start date anchoring week numbers
///
/// # Returns
/// Chronologically ordered buckets with per-period sums; target and ceiling
/// fields are left at 0.
pub fn aggregate(
    records: &[DailyRecord],
    granularity: Granularity,
    start_date: Date,
) -> Vec<PeriodBucket> {
    let mut buckets: HashMap<PeriodKey, PeriodBucket> = HashMap::new();

    for record in records {
        let key = PeriodKey::for_date(record.date, granularity, start_date);
        let bucket = buckets.entry(key).or_insert_with(|| {
            PeriodBucket::empty(key, period_start_for(record.date, granularity, start_date))
        });

        bucket.period_revenue += record.revenue;
        bucket.period_paid += record.paid;
        bucket.period_volume += record.volume;
        bucket.period_target_volume += record.target_volume;
        bucket.period_plan += record.plan;
        bucket.period_actual += record.actual;
    }

    let mut buckets: Vec<_> = buckets.into_values().collect();
    buckets.sort_by_key(|bucket| bucket.period_start);
    buckets
}
