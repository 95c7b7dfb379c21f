//! Merging externally authored targets into period buckets.
//!
//! Target arrays are authored one entry per period in period order: entry
//! `i` of the weekly collection is week `i + 1`, and entry `i` of the
//! monthly collection is the `i`-th calendar month counted from the project
//! start date's month. The merge materializes those period keys and joins
//! buckets by key, so a target always lands on the period it was authored
//! for — even when the daily records cover a different set of periods than
//! the targets do.

use std::collections::HashMap;

use time::Date;

use crate::{Granularity, Target};

use super::aggregation::{PeriodBucket, PeriodKey};

/// The key of the period that target entry `index` was authored for, or
/// `None` for daily granularity (daily views carry no authored targets).
fn target_key(index: usize, granularity: Granularity, start_date: Date) -> Option<PeriodKey> {
    match granularity {
        Granularity::Daily => None,
        Granularity::Weekly => Some(PeriodKey::Week(index as i64 + 1)),
        Granularity::Monthly => {
            let months =
                i64::from(start_date.year()) * 12 + i64::from(u8::from(start_date.month())) - 1
                    + index as i64;
            Some(PeriodKey::Month {
                year: months.div_euclid(12) as i32,
                month: months.rem_euclid(12) as u8 + 1,
            })
        }
    }
}

/// Fills each bucket's `target_plan`/`target_actual` from the target entry
/// authored for that bucket's period.
///
/// Buckets whose period has no authored target keep their zero targets, and
/// targets authored for periods with no daily records are ignored. A count
/// mismatch between buckets and targets is diagnosable but never fatal: the
/// dashboards still render best-effort for partially-configured projects.
pub fn merge_targets(
    buckets: &mut [PeriodBucket],
    targets: &[Target],
    granularity: Granularity,
    start_date: Date,
) {
    if targets.is_empty() {
        return;
    }

    if buckets.len() != targets.len() {
        tracing::warn!(
            "{granularity} report generated {} periods but {} targets were authored; \
            periods without a matching target keep zero targets",
            buckets.len(),
            targets.len()
        );
    }

    let keyed_targets: HashMap<PeriodKey, &Target> = targets
        .iter()
        .enumerate()
        .filter_map(|(index, target)| {
            target_key(index, granularity, start_date).map(|key| (key, target))
        })
        .collect();

    for bucket in buckets {
        if let Some(target) = keyed_targets.get(&bucket.key) {
            bucket.target_plan = target.target_plan;
            bucket.target_actual = target.target_actual;
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::merge_targets;
    use crate::{DailyRecord, Granularity, Target, aggregate};

    fn target(target_plan: f64, target_actual: f64) -> Target {
        Target {
            target_plan,
            target_actual,
        }
    }

    fn record(date: time::Date, plan: f64) -> DailyRecord {
        DailyRecord {
            plan,
            ..DailyRecord::new(date)
        }
    }

    #[test]
    fn assigns_weekly_targets_by_week_number() {
        let records = vec![
            record(date!(2024 - 01 - 02), 10.0),
            record(date!(2024 - 01 - 09), 20.0),
        ];
        let mut buckets = aggregate(&records, Granularity::Weekly, date!(2024 - 01 - 01));
        let targets = vec![target(12.0, 11.0), target(22.0, 21.0)];

        merge_targets(
            &mut buckets,
            &targets,
            Granularity::Weekly,
            date!(2024 - 01 - 01),
        );

        assert_eq!(buckets[0].target_plan, 12.0);
        assert_eq!(buckets[0].target_actual, 11.0);
        assert_eq!(buckets[1].target_plan, 22.0);
        assert_eq!(buckets[1].target_actual, 21.0);
    }

    #[test]
    fn a_gap_in_the_records_does_not_shift_later_targets() {
        // No records in week 2: a positional merge would hand week 3 the
        // week 2 target, the keyed merge must not.
        let records = vec![
            record(date!(2024 - 01 - 02), 10.0),
            record(date!(2024 - 01 - 16), 30.0),
        ];
        let mut buckets = aggregate(&records, Granularity::Weekly, date!(2024 - 01 - 01));
        let targets = vec![target(1.0, 0.0), target(2.0, 0.0), target(3.0, 0.0)];

        merge_targets(
            &mut buckets,
            &targets,
            Granularity::Weekly,
            date!(2024 - 01 - 01),
        );

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].target_plan, 1.0);
        assert_eq!(buckets[1].target_plan, 3.0);
    }

    #[test]
    fn periods_beyond_the_authored_targets_keep_zero_targets() {
        let records = vec![
            record(date!(2024 - 01 - 02), 10.0),
            record(date!(2024 - 01 - 09), 20.0),
        ];
        let mut buckets = aggregate(&records, Granularity::Weekly, date!(2024 - 01 - 01));

        merge_targets(
            &mut buckets,
            &[target(12.0, 11.0)],
            Granularity::Weekly,
            date!(2024 - 01 - 01),
        );

        assert_eq!(buckets[0].target_plan, 12.0);
        assert_eq!(buckets[1].target_plan, 0.0);
        assert_eq!(buckets[1].target_actual, 0.0);
    }

    #[test]
    fn monthly_targets_follow_calendar_months_across_a_year_boundary() {
        let start = date!(2023 - 11 - 15);
        let records = vec![
            record(date!(2023 - 11 - 20), 1.0),
            record(date!(2023 - 12 - 20), 2.0),
            record(date!(2024 - 01 - 20), 3.0),
        ];
        let mut buckets = aggregate(&records, Granularity::Monthly, start);
        let targets = vec![target(110.0, 0.0), target(120.0, 0.0), target(130.0, 0.0)];

        merge_targets(&mut buckets, &targets, Granularity::Monthly, start);

        assert_eq!(buckets[0].key.to_string(), "2023-11");
        assert_eq!(buckets[0].target_plan, 110.0);
        assert_eq!(buckets[1].key.to_string(), "2023-12");
        assert_eq!(buckets[1].target_plan, 120.0);
        assert_eq!(buckets[2].key.to_string(), "2024-1");
        assert_eq!(buckets[2].target_plan, 130.0);
    }

    #[test]
    fn daily_granularity_carries_no_targets() {
        let records = vec![record(date!(2024 - 01 - 02), 10.0)];
        let mut buckets = aggregate(&records, Granularity::Daily, date!(2024 - 01 - 01));

        merge_targets(
            &mut buckets,
            &[target(12.0, 11.0)],
            Granularity::Daily,
            date!(2024 - 01 - 01),
        );

        assert_eq!(buckets[0].target_plan, 0.0);
        assert_eq!(buckets[0].target_actual, 0.0);
    }

    #[test]
    fn surplus_targets_are_ignored() {
        let records = vec![record(date!(2024 - 01 - 02), 10.0)];
        let mut buckets = aggregate(&records, Granularity::Weekly, date!(2024 - 01 - 01));
        let targets = vec![target(1.0, 0.0), target(2.0, 0.0), target(3.0, 0.0)];

        merge_targets(
            &mut buckets,
            &targets,
            Granularity::Weekly,
            date!(2024 - 01 - 01),
        );

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].target_plan, 1.0);
    }
}
