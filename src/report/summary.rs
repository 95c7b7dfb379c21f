//! Summary-card totals over the daily headcount maps.
//!
//! The bucketing pipeline ignores the `workers`/`equipment` maps; the
//! summary cards show per-category totals across the whole record set and
//! the busiest single day.

use std::collections::HashMap;

use crate::DailyRecord;

/// Per-category resource totals for the summary cards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceSummary {
    /// Total worker-days per category across all records.
    pub workers: HashMap<String, u32>,

    /// Total equipment-days per category across all records.
    pub equipment: HashMap<String, u32>,

    /// The largest single-day worker headcount across all categories.
    pub peak_daily_workers: u32,
}

/// Totals the worker and equipment headcounts across a record set.
pub fn resource_summary(records: &[DailyRecord]) -> ResourceSummary {
    let mut summary = ResourceSummary::default();

    for record in records {
        let mut day_workers = 0;

        for (category, count) in &record.workers {
            *summary.workers.entry(category.clone()).or_insert(0) += count;
            day_workers += count;
        }
        for (category, count) in &record.equipment {
            *summary.equipment.entry(category.clone()).or_insert(0) += count;
        }

        summary.peak_daily_workers = summary.peak_daily_workers.max(day_workers);
    }

    summary
}
