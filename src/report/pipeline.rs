//! High-level report pipelines called by the dashboard views.
//!
//! Each function runs the full transformation for one view from a
//! [Project]: bucket the daily records, merge the authored targets, and
//! optionally attach the project-wide ceilings. Every call recomputes from
//! scratch; there is no cache to invalidate.

use crate::{Granularity, Project};

use super::{
    aggregation::{self, PeriodBucket},
    progress::progress,
    revenue::{self, RevenueBucket},
    targets,
};

/// Builds the plan/actual report for a project at the given granularity.
///
/// # Arguments
/// * `project` - The project supplying records, targets, and ceilings
/// * `granularity` - The rollup resolution selected by the caller
/// * `include_totals` - Whether to attach the project-wide ceilings to
///   every bucket; when `false` the ceiling fields stay 0
///
/// # Returns
/// Chronologically ordered buckets with per-period sums and merged targets.
pub fn volume_report(
    project: &Project,
    granularity: Granularity,
    include_totals: bool,
) -> Vec<PeriodBucket> {
    let mut buckets =
        aggregation::aggregate(&project.reports.daily, granularity, project.start_date);

    let authored_targets = match granularity {
        Granularity::Daily => &[][..],
        Granularity::Weekly => project.reports.weekly.as_slice(),
        Granularity::Monthly => project.reports.monthly.as_slice(),
    };
    targets::merge_targets(
        &mut buckets,
        authored_targets,
        granularity,
        project.start_date,
    );

    if include_totals {
        for bucket in &mut buckets {
            bucket.total_revenue = project.total_revenue;
            bucket.total_volume = project.total_volume;
        }
    }

    buckets
}

/// Builds the revenue report for a project at the given granularity.
///
/// Independent of [volume_report]: the two views can be requested at
/// different granularities at the same time and never share buckets.
pub fn revenue_report(
    project: &Project,
    granularity: Granularity,
    include_totals: bool,
) -> Vec<RevenueBucket> {
    let mut buckets =
        revenue::aggregate_revenue(&project.reports.daily, granularity, project.start_date);

    if include_totals {
        for bucket in &mut buckets {
            bucket.total_revenue = project.total_revenue;
        }
    }

    buckets
}

/// The project's overall completion percentage at the given granularity, or
/// `None` when no plan data exists.
pub fn progress_report(project: &Project, granularity: Granularity) -> Option<f64> {
    let buckets = volume_report(project, granularity, false);
    progress(&buckets)
}
