//! Foreman is a web app for managing contracting businesses: projects,
//! inventory, teams and finances.
//!
//! This library provides the report aggregation engine behind the project
//! dashboards. It rolls a project's daily operational records up into daily,
//! weekly, or monthly buckets, merges the externally authored per-period
//! targets into those buckets, derives running cumulative series, and reduces
//! them to the progress percentages shown on charts, summary cards, and PDF
//! exports.
//!
//! The engine is a pure, synchronous transformation: it does not fetch,
//! persist, or render anything. Callers hand it a [Project] and a
//! [Granularity] and get freshly computed buckets back on every call.

#![warn(missing_docs)]

mod granularity;
mod project;
mod report;

pub use granularity::Granularity;
pub use project::{DailyRecord, Project, Reports, Target};
pub use report::{
    CumulativeBucket, PeriodBucket, PeriodKey, ResourceSummary, RevenueBucket, accumulate,
    aggregate, aggregate_revenue, bucket_labels, merge_targets, plan_actual_series, progress,
    progress_report, progress_series, resource_summary, revenue_report, revenue_series,
    volume_report,
};

/// The errors that may occur in the reporting engine.
///
/// The aggregation pipeline itself is total: once a [Project] has been
/// constructed, every stage succeeds. Errors only arise at the construction
/// boundary, before any aggregation runs.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The given string does not name a supported rollup resolution.
    #[error("\"{0}\" is not a granularity, expected one of daily, weekly or monthly")]
    InvalidGranularity(String),

    /// A project document could not be parsed.
    ///
    /// This covers malformed JSON as well as unparseable dates; both are
    /// caller precondition violations that surface here, at construction
    /// time, rather than from the aggregation logic.
    #[error("could not parse the project document: {0}")]
    InvalidProjectData(String),
}
