//! The project data model consumed by the reporting engine.
//!
//! These types mirror the JSON shape produced by the project-fetch API. The
//! engine does not care how a document was fetched, only that it carries the
//! daily records and target collections described here. Numeric fields that
//! are absent from a document deserialize to 0 rather than failing, matching
//! the permissive policy the dashboards rely on for partially-filled records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// One calendar day of recorded project activity.
///
/// Dates are unique within a project but the collection is not guaranteed to
/// be sorted or contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    /// The day the activity was recorded.
    pub date: Date,

    /// Revenue earned on the day.
    #[serde(default)]
    pub revenue: f64,

    /// Amount paid out on the day.
    #[serde(default)]
    pub paid: f64,

    /// Work volume completed on the day.
    #[serde(default)]
    pub volume: f64,

    /// Volume target recorded alongside the day's work.
    #[serde(default)]
    pub target_volume: f64,

    /// Planned progress for the day.
    #[serde(default)]
    pub plan: f64,

    /// Actual progress achieved on the day.
    ///
    /// Historical project documents spell this field `aktual`; both
    /// spellings are accepted.
    #[serde(default, alias = "aktual")]
    pub actual: f64,

    /// Worker headcount by category, consumed by summary totals only.
    #[serde(default)]
    pub workers: HashMap<String, u32>,

    /// Equipment count by category, consumed by summary totals only.
    #[serde(default)]
    pub equipment: HashMap<String, u32>,
}

impl DailyRecord {
    /// Creates a record for `date` with every numeric field zeroed and empty
    /// headcount maps.
    pub fn new(date: Date) -> Self {
        Self {
            date,
            revenue: 0.0,
            paid: 0.0,
            volume: 0.0,
            target_volume: 0.0,
            plan: 0.0,
            actual: 0.0,
            workers: HashMap::new(),
            equipment: HashMap::new(),
        }
    }
}

/// An externally authored expected value for one reporting period.
///
/// Targets are authored independently of the daily records, one entry per
/// period in period order. They apply to plan/actual figures only; revenue
/// has no per-period target, just the project-wide ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    /// The expected plan value for the period.
    #[serde(default)]
    pub target_plan: f64,

    /// The expected actual value for the period.
    ///
    /// Accepts the historical `targetAktual` spelling.
    #[serde(default, alias = "targetAktual")]
    pub target_actual: f64,
}

/// The report collections owned by a project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Reports {
    /// The source of truth: one record per day of activity.
    #[serde(default)]
    pub daily: Vec<DailyRecord>,

    /// Weekly targets, one entry per week counted from the start date.
    #[serde(default)]
    pub weekly: Vec<Target>,

    /// Monthly targets, one entry per calendar month counted from the
    /// start date's month.
    #[serde(default)]
    pub monthly: Vec<Target>,
}

/// A project as the reporting engine sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Anchor date for relative week numbering.
    pub start_date: Date,

    /// Project-wide revenue ceiling, constant across all periods.
    #[serde(default)]
    pub total_revenue: f64,

    /// Project-wide volume ceiling, constant across all periods.
    #[serde(default)]
    pub total_volume: f64,

    /// The project's report collections.
    #[serde(default)]
    pub reports: Reports,
}

impl Project {
    /// Parses a project document from the JSON shape the project-fetch API
    /// produces.
    ///
    /// # Errors
    /// Returns [Error::InvalidProjectData] when the document is not valid
    /// JSON or contains an unparseable date.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|error| Error::InvalidProjectData(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::Project;
    use crate::Error;

    #[test]
    fn missing_numeric_fields_default_to_zero() {
        let json = r#"{
            "startDate": "2024-01-01",
            "reports": {
                "daily": [{ "date": "2024-01-02", "revenue": 150.0 }]
            }
        }"#;

        let project = Project::from_json(json).unwrap();

        assert_eq!(project.total_revenue, 0.0);
        assert_eq!(project.total_volume, 0.0);

        let record = &project.reports.daily[0];
        assert_eq!(record.date, date!(2024 - 01 - 02));
        assert_eq!(record.revenue, 150.0);
        assert_eq!(record.paid, 0.0);
        assert_eq!(record.volume, 0.0);
        assert_eq!(record.plan, 0.0);
        assert_eq!(record.actual, 0.0);
        assert!(record.workers.is_empty());
    }

    #[test]
    fn accepts_the_historical_aktual_spelling() {
        let json = r#"{
            "startDate": "2024-01-01",
            "reports": {
                "daily": [{ "date": "2024-01-02", "aktual": 8.0, "plan": 10.0 }],
                "weekly": [{ "targetPlan": 20.0, "targetAktual": 18.0 }]
            }
        }"#;

        let project = Project::from_json(json).unwrap();

        assert_eq!(project.reports.daily[0].actual, 8.0);
        assert_eq!(project.reports.weekly[0].target_actual, 18.0);
    }

    #[test]
    fn parses_headcount_maps() {
        let json = r#"{
            "startDate": "2024-01-01",
            "reports": {
                "daily": [{
                    "date": "2024-01-02",
                    "workers": { "mason": 4, "labourer": 10 },
                    "equipment": { "excavator": 1 }
                }]
            }
        }"#;

        let project = Project::from_json(json).unwrap();
        let record = &project.reports.daily[0];

        assert_eq!(record.workers["mason"], 4);
        assert_eq!(record.workers["labourer"], 10);
        assert_eq!(record.equipment["excavator"], 1);
    }

    #[test]
    fn missing_report_collections_default_to_empty() {
        let project = Project::from_json(r#"{ "startDate": "2024-01-01" }"#).unwrap();

        assert!(project.reports.daily.is_empty());
        assert!(project.reports.weekly.is_empty());
        assert!(project.reports.monthly.is_empty());
    }

    #[test]
    fn unparseable_date_is_a_construction_error() {
        let json = r#"{
            "startDate": "2024-01-01",
            "reports": { "daily": [{ "date": "not a date" }] }
        }"#;

        let result = Project::from_json(json);

        assert!(matches!(result, Err(Error::InvalidProjectData(_))));
    }

    #[test]
    fn malformed_json_is_a_construction_error() {
        assert!(matches!(
            Project::from_json("{"),
            Err(Error::InvalidProjectData(_))
        ));
    }
}
