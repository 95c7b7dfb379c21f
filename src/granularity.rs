//! The rollup resolution selected by report views.

use std::{fmt, str::FromStr};

use crate::Error;

/// The resolution a report is rolled up to.
///
/// Modelled as a closed enum so each call site dispatches on the variant
/// rather than comparing strings. The selection is owned by the caller
/// (typically a UI control); the engine holds no state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Granularity {
    /// One bucket per daily record, no grouping.
    Daily,
    /// Seven-day periods counted from the project start date.
    #[default]
    Weekly,
    /// Calendar months, independent of the project start date.
    Monthly,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Daily => write!(f, "daily"),
            Granularity::Weekly => write!(f, "weekly"),
            Granularity::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for Granularity {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.to_ascii_lowercase().as_str() {
            "daily" => Ok(Granularity::Daily),
            "weekly" => Ok(Granularity::Weekly),
            "monthly" => Ok(Granularity::Monthly),
            _ => Err(Error::InvalidGranularity(text.to_owned())),
        }
    }
}
