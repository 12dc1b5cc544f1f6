//! Surveillance schedule generation.
//!
//! Follow-up cystoscopy cadence is a fixed month-offset table per risk
//! category, applied to the TURBT procedure date.

use crate::{Error, Result, RiskCategory};
use chrono::{Months, NaiveDate};

// Cystoscopy follow-up offsets in months from the procedure date
const LOW_RISK_OFFSETS: &[u32] = &[3, 12, 24, 36, 48, 60];
const INTERMEDIATE_RISK_OFFSETS: &[u32] = &[3, 6, 12, 18, 24, 30, 36, 48, 60];
const HIGH_RISK_OFFSETS: &[u32] = &[3, 6, 9, 12, 18, 24, 30, 36, 48, 60];

/// Month offsets applied to the anchor date for the given category
pub fn surveillance_offsets(category: RiskCategory) -> &'static [u32] {
    match category {
        RiskCategory::Low => LOW_RISK_OFFSETS,
        RiskCategory::Intermediate => INTERMEDIATE_RISK_OFFSETS,
        RiskCategory::High => HIGH_RISK_OFFSETS,
    }
}

/// Parse an anchor date in ISO calendar form (`YYYY-MM-DD`).
///
/// An anchor is required before a schedule can be generated; a missing or
/// malformed date is an invalid argument, never a silent empty schedule.
pub fn parse_anchor(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument("anchor date is required".into()));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|e| Error::InvalidArgument(format!("anchor date {:?}: {}", trimmed, e)))
}

/// Generate the surveillance schedule for a category, anchored at `anchor`.
///
/// Each output date is the anchor advanced by one table offset. When the
/// target month is shorter than the anchor's day-of-month, the date clamps
/// to the last day of the target month (a Jan 31 anchor advanced three
/// months lands on Apr 30). Output is chronological ascending.
pub fn generate_schedule(anchor: NaiveDate, category: RiskCategory) -> Result<Vec<NaiveDate>> {
    let offsets = surveillance_offsets(category);
    tracing::debug!(%anchor, ?category, visits = offsets.len(), "generating surveillance schedule");

    offsets
        .iter()
        .map(|&months| {
            anchor
                .checked_add_months(Months::new(months))
                .ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "anchor {} + {} months is out of range",
                        anchor, months
                    ))
                })
        })
        .collect()
}
