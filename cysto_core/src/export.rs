//! Export serializers for assessment results.
//!
//! Two document formats leave the system: a plain-text treatment report
//! and an iCalendar feed of the surveillance schedule. Both serializers
//! build strings only; writing them to disk or clipboard is the caller's
//! job.

use crate::RiskCategory;
use chrono::NaiveDate;

/// Title line of the plain-text report
const REPORT_TITLE: &str = "Bladder Cancer Risk Stratification";

/// Render the downloadable plain-text treatment report.
pub fn plain_text_report(category: RiskCategory, treatment: &str) -> String {
    format!(
        "{}\n\nRisk Category: {}\n\nTreatment Plan:\n{}",
        REPORT_TITLE, category, treatment
    )
}

/// Render the short risk/treatment summary used for clipboard hand-off.
pub fn clipboard_summary(category: RiskCategory, treatment: &str) -> String {
    format!("Risk: {}\nTreatment: {}", category, treatment)
}

/// Render the surveillance schedule as an iCalendar (RFC 5545) document.
///
/// Returns `None` for an empty schedule: there is nothing to export and
/// the caller is expected to skip the write. Each visit becomes one VEVENT
/// with identical start and end stamps at midnight UTC.
pub fn calendar_feed(schedule: &[NaiveDate]) -> Option<String> {
    if schedule.is_empty() {
        tracing::info!("empty schedule, no calendar feed produced");
        return None;
    }

    let mut ics = String::from("BEGIN:VCALENDAR\nVERSION:2.0\nCALSCALE:GREGORIAN\n");
    for date in schedule {
        let stamp = ics_timestamp(*date);
        ics.push_str("BEGIN:VEVENT\n");
        ics.push_str("SUMMARY:Bladder Cancer Surveillance Visit\n");
        ics.push_str(&format!("DTSTART:{}\n", stamp));
        ics.push_str(&format!("DTEND:{}\n", stamp));
        ics.push_str("DESCRIPTION:Scheduled surveillance cystoscopy\n");
        ics.push_str("END:VEVENT\n");
    }
    ics.push_str("END:VCALENDAR");

    Some(ics)
}

/// Midnight-UTC timestamp in compact iCalendar form, e.g. `20250101T000000Z`
fn ics_timestamp(date: NaiveDate) -> String {
    format!("{}T000000Z", date.format("%Y%m%d"))
}
