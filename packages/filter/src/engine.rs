//! Pure filter predicate stages.
//!
//! Each stage takes the report collection and returns the surviving
//! subset, preserving input order. A stage whose criterion is at its
//! all-permissive default passes the collection through unchanged. The
//! stages are pure intersections, so [`apply_filters`] may chain them in
//! any order without changing the resulting set; the canonical order is
//! search → date → violations → plate types.
//!
//! Matching operates on raw identifiers only — never on translated
//! labels — and is total over any record with the minimum shape: unknown
//! violation identifiers are matched and carried like known ones.

use std::collections::BTreeSet;

use chrono::{DateTime, Days, Duration, Local, Months, Utc};
use lapor_parkir_report_models::{PlateType, Report, ViolationType};

use crate::state::{DateFilter, FilterState, SearchScope};

/// Classifies a report instant against a relative date-range bucket.
///
/// Calendar-day buckets (`today`, `yesterday`) compare local calendar
/// days; the rolling buckets are inclusive lower bounds with no upper
/// bound. `last_month` uses calendar-month arithmetic, not 30 days.
/// Buckets without a concrete range (`all`, the reserved `custom`) keep
/// everything.
#[must_use]
pub fn in_date_range(timestamp: DateTime<Utc>, filter: DateFilter, now: DateTime<Utc>) -> bool {
    match filter {
        DateFilter::All | DateFilter::Custom => true,
        DateFilter::Today => {
            timestamp.with_timezone(&Local).date_naive() == now.with_timezone(&Local).date_naive()
        }
        DateFilter::Yesterday => now
            .with_timezone(&Local)
            .date_naive()
            .checked_sub_days(Days::new(1))
            .is_some_and(|yesterday| timestamp.with_timezone(&Local).date_naive() == yesterday),
        DateFilter::LastWeek => timestamp >= now - Duration::days(7),
        DateFilter::LastMonth => match now.checked_sub_months(Months::new(1)) {
            Some(cutoff) => timestamp >= cutoff,
            None => true,
        },
    }
}

/// Free-text stage. A query that is blank after trimming passes every
/// report; otherwise the query is lowercased as-is (internal whitespace
/// kept) and matched as an unanchored substring against the scoped
/// field(s).
#[must_use]
pub fn filter_by_search(reports: &[Report], query: &str, scope: SearchScope) -> Vec<Report> {
    if query.trim().is_empty() {
        return reports.to_vec();
    }

    let term = query.to_lowercase();
    reports
        .iter()
        .filter(|report| matches_search(report, &term, scope))
        .cloned()
        .collect()
}

fn matches_search(report: &Report, term: &str, scope: SearchScope) -> bool {
    match scope {
        SearchScope::Plates => report.plate_number.to_lowercase().contains(term),
        SearchScope::Location => report.location.address.to_lowercase().contains(term),
        SearchScope::Notes => report.notes.to_lowercase().contains(term),
        SearchScope::All => {
            report.plate_number.to_lowercase().contains(term)
                || report.location.address.to_lowercase().contains(term)
                || report.notes.to_lowercase().contains(term)
                || report
                    .violations
                    .iter()
                    .any(|violation| violation.to_lowercase().contains(term))
        }
    }
}

/// Date-range stage. `now` is computed once per evaluation by the caller
/// so every report in a pass is classified against the same instant.
#[must_use]
pub fn filter_by_date(reports: &[Report], filter: DateFilter, now: DateTime<Utc>) -> Vec<Report> {
    if filter == DateFilter::All {
        return reports.to_vec();
    }

    reports
        .iter()
        .filter(|report| in_date_range(report.timestamp, filter, now))
        .cloned()
        .collect()
}

/// Violation-type stage. Keeps a report when its violation set intersects
/// the selection — any common element, not all of them.
#[must_use]
pub fn filter_by_violations(
    reports: &[Report],
    selected: &BTreeSet<ViolationType>,
) -> Vec<Report> {
    if selected.is_empty() {
        return reports.to_vec();
    }

    reports
        .iter()
        .filter(|report| {
            selected.iter().any(|violation| {
                report
                    .violations
                    .iter()
                    .any(|id| id.as_str() == violation.as_ref())
            })
        })
        .cloned()
        .collect()
}

/// Plate-type stage. Keeps a report when its plate type is in the
/// selection. Records without an explicit plate type were already
/// defaulted to regular at the deserialization boundary.
#[must_use]
pub fn filter_by_plate_types(reports: &[Report], selected: &BTreeSet<PlateType>) -> Vec<Report> {
    if selected.is_empty() {
        return reports.to_vec();
    }

    reports
        .iter()
        .filter(|report| selected.contains(&report.plate_type))
        .cloned()
        .collect()
}

/// Applies all four stages in the canonical order, producing the visible
/// subset in the input collection's (newest-first) order.
#[must_use]
pub fn apply_filters(reports: &[Report], state: &FilterState, now: DateTime<Utc>) -> Vec<Report> {
    let filtered = filter_by_search(reports, &state.search_query, state.search_scope);
    let filtered = filter_by_date(&filtered, state.date_filter, now);
    let filtered = filter_by_violations(&filtered, &state.selected_violations);
    filter_by_plate_types(&filtered, &state.selected_plate_types)
}
