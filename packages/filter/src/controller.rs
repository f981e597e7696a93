//! Filter state ownership and view recomputation.

use chrono::Utc;
use lapor_parkir_report_models::{PlateType, Report, ViolationType};

use crate::engine;
use crate::state::{DateFilter, FilterState, SearchScope};

/// Owns the [`FilterState`] and the last-loaded report collection, and
/// recomputes the filtered view on every change.
///
/// Every setter triggers a full synchronous recomputation over the whole
/// collection — there is no incremental diffing. The controller is
/// single-owner state: it has no interior mutability and no concurrent
/// writers.
#[derive(Debug, Default)]
pub struct SearchController {
    reports: Vec<Report>,
    state: FilterState,
    filtered: Vec<Report>,
}

impl SearchController {
    /// Creates a controller over the given collection with the
    /// all-permissive default filter state.
    #[must_use]
    pub fn new(reports: Vec<Report>) -> Self {
        let mut controller = Self {
            reports,
            state: FilterState::default(),
            filtered: Vec::new(),
        };
        controller.recompute();
        controller
    }

    /// Replaces the source collection (e.g. after a reload) and
    /// recomputes.
    pub fn set_reports(&mut self, reports: Vec<Report>) {
        self.reports = reports;
        self.recompute();
    }

    /// Sets the free-text query and recomputes.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        self.recompute();
    }

    /// Sets the search scope and recomputes.
    pub fn set_search_scope(&mut self, scope: SearchScope) {
        self.state.search_scope = scope;
        self.recompute();
    }

    /// Sets the date-range bucket and recomputes.
    pub fn set_date_filter(&mut self, filter: DateFilter) {
        self.state.date_filter = filter;
        self.recompute();
    }

    /// Toggles a violation type in the multi-select: present is removed,
    /// absent is added. Membership is set-based, so toggling never
    /// accumulates duplicates.
    pub fn toggle_violation(&mut self, violation: ViolationType) {
        if !self.state.selected_violations.remove(&violation) {
            self.state.selected_violations.insert(violation);
        }
        self.recompute();
    }

    /// Toggles a plate type in the multi-select, with the same semantics
    /// as [`Self::toggle_violation`].
    pub fn toggle_plate_type(&mut self, plate_type: PlateType) {
        if !self.state.selected_plate_types.remove(&plate_type) {
            self.state.selected_plate_types.insert(plate_type);
        }
        self.recompute();
    }

    /// Resets every criterion to its default in one state transition,
    /// then recomputes once — a consumer never observes a partially
    /// cleared state.
    pub fn clear_all_filters(&mut self) {
        self.state = FilterState::default();
        self.recompute();
    }

    /// The current filtered view, in the source collection's order.
    #[must_use]
    pub fn filtered(&self) -> &[Report] {
        &self.filtered
    }

    /// The current filter state.
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// True when any criterion deviates from its default.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.state.has_active_filters()
    }

    /// `(matching, total)` counts for the results readout.
    #[must_use]
    pub fn stats(&self) -> (usize, usize) {
        (self.filtered.len(), self.reports.len())
    }

    fn recompute(&mut self) {
        self.filtered = engine::apply_filters(&self.reports, &self.state, Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lapor_parkir_report_models::{ReportLocation, VehicleType};

    fn report(id: i64, plate: &str, violations: &[&str]) -> Report {
        Report {
            id,
            plate_number: plate.to_string(),
            plate_type: PlateType::Regular,
            vehicle_type: VehicleType::Car,
            violations: violations.iter().map(ToString::to_string).collect(),
            location: ReportLocation {
                address: "Jl. Sudirman".to_string(),
                coordinates: None,
            },
            notes: String::new(),
            timestamp: Utc::now(),
            date: "6/15/2025".to_string(),
            time: "7:00:00 PM".to_string(),
        }
    }

    fn sample() -> Vec<Report> {
        let mut reports = vec![
            report(3, "B3CCC", &["crosswalk"]),
            report(2, "B2BBB", &["double_parking"]),
            report(1, "B1AAA", &["crosswalk"]),
        ];
        reports[1].plate_type = PlateType::Police;
        reports
    }

    fn ids(reports: &[Report]) -> Vec<i64> {
        reports.iter().map(|r| r.id).collect()
    }

    #[test]
    fn starts_with_the_full_collection_visible() {
        let controller = SearchController::new(sample());
        assert_eq!(ids(controller.filtered()), vec![3, 2, 1]);
        assert!(!controller.has_active_filters());
        assert_eq!(controller.stats(), (3, 3));
    }

    #[test]
    fn every_setter_recomputes_the_view() {
        let mut controller = SearchController::new(sample());

        controller.set_search_query("b2");
        assert_eq!(ids(controller.filtered()), vec![2]);
        assert!(controller.has_active_filters());

        controller.set_search_query("");
        controller.toggle_violation(ViolationType::Crosswalk);
        assert_eq!(ids(controller.filtered()), vec![3, 1]);

        controller.clear_all_filters();
        controller.toggle_plate_type(PlateType::Police);
        assert_eq!(ids(controller.filtered()), vec![2]);
        assert_eq!(controller.stats(), (1, 3));
    }

    #[test]
    fn set_reports_refilters_the_new_collection() {
        let mut controller = SearchController::new(sample());
        controller.toggle_violation(ViolationType::Crosswalk);
        assert_eq!(ids(controller.filtered()), vec![3, 1]);

        controller.set_reports(vec![report(9, "B9ZZZ", &["crosswalk"])]);
        assert_eq!(ids(controller.filtered()), vec![9]);
    }

    #[test]
    fn toggle_twice_returns_to_the_original_set() {
        let mut controller = SearchController::new(sample());
        let before = controller.state().clone();

        controller.toggle_violation(ViolationType::NoStopping);
        assert!(controller.state().selected_violations.contains(&ViolationType::NoStopping));
        controller.toggle_violation(ViolationType::NoStopping);
        assert_eq!(*controller.state(), before);

        controller.toggle_plate_type(PlateType::Emergency);
        controller.toggle_plate_type(PlateType::Emergency);
        assert_eq!(*controller.state(), before);
    }

    #[test]
    fn toggling_never_accumulates_duplicates() {
        let mut controller = SearchController::new(sample());
        controller.toggle_violation(ViolationType::Crosswalk);
        controller.toggle_violation(ViolationType::Crosswalk);
        controller.toggle_violation(ViolationType::Crosswalk);
        assert_eq!(controller.state().selected_violations.len(), 1);
    }

    #[test]
    fn clear_all_filters_is_idempotent_and_deactivates() {
        let mut controller = SearchController::new(sample());
        controller.set_search_query("b1");
        controller.set_search_scope(SearchScope::Plates);
        controller.set_date_filter(DateFilter::LastWeek);
        controller.toggle_violation(ViolationType::Crosswalk);
        controller.toggle_plate_type(PlateType::Police);
        assert!(controller.has_active_filters());

        controller.clear_all_filters();
        let after_once = controller.state().clone();
        assert!(!controller.has_active_filters());
        assert_eq!(after_once, FilterState::default());
        assert_eq!(ids(controller.filtered()), vec![3, 2, 1]);

        controller.clear_all_filters();
        assert_eq!(*controller.state(), after_once);
        assert_eq!(ids(controller.filtered()), vec![3, 2, 1]);
    }
}
