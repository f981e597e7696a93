//! Filter state and vocabulary.

use std::collections::BTreeSet;

use lapor_parkir_report_models::{PlateType, ViolationType};
use strum_macros::{AsRefStr, Display, EnumString};

/// Which report field(s) a free-text query is matched against.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum SearchScope {
    /// Match plates, location address, notes, and raw violation ids.
    #[default]
    All,
    /// Match the license plate only.
    Plates,
    /// Match the location address only.
    Location,
    /// Match the notes field only.
    Notes,
}

/// Relative date-range buckets for the date filter.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum DateFilter {
    /// No date restriction.
    #[default]
    All,
    /// Same local calendar day as the reference instant.
    Today,
    /// The local calendar day before the reference instant.
    Yesterday,
    /// Within the last 7 days (inclusive, no upper bound).
    LastWeek,
    /// Within the last calendar month (inclusive, no upper bound).
    LastMonth,
    /// Reserved in the vocabulary but not wired to a concrete range;
    /// classified as [`DateFilter::All`].
    Custom,
}

/// The user's chosen search/filter criteria. Ephemeral and client-owned —
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search query.
    pub search_query: String,
    /// Which field(s) the query matches against.
    pub search_scope: SearchScope,
    /// Relative date-range restriction.
    pub date_filter: DateFilter,
    /// Violation types to keep; empty means no restriction.
    pub selected_violations: BTreeSet<ViolationType>,
    /// Plate types to keep; empty means no restriction.
    pub selected_plate_types: BTreeSet<PlateType>,
}

impl FilterState {
    /// True when any criterion deviates from the all-permissive default.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.search_query.is_empty()
            || self.search_scope != SearchScope::All
            || self.date_filter != DateFilter::All
            || !self.selected_violations.is_empty()
            || !self.selected_plate_types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_no_active_filters() {
        assert!(!FilterState::default().has_active_filters());
    }

    #[test]
    fn each_deviation_activates_filters() {
        let mut state = FilterState {
            search_query: "B12".to_string(),
            ..FilterState::default()
        };
        assert!(state.has_active_filters());

        state = FilterState {
            search_scope: SearchScope::Notes,
            ..FilterState::default()
        };
        assert!(state.has_active_filters());

        state = FilterState {
            date_filter: DateFilter::Today,
            ..FilterState::default()
        };
        assert!(state.has_active_filters());

        state = FilterState::default();
        state.selected_violations.insert(ViolationType::Crosswalk);
        assert!(state.has_active_filters());

        state = FilterState::default();
        state.selected_plate_types.insert(PlateType::Police);
        assert!(state.has_active_filters());
    }

    #[test]
    fn vocabulary_ids_parse() {
        assert_eq!("last_week".parse::<DateFilter>().unwrap(), DateFilter::LastWeek);
        assert_eq!("plates".parse::<SearchScope>().unwrap(), SearchScope::Plates);
        assert_eq!(DateFilter::Custom.to_string(), "custom");
    }
}
