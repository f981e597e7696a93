#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Report record and violation/plate taxonomy types.
//!
//! This crate defines the canonical vocabulary of parking violation types
//! and plate categories used across the Lapor Parkir system, plus the
//! persisted [`Report`] record and the [`NewReport`] create input. The
//! reporting form, the store, the REST API, and the search/filter engine
//! all speak these types.

pub mod labels;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr};

/// A parking violation category.
///
/// The wire identifier (`double_parking`, `fire_hydrant`, ...) is the
/// stable id; human-readable labels live in the [`labels`] module and play
/// no role in matching or storage.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ViolationType {
    /// Parked alongside another parked vehicle.
    DoubleParking,
    /// Parked inside a posted no-parking zone.
    NoParkingZone,
    /// Occupying a handicap spot without authorization.
    HandicapSpot,
    /// Blocking access to a fire hydrant.
    FireHydrant,
    /// Stopped on a pedestrian crosswalk.
    Crosswalk,
    /// Parked at an expired meter.
    ExpiredMeter,
    /// Blocking a private driveway.
    BlockingDriveway,
    /// Stopped in a no-stopping lane.
    NoStopping,
}

impl ViolationType {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::DoubleParking,
            Self::NoParkingZone,
            Self::HandicapSpot,
            Self::FireHydrant,
            Self::Crosswalk,
            Self::ExpiredMeter,
            Self::BlockingDriveway,
            Self::NoStopping,
        ]
    }

    /// Returns the human-readable label for this violation type.
    #[must_use]
    pub fn label(self) -> &'static str {
        let id: &'static str = self.into();
        labels::violation_label(id)
    }
}

/// Vehicle registration plate category.
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
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PlateType {
    /// Standard civilian plate.
    #[default]
    Regular,
    /// Police vehicle plate.
    Police,
    /// Diplomatic corps plate.
    Diplomatic,
    /// Government vehicle plate.
    Government,
    /// Ambulance / fire / emergency services plate.
    Emergency,
    /// Anything that doesn't fit the other categories.
    Other,
}

impl PlateType {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Regular,
            Self::Police,
            Self::Diplomatic,
            Self::Government,
            Self::Emergency,
            Self::Other,
        ]
    }

    /// Returns the human-readable label for this plate type.
    #[must_use]
    pub fn label(self) -> &'static str {
        let id: &'static str = self.into();
        labels::plate_type_label(id)
    }
}

/// Vehicle body category. Only present in later record shapes; older
/// records deserialize with the default.
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
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VehicleType {
    /// Car or other four-wheeled vehicle.
    #[default]
    Car,
    /// Motorcycle or scooter.
    Motorcycle,
}

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
}

/// Where a violation was observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLocation {
    /// Street address or free-form place description.
    pub address: String,
    /// Optional precise coordinates from the location picker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// A submitted parking-violation report.
///
/// Immutable once created (there is no update operation); destroyed only
/// by explicit deletion. `timestamp` is the authoritative creation
/// instant; `date` and `time` are display strings frozen at write time and
/// carry no semantic role in filtering or ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Unique store-assigned identifier.
    pub id: i64,
    /// License plate as submitted (the reporting client uppercases before
    /// sending; the store persists whatever casing it receives).
    pub plate_number: String,
    /// Plate category. Absent in older records, defaulting to regular.
    #[serde(default)]
    pub plate_type: PlateType,
    /// Vehicle category. Absent in older records, defaulting to car.
    #[serde(default)]
    pub vehicle_type: VehicleType,
    /// Raw violation-type identifiers, at least one. Kept as strings so
    /// identifiers from newer vocabularies still round-trip and filter.
    pub violations: Vec<String>,
    /// Where the violation was observed.
    pub location: ReportLocation,
    /// Free-form reporter notes, trimmed; empty when none were given.
    #[serde(default)]
    pub notes: String,
    /// Creation instant. The only field date-range filtering consults.
    pub timestamp: DateTime<Utc>,
    /// Display date frozen at creation from the server's local clock.
    pub date: String,
    /// Display time frozen at creation from the server's local clock.
    pub time: String,
}

/// Location field of a create request: either a bare address string or an
/// object with optional coordinates. Different client revisions send
/// different shapes; both normalize into [`ReportLocation`] at the store
/// boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationInput {
    /// A bare address string.
    Address(String),
    /// An address with optional coordinates.
    Detailed {
        /// Street address or free-form place description.
        address: String,
        /// Optional precise coordinates.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coordinates: Option<Coordinates>,
    },
}

/// Create input for a report — the one canonical shape accepted by the
/// store and the `POST /api/reports` endpoint. Every optional field is
/// defaulted at the store boundary, never branched on at read time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    /// License plate. Required; must be non-blank after trimming.
    #[serde(default)]
    pub license_plate: String,
    /// Violation-type identifiers. Required; at least one.
    #[serde(default)]
    pub violations: Vec<String>,
    /// Where the violation was observed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationInput>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Plate category; defaults to regular.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate_type: Option<PlateType>,
    /// Vehicle category; defaults to car. Only sent by later clients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleType>,
    /// Top-level coordinates; later clients send these separately from the
    /// address string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_wire_ids_round_trip() {
        for violation in ViolationType::all() {
            let id = violation.to_string();
            let parsed: ViolationType = id.parse().unwrap();
            assert_eq!(parsed, *violation);
        }
        assert_eq!(
            ViolationType::NoParkingZone.to_string(),
            "no_parking_zone"
        );
    }

    #[test]
    fn plate_type_serializes_as_snake_case_id() {
        let json = serde_json::to_string(&PlateType::Diplomatic).unwrap();
        assert_eq!(json, "\"diplomatic\"");
        let parsed: PlateType = serde_json::from_str("\"police\"").unwrap();
        assert_eq!(parsed, PlateType::Police);
    }

    #[test]
    fn older_record_shape_defaults_plate_and_vehicle_type() {
        // The earliest backend revision stored neither plateType nor
        // vehicleType nor notes.
        let report: Report = serde_json::from_value(serde_json::json!({
            "id": 1,
            "plateNumber": "B1234XYZ",
            "violations": ["double_parking"],
            "location": {"address": "Jl. Sudirman"},
            "timestamp": "2025-06-15T09:00:00Z",
            "date": "6/15/2025",
            "time": "4:00:00 PM"
        }))
        .unwrap();

        assert_eq!(report.plate_type, PlateType::Regular);
        assert_eq!(report.vehicle_type, VehicleType::Car);
        assert_eq!(report.notes, "");
        assert_eq!(report.location.coordinates, None);
    }

    #[test]
    fn unknown_violation_id_survives_round_trip() {
        let report: Report = serde_json::from_value(serde_json::json!({
            "id": 2,
            "plateNumber": "D5678AB",
            "violations": ["valet_blocking"],
            "location": {"address": "Jl. Thamrin"},
            "timestamp": "2025-06-15T09:00:00Z",
            "date": "6/15/2025",
            "time": "4:00:00 PM"
        }))
        .unwrap();

        assert_eq!(report.violations, vec!["valet_blocking".to_string()]);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["violations"][0], "valet_blocking");
    }

    #[test]
    fn location_input_accepts_string_and_object() {
        let bare: LocationInput = serde_json::from_value(serde_json::json!("Jl. Sudirman")).unwrap();
        assert_eq!(bare, LocationInput::Address("Jl. Sudirman".to_string()));

        let detailed: LocationInput = serde_json::from_value(serde_json::json!({
            "address": "Jl. Thamrin",
            "coordinates": {"latitude": -6.19, "longitude": 106.82}
        }))
        .unwrap();
        let LocationInput::Detailed {
            address,
            coordinates,
        } = detailed
        else {
            panic!("expected detailed location");
        };
        assert_eq!(address, "Jl. Thamrin");
        assert!((coordinates.unwrap().latitude - -6.19).abs() < 1e-9);
    }

    #[test]
    fn new_report_deserializes_minimal_body() {
        let input: NewReport = serde_json::from_value(serde_json::json!({
            "licensePlate": "B1234XYZ",
            "violations": ["no_parking_zone"]
        }))
        .unwrap();

        assert_eq!(input.license_plate, "B1234XYZ");
        assert_eq!(input.violations, vec!["no_parking_zone".to_string()]);
        assert_eq!(input.location, None);
        assert_eq!(input.plate_type, None);
        assert_eq!(input.vehicle_type, None);
    }
}
