//! Human-readable labels for taxonomy identifiers.
//!
//! The UI layer resolves raw identifiers into display labels through these
//! helpers. An unrecognized identifier resolves to itself — newer clients
//! may submit vocabulary this build doesn't know, and the label layer must
//! degrade gracefully rather than reject it. Filtering and matching always
//! operate on the raw identifiers, never on these labels.

/// Returns the display label for a violation-type identifier, or the
/// identifier itself when it isn't part of the known vocabulary.
#[must_use]
pub fn violation_label(id: &str) -> &str {
    match id {
        "double_parking" => "Double parking",
        "no_parking_zone" => "No parking zone",
        "handicap_spot" => "Handicap spot",
        "fire_hydrant" => "Fire hydrant",
        "crosswalk" => "Crosswalk",
        "expired_meter" => "Expired meter",
        "blocking_driveway" => "Blocking driveway",
        "no_stopping" => "No stopping",
        other => other,
    }
}

/// Returns the display label for a plate-type identifier, or the
/// identifier itself when it isn't part of the known vocabulary.
#[must_use]
pub fn plate_type_label(id: &str) -> &str {
    match id {
        "regular" => "Regular",
        "police" => "Police",
        "diplomatic" => "Diplomatic",
        "government" => "Government",
        "emergency" => "Emergency",
        "other" => "Other",
        unknown => unknown,
    }
}

/// Returns the display label for a vehicle-type identifier, or the
/// identifier itself when it isn't part of the known vocabulary.
#[must_use]
pub fn vehicle_type_label(id: &str) -> &str {
    match id {
        "car" => "Car",
        "motorcycle" => "Motorcycle",
        unknown => unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlateType, ViolationType};

    #[test]
    fn known_identifiers_resolve_to_labels() {
        assert_eq!(violation_label("fire_hydrant"), "Fire hydrant");
        assert_eq!(plate_type_label("diplomatic"), "Diplomatic");
        assert_eq!(vehicle_type_label("motorcycle"), "Motorcycle");
    }

    #[test]
    fn unknown_identifier_falls_back_to_itself() {
        assert_eq!(violation_label("valet_blocking"), "valet_blocking");
        assert_eq!(plate_type_label("military"), "military");
        assert_eq!(vehicle_type_label("truck"), "truck");
    }

    #[test]
    fn every_enum_variant_has_a_label() {
        for violation in ViolationType::all() {
            assert_ne!(violation.label(), violation.as_ref());
        }
        for plate_type in PlateType::all() {
            assert_ne!(plate_type.label(), plate_type.as_ref());
        }
    }
}
