#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! In-memory report store for Lapor Parkir.
//!
//! [`ReportStore`] owns the durable collection and is the sole validation
//! gate: a create request missing a license plate or violations never
//! produces a record. The store is constructed once and shared by handle
//! with the request handlers — state is never module-global, so concurrent
//! server instances (and tests) don't see each other's reports.
//!
//! Records are prepended on create, so `list` order is newest-first by
//! construction. Reports are immutable after creation; the only mutation
//! besides create is delete.

use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Local, Utc};
use lapor_parkir_report_models::{
    Coordinates, LocationInput, NewReport, Report, ReportLocation,
};
use thiserror::Error;

/// Sentinel address used when a create request carries no location.
pub const UNKNOWN_LOCATION: &str = "Unknown location";

/// Errors from store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The create request was incomplete — missing/blank license plate or
    /// an empty violation list. The record is never persisted.
    #[error("License plate and violations are required")]
    Validation,

    /// No record exists with the requested id.
    #[error("Report not found")]
    NotFound,

    /// Unexpected storage-layer failure.
    #[error("Storage failure: {message}")]
    Internal {
        /// Description of the failure.
        message: String,
    },
}

/// In-memory report store with a monotonic id counter.
///
/// All operations take `&self`; the collection lives behind a [`RwLock`]
/// so a single store handle can be shared across request handlers. Each
/// operation is a single atomic unit — there are no cross-record
/// transactions and no partial-failure states.
#[derive(Debug)]
pub struct ReportStore {
    reports: RwLock<Vec<Report>>,
    next_id: AtomicI64,
}

impl ReportStore {
    /// Creates an empty store. Ids start at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reports: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Validates and persists a new report.
    ///
    /// On success the record is stamped with a fresh id and the current
    /// instant, display `date`/`time` strings are frozen from the local
    /// clock, optional fields are defaulted, and the record is prepended
    /// so the collection stays newest-first.
    ///
    /// The license plate is persisted exactly as received — submission-time
    /// normalization (uppercasing) is the reporting client's job.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] if the license plate is blank
    /// after trimming or the violation list is empty.
    pub fn create(&self, input: NewReport) -> Result<Report, StoreError> {
        if input.license_plate.trim().is_empty() || input.violations.is_empty() {
            return Err(StoreError::Validation);
        }

        let now = Utc::now();
        let local = now.with_timezone(&Local);
        let report = Report {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            plate_number: input.license_plate,
            plate_type: input.plate_type.unwrap_or_default(),
            vehicle_type: input.vehicle_type.unwrap_or_default(),
            violations: input.violations,
            location: resolve_location(input.location, input.coordinates),
            notes: input
                .notes
                .map_or_else(String::new, |notes| notes.trim().to_string()),
            timestamp: now,
            date: local.format("%-m/%-d/%Y").to_string(),
            time: local.format("%-I:%M:%S %p").to_string(),
        };

        let mut reports = self
            .reports
            .write()
            .expect("report store lock poisoned");
        reports.insert(0, report.clone());
        Ok(report)
    }

    /// Returns all reports, newest-first.
    ///
    /// # Errors
    ///
    /// The in-memory implementation cannot fail; the `Result` carries the
    /// contract's [`StoreError::Internal`] path for the HTTP 500 mapping.
    pub fn list(&self) -> Result<Vec<Report>, StoreError> {
        Ok(self
            .reports
            .read()
            .expect("report store lock poisoned")
            .clone())
    }

    /// Returns the report with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has that id.
    pub fn get(&self, id: i64) -> Result<Report, StoreError> {
        self.reports
            .read()
            .expect("report store lock poisoned")
            .iter()
            .find(|report| report.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Removes the report with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has that id —
    /// deleting an already-deleted id yields the same error every time.
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut reports = self
            .reports
            .write()
            .expect("report store lock poisoned");
        let index = reports
            .iter()
            .position(|report| report.id == id)
            .ok_or(StoreError::NotFound)?;
        reports.remove(index);
        Ok(())
    }
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizes the two create-input location shapes (bare address string or
/// address + coordinates object) into a [`ReportLocation`], applying the
/// [`UNKNOWN_LOCATION`] sentinel when no usable address was given.
/// Coordinates inside the location object win over the top-level field.
fn resolve_location(
    location: Option<LocationInput>,
    coordinates: Option<Coordinates>,
) -> ReportLocation {
    let (address, inner_coordinates) = match location {
        Some(LocationInput::Address(address)) => (address, None),
        Some(LocationInput::Detailed {
            address,
            coordinates,
        }) => (address, coordinates),
        None => (String::new(), None),
    };

    let address = if address.trim().is_empty() {
        UNKNOWN_LOCATION.to_string()
    } else {
        address
    };

    ReportLocation {
        address,
        coordinates: inner_coordinates.or(coordinates),
    }
}
