#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the Lapor Parkir server.
//!
//! These types are serialized to JSON for the REST API. The record and
//! create-input shapes live in `lapor_parkir_report_models`; this crate
//! holds the envelope and status payloads so the server and the client
//! share one wire contract.

use lapor_parkir_report_models::Report;
use serde::{Deserialize, Serialize};

/// Response envelope for `GET /api/reports`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsResponse {
    /// All reports, newest-first.
    pub reports: Vec<Report>,
}

/// Error payload returned with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Human-readable message.
    pub error: String,
}

impl ApiError {
    /// Creates an error payload with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Info payload for the root health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Human-readable service banner.
    pub message: String,
    /// Deployment environment name.
    pub environment: String,
    /// Service version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_payload_uses_the_error_field() {
        let payload = ApiError::new("Report not found");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, serde_json::json!({"error": "Report not found"}));
    }

    #[test]
    fn reports_envelope_round_trips_empty() {
        let envelope: ReportsResponse =
            serde_json::from_value(serde_json::json!({"reports": []})).unwrap();
        assert!(envelope.reports.is_empty());
    }
}
