#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! HTTP client for the Lapor Parkir report API.
//!
//! [`ReportsClient`] presents the store's four operations (plus the root
//! health check) as async calls and normalizes every failure — non-2xx
//! responses and transport errors alike — into the single
//! [`RequestFailed`] shape the UI reacts to uniformly.
//!
//! The client performs no retries and no caching; every call is a single
//! round trip, and failure is always surfaced to the caller rather than
//! swallowed.

use lapor_parkir_report_models::{
    Coordinates, LocationInput, NewReport, PlateType, Report, VehicleType, ViolationType,
};
use lapor_parkir_server_models::{ApiHealth, ReportsResponse};
use thiserror::Error;

/// Message used when a failure response carries no parseable error payload.
const NETWORK_ERROR: &str = "Network error";

/// A failed API call: the server's error message when one was parseable,
/// plus the HTTP status when the failure got that far.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestFailed {
    /// Human-readable failure message, surfaced verbatim to the UI.
    pub message: String,
    /// HTTP status code, when the request produced a response.
    pub status: Option<u16>,
}

impl RequestFailed {
    fn transport(error: &reqwest::Error) -> Self {
        Self {
            message: error.to_string(),
            status: error.status().map(|status| status.as_u16()),
        }
    }
}

/// Client for the report REST API.
///
/// `base_url` is the server origin (e.g. `http://localhost:3000`); the
/// client appends the `/api` paths itself.
#[derive(Debug, Clone)]
pub struct ReportsClient {
    base_url: String,
    http: reqwest::Client,
}

impl ReportsClient {
    /// Creates a client for the given server origin. A trailing slash on
    /// the origin is tolerated.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetches all reports, newest-first.
    ///
    /// # Errors
    ///
    /// Returns [`RequestFailed`] on any non-2xx response or transport
    /// failure.
    pub async fn get_reports(&self) -> Result<Vec<Report>, RequestFailed> {
        let response = self.execute(self.http.get(self.url("/api/reports"))).await?;
        let envelope: ReportsResponse = response
            .json()
            .await
            .map_err(|e| RequestFailed::transport(&e))?;
        Ok(envelope.reports)
    }

    /// Submits a new report and returns the created record.
    ///
    /// # Errors
    ///
    /// Returns [`RequestFailed`] carrying the server's validation message
    /// verbatim when the request was rejected, or the normalized
    /// transport message otherwise.
    pub async fn create_report(&self, input: &NewReport) -> Result<Report, RequestFailed> {
        let response = self
            .execute(self.http.post(self.url("/api/reports")).json(input))
            .await?;
        response
            .json()
            .await
            .map_err(|e| RequestFailed::transport(&e))
    }

    /// Fetches a single report by id.
    ///
    /// # Errors
    ///
    /// Returns [`RequestFailed`] with a not-found indication when no such
    /// report exists.
    pub async fn get_report(&self, id: i64) -> Result<Report, RequestFailed> {
        let response = self
            .execute(self.http.get(self.url(&format!("/api/reports/{id}"))))
            .await?;
        response
            .json()
            .await
            .map_err(|e| RequestFailed::transport(&e))
    }

    /// Deletes a report by id. The server's `204 No Content` reply is
    /// success — there is no body to parse.
    ///
    /// # Errors
    ///
    /// Returns [`RequestFailed`] when the report doesn't exist or the
    /// request fails.
    pub async fn delete_report(&self, id: i64) -> Result<(), RequestFailed> {
        self.execute(self.http.delete(self.url(&format!("/api/reports/{id}"))))
            .await?;
        Ok(())
    }

    /// Fetches the root info payload.
    ///
    /// # Errors
    ///
    /// Returns [`RequestFailed`] on any non-2xx response or transport
    /// failure.
    pub async fn health(&self) -> Result<ApiHealth, RequestFailed> {
        let response = self.execute(self.http.get(self.url("/"))).await?;
        response
            .json()
            .await
            .map_err(|e| RequestFailed::transport(&e))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, RequestFailed> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                let failure = RequestFailed::transport(&error);
                log::error!("API request failed: {failure}");
                return Err(failure);
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let failure = RequestFailed {
            message: error_message(status.as_u16(), &body),
            status: Some(status.as_u16()),
        };
        log::error!("API request failed: {failure}");
        Err(failure)
    }
}

/// Extracts the failure message from an error response body.
///
/// Precedence matches what the UI expects: the payload's `error` field
/// verbatim when present; `HTTP <status>` when the body is JSON without
/// one; the generic network-error message when the body isn't JSON at all.
fn error_message(status: u16, body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return NETWORK_ERROR.to_string();
    };

    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| format!("HTTP {status}"), ToString::to_string)
}

/// The reporting form's submission state, converted into the wire request
/// at submit time.
///
/// Conversion applies the client-side normalization the form documents:
/// the plate is uppercased and trimmed before it leaves the device, and
/// notes are trimmed. The store persists what it receives unchanged.
#[derive(Debug, Clone, Default)]
pub struct ReportDraft {
    /// License plate as typed.
    pub plate_number: String,
    /// Selected plate category.
    pub plate_type: PlateType,
    /// Selected vehicle category.
    pub vehicle_type: VehicleType,
    /// Selected violation types, in selection order.
    pub violations: Vec<ViolationType>,
    /// Address chosen via the location picker, when one was set.
    pub address: Option<String>,
    /// Coordinates from the location picker, when available.
    pub coordinates: Option<Coordinates>,
    /// Free-form notes as typed.
    pub notes: String,
}

impl ReportDraft {
    /// Converts the draft into the create request, applying the
    /// submission-time normalization.
    #[must_use]
    pub fn into_request(self) -> NewReport {
        NewReport {
            license_plate: self.plate_number.to_uppercase().trim().to_string(),
            violations: self
                .violations
                .iter()
                .map(ToString::to_string)
                .collect(),
            location: self.address.map(LocationInput::Address),
            notes: Some(self.notes.trim().to_string()),
            plate_type: Some(self.plate_type),
            vehicle_type: Some(self.vehicle_type),
            coordinates: self.coordinates,
        }
    }
}
