//! HTTP handler functions for the Lapor Parkir API.

use actix_web::{HttpResponse, web};
use lapor_parkir_report_models::NewReport;
use lapor_parkir_server_models::{ApiError, ApiHealth, ReportsResponse};
use lapor_parkir_store::StoreError;

use crate::AppState;

/// `GET /`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        message: "Lapor Parkir API is running!".to_string(),
        environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/reports`
///
/// Returns all reports, newest-first, in the `{reports}` envelope.
pub async fn list_reports(state: web::Data<AppState>) -> HttpResponse {
    match state.store.list() {
        Ok(reports) => HttpResponse::Ok().json(ReportsResponse { reports }),
        Err(e) => {
            log::error!("Failed to list reports: {e}");
            HttpResponse::InternalServerError().json(ApiError::new("Failed to load reports"))
        }
    }
}

/// `POST /api/reports`
///
/// Validates and persists a new report; the created record (including its
/// assigned id) is echoed back.
pub async fn create_report(
    state: web::Data<AppState>,
    input: web::Json<NewReport>,
) -> HttpResponse {
    match state.store.create(input.into_inner()) {
        Ok(report) => HttpResponse::Created().json(report),
        Err(e @ StoreError::Validation) => HttpResponse::BadRequest().json(ApiError::new(e.to_string())),
        Err(e) => {
            log::error!("Failed to create report: {e}");
            HttpResponse::InternalServerError().json(ApiError::new("Failed to create report"))
        }
    }
}

/// `GET /api/reports/{id}`
pub async fn get_report(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let Some(id) = parse_report_id(&path) else {
        return report_not_found();
    };

    match state.store.get(id) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(StoreError::NotFound) => report_not_found(),
        Err(e) => {
            log::error!("Failed to get report {id}: {e}");
            HttpResponse::InternalServerError().json(ApiError::new("Failed to load report"))
        }
    }
}

/// `DELETE /api/reports/{id}`
pub async fn delete_report(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let Some(id) = parse_report_id(&path) else {
        return report_not_found();
    };

    match state.store.delete(id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(StoreError::NotFound) => report_not_found(),
        Err(e) => {
            log::error!("Failed to delete report {id}: {e}");
            HttpResponse::InternalServerError().json(ApiError::new("Failed to delete report"))
        }
    }
}

/// Parses a path segment into a report id. An id the store wouldn't
/// recognize (non-numeric, overflowing) is simply an id that doesn't
/// exist, so callers answer 404 rather than erroring.
fn parse_report_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn report_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiError::new("Report not found"))
}
