#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the Lapor Parkir application.
//!
//! Serves the REST API the mobile frontend talks to: report CRUD under
//! `/api/reports` plus a root info endpoint. The report collection lives
//! in an in-memory [`ReportStore`] owned by the shared application state —
//! one store per server instance, never process-global.

mod handlers;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use lapor_parkir_store::ReportStore;

/// Shared application state.
pub struct AppState {
    /// The report store — the sole source of truth.
    pub store: ReportStore,
}

/// Registers the API routes. Split out of [`run_server`] so handler tests
/// drive the real routing table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::health)).service(
        web::scope("/api")
            .route("/reports", web::get().to(handlers::list_reports))
            .route("/reports", web::post().to(handlers::create_report))
            .route("/reports/{id}", web::get().to(handlers::get_report))
            .route("/reports/{id}", web::delete().to(handlers::delete_report)),
    );
}

/// Starts the Lapor Parkir API server.
///
/// Builds a fresh [`ReportStore`], reads `BIND_ADDR`/`PORT` from the
/// environment, and starts the Actix-Web HTTP server with permissive CORS
/// and request logging. This is a regular async function — the caller
/// provides the async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let state = web::Data::new(AppState {
        store: ReportStore::new(),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
