pub mod checks;
pub mod dashboard;
pub mod health;
pub mod settings;

use axum::{Router, routing::get};
use checkdash::client::{CheckFetcher, ReqwestFetcher};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub settings_path: PathBuf,
    pub fetcher: Arc<dyn CheckFetcher>,
}

pub fn build_router(state: AppState) -> Router {
    let web_dir = web_dir();
    Router::new()
        .route("/", get(dashboard::dashboard_page))
        .route("/partials/checks-table", get(dashboard::checks_table_partial))
        .route("/checks", get(checks::check_by_query))
        .route("/checks/:name", get(checks::check_page))
        .route("/settings", get(settings::settings_page).post(settings::settings_save))
        .route("/health", get(health::health))
        .nest_service("/web", ServeDir::new(web_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn default_state(settings_path: PathBuf) -> AppState {
    AppState {
        settings_path,
        fetcher: Arc::new(ReqwestFetcher::new()),
    }
}

fn web_dir() -> PathBuf {
    std::env::var("CHECKDASH_WEB_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("web"))
}
