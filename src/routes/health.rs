use crate::routes::AppState;
use crate::services::settings_or_error;
use axum::{extract::State, http::HeaderMap, response::{Html, IntoResponse}};

pub async fn health(State(state): State<AppState>, headers: HeaderMap) -> axum::response::Response {
    if wants_html(&headers) {
        let api_base_url = settings_or_error(&state.settings_path)
            .await
            .map(|settings| settings.api_base_url)
            .unwrap_or_else(|err| format!("unavailable ({err})"));
        Html(crate::views::health::health_html(&api_base_url)).into_response()
    } else {
        "ok".into_response()
    }
}

fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(axum::http::header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("text/html"))
        .unwrap_or(false)
}
