use checkdash::{client::ApiClient, storage::effective_settings};
use std::path::Path;

use crate::routes::AppState;

/// Builds an API client against the currently configured agent.
pub async fn api_client(state: &AppState) -> Result<ApiClient, String> {
    let settings = settings_or_error(&state.settings_path).await?;
    Ok(ApiClient::new(state.fetcher.clone(), &settings.api_base_url))
}

pub async fn settings_or_error(path: &Path) -> Result<checkdash::storage::DashboardSettings, String> {
    effective_settings(path).await.map_err(|err| err.to_string())
}

pub fn current_datetime() -> String {
    let format = time::format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")
        .unwrap_or_else(|_| time::format_description::parse("[year]-[month]-[day]").expect("format"));
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    now.format(&format).unwrap_or_else(|_| "n/a".to_string())
}
