use crate::forms::SettingsForm;
use crate::routes::AppState;
use crate::views::settings::render_settings_page;
use axum::{Form, extract::State, http::StatusCode, response::Html};
use checkdash::storage::{API_URL_VAR, DashboardSettings, load_settings, save_settings};
use tracing::info;

pub async fn settings_page(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let settings = load_settings(&state.settings_path)
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
    Ok(Html(render_settings_page(
        &displayed_settings(settings, env_lookup),
        api_url_override().as_deref(),
        None,
        None,
    )))
}

pub async fn settings_save(
    State(state): State<AppState>,
    Form(form): Form<SettingsForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let existing = load_settings(&state.settings_path)
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
    let settings = DashboardSettings {
        api_base_url: form.api_base_url.trim().to_string(),
        ..existing
    };
    let env_override = api_url_override();

    if let Err(err) = settings.validate() {
        return Ok(Html(render_settings_page(
            &displayed_settings(settings, env_lookup),
            env_override.as_deref(),
            None,
            Some(&err.to_string()),
        )));
    }

    save_settings(&state.settings_path, &settings)
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
    info!(api = %settings.api_base_url, "saved dashboard settings");

    Ok(Html(render_settings_page(
        &displayed_settings(settings, env_lookup),
        env_override.as_deref(),
        Some("Settings saved."),
        None,
    )))
}

/// Keeps the stored API URL editable while the listener fields show what the
/// process actually runs with.
fn displayed_settings(
    stored: DashboardSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> DashboardSettings {
    let mut effective = stored.clone();
    effective.apply_overrides(lookup);
    DashboardSettings {
        listen_addr: effective.listen_addr,
        tls: effective.tls,
        ..stored
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn api_url_override() -> Option<String> {
    std::env::var(API_URL_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
