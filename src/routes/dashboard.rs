use crate::routes::AppState;
use crate::services::{api_client, current_datetime};
use crate::views::dashboard::{render_checks_table, render_dashboard_page};
use axum::{extract::State, http::StatusCode, response::Html};
use checkdash::loaders::load_dashboard;
use time::OffsetDateTime;

pub async fn dashboard_page(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let client = api_client(&state)
        .await
        .map_err(|message| (StatusCode::INTERNAL_SERVER_ERROR, message))?;
    let page = load_dashboard(&client).await;
    Ok(Html(render_dashboard_page(
        &page,
        OffsetDateTime::now_utc(),
        &current_datetime(),
    )))
}

pub async fn checks_table_partial(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let client = api_client(&state)
        .await
        .map_err(|message| (StatusCode::INTERNAL_SERVER_ERROR, message))?;
    let page = load_dashboard(&client).await;
    Ok(Html(render_checks_table(&page, OffsetDateTime::now_utc())))
}
