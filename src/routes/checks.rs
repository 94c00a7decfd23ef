use crate::forms::CheckQuery;
use crate::routes::AppState;
use crate::services::api_client;
use crate::views::checks::render_check_page;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use checkdash::loaders::load_check;
use time::OffsetDateTime;

pub async fn check_page(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, (StatusCode, String)> {
    let client = api_client(&state)
        .await
        .map_err(|message| (StatusCode::INTERNAL_SERVER_ERROR, message))?;
    let page = load_check(&client, &name).await;
    Ok(Html(render_check_page(&page, OffsetDateTime::now_utc())))
}

pub async fn check_by_query(Query(query): Query<CheckQuery>) -> Redirect {
    match query.name.as_deref().map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => Redirect::to(&format!("/checks/{}", urlencoding::encode(name))),
        None => Redirect::to("/"),
    }
}
