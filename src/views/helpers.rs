use checkdash::client::FetchError;

/// `auto_refresh` marks sections that poll the agent again on their own.
pub fn render_fetch_error(what: &str, err: &FetchError, auto_refresh: bool) -> String {
    let hint = match (err.is_transient(), auto_refresh) {
        (true, true) => "The agent may be unavailable. This section retries automatically.",
        (true, false) => "The agent may be unavailable. Reload the page to try again.",
        (false, _) => "The agent rejected the request.",
    };
    format!(
        r#"<div class="alert alert-danger" role="alert">
          <strong>Could not load {what}.</strong> {message}
          <div class="small">{hint}</div>
        </div>"#,
        what = html_escape::encode_text(what),
        message = html_escape::encode_text(&err.to_string()),
        hint = hint,
    )
}

pub fn render_notice(message: Option<&str>, class: &str) -> String {
    message
        .map(|value| {
            format!(
                "<p class=\"{class}\">{value}</p>",
                value = html_escape::encode_text(value)
            )
        })
        .unwrap_or_default()
}
