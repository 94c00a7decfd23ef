use crate::views::helpers::render_notice;
use crate::views::layout::{breadcrumb, render_layout};
use checkdash::storage::DashboardSettings;

pub fn render_settings_page(
    settings: &DashboardSettings,
    env_override: Option<&str>,
    message: Option<&str>,
    error: Option<&str>,
) -> String {
    let override_note = env_override
        .map(|value| {
            format!(
                "<p class=\"text-warning small\">CHECKDASH_API_URL is set to {} and takes precedence over the saved value.</p>",
                html_escape::encode_text(value)
            )
        })
        .unwrap_or_default();

    let content = format!(
        r#"<h1 class="h3 mb-3">Settings</h1>
        {notice}{error}
        <div class="card card-body">
          <form method="post" action="/settings">
            <label class="form-label" for="api_base_url">Agent API URL</label>
            <input class="form-control" id="api_base_url" name="api_base_url" type="text" value="{api_base_url}">
            {override_note}
            <p class="small text-muted mt-2 mb-3">Listening on {listen_addr} ({scheme}).</p>
            <button class="btn btn-primary" type="submit">Save</button>
          </form>
        </div>"#,
        notice = render_notice(message, "text-success"),
        error = render_notice(error, "text-danger"),
        api_base_url = html_escape::encode_double_quoted_attribute(&settings.api_base_url),
        override_note = override_note,
        listen_addr = html_escape::encode_text(&settings.listen_addr),
        scheme = if settings.tls { "https" } else { "http" },
    );

    render_layout(
        "checkdash Settings",
        "settings",
        vec![breadcrumb("Settings", None)],
        &content,
    )
}
