use crate::views::helpers::render_fetch_error;
use crate::views::layout::{breadcrumb, render_layout};
use checkdash::loaders::DashboardPage;
use checkdash::presentation::{status_icon, timestamp_age};
use time::OffsetDateTime;

pub fn render_dashboard_page(page: &DashboardPage, now: OffsetDateTime, refreshed_at: &str) -> String {
    let (passing, failing) = match page.counts() {
        Some((passing, failing)) => (passing.to_string(), failing.to_string()),
        None => ("n/a".to_string(), "n/a".to_string()),
    };

    let content = format!(
        r#"<h1 class="h3 mb-3">Checks</h1>
        <div class="row g-3 mb-3">
          <div class="col-md-6 col-lg-3">
            <div class="card card-body">
              <h2 class="h6 text-uppercase text-muted">Passing</h2>
              <p class="display-6 mb-0">{passing}</p>
            </div>
          </div>
          <div class="col-md-6 col-lg-3">
            <div class="card card-body">
              <h2 class="h6 text-uppercase text-muted">Failing</h2>
              <p class="display-6 mb-0">{failing}</p>
            </div>
          </div>
        </div>
        <div hx-get="/partials/checks-table" hx-trigger="every 30s" hx-swap="innerHTML">
          {table}
        </div>
        <p class="small text-muted">Loaded {refreshed_at}</p>"#,
        passing = passing,
        failing = failing,
        table = render_checks_table(page, now),
        refreshed_at = html_escape::encode_text(refreshed_at),
    );

    render_layout(
        "checkdash",
        "dashboard",
        vec![breadcrumb("Checks", None)],
        &content,
    )
}

pub fn render_checks_table(page: &DashboardPage, now: OffsetDateTime) -> String {
    let checks = match &page.checks {
        Ok(checks) => checks,
        Err(err) => return render_fetch_error("checks", err, true),
    };

    let mut rows = String::new();
    for check in checks {
        let status = check.status.as_deref().unwrap_or("");
        rows.push_str(&format!(
            r#"<tr>
              <td class="checkdash-status">{icon}</td>
              <td><a href="/checks/{href}">{name}</a></td>
              <td>{status}</td>
              <td class="text-muted">{age}</td>
            </tr>"#,
            icon = status_icon(status),
            href = urlencoding::encode(&check.name),
            name = html_escape::encode_text(&check.name),
            status = html_escape::encode_text(if status.is_empty() { "unknown" } else { status }),
            age = timestamp_age(check.timestamp.as_deref(), now),
        ));
    }

    if rows.is_empty() {
        rows.push_str("<tr><td colspan=\"4\" class=\"text-muted\">No checks reported yet.</td></tr>");
    }

    format!(
        r#"<table class="table table-striped">
          <thead>
            <tr>
              <th></th>
              <th>Check</th>
              <th>Status</th>
              <th>Last run</th>
            </tr>
          </thead>
          <tbody>
            {rows}
          </tbody>
        </table>"#,
        rows = rows,
    )
}
