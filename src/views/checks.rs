use crate::views::helpers::render_fetch_error;
use crate::views::layout::{breadcrumb, render_layout};
use checkdash::client::FetchError;
use checkdash::loaders::CheckPage;
use checkdash::models::CheckRun;
use checkdash::presentation::{status_icon, timestamp_age};
use time::OffsetDateTime;

pub fn render_check_page(page: &CheckPage, now: OffsetDateTime) -> String {
    let name = html_escape::encode_text(&page.name);
    let latest = page
        .check
        .as_ref()
        .ok()
        .and_then(|runs| runs.first())
        .map(|run| {
            format!(
                "{icon} {status}",
                icon = status_icon(run.effective_status()),
                status = html_escape::encode_text(run.effective_status()),
            )
        })
        .unwrap_or_else(|| "<span class=\"text-muted\">no recent runs</span>".to_string());

    let content = format!(
        r#"<h1 class="h3 mb-1">{name}</h1>
        <p class="mb-3"><strong>Latest:</strong> {latest}</p>
        <div class="card mb-3">
          <div class="card-header">Recent runs</div>
          <div class="card-body">{runs}</div>
        </div>
        <div class="card">
          <div class="card-header">Failures</div>
          <div class="card-body">{failures}</div>
        </div>"#,
        name = name,
        latest = latest,
        runs = render_runs_section("recent runs", &page.check, "No runs recorded.", now),
        failures = render_runs_section("failures", &page.failures, "No failures recorded.", now),
    );

    render_layout(
        &format!("checkdash: {}", page.name),
        "dashboard",
        vec![breadcrumb("Checks", Some("/".to_string())), breadcrumb(&page.name, None)],
        &content,
    )
}

fn render_runs_section(
    what: &str,
    runs: &Result<Vec<CheckRun>, FetchError>,
    empty: &str,
    now: OffsetDateTime,
) -> String {
    let runs = match runs {
        Ok(runs) => runs,
        Err(err) => return render_fetch_error(what, err, false),
    };
    if runs.is_empty() {
        return format!("<p class=\"text-muted mb-0\">{empty}</p>");
    }

    let mut rows = String::new();
    for run in runs {
        let rc = run
            .rc
            .map(|value| value.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        let error = run
            .error_text()
            .map(|value| {
                format!(
                    "<div class=\"text-danger small\">{}</div>",
                    html_escape::encode_text(&value)
                )
            })
            .unwrap_or_default();
        let output = run
            .combined_out
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                format!(
                    "<pre class=\"checkdash-output p-2 mb-0\">{}</pre>",
                    html_escape::encode_text(value)
                )
            })
            .unwrap_or_default();
        rows.push_str(&format!(
            r#"<tr>
              <td class="checkdash-status">{icon}</td>
              <td class="text-muted">{age}</td>
              <td>{rc}</td>
              <td>{error}{output}</td>
            </tr>"#,
            icon = status_icon(run.effective_status()),
            age = timestamp_age(run.timestamp.as_deref(), now),
            rc = rc,
            error = error,
            output = output,
        ));
    }

    format!(
        r#"<table class="table table-sm mb-0">
          <thead>
            <tr>
              <th></th>
              <th>When</th>
              <th>Exit code</th>
              <th>Output</th>
            </tr>
          </thead>
          <tbody>
            {rows}
          </tbody>
        </table>"#,
        rows = rows,
    )
}
