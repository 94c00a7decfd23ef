pub fn health_html(api_base_url: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>checkdash health</title>
  </head>
  <body>
    <h1>checkdash</h1>
    <p>Status: ok</p>
    <p>Agent API: <code>{api}</code></p>
  </body>
</html>
"#,
        api = html_escape::encode_text(api_base_url),
    )
}
