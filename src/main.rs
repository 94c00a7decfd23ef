mod forms;
mod routes;
mod security;
mod services;
mod views;

use checkdash::storage::{effective_settings, settings_path};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings_path = settings_path();
    let settings = effective_settings(&settings_path)
        .await
        .expect("failed to load settings");
    settings.validate().expect("invalid settings");
    let addr = settings.socket_addr().expect("invalid bind address");

    let state = routes::default_state(settings_path);
    let app = routes::build_router(state);

    if settings.tls {
        let cert_path = security::cert_path();
        let key_path = security::key_path();
        security::ensure_tls_cert(&cert_path, &key_path)
            .await
            .expect("failed to prepare TLS certificates");
        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(cert_path, key_path)
            .await
            .expect("failed to load TLS certificates");

        info!(api = %settings.api_base_url, "dashboard listening on https://{addr}");
        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await
            .expect("server failed");
    } else {
        info!(api = %settings.api_base_url, "dashboard listening on http://{addr}");
        axum_server::bind(addr)
            .serve(app.into_make_service())
            .await
            .expect("server failed");
    }
}
