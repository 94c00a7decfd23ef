use rcgen::{CertificateParams, SanType};
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use tracing::info;

pub fn certs_dir() -> PathBuf {
    checkdash::storage::base_dir().join("certs")
}

pub fn cert_path() -> PathBuf {
    certs_dir().join("checkdash.crt.pem")
}

pub fn key_path() -> PathBuf {
    certs_dir().join("checkdash.key.pem")
}

/// Generates a self-signed localhost certificate unless both PEM files already exist.
pub async fn ensure_tls_cert(cert_path: &Path, key_path: &Path) -> Result<(), String> {
    if tokio::fs::metadata(cert_path).await.is_ok() && tokio::fs::metadata(key_path).await.is_ok() {
        return Ok(());
    }

    if let Some(parent) = cert_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|err| format!("failed to create cert dir: {err}"))?;
    }

    let mut params = CertificateParams::new(vec!["localhost".to_string()]);
    params
        .subject_alt_names
        .push(SanType::IpAddress(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    let cert = rcgen::Certificate::from_params(params)
        .map_err(|err| format!("failed to create cert: {err}"))?;

    let cert_pem = cert.serialize_pem().map_err(|err| format!("failed to serialize cert: {err}"))?;
    let key_pem = cert.serialize_private_key_pem();

    tokio::fs::write(cert_path, cert_pem)
        .await
        .map_err(|err| format!("failed to write cert: {err}"))?;
    tokio::fs::write(key_path, key_pem)
        .await
        .map_err(|err| format!("failed to write key: {err}"))?;
    info!(path = %cert_path.display(), "generated self-signed certificate");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_cert_pair_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cert = dir.path().join("certs").join("test.crt.pem");
        let key = dir.path().join("certs").join("test.key.pem");

        ensure_tls_cert(&cert, &key).await.expect("generate");
        let first = tokio::fs::read_to_string(&cert).await.expect("read cert");
        assert!(first.contains("BEGIN CERTIFICATE"));
        assert!(tokio::fs::read_to_string(&key).await.expect("read key").contains("PRIVATE KEY"));

        ensure_tls_cert(&cert, &key).await.expect("reuse");
        assert_eq!(tokio::fs::read_to_string(&cert).await.expect("reread"), first);
    }
}
