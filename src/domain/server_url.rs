//! Derive the installer `DOMAIN` value from an agent server URL.

use url::Url;

use crate::domain::AppError;

/// Host, or `host:port` when the URL carries a non-default port.
///
/// `ws://192.168.1.100:5123` becomes `192.168.1.100:5123`;
/// `wss://monitor.example.com` becomes `monitor.example.com`.
pub fn domain_from_server_url(raw: &str) -> Result<String, AppError> {
    let invalid = |reason: &str| AppError::InvalidServerUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;
    let host = url.host_str().filter(|h| !h.is_empty()).ok_or_else(|| invalid("URL has no host"))?;

    // `Url::port` is None when the port is absent or equals the scheme default.
    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
