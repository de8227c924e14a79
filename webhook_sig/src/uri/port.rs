use url::Url;

use crate::error::{Result, SignatureError};

/// Render `url` as `scheme://host:port/path?query#fragment` with the port
/// always spelled out, falling back to the scheme's well-known port.
///
/// Credentials are not part of the output.
pub fn build_url_with_standard_port(url: &Url) -> Result<String> {
    let host = match url.host_str() {
        Some(host) => {
            let port = url
                .port_or_known_default()
                .ok_or_else(|| SignatureError::UnknownDefaultPort {
                    scheme: url.scheme().to_string(),
                })?;
            format!("{host}:{port}")
        }
        None => String::new(),
    };
    let query = url.query().map(|q| format!("?{q}")).unwrap_or_default();
    let fragment = url.fragment().map(|f| format!("#{f}")).unwrap_or_default();

    Ok(format!(
        "{}://{}{}{}{}",
        url.scheme(),
        host,
        url.path(),
        query,
        fragment
    ))
}

/// The URL with an explicit port. Already-explicit ports are left untouched.
pub fn add_port(url: &Url) -> Result<String> {
    if url.port().is_some() {
        return Ok(url.to_string());
    }
    build_url_with_standard_port(url)
}

/// The URL with any explicit port stripped.
pub fn remove_port(url: &Url) -> Result<String> {
    let mut stripped = url.clone();
    match stripped.set_port(None) {
        Ok(()) => Ok(stripped.to_string()),
        Err(()) => Err(SignatureError::CannotSetPort {
            url: url.to_string(),
        }),
    }
}
