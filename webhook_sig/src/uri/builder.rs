use crate::types::ParsedUrl;

const HTTPS_PROTOCOL: &str = "https:";
const HTTPS_PORT_SUFFIX: &str = ":443";
const HTTP_PORT_SUFFIX: &str = ":80";

/// Serialize `parsed` back into a URL string with a default port on the host.
///
/// The suffix is `:443` for `https:` and `:80` for anything else, including
/// an empty protocol. It is appended even when `host` already carries a port.
/// Empty components contribute nothing.
pub fn build_url(parsed: &ParsedUrl) -> String {
    let port = if parsed.protocol == HTTPS_PROTOCOL {
        HTTPS_PORT_SUFFIX
    } else {
        HTTP_PORT_SUFFIX
    };

    let mut url = String::with_capacity(
        parsed.protocol.len()
            + parsed.username.len()
            + parsed.password.len()
            + parsed.host.len()
            + parsed.pathname.len()
            + parsed.search.len()
            + parsed.hash.len()
            + 16,
    );

    if !parsed.protocol.is_empty() {
        url.push_str(&parsed.protocol);
        url.push_str("//");
    }

    url.push_str(&parsed.username);
    if !parsed.password.is_empty() {
        url.push(':');
        url.push_str(&parsed.password);
    }
    if !parsed.username.is_empty() || !parsed.password.is_empty() {
        url.push('@');
    }

    if !parsed.host.is_empty() {
        url.push_str(&parsed.host);
        url.push_str(port);
    }

    url.push_str(&parsed.pathname);
    url.push_str(&parsed.search);
    url.push_str(&parsed.hash);

    url
}
