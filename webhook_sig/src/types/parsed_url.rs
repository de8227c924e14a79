use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{error::SignatureError, uri::build_url, util::null_as_empty};

/// A URL broken into WHATWG-style components.
///
/// Every field is a plain string and may be empty. Missing or `null` fields
/// in JSON input deserialize to `""`, so they never leak placeholder text
/// into a built URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedUrl {
    /// Scheme with its trailing colon, e.g. `"https:"`.
    #[serde(deserialize_with = "null_as_empty")]
    pub protocol: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
    /// Hostname, plus `:port` when the parser saw a non-default port.
    #[serde(deserialize_with = "null_as_empty")]
    pub host: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub pathname: String,
    /// Query with its leading `?`, or empty.
    #[serde(deserialize_with = "null_as_empty")]
    pub search: String,
    /// Fragment with its leading `#`, or empty.
    #[serde(deserialize_with = "null_as_empty")]
    pub hash: String,
}

impl ParsedUrl {
    /// Read components from a JSON object such as `{"protocol": "https:", ...}`.
    pub fn from_json(json: &str) -> Result<Self, SignatureError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&Url> for ParsedUrl {
    fn from(url: &Url) -> Self {
        // `Url::port` is `None` for the scheme's default port.
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        };
        let search = match url.query() {
            Some(query) if !query.is_empty() => format!("?{query}"),
            _ => String::new(),
        };
        let hash = match url.fragment() {
            Some(fragment) if !fragment.is_empty() => format!("#{fragment}"),
            _ => String::new(),
        };

        Self {
            protocol: format!("{}:", url.scheme()),
            username: url.username().to_string(),
            password: url.password().unwrap_or_default().to_string(),
            host,
            pathname: url.path().to_string(),
            search,
            hash,
        }
    }
}

impl FromStr for ParsedUrl {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(s)?;
        Ok(Self::from(&url))
    }
}

impl Display for ParsedUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&build_url(self))
    }
}
