use url::Url;

use crate::error::Result;

/// Query parameter carrying the hex SHA-256 of a non-form request body.
pub const BODY_SHA256_PARAM: &str = "bodySHA256";

/// Find the `bodySHA256` query value in `url`, if any.
pub fn body_sha256_from_url(url: &str) -> Result<Option<String>> {
    let parsed = Url::parse(url)?;
    Ok(parsed
        .query_pairs()
        .find(|(key, _)| key == BODY_SHA256_PARAM)
        .map(|(_, value)| value.into_owned()))
}
