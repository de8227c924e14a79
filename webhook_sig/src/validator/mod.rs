//! Webhook request validation.
//!
//! A sender signs `url + key1 + value1 + key2 + value2 ...` (params sorted by
//! key) with HMAC-SHA1 under the account's auth token and sends the base64
//! digest alongside the request. Senders differ in whether the signed URL
//! spells out the default port, so both forms are tried.

use std::fmt::{self, Debug, Formatter};

use url::Url;

use crate::{
    error::Result,
    hash::{generate_hmac, sha256_hex},
    uri::{add_port, body_sha256_from_url, remove_port},
    util::constant_time_eq,
};

/// Checks signed webhook requests against a shared auth token.
#[derive(Clone)]
pub struct RequestValidator {
    auth_token: String,
}

impl Debug for RequestValidator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestValidator")
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

impl RequestValidator {
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
        }
    }

    /// Signature a sender would attach for `url` and the POSTed `params`.
    pub fn compute_signature<K, V>(&self, url: &str, params: &[(K, V)]) -> Result<String>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut sorted: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_ref(), v.as_ref()))
            .collect();
        // Stable, so repeated keys keep their submission order.
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let mut payload = String::from(url);
        for (key, value) in sorted {
            payload.push_str(key);
            payload.push_str(value);
        }

        generate_hmac(&self.auth_token, &payload)
    }

    /// Whether `signature` matches `url` and `params` with or without the
    /// default port spelled out.
    pub fn validate<K, V>(&self, url: &str, params: &[(K, V)], signature: &str) -> Result<bool>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let parsed = Url::parse(url)?;

        let mut candidates = vec![url.to_string()];
        for variant in [remove_port(&parsed), add_port(&parsed)] {
            match variant {
                Ok(candidate) if !candidates.contains(&candidate) => candidates.push(candidate),
                Ok(_) => {}
                Err(err) => tracing::trace!("skipping port variant of {url}: {err}"),
            }
        }

        for candidate in &candidates {
            let expected = self.compute_signature(candidate, params)?;
            tracing::trace!("checking signature against {candidate}");
            if constant_time_eq(expected.as_bytes(), signature.as_bytes()) {
                return Ok(true);
            }
        }

        tracing::debug!(
            "signature mismatch for {url} ({} candidate URLs tried)",
            candidates.len()
        );
        Ok(false)
    }

    /// Validate a request whose body is `application/x-www-form-urlencoded`.
    pub fn validate_form(&self, url: &str, form_body: &str, signature: &str) -> Result<bool> {
        let params: Vec<(String, String)> = serde_urlencoded::from_str(form_body)?;
        self.validate(url, &params, signature)
    }

    /// Validate a request with a raw (e.g. JSON) body.
    ///
    /// The body is bound to the signature through the `bodySHA256` query
    /// parameter, so the URL is signed without params.
    pub fn validate_body(&self, url: &str, body: &[u8], signature: &str) -> Result<bool> {
        let Some(expected_hash) = body_sha256_from_url(url)? else {
            tracing::debug!("no bodySHA256 parameter on {url}");
            return Ok(false);
        };

        if !constant_time_eq(sha256_hex(body).as_bytes(), expected_hash.as_bytes()) {
            tracing::debug!("body hash mismatch for {url}");
            return Ok(false);
        }

        self.validate::<&str, &str>(url, &[], signature)
    }
}
