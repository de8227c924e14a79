//! # webhook_sig
//!
//! Helpers for signing and checking webhook requests: a URL formatter that
//! spells out the protocol's default port, port-normalizing helpers over
//! `url::Url`, an HMAC-SHA1/base64 signer and a [`RequestValidator`] that
//! ties them together. Everything is synchronous and free of shared state.

pub mod error;
pub mod hash;
pub mod types;
pub mod uri;
pub mod util;
pub mod validator;

pub use error::{Result, SignatureError};
pub use hash::{generate_hmac, hmac_sha1_base64, sha256_hex, HmacSha1};
pub use types::*;
pub use uri::{
    add_port, body_sha256_from_url, build_url, build_url_with_standard_port, remove_port,
};
pub use validator::RequestValidator;
