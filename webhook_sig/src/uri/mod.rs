//! URL rendering for signature checks.
//!
//! Two families live here: `build_url` formats a [`ParsedUrl`] and always
//! appends the protocol's default port, and the `url::Url` helpers in `port`
//! add or strip ports the way webhook senders may have signed them.
//!
//! [`ParsedUrl`]: crate::types::ParsedUrl

mod builder;
mod port;
mod query;

pub use builder::build_url;
pub use port::{add_port, build_url_with_standard_port, remove_port};
pub use query::{body_sha256_from_url, BODY_SHA256_PARAM};
