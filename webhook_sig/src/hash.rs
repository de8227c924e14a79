use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::error::{Result, SignatureError};

pub type HmacSha1 = Hmac<Sha1>;

/// HMAC-SHA1 of `data` under `key`, base64 encoded with padding.
pub fn hmac_sha1_base64(key: impl AsRef<[u8]>, data: &[u8]) -> Result<String> {
    let mut mac =
        HmacSha1::new_from_slice(key.as_ref()).map_err(|_| SignatureError::InvalidKey)?;
    mac.update(data);
    Ok(BASE64_STANDARD.encode(mac.finalize().into_bytes()))
}

/// HMAC-SHA1 of the UTF-8 bytes of `content`, base64 encoded.
///
/// Must stay SHA1 to match what webhook senders sign.
pub fn generate_hmac(key: impl AsRef<[u8]>, content: &str) -> Result<String> {
    hmac_sha1_base64(key, content.as_bytes())
}

/// Lowercase hex SHA-256 of `body`, as carried in `bodySHA256`.
pub fn sha256_hex(body: impl AsRef<[u8]>) -> String {
    hex::encode(Sha256::digest(body.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        assert_eq!(
            generate_hmac("secret", "hello").unwrap(),
            "URIFXAX5RPhXVe/FzYlw4ZTp9Fs="
        );
        assert_eq!(
            hmac_sha1_base64("secret_key", b"bodystring").unwrap(),
            "lwSWI7Dl0gv2vrUxPYBgDj1qvlY="
        );
    }

    #[test]
    fn content_is_hashed_as_utf8() {
        assert_eq!(
            generate_hmac("secret", "h\u{e9}llo").unwrap(),
            "tk88YYX+cnj3s9KcRCJ22PY5Emw="
        );
    }

    #[test]
    fn accepts_empty_and_oversized_keys() {
        assert_eq!(
            generate_hmac("", "hello").unwrap(),
            "Y8zjVZEmdk/SWB8Fh4xnkQZcDQY="
        );
        assert_eq!(
            generate_hmac("k".repeat(100), "hello").unwrap(),
            "Qwk9ZD1Y9WZdJW9HrarAJO17oI4="
        );
    }

    #[test]
    fn deterministic() {
        let first = generate_hmac(b"secret".to_vec(), "hello").unwrap();
        let second = generate_hmac("secret".to_string(), "hello").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn key_sensitive() {
        let keys = ["secret", "secret2", "Secret", "secreT", "", "s"];
        let mut digests: Vec<String> = keys
            .iter()
            .map(|k| generate_hmac(k, "hello").unwrap())
            .collect();
        assert_eq!(digests[1], "YW6S2SsQjfCub535gqRTSDkPgpw=");
        assert_eq!(digests[2], "Zf6yTtbDPVKLhlw5F92qGntG8+4=");
        digests.sort();
        digests.dedup();
        assert_eq!(digests.len(), keys.len());
    }

    #[test]
    fn sha256_hex_of_empty_body() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
