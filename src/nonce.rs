//! CSP nonce generation.
//!
//! A nonce allow-lists one specific inline script or style for one response.
//! Generate a fresh [`Nonce`] per request, emit [`Nonce::value`] in the HTML
//! `nonce` attribute and feed [`Nonce::source`] to the policy.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::Rng;

/// Single-use random source token material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce {
    value: String,
}

impl Nonce {
    /// Generate a fresh 128-bit nonce.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let random_bytes: [u8; 16] = rng.r#gen();
        Self {
            value: URL_SAFE_NO_PAD.encode(random_bytes),
        }
    }

    /// The bare nonce value, as embedded in an HTML `nonce` attribute.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The DSL source token (`nonce-<value>`) to add to a directive.
    pub fn source(&self) -> String {
        format!("nonce-{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_generation() {
        let nonce = Nonce::generate();
        // 16 bytes => 22 chars of unpadded base64url.
        assert_eq!(nonce.value().len(), 22);
        assert!(!nonce.value().contains('='));
    }

    #[test]
    fn test_nonces_are_unique() {
        assert_ne!(Nonce::generate(), Nonce::generate());
    }

    #[test]
    fn test_nonce_source_token() {
        let nonce = Nonce::generate();
        assert_eq!(nonce.source(), format!("nonce-{}", nonce.value()));
    }
}
