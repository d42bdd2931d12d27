//! Source-token rendering.
//!
//! Converts DSL-form tokens (`self`, `unsafe_eval`, `data`) into their
//! Content-Security-Policy wire form (`'self'`, `'unsafe-eval'`, `data:`).
//! Explicit origins such as `https://example.com` pass through unchanged.

use base64::{Engine, engine::general_purpose::STANDARD};
use sha2::{Digest, Sha256};

use crate::directive::canonical_name;

/// Tokens rendered as scheme sources (`data` => `data:`). Matched against the
/// raw token; scheme names are lowercase by convention.
pub const SCHEME_SOURCES: [&str; 6] = ["blob", "data", "filesystem", "http", "https", "mediastream"];

/// Keyword tokens rendered wrapped in single quotes (`self` => `'self'`).
pub const QUOTED_SOURCES: [&str; 6] = [
    "none",
    "self",
    "unsafe-eval",
    "unsafe-hashes",
    "unsafe-inline",
    "wasm-unsafe-eval",
];

/// Render a single DSL source token into its CSP wire form.
///
/// The first matching rule wins:
/// 1. raw scheme token => trailing colon (`http` => `http:`)
/// 2. keyword token, after canonicalization => single-quoted canonical form
///    (`unsafe_eval` => `'unsafe-eval'`)
/// 3. `nonce-`/`sha256-` prefixed token => single-quoted as-is, never
///    canonicalized, preserving case-sensitive nonce/digest material
/// 4. anything else passes through unchanged
pub fn render_source(token: &str) -> String {
    if SCHEME_SOURCES.contains(&token) {
        return format!("{}:", token);
    }

    let canonical = canonical_name(token);
    if QUOTED_SOURCES.contains(&canonical.as_str()) {
        return format!("'{}'", canonical);
    }

    if token.starts_with("nonce-") || token.starts_with("sha256-") {
        return format!("'{}'", token);
    }

    token.to_string()
}

/// Hash source allow-listing one inline script or style body:
/// `sha256-<base64 digest>`. The result is a raw DSL token; [`render_source`]
/// wraps it in single quotes on output.
pub fn sha256_source(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    format!("sha256-{}", STANDARD.encode(digest))
}
