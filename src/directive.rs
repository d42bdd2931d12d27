//! Directive registry and name canonicalization.

/// CSP directives recognized by the advisory validity check.
pub const DIRECTIVES: [&str; 16] = [
    "base-uri",
    "child-src",
    "connect-src",
    "default-src",
    "font-src",
    "form-action",
    "frame-src",
    "img-src",
    "manifest-src",
    "media-src",
    "navigate-to",
    "object-src",
    "prefetch-src",
    "script-src",
    "style-src",
    "worker-src",
];

/// Canonical form of a directive or keyword token: lowercase, with
/// underscores replaced by hyphens. `script_src`, `SCRIPT_SRC` and
/// `script-src` all canonicalize to `script-src`.
pub fn canonical_name(name: &str) -> String {
    name.to_ascii_lowercase().replace('_', "-")
}

/// Whether `name` canonicalizes to a known CSP directive.
///
/// Advisory only: unknown directives are still accepted by
/// [`ContentSecurityPolicy::add_sources`](crate::ContentSecurityPolicy::add_sources).
pub fn is_valid_directive(name: &str) -> bool {
    DIRECTIVES.contains(&canonical_name(name).as_str())
}
