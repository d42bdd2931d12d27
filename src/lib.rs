//! Dynamic Content-Security-Policy builder.
//!
//! CSP helps prevent XSS attacks by declaring which dynamic resources are
//! allowed to load. This crate accumulates directive rules from any number of
//! call sites during a request's lifecycle, then serializes them into the
//! `Content-Security-Policy` (or `Content-Security-Policy-Report-Only`)
//! header exactly once, as a header map to merge into the outgoing response.
//!
//! # Example
//!
//! ```
//! use csp_builder::PolicyScope;
//! use std::collections::HashMap;
//!
//! let mut scope = PolicyScope::new();
//!
//! // Anywhere during request handling (hooks, handlers, templates):
//! scope
//!     .policy()
//!     .default_src(["self"])
//!     .script_src(["self", "https://cdn.example.com"]);
//!
//! // Once the response is fully prepared:
//! let mut headers: HashMap<String, String> = HashMap::new();
//! scope.apply(&mut headers);
//!
//! assert_eq!(
//!     headers["Content-Security-Policy"],
//!     "default-src 'self'; script-src 'self' https://cdn.example.com;"
//! );
//! ```

pub mod config;
pub mod directive;
pub mod error;
pub mod nonce;
pub mod policy;
pub mod scope;
pub mod source;

pub use config::CspConfig;
pub use directive::is_valid_directive;
pub use error::{ConfigError, Result};
pub use nonce::Nonce;
pub use policy::ContentSecurityPolicy;
pub use scope::PolicyScope;
pub use source::{render_source, sha256_source};
