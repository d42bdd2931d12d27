//! Declarative baseline policy configuration.
//!
//! Applications that keep their site-wide policy in configuration can
//! deserialize a [`CspConfig`] once at startup and build each request's
//! starting policy from it; request handlers then layer additional rules on
//! top through the usual setters.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::policy::ContentSecurityPolicy;

/// Serializable description of a baseline policy, in DSL-form tokens.
///
/// ```
/// use csp_builder::CspConfig;
///
/// let config = CspConfig::from_json(
///     r#"{ "directives": { "default_src": ["self"] }, "report_only": true }"#,
/// )
/// .unwrap();
/// let policy = config.build_policy();
/// assert_eq!(policy.to_header_value(), "default-src 'self';");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CspConfig {
    /// Directive name (any case/underscore variant) => DSL source tokens.
    #[serde(default)]
    pub directives: HashMap<String, Vec<String>>,

    /// Endpoint violation reports are sent to.
    #[serde(default)]
    pub report_uri: Option<String>,

    /// Report violations only (doesn't enforce).
    #[serde(default)]
    pub report_only: bool,
}

impl CspConfig {
    /// Parse a config from a JSON document.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_json(&content)?;
        log::debug!(
            "loaded CSP baseline from {}",
            path.as_ref().display()
        );
        Ok(config)
    }

    /// Build the starting policy for a request.
    ///
    /// Every entry is fed through
    /// [`ContentSecurityPolicy::add_sources`], so directive names and source
    /// tokens are normalized exactly as if they had been added through the
    /// setters.
    pub fn build_policy(&self) -> ContentSecurityPolicy {
        let mut policy = ContentSecurityPolicy::new();
        for (directive, sources) in &self.directives {
            policy.add_sources(directive, sources.iter().cloned());
        }
        policy.report_uri = self.report_uri.clone();
        policy.report_only = self.report_only;
        policy
    }
}
