//! Per-request policy scope.
//!
//! One [`PolicyScope`] per request: hooks, handlers and template code mutate
//! the policy through [`PolicyScope::policy`] (created lazily on first
//! access), and the response-finalization hook merges the resulting header
//! into the outgoing response with [`PolicyScope::apply`].

use std::collections::HashMap;

use crate::policy::ContentSecurityPolicy;

/// Request-scoped lazy holder for a [`ContentSecurityPolicy`].
#[derive(Debug, Clone, Default)]
pub struct PolicyScope {
    policy: Option<ContentSecurityPolicy>,
}

impl PolicyScope {
    /// Create a scope with no policy configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// The request's policy, created empty on first access and cached for
    /// the remainder of the request.
    pub fn policy(&mut self) -> &mut ContentSecurityPolicy {
        self.policy.get_or_insert_with(ContentSecurityPolicy::new)
    }

    /// Whether the policy was ever accessed.
    pub fn is_configured(&self) -> bool {
        self.policy.is_some()
    }

    /// Merge the serialized policy into an outgoing header collection.
    ///
    /// Unrelated headers are left untouched. A scope whose policy was never
    /// accessed, or whose policy serializes empty, merges nothing.
    pub fn apply(&self, headers: &mut HashMap<String, String>) {
        if let Some(ref policy) = self.policy {
            for (name, value) in policy.to_header_map() {
                log::debug!("setting {} header ({} bytes)", name, value.len());
                headers.insert(name, value);
            }
        }
    }
}
