//! Content Security Policy accumulator.
//!
//! [`ContentSecurityPolicy`] collects directive/source rules from any number
//! of call sites during a request, then serializes them deterministically
//! into the response header value. It is a permissive accumulator, not a
//! validator: unknown directives and arbitrary source tokens are stored and
//! emitted as-is.

use std::collections::{HashMap, HashSet};

use crate::directive::{self, canonical_name};
use crate::source::render_source;

/// Header emitted for an enforcing policy.
pub const HEADER_NAME: &str = "Content-Security-Policy";

/// Header emitted when the policy is report-only.
pub const REPORT_ONLY_HEADER_NAME: &str = "Content-Security-Policy-Report-Only";

/// Accumulating builder for a Content-Security-Policy header.
///
/// Built up within a single request's handling and read once; callers
/// mutating it from multiple execution contexts must synchronize externally.
#[derive(Debug, Clone, Default)]
pub struct ContentSecurityPolicy {
    /// Canonical directive name => raw DSL source tokens, in insertion order.
    /// Duplicates are kept here and collapsed at serialization.
    pub directives: HashMap<String, Vec<String>>,

    /// Emitted as a trailing `report-uri` directive when set and non-empty.
    pub report_uri: Option<String>,

    /// Report violations only (doesn't enforce).
    pub report_only: bool,
}

impl ContentSecurityPolicy {
    /// Create an empty policy. An empty policy serializes to the empty
    /// string and emits no header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append sources to a directive, creating its entry on first touch.
    ///
    /// The directive name is canonicalized (`script_src` and `script-src`
    /// address the same entry); unknown names are accepted as-is. Empty
    /// tokens are discarded. Touching a directive with no sources still
    /// records it. Returns the directive's accumulated source list.
    pub fn add_sources<I, S>(&mut self, directive: &str, sources: I) -> &[String]
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = canonical_name(directive);
        if !directive::is_valid_directive(&name) {
            log::trace!("accumulating unknown CSP directive: {}", name);
        }

        let list = self.directives.entry(name).or_default();
        list.extend(
            sources
                .into_iter()
                .map(Into::into)
                .filter(|source| !source.is_empty()),
        );
        list
    }

    /// Whether `name` canonicalizes to a known CSP directive.
    ///
    /// Advisory only; [`add_sources`](Self::add_sources) never rejects.
    pub fn is_valid_directive(&self, name: &str) -> bool {
        directive::is_valid_directive(name)
    }

    /// Add `base-uri` sources.
    pub fn base_uri<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_sources("base-uri", sources);
        self
    }

    /// Add `child-src` sources.
    pub fn child_src<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_sources("child-src", sources);
        self
    }

    /// Add `connect-src` sources.
    pub fn connect_src<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_sources("connect-src", sources);
        self
    }

    /// Add `default-src` sources.
    pub fn default_src<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_sources("default-src", sources);
        self
    }

    /// Add `font-src` sources.
    pub fn font_src<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_sources("font-src", sources);
        self
    }

    /// Add `form-action` sources.
    pub fn form_action<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_sources("form-action", sources);
        self
    }

    /// Add `frame-src` sources.
    pub fn frame_src<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_sources("frame-src", sources);
        self
    }

    /// Add `img-src` sources.
    pub fn img_src<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_sources("img-src", sources);
        self
    }

    /// Add `manifest-src` sources.
    pub fn manifest_src<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_sources("manifest-src", sources);
        self
    }

    /// Add `media-src` sources.
    pub fn media_src<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_sources("media-src", sources);
        self
    }

    /// Add `navigate-to` sources.
    pub fn navigate_to<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_sources("navigate-to", sources);
        self
    }

    /// Add `object-src` sources.
    pub fn object_src<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_sources("object-src", sources);
        self
    }

    /// Add `prefetch-src` sources.
    pub fn prefetch_src<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_sources("prefetch-src", sources);
        self
    }

    /// Add `script-src` sources.
    pub fn script_src<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_sources("script-src", sources);
        self
    }

    /// Add `style-src` sources.
    pub fn style_src<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_sources("style-src", sources);
        self
    }

    /// Add `worker-src` sources.
    pub fn worker_src<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_sources("worker-src", sources);
        self
    }

    /// Set the endpoint violation reports are sent to.
    pub fn report_uri<S: Into<String>>(&mut self, uri: S) -> &mut Self {
        self.report_uri = Some(uri.into());
        self
    }

    /// Enable report-only mode.
    pub fn report_only(&mut self, enabled: bool) -> &mut Self {
        self.report_only = enabled;
        self
    }

    /// The header this policy serializes under.
    pub fn header_name(&self) -> &'static str {
        if self.report_only {
            REPORT_ONLY_HEADER_NAME
        } else {
            HEADER_NAME
        }
    }

    /// Serialize to the CSP header value.
    ///
    /// Directives are emitted in lexicographic order of canonical name, each
    /// as `name source source ...` with sources deduplicated (stable,
    /// first occurrence wins) and rendered via
    /// [`render_source`](crate::source::render_source). Segments are joined
    /// with `"; "` and the value carries a trailing `;`. A `report-uri`
    /// segment, when configured, always comes last. An untouched policy
    /// serializes to the empty string.
    pub fn to_header_value(&self) -> String {
        let mut names: Vec<&str> = self.directives.keys().map(String::as_str).collect();
        names.sort_unstable();

        let mut segments = Vec::with_capacity(names.len() + 2);
        for name in names {
            let mut seen = HashSet::new();
            let rendered: Vec<String> = self.directives[name]
                .iter()
                .filter(|source| seen.insert(source.as_str()))
                .map(|source| render_source(source))
                .collect();
            segments.push(format!("{} {}", name, rendered.join(" ")));
        }

        if let Some(ref uri) = self.report_uri {
            if !uri.is_empty() {
                segments.push(format!("report-uri {}", uri));
            }
        }

        segments.push(String::new());
        segments.join("; ").trim().to_string()
    }

    /// Project the policy into a header map: a single entry under
    /// [`header_name`](Self::header_name), or an empty map when the policy
    /// serializes empty (no placeholder CSP header is ever emitted).
    pub fn to_header_map(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        let value = self.to_header_value();
        if !value.is_empty() {
            headers.insert(self.header_name().to_string(), value);
        }
        headers
    }
}
