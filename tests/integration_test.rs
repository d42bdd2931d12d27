//! Integration tests for csp-builder

use csp_builder::*;
use std::collections::HashMap;

#[test]
fn test_request_lifecycle() {
    // Startup: site-wide baseline from configuration.
    let baseline = CspConfig::from_json(
        r#"{
            "directives": {
                "default_src": ["self"],
                "img_src": ["self", "data"]
            },
            "report_uri": "https://example.com/csp-report"
        }"#,
    )
    .unwrap();

    // Request start: the pre-handling hook seeds the request's policy.
    let mut scope = PolicyScope::new();
    *scope.policy() = baseline.build_policy();

    // Handler code allows its CDN.
    scope.policy().script_src(["self", "https://cdn.example.com"]);

    // Template code allows one inline script via nonce.
    let nonce = Nonce::generate();
    scope.policy().script_src([nonce.source()]);

    // Response finalization: merge into the outgoing headers.
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "text/html".to_string());
    scope.apply(&mut headers);

    assert_eq!(headers.len(), 2);
    assert_eq!(headers["Content-Type"], "text/html");
    assert_eq!(
        headers["Content-Security-Policy"],
        format!(
            "default-src 'self'; img-src 'self' data:; script-src 'self' \
             https://cdn.example.com 'nonce-{}'; report-uri https://example.com/csp-report;",
            nonce.value()
        )
    );
}

#[test]
fn test_untouched_builder_emits_nothing() {
    let policy = ContentSecurityPolicy::new();
    assert_eq!(policy.to_header_value(), "");
    assert!(policy.to_header_map().is_empty());

    let scope = PolicyScope::new();
    let mut headers = HashMap::new();
    scope.apply(&mut headers);
    assert!(headers.is_empty());
}

#[test]
fn test_accumulation_across_call_sites() {
    let mut policy = ContentSecurityPolicy::new();
    policy.default_src(["self"]);
    policy.default_src(["self", "https://static.example.com"]);

    assert_eq!(
        policy.to_header_value(),
        "default-src 'self' https://static.example.com;"
    );
}

#[test]
fn test_report_only_policy() {
    let mut scope = PolicyScope::new();
    scope
        .policy()
        .default_src(["self"])
        .script_src(["self"])
        .style_src(["self"])
        .report_only(true);

    let mut headers = HashMap::new();
    scope.apply(&mut headers);

    assert!(!headers.contains_key("Content-Security-Policy"));
    assert_eq!(
        headers["Content-Security-Policy-Report-Only"],
        "default-src 'self'; script-src 'self'; style-src 'self';"
    );
}

#[test]
fn test_hash_source_allows_inline_script() {
    let mut policy = ContentSecurityPolicy::new();
    policy.script_src(["self".to_string(), sha256_source("doSomething();")]);

    assert_eq!(
        policy.to_header_value(),
        "script-src 'self' 'sha256-RFWPLDbv2BY+rCkDzsE+0fr8ylGr2R2faWMhq4lfEQc=';"
    );
}

#[test]
fn test_rendering_table() {
    assert_eq!(render_source("self"), "'self'");
    assert_eq!(render_source("unsafe_eval"), "'unsafe-eval'");
    assert_eq!(render_source("data"), "data:");
    assert_eq!(render_source("http"), "http:");
    assert_eq!(render_source("https://example.com"), "https://example.com");
    assert_eq!(render_source("nonce-AbC123"), "'nonce-AbC123'");
}

#[test]
fn test_unknown_directive_round_trip() {
    assert!(is_valid_directive("frame-src"));
    assert!(!is_valid_directive("totally-made-up"));

    let mut policy = ContentSecurityPolicy::new();
    policy.add_sources("totally-made-up", ["x"]);
    assert_eq!(policy.to_header_value(), "totally-made-up x;");
}
