//! Tests for logging setup
//!
//! Only one global subscriber can be installed per process, so these tests
//! check that initialization fails gracefully rather than inspecting output.

use std::str::FromStr;
use typegraph::core::logging::{init_default_logging, init_logging, LogFormat};
use typegraph::prelude::*;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("Pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert!(LogFormat::from_str("xml").is_err());
}

#[test]
fn test_init_logging_with_levels_and_formats() {
    for level in ["trace", "debug", "info", "warn", "error", "off"] {
        for format in LogFormat::variants() {
            let _ = init_logging(Some(level), Some(*format));
        }
    }
    let _ = init_default_logging();
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}

#[test]
fn test_pipeline_runs_with_tracing_enabled() {
    let _ = init_logging(Some("trace"), Some("compact"));

    let mut catalog = TypeCatalog::new();
    catalog
        .insert(TypeMetadata::class("shop.Order").with_field(FieldDescriptor::new("ghost", "shop.Ghost")))
        .unwrap();
    let options = GraphOptions::new().with_package_filter("shop");
    let output = typegraph::render(&catalog, &["shop.Order", "shop.Missing"], options).unwrap();
    assert!(output.contains("class Order {"));
}
