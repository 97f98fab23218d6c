//! Snapshot tests for PlantUML output
//!
//! These tests compare rendered output against golden files in tests/fixtures/.
//! To update fixtures after changing the output, run the tests with UPDATE_FIXTURES=1

use std::fs;
use std::path::{Path, PathBuf};
use typegraph::prelude::*;

fn fixture_path(file: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(file)
}

fn shop_catalog() -> TypeCatalog {
    TypeCatalog::from_path(fixture_path("shop.json")).expect("shop catalog should load")
}

/// Compare rendered output to a fixture file
fn assert_fixture(name: &str, roots: &[&str], options: GraphOptions) {
    let catalog = shop_catalog();
    let output = typegraph::render(&catalog, roots, options).expect("render should succeed");
    let fixture_path = fixture_path(&format!("{}.puml", name));

    if std::env::var("UPDATE_FIXTURES").is_ok() {
        fs::write(&fixture_path, &output).expect("failed to write fixture");
        println!("Updated fixture: {}", fixture_path.display());
        return;
    }

    let expected = fs::read_to_string(&fixture_path).unwrap_or_else(|_| {
        panic!(
            "Fixture not found: {}\nRun with UPDATE_FIXTURES=1 to create it.\n\nActual output:\n{}",
            fixture_path.display(),
            output
        )
    });

    if output != expected {
        panic!(
            "Snapshot mismatch for '{}'!\n\n=== Expected ===\n{}\n=== Actual ===\n{}\nRun with UPDATE_FIXTURES=1 to update.",
            name, expected, output
        );
    }
}

#[test]
fn test_single_root_order() {
    assert_fixture(
        "shop_order",
        &["shop.Order"],
        GraphOptions::new().with_package_filter("shop"),
    );
}

#[test]
fn test_multi_root_scope() {
    assert_fixture(
        "shop_multi_root",
        &["shop.Order", "shop.Customer", "shop.Address"],
        GraphOptions::new().with_package_filter("shop"),
    );
}
