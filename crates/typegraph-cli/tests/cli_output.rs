//! End-to-end tests of the typegraph binary
//!
//! The binary is spawned with a temporary catalog and its stdout, stderr and
//! exit status are checked.

use std::path::Path;
use std::process::{Command, Output};

const CATALOG: &str = r#"{
    "types": [
        { "name": "shop.Order",
          "fields": [
            { "name": "customer", "visibility": "public", "type": "shop.Customer" },
            { "name": "status", "visibility": "private", "type": "shop.Status" }
          ] },
        { "name": "shop.Customer",
          "fields": [{ "name": "address", "visibility": "private", "type": "shop.Address" }] },
        { "name": "shop.Address" },
        { "name": "shop.Status", "kind": "enum",
          "fields": [{ "name": "OPEN", "visibility": "public", "static": true, "type": "shop.Status" }] }
    ]
}"#;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_typegraph"))
        .args(args)
        .env("TYPEGRAPH_LOG_LEVEL", "off")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn typegraph")
}

fn write_catalog(dir: &Path) -> String {
    let path = dir.join("types.json");
    std::fs::write(&path, CATALOG).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_render_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());

    let output = run_cli(&["render", "--catalog", &catalog, "--root", "shop.Order"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = "\
@startuml
'=====================GENERATED========================
package shop {
    enum Status {
        {static} + OPEN
    }
    class Customer {
        - address : Address
    }
    class Order {
        + customer : Customer
        - status : Status
    }
}
Order --> Customer
Order --> Status
'=====================end==============================
@enduml
";
    assert_eq!(stdout, expected);
}

#[test]
fn test_render_unbounded_depth() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());

    let output = run_cli(&["render", "-c", &catalog, "-r", "shop.Order", "--depth", "-1"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("    class Address {\n"));
    assert!(stdout.contains("Customer --> Address\n"));
}

#[test]
fn test_render_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());
    let out = dir.path().join("order.puml");

    let output = run_cli(&[
        "render",
        "-c",
        &catalog,
        "-r",
        "shop.Order",
        "-o",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(std::fs::read_to_string(&out).unwrap().starts_with("@startuml\n"));
}

#[test]
fn test_split() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());
    let out_dir = dir.path().join("diagrams");

    let output = run_cli(&[
        "split",
        "-c",
        &catalog,
        "-r",
        "shop.Order",
        "--out-dir",
        out_dir.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let mut files: Vec<_> = std::fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    files.sort();
    assert_eq!(
        files,
        vec!["shop.Address.puml", "shop.Customer.puml", "shop.Order.puml"]
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn test_nodes_listing() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());

    let output = run_cli(&["nodes", "-c", &catalog, "-r", "shop.Order"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "shop.Order\tOrder\tclass\nshop.Customer\tCustomer\tclass\nshop.Status\tStatus\tenum\n"
    );
}

#[test]
fn test_nodes_json() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());

    let output = run_cli(&["nodes", "-c", &catalog, "-r", "shop.Order", "-r", "shop.Address", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["nodes"][0]["name"], "shop.Order");
    assert_eq!(value["nodes"][1]["display_name"], "Address");
    assert_eq!(value["nodes"][1]["kind"], "class");
}

#[test]
fn test_missing_catalog_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    let output = run_cli(&["render", "-c", missing.to_str().unwrap(), "-r", "shop.Order"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: Failed to load catalog"));
}

#[test]
fn test_malformed_catalog_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();

    let output = run_cli(&["nodes", "-c", path.to_str().unwrap(), "-r", "shop.Order"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid catalog JSON"));
}
