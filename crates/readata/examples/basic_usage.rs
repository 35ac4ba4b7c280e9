//! Basic usage example for the readata library

use std::fs;

use readata::{optional, read_data_sync, FormatTag, ReadOptions, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    let json_path = dir.path().join("package.json");
    fs::write(&json_path, r#"{"name": "readata-demo", "private": true}"#)?;

    let yaml_path = dir.path().join("deploy.yaml");
    fs::write(&yaml_path, "replicas: 3\nregions:\n  - eu-west\n  - us-east\n")?;

    println!("=== Extension dispatch ===");
    let package = read_data_sync(&json_path, &ReadOptions::new())?;
    println!(
        "package name: {}",
        package.get("name").and_then(Value::as_str).unwrap_or("?")
    );

    let deploy = read_data_sync(&yaml_path, &ReadOptions::new())?;
    println!(
        "replicas: {}",
        deploy.get("replicas").and_then(Value::as_int).unwrap_or(0)
    );
    println!();

    println!("=== Explicit format hint ===");
    let txt_path = dir.path().join("fixture.txt");
    fs::write(&txt_path, "mode: debug\n")?;
    let hinted = read_data_sync(&txt_path, &ReadOptions::new().format(FormatTag::Yaml))?;
    println!(
        "mode: {}",
        hinted.get("mode").and_then(Value::as_str).unwrap_or("?")
    );
    println!();

    println!("=== Optional reads ===");
    let missing = optional::read_optional_json(dir.path().join(".apprc.json"), &ReadOptions::new());
    println!("missing rc file read back as: {}", missing);

    Ok(())
}
