// Dweve Readata - Structured Data File Reading
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Dispatch tests for the readata facade: extension-based selection,
//! explicit format hints, and sync/async agreement.

use std::fs;
use std::path::PathBuf;

use readata::{
    read_data, read_data_sync, read_json_sync, read_yaml_sync, yaml_to_value, FormatTag,
    ReadOptions, Value,
};
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Extension dispatch
// =============================================================================

#[test]
fn test_json_extension_dispatches_to_json() {
    let dir = TempDir::new().unwrap();
    // This content is also valid YAML; the extension must win.
    let path = write_fixture(&dir, "test.json", r#"{"a": {"b": "c"}}"#);

    let doc = read_data_sync(&path, &ReadOptions::new()).unwrap();
    assert_eq!(doc, read_json_sync(&path, &ReadOptions::new()).unwrap());
    assert_eq!(
        doc.get("a").and_then(|a| a.get("b")).and_then(Value::as_str),
        Some("c")
    );

    // Valid YAML that is not valid JSON: the .json extension means the
    // JSON parser runs, and fails.
    let yaml_in_json = write_fixture(&dir, "sneaky.json", "a: 1\n");
    let err = read_data_sync(&yaml_in_json, &ReadOptions::new()).unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn test_yaml_extensions_dispatch_to_yaml() {
    let dir = TempDir::new().unwrap();
    for name in ["test.yml", "test.yaml"] {
        let path = write_fixture(&dir, name, "a:\n  b: c\n  d: true\n");
        let doc = read_data_sync(&path, &ReadOptions::new()).unwrap();
        let inner = doc.get("a").unwrap();
        assert_eq!(inner.get("b").and_then(Value::as_str), Some("c"));
        assert_eq!(inner.get("d").and_then(Value::as_bool), Some(true));
    }
}

#[test]
fn test_toml_extension_dispatches_to_toml() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "Config.toml", "[server]\nport = 8080\n");

    let doc = read_data_sync(&path, &ReadOptions::new()).unwrap();
    assert_eq!(
        doc.get("server").and_then(|s| s.get("port")).and_then(Value::as_int),
        Some(8080)
    );
}

#[test]
fn test_unknown_extension_defaults_to_json() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "settings.conf", r#"{"mode": "quiet"}"#);

    let doc = read_data_sync(&path, &ReadOptions::new()).unwrap();
    assert_eq!(doc.get("mode").and_then(Value::as_str), Some("quiet"));
}

#[test]
fn test_multi_dot_path_uses_final_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "archive.tar.json", r#"{"ok": true}"#);

    let doc = read_data_sync(&path, &ReadOptions::new()).unwrap();
    assert_eq!(doc.get("ok").and_then(Value::as_bool), Some(true));
}

// =============================================================================
// Explicit format hint
// =============================================================================

#[test]
fn test_format_hint_overrides_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "fixture.txt", "a:\n  b: c\n");

    let options = ReadOptions::new().format(FormatTag::Yaml);
    let doc = read_data_sync(&path, &options).unwrap();
    assert_eq!(
        doc.get("a").and_then(|a| a.get("b")).and_then(Value::as_str),
        Some("c")
    );

    // The same file without the hint is parsed as JSON and fails.
    assert!(read_data_sync(&path, &ReadOptions::new()).is_err());
}

// =============================================================================
// Sync/async agreement
// =============================================================================

#[tokio::test]
async fn test_read_data_agrees_with_sync() {
    let dir = TempDir::new().unwrap();
    let json = write_fixture(&dir, "a.json", r#"{"n": [1, 2.5, null]}"#);
    let yaml = write_fixture(&dir, "a.yaml", "n:\n  - 1\n  - 2.5\n  - ~\n");
    let toml = write_fixture(&dir, "a.toml", "n = [1, 2]\n");

    for path in [&json, &yaml, &toml] {
        let sync_doc = read_data_sync(path, &ReadOptions::new()).unwrap();
        let async_doc = read_data(path, &ReadOptions::new()).await.unwrap();
        assert_eq!(sync_doc, async_doc);
    }
}

#[test]
fn test_yaml_reader_agrees_with_underlying_engine() {
    let dir = TempDir::new().unwrap();
    let content = "a:\n  b: c\n  d: true\n";
    let path = write_fixture(&dir, "engine.yaml", content);

    let via_reader = read_yaml_sync(&path, &ReadOptions::new()).unwrap();
    let engine: serde_yaml::Value = serde_yaml::from_str(content).unwrap();
    let via_engine = yaml_to_value(&engine, &ReadOptions::new()).unwrap();
    assert_eq!(via_reader, via_engine);
}
