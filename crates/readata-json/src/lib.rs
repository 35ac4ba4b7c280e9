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

//! JSON file reading.
//!
//! Parsing is delegated to `serde_json`; this crate reads the file,
//! forwards the text to the parser and converts the result into the
//! generic [`Value`] model. Errors carry the originating file path.
//!
//! # Examples
//!
//! ```no_run
//! use readata_core::ReadOptions;
//! use readata_json::read_json_sync;
//!
//! let doc = read_json_sync("config.json", &ReadOptions::new()).unwrap();
//! assert!(doc.get("name").is_some());
//! ```

mod error;
mod from_json;

pub use error::JsonError;
pub use from_json::json_to_value;

use std::path::Path;

use readata_core::{io, ReadError, ReadOptions, ReadResult, Value};

/// Synchronously read and parse a JSON file.
///
/// # Errors
///
/// [`ReadError::Io`] if the file cannot be read, [`ReadError::Parse`] if
/// its content is not valid JSON. Both carry the file path.
pub fn read_json_sync(path: impl AsRef<Path>, options: &ReadOptions) -> ReadResult<Value> {
    let path = path.as_ref();
    let content = io::read_file_sync("read_json_sync", path)?;
    parse_document("read_json_sync", path, &content, options)
}

/// Asynchronously read and parse a JSON file.
///
/// Same contract as [`read_json_sync`]; the file is read on tokio's
/// async I/O and parsing starts only after the read completes.
#[cfg(feature = "async")]
pub async fn read_json(path: impl AsRef<Path>, options: &ReadOptions) -> ReadResult<Value> {
    let path = path.as_ref();
    let content = io::read_file("read_json", path).await?;
    parse_document("read_json", path, &content, options)
}

/// Parse a JSON string into a generic value, without touching the
/// filesystem.
pub fn parse_str(content: &str, options: &ReadOptions) -> Result<Value, JsonError> {
    let raw: serde_json::Value = serde_json::from_str(content)?;
    json_to_value(&raw, options)
}

fn parse_document(
    operation: &'static str,
    path: &Path,
    content: &str,
    options: &ReadOptions,
) -> ReadResult<Value> {
    parse_str(content, options).map_err(|e| ReadError::parse(operation, path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_json_sync() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"a": {"b": "c"}}"#).unwrap();

        let doc = read_json_sync(file.path(), &ReadOptions::new()).unwrap();
        let inner = doc.get("a").unwrap();
        assert_eq!(inner.get("b").and_then(Value::as_str), Some("c"));
    }

    #[test]
    fn test_read_json_sync_missing_file() {
        let err = read_json_sync("does-not-exist.json", &ReadOptions::new()).unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("does-not-exist.json"));
    }

    #[test]
    fn test_parse_error_names_path_and_operation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"module.exports = {};").unwrap();

        let err = read_json_sync(file.path(), &ReadOptions::new()).unwrap_err();
        assert!(err.is_parse());
        let message = err.to_string();
        assert!(message.starts_with("read_json_sync() failed to parse"));
        assert!(message.contains(&file.path().display().to_string()));
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_read_json_matches_sync() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"n": [1, 2.5, null, true]}"#).unwrap();

        let sync_doc = read_json_sync(file.path(), &ReadOptions::new()).unwrap();
        let async_doc = read_json(file.path(), &ReadOptions::new()).await.unwrap();
        assert_eq!(sync_doc, async_doc);
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_read_json_missing_file_is_err_not_panic() {
        let result = read_json("does-not-exist.json", &ReadOptions::new()).await;
        assert!(result.unwrap_err().is_io());
    }
}
