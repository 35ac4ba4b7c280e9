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

//! YAML file reading.
//!
//! Parsing is delegated wholesale to `serde_yaml`; this crate does not
//! reimplement any YAML semantics. It reads the file, forwards the text
//! to the parser and converts the result into the generic [`Value`]
//! model, applying the scalar resolution mode from [`ReadOptions`].
//!
//! # Examples
//!
//! ```no_run
//! use readata_core::{ReadOptions, YamlSchema};
//! use readata_yaml::read_yaml_sync;
//!
//! let doc = read_yaml_sync("deploy.yaml", &ReadOptions::new()).unwrap();
//!
//! // Failsafe schema: scalars stay strings.
//! let raw = read_yaml_sync(
//!     "deploy.yaml",
//!     &ReadOptions::new().yaml_schema(YamlSchema::Failsafe),
//! )
//! .unwrap();
//! ```

mod error;
mod from_yaml;

pub use error::YamlError;
pub use from_yaml::yaml_to_value;

use std::path::Path;

use readata_core::{io, ReadError, ReadOptions, ReadResult, Value};

/// Synchronously read and parse a YAML file.
///
/// # Errors
///
/// [`ReadError::Io`] if the file cannot be read, [`ReadError::Parse`] if
/// its content is not valid YAML. Both carry the file path.
pub fn read_yaml_sync(path: impl AsRef<Path>, options: &ReadOptions) -> ReadResult<Value> {
    let path = path.as_ref();
    let content = io::read_file_sync("read_yaml_sync", path)?;
    parse_document("read_yaml_sync", path, &content, options)
}

/// Asynchronously read and parse a YAML file.
///
/// Same contract as [`read_yaml_sync`]; the file is read on tokio's
/// async I/O and parsing starts only after the read completes.
#[cfg(feature = "async")]
pub async fn read_yaml(path: impl AsRef<Path>, options: &ReadOptions) -> ReadResult<Value> {
    let path = path.as_ref();
    let content = io::read_file("read_yaml", path).await?;
    parse_document("read_yaml", path, &content, options)
}

/// Parse a YAML string into a generic value, without touching the
/// filesystem.
pub fn parse_str(content: &str, options: &ReadOptions) -> Result<Value, YamlError> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)?;
    yaml_to_value(&raw, options)
}

fn parse_document(
    operation: &'static str,
    path: &Path,
    content: &str,
    options: &ReadOptions,
) -> ReadResult<Value> {
    parse_str(content, options).map_err(|e| ReadError::parse(operation, path, e))
}
