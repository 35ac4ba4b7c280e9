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

//! # Readata - Structured Data File Reading
//!
//! Readata loads JSON, YAML and TOML files from disk into one generic
//! in-memory [`Value`], with blocking and async entry points and
//! automatic format selection from the file extension.
//!
//! ## Quick Start
//!
//! ```no_run
//! use readata::{read_data_sync, ReadOptions, Value};
//!
//! // Format chosen from the extension.
//! let config = read_data_sync("app.yaml", &ReadOptions::new()).unwrap();
//! let json = read_data_sync("package.json", &ReadOptions::new()).unwrap();
//!
//! if let Some(name) = json.get("name").and_then(Value::as_str) {
//!     println!("{}", name);
//! }
//! ```
//!
//! ## Explicit format
//!
//! An explicit format in the options overrides extension detection:
//!
//! ```no_run
//! use readata::{read_data_sync, FormatTag, ReadOptions};
//!
//! let options = ReadOptions::new().format(FormatTag::Yaml);
//! let doc = read_data_sync("fixture.txt", &options).unwrap();
//! ```
//!
//! ## Async
//!
//! With the `async` feature (default), every reader has a non-blocking
//! twin on tokio's file I/O:
//!
//! ```no_run
//! # async fn example() -> readata::ReadResult<()> {
//! use readata::{read_data, ReadOptions};
//!
//! let doc = read_data("app.yaml", &ReadOptions::new()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Optional reads
//!
//! The [`optional`] readers swallow every failure and hand back an empty
//! mapping, for "the file may simply not exist" call sites:
//!
//! ```no_run
//! use readata::{optional, ReadOptions};
//!
//! let doc = optional::read_optional_json(".apprc.json", &ReadOptions::new());
//! assert!(doc.as_mapping().is_some());
//! ```
//!
//! ## Crates
//!
//! This crate is a thin facade. The pieces live in:
//!
//! - `readata-core`: [`Value`], [`ReadError`], [`ReadOptions`], [`FormatTag`]
//! - `readata-json` / `readata-yaml` / `readata-toml`: one reader per format
//!
//! Parsing itself is delegated to `serde_json`, `serde_yaml` and `toml`;
//! readata adds the file handling, the unified value model and the
//! dispatch, nothing more.

mod read;
pub mod optional;

pub use read::read_data_sync;

#[cfg(feature = "async")]
pub use read::read_data;

// Re-export the core model
pub use readata_core::{FormatTag, ReadError, ReadOptions, ReadResult, Value, YamlSchema};

// Re-export the per-format readers
pub use readata_json::{json_to_value, read_json_sync, JsonError};
pub use readata_toml::{read_toml_sync, toml_to_value, TomlError};
pub use readata_yaml::{read_yaml_sync, yaml_to_value, YamlError};

#[cfg(feature = "async")]
pub use readata_json::read_json;
#[cfg(feature = "async")]
pub use readata_toml::read_toml;
#[cfg(feature = "async")]
pub use readata_yaml::read_yaml;
