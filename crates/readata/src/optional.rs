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

//! Best-effort readers that swallow every failure.
//!
//! For call sites where the file is allowed to be missing or broken (an
//! rc file, an override layer). Each reader maps any read or parse
//! failure to [`Value::empty_mapping`] and never returns an error.

use std::path::Path;

use readata_core::{ReadOptions, ReadResult, Value};

/// Run a reader, substituting the empty mapping for any failure.
///
/// All `read_optional_*` functions are this wrapper around the matching
/// strict reader.
pub fn or_empty(read: impl FnOnce() -> ReadResult<Value>) -> Value {
    read().unwrap_or_else(|err| {
        tracing::debug!(error = %err, "optional read failed, substituting empty mapping");
        Value::empty_mapping()
    })
}

/// Read a JSON file, or the empty mapping on any failure.
pub fn read_optional_json(path: impl AsRef<Path>, options: &ReadOptions) -> Value {
    or_empty(|| readata_json::read_json_sync(path, options))
}

/// Read a YAML file, or the empty mapping on any failure.
pub fn read_optional_yaml(path: impl AsRef<Path>, options: &ReadOptions) -> Value {
    or_empty(|| readata_yaml::read_yaml_sync(path, options))
}

/// Read a TOML file, or the empty mapping on any failure.
pub fn read_optional_toml(path: impl AsRef<Path>, options: &ReadOptions) -> Value {
    or_empty(|| readata_toml::read_toml_sync(path, options))
}

/// Read a data file with extension dispatch, or the empty mapping on any
/// failure.
pub fn read_optional_data(path: impl AsRef<Path>, options: &ReadOptions) -> Value {
    or_empty(|| crate::read_data_sync(path, options))
}
