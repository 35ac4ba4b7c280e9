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

//! Extension-based dispatch over the format readers.

use std::path::Path;

use readata_core::{FormatTag, ReadOptions, ReadResult, Value};

/// Synchronously read a data file, choosing the reader from the explicit
/// format option, else the file extension, else JSON.
///
/// The selected reader's result is returned unchanged.
pub fn read_data_sync(path: impl AsRef<Path>, options: &ReadOptions) -> ReadResult<Value> {
    let path = path.as_ref();
    match resolve_format(path, options) {
        FormatTag::Json => readata_json::read_json_sync(path, options),
        FormatTag::Yaml => readata_yaml::read_yaml_sync(path, options),
        FormatTag::Toml => readata_toml::read_toml_sync(path, options),
    }
}

/// Asynchronously read a data file, with the same format resolution as
/// [`read_data_sync`].
#[cfg(feature = "async")]
pub async fn read_data(path: impl AsRef<Path>, options: &ReadOptions) -> ReadResult<Value> {
    let path = path.as_ref();
    match resolve_format(path, options) {
        FormatTag::Json => readata_json::read_json(path, options).await,
        FormatTag::Yaml => readata_yaml::read_yaml(path, options).await,
        FormatTag::Toml => readata_toml::read_toml(path, options).await,
    }
}

fn resolve_format(path: &Path, options: &ReadOptions) -> FormatTag {
    let format = options
        .format
        .unwrap_or_else(|| FormatTag::from_path(path));
    tracing::debug!(path = %path.display(), %format, "dispatching data read");
    format
}
