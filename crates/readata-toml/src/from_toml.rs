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

//! TOML to generic value conversion.

use std::collections::BTreeMap;

use readata_core::{ReadOptions, Value};
use toml::Value as TomlValue;

use crate::error::TomlError;

/// Convert a parsed `toml::Value` into the generic value model.
///
/// Datetimes become their RFC 3339 string form; the generic model has
/// no date type. The only option interpreted here is `max_depth`.
pub fn toml_to_value(value: &TomlValue, options: &ReadOptions) -> Result<Value, TomlError> {
    convert(value, options, 0)
}

fn convert(value: &TomlValue, options: &ReadOptions, depth: usize) -> Result<Value, TomlError> {
    if let Some(max) = options.max_depth {
        if depth > max {
            return Err(TomlError::MaxDepthExceeded(max));
        }
    }

    match value {
        TomlValue::Boolean(b) => Ok(Value::Bool(*b)),
        TomlValue::Integer(i) => Ok(Value::Int(*i)),
        TomlValue::Float(f) => Ok(Value::Float(*f)),
        TomlValue::String(s) => Ok(Value::String(s.clone())),
        TomlValue::Datetime(dt) => Ok(Value::String(dt.to_string())),
        TomlValue::Array(items) => items
            .iter()
            .map(|item| convert(item, options, depth + 1))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Sequence),
        TomlValue::Table(table) => {
            let mut out = BTreeMap::new();
            for (key, item) in table {
                out.insert(key.clone(), convert(item, options, depth + 1)?);
            }
            Ok(Value::Mapping(out))
        }
    }
}
