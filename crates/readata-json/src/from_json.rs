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

//! JSON to generic value conversion.

use std::collections::BTreeMap;

use readata_core::{ReadOptions, Value};
use serde_json::Value as JsonValue;

use crate::error::JsonError;

/// Convert a parsed `serde_json::Value` into the generic value model.
///
/// The only option interpreted here is `max_depth`; JSON has no schema
/// modes.
pub fn json_to_value(value: &JsonValue, options: &ReadOptions) -> Result<Value, JsonError> {
    convert(value, options, 0)
}

fn convert(value: &JsonValue, options: &ReadOptions, depth: usize) -> Result<Value, JsonError> {
    if let Some(max) = options.max_depth {
        if depth > max {
            return Err(JsonError::MaxDepthExceeded(max));
        }
    }

    match value {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => convert_number(n),
        JsonValue::String(s) => Ok(Value::String(s.clone())),
        JsonValue::Array(items) => items
            .iter()
            .map(|item| convert(item, options, depth + 1))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Sequence),
        JsonValue::Object(map) => {
            let mut out = BTreeMap::new();
            for (key, item) in map {
                out.insert(key.clone(), convert(item, options, depth + 1)?);
            }
            Ok(Value::Mapping(out))
        }
    }
}

// u64 values above i64::MAX lose precision through f64 rather than fail.
fn convert_number(number: &serde_json::Number) -> Result<Value, JsonError> {
    if let Some(i) = number.as_i64() {
        Ok(Value::Int(i))
    } else if let Some(f) = number.as_f64() {
        Ok(Value::Float(f))
    } else {
        Err(JsonError::InvalidNumber(number.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str, options: &ReadOptions) -> Result<Value, JsonError> {
        let raw: JsonValue = serde_json::from_str(content)?;
        json_to_value(&raw, options)
    }

    #[test]
    fn test_scalars() {
        let options = ReadOptions::new();
        let doc = parse(
            r#"{"null": null, "bool": true, "int": -3, "float": 2.5, "str": "x"}"#,
            &options,
        )
        .unwrap();

        assert!(doc.get("null").unwrap().is_null());
        assert_eq!(doc.get("bool").and_then(Value::as_bool), Some(true));
        assert_eq!(doc.get("int").and_then(Value::as_int), Some(-3));
        assert_eq!(doc.get("float").and_then(Value::as_float), Some(2.5));
        assert_eq!(doc.get("str").and_then(Value::as_str), Some("x"));
    }

    #[test]
    fn test_nested_structure() {
        let doc = parse(r#"{"a": {"b": ["c", 1]}}"#, &ReadOptions::new()).unwrap();
        let seq = doc.get("a").unwrap().get("b").unwrap().as_sequence().unwrap();
        assert_eq!(seq[0], Value::String("c".to_string()));
        assert_eq!(seq[1], Value::Int(1));
    }

    #[test]
    fn test_non_object_root() {
        let doc = parse("[1, 2, 3]", &ReadOptions::new()).unwrap();
        assert_eq!(doc.as_sequence().map(<[Value]>::len), Some(3));
    }

    #[test]
    fn test_large_unsigned_becomes_float() {
        let content = format!("{}", u64::MAX);
        let doc = parse(&content, &ReadOptions::new()).unwrap();
        assert!(matches!(doc, Value::Float(_)));
    }

    #[test]
    fn test_max_depth_enforced() {
        let options = ReadOptions::new().max_depth(1);
        let err = parse(r#"{"a": {"b": {"c": 1}}}"#, &options).unwrap_err();
        assert!(matches!(err, JsonError::MaxDepthExceeded(1)));

        // Depth 1 still admits a flat object of scalars.
        assert!(parse(r#"{"a": 1}"#, &options).is_ok());
    }
}
