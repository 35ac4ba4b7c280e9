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

//! YAML to generic value conversion.
//!
//! Anchors and aliases are already resolved by `serde_yaml` before the
//! value reaches this module; tagged values unwrap to their inner value.

use std::collections::BTreeMap;

use readata_core::{ReadOptions, Value, YamlSchema};
use serde_yaml::Value as YamlValue;

use crate::error::YamlError;

/// Convert a parsed `serde_yaml::Value` into the generic value model.
///
/// Interprets `yaml_schema` (scalar resolution mode) and `max_depth`
/// from the options.
pub fn yaml_to_value(value: &YamlValue, options: &ReadOptions) -> Result<Value, YamlError> {
    convert(value, options, 0)
}

fn convert(value: &YamlValue, options: &ReadOptions, depth: usize) -> Result<Value, YamlError> {
    if let Some(max) = options.max_depth {
        if depth > max {
            return Err(YamlError::MaxDepthExceeded(max));
        }
    }

    match value {
        YamlValue::Null => Ok(match options.yaml_schema {
            YamlSchema::Core => Value::Null,
            YamlSchema::Failsafe => Value::String("null".to_string()),
        }),
        YamlValue::Bool(b) => Ok(match options.yaml_schema {
            YamlSchema::Core => Value::Bool(*b),
            YamlSchema::Failsafe => Value::String(b.to_string()),
        }),
        YamlValue::Number(n) => convert_number(n, options.yaml_schema),
        YamlValue::String(s) => Ok(Value::String(s.clone())),
        YamlValue::Sequence(items) => items
            .iter()
            .map(|item| convert(item, options, depth + 1))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Sequence),
        YamlValue::Mapping(map) => {
            let mut out = BTreeMap::new();
            for (key, item) in map {
                out.insert(key_string(key)?, convert(item, options, depth + 1)?);
            }
            Ok(Value::Mapping(out))
        }
        YamlValue::Tagged(tagged) => convert(&tagged.value, options, depth),
    }
}

fn convert_number(number: &serde_yaml::Number, schema: YamlSchema) -> Result<Value, YamlError> {
    if schema == YamlSchema::Failsafe {
        return Ok(Value::String(number.to_string()));
    }
    if let Some(i) = number.as_i64() {
        Ok(Value::Int(i))
    } else if let Some(f) = number.as_f64() {
        Ok(Value::Float(f))
    } else {
        Err(YamlError::InvalidNumber(number.to_string()))
    }
}

// Scalar keys are stringified; YAML allows `1: x` or `true: x` and the
// document model only has string keys.
fn key_string(key: &YamlValue) -> Result<String, YamlError> {
    match key {
        YamlValue::String(s) => Ok(s.clone()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => key_string(&tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => Err(YamlError::ComplexKey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str, options: &ReadOptions) -> Result<Value, YamlError> {
        let raw: YamlValue = serde_yaml::from_str(content)?;
        yaml_to_value(&raw, options)
    }

    #[test]
    fn test_core_schema_resolves_scalars() {
        let doc = parse("a:\n  b: c\n  d: true\n", &ReadOptions::new()).unwrap();
        let inner = doc.get("a").unwrap();
        assert_eq!(inner.get("b").and_then(Value::as_str), Some("c"));
        assert_eq!(inner.get("d").and_then(Value::as_bool), Some(true));
    }

    #[test]
    fn test_failsafe_schema_keeps_scalars_as_strings() {
        let options = ReadOptions::new().yaml_schema(YamlSchema::Failsafe);
        let doc = parse("a:\n  b: c\n  d: true\n", &options).unwrap();
        let inner = doc.get("a").unwrap();
        assert_eq!(inner.get("d").and_then(Value::as_str), Some("true"));

        let doc = parse("n: 3\nf: 2.5\nz: ~\n", &options).unwrap();
        assert_eq!(doc.get("n").and_then(Value::as_str), Some("3"));
        assert_eq!(doc.get("f").and_then(Value::as_str), Some("2.5"));
        assert_eq!(doc.get("z").and_then(Value::as_str), Some("null"));
    }

    #[test]
    fn test_scalar_keys_are_stringified() {
        let doc = parse("1: one\ntrue: yes\n~: nothing\n", &ReadOptions::new()).unwrap();
        assert_eq!(doc.get("1").and_then(Value::as_str), Some("one"));
        assert_eq!(doc.get("true").and_then(Value::as_str), Some("yes"));
        assert_eq!(doc.get("null").and_then(Value::as_str), Some("nothing"));
    }

    #[test]
    fn test_complex_key_is_an_error() {
        let err = parse("[1, 2]: pair\n", &ReadOptions::new()).unwrap_err();
        assert!(matches!(err, YamlError::ComplexKey));
    }

    #[test]
    fn test_anchors_resolve() {
        let content = "defaults: &d\n  retries: 3\nprod:\n  config: *d\n";
        let doc = parse(content, &ReadOptions::new()).unwrap();
        let config = doc.get("prod").unwrap().get("config").unwrap();
        assert_eq!(config.get("retries").and_then(Value::as_int), Some(3));
    }

    #[test]
    fn test_tagged_value_unwraps() {
        let doc = parse("x: !custom 5\n", &ReadOptions::new()).unwrap();
        assert_eq!(doc.get("x").and_then(Value::as_int), Some(5));
    }

    #[test]
    fn test_sequence_root() {
        let doc = parse("- a\n- b\n", &ReadOptions::new()).unwrap();
        assert_eq!(doc.as_sequence().map(<[Value]>::len), Some(2));
    }

    #[test]
    fn test_max_depth_enforced() {
        let options = ReadOptions::new().max_depth(1);
        let err = parse("a:\n  b:\n    c: 1\n", &options).unwrap_err();
        assert!(matches!(err, YamlError::MaxDepthExceeded(1)));
    }
}
