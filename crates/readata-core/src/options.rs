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

//! Options forwarded from callers to the format readers.

use crate::FormatTag;

/// How YAML scalars are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YamlSchema {
    /// Resolve booleans, numbers and nulls to their typed values.
    #[default]
    Core,
    /// Keep every scalar as a string, like the YAML failsafe schema:
    /// `d: true` reads back as the string `"true"`.
    Failsafe,
}

/// Options passed through to the format readers.
///
/// The dispatcher interprets only [`format`](Self::format); every other
/// field is forwarded unchanged to the conversion layer of whichever
/// reader ends up selected.
///
/// # Examples
///
/// ```
/// use readata_core::{FormatTag, ReadOptions, YamlSchema};
///
/// let options = ReadOptions::new()
///     .format(FormatTag::Yaml)
///     .yaml_schema(YamlSchema::Failsafe);
/// assert_eq!(options.format, Some(FormatTag::Yaml));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Explicit format, overriding extension-based detection.
    pub format: Option<FormatTag>,
    /// YAML scalar resolution mode. Ignored by the other readers.
    pub yaml_schema: YamlSchema,
    /// Additional cap on nesting depth, enforced while converting the
    /// parsed document. `None` leaves the underlying parser's own limits
    /// as the only bound.
    pub max_depth: Option<usize>,
}

impl ReadOptions {
    /// Default options: detect the format from the extension, core YAML
    /// schema, no extra depth limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the explicit format, overriding extension detection.
    pub fn format(mut self, format: FormatTag) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the YAML scalar resolution mode.
    pub fn yaml_schema(mut self, schema: YamlSchema) -> Self {
        self.yaml_schema = schema;
        self
    }

    /// Sets the maximum allowed nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}
