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

//! Error types for YAML reading.

use thiserror::Error;

/// Errors that can occur while turning YAML text into a generic value.
#[derive(Debug, Error)]
pub enum YamlError {
    /// YAML parsing failed.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Mapping key that is itself a sequence or mapping.
    #[error("mapping keys must be scalars")]
    ComplexKey,

    /// Number representable as neither `i64` nor `f64`.
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// Configured nesting depth exceeded.
    #[error("maximum nesting depth of {0} exceeded")]
    MaxDepthExceeded(usize),
}
