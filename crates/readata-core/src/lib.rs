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

//! Core data model and shared infrastructure for readata.
//!
//! This crate carries everything the format readers have in common:
//!
//! - [`Value`]: the generic document produced by every reader
//! - [`ReadError`] / [`ReadResult`]: the error contract shared by all
//!   read operations
//! - [`FormatTag`] and [`ReadOptions`]: format resolution and the options
//!   bag forwarded to the readers
//! - [`io`]: file reading with path-tagged errors, in blocking and
//!   (feature `async`) non-blocking form
//!
//! The format readers themselves live in `readata-json`, `readata-yaml`
//! and `readata-toml`; the `readata` facade adds extension dispatch on
//! top of them.

mod error;
mod format;
pub mod io;
mod options;
mod value;

pub use error::{ReadError, ReadResult};
pub use format::FormatTag;
pub use options::{ReadOptions, YamlSchema};
pub use value::Value;
