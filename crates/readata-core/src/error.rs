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

//! Error types shared by all read operations.

use std::error::Error as StdError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Convenience alias for read results.
pub type ReadResult<T> = std::result::Result<T, ReadError>;

type BoxedError = Box<dyn StdError + Send + Sync + 'static>;

/// An error from a read operation.
///
/// Every variant names the entry point that failed and the path it was
/// given; the underlying failure is preserved as the error source rather
/// than folded into a mutated message. The rendered message always
/// contains the file path.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file could not be opened or read (missing, permission denied,
    /// path is a directory, ...).
    #[error("{operation}() failed to read {path:?}: {source}")]
    Io {
        /// The entry point that failed, e.g. `read_json_sync`.
        operation: &'static str,
        /// The file path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file was read but its content is not valid for the selected
    /// format.
    #[error("{operation}() failed to parse {path:?}: {source}")]
    Parse {
        /// The entry point that failed.
        operation: &'static str,
        /// The file path that caused the error.
        path: PathBuf,
        /// The underlying parser or conversion error.
        #[source]
        source: BoxedError,
    },
}

impl ReadError {
    /// Create an I/O error with operation and path context.
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with operation and path context, wrapping the
    /// underlying error as the source.
    pub fn parse(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: impl Into<BoxedError>,
    ) -> Self {
        Self::Parse {
            operation,
            path: path.into(),
            source: source.into(),
        }
    }

    /// The entry point that produced this error.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Io { operation, .. } | Self::Parse { operation, .. } => operation,
        }
    }

    /// The file path the failing operation was given.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }

    /// Returns true if the file itself could not be read.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns true if the content failed to parse.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("unexpected token")]
    struct FakeParserError;

    #[test]
    fn test_io_error_display_contains_path() {
        let err = ReadError::io(
            "read_yaml_sync",
            "conf/app.yaml",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let message = err.to_string();
        assert!(message.contains("read_yaml_sync()"));
        assert!(message.contains("conf/app.yaml"));
        assert!(message.contains("No such file or directory"));
        assert!(err.is_io());
        assert!(!err.is_parse());
    }

    #[test]
    fn test_parse_error_display_format() {
        let err = ReadError::parse("read_json_sync", "index.js", FakeParserError);
        assert_eq!(
            err.to_string(),
            "read_json_sync() failed to parse \"index.js\": unexpected token"
        );
        assert!(err.is_parse());
    }

    #[test]
    fn test_source_is_preserved() {
        let err = ReadError::parse("read_json_sync", "bad.json", FakeParserError);
        let source = StdError::source(&err).expect("source should be set");
        assert_eq!(source.to_string(), "unexpected token");
    }

    #[test]
    fn test_accessors() {
        let err = ReadError::io(
            "read_data_sync",
            "missing.toml",
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert_eq!(err.operation(), "read_data_sync");
        assert_eq!(err.path(), Path::new("missing.toml"));
    }
}
