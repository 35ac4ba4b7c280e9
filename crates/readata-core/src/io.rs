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

//! File reading shared by the format readers.
//!
//! Every reader is a two-stage pipeline: read the file as UTF-8 text,
//! then parse it. This module is stage one; a failure here means stage
//! two never runs.

use std::fs;
use std::path::Path;

use crate::{ReadError, ReadResult};

/// Read a file's full contents as UTF-8 text, blocking.
pub fn read_file_sync(operation: &'static str, path: &Path) -> ReadResult<String> {
    tracing::trace!(operation, path = %path.display(), "reading data file");
    fs::read_to_string(path).map_err(|e| ReadError::io(operation, path, e))
}

/// Read a file's full contents as UTF-8 text on tokio's async file I/O.
#[cfg(feature = "async")]
pub async fn read_file(operation: &'static str, path: &Path) -> ReadResult<String> {
    tracing::trace!(operation, path = %path.display(), "reading data file");
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ReadError::io(operation, path, e))
}
