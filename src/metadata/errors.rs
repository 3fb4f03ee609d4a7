// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Failure of a metadata source. A region without metadata is not an error:
/// providers report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Failed to read metadata for region {region_code}: {source}")]
    Io {
        region_code: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode metadata: {0}")]
    Decode(#[from] protobuf::Error),

    #[error("Metadata requested for region {requested} but the source holds {found}")]
    UnexpectedRegion { requested: String, found: String },
}
