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

use std::collections::HashMap;

use super::{MetadataError, PhoneMetadata, build_country_code_to_region_codes};

/// Source of per-region numbering-plan data.
///
/// `load` may block on I/O. It is called at most once per region by
/// [`super::MetadataStore`], which caches both hits and misses.
pub trait MetadataProvider: Send + Sync {
    /// Calling code to region codes, sorted by calling code, with the main
    /// country of every code first in its list.
    fn country_code_to_region_codes(&self) -> Vec<(i32, Vec<String>)>;

    /// Returns `Ok(None)` when the provider has no data for `region_code`.
    fn load(&self, region_code: &str) -> Result<Option<PhoneMetadata>, MetadataError>;
}

/// Provider serving metadata that is already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetadataProvider {
    metadata: HashMap<String, PhoneMetadata>,
    country_code_to_region_codes: Vec<(i32, Vec<String>)>,
}

impl InMemoryMetadataProvider {
    pub fn new(metadata: impl IntoIterator<Item = PhoneMetadata>) -> Self {
        let metadata: Vec<PhoneMetadata> = metadata.into_iter().collect();
        let country_code_to_region_codes = build_country_code_to_region_codes(
            metadata
                .iter()
                .map(|m| (m.id(), m.country_code(), m.main_country_for_code())),
        );
        Self {
            metadata: metadata
                .into_iter()
                .map(|m| (m.id().to_owned(), m))
                .collect(),
            country_code_to_region_codes,
        }
    }
}

impl MetadataProvider for InMemoryMetadataProvider {
    fn country_code_to_region_codes(&self) -> Vec<(i32, Vec<String>)> {
        self.country_code_to_region_codes.clone()
    }

    fn load(&self, region_code: &str) -> Result<Option<PhoneMetadata>, MetadataError> {
        Ok(self.metadata.get(region_code).cloned())
    }
}
