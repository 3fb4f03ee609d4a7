// Copyright (C) 2009 The Libphonenumber Authors
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

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use dashmap::DashMap;
use log::debug;

use super::{MetadataError, MetadataProvider, PhoneMetadata};
use crate::phonenumberutil::helper_constants::NANPA_COUNTRY_CODE;

/// Per-region metadata cache in front of a [`MetadataProvider`].
///
/// Each region is fetched from the provider at most once; misses are cached
/// as well. The calling code table is read from the provider when the store
/// is created and never changes afterwards.
pub struct MetadataStore {
    provider: Arc<dyn MetadataProvider>,

    /// A mapping from a country calling code to the region codes which denote
    /// the regions represented by that country calling code. The main country
    /// of every code comes first. Sorted by calling code for binary search.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,

    region_to_country_calling_code: HashMap<String, i32>,

    /// The set of regions that share country calling code 1.
    nanpa_regions: HashSet<String>,

    region_to_metadata_map: DashMap<String, Option<Arc<PhoneMetadata>>>,

    keep_example_numbers: bool,
}

impl MetadataStore {
    pub fn new(provider: Arc<dyn MetadataProvider>, keep_example_numbers: bool) -> Self {
        let mut country_calling_code_to_region_code_map = provider.country_code_to_region_codes();
        country_calling_code_to_region_code_map.sort_by_key(|(code, _)| *code);

        let mut region_to_country_calling_code = HashMap::new();
        let mut nanpa_regions = HashSet::new();
        for (code, regions) in &country_calling_code_to_region_code_map {
            for region in regions {
                region_to_country_calling_code.insert(region.clone(), *code);
                if *code == NANPA_COUNTRY_CODE {
                    nanpa_regions.insert(region.clone());
                }
            }
        }

        Self {
            provider,
            country_calling_code_to_region_code_map,
            region_to_country_calling_code,
            nanpa_regions,
            region_to_metadata_map: DashMap::new(),
            keep_example_numbers,
        }
    }

    /// Returns the metadata of `region_code`, fetching it on first use.
    ///
    /// Regions outside the calling code table are answered with `Ok(None)`
    /// without asking the provider.
    pub fn load(&self, region_code: &str) -> Result<Option<Arc<PhoneMetadata>>, MetadataError> {
        if !self.is_supported_region(region_code) {
            return Ok(None);
        }
        if let Some(metadata) = self.region_to_metadata_map.get(region_code) {
            return Ok(metadata.value().clone());
        }
        let entry = self
            .region_to_metadata_map
            .entry(region_code.to_owned())
            .or_try_insert_with(|| self.fetch(region_code))?;
        Ok(entry.value().clone())
    }

    fn fetch(&self, region_code: &str) -> Result<Option<Arc<PhoneMetadata>>, MetadataError> {
        let Some(mut metadata) = self.provider.load(region_code)? else {
            debug!("Provider has no metadata for region {region_code}");
            return Ok(None);
        };
        if !self.keep_example_numbers {
            metadata.strip_example_numbers();
        }
        debug!(
            "Loaded metadata for region {region_code} (calling code {})",
            metadata.country_code()
        );
        Ok(Some(Arc::new(metadata)))
    }

    /// Loads every supported region, reporting the first provider failure.
    pub fn preload(&self) -> Result<(), MetadataError> {
        for region_code in self.region_to_country_calling_code.keys() {
            self.load(region_code)?;
        }
        Ok(())
    }

    /// Drops every cached region; they are fetched again on next use.
    pub fn clear(&self) {
        self.region_to_metadata_map.clear();
    }

    /// Number of regions, found or not, the store has asked the provider for.
    pub fn cached_regions(&self) -> usize {
        self.region_to_metadata_map.len()
    }

    pub fn region_codes_for_calling_code(&self, country_calling_code: i32) -> Option<&[String]> {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .ok()
            .map(|index| self.country_calling_code_to_region_code_map[index].1.as_slice())
    }

    /// The main region of a calling code.
    pub fn region_code_for_calling_code(&self, country_calling_code: i32) -> Option<&str> {
        self.region_codes_for_calling_code(country_calling_code)
            .and_then(|regions| regions.first())
            .map(String::as_str)
    }

    /// Returns 0 for regions outside the calling code table.
    pub fn calling_code_for_region(&self, region_code: &str) -> i32 {
        self.region_to_country_calling_code
            .get(region_code)
            .copied()
            .unwrap_or_default()
    }

    pub fn has_calling_code(&self, country_calling_code: i32) -> bool {
        self.region_codes_for_calling_code(country_calling_code)
            .is_some()
    }

    pub fn is_supported_region(&self, region_code: &str) -> bool {
        self.region_to_country_calling_code.contains_key(region_code)
    }

    pub fn supported_regions(&self) -> impl Iterator<Item = &str> {
        self.region_to_country_calling_code.keys().map(String::as_str)
    }

    pub fn supported_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, _)| *code)
    }

    pub fn is_nanpa_region(&self, region_code: &str) -> bool {
        self.nanpa_regions.contains(region_code)
    }
}
