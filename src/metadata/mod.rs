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

mod errors;
mod phone_metadata;
mod proto_provider;
mod provider;
mod store;

use std::collections::{HashMap, VecDeque};

pub use errors::MetadataError;
pub use phone_metadata::{
    NOT_AVAILABLE, NumberFormat, PhoneMetadata, PhoneMetadataBuilder, PhoneNumberDesc,
};
pub use proto_provider::{ProtoMetadataProvider, encode_collection};
pub use provider::{InMemoryMetadataProvider, MetadataProvider};
pub use store::MetadataStore;

use crate::i18n::RegionCode;

/// Builds the calling code to region codes table from `(region, calling code,
/// main country for code)` entries.
///
/// The table is sorted by calling code. Within one code the main country
/// comes first and the other regions keep their declaration order.
pub(crate) fn build_country_code_to_region_codes<'a>(
    entries: impl IntoIterator<Item = (&'a str, i32, bool)>,
) -> Vec<(i32, Vec<String>)> {
    let mut country_calling_code_to_region_map = HashMap::<i32, VecDeque<String>>::new();
    for (region_code, country_calling_code, main_country_for_code) in entries {
        if RegionCode::is_unknown(region_code) {
            continue;
        }
        let region_codes = country_calling_code_to_region_map
            .entry(country_calling_code)
            .or_default();
        if main_country_for_code {
            region_codes.push_front(region_code.to_owned());
        } else {
            region_codes.push_back(region_code.to_owned());
        }
    }

    let mut table: Vec<(i32, Vec<String>)> = country_calling_code_to_region_map
        .into_iter()
        .map(|(code, regions)| (code, Vec::from(regions)))
        .collect();
    table.sort_by_key(|(code, _)| *code);
    table
}
