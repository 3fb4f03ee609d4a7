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

use std::sync::Arc;

use crate::{
    interfaces,
    metadata::PhoneNumberDesc,
    regex_util::Anchor,
    regexp_cache::{InvalidRegexError, RegexCache},
};

pub struct RegexBasedMatcher {
    cache: Arc<RegexCache>,
}

impl RegexBasedMatcher {
    pub fn new(cache: Arc<RegexCache>) -> Self {
        Self { cache }
    }

    fn match_number(
        &self,
        phone_number: &str,
        number_pattern: Option<&str>,
        allow_prefix_match: bool,
    ) -> Result<bool, InvalidRegexError> {
        // We don't want to consider it a prefix match when matching non-empty input
        // against an empty pattern.
        let Some(number_pattern) = number_pattern.filter(|pattern| !pattern.is_empty()) else {
            return Ok(false);
        };
        let anchor = if allow_prefix_match {
            Anchor::Start
        } else {
            Anchor::Full
        };
        let regexp = self.cache.get_regex(&anchor.wrap(number_pattern))?;
        Ok(regexp.is_match(phone_number))
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_national_number(
        &self,
        number: &str,
        number_desc: &PhoneNumberDesc,
        allow_prefix_match: bool,
    ) -> Result<bool, InvalidRegexError> {
        self.match_number(number, number_desc.national_number_pattern(), allow_prefix_match)
    }

    fn match_possible_number(
        &self,
        number: &str,
        number_desc: &PhoneNumberDesc,
    ) -> Result<bool, InvalidRegexError> {
        self.match_number(number, number_desc.possible_number_pattern(), false)
    }
}
