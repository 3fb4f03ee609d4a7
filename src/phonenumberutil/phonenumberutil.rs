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


use std::{collections::HashSet, num::NonZeroUsize, sync::Arc};

use log::{trace, warn};

use super::{
    PhoneNumberType,
    errors::InternalLogicError,
    helper_constants::MIN_LENGTH_FOR_NSN,
    helper_functions::{self, get_supported_types_for_metadata, normalize_helper},
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
};
use crate::{
    i18n,
    interfaces::MatcherApi,
    metadata::{MetadataError, MetadataProvider, MetadataStore, PhoneMetadata},
    phonenumber::PhoneNumber,
    regex_based_matcher::RegexBasedMatcher,
    regexp_cache::{DEFAULT_REGEX_CACHE_CAPACITY, RegexCache},
};

// Helper type for Result
pub(super) type Result<T> = std::result::Result<T, InternalLogicError>;

/// Tunables of a [`PhoneNumberUtil`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneNumberUtilOptions {
    /// How many compiled metadata patterns are kept before the least
    /// recently used one is evicted.
    pub regex_cache_capacity: NonZeroUsize,
    /// Keep the example numbers of loaded metadata. Without them
    /// `get_example_number*` always fails with `NoExampleNumber`.
    pub keep_example_numbers: bool,
}

impl Default for PhoneNumberUtilOptions {
    fn default() -> Self {
        Self {
            regex_cache_capacity: DEFAULT_REGEX_CACHE_CAPACITY,
            keep_example_numbers: true,
        }
    }
}

/// Parsing, formatting and validation of phone numbers.
///
/// All state (the metadata of every region seen so far and the compiled
/// patterns) lives in the instance, and every method takes `&self`, so one
/// instance can be shared between threads behind an [`Arc`].
pub struct PhoneNumberUtil {
    /// An API for validation checking.
    pub(super) matcher_api: Box<dyn MatcherApi>,

    /// Helper class holding useful regular expressions and character mappings.
    pub(super) reg_exps: PhoneNumberRegExpsAndMappings,

    /// Region metadata, loaded on first use.
    pub(super) metadata: MetadataStore,
}

impl PhoneNumberUtil {
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self::with_options(provider, PhoneNumberUtilOptions::default())
    }

    pub fn with_options(provider: Arc<dyn MetadataProvider>, options: PhoneNumberUtilOptions) -> Self {
        let reg_exps = PhoneNumberRegExpsAndMappings::new(options.regex_cache_capacity);
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new(reg_exps.regexp_cache.clone())),
            reg_exps,
            metadata: MetadataStore::new(provider, options.keep_example_numbers),
        }
    }

    /// The metadata cache, for preloading or resetting it.
    pub fn metadata_store(&self) -> &MetadataStore {
        &self.metadata
    }

    /// The compiled pattern cache shared by every operation.
    pub fn regex_cache(&self) -> &RegexCache {
        &self.reg_exps.regexp_cache
    }

    pub fn get_supported_regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = self.metadata.supported_regions().collect();
        regions.sort_unstable();
        regions
    }

    pub fn get_supported_calling_codes(&self) -> HashSet<i32> {
        self.metadata.supported_calling_codes().collect()
    }

    pub fn get_supported_types_for_region(
        &self,
        region_code: &str,
    ) -> Option<HashSet<PhoneNumberType>> {
        let Some(metadata) = self.get_metadata_for_region(region_code) else {
            warn!("Invalid or unknown region code provided: {}", region_code);
            return None;
        };
        let mut types = HashSet::new();
        get_supported_types_for_metadata(&metadata, &mut types);
        Some(types)
    }

    /// Returns the metadata of a region, `None` for unknown regions.
    pub fn get_metadata_for_region(&self, region_code: &str) -> Option<Arc<PhoneMetadata>> {
        self.metadata
            .load(region_code)
            .unwrap_or_else(|err| InternalLogicError::from(err).escalate())
    }

    pub(super) fn load_metadata(
        &self,
        region_code: &str,
    ) -> std::result::Result<Option<Arc<PhoneMetadata>>, MetadataError> {
        self.metadata.load(region_code)
    }

    /// Metadata of the main region of a calling code.
    pub(super) fn load_metadata_for_calling_code(
        &self,
        country_calling_code: i32,
    ) -> std::result::Result<Option<Arc<PhoneMetadata>>, MetadataError> {
        match self.metadata.region_code_for_calling_code(country_calling_code) {
            Some(region_code) => self.metadata.load(region_code),
            None => Ok(None),
        }
    }

    pub(super) fn is_valid_region_code(&self, region_code: &str) -> bool {
        self.metadata.is_supported_region(region_code)
    }

    pub(super) fn has_valid_country_calling_code(&self, country_calling_code: i32) -> bool {
        self.metadata.has_calling_code(country_calling_code)
    }

    /// Returns the region code that matches the specific country calling code. In
    /// the case of no region code being found, the unknown region code will be
    /// returned.
    pub fn get_region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        self.metadata
            .region_code_for_calling_code(country_calling_code)
            .unwrap_or_else(|| {
                trace!("Missing/invalid country calling code ({})", country_calling_code);
                i18n::RegionCode::get_unknown()
            })
    }

    /// Returns the region codes that matches the specific country calling code,
    /// main region first. Empty if the code is unknown.
    pub fn get_region_codes_for_country_calling_code(&self, country_calling_code: i32) -> Vec<&str> {
        self.metadata
            .region_codes_for_calling_code(country_calling_code)
            .map(|regions| regions.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns the country calling code of a region, 0 if the region is
    /// unknown.
    pub fn get_country_code_for_region(&self, region_code: &str) -> i32 {
        if !self.is_valid_region_code(region_code) {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            return 0;
        }
        self.metadata.calling_code_for_region(region_code)
    }

    /// Returns the national dialling prefix of a region, e.g. "0" for GB.
    /// With `strip_non_digits` the "wait for dial tone" marker `~` is removed.
    pub fn get_ndd_prefix_for_region(
        &self,
        region_code: &str,
        strip_non_digits: bool,
    ) -> Option<String> {
        let Some(metadata) = self.get_metadata_for_region(region_code) else {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            return None;
        };
        let prefix = metadata.national_prefix()?;
        Some(if strip_non_digits {
            prefix.replace('~', "")
        } else {
            prefix.to_owned()
        })
    }

    /// Whether the region is one of the North American Numbering Plan
    /// Administration regions sharing calling code 1.
    pub fn is_nanpa_country(&self, region_code: &str) -> bool {
        self.metadata.is_nanpa_region(region_code)
    }

    /// Whether national significant numbers of this calling code may start
    /// with a zero that has to be kept.
    pub fn is_leading_zero_country(country_calling_code: i32) -> bool {
        helper_functions::is_leading_zero_country(country_calling_code)
    }

    /// Gets the national significant number of a phone number. Note a national
    /// significant number doesn't contain a national prefix or any formatting.
    pub fn get_national_significant_number(phone_number: &PhoneNumber) -> String {
        let mut buf = itoa::Buffer::new();
        let national_number = buf.format(phone_number.national_number());

        // If an italian leading zero has been set, we prefix this now. Note this
        // is not a national prefix.
        if phone_number.italian_leading_zero()
            && Self::is_leading_zero_country(phone_number.country_code())
        {
            fast_cat::concat_str!("0", national_number)
        } else {
            national_number.to_owned()
        }
    }

    /// Attempts to extract a possible number from the string passed in. This
    /// currently strips all leading characters that cannot be used to start a
    /// phone number. Characters that can be used to start a phone number are
    /// defined in the valid_start_char_pattern. If none of these characters are
    /// found in the number passed in, an empty string is returned. This function
    /// also attempts to strip off any alternative extensions or endings if two or
    /// more are present, such as in the case of: (530) 583-6985 x302/x2303. The
    /// second extension here makes this actually two phone numbers, (530) 583-6985
    /// x302 and (530) 583-6985 x2303. We remove the second extension so that the
    /// first number is parsed correctly.
    pub fn extract_possible_number<'a>(&self, phone_number: &'a str) -> &'a str {
        let Some(start) = self.reg_exps.valid_start_char_pattern.find(phone_number) else {
            return "";
        };
        let mut number = &phone_number[start.start()..];
        // Remove trailing non-alpha non-numerical characters.
        if let Some(unwanted_end) = self.reg_exps.unwanted_end_char_pattern.find(number) {
            number = &number[..unwanted_end.start()];
        }
        // Check for extra numbers at the end.
        if let Some(second_number) = self.reg_exps.second_number_start_pattern.find(number) {
            number = &number[..second_number.start()];
        }
        number
    }

    /// Checks to see if the string of characters could possibly be a phone
    /// number at all. At the moment, checks to see that the string begins with
    /// at least 3 digits, ignoring any punctuation commonly found in phone
    /// numbers. This method does not require the number to be normalized in
    /// advance - but does assume that leading non-number symbols have been
    /// removed, such as by the method `extract_possible_number`.
    pub fn is_viable_phone_number(&self, number: &str) -> bool {
        if number.chars().count() < MIN_LENGTH_FOR_NSN {
            return false;
        }
        self.reg_exps.valid_phone_number_pattern.is_match(number)
    }

    /// Normalizes a string of characters representing a phone number. This
    /// performs the following conversions:
    ///   - Punctuation is stripped.
    ///   For ALPHA/VANITY numbers:
    ///   - Letters are converted to their numeric representation on a telephone
    ///     keypad. The keypad used here is the one defined in ITU Recommendation
    ///     E.161. This is only done if there are 3 or more letters in the number, to
    ///     lessen the risk that such letters are typos.
    ///   For other numbers:
    ///   - Wide-ascii digits are converted to normal ASCII (European) digits.
    ///   - Arabic-Indic numerals are converted to European numerals.
    ///   - Spurious alpha characters are stripped.
    pub fn normalize(&self, phone_number: &str) -> String {
        if self.reg_exps.valid_alpha_phone_pattern.is_match(phone_number) {
            normalize_helper(&self.reg_exps.alpha_phone_mappings, true, phone_number)
        } else {
            self.normalize_digits_only(phone_number)
        }
    }

    /// Normalizes a string of characters representing a phone number. This
    /// converts wide-ascii and arabic-indic numerals to European numerals, and
    /// strips punctuation and alpha characters.
    pub fn normalize_digits_only(&self, phone_number: &str) -> String {
        normalize_helper(&self.reg_exps.digit_mappings, true, phone_number)
    }

    /// Converts all alpha characters in a number to their respective digits on
    /// a keypad, but retains existing formatting.
    pub fn convert_alpha_characters_in_number(&self, phone_number: &str) -> String {
        normalize_helper(&self.reg_exps.alpha_phone_mappings, false, phone_number)
    }
}
