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


use std::borrow::Cow;

use log::trace;
use regex::Regex;

use super::{
    errors::{NotANumberError, ParseError, ParseErrorInternal},
    helper_constants::{MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN, PLUS_SIGN},
    helper_functions::{is_leading_zero_country, to_braced_group_references},
    helper_types::{ExtractedCountryCode, PhoneNumberWithCountryCodeSource, StrippedExtension},
    phonenumberutil::PhoneNumberUtil,
};
use crate::{
    metadata::PhoneMetadata,
    phonenumber::{CountryCodeSource, PhoneNumber},
    regex_util::{Anchor, RegexConsume},
    regexp_cache::InvalidRegexError,
};

impl PhoneNumberUtil {
    /// Parses a string and returns it as a [`PhoneNumber`]. This method will
    /// return an error if the number is not considered to be a possible number.
    /// Note that validation of whether the number is actually a valid number for
    /// a particular region is not performed. This can be done separately with
    /// [`PhoneNumberUtil::is_valid_number`].
    ///
    /// `default_region` is only used if the number being parsed is not written
    /// in international format. If the number is guaranteed to start with a '+'
    /// followed by the country calling code, then "ZZ" can be supplied.
    pub fn parse(&self, number_to_parse: &str, default_region: &str) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, default_region, false, true)
            .map_err(ParseErrorInternal::into_public)
    }

    /// Same as [`PhoneNumberUtil::parse`], but the returned number also keeps
    /// the text it was parsed from and how its country calling code was
    /// written, which `format_in_original_format` relies on.
    pub fn parse_and_keep_raw_input(
        &self,
        number_to_parse: &str,
        default_region: &str,
    ) -> Result<PhoneNumber, ParseError> {
        if !self.is_valid_region_code(default_region) && !number_to_parse.starts_with(PLUS_SIGN) {
            return Err(ParseError::InvalidCountryCode);
        }
        self.parse_helper(number_to_parse, default_region, true, true)
            .map_err(ParseErrorInternal::into_public)
    }

    /// Checks whether a string could be a possible phone number of the given
    /// region. Returns `false` when it cannot be parsed at all.
    pub fn is_possible_number_string(&self, number: &str, region_from: &str) -> bool {
        match self.parse(number, region_from) {
            Ok(phone_number) => self.is_possible_number(&phone_number),
            Err(err) => {
                trace!("'{number}' is not a possible number: {err}");
                false
            }
        }
    }

    /// Checks to see that the region code used is valid, or if it is not valid,
    /// that the number to parse starts with a + symbol so that we can attempt to
    /// infer the region from the number.
    fn check_region_for_parsing(&self, number_to_parse: &str, default_region: &str) -> bool {
        self.is_valid_region_code(default_region)
            || self.reg_exps.plus_chars_pattern.is_match(number_to_parse)
    }

    pub(super) fn parse_helper(
        &self,
        number_to_parse: &str,
        default_region: &str,
        keep_raw_input: bool,
        check_region: bool,
    ) -> Result<PhoneNumber, ParseErrorInternal> {
        // Extract a possible number from the string passed in (this strips leading
        // characters that could not be the start of a phone number.)
        let national_number = self.extract_possible_number(number_to_parse);
        if !self.is_viable_phone_number(national_number) {
            trace!("The string supplied did not seem to be a phone number '{number_to_parse}'.");
            return Err(NotANumberError::NotMatchedValidNumberPattern.into());
        }

        if check_region && !self.check_region_for_parsing(national_number, default_region) {
            trace!("Missing or invalid default country '{default_region}'.");
            return Err(ParseError::InvalidCountryCode.into());
        }

        let mut phone_number = PhoneNumber::default();
        if keep_raw_input {
            phone_number.set_raw_input(number_to_parse.to_owned());
        }
        // Attempt to parse extension first, since it doesn't require
        // country-specific data and we want to have the non-normalised number here.
        let StrippedExtension { number: national_number, extension } =
            self.maybe_strip_extension(national_number);
        if let Some(extension) = extension {
            phone_number.set_extension(extension.to_owned());
        }

        let mut country_metadata = self.load_metadata(default_region)?;
        // Check to see if the number is given in international format so we know
        // whether this number is from the default region or not.
        let extracted = self.maybe_extract_country_code(national_number, country_metadata.as_deref())?;
        if keep_raw_input {
            phone_number.set_country_code_source(extracted.country_code_source);
        }

        let mut country_code = extracted.country_code;
        let mut normalized_national_number = extracted.national_number;
        if country_code != 0 {
            let phone_number_region = self.get_region_code_for_country_code(country_code);
            if phone_number_region != default_region {
                country_metadata = self.load_metadata(phone_number_region)?;
            }
        } else {
            // If no extracted country code, use the region supplied instead. The
            // national number is just the normalized version of the number we were
            // given to parse.
            normalized_national_number = self.normalize(national_number);
            if let Some(metadata) = &country_metadata {
                country_code = metadata.country_code();
            } else if keep_raw_input {
                phone_number.clear_country_code_source();
            }
        }
        phone_number.set_country_code(country_code);

        if normalized_national_number.len() < MIN_LENGTH_FOR_NSN {
            trace!("The string supplied is too short to be a phone number.");
            return Err(ParseError::TooShortNsn.into());
        }

        if let Some(metadata) = &country_metadata {
            if let Some(stripped) = self.maybe_strip_national_prefix(&normalized_national_number, metadata)? {
                normalized_national_number = stripped;
            }
        }

        let length_of_national_number = normalized_national_number.len();
        if length_of_national_number < MIN_LENGTH_FOR_NSN {
            trace!("The string supplied is too short to be a phone number.");
            return Err(ParseError::TooShortNsn.into());
        }
        if length_of_national_number > MAX_LENGTH_FOR_NSN {
            trace!("The string supplied is too long to be a phone number.");
            return Err(ParseError::TooLongNsn.into());
        }

        if normalized_national_number.starts_with('0') && is_leading_zero_country(country_code) {
            phone_number.set_italian_leading_zero(true);
        }
        let national_number = normalized_national_number
            .parse::<u64>()
            .map_err(NotANumberError::FailedToParseNumberAsInt)?;
        phone_number.set_national_number(national_number);
        Ok(phone_number)
    }

    /// Strips any extension (as in, the part of the number dialled after the
    /// call is connected, usually indicated with extn, ext, x or similar) from
    /// the end of the number.
    pub(super) fn maybe_strip_extension<'a>(&self, phone_number: &'a str) -> StrippedExtension<'a> {
        let not_found = StrippedExtension { number: phone_number, extension: None };
        let Some(captures) = self.reg_exps.extn_pattern.captures(phone_number) else {
            return not_found;
        };
        let Some(full_match) = captures.get(0) else {
            return not_found;
        };
        let number_before_extension = &phone_number[..full_match.start()];
        // If we find a potential extension, and the number preceding this is a
        // viable number, we assume it is an extension.
        if !self.is_viable_phone_number(number_before_extension) {
            return not_found;
        }
        // The numbers are captured into groups in the regular expression.
        captures
            .iter()
            .skip(1)
            .flatten()
            .find(|group| !group.as_str().is_empty())
            .map(|group| StrippedExtension {
                number: number_before_extension,
                extension: Some(group.as_str()),
            })
            .unwrap_or(not_found)
    }

    /// Strips the IDD from the start of the number if present. Returns what
    /// follows it, or `None` if the number does not start with the IDD.
    fn parse_prefix_as_idd<'a>(&self, idd_pattern: &Regex, phone_number: &'a str) -> Option<&'a str> {
        let idd = idd_pattern.find_start(phone_number)?;
        let rest = &phone_number[idd.end()..];
        // Only strip this if the first digit after the match is not a 0, since
        // country calling codes cannot begin with 0.
        if let Some(digit) = self.reg_exps.capturing_digit_pattern.find(rest) {
            if self.normalize_digits_only(digit.as_str()) == "0" {
                return None;
            }
        }
        Some(rest)
    }

    /// Strips any international prefix (such as +, 00, 011) present in the
    /// number provided, normalizes the resulting number, and indicates if an
    /// international prefix was present.
    pub(super) fn maybe_strip_international_prefix_and_normalize(
        &self,
        phone_number: &str,
        possible_idd_prefix: Option<&str>,
    ) -> Result<PhoneNumberWithCountryCodeSource, InvalidRegexError> {
        if phone_number.is_empty() {
            return Ok(PhoneNumberWithCountryCodeSource::new(
                String::new(),
                CountryCodeSource::FromDefaultRegion,
            ));
        }
        // Check to see if the number begins with one or more plus signs.
        if let Some(plus_signs) = self.reg_exps.plus_chars_pattern.find(phone_number) {
            // Can now normalize the rest of the number since we've consumed the "+"
            // sign at the start.
            return Ok(PhoneNumberWithCountryCodeSource::new(
                self.normalize(&phone_number[plus_signs.end()..]),
                CountryCodeSource::FromPlusSign,
            ));
        }

        let Some(possible_idd_prefix) = possible_idd_prefix else {
            return Ok(PhoneNumberWithCountryCodeSource::new(
                self.normalize(phone_number),
                CountryCodeSource::FromDefaultRegion,
            ));
        };
        // Attempt to parse the first digits as an international prefix.
        let idd_pattern = self
            .reg_exps
            .regexp_cache
            .get_regex(&Anchor::Start.wrap(possible_idd_prefix))?;
        if let Some(rest) = self.parse_prefix_as_idd(&idd_pattern, phone_number) {
            return Ok(PhoneNumberWithCountryCodeSource::new(
                self.normalize(rest),
                CountryCodeSource::FromIdd,
            ));
        }

        // If still not found, then try and normalize the number and then try
        // again. This shouldn't be done before, since non-numeric characters (+
        // and ~) may legally be in the international prefix.
        let normalized_number = self.normalize(phone_number);
        let result = match self.parse_prefix_as_idd(&idd_pattern, &normalized_number) {
            Some(rest) => {
                PhoneNumberWithCountryCodeSource::new(rest.to_owned(), CountryCodeSource::FromIdd)
            }
            None => PhoneNumberWithCountryCodeSource::new(
                normalized_number,
                CountryCodeSource::FromDefaultRegion,
            ),
        };
        Ok(result)
    }

    /// Extracts a country calling code from the start of a number whose plus
    /// sign or IDD has already been removed. Returns the code and the rest of
    /// the number, or `None` if it doesn't start with a known code.
    pub(super) fn extract_country_code<'a>(&self, full_number: &'a str) -> Option<(i32, &'a str)> {
        if full_number.is_empty() || full_number.starts_with('0') {
            // Country codes do not begin with a '0'.
            return None;
        }
        for i in 1..=MAX_LENGTH_COUNTRY_CODE.min(full_number.len()) {
            let Some(prefix) = full_number.get(..i) else {
                break;
            };
            let Ok(potential_country_code) = prefix.parse::<i32>() else {
                break;
            };
            if self.has_valid_country_calling_code(potential_country_code) {
                return Some((potential_country_code, &full_number[i..]));
            }
        }
        None
    }

    /// Tries to extract a country calling code from a number. Country calling
    /// codes are extracted in the following ways:
    ///   - by stripping the international dialing prefix of the region the person
    ///     is dialing from, if this is present in the number, and looking at the
    ///     next digits
    ///   - by stripping the '+' sign if present and then looking at the next
    ///     digits
    ///   - by comparing the start of the number and the country calling code of
    ///     the default region. If the number is not considered possible for the
    ///     numbering plan of the default region initially, but starts with the
    ///     country calling code of this region, validation will be reattempted
    ///     after stripping this country calling code. If this number is considered
    ///     a possible number, then the first digits will be considered the country
    ///     calling code and removed as such.
    ///
    /// Returns an error if the number starts with a '+' (or an IDD) but the
    /// country calling code supplied after this does not match that of any
    /// known region.
    pub(super) fn maybe_extract_country_code(
        &self,
        phone_number: &str,
        default_region_metadata: Option<&PhoneMetadata>,
    ) -> Result<ExtractedCountryCode, ParseErrorInternal> {
        let possible_country_idd_prefix =
            default_region_metadata.and_then(PhoneMetadata::international_prefix);
        let PhoneNumberWithCountryCodeSource { phone_number: full_number, country_code_source } =
            self.maybe_strip_international_prefix_and_normalize(phone_number, possible_country_idd_prefix)?;

        if country_code_source != CountryCodeSource::FromDefaultRegion {
            if full_number.len() < MIN_LENGTH_FOR_NSN {
                trace!("Phone number had an IDD, but after this was not long enough to be a viable phone number.");
                return Err(ParseError::TooShortAfterIdd.into());
            }
            let Some((country_code, national_number)) = self.extract_country_code(&full_number) else {
                // If this fails, they must be using a strange country calling code
                // that we don't recognize, or that doesn't exist.
                trace!("Country calling code supplied was not recognised.");
                return Err(ParseError::InvalidCountryCode.into());
            };
            return Ok(ExtractedCountryCode {
                country_code,
                national_number: national_number.to_owned(),
                country_code_source,
            });
        }

        if let Some(metadata) = default_region_metadata {
            if let Some(extracted) = self.strip_default_country_code(&full_number, metadata)? {
                return Ok(extracted);
            }
        }
        // No country calling code present.
        Ok(ExtractedCountryCode {
            country_code: 0,
            national_number: String::new(),
            country_code_source,
        })
    }

    /// Checks whether a number written without any international prefix
    /// starts with the calling code of the default region, and strips it when
    /// the remainder is a better fit for the region's numbering plan.
    fn strip_default_country_code(
        &self,
        full_number: &str,
        metadata: &PhoneMetadata,
    ) -> Result<Option<ExtractedCountryCode>, InvalidRegexError> {
        // Check to see if the number is valid for the default region already. If
        // not, we check to see if the country calling code for the default region
        // is present at the start of the number.
        let general_desc = metadata.general_desc();
        if self.matcher_api.match_national_number(full_number, general_desc, false)? {
            return Ok(None);
        }
        let mut buf = itoa::Buffer::new();
        let default_country_code_string = buf.format(metadata.country_code());
        let Some(potential_national_number) = full_number.strip_prefix(default_country_code_string) else {
            return Ok(None);
        };
        // If so, strip this, and see if the resultant number is valid.
        let potential_national_number = match self.maybe_strip_national_prefix(potential_national_number, metadata)? {
            Some(stripped) => Cow::Owned(stripped),
            None => Cow::Borrowed(potential_national_number),
        };

        let possible_number_matched_length = match general_desc.possible_number_pattern() {
            Some(pattern) => self
                .reg_exps
                .regexp_cache
                .get_regex(&Anchor::Start.wrap(pattern))?
                .find(&potential_national_number)
                .map(|found| found.len())
                .unwrap_or_default(),
            None => 0,
        };
        // If the resultant number is either valid, or still too long even with
        // the country calling code stripped, we consider this a better result and
        // keep the potential national number.
        if self.matcher_api.match_national_number(&potential_national_number, general_desc, false)?
            || (possible_number_matched_length > 0
                && possible_number_matched_length != potential_national_number.len())
        {
            return Ok(Some(ExtractedCountryCode {
                country_code: metadata.country_code(),
                national_number: potential_national_number.into_owned(),
                country_code_source: CountryCodeSource::FromNumberWithoutPlus,
            }));
        }
        Ok(None)
    }

    /// Strips any national prefix (such as 0, 1) present in the number
    /// provided. Returns the transformed number, or `None` if there was no
    /// prefix or the number without it would not be a valid number of the
    /// region.
    pub(super) fn maybe_strip_national_prefix(
        &self,
        phone_number: &str,
        metadata: &PhoneMetadata,
    ) -> Result<Option<String>, InvalidRegexError> {
        let Some(possible_national_prefix) = metadata
            .national_prefix_for_parsing()
            .filter(|prefix| !prefix.is_empty())
        else {
            return Ok(None);
        };
        if phone_number.is_empty() {
            return Ok(None);
        }
        // Attempt to parse the first digits as a national prefix.
        let prefix_pattern = self
            .reg_exps
            .regexp_cache
            .get_regex(&Anchor::Start.wrap(possible_national_prefix))?;
        let Some(captures) = prefix_pattern.captures(phone_number) else {
            return Ok(None);
        };
        let first_group_is_empty = captures.get(1).is_none_or(|group| group.is_empty());

        let transformed_number = match metadata.national_prefix_transform_rule() {
            // If nothing was captured by the capturing groups in the prefix
            // pattern, no transformation is necessary, and we just remove the
            // national prefix.
            Some(transform_rule) if !transform_rule.is_empty() && !first_group_is_empty => {
                let transform_rule = to_braced_group_references(transform_rule);
                prefix_pattern
                    .replacen(phone_number, 1, transform_rule.as_str())
                    .into_owned()
            }
            _ => {
                let prefix_len = captures.get(0).map(|m| m.end()).unwrap_or_default();
                phone_number[prefix_len..].to_owned()
            }
        };

        // Check that the resultant number is viable. If not, return.
        if !self
            .matcher_api
            .match_national_number(&transformed_number, metadata.general_desc(), false)?
        {
            return Ok(None);
        }
        Ok(Some(transformed_number))
    }
}
