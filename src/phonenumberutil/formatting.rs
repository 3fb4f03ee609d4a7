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

use log::{trace, warn};
use regex::NoExpand;

use super::{
    PhoneNumberFormat, PhoneNumberType,
    helper_constants::{
        DEFAULT_EXTN_PREFIX, FG_PLACEHOLDER, NANPA_COUNTRY_CODE, NP_PLACEHOLDER, PLUS_SIGN,
    },
    helper_functions::{prefix_number_with_country_calling_code, to_braced_group_references},
    phonenumberutil::{PhoneNumberUtil, Result},
};
use crate::{
    macros::owned_from_cow_or,
    metadata::{NumberFormat, PhoneMetadata},
    phonenumber::{CountryCodeSource, PhoneNumber},
    regex_util::Anchor,
};

impl PhoneNumberUtil {
    /// Formats a phone number in the specified format using default rules. Note
    /// that this does not promise to produce a phone number that the user can
    /// dial from where they are - although we do format in either NATIONAL or
    /// INTERNATIONAL format depending on what the client asks for, we do not
    /// currently support a more abbreviated format, such as for users in the
    /// same area who could potentially dial the number without area code.
    ///
    /// Numbers whose calling code is unknown are returned as their bare
    /// national significant number, except in E164.
    pub fn format(&self, phone_number: &PhoneNumber, number_format: PhoneNumberFormat) -> String {
        self.format_internal(phone_number, number_format)
            .unwrap_or_else(|err| err.escalate())
    }

    pub(super) fn format_internal(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
    ) -> Result<String> {
        let country_calling_code = phone_number.country_code();
        let mut formatted_number = Self::get_national_significant_number(phone_number);

        if number_format == PhoneNumberFormat::E164 {
            // Early exit for E164 case (even if the country calling code is invalid)
            // since no formatting of the national number needs to be applied.
            // Extensions are not formatted.
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::E164,
                &mut formatted_number,
            );
            return Ok(formatted_number);
        }

        // Regions sharing a calling code keep their formatting rules in the
        // main region, e.g. US for every NANPA region.
        let Some(metadata) = self.load_metadata_for_calling_code(country_calling_code)? else {
            trace!("Missing/invalid country calling code ({})", country_calling_code);
            return Ok(formatted_number);
        };

        formatted_number = owned_from_cow_or!(
            self.format_nsn_with_carrier(&formatted_number, &metadata, number_format, "")?,
            formatted_number
        );
        if let Some(formatted_extension) = Self::get_formatted_extension(phone_number, &metadata) {
            formatted_number.push_str(&formatted_extension);
        }
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        Ok(formatted_number)
    }

    fn format_nsn_with_carrier<'b>(
        &self,
        number: &'b str,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
        carrier_code: &str,
    ) -> Result<Cow<'b, str>> {
        // When the intl_number_formats exists, we use that to format national number
        // for the INTERNATIONAL format instead of using the number_formats.
        let available_formats = if number_format == PhoneNumberFormat::International
            && !metadata.intl_number_format().is_empty()
        {
            metadata.intl_number_format()
        } else {
            metadata.number_format()
        };
        match self.choose_formatting_pattern_for_number(available_formats, number)? {
            Some(formatting_pattern) => self.format_nsn_using_pattern_with_carrier(
                number,
                formatting_pattern,
                number_format,
                carrier_code,
            ),
            // No template fits, so the number is formatted as a whole.
            None => Ok(Cow::Borrowed(number)),
        }
    }

    fn choose_formatting_pattern_for_number<'b>(
        &self,
        available_formats: &'b [NumberFormat],
        national_number: &str,
    ) -> Result<Option<&'b NumberFormat>> {
        for format in available_formats {
            // We always use the last leading_digits_pattern, as it is the most
            // detailed.
            if let Some(leading_digits) = format.leading_digits_pattern().last() {
                let leading_digits_regex = self
                    .reg_exps
                    .regexp_cache
                    .get_regex(&Anchor::Start.wrap(leading_digits))?;
                if !leading_digits_regex.is_match(national_number) {
                    continue;
                }
            }
            let pattern_to_match = self
                .reg_exps
                .regexp_cache
                .get_regex(&Anchor::Full.wrap(format.pattern()))?;
            if pattern_to_match.is_match(national_number) {
                return Ok(Some(format));
            }
        }
        Ok(None)
    }

    // Note that carrier_code is optional - if an empty string, no carrier code
    // replacement will take place.
    fn format_nsn_using_pattern_with_carrier<'b>(
        &self,
        national_number: &'b str,
        formatting_pattern: &NumberFormat,
        number_format: PhoneNumberFormat,
        carrier_code: &str,
    ) -> Result<Cow<'b, str>> {
        let national_prefix_formatting_rule = formatting_pattern.national_prefix_formatting_rule();
        let carrier_code_formatting_rule =
            formatting_pattern.domestic_carrier_code_formatting_rule();

        let mut number_format_rule = Cow::Borrowed(formatting_pattern.format());
        if number_format == PhoneNumberFormat::National
            && !carrier_code.is_empty()
            && !carrier_code_formatting_rule.is_empty()
        {
            // Replace the $CC in the formatting rule with the desired carrier code,
            // then put the result in place of the first group.
            let carrier_code_formatting_rule = self
                .reg_exps
                .carrier_code_pattern
                .replace(carrier_code_formatting_rule, NoExpand(carrier_code));
            number_format_rule = Cow::Owned(
                self.reg_exps
                    .first_group_capturing_pattern
                    .replacen(&number_format_rule, 1, NoExpand(&carrier_code_formatting_rule))
                    .into_owned(),
            );
        }
        if number_format == PhoneNumberFormat::National
            && !national_prefix_formatting_rule.is_empty()
        {
            // The first group of the (possibly carrier-expanded) format gets the
            // national prefix formatting rule.
            number_format_rule = Cow::Owned(
                self.reg_exps
                    .first_group_capturing_pattern
                    .replacen(&number_format_rule, 1, NoExpand(national_prefix_formatting_rule))
                    .into_owned(),
            );
        }

        let pattern_to_match = self
            .reg_exps
            .regexp_cache
            .get_regex(&Anchor::Full.wrap(formatting_pattern.pattern()))?;
        let replacement = to_braced_group_references(&number_format_rule);
        Ok(pattern_to_match.replacen(national_number, 1, replacement.as_str()))
    }

    // Returns the formatted extension of a phone number, if the phone number had an
    // extension specified else None.
    fn get_formatted_extension(
        phone_number: &PhoneNumber,
        metadata: &PhoneMetadata,
    ) -> Option<String> {
        let extension = phone_number.extension().filter(|ext| !ext.is_empty())?;
        let prefix = metadata
            .preferred_extn_prefix()
            .unwrap_or(DEFAULT_EXTN_PREFIX);
        Some(fast_cat::concat_str!(prefix, extension))
    }

    /// Formats a phone number using client-defined formatting rules. The
    /// national prefix formatting rule of each format may use `$NP` for the
    /// national prefix of the region and `$FG` for the first group.
    pub fn format_by_pattern(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
        user_defined_formats: &[NumberFormat],
    ) -> String {
        self.format_by_pattern_internal(phone_number, number_format, user_defined_formats)
            .unwrap_or_else(|err| err.escalate())
    }

    fn format_by_pattern_internal(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
        user_defined_formats: &[NumberFormat],
    ) -> Result<String> {
        let country_calling_code = phone_number.country_code();
        let national_significant_number = Self::get_national_significant_number(phone_number);
        let Some(metadata) = self.load_metadata_for_calling_code(country_calling_code)? else {
            return Ok(national_significant_number);
        };

        let formatting_pattern = self.choose_formatting_pattern_for_number(
            user_defined_formats,
            &national_significant_number,
        )?;

        let mut formatted_number = if let Some(formatting_pattern) = formatting_pattern {
            // The placeholders are resolved on a copy so that the caller's
            // formats stay usable for numbers of other regions.
            let mut num_format_copy = formatting_pattern.clone();
            let national_prefix_formatting_rule =
                formatting_pattern.national_prefix_formatting_rule();
            if !national_prefix_formatting_rule.is_empty() {
                num_format_copy.national_prefix_formatting_rule = match metadata.national_prefix() {
                    Some(national_prefix) if !national_prefix.is_empty() => Some(
                        national_prefix_formatting_rule
                            .replace(NP_PLACEHOLDER, national_prefix)
                            .replace(FG_PLACEHOLDER, "$1"),
                    ),
                    // No rule for formatting a national prefix the region
                    // does not have.
                    _ => None,
                };
            }
            self.format_nsn_using_pattern_with_carrier(
                &national_significant_number,
                &num_format_copy,
                number_format,
                "",
            )?
            .into_owned()
        } else {
            national_significant_number
        };

        if let Some(extension) = Self::get_formatted_extension(phone_number, &metadata) {
            formatted_number.push_str(&extension);
        }
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        Ok(formatted_number)
    }

    /// Formats a phone number in national format for dialing using the carrier
    /// as specified in the `carrier_code`. The `carrier_code` will always be
    /// used regardless of whether the phone number already has a preferred
    /// domestic carrier code stored. If `carrier_code` contains an empty
    /// string, the number is formatted in the NATIONAL format.
    pub fn format_national_number_with_carrier_code(
        &self,
        phone_number: &PhoneNumber,
        carrier_code: &str,
    ) -> String {
        self.format_national_number_with_carrier_code_internal(phone_number, carrier_code)
            .unwrap_or_else(|err| err.escalate())
    }

    fn format_national_number_with_carrier_code_internal(
        &self,
        phone_number: &PhoneNumber,
        carrier_code: &str,
    ) -> Result<String> {
        let country_calling_code = phone_number.country_code();
        let national_significant_number = Self::get_national_significant_number(phone_number);
        let Some(metadata) = self.load_metadata_for_calling_code(country_calling_code)? else {
            return Ok(national_significant_number);
        };

        let mut formatted_number = owned_from_cow_or!(
            self.format_nsn_with_carrier(
                &national_significant_number,
                &metadata,
                PhoneNumberFormat::National,
                carrier_code,
            )?,
            national_significant_number
        );
        if let Some(formatted_extension) = Self::get_formatted_extension(phone_number, &metadata) {
            formatted_number.push_str(&formatted_extension);
        }
        Ok(formatted_number)
    }

    /// Formats a phone number for out-of-country dialing purposes.
    ///
    /// If no `region_calling_from` is supplied or it is unknown, the number is
    /// formatted in INTERNATIONAL. Numbers within the same calling code are
    /// formatted in NATIONAL, and NANPA numbers called from another NANPA
    /// region get a "1 " in front of the national format. Otherwise the
    /// international dialing prefix of `region_calling_from` is put in front
    /// of the calling code, e.g. "011 44 20 8765 4321" from US.
    pub fn format_out_of_country_calling_number(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: &str,
    ) -> String {
        self.format_out_of_country_calling_number_internal(phone_number, region_calling_from)
            .unwrap_or_else(|err| err.escalate())
    }

    fn format_out_of_country_calling_number_internal(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: &str,
    ) -> Result<String> {
        let Some(metadata_calling_from) = self.load_metadata(region_calling_from)? else {
            warn!(
                "Trying to format number from invalid region {}. International formatting applied.",
                region_calling_from
            );
            return self.format_internal(phone_number, PhoneNumberFormat::International);
        };
        let country_calling_code = phone_number.country_code();
        let national_significant_number = Self::get_national_significant_number(phone_number);
        let Some(metadata_for_region) = self.load_metadata_for_calling_code(country_calling_code)?
        else {
            return Ok(national_significant_number);
        };

        if country_calling_code == NANPA_COUNTRY_CODE {
            if self.is_nanpa_country(region_calling_from) {
                // For NANPA regions, return the national format for these regions
                // but prefix it with the country calling code.
                let national = self.format_internal(phone_number, PhoneNumberFormat::National)?;
                return Ok(fast_cat::concat_str!("1 ", &national));
            }
        } else if country_calling_code == metadata_calling_from.country_code() {
            // Regions sharing a calling code dial each other nationally.
            return self.format_internal(phone_number, PhoneNumberFormat::National);
        }

        // Regions with several international prefixes name the one to
        // format with as the preferred one.
        let international_prefix = metadata_calling_from.international_prefix().unwrap_or("");
        let international_prefix_for_formatting =
            if self.reg_exps.single_international_prefix.is_match(international_prefix) {
                Some(international_prefix)
            } else {
                metadata_calling_from.preferred_international_prefix()
            };

        let mut formatted_number = owned_from_cow_or!(
            self.format_nsn_with_carrier(
                &national_significant_number,
                &metadata_for_region,
                PhoneNumberFormat::International,
                "",
            )?,
            national_significant_number
        );
        if let Some(formatted_extension) =
            Self::get_formatted_extension(phone_number, &metadata_for_region)
        {
            formatted_number.push_str(&formatted_extension);
        }

        let Some(international_prefix_for_formatting) =
            international_prefix_for_formatting.filter(|prefix| !prefix.is_empty())
        else {
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::International,
                &mut formatted_number,
            );
            return Ok(formatted_number);
        };
        let mut buf = itoa::Buffer::new();
        Ok(fast_cat::concat_str!(
            international_prefix_for_formatting,
            " ",
            buf.format(country_calling_code),
            " ",
            &formatted_number
        ))
    }

    /// Formats a phone number using the way it was entered, as recorded in its
    /// country code source. Numbers parsed without keeping the raw input are
    /// formatted in NATIONAL.
    pub fn format_in_original_format(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: &str,
    ) -> String {
        self.format_in_original_format_internal(phone_number, region_calling_from)
            .unwrap_or_else(|err| err.escalate())
    }

    fn format_in_original_format_internal(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: &str,
    ) -> Result<String> {
        match phone_number.country_code_source() {
            Some(CountryCodeSource::FromPlusSign) => {
                self.format_internal(phone_number, PhoneNumberFormat::International)
            }
            Some(CountryCodeSource::FromIdd) => {
                self.format_out_of_country_calling_number_internal(phone_number, region_calling_from)
            }
            Some(CountryCodeSource::FromNumberWithoutPlus) => {
                let mut formatted_number =
                    self.format_internal(phone_number, PhoneNumberFormat::International)?;
                if formatted_number.starts_with(PLUS_SIGN) {
                    formatted_number.drain(..PLUS_SIGN.len());
                }
                Ok(formatted_number)
            }
            Some(CountryCodeSource::FromDefaultRegion) | None => {
                self.format_internal(phone_number, PhoneNumberFormat::National)
            }
        }
    }

    /// Gets the length of the geographical area code of a phone number. Only
    /// fixed-line numbers of regions that use a national prefix have one;
    /// 0 is returned for every other number.
    ///
    /// ```ignore
    /// // "650 253 0000" in US
    /// assert_eq!(3, util.get_length_of_geographical_area_code(&number));
    /// ```
    pub fn get_length_of_geographical_area_code(&self, phone_number: &PhoneNumber) -> usize {
        self.get_length_of_geographical_area_code_internal(phone_number)
            .unwrap_or_else(|err| err.escalate())
    }

    fn get_length_of_geographical_area_code_internal(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<usize> {
        let Some(region_code) = self.get_region_code_for_number_internal(phone_number)? else {
            return Ok(0);
        };
        let Some(metadata) = self.load_metadata(region_code)? else {
            return Ok(0);
        };
        // Regions without a national prefix, such as Italy, do not use area
        // codes for dialing within the country.
        if metadata.national_prefix().is_none() {
            return Ok(0);
        }

        let national_significant_number = Self::get_national_significant_number(phone_number);
        let number_type = self.get_number_type_helper(&national_significant_number, &metadata)?;
        if !matches!(
            number_type,
            PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile
        ) {
            return Ok(0);
        }
        self.get_length_of_national_destination_code_internal(phone_number)
    }

    /// Gets the length of the national destination code (NDC) of a phone
    /// number, taken from its INTERNATIONAL format. 0 when the number has no
    /// separate NDC group.
    pub fn get_length_of_national_destination_code(&self, phone_number: &PhoneNumber) -> usize {
        self.get_length_of_national_destination_code_internal(phone_number)
            .unwrap_or_else(|err| err.escalate())
    }

    fn get_length_of_national_destination_code_internal(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<usize> {
        let copied_number = if phone_number.has_extension() {
            // We don't want to draw attention to the extension in the groups.
            let mut copied_number = phone_number.clone();
            copied_number.clear_extension();
            Cow::Owned(copied_number)
        } else {
            Cow::Borrowed(phone_number)
        };
        let formatted_number =
            self.format_internal(&copied_number, PhoneNumberFormat::International)?;

        // The pattern will start with "+COUNTRY_CODE " so the first group will always
        // be the empty string (before the + symbol) and the second group will be the
        // country calling code. The third group will be area code if it is not the
        // last group.
        let number_groups: Vec<&str> = self
            .reg_exps
            .non_digits_pattern
            .split(&formatted_number)
            .collect();
        if number_groups.len() <= 3 {
            return Ok(0);
        }

        let country_calling_code = phone_number.country_code();
        if self.reg_exps.mobile_token_mappings.contains_key(&country_calling_code)
            && self.get_number_type_internal(phone_number)? == PhoneNumberType::Mobile
        {
            // The mobile token is a group of its own, and counts towards the
            // NDC together with the group after it.
            return Ok(number_groups[3].len() + 1);
        }
        Ok(number_groups[2].len())
    }
}
