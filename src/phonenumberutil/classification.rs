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


use log::{trace, warn};

use super::{
    PhoneNumberType,
    errors::{GetExampleNumberError, GetExampleNumberErrorInternal, ValidationError},
    helper_constants::{MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN},
    helper_functions::get_number_desc_by_type,
    phonenumberutil::{PhoneNumberUtil, Result},
};
use crate::{
    i18n,
    metadata::{PhoneMetadata, PhoneNumberDesc},
    phonenumber::PhoneNumber,
    regex_util::Anchor,
};

impl PhoneNumberUtil {
    /// Gets the type of a valid phone number.
    pub fn get_number_type(&self, phone_number: &PhoneNumber) -> PhoneNumberType {
        self.get_number_type_internal(phone_number)
            .unwrap_or_else(|err| err.escalate())
    }

    pub(super) fn get_number_type_internal(&self, phone_number: &PhoneNumber) -> Result<PhoneNumberType> {
        let Some(region_code) = self.get_region_code_for_number_internal(phone_number)? else {
            return Ok(PhoneNumberType::Unknown);
        };
        let Some(metadata) = self.load_metadata(region_code)? else {
            return Ok(PhoneNumberType::Unknown);
        };
        let national_significant_number = Self::get_national_significant_number(phone_number);
        self.get_number_type_helper(&national_significant_number, &metadata)
    }

    /// Returns the region where a phone number is from, `None` if no region
    /// matches its country calling code or, for calling codes shared by
    /// several regions, none of them claims the number.
    pub fn get_region_code_for_number(&self, phone_number: &PhoneNumber) -> Option<&str> {
        self.get_region_code_for_number_internal(phone_number)
            .unwrap_or_else(|err| err.escalate())
    }

    pub(super) fn get_region_code_for_number_internal(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<Option<&str>> {
        let country_calling_code = phone_number.country_code();
        let Some(region_codes) = self.metadata.region_codes_for_calling_code(country_calling_code)
        else {
            trace!("Missing/invalid country calling code ({})", country_calling_code);
            return Ok(None);
        };
        if let [region_code] = region_codes {
            return Ok(Some(region_code.as_str()));
        }
        self.get_region_code_for_number_from_region_list(phone_number, region_codes)
    }

    fn get_region_code_for_number_from_region_list<'b>(
        &self,
        phone_number: &PhoneNumber,
        region_codes: &'b [String],
    ) -> Result<Option<&'b str>> {
        let national_number = Self::get_national_significant_number(phone_number);
        for code in region_codes {
            let Some(metadata) = self.load_metadata(code)? else {
                trace!("No metadata for region {code} sharing calling code {}", phone_number.country_code());
                continue;
            };
            // If leading digits are present, use them. Otherwise, do full
            // validation.
            if let Some(leading_digits) = metadata.leading_digits() {
                if self
                    .reg_exps
                    .regexp_cache
                    .get_regex(&Anchor::Start.wrap(leading_digits))?
                    .is_match(&national_number)
                {
                    return Ok(Some(code));
                }
            } else if self.get_number_type_helper(&national_number, &metadata)? != PhoneNumberType::Unknown {
                return Ok(Some(code));
            }
        }
        trace!("No region with calling code {} claims '{national_number}'", phone_number.country_code());
        Ok(None)
    }

    pub(super) fn get_number_type_helper(
        &self,
        national_number: &str,
        metadata: &PhoneMetadata,
    ) -> Result<PhoneNumberType> {
        let general_desc = metadata.general_desc();
        if general_desc.national_number_pattern().is_none()
            || !self.is_number_matching_desc(national_number, general_desc)?
        {
            trace!("Number '{national_number}' type unknown - doesn't match general national number pattern");
            return Ok(PhoneNumberType::Unknown);
        }
        if self.is_number_matching_desc(national_number, metadata.premium_rate())? {
            trace!("Number '{national_number}' is a premium number.");
            return Ok(PhoneNumberType::PremiumRate);
        }
        if self.is_number_matching_desc(national_number, metadata.toll_free())? {
            trace!("Number '{national_number}' is a toll-free number.");
            return Ok(PhoneNumberType::TollFree);
        }
        if self.is_number_matching_desc(national_number, metadata.shared_cost())? {
            trace!("Number '{national_number}' is a shared cost number.");
            return Ok(PhoneNumberType::SharedCost);
        }
        if self.is_number_matching_desc(national_number, metadata.voip())? {
            trace!("Number '{national_number}' is a VOIP (Voice over IP) number.");
            return Ok(PhoneNumberType::VoIP);
        }
        if self.is_number_matching_desc(national_number, metadata.personal_number())? {
            trace!("Number '{national_number}' is a personal number.");
            return Ok(PhoneNumberType::PersonalNumber);
        }
        if self.is_number_matching_desc(national_number, metadata.pager())? {
            trace!("Number '{national_number}' is a pager number.");
            return Ok(PhoneNumberType::Pager);
        }

        let is_fixed_line = self.is_number_matching_desc(national_number, metadata.fixed_line())?;
        if is_fixed_line {
            if metadata.same_mobile_and_fixed_line_pattern() {
                trace!("Number '{national_number}': fixed-line and mobile patterns equal,\
                 number is fixed-line or mobile");
                return Ok(PhoneNumberType::FixedLineOrMobile);
            } else if self.is_number_matching_desc(national_number, metadata.mobile())? {
                trace!("Number '{national_number}': Fixed-line and mobile patterns differ, but number is \
                        still fixed-line or mobile"
                );
                return Ok(PhoneNumberType::FixedLineOrMobile);
            }
            trace!("Number '{national_number}' is a fixed line number.");
            return Ok(PhoneNumberType::FixedLine);
        }
        // Otherwise, test to see if the number is mobile. Only do this if certain
        // that the patterns for mobile and fixed line aren't the same.
        if !metadata.same_mobile_and_fixed_line_pattern()
            && self.is_number_matching_desc(national_number, metadata.mobile())?
        {
            trace!("Number '{national_number}' is a mobile number.");
            return Ok(PhoneNumberType::Mobile);
        }
        trace!("Number '{national_number}' type unknown - doesn't match any specific number type pattern.");
        Ok(PhoneNumberType::Unknown)
    }

    /// A number matches a descriptor when both its possible and its national
    /// number pattern match it entirely.
    fn is_number_matching_desc(
        &self,
        national_number: &str,
        number_desc: &PhoneNumberDesc,
    ) -> Result<bool> {
        Ok(self.matcher_api.match_possible_number(national_number, number_desc)?
            && self.matcher_api.match_national_number(national_number, number_desc, false)?)
    }

    /// Tests whether a phone number matches a valid pattern. Note this doesn't
    /// verify the number is actually in use, which is impossible to tell by
    /// just looking at a number itself.
    pub fn is_valid_number(&self, phone_number: &PhoneNumber) -> bool {
        let Some(region_code) = self.get_region_code_for_number(phone_number) else {
            return false;
        };
        self.is_valid_number_for_region(phone_number, region_code)
    }

    /// Tests whether a phone number is valid for a certain region. Note this
    /// doesn't verify the number is actually in use, which is impossible to
    /// tell by just looking at a number itself. If the country calling code is
    /// not the same as the country calling code for the region, this
    /// immediately exits with false. After this, the specific number pattern
    /// rules for the region are examined. This is useful for determining for
    /// example whether a particular number is valid for Canada, rather than
    /// just a valid NANPA number.
    pub fn is_valid_number_for_region(&self, phone_number: &PhoneNumber, region_code: &str) -> bool {
        self.is_valid_number_for_region_internal(phone_number, region_code)
            .unwrap_or_else(|err| err.escalate())
    }

    fn is_valid_number_for_region_internal(
        &self,
        phone_number: &PhoneNumber,
        region_code: &str,
    ) -> Result<bool> {
        if phone_number.country_code() != self.get_country_code_for_region(region_code) {
            return Ok(false);
        }
        let Some(metadata) = self.load_metadata(region_code)? else {
            return Ok(false);
        };
        let national_significant_number = Self::get_national_significant_number(phone_number);
        // For regions where we don't have metadata for the general descriptor,
        // we treat any number passed in as a valid number if its national
        // significant number is between the minimum and maximum lengths defined
        // by ITU for a national significant number.
        if metadata.general_desc().national_number_pattern().is_none() {
            let number_length = national_significant_number.len();
            return Ok((MIN_LENGTH_FOR_NSN..=MAX_LENGTH_FOR_NSN).contains(&number_length));
        }
        Ok(self.get_number_type_helper(&national_significant_number, &metadata)? != PhoneNumberType::Unknown)
    }

    /// Convenience wrapper around [`PhoneNumberUtil::is_possible_number_with_reason`].
    /// Instead of returning the reason for failure, this method returns a
    /// boolean value.
    pub fn is_possible_number(&self, phone_number: &PhoneNumber) -> bool {
        self.is_possible_number_with_reason(phone_number).is_ok()
    }

    /// Check whether a phone number is a possible number. It provides a more
    /// lenient check than [`PhoneNumberUtil::is_valid_number`] in the following
    /// sense:
    ///   1. It only checks the length of phone numbers. In particular, it
    ///      doesn't check starting digits of the number.
    ///   2. It doesn't attempt to figure out the type of the number, but uses
    ///      general rules which applies to all types of phone numbers in a
    ///      region. Therefore, it is much faster than `is_valid_number`.
    ///   3. For fixed line numbers, many regions have the concept of area code,
    ///      which together with subscriber number constitute the national
    ///      significant number. It is sometimes okay to dial the subscriber
    ///      number only when dialing in the same area. This function will return
    ///      true if the subscriber-number-only version is passed in.
    pub fn is_possible_number_with_reason(
        &self,
        phone_number: &PhoneNumber,
    ) -> std::result::Result<(), ValidationError> {
        self.is_possible_number_with_reason_internal(phone_number)
            .unwrap_or_else(|err| err.escalate())
    }

    fn is_possible_number_with_reason_internal(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<std::result::Result<(), ValidationError>> {
        // Note: For NANPA numbers, we just use the rules from the main region
        // (US) since get_region_code_for_number will not work if the number is
        // possible but not valid.
        let Some(metadata) = self.load_metadata_for_calling_code(phone_number.country_code())? else {
            return Ok(Err(ValidationError::InvalidCountryCode));
        };
        let national_number = Self::get_national_significant_number(phone_number);
        let general_desc = metadata.general_desc();

        // Handling case of numbers with no metadata.
        if general_desc.national_number_pattern().is_none() {
            let number_length = national_number.len();
            return Ok(if number_length < MIN_LENGTH_FOR_NSN {
                Err(ValidationError::TooShort)
            } else if number_length > MAX_LENGTH_FOR_NSN {
                Err(ValidationError::TooLong)
            } else {
                Ok(())
            });
        }

        let matched_length = match general_desc.possible_number_pattern() {
            Some(pattern) => self
                .reg_exps
                .regexp_cache
                .get_regex(&Anchor::Start.wrap(pattern))?
                .find(&national_number)
                .map(|found| found.len())
                .unwrap_or_default(),
            None => 0,
        };
        Ok(if matched_length == 0 {
            Err(ValidationError::TooShort)
        } else if matched_length == national_number.len() {
            Ok(())
        } else {
            Err(ValidationError::TooLong)
        })
    }

    /// Attempts to extract a valid number from a phone number that is too long
    /// to be valid. Returns the number itself when it is already valid, and
    /// `None` if no valid number could be extracted.
    pub fn truncate_too_long_number(&self, phone_number: &PhoneNumber) -> Option<PhoneNumber> {
        if self.is_valid_number(phone_number) {
            return Some(phone_number.clone());
        }
        let mut number_copy = phone_number.clone();
        let mut national_number = phone_number.national_number();
        loop {
            national_number /= 10;
            number_copy.set_national_number(national_number);
            if national_number == 0
                || self.is_possible_number_with_reason(&number_copy) == Err(ValidationError::TooShort)
            {
                return None;
            }
            if self.is_valid_number(&number_copy) {
                return Some(number_copy);
            }
        }
    }

    /// Gets a valid number for the specified region.
    pub fn get_example_number(&self, region_code: &str) -> std::result::Result<PhoneNumber, GetExampleNumberError> {
        self.get_example_number_for_type(region_code, PhoneNumberType::FixedLine)
    }

    /// Gets a valid number for the specified region and number type.
    pub fn get_example_number_for_type(
        &self,
        region_code: &str,
        number_type: PhoneNumberType,
    ) -> std::result::Result<PhoneNumber, GetExampleNumberError> {
        self.get_example_number_for_type_internal(region_code, number_type)
            .map_err(GetExampleNumberErrorInternal::into_public)
    }

    fn get_example_number_for_type_internal(
        &self,
        region_code: &str,
        number_type: PhoneNumberType,
    ) -> std::result::Result<PhoneNumber, GetExampleNumberErrorInternal> {
        // Check the region code is valid.
        if i18n::RegionCode::is_unknown(region_code) || !self.is_valid_region_code(region_code) {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            return Err(GetExampleNumberError::InvalidRegionCode.into());
        }
        let Some(metadata) = self.load_metadata(region_code)? else {
            return Err(GetExampleNumberError::InvalidRegionCode.into());
        };
        let desc = get_number_desc_by_type(&metadata, number_type);
        let Some(example_number) = desc.example_number() else {
            return Err(GetExampleNumberError::NoExampleNumber.into());
        };
        Ok(self.parse_helper(example_number, region_code, false, true)?)
    }
}
