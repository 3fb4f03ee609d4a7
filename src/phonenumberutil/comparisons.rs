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


use super::{
    MatchType,
    errors::ParseError,
    helper_functions::{copy_core_fields_only, is_national_number_suffix_of_the_other},
    phonenumberutil::PhoneNumberUtil,
};
use crate::{i18n::RegionCode, phonenumber::PhoneNumber};

impl PhoneNumberUtil {
    /// Takes two phone numbers and compares them for equality.
    ///
    /// Returns EXACT_MATCH if the country code, NSN, presence of a leading zero for
    /// Italian numbers and any extension present are the same. Returns NSN_MATCH if
    /// either or both has no country specified, and the NSNs and extensions are the
    /// same. Returns SHORT_NSN_MATCH if either or both has no country specified, or
    /// the country specified is the same, and one NSN could be a shorter version of
    /// the other number. This includes the case where one has an extension
    /// specified, and the other does not. Returns NO_MATCH otherwise. For example,
    /// the numbers +1 345 657 1234 and 657 1234 are a SHORT_NSN_MATCH. The numbers
    /// +1 345 657 1234 and 345 657 are a NO_MATCH.
    pub fn is_number_match(
        &self,
        first_number_in: &PhoneNumber,
        second_number_in: &PhoneNumber,
    ) -> MatchType {
        // Only the fields identifying a number take part, not those describing
        // how it was written.
        let mut first_number = copy_core_fields_only(first_number_in);
        let mut second_number = copy_core_fields_only(second_number_in);

        // Early exit if both had extensions and these are different.
        if let (Some(first_extension), Some(second_extension)) =
            (first_number.extension(), second_number.extension())
        {
            if first_extension != second_extension {
                return MatchType::NoMatch;
            }
        }

        let first_number_country_code = first_number.country_code();
        let second_number_country_code = second_number.country_code();
        // Both had country calling code specified.
        if first_number_country_code != 0 && second_number_country_code != 0 {
            if first_number == second_number {
                return MatchType::ExactMatch;
            } else if first_number_country_code == second_number_country_code
                && is_national_number_suffix_of_the_other(&first_number, &second_number)
            {
                // A SHORT_NSN_MATCH occurs if there is a difference because of the
                // presence or absence of an 'Italian leading zero', the presence or
                // absence of an extension, or one NSN being a shorter variant of the
                // other.
                return MatchType::ShortNsnMatch;
            }
            // This is not a match.
            return MatchType::NoMatch;
        }

        // Checks cases where one or both country calling codes were not
        // specified. To make equality checks easier, we first set the country
        // calling codes to be equal.
        first_number.set_country_code(0);
        second_number.set_country_code(0);
        // If all else was the same, then this is an NSN_MATCH.
        if first_number == second_number {
            return MatchType::NsnMatch;
        }
        if is_national_number_suffix_of_the_other(&first_number, &second_number) {
            return MatchType::ShortNsnMatch;
        }
        MatchType::NoMatch
    }

    /// Takes two phone numbers as strings and compares them for equality. The
    /// strings can contain formatting, and can have country code specified with
    /// + at the start. They are parsed without a default region.
    pub fn is_number_match_with_two_strings(
        &self,
        first_number: &str,
        second_number: &str,
    ) -> Result<MatchType, ParseError> {
        let first_number = self.parse_for_matching(first_number)?;
        let second_number = self.parse_for_matching(second_number)?;
        Ok(self.is_number_match(&first_number, &second_number))
    }

    /// Takes a phone number and a string and compares them for equality. The
    /// string is parsed without a default region.
    pub fn is_number_match_with_one_string(
        &self,
        first_number: &PhoneNumber,
        second_number: &str,
    ) -> Result<MatchType, ParseError> {
        let second_number = self.parse_for_matching(second_number)?;
        Ok(self.is_number_match(first_number, &second_number))
    }

    fn parse_for_matching(&self, number: &str) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(number, RegionCode::get_unknown(), false, false)
            .map_err(|err| err.into_public())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        PhoneNumber,
        phonenumberutil::MatchType,
        tests::{get_phone_util, region_code::RegionCode},
    };

    #[test]
    fn extensions_must_agree_when_both_present() {
        let util = get_phone_util();
        let first = PhoneNumber::new(1, 6502530000).with_extension("1234");
        let second = PhoneNumber::new(1, 6502530000).with_extension("4321");
        assert_eq!(MatchType::NoMatch, util.is_number_match(&first, &second));

        let without_extension = PhoneNumber::new(1, 6502530000);
        assert_eq!(
            MatchType::ShortNsnMatch,
            util.is_number_match(&first, &without_extension)
        );
    }

    #[test]
    fn empty_extension_is_ignored() {
        let util = get_phone_util();
        let first = PhoneNumber::new(64, 33316005).with_extension("");
        let second = PhoneNumber::new(64, 33316005);
        assert_eq!(MatchType::ExactMatch, util.is_number_match(&first, &second));
    }

    #[test]
    fn raw_input_does_not_affect_matching() {
        let util = get_phone_util();
        let parsed = util
            .parse_and_keep_raw_input("+64 3 331 6005", RegionCode::nz())
            .unwrap();
        let plain = PhoneNumber::new(64, 33316005);
        assert_eq!(MatchType::ExactMatch, util.is_number_match(&parsed, &plain));
    }
}
