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


use std::{collections::HashMap, num::NonZeroUsize, sync::Arc};

use regex::Regex;

use crate::{
    phonenumberutil::{
        helper_constants::{
            DIGITS, PLUS_CHARS, SECOND_NUMBER_START, VALID_ALPHA, VALID_PUNCTUATION,
        },
        helper_functions::create_extn_pattern,
    },
    regexp_cache::RegexCache,
};

pub(super) struct PhoneNumberRegExpsAndMappings {
    /// Shared with the matcher, so that metadata patterns are compiled once
    /// whichever side asks for them first.
    pub regexp_cache: Arc<RegexCache>,

    /// Maps ASCII, full-width and Arabic-Indic digits to ASCII digits.
    pub digit_mappings: HashMap<char, char>,
    /// Letters of the phone keypad together with the digit mappings. Keys are
    /// upper-case, lookups upper-case the input first.
    pub alpha_phone_mappings: HashMap<char, char>,

    /// Map of country calling codes that use a mobile token before the area code.
    /// One example of when this is relevant is when determining the length of the
    /// national destination code, which should be the length of the area code plus
    /// the length of the mobile token.
    pub mobile_token_mappings: HashMap<i32, char>,

    /// Pattern that makes it easy to distinguish whether a region has a single
    /// international dialing prefix or not. If a region has a single international
    /// prefix (e.g. 011 in USA), it will be represented as a string that contains
    /// a sequence of ASCII digits, and possibly a tilde, which signals waiting for
    /// the tone. If there are multiple available international prefixes in a
    /// region, they will be represented as a regex string that always contains one
    /// or more characters that are not ASCII digits or a tilde.
    pub single_international_prefix: Regex,

    /// Any single digit of any supported script.
    pub capturing_digit_pattern: Regex,

    /// Runs of anything but ASCII digits, used to split formatted numbers
    /// into their digit groups.
    pub non_digits_pattern: Regex,

    /// Regular expression of acceptable characters that may start a phone number
    /// for the purposes of parsing. This allows us to strip away meaningless
    /// prefixes to phone numbers that may be mistakenly given to us. This consists
    /// of digits, the plus symbol and arabic-indic digits. This does not contain
    /// alpha characters, although they may be used later in the number. It also
    /// does not include other punctuation, as this will be stripped later during
    /// parsing and is of no information value when parsing a number.
    pub valid_start_char_pattern: Regex,

    /// Regular expression of characters typically used to start a second phone
    /// number.
    pub second_number_start_pattern: Regex,

    /// Regular expression of trailing characters that we want to remove. We remove
    /// all characters that are not alpha or numerical characters. The hash
    /// character is retained here, as it may signify the previous block was an
    /// extension.
    pub unwanted_end_char_pattern: Regex,

    /// Regexp of all known extension prefixes used by different regions followed
    /// by 1 or more valid digits, for use when parsing. Anchored at the end.
    pub extn_pattern: Regex,

    /// Regular expression of viable phone numbers. This is location independent.
    /// Checks we have at least three leading digits, and only valid punctuation,
    /// alpha characters and digits in the phone number. The symbol 'x' is allowed
    /// here as valid punctuation since it is often used as a placeholder for
    /// carrier codes, for example in Brazilian phone numbers. We also allow
    /// multiple plus-signs at the start.
    ///
    /// Corresponds to the following:
    /// `plus_sign*([punctuation]*[digits]){3,}([punctuation]|[digits]|[alpha])*`
    ///
    /// We append optionally the extension pattern to the end here, as a valid
    /// phone number may have an extension prefix appended, followed by 1 or more
    /// digits.
    pub valid_phone_number_pattern: Regex,

    /// We use this pattern to check if the phone number has at least three letters
    /// in it - if so, then we treat it as a number where some phone-number digits
    /// are represented by letters.
    pub valid_alpha_phone_pattern: Regex,

    pub first_group_capturing_pattern: Regex,

    pub carrier_code_pattern: Regex,

    pub plus_chars_pattern: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    fn initialize_regexp_mappings(&mut self) {
        self.mobile_token_mappings.insert(54, '9');

        let mut digit_mappings = HashMap::with_capacity(30);
        for (ascii, (full_width, arabic_indic)) in
            ('0'..='9').zip(('\u{FF10}'..='\u{FF19}').zip('\u{0660}'..='\u{0669}'))
        {
            digit_mappings.insert(ascii, ascii);
            digit_mappings.insert(full_width, ascii);
            digit_mappings.insert(arabic_indic, ascii);
        }
        self.digit_mappings = digit_mappings;

        // These mappings map a character (key) to a specific digit that should
        // replace it for normalization purposes.
        let mut alpha_mappings = HashMap::with_capacity(26);
        for (letters, digit) in [
            ("ABC", '2'),
            ("DEF", '3'),
            ("GHI", '4'),
            ("JKL", '5'),
            ("MNO", '6'),
            ("PQRS", '7'),
            ("TUV", '8'),
            ("WXYZ", '9'),
        ] {
            for letter in letters.chars() {
                alpha_mappings.insert(letter, digit);
            }
        }

        let mut combined_map = HashMap::with_capacity(60);
        combined_map.extend(alpha_mappings);
        combined_map.extend(self.digit_mappings.iter());
        self.alpha_phone_mappings = combined_map;
    }

    pub fn new(regex_cache_capacity: NonZeroUsize) -> Self {
        let extn_patterns_for_parsing = create_extn_pattern();
        // it'll be initialized only once per service, so we can use slow format!
        let valid_phone_number = format!(
            "[{}]*(?:[{}]*[{}]){{3,}}[{}{}{}]*",
            PLUS_CHARS,
            VALID_PUNCTUATION, DIGITS,
            // punctuation goes first: it opens with a literal '-'
            VALID_PUNCTUATION, VALID_ALPHA, DIGITS,
        );

        let mut instance = Self {
            regexp_cache: Arc::new(RegexCache::with_capacity(regex_cache_capacity)),
            digit_mappings: Default::default(),
            alpha_phone_mappings: Default::default(),
            mobile_token_mappings: Default::default(),
            single_international_prefix: Regex::new(
                "^(?:\\d+(?:[~\u{2053}\u{223C}\u{FF5E}]\\d+)?)$"
            ).unwrap(),
            capturing_digit_pattern: Regex::new(&format!("[{}]", DIGITS)).unwrap(),
            non_digits_pattern: Regex::new("\\D+").unwrap(),
            valid_start_char_pattern: Regex::new(&format!("[{}{}]", PLUS_CHARS, DIGITS)).unwrap(),
            second_number_start_pattern: Regex::new(SECOND_NUMBER_START).unwrap(),
            unwanted_end_char_pattern: Regex::new(
                &format!("[^{}{}#]+$", DIGITS, VALID_ALPHA)
            ).unwrap(),
            extn_pattern: Regex::new(&format!("(?i)(?:{})$", &extn_patterns_for_parsing)).unwrap(),
            valid_phone_number_pattern: Regex::new(&format!(
                "(?i)^(?:{})(?:{})?$",
                &valid_phone_number,
                &extn_patterns_for_parsing
            )).unwrap(),
            valid_alpha_phone_pattern: Regex::new("^(?:.*?[A-Za-z]){3}").unwrap(),
            first_group_capturing_pattern: Regex::new("\\$1").unwrap(),
            carrier_code_pattern: Regex::new("\\$CC").unwrap(),
            plus_chars_pattern: Regex::new(&format!("^[{}]+", PLUS_CHARS)).unwrap(),
        };
        instance.initialize_regexp_mappings();
        instance
    }
}

#[cfg(test)]
mod tests {
    use crate::regexp_cache::DEFAULT_REGEX_CACHE_CAPACITY;

    use super::PhoneNumberRegExpsAndMappings;

    #[test]
    fn check_regexps_are_compiling() {
        PhoneNumberRegExpsAndMappings::new(DEFAULT_REGEX_CACHE_CAPACITY);
    }

    #[test]
    fn extension_pattern_captures_digits() {
        let reg_exps = PhoneNumberRegExpsAndMappings::new(DEFAULT_REGEX_CACHE_CAPACITY);
        let captures = reg_exps.extn_pattern.captures("1234 ext. 5678").unwrap();
        assert_eq!("5678", &captures[1]);
        let captures = reg_exps.extn_pattern.captures("1234 - 503#").unwrap();
        assert_eq!("503", &captures[2]);
        assert!(reg_exps.extn_pattern.is_match("1234 EXTENSION 5"));
        assert!(!reg_exps.extn_pattern.is_match("1234 ext. 12345678"));
    }

    #[test]
    fn mappings_cover_every_script() {
        let reg_exps = PhoneNumberRegExpsAndMappings::new(DEFAULT_REGEX_CACHE_CAPACITY);
        assert_eq!(Some(&'5'), reg_exps.digit_mappings.get(&'\u{FF15}'));
        assert_eq!(Some(&'7'), reg_exps.digit_mappings.get(&'\u{0667}'));
        assert_eq!(Some(&'9'), reg_exps.alpha_phone_mappings.get(&'Z'));
        assert_eq!(None, reg_exps.alpha_phone_mappings.get(&'z'));
    }
}
