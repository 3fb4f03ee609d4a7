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

use std::collections::{HashMap, HashSet};

use strum::IntoEnumIterator;

use super::{
    PhoneNumberFormat, PhoneNumberType,
    helper_constants::{
        DIGITS, EXT_LIMIT_AFTER_LABEL, EXT_LIMIT_WITH_HASH_SUFFIX, LEADING_ZERO_COUNTRIES,
        OPTIONAL_EXT_SUFFIX, PLUS_SIGN, POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
    },
};
use crate::{
    metadata::{PhoneMetadata, PhoneNumberDesc},
    phonenumber::PhoneNumber,
};

/// Returns a pointer to the description inside the metadata of the appropriate
/// type.
pub(super) fn get_number_desc_by_type(
    metadata: &PhoneMetadata,
    phone_number_type: PhoneNumberType,
) -> &PhoneNumberDesc {
    match phone_number_type {
        PhoneNumberType::PremiumRate => metadata.premium_rate(),
        PhoneNumberType::TollFree => metadata.toll_free(),
        PhoneNumberType::Mobile => metadata.mobile(),
        PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile => metadata.fixed_line(),
        PhoneNumberType::SharedCost => metadata.shared_cost(),
        PhoneNumberType::VoIP => metadata.voip(),
        PhoneNumberType::PersonalNumber => metadata.personal_number(),
        PhoneNumberType::Pager => metadata.pager(),
        // Instead of the default case, we only match `Unknown`
        PhoneNumberType::Unknown => metadata.general_desc(),
    }
}

/// A helper function that is used by Format and FormatByPattern.
pub(super) fn prefix_number_with_country_calling_code(
    country_calling_code: i32,
    number_format: PhoneNumberFormat,
    formatted_number: &mut String,
) {
    let mut buf = itoa::Buffer::new();
    let country_calling_code_str = buf.format(country_calling_code);

    // we anyway allocate a new string in concatenation, so we'l do it once
    // with capacity of resulting string
    match number_format {
        PhoneNumberFormat::E164 => {
            *formatted_number =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, &formatted_number);
        }
        PhoneNumberFormat::International => {
            *formatted_number =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, " ", &formatted_number);
        }
        PhoneNumberFormat::National => {}
    }
}

/// Returns true when one national number is the suffix of the other or both are
/// the same.
pub(super) fn is_national_number_suffix_of_the_other(
    first_number: &PhoneNumber,
    second_number: &PhoneNumber,
) -> bool {
    let mut buf = itoa::Buffer::new();
    let first_number_national_number = buf.format(first_number.national_number());
    let mut buf = itoa::Buffer::new();
    let second_number_national_number = buf.format(second_number.national_number());
    first_number_national_number.ends_with(second_number_national_number)
        || second_number_national_number.ends_with(first_number_national_number)
}

/// Helper method for constructing regular expressions for parsing. Creates an
/// expression that captures up to max_length digits.
pub(super) fn extn_digits(max_length: u32) -> String {
    let mut buf = itoa::Buffer::new();
    fast_cat::concat_str!("([", DIGITS, "]{1,", buf.format(max_length), "})")
}

/// Creates the pattern matching every known way of writing an extension.
///
/// The only capturing groups are the ones around the extension digits: the
/// first alternative captures into group 1, the hash-suffixed one into
/// group 2.
pub(super) fn create_extn_pattern() -> String {
    // Two spellings of the accented o are allowed: the character itself and the
    // decomposed form with a combining acute accent.
    let ext_labels = "(?:ext(?:ensi(?:o\u{0301}?|\u{00F3}))?n?|\
        \u{FF45}\u{FF58}\u{FF54}\u{FF4E}?|\
        [,x\u{FF58}#\u{FF03}~\u{FF5E}]|int|anexo|\u{FF49}\u{FF4E}\u{FF54})";

    let labelled_extn = fast_cat::concat_str!(
        POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
        ext_labels,
        OPTIONAL_EXT_SUFFIX,
        &extn_digits(EXT_LIMIT_AFTER_LABEL),
        "#?"
    );
    // American style, e.g. "- 503#".
    let hash_suffixed_extn =
        fast_cat::concat_str!("[- ]+", &extn_digits(EXT_LIMIT_WITH_HASH_SUFFIX), "#");

    fast_cat::concat_str!(&labelled_extn, "|", &hash_suffixed_extn)
}

/// Normalizes a string of characters representing a phone number by replacing
/// all characters found in the accompanying map with the values therein, and
/// stripping all other characters if remove_non_matches is true.
///
/// Parameters:
/// * `normalization_replacements` - a mapping of characters to what they should be
///   replaced by in the normalized version of the phone number. Keys are
///   looked up in their ASCII upper case form.
/// * `remove_non_matches` - indicates whether characters that are not able to be
///   replaced should be stripped from the number. If this is false, they will be
///   left unchanged in the number.
/// * `phone_number` - the text to normalize.
pub(super) fn normalize_helper(
    normalization_replacements: &HashMap<char, char>,
    remove_non_matches: bool,
    phone_number: &str,
) -> String {
    let mut normalized_number = String::with_capacity(phone_number.len());
    for phone_char in phone_number.chars() {
        if let Some(replacement) = normalization_replacements.get(&phone_char.to_ascii_uppercase()) {
            normalized_number.push(*replacement);
        } else if !remove_non_matches {
            normalized_number.push(phone_char);
        }
        // If neither of the above are true, we remove this character.
    }
    normalized_number
}

/// Returns the types we have metadata for based on the PhoneMetadata object
/// passed in.
pub(super) fn get_supported_types_for_metadata(
    metadata: &PhoneMetadata,
    types: &mut HashSet<PhoneNumberType>,
) {
    PhoneNumberType::iter()
        // Never return FIXED_LINE_OR_MOBILE (it is a convenience type, and
        // represents that a particular number type can't be
        // determined) or UNKNOWN (the non-type).
        .filter(|number_type| {
            !matches!(
                number_type,
                PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Unknown
            )
        })
        .filter(|number_type| get_number_desc_by_type(metadata, *number_type).has_data())
        .for_each(|number_type| {
            types.insert(number_type);
        });
}

/// Returns a new phone number containing only the fields needed to uniquely
/// identify a phone number, rather than any fields that capture the context in
/// which the phone number was created. Empty extensions are dropped.
pub(super) fn copy_core_fields_only(from_number: &PhoneNumber) -> PhoneNumber {
    let mut to_number = PhoneNumber::new(from_number.country_code(), from_number.national_number())
        .with_italian_leading_zero(from_number.italian_leading_zero());
    if let Some(extension) = from_number.extension().filter(|extension| !extension.is_empty()) {
        to_number.set_extension(extension.to_owned());
    }
    to_number
}

pub(super) fn is_leading_zero_country(country_calling_code: i32) -> bool {
    LEADING_ZERO_COUNTRIES.contains(&country_calling_code)
}

/// Turns `$1`-style group references into `${1}` so that a following literal
/// digit is not read as part of the group name by the regex crate.
pub(super) fn to_braced_group_references(template: &str) -> String {
    let mut braced = String::with_capacity(template.len() + 8);
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('$', Some(digit)) if digit.is_ascii_digit() => {
                braced.push_str("${");
                braced.push(*digit);
                braced.push('}');
                chars.next();
            }
            _ => braced.push(c),
        }
    }
    braced
}
