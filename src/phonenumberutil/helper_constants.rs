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

// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 3;
pub const MAX_LENGTH_FOR_NSN: usize = 15;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;

pub const NANPA_COUNTRY_CODE: i32 = 1;

/// Calling codes of the countries whose national significant numbers may
/// start with a zero.
pub const LEADING_ZERO_COUNTRIES: [i32; 10] = [
    39,  // Italy
    47,  // Norway
    225, // Cote d'Ivoire
    227, // Niger
    228, // Togo
    241, // Gabon
    242, // Congo (Rep. of the)
    268, // Swaziland
    379, // Vatican City
    501, // Belize
];

pub const PLUS_SIGN: &str = "+";
pub const PLUS_CHARS: &str = "+\u{FF0B}";

// ASCII, full-width and Arabic-Indic digits.
pub const DIGITS: &str = "0-9\u{FF10}-\u{FF19}\u{0660}-\u{0669}";

pub const VALID_ALPHA: &str = "A-Za-z";

// Regular expression of acceptable punctuation found in phone numbers. This
// excludes punctuation found as a leading character only. This consists of
// dash characters, white space characters, full stops, slashes, square
// brackets, parentheses and tildes. It also includes the letter 'x' as that
// is found as a placeholder for carrier information in some phone numbers.
// Full-width variants are also present. The leading '-' is a literal.
pub const VALID_PUNCTUATION: &str = "-x\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}\u{FF5E}";

// Regular expression of characters typically used to start a second phone
// number for the purposes of parsing. This allows us to strip off parts of
// the number that are actually the start of another number, such as for:
// (530) 583-6985 x302/x2303 -> the second extension here makes this actually
// two phone numbers, (530) 583-6985 x302 and (530) 583-6985 x2303. We remove
// the second extension so that the first number is parsed correctly.
pub const SECOND_NUMBER_START: &str = r"[\\/] *x";

// Default extension prefix to use when formatting. This will be put in front of
// any extension component of the number, after the main national number is
// formatted. For example, if you wish the default extension formatting to be "
// extn: 3456", then you should specify " extn: " here as the default extension
// prefix. This can be overridden by region-specific preferences.
pub const DEFAULT_EXTN_PREFIX: &str = " ext. ";

pub const POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL: &str = "[ \u{00A0}\\t,]*";

// Optional full stop (.) or colon, followed by zero or more
// spaces/tabs/commas/dashes.
pub const OPTIONAL_EXT_SUFFIX: &str = "[:\\.\u{FF0E}]?[ \u{00A0}\\t,-]*";

/// Longest extension accepted after a label such as "ext" or "x".
pub const EXT_LIMIT_AFTER_LABEL: u32 = 7;
/// Longest extension accepted in the American "- 503#" style.
pub const EXT_LIMIT_WITH_HASH_SUFFIX: u32 = 5;

pub const NP_PLACEHOLDER: &str = "$NP";
pub const FG_PLACEHOLDER: &str = "$FG";
