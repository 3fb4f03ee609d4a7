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


use crate::phonenumber::CountryCodeSource;

/// A normalized number with its international prefix (if any) removed,
/// together with how that prefix was written.
#[derive(Debug, PartialEq, Eq)]
pub struct PhoneNumberWithCountryCodeSource {
    pub phone_number: String,
    pub country_code_source: CountryCodeSource,
}

impl PhoneNumberWithCountryCodeSource {
    pub fn new(phone_number: String, country_code_source: CountryCodeSource) -> Self {
        Self { phone_number, country_code_source }
    }
}

/// Result of looking for a country calling code at the start of a number.
///
/// `country_code` is 0 when none was found, in which case
/// `national_number` is left empty and the caller keeps working on its own
/// copy of the input.
#[derive(Debug, PartialEq, Eq)]
pub struct ExtractedCountryCode {
    pub country_code: i32,
    pub national_number: String,
    pub country_code_source: CountryCodeSource,
}

/// A number split into what precedes a recognised extension and the
/// extension digits.
#[derive(Debug, PartialEq, Eq)]
pub struct StrippedExtension<'a> {
    pub number: &'a str,
    pub extension: Option<&'a str>,
}

