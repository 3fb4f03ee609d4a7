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

/// Where the country calling code of a parsed number came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCodeSource {
    /// The number started with a plus sign, e.g. "+44 20 8765 4321".
    FromPlusSign,
    /// The number started with the international dialing prefix of the
    /// default region, e.g. "011 44 20 8765 4321" dialed from the US.
    FromIdd,
    /// The number started with the calling code of the default region
    /// without any prefix, e.g. "44 20 8765 4321" with GB as default.
    FromNumberWithoutPlus,
    /// No calling code was present; the default region supplied it.
    FromDefaultRegion,
}

/// A parsed phone number.
///
/// Values are produced by parsing or by [`PhoneNumber::new`] and never change
/// afterwards; every operation of the crate takes them by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    country_code: i32,
    national_number: u64,
    extension: Option<String>,
    italian_leading_zero: bool,
    raw_input: Option<String>,
    country_code_source: Option<CountryCodeSource>,
}

impl PhoneNumber {
    pub fn new(country_code: i32, national_number: u64) -> Self {
        Self {
            country_code,
            national_number,
            ..Default::default()
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Marks the national number as written with a leading zero, which is
    /// significant in countries such as Italy.
    pub fn with_italian_leading_zero(mut self, italian_leading_zero: bool) -> Self {
        self.italian_leading_zero = italian_leading_zero;
        self
    }

    /// Calling code, 0 when unknown.
    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero
    }

    /// The text this number was parsed from. Only kept by
    /// `parse_and_keep_raw_input`.
    pub fn raw_input(&self) -> Option<&str> {
        self.raw_input.as_deref()
    }

    /// Only recorded by `parse_and_keep_raw_input`.
    pub fn country_code_source(&self) -> Option<CountryCodeSource> {
        self.country_code_source
    }

    pub(crate) fn set_country_code(&mut self, country_code: i32) {
        self.country_code = country_code;
    }

    pub(crate) fn set_national_number(&mut self, national_number: u64) {
        self.national_number = national_number;
    }

    pub(crate) fn set_extension(&mut self, extension: String) {
        self.extension = Some(extension);
    }

    pub(crate) fn set_italian_leading_zero(&mut self, italian_leading_zero: bool) {
        self.italian_leading_zero = italian_leading_zero;
    }

    pub(crate) fn set_raw_input(&mut self, raw_input: String) {
        self.raw_input = Some(raw_input);
    }

    pub(crate) fn set_country_code_source(&mut self, source: CountryCodeSource) {
        self.country_code_source = Some(source);
    }

    pub(crate) fn clear_extension(&mut self) {
        self.extension = None;
    }

    pub(crate) fn clear_country_code_source(&mut self) {
        self.country_code_source = None;
    }
}
