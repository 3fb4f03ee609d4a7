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

/// Pattern value used for number types that do not exist in a region.
pub const NOT_AVAILABLE: &str = "NA";

/// Describes one class of numbers (fixed line, mobile, ...) of a region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneNumberDesc {
    pub(crate) national_number_pattern: Option<String>,
    pub(crate) possible_number_pattern: Option<String>,
    pub(crate) example_number: Option<String>,
}

impl PhoneNumberDesc {
    pub fn new(national_number_pattern: impl Into<String>, possible_number_pattern: impl Into<String>) -> Self {
        Self {
            national_number_pattern: Some(national_number_pattern.into()),
            possible_number_pattern: Some(possible_number_pattern.into()),
            example_number: None,
        }
    }

    /// Descriptor of a number type that has no numbers in the region.
    pub fn not_available() -> Self {
        Self::new(NOT_AVAILABLE, NOT_AVAILABLE)
    }

    pub fn with_national_number_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.national_number_pattern = Some(pattern.into());
        self
    }

    pub fn with_possible_number_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.possible_number_pattern = Some(pattern.into());
        self
    }

    pub fn with_example_number(mut self, example_number: impl Into<String>) -> Self {
        self.example_number = Some(example_number.into());
        self
    }

    pub fn national_number_pattern(&self) -> Option<&str> {
        self.national_number_pattern.as_deref()
    }

    pub fn possible_number_pattern(&self) -> Option<&str> {
        self.possible_number_pattern.as_deref()
    }

    pub fn example_number(&self) -> Option<&str> {
        self.example_number.as_deref()
    }

    /// Returns `true` if there is any data set for this descriptor, i.e.
    /// numbers of this type exist in the region.
    pub fn has_data(&self) -> bool {
        self.example_number.is_some()
            || self
                .national_number_pattern
                .as_deref()
                .is_some_and(|pattern| pattern != NOT_AVAILABLE)
    }

    /// Fills the fields missing from `self` with the ones of `general`.
    fn merged_with(self, general: &PhoneNumberDesc) -> Self {
        Self {
            national_number_pattern: self
                .national_number_pattern
                .or_else(|| general.national_number_pattern.clone()),
            possible_number_pattern: self
                .possible_number_pattern
                .or_else(|| general.possible_number_pattern.clone()),
            example_number: self
                .example_number
                .or_else(|| general.example_number.clone()),
        }
    }
}

/// A formatting template, chosen for a national significant number by its
/// leading digits and then applied through `pattern` and `format`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NumberFormat {
    pub(crate) pattern: String,
    pub(crate) format: String,
    pub(crate) leading_digits_pattern: Vec<String>,
    pub(crate) national_prefix_formatting_rule: Option<String>,
    pub(crate) domestic_carrier_code_formatting_rule: Option<String>,
}

impl NumberFormat {
    pub fn new(pattern: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            format: format.into(),
            ..Default::default()
        }
    }

    /// Appends a leading-digits pattern. Later patterns are more specific; only
    /// the last one is consulted when choosing a format.
    pub fn with_leading_digits_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.leading_digits_pattern.push(pattern.into());
        self
    }

    pub fn with_national_prefix_formatting_rule(mut self, rule: impl Into<String>) -> Self {
        self.national_prefix_formatting_rule = Some(rule.into());
        self
    }

    pub fn with_domestic_carrier_code_formatting_rule(mut self, rule: impl Into<String>) -> Self {
        self.domestic_carrier_code_formatting_rule = Some(rule.into());
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn leading_digits_pattern(&self) -> &[String] {
        &self.leading_digits_pattern
    }

    /// Empty when the format carries no national prefix rule.
    pub fn national_prefix_formatting_rule(&self) -> &str {
        self.national_prefix_formatting_rule.as_deref().unwrap_or_default()
    }

    /// Empty when the format carries no carrier code rule.
    pub fn domestic_carrier_code_formatting_rule(&self) -> &str {
        self.domestic_carrier_code_formatting_rule
            .as_deref()
            .unwrap_or_default()
    }
}

/// Numbering-plan data of a single region.
///
/// Instances are created through [`PhoneMetadataBuilder`], which resolves
/// every default once, so call sites never need to care whether an attribute
/// was present in the source data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneMetadata {
    id: String,
    country_code: i32,
    leading_digits: Option<String>,
    international_prefix: Option<String>,
    preferred_international_prefix: Option<String>,
    national_prefix: Option<String>,
    national_prefix_for_parsing: Option<String>,
    national_prefix_transform_rule: Option<String>,
    preferred_extn_prefix: Option<String>,
    main_country_for_code: bool,
    same_mobile_and_fixed_line_pattern: bool,

    general_desc: PhoneNumberDesc,
    fixed_line: PhoneNumberDesc,
    mobile: PhoneNumberDesc,
    toll_free: PhoneNumberDesc,
    premium_rate: PhoneNumberDesc,
    shared_cost: PhoneNumberDesc,
    voip: PhoneNumberDesc,
    personal_number: PhoneNumberDesc,
    pager: PhoneNumberDesc,

    number_format: Vec<NumberFormat>,
    intl_number_format: Vec<NumberFormat>,
}

impl PhoneMetadata {
    pub fn builder(id: impl Into<String>, country_code: i32) -> PhoneMetadataBuilder {
        PhoneMetadataBuilder::new(id, country_code)
    }

    /// Region code, e.g. "US".
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    /// Pattern identifying the numbers of this region among the regions that
    /// share its calling code.
    pub fn leading_digits(&self) -> Option<&str> {
        self.leading_digits.as_deref()
    }

    pub fn international_prefix(&self) -> Option<&str> {
        self.international_prefix.as_deref()
    }

    pub fn preferred_international_prefix(&self) -> Option<&str> {
        self.preferred_international_prefix.as_deref()
    }

    pub fn national_prefix(&self) -> Option<&str> {
        self.national_prefix.as_deref()
    }

    pub fn national_prefix_for_parsing(&self) -> Option<&str> {
        self.national_prefix_for_parsing.as_deref()
    }

    pub fn national_prefix_transform_rule(&self) -> Option<&str> {
        self.national_prefix_transform_rule.as_deref()
    }

    pub fn preferred_extn_prefix(&self) -> Option<&str> {
        self.preferred_extn_prefix.as_deref()
    }

    pub fn main_country_for_code(&self) -> bool {
        self.main_country_for_code
    }

    pub fn same_mobile_and_fixed_line_pattern(&self) -> bool {
        self.same_mobile_and_fixed_line_pattern
    }

    pub fn general_desc(&self) -> &PhoneNumberDesc {
        &self.general_desc
    }

    pub fn fixed_line(&self) -> &PhoneNumberDesc {
        &self.fixed_line
    }

    pub fn mobile(&self) -> &PhoneNumberDesc {
        &self.mobile
    }

    pub fn toll_free(&self) -> &PhoneNumberDesc {
        &self.toll_free
    }

    pub fn premium_rate(&self) -> &PhoneNumberDesc {
        &self.premium_rate
    }

    pub fn shared_cost(&self) -> &PhoneNumberDesc {
        &self.shared_cost
    }

    pub fn voip(&self) -> &PhoneNumberDesc {
        &self.voip
    }

    pub fn personal_number(&self) -> &PhoneNumberDesc {
        &self.personal_number
    }

    pub fn pager(&self) -> &PhoneNumberDesc {
        &self.pager
    }

    pub fn number_format(&self) -> &[NumberFormat] {
        &self.number_format
    }

    pub fn intl_number_format(&self) -> &[NumberFormat] {
        &self.intl_number_format
    }

    pub(crate) fn strip_example_numbers(&mut self) {
        for desc in [
            &mut self.general_desc,
            &mut self.fixed_line,
            &mut self.mobile,
            &mut self.toll_free,
            &mut self.premium_rate,
            &mut self.shared_cost,
            &mut self.voip,
            &mut self.personal_number,
            &mut self.pager,
        ] {
            desc.example_number = None;
        }
    }
}

/// Collects the raw attributes of a region and resolves them into a
/// [`PhoneMetadata`].
///
/// Defaults applied by [`PhoneMetadataBuilder::build`]:
/// - `national_prefix_for_parsing` falls back to `national_prefix`;
/// - fixed-line and mobile descriptors inherit missing fields from the
///   general descriptor;
/// - other descriptors become "not available" when absent, and inherit
///   missing fields from the general descriptor when partially present;
/// - `same_mobile_and_fixed_line_pattern` is computed from the resolved
///   descriptors unless set explicitly;
/// - formats without their own national prefix rule take the region-level
///   rule, with `$NP` replaced by the national prefix and `$FG` by `$1`.
#[derive(Debug, Clone, Default)]
pub struct PhoneMetadataBuilder {
    pub(crate) id: String,
    pub(crate) country_code: i32,
    pub(crate) leading_digits: Option<String>,
    pub(crate) international_prefix: Option<String>,
    pub(crate) preferred_international_prefix: Option<String>,
    pub(crate) national_prefix: Option<String>,
    pub(crate) national_prefix_for_parsing: Option<String>,
    pub(crate) national_prefix_transform_rule: Option<String>,
    pub(crate) national_prefix_formatting_rule: Option<String>,
    pub(crate) preferred_extn_prefix: Option<String>,
    pub(crate) main_country_for_code: bool,
    pub(crate) same_mobile_and_fixed_line_pattern: Option<bool>,

    pub(crate) general_desc: Option<PhoneNumberDesc>,
    pub(crate) fixed_line: Option<PhoneNumberDesc>,
    pub(crate) mobile: Option<PhoneNumberDesc>,
    pub(crate) toll_free: Option<PhoneNumberDesc>,
    pub(crate) premium_rate: Option<PhoneNumberDesc>,
    pub(crate) shared_cost: Option<PhoneNumberDesc>,
    pub(crate) voip: Option<PhoneNumberDesc>,
    pub(crate) personal_number: Option<PhoneNumberDesc>,
    pub(crate) pager: Option<PhoneNumberDesc>,

    pub(crate) number_format: Vec<NumberFormat>,
    pub(crate) intl_number_format: Vec<NumberFormat>,
}

macro_rules! builder_setters {
    ($($(#[$meta:meta])* $name:ident: $ty:ty),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(mut self, value: impl Into<$ty>) -> Self {
                self.$name = Some(value.into());
                self
            }
        )*
    };
}

impl PhoneMetadataBuilder {
    pub fn new(id: impl Into<String>, country_code: i32) -> Self {
        Self {
            id: id.into(),
            country_code,
            ..Default::default()
        }
    }

    builder_setters! {
        leading_digits: String,
        international_prefix: String,
        preferred_international_prefix: String,
        national_prefix: String,
        national_prefix_for_parsing: String,
        national_prefix_transform_rule: String,
        /// Region-wide rule, inherited by formats that do not define one.
        national_prefix_formatting_rule: String,
        preferred_extn_prefix: String,
        general_desc: PhoneNumberDesc,
        fixed_line: PhoneNumberDesc,
        mobile: PhoneNumberDesc,
        toll_free: PhoneNumberDesc,
        premium_rate: PhoneNumberDesc,
        shared_cost: PhoneNumberDesc,
        voip: PhoneNumberDesc,
        personal_number: PhoneNumberDesc,
        pager: PhoneNumberDesc,
    }

    pub fn main_country_for_code(mut self, main_country_for_code: bool) -> Self {
        self.main_country_for_code = main_country_for_code;
        self
    }

    pub fn same_mobile_and_fixed_line_pattern(mut self, same: bool) -> Self {
        self.same_mobile_and_fixed_line_pattern = Some(same);
        self
    }

    pub fn number_format(mut self, format: NumberFormat) -> Self {
        self.number_format.push(format);
        self
    }

    pub fn intl_number_format(mut self, format: NumberFormat) -> Self {
        self.intl_number_format.push(format);
        self
    }

    pub fn build(self) -> PhoneMetadata {
        let general_desc = self.general_desc.unwrap_or_default();
        let inherit_general = |desc: Option<PhoneNumberDesc>| match desc {
            Some(desc) => desc.merged_with(&general_desc),
            None => general_desc.clone(),
        };
        let not_available_unless_set = |desc: Option<PhoneNumberDesc>| match desc {
            Some(desc) => desc.merged_with(&general_desc),
            None => PhoneNumberDesc::not_available(),
        };

        let fixed_line = inherit_general(self.fixed_line);
        let mobile = inherit_general(self.mobile);
        let same_mobile_and_fixed_line_pattern = self
            .same_mobile_and_fixed_line_pattern
            .unwrap_or_else(|| fixed_line.national_number_pattern == mobile.national_number_pattern);

        let national_prefix = self.national_prefix.filter(|prefix| !prefix.is_empty());
        let region_formatting_rule = self.national_prefix_formatting_rule;
        let number_format = self
            .number_format
            .into_iter()
            .map(|mut format| {
                let rule = format
                    .national_prefix_formatting_rule
                    .take()
                    .or_else(|| region_formatting_rule.clone());
                format.national_prefix_formatting_rule =
                    rule.and_then(|rule| resolve_formatting_rule(&rule, national_prefix.as_deref()));
                format
            })
            .collect();

        PhoneMetadata {
            national_prefix_for_parsing: self
                .national_prefix_for_parsing
                .or_else(|| national_prefix.clone()),
            toll_free: not_available_unless_set(self.toll_free),
            premium_rate: not_available_unless_set(self.premium_rate),
            shared_cost: not_available_unless_set(self.shared_cost),
            voip: not_available_unless_set(self.voip),
            personal_number: not_available_unless_set(self.personal_number),
            pager: not_available_unless_set(self.pager),
            id: self.id,
            country_code: self.country_code,
            leading_digits: self.leading_digits,
            international_prefix: self.international_prefix,
            preferred_international_prefix: self.preferred_international_prefix,
            national_prefix,
            national_prefix_transform_rule: self.national_prefix_transform_rule,
            preferred_extn_prefix: self.preferred_extn_prefix,
            main_country_for_code: self.main_country_for_code,
            same_mobile_and_fixed_line_pattern,
            general_desc,
            fixed_line,
            mobile,
            number_format,
            intl_number_format: self.intl_number_format,
        }
    }
}

/// Substitutes `$NP` and `$FG` in a national prefix formatting rule. A rule
/// that needs a national prefix is dropped when the region has none.
fn resolve_formatting_rule(rule: &str, national_prefix: Option<&str>) -> Option<String> {
    if rule.is_empty() {
        return Some(String::new());
    }
    let rule = match national_prefix {
        Some(national_prefix) => rule.replace("$NP", national_prefix),
        None if rule.contains("$NP") => return None,
        None => rule.to_owned(),
    };
    Some(rule.replace("$FG", "$1"))
}
