//! Numbering plans used by the benchmarks, built through the public
//! metadata builder. Close enough to the real plans for the sample numbers.

use std::sync::Arc;

use phonenumber_engine::{
    InMemoryMetadataProvider, PhoneNumberUtil,
    metadata::{NumberFormat, PhoneMetadata, PhoneNumberDesc},
};

/// `(text, region)` pairs, each paired with the region id of the
/// `phonenumber` crate for the comparison runs.
pub type TestEntity = (&'static str, &'static str, phonenumber::country::Id);

pub fn sample_numbers() -> Vec<TestEntity> {
    use phonenumber::country::Id::*;
    vec![
        ("0011 54 9 11 8765 4321 ext. 1234", "AU", AU),
        ("(650) 253-0000", "US", US),
        ("+44 20 8765 4321", "GB", GB),
        ("020 8765 4321", "GB", GB),
        ("011 15-1234-5678", "AR", AR),
        ("02 12345678", "IT", IT),
        ("1-800-FLOWERS", "US", US),
        ("12345", "DE", DE),
    ]
}

fn format(pattern: &str, format: &str, leading_digits: &str) -> NumberFormat {
    NumberFormat::new(pattern, format).with_leading_digits_pattern(leading_digits)
}

fn regions() -> Vec<PhoneMetadata> {
    vec![
        PhoneMetadata::builder("US", 1)
            .main_country_for_code(true)
            .international_prefix("011")
            .national_prefix("1")
            .general_desc(PhoneNumberDesc::new(r"[2-9]\d{9}", r"\d{7,10}"))
            .toll_free(PhoneNumberDesc::new(r"8(?:00|33|44|55|66|77|88)\d{7}", r"\d{10}"))
            .number_format(NumberFormat::new(r"(\d{3})(\d{3})(\d{4})", "($1) $2-$3"))
            .intl_number_format(NumberFormat::new(r"(\d{3})(\d{3})(\d{4})", "$1-$2-$3"))
            .build(),
        PhoneMetadata::builder("GB", 44)
            .international_prefix("00")
            .national_prefix("0")
            .national_prefix_formatting_rule("$NP$FG")
            .general_desc(PhoneNumberDesc::new(r"[1-9]\d{9}", r"\d{6,10}"))
            .fixed_line(PhoneNumberDesc::new(r"[1-6]\d{9}", r"\d{6,10}"))
            .mobile(PhoneNumberDesc::new(r"7[1-57-9]\d{8}", r"\d{10}"))
            .number_format(format(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3", "2"))
            .number_format(format(r"(\d{4})(\d{6})", "$1 $2", "7"))
            .build(),
        PhoneMetadata::builder("AR", 54)
            .international_prefix("00")
            .national_prefix("0")
            .national_prefix_for_parsing(r"0(?:(11|2\d{2,3}|3\d{2,3})15)?")
            .national_prefix_transform_rule("9$1")
            .national_prefix_formatting_rule("$NP$FG")
            .general_desc(PhoneNumberDesc::new(r"(?:11|[89]\d{3})\d{8}|[2368]\d{9}|9\d{10}", r"\d{10,11}"))
            .fixed_line(PhoneNumberDesc::new(r"(?:11|[2368]\d)\d{8}", r"\d{10}"))
            .mobile(PhoneNumberDesc::new(r"9\d{10}", r"\d{11}"))
            .number_format(format(r"(\d{2})(\d{4})(\d{4})", "$1 $2-$3", "1"))
            .number_format(format(r"9(11)(\d{4})(\d{4})", "$1 15-$2-$3", "91"))
            .intl_number_format(format(r"(\d{2})(\d{4})(\d{4})", "$1 $2-$3", "1"))
            .intl_number_format(format(r"(9)(11)(\d{4})(\d{4})", "$1 $2 $3-$4", "91"))
            .build(),
        PhoneMetadata::builder("AU", 61)
            .international_prefix("001[14-689]|14(?:1[14]|34|4[17]|[56]6|7[47]|88)0011")
            .preferred_international_prefix("0011")
            .national_prefix("0")
            .national_prefix_formatting_rule("$NP$FG")
            .general_desc(PhoneNumberDesc::new(r"[1-578]\d{8,9}", r"\d{9,10}"))
            .number_format(format(r"(\d)(\d{4})(\d{4})", "$1 $2 $3", "[2378]"))
            .number_format(format(r"(\d{3})(\d{3})(\d{3})", "$1 $2 $3", "4"))
            .build(),
        PhoneMetadata::builder("IT", 39)
            .international_prefix("00")
            .general_desc(PhoneNumberDesc::new(r"0\d{5,10}|3[0-8]\d{7,10}", r"\d{6,11}"))
            .fixed_line(PhoneNumberDesc::new(r"0\d{5,10}", r"\d{6,11}"))
            .mobile(PhoneNumberDesc::new(r"3[0-8]\d{7,10}", r"\d{9,11}"))
            .number_format(format(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3", "0[26]"))
            .number_format(format(r"(\d{3})(\d{3})(\d{3,4})", "$1 $2 $3", "3"))
            .build(),
        PhoneMetadata::builder("DE", 49)
            .international_prefix("00")
            .national_prefix("0")
            .national_prefix_formatting_rule("$NP$FG")
            .general_desc(PhoneNumberDesc::new(r"[1-9]\d{3,14}", r"\d{2,15}"))
            .number_format(format(r"(\d{2})(\d{3,11})", "$1 $2", "[34]0|[68]9"))
            .number_format(format(r"(\d{3})(\d{3,11})", "$1 $2", "[2-9]"))
            .build(),
    ]
}

pub fn phone_util() -> Arc<PhoneNumberUtil> {
    let util = PhoneNumberUtil::new(Arc::new(InMemoryMetadataProvider::new(regions())));
    // keep first-use loading out of the measurements
    util.metadata_store()
        .preload()
        .expect("in-memory metadata never fails to load");
    Arc::new(util)
}
