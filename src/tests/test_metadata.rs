//! Numbering plans of the regions the unit tests run against. The data is a
//! trimmed-down version of the real plans and is not meant to be accurate.

use crate::metadata::{InMemoryMetadataProvider, NumberFormat, PhoneMetadata, PhoneNumberDesc};

fn desc(national_number_pattern: &str, possible_number_pattern: &str) -> PhoneNumberDesc {
    PhoneNumberDesc::new(national_number_pattern, possible_number_pattern)
}

fn format(pattern: &str, format: &str, leading_digits: &[&str], national_prefix_rule: &str) -> NumberFormat {
    let mut number_format = NumberFormat::new(pattern, format);
    for leading_digits_pattern in leading_digits {
        number_format = number_format.with_leading_digits_pattern(*leading_digits_pattern);
    }
    if !national_prefix_rule.is_empty() {
        number_format = number_format.with_national_prefix_formatting_rule(national_prefix_rule);
    }
    number_format
}

fn ad() -> PhoneMetadata {
    PhoneMetadata::builder("AD", 376)
        .international_prefix("00")
        .same_mobile_and_fixed_line_pattern(true)
        .build()
}

fn ao() -> PhoneMetadata {
    PhoneMetadata::builder("AO", 244)
        .international_prefix("00")
        .national_prefix("0~0")
        .national_prefix_for_parsing("0~0")
        .general_desc(desc(r"[29]\d{8}", r"\d{9}"))
        .fixed_line(desc(r"2\d(?:[26-9]\d|\d[26-9])\d{5}", r"\d{9}").with_example_number("222123456"))
        .mobile(desc(r"9[1-3]\d{7}", r"\d{9}").with_example_number("923123456"))
        .number_format(format(r"(\d{3})(\d{3})(\d{3})", "$1 $2 $3", &[], ""))
        .build()
}

fn ar() -> PhoneMetadata {
    PhoneMetadata::builder("AR", 54)
        .international_prefix("00")
        .national_prefix("0")
        .national_prefix_for_parsing(r"0(?:(11|343|3715)15)?")
        .national_prefix_transform_rule("9$1")
        .general_desc(desc(r"[1-3689]\d{9,10}", r"\d{6,11}"))
        .fixed_line(desc(r"[1-3]\d{9}", r"\d{6,10}"))
        .mobile(desc(r"9\d{10}|[1-3]\d{9}", r"\d{10,11}"))
        .toll_free(desc(r"80\d{8}", r"\d{10}"))
        .premium_rate(desc(r"6(0\d|10)\d{7}", r"\d{10}"))
        .number_format(format(r"(\d{2})(\d{4})(\d{4})", "$1 $2-$3", &["11"], "0$1"))
        .number_format(format(r"(\d{4})(\d{2})(\d{4})", "$1 $2-$3", &["1[02-9]|[23]"], "0$1"))
        .number_format(format(r"9(11)(\d{4})(\d{4})", "$1 15 $2-$3", &["911"], "0$1"))
        .number_format(
            format(r"9(\d{4})(\d{2})(\d{4})", "$1 $2-$3", &["9(?:1[02-9]|[23])"], "0$1")
                .with_domestic_carrier_code_formatting_rule("$1 $CC"),
        )
        .number_format(format(r"(\d{3})(\d{3})(\d{4})", "$1-$2-$3", &["[68]"], "0$1"))
        .intl_number_format(format(r"(\d{2})(\d{4})(\d{4})", "$1 $2-$3", &["11"], ""))
        .intl_number_format(format(r"(\d{4})(\d{2})(\d{4})", "$1 $2-$3", &["1[02-9]|[23]"], ""))
        .intl_number_format(format(r"(9)(11)(\d{4})(\d{4})", "$1 $2 $3 $4", &["911"], ""))
        .intl_number_format(format(
            r"(9)(\d{4})(\d{2})(\d{4})",
            "$1 $2 $3 $4",
            &["9(?:1[02-9]|[23])"],
            "",
        ))
        .intl_number_format(format(r"(\d{3})(\d{3})(\d{4})", "$1-$2-$3", &["[68]"], ""))
        .build()
}

fn au() -> PhoneMetadata {
    PhoneMetadata::builder("AU", 61)
        .international_prefix("001[12]")
        .preferred_international_prefix("0011")
        .national_prefix("0")
        .national_prefix_for_parsing("0")
        .general_desc(desc(r"[1-578]\d{4,14}", r"\d{5,15}"))
        .fixed_line(desc(r"[2378]\d{8}", r"\d{9}"))
        .mobile(desc(r"4\d{8}", r"\d{9}"))
        .toll_free(desc(r"1800\d{6}", r"\d{10}"))
        .premium_rate(desc(r"190[0126]\d{6}", r"\d{10}"))
        .number_format(format(r"(\d{4})(\d{3})(\d{3})", "$1 $2 $3", &["1"], "$1"))
        .number_format(format(r"(\d{1})(\d{4})(\d{4})", "$1 $2 $3", &["[2-478]"], "0$1"))
        .build()
}

fn bs() -> PhoneMetadata {
    PhoneMetadata::builder("BS", 1)
        .international_prefix("011")
        .national_prefix("1")
        .national_prefix_for_parsing("1")
        .general_desc(desc(r"(242|8(00|66|77|88)|900)\d{7}", r"\d{7,10}"))
        .fixed_line(desc(
            r"242(?:3(?:02|[236][1-9]|4[0-24-9]|5[0-68]|7[3-57]|9[2-5])|4(?:2[237]|51|64|77)|502|636|702)\d{4}",
            r"\d{7,10}",
        ))
        .mobile(desc(r"242(357|359|457|557)\d{4}", r"\d{10}"))
        .toll_free(desc(r"8(00|66|77|88)\d{7}", r"\d{10}"))
        .premium_rate(desc(r"900\d{7}", r"\d{10}"))
        .build()
}

fn de() -> PhoneMetadata {
    PhoneMetadata::builder("DE", 49)
        .international_prefix("00")
        .national_prefix("0")
        .national_prefix_for_parsing("0")
        .general_desc(desc(r"\d{4,14}", r"\d{2,14}"))
        .fixed_line(
            desc(r"(?:[24-6]\d{2}|3[03-9]\d|[789](?:[1-9]\d|0[2-9]))\d{3,8}", r"\d{2,14}")
                .with_example_number("30123456"),
        )
        .mobile(desc(r"1(5\d{9}|7\d{8}|6[02]\d{8}|63\d{7})", r"\d{10,11}"))
        .toll_free(desc(r"800\d{7}", r"\d{10}"))
        .premium_rate(desc(r"900([135]\d{6}|9\d{7})", r"\d{10,11}"))
        .number_format(format(r"(\d{3})(\d{3,8})", "$1 $2", &["2|3[3-9]|906|[4-9][1-9]1"], "0$1"))
        .number_format(format(r"(\d{2})(\d{4,9})", "$1 $2", &["[34]0|[68]9"], "0$1"))
        .number_format(format(
            r"([4-9]\d{3})(\d{2,7})",
            "$1 $2",
            &["[4-9]", r"[4-6]|[7-9](?:\d[1-9]|[1-9]\d)"],
            "0$1",
        ))
        .number_format(format(r"(\d{3})(\d{1})(\d{6})", "$1 $2 $3", &["800"], "0$1"))
        .number_format(format(r"(\d{3})(\d{3,4})(\d{4})", "$1 $2 $3", &["900"], "0$1"))
        .build()
}

fn gb() -> PhoneMetadata {
    PhoneMetadata::builder("GB", 44)
        .international_prefix("00")
        .national_prefix("0")
        .national_prefix_for_parsing("0")
        .general_desc(desc(r"\d{10}", r"\d{6,10}"))
        .fixed_line(desc(r"[1-6]\d{9}", r"\d{6,10}"))
        .mobile(desc(r"7[1-57-9]\d{8}", r"\d{10}"))
        .toll_free(desc(r"80\d{8}", r"\d{10}"))
        .premium_rate(desc(r"9[018]\d{8}", r"\d{10}"))
        .shared_cost(desc(r"8(?:4[3-5]|7[0-2])\d{7}", r"\d{10}"))
        .personal_number(desc(r"70\d{8}", r"\d{10}"))
        .voip(desc(r"56\d{8}", r"\d{10}"))
        .number_format(format(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3", &["[1-59]|[78]0"], "(0$1)"))
        .number_format(format(r"(\d)(\d{3})(\d{3})(\d{3})", "$1 $2 $3 $4", &["6"], "(0$1)"))
        .number_format(format(r"(\d{4})(\d{3})(\d{3})", "$1 $2 $3", &["7[1-57-9]"], "(0$1)"))
        .number_format(format(r"(\d{3})(\d{3})(\d{4})", "$1 $2 $3", &["8[47]"], "(0$1)"))
        .build()
}

fn it() -> PhoneMetadata {
    PhoneMetadata::builder("IT", 39)
        .international_prefix("00")
        .general_desc(desc(r"[0389]\d{5,10}", r"\d{6,11}"))
        .fixed_line(desc(r"0\d{9,10}", r"\d{10,11}"))
        .mobile(desc(r"3\d{8,9}", r"\d{9,10}"))
        .toll_free(desc(r"80(?:0\d{6}|3\d{3})", r"\d{6,9}"))
        .premium_rate(desc(r"89(?:2\d{3}|9\d{6})", r"\d{6,9}"))
        .number_format(format(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3", &["0[26]"], ""))
        .number_format(format(r"(\d{3})(\d{4})(\d{3,4})", "$1 $2 $3", &["0[13-57-9]"], ""))
        .number_format(format(r"(\d{3})(\d{3})(\d{3,4})", "$1 $2 $3", &["3"], ""))
        .number_format(format(r"(\d{3})(\d{3,6})", "$1 $2", &["8"], ""))
        .build()
}

fn jp() -> PhoneMetadata {
    PhoneMetadata::builder("JP", 81)
        .international_prefix("010")
        .national_prefix("0")
        .national_prefix_for_parsing("0")
        .same_mobile_and_fixed_line_pattern(true)
        .number_format(format(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3", &["[57-9]0"], "0$1"))
        .number_format(format(
            r"(\d{2})(\d{3})(\d{4})",
            "$1 $2 $3",
            &["222|333", "(?:222|333)1", "(?:222|333)11"],
            "0$1",
        ))
        .number_format(format(
            r"(\d{4})(\d)(\d{4})",
            "$1 $2 $3",
            &["222|333", "2221|3332", "22212|3332", "222120|3332"],
            "0$1",
        ))
        .number_format(format(r"(\d{3})(\d{2})(\d{4})", "$1 $2 $3", &["[23]"], "0$1"))
        .build()
}

fn kr() -> PhoneMetadata {
    PhoneMetadata::builder("KR", 82)
        .international_prefix(r"00(?:[124-68]|[37]\d{2})")
        .national_prefix("0")
        .national_prefix_for_parsing(r"0(?:8[1-46-8]|85\d{2})?")
        .general_desc(desc(r"[1-79]\d{3,9}|8\d{8}", r"\d{4,10}"))
        .fixed_line(
            desc(r"(?:2|[34][1-3]|5[1-5]|6[1-4])(?:1\d{2,3}|[2-9]\d{6,7})", r"\d{4,10}")
                .with_example_number("22123456"),
        )
        .mobile(desc(r"1[0-25-9]\d{7,8}", r"\d{9,10}").with_example_number("1023456789"))
        .toll_free(desc(r"80\d{7}", r"\d{9}").with_example_number("801234567"))
        .premium_rate(desc(r"60[2-9]\d{6}", r"\d{9}").with_example_number("602345678"))
        .personal_number(desc(r"50\d{8}", r"\d{10}").with_example_number("5012345678"))
        .voip(desc(r"70\d{8}", r"\d{10}").with_example_number("7012345678"))
        .number_format(format(
            r"(\d{2})(\d{4})(\d{4})",
            "$1-$2-$3",
            &["1(?:0|1[19]|[69]9|5[458])|[57]0", "1(?:0|1[19]|[69]9|5(?:44|59|8))|[57]0"],
            "0$1",
        ))
        .number_format(format(
            r"(\d{2})(\d{3})(\d{4})",
            "$1-$2-$3",
            &[
                "1(?:[169][2-8]|[78]|5[1-4])|[68]0|[3-9][1-9][2-9]",
                "1(?:[169][2-8]|[78]|5(?:[1-3]|4[56]))|[68]0|[3-9][1-9][2-9]",
            ],
            "0$1",
        ))
        .number_format(format(r"(\d{3})(\d)(\d{4})", "$1-$2-$3", &["131", "1312"], "0$1"))
        .number_format(format(r"(\d{3})(\d{2})(\d{4})", "$1-$2-$3", &["131", "131[13-9]"], "0$1"))
        .number_format(format(r"(\d{3})(\d{3})(\d{4})", "$1-$2-$3", &["13[2-9]"], "0$1"))
        .number_format(format(r"(\d{2})(\d{2})(\d{3})(\d{4})", "$1-$2-$3-$4", &["30"], "0$1"))
        .number_format(format(
            r"(\d)(\d{4})(\d{4})",
            "$1-$2-$3",
            &["2(?:[26]|3[0-467])", "2(?:[26]|3(?:01|1[45]|2[17-9]|39|4|6[67]|7[078]))"],
            "0$1",
        ))
        .number_format(format(
            r"(\d)(\d{3})(\d{4})",
            "$1-$2-$3",
            &[
                "2(?:3[0-35-9]|[457-9])",
                "2(?:3(?:0[02-9]|1[0-36-9]|2[02-6]|3[0-8]|6[0-589]|7[1-69]|[589])|[457-9])",
            ],
            "0$1",
        ))
        .number_format(format(
            r"(\d)(\d{3})",
            "$1-$2",
            &["21[0-46-9]", "21(?:[0-247-9]|3[124]|6[1269])"],
            "0$1",
        ))
        .number_format(format(
            r"(\d)(\d{4})",
            "$1-$2",
            &["21[36]", "21(?:3[035-9]|6[03-578])"],
            "0$1",
        ))
        .number_format(format(
            r"(\d{2})(\d{3})",
            "$1-$2",
            &[
                "[3-9][1-9]1",
                "[3-9][1-9]1(?:[0-46-9])",
                "[3-9][1-9]1(?:[0-247-9]|3[124]|6[1269])",
            ],
            "0$1",
        ))
        .number_format(format(
            r"(\d{2})(\d{4})",
            "$1-$2",
            &["[3-9][1-9]1", "[3-9][1-9]1[36]", "[3-9][1-9]1(?:3[035-9]|6[03-578])"],
            "0$1",
        ))
        .build()
}

fn mx() -> PhoneMetadata {
    PhoneMetadata::builder("MX", 52)
        .international_prefix("00")
        .national_prefix("01")
        .national_prefix_for_parsing(r"01|04[45](\d{10})")
        .national_prefix_transform_rule("1$1")
        .general_desc(desc(r"[1-9]\d{9,10}", r"\d{7,11}"))
        .fixed_line(desc(r"[2-9]\d{9}", r"\d{7,10}"))
        .mobile(desc(r"1\d{10}", r"\d{11}"))
        .toll_free(desc(r"800\d{7}", r"\d{10}"))
        .premium_rate(desc(r"900\d{7}", r"\d{10}"))
        .number_format(format(r"(\d{3})(\d{3})(\d{4})", "$1 $2 $3", &["[89]00"], ""))
        .number_format(format(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3", &["33|55|81"], ""))
        .number_format(format(
            r"(\d{3})(\d{3})(\d{4})",
            "$1 $2 $3",
            &["[2467]|3[0-24-9]|5[0-46-9]|8[2-9]|9[1-9]"],
            "",
        ))
        .number_format(format(r"1(\d{2})(\d{4})(\d{4})", "045 $1 $2 $3", &["1(?:33|55|81)"], ""))
        .number_format(format(
            r"1(\d{3})(\d{3})(\d{4})",
            "045 $1 $2 $3",
            &["1(?:[124579]|3[0-24-9]|5[0-46-9]|8[02-9])"],
            "",
        ))
        .intl_number_format(format(r"(\d{3})(\d{3})(\d{4})", "$1 $2 $3", &["[89]00"], ""))
        .intl_number_format(format(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3", &["33|55|81"], ""))
        .intl_number_format(format(
            r"(\d{3})(\d{3})(\d{4})",
            "$1 $2 $3",
            &["[2467]|3[0-24-9]|5[0-46-9]|8[2-9]|9[1-9]"],
            "",
        ))
        .intl_number_format(format(
            r"(1)(\d{2})(\d{4})(\d{4})",
            "$1 $2 $3 $4",
            &["1(?:33|55|81)"],
            "",
        ))
        .intl_number_format(format(
            r"(1)(\d{3})(\d{3})(\d{4})",
            "$1 $2 $3 $4",
            &["1(?:[124579]|3[0-24-9]|5[0-46-9]|8[02-9])"],
            "",
        ))
        .build()
}

fn nz() -> PhoneMetadata {
    PhoneMetadata::builder("NZ", 64)
        .international_prefix("00")
        .national_prefix("0")
        .national_prefix_for_parsing("0")
        .general_desc(desc(r"[2-9]\d{7,9}", r"\d{7,10}"))
        .fixed_line(desc(r"24099\d{3}|(?:3[2-79]|[479][2-689]|6[235-9])\d{6}", r"\d{7,8}"))
        .mobile(desc(
            r"2(?:[027]\d{7}|9\d{6,7}|1(?:0\d{5,7}|[12]\d{5,6}|[3-9]\d{5})|4[1-9]\d{6}|8\d{7,8})",
            r"\d{8,10}",
        ))
        .toll_free(desc(r"800\d{6,7}", r"\d{9,10}"))
        .premium_rate(desc(r"900\d{6,7}", r"\d{9,10}"))
        .number_format(format(r"(\d)(\d{3})(\d{4})", "$1-$2 $3", &["24|[34679]"], "0$1"))
        .number_format(format(r"(\d)(\d{3})(\d{3,5})", "$1-$2 $3", &["2[179]"], "0$1"))
        .number_format(format(r"(\d{3})(\d{3})(\d{3,4})", "$1 $2 $3", &["[89]"], "0$1"))
        .build()
}

fn pl() -> PhoneMetadata {
    PhoneMetadata::builder("PL", 48)
        .international_prefix("0~0")
        .national_prefix("0")
        .national_prefix_for_parsing("0")
        .general_desc(desc(r"[1-9]\d{8}", r"\d{9}"))
        .fixed_line(desc(r"[1-9]\d{8}", r"\d{9}"))
        .mobile(desc(r"(?:5[01]|6[069]|7[289]|88)\d{7}", r"\d{9}"))
        .toll_free(desc(r"800\d{6}", r"\d{9}"))
        .premium_rate(desc(r"70\d{7}", r"\d{9}"))
        .number_format(format(r"(\d{2})(\d{3})(\d{2})(\d{2})", "$1 $2 $3 $4", &[], "0$1"))
        .build()
}

fn re() -> PhoneMetadata {
    PhoneMetadata::builder("RE", 262)
        .international_prefix("00")
        .national_prefix("0")
        .national_prefix_for_parsing("0")
        .leading_digits("262|6(?:9[23]|47)|8")
        .general_desc(desc(r"[268]\d{8}", r"\d{9}"))
        .fixed_line(desc(r"262\d{6}", r"\d{9}").with_example_number("262161234"))
        .mobile(desc(r"6(?:9[23]|47)\d{6}", r"\d{9}").with_example_number("692123456"))
        .toll_free(desc(r"80\d{7}", r"\d{9}").with_example_number("801234567"))
        .premium_rate(
            desc(r"8(?:1[01]|2[0156]|84|9[0-37-9])\d{6}", r"\d{9}").with_example_number("810123456"),
        )
        .number_format(format(r"([268]\d{2})(\d{2})(\d{2})(\d{2})", "$1 $2 $3 $4", &[], "0$1"))
        .build()
}

fn sg() -> PhoneMetadata {
    PhoneMetadata::builder("SG", 65)
        .international_prefix("0[0-3][0-9]")
        .general_desc(desc(r"[13689]\d{7,10}", r"\d{8,11}"))
        .fixed_line(desc(r"[36]\d{7}", r"\d{8}"))
        .mobile(desc(r"[89]\d{7}", r"\d{8}"))
        .toll_free(desc(r"1?800\d{7}", r"\d{10,11}"))
        .premium_rate(desc(r"1900\d{7}", r"\d{11}"))
        .number_format(format(r"(\d{4})(\d{4})", "$1 $2", &["[369]|8[1-9]"], ""))
        .number_format(format(r"(\d{4})(\d{3})(\d{4})", "$1 $2 $3", &["1[89]"], ""))
        .number_format(format(r"(\d{3})(\d{3})(\d{4})", "$1 $2 $3", &["800"], ""))
        .build()
}

fn us() -> PhoneMetadata {
    let any_number = || desc(r"[13-9]\d{9}|2[0-35-9]\d{8}", r"\d{7,10}").with_example_number("1234567890");
    PhoneMetadata::builder("US", 1)
        .international_prefix("011")
        .national_prefix("1")
        .national_prefix_for_parsing("1")
        .preferred_extn_prefix(" extn. ")
        .same_mobile_and_fixed_line_pattern(true)
        .main_country_for_code(true)
        .general_desc(any_number())
        .fixed_line(any_number())
        .mobile(any_number())
        .toll_free(desc(r"8(00|66|77|88)\d{7}", r"\d{10}").with_example_number("1234567890"))
        .premium_rate(desc(r"900\d{7}", r"\d{10}").with_example_number("1234567890"))
        .number_format(format(r"(\d{3})(\d{3})(\d{4})", "$1 $2 $3", &[], ""))
        .number_format(format(r"(\d{3})(\d{4})", "$1 $2", &[], ""))
        .intl_number_format(format(r"(\d{3})(\d{3})(\d{4})", "$1 $2 $3", &[], ""))
        .build()
}

fn yt() -> PhoneMetadata {
    PhoneMetadata::builder("YT", 262)
        .international_prefix("00")
        .national_prefix("0")
        .national_prefix_for_parsing("0")
        .leading_digits("269|639")
        .general_desc(desc(r"[268]\d{8}", r"\d{9}"))
        .fixed_line(desc(r"2696[0-4]\d{4}", r"\d{9}").with_example_number("269601234"))
        .mobile(desc(r"639\d{6}", r"\d{9}").with_example_number("639123456"))
        .toll_free(desc(r"80\d{7}", r"\d{9}").with_example_number("801234567"))
        .build()
}

/// Every test region, in the order their calling codes list them.
pub(crate) fn test_metadata() -> Vec<PhoneMetadata> {
    vec![
        us(), bs(), it(), gb(), pl(), de(), mx(), ar(), au(), nz(), sg(), jp(), kr(), ao(), re(),
        yt(), ad(),
    ]
}

pub(crate) fn test_metadata_provider() -> InMemoryMetadataProvider {
    InMemoryMetadataProvider::new(test_metadata())
}
