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

use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;
use protobuf::{Message, MessageField};

use super::{
    MetadataError, MetadataProvider, NumberFormat, PhoneMetadata, PhoneMetadataBuilder,
    PhoneNumberDesc, build_country_code_to_region_codes,
};
use crate::proto_gen::phonemetadata as proto;

enum Source {
    /// Every region decoded up front from a single collection.
    Collection(HashMap<String, PhoneMetadata>),
    /// One `<prefix>_<REGION>` file per region, read on demand.
    FilePrefix(PathBuf),
}

/// Provider reading metadata in the protobuf wire format of
/// `resources/phonemetadata.proto`.
pub struct ProtoMetadataProvider {
    source: Source,
    country_code_to_region_codes: Vec<(i32, Vec<String>)>,
}

impl ProtoMetadataProvider {
    /// Decodes a serialized `PhoneMetadataCollection` holding every region.
    pub fn from_collection_bytes(bytes: &[u8]) -> Result<Self, MetadataError> {
        let collection = proto::PhoneMetadataCollection::parse_from_bytes(bytes)?;
        let metadata: Vec<PhoneMetadata> = collection
            .metadata
            .into_iter()
            .map(metadata_from_proto)
            .collect();
        let country_code_to_region_codes = build_country_code_to_region_codes(
            metadata
                .iter()
                .map(|m| (m.id(), m.country_code(), m.main_country_for_code())),
        );
        debug!("Decoded metadata collection with {} regions", metadata.len());

        Ok(Self {
            source: Source::Collection(
                metadata
                    .into_iter()
                    .map(|m| (m.id().to_owned(), m))
                    .collect(),
            ),
            country_code_to_region_codes,
        })
    }

    /// Reads `<prefix>_<REGION>` files lazily. The calling code table has to be
    /// supplied up front since it is needed before any region is loaded.
    pub fn from_file_prefix(
        prefix: impl Into<PathBuf>,
        country_code_to_region_codes: Vec<(i32, Vec<String>)>,
    ) -> Self {
        let mut country_code_to_region_codes = country_code_to_region_codes;
        country_code_to_region_codes.sort_by_key(|(code, _)| *code);
        Self {
            source: Source::FilePrefix(prefix.into()),
            country_code_to_region_codes,
        }
    }

    fn load_from_file(
        prefix: &Path,
        region_code: &str,
    ) -> Result<Option<PhoneMetadata>, MetadataError> {
        let mut file_name = prefix.as_os_str().to_owned();
        file_name.push("_");
        file_name.push(region_code);
        let path = PathBuf::from(file_name);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No metadata file {} for region {region_code}", path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(MetadataError::Io {
                    region_code: region_code.to_owned(),
                    source,
                });
            }
        };

        let collection = proto::PhoneMetadataCollection::parse_from_bytes(&bytes)?;
        let Some(metadata) = collection.metadata.into_iter().next() else {
            return Ok(None);
        };
        if metadata.id() != region_code {
            return Err(MetadataError::UnexpectedRegion {
                requested: region_code.to_owned(),
                found: metadata.id().to_owned(),
            });
        }
        Ok(Some(metadata_from_proto(metadata)))
    }
}

impl MetadataProvider for ProtoMetadataProvider {
    fn country_code_to_region_codes(&self) -> Vec<(i32, Vec<String>)> {
        self.country_code_to_region_codes.clone()
    }

    fn load(&self, region_code: &str) -> Result<Option<PhoneMetadata>, MetadataError> {
        match &self.source {
            Source::Collection(metadata) => Ok(metadata.get(region_code).cloned()),
            Source::FilePrefix(prefix) => Self::load_from_file(prefix, region_code),
        }
    }
}

/// Serializes regions into a `PhoneMetadataCollection`. Used by the offline
/// data build and to write the per-region files read by
/// [`ProtoMetadataProvider::from_file_prefix`].
pub fn encode_collection<'a>(
    metadata: impl IntoIterator<Item = &'a PhoneMetadata>,
) -> Result<Vec<u8>, MetadataError> {
    let mut collection = proto::PhoneMetadataCollection::new();
    collection.metadata = metadata.into_iter().map(metadata_to_proto).collect();
    Ok(collection.write_to_bytes()?)
}

fn desc_from_proto(desc: MessageField<proto::PhoneNumberDesc>) -> Option<PhoneNumberDesc> {
    desc.into_option().map(|desc| PhoneNumberDesc {
        national_number_pattern: desc.national_number_pattern,
        possible_number_pattern: desc.possible_number_pattern,
        example_number: desc.example_number,
    })
}

fn format_from_proto(format: proto::NumberFormat) -> NumberFormat {
    NumberFormat {
        pattern: format.pattern.unwrap_or_default(),
        format: format.format.unwrap_or_default(),
        leading_digits_pattern: format.leading_digits_pattern,
        national_prefix_formatting_rule: format.national_prefix_formatting_rule,
        domestic_carrier_code_formatting_rule: format.domestic_carrier_code_formatting_rule,
    }
}

fn metadata_from_proto(metadata: proto::PhoneMetadata) -> PhoneMetadata {
    PhoneMetadataBuilder {
        id: metadata.id.unwrap_or_default(),
        country_code: metadata.country_code.unwrap_or_default(),
        leading_digits: metadata.leading_digits,
        international_prefix: metadata.international_prefix,
        preferred_international_prefix: metadata.preferred_international_prefix,
        national_prefix: metadata.national_prefix,
        national_prefix_for_parsing: metadata.national_prefix_for_parsing,
        national_prefix_transform_rule: metadata.national_prefix_transform_rule,
        // formats carry their own, already resolved, rules on the wire
        national_prefix_formatting_rule: None,
        preferred_extn_prefix: metadata.preferred_extn_prefix,
        main_country_for_code: metadata.main_country_for_code.unwrap_or_default(),
        same_mobile_and_fixed_line_pattern: metadata.same_mobile_and_fixed_line_pattern,
        general_desc: desc_from_proto(metadata.general_desc),
        fixed_line: desc_from_proto(metadata.fixed_line),
        mobile: desc_from_proto(metadata.mobile),
        toll_free: desc_from_proto(metadata.toll_free),
        premium_rate: desc_from_proto(metadata.premium_rate),
        shared_cost: desc_from_proto(metadata.shared_cost),
        voip: desc_from_proto(metadata.voip),
        personal_number: desc_from_proto(metadata.personal_number),
        pager: desc_from_proto(metadata.pager),
        number_format: metadata.number_format.into_iter().map(format_from_proto).collect(),
        intl_number_format: metadata
            .intl_number_format
            .into_iter()
            .map(format_from_proto)
            .collect(),
    }
    .build()
}

fn desc_to_proto(desc: &PhoneNumberDesc) -> MessageField<proto::PhoneNumberDesc> {
    let mut message = proto::PhoneNumberDesc::new();
    message.national_number_pattern = desc.national_number_pattern.clone();
    message.possible_number_pattern = desc.possible_number_pattern.clone();
    message.example_number = desc.example_number.clone();
    MessageField::some(message)
}

fn format_to_proto(format: &NumberFormat) -> proto::NumberFormat {
    let mut message = proto::NumberFormat::new();
    message.pattern = Some(format.pattern.clone());
    message.format = Some(format.format.clone());
    message.leading_digits_pattern = format.leading_digits_pattern.clone();
    message.national_prefix_formatting_rule = format.national_prefix_formatting_rule.clone();
    message.domestic_carrier_code_formatting_rule =
        format.domestic_carrier_code_formatting_rule.clone();
    message
}

fn metadata_to_proto(metadata: &PhoneMetadata) -> proto::PhoneMetadata {
    let owned = |value: Option<&str>| value.map(str::to_owned);

    let mut message = proto::PhoneMetadata::new();
    message.id = Some(metadata.id().to_owned());
    message.country_code = Some(metadata.country_code());
    message.leading_digits = owned(metadata.leading_digits());
    message.international_prefix = owned(metadata.international_prefix());
    message.preferred_international_prefix = owned(metadata.preferred_international_prefix());
    message.national_prefix = owned(metadata.national_prefix());
    message.national_prefix_for_parsing = owned(metadata.national_prefix_for_parsing());
    message.national_prefix_transform_rule = owned(metadata.national_prefix_transform_rule());
    message.preferred_extn_prefix = owned(metadata.preferred_extn_prefix());
    message.main_country_for_code = Some(metadata.main_country_for_code());
    message.same_mobile_and_fixed_line_pattern =
        Some(metadata.same_mobile_and_fixed_line_pattern());

    message.general_desc = desc_to_proto(metadata.general_desc());
    message.fixed_line = desc_to_proto(metadata.fixed_line());
    message.mobile = desc_to_proto(metadata.mobile());
    message.toll_free = desc_to_proto(metadata.toll_free());
    message.premium_rate = desc_to_proto(metadata.premium_rate());
    message.shared_cost = desc_to_proto(metadata.shared_cost());
    message.voip = desc_to_proto(metadata.voip());
    message.personal_number = desc_to_proto(metadata.personal_number());
    message.pager = desc_to_proto(metadata.pager());

    message.number_format = metadata.number_format().iter().map(format_to_proto).collect();
    message.intl_number_format = metadata
        .intl_number_format()
        .iter()
        .map(format_to_proto)
        .collect();
    message
}

#[cfg(test)]
mod tests {
    use super::{ProtoMetadataProvider, encode_collection};
    use crate::metadata::{MetadataError, MetadataProvider, NumberFormat, PhoneMetadata, PhoneNumberDesc};

    fn sample_region() -> PhoneMetadata {
        PhoneMetadata::builder("NZ", 64)
            .international_prefix("00")
            .national_prefix("0")
            .national_prefix_formatting_rule("$NP$FG")
            .general_desc(PhoneNumberDesc::new("[289]\\d{7,9}|[3-7]\\d{7}", "\\d{7,10}"))
            .mobile(PhoneNumberDesc::new("2\\d{7,9}", "\\d{8,10}").with_example_number("201234567"))
            .number_format(
                NumberFormat::new("(\\d)(\\d{3})(\\d{4})", "$1-$2 $3")
                    .with_leading_digits_pattern("[3467]|9[1-9]"),
            )
            .build()
    }

    #[test]
    fn collection_keeps_resolved_metadata() {
        let region = sample_region();
        let bytes = encode_collection([&region]).unwrap();
        let provider = ProtoMetadataProvider::from_collection_bytes(&bytes).unwrap();

        assert_eq!(vec![(64, vec!["NZ".to_owned()])], provider.country_code_to_region_codes());
        let decoded = provider.load("NZ").unwrap().unwrap();
        assert_eq!(region, decoded);
        assert_eq!("0$1", decoded.number_format()[0].national_prefix_formatting_rule());
        assert!(provider.load("GB").unwrap().is_none());
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let result = ProtoMetadataProvider::from_collection_bytes(&[0xff, 0xff, 0xff]);
        assert!(matches!(result, Err(MetadataError::Decode(_))));
    }
}
