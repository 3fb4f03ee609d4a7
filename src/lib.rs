//! Parsing, formatting and validation of international phone numbers,
//! driven by per-region metadata supplied through a [`MetadataProvider`].
//!
//! ```ignore
//! let util = PhoneNumberUtil::new(Arc::new(ProtoMetadataProvider::from_collection_bytes(&bytes)?));
//! let number = util.parse("(650) 253-0000", "US")?;
//! assert_eq!("+16502530000", util.format(&number, PhoneNumberFormat::E164));
//! ```

mod interfaces;
/// This module is automatically generated from /resources/*.proto
mod proto_gen;
mod phonenumberutil;
mod phonenumber;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub mod metadata;
pub(crate) mod regex_util;

/// Small macros for the `Cow` juggling around regex replacements.
mod macros;

#[cfg(test)]
mod tests;

pub use phonenumber::{CountryCodeSource, PhoneNumber};
pub use phonenumberutil::{
    MatchType, PhoneNumberFormat, PhoneNumberType, PhoneNumberUtil, PhoneNumberUtilOptions,
    errors,
};
pub use metadata::{
    InMemoryMetadataProvider, MetadataError, MetadataProvider, MetadataStore,
    ProtoMetadataProvider,
};
pub use regexp_cache::{InvalidRegexError, RegexCache};
