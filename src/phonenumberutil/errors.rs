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

use std::num::ParseIntError;

use log::error;
use thiserror::Error;

use crate::{metadata::MetadataError, regexp_cache::InvalidRegexError};

/// Failures that can only be caused by broken metadata or a failing
/// metadata provider, never by user input.
#[derive(Debug, Error)]
pub enum InternalLogicError {
    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),

    #[error("{0}")]
    InvalidMetadata(#[from] MetadataError),
}

impl InternalLogicError {
    /// Metadata is validated when it is built, so reaching this is a
    /// configuration bug of the host application.
    pub fn escalate(self) -> ! {
        error!("Unrecoverable metadata failure: {self}");
        panic!("Metadata is expected to be valid and loadable; this indicates a configuration bug! {self}")
    }
}

#[derive(Debug, Error)]
pub enum ParseErrorInternal {
    #[error("{0}")]
    FailedToParse(#[from] ParseError),
    #[error("{0}")]
    Internal(#[from] InternalLogicError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid country code")]
    InvalidCountryCode,
    #[error("Not a number: {0}")]
    NotANumber(#[from] NotANumberError),
    #[error("Too short after idd")]
    TooShortAfterIdd,
    #[error("Too short Nsn")]
    TooShortNsn,
    #[error("Too long nsn")]
    TooLongNsn,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotANumberError {
    #[error("Number not matched a valid number pattern")]
    NotMatchedValidNumberPattern,
    #[error("{0}")]
    FailedToParseNumberAsInt(#[from] ParseIntError),
}

#[derive(Debug, Error)]
pub enum GetExampleNumberErrorInternal {
    #[error("{0}")]
    FailedToGetExampleNumber(#[from] GetExampleNumberError),
    #[error("{0}")]
    Internal(#[from] InternalLogicError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetExampleNumberError {
    #[error("Parse error: {0}")]
    FailedToParse(#[from] ParseError),
    #[error("No example number")]
    NoExampleNumber,
    #[error("Invalid country code provided")]
    InvalidRegionCode,
}

/// Reasons a number is not a possible number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// The number has an invalid country calling code.
    #[error("The number has an invalid country calling code")]
    InvalidCountryCode,
    /// The number is shorter than all valid numbers for this region.
    #[error("The number is shorter than all valid numbers for this region")]
    TooShort,
    /// The number is longer than all valid numbers for this region.
    #[error("The number is longer than all valid numbers for this region")]
    TooLong,
}

impl From<InvalidRegexError> for ParseErrorInternal {
    fn from(value: InvalidRegexError) -> Self {
        InternalLogicError::from(value).into()
    }
}

impl From<MetadataError> for ParseErrorInternal {
    fn from(value: MetadataError) -> Self {
        InternalLogicError::from(value).into()
    }
}

impl From<NotANumberError> for ParseErrorInternal {
    fn from(value: NotANumberError) -> Self {
        ParseError::from(value).into()
    }
}

impl From<ParseErrorInternal> for GetExampleNumberErrorInternal {
    fn from(value: ParseErrorInternal) -> Self {
        match value {
            ParseErrorInternal::FailedToParse(err) =>
                GetExampleNumberError::FailedToParse(err).into(),
            ParseErrorInternal::Internal(err) =>
                GetExampleNumberErrorInternal::Internal(err),
        }
    }
}

impl From<InvalidRegexError> for GetExampleNumberErrorInternal {
    fn from(value: InvalidRegexError) -> Self {
        InternalLogicError::from(value).into()
    }
}

impl From<MetadataError> for GetExampleNumberErrorInternal {
    fn from(value: MetadataError) -> Self {
        InternalLogicError::from(value).into()
    }
}

impl GetExampleNumberErrorInternal {
    pub fn into_public(self) -> GetExampleNumberError {
        match self {
            GetExampleNumberErrorInternal::FailedToGetExampleNumber(err) => err,
            GetExampleNumberErrorInternal::Internal(err) => err.escalate(),
        }
    }
}

impl ParseErrorInternal {
    pub fn into_public(self) -> ParseError {
        match self {
            ParseErrorInternal::FailedToParse(err) => err,
            ParseErrorInternal::Internal(err) => err.escalate(),
        }
    }
}
