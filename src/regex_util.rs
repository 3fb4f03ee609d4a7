// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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

use regex::{Match, Regex};

/// How a metadata pattern is anchored before it is compiled.
///
/// Metadata patterns are stored unanchored. Wrapping them in a non-capturing
/// group keeps the group numbering intact for `$1`-style substitutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The pattern must match a prefix of the input.
    Start,
    /// The pattern must match the whole input.
    Full,
}

impl Anchor {
    pub fn wrap(self, pattern: &str) -> String {
        match self {
            Anchor::Start => fast_cat::concat_str!("^(?:", pattern, ")"),
            Anchor::Full => fast_cat::concat_str!("^(?:", pattern, ")$"),
        }
    }
}

/// Matching that only succeeds when the match begins at the start of the input.
pub trait RegexConsume {
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>>;
}

impl RegexConsume for Regex {
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        let found = self.find(s)?;
        if found.start() != 0 {
            return None
        }
        Some(found)
    }
}
