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

use std::{
    num::NonZeroUsize,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use log::debug;
use lru::LruCache;
use regex::Regex;
use thiserror::Error;

/// Number of compiled patterns kept when no capacity is configured.
pub const DEFAULT_REGEX_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

#[derive(Debug, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Compiled regular expressions keyed by their source pattern.
///
/// The cache is bounded: once `capacity` patterns are stored, inserting a new
/// one evicts the pattern that was least recently fetched. Lookup, compilation
/// and insertion happen under one lock, so a pattern is never compiled twice
/// by racing threads.
pub struct RegexCache {
    cache: Mutex<LruCache<String, Arc<Regex>>>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_REGEX_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<Regex>, InvalidRegexError> {
        let mut cache = self.lock();
        if let Some(regex) = cache.get(pattern) {
            return Ok(regex.clone());
        }
        let regex = Arc::new(Regex::new(pattern)?);
        if let Some((evicted, _)) = cache.push(pattern.to_owned(), regex.clone()) {
            debug!("Regex cache is full, evicted pattern '{evicted}'");
        }
        Ok(regex)
    }

    /// Returns `true` if the pattern is cached. Does not refresh its position.
    pub fn contains(&self, pattern: &str) -> bool {
        self.lock().contains(pattern)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.lock().cap()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // Entries are immutable once inserted, so a panic while the lock was held
    // cannot leave a half-written value behind.
    fn lock(&self) -> MutexGuard<'_, LruCache<String, Arc<Regex>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}
