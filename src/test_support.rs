//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;

use async_trait::async_trait;

use crate::catalog::{Catalog, CatalogError, CatalogProvider, ModelRecord};
use crate::core::key::{Key, KeySource};
use crate::core::state::Navigator;

/// A key source that replays a fixed script.
///
/// `read_key` on an exhausted script returns `q` so a runaway loop ends.
pub struct ScriptedKeys {
    pending: VecDeque<Key>,
    probes: usize,
    fail: bool,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            pending: keys.into_iter().collect(),
            probes: 0,
            fail: false,
        }
    }

    pub fn empty() -> Self {
        Self::new([])
    }

    /// Every read fails with an I/O error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::empty()
        }
    }

    /// Number of non-blocking probes made so far.
    pub fn probes(&self) -> usize {
        self.probes
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        if self.fail {
            return Err(io::Error::other("scripted failure"));
        }
        Ok(self.pending.pop_front().unwrap_or(Key::Char('q')))
    }

    fn try_read_key(&mut self) -> io::Result<Option<Key>> {
        self.probes += 1;
        if self.fail {
            return Err(io::Error::other("scripted failure"));
        }
        Ok(self.pending.pop_front())
    }
}

/// A provider returning a fixed catalog, or failing with a network error.
pub struct StaticProvider {
    outcome: Result<Catalog, String>,
}

impl StaticProvider {
    pub fn ok(catalog: Catalog) -> Self {
        Self {
            outcome: Ok(catalog),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl CatalogProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn list_models(&self) -> Result<Catalog, CatalogError> {
        self.outcome.clone().map_err(CatalogError::Network)
    }
}

/// The two-record catalog used throughout the tests.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        ModelRecord::new("gpt-a", 1700000000),
        ModelRecord::new("gpt-b", 1700003600),
    ])
}

/// A navigator showing `sample_catalog()` with the first row selected.
pub fn navigator_in_list() -> Navigator {
    let mut nav = Navigator::new();
    nav.catalog_fetched(Ok(sample_catalog()))
        .expect("sample catalog opens the list");
    nav
}
