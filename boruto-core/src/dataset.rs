//! The immutable, pre-partitioned hero collection.

use crate::catalog;
use crate::error::CoreError;
use crate::hero::Hero;
use crate::page::PageIndex;

/// Number of pages the built-in catalog is split into.
pub const PAGE_COUNT: usize = 5;

/// An ordered hero collection split into equal, non-overlapping pages.
///
/// Built once at startup and never mutated, so it can be shared between
/// request handlers behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct Dataset {
    heroes: Vec<Hero>,
    page_count: usize,
    page_size: usize,
}

impl Dataset {
    /// Splits `heroes` into `page_count` equal pages, preserving order.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidPartition`] if `page_count` is zero,
    /// `heroes` is empty, or its length is not a multiple of `page_count`.
    pub fn partitioned(heroes: Vec<Hero>, page_count: usize) -> Result<Self, CoreError> {
        let len = heroes.len();
        if page_count == 0 || len == 0 || len % page_count != 0 {
            return Err(CoreError::InvalidPartition { len, pages: page_count });
        }
        Ok(Self {
            page_size: len / page_count,
            heroes,
            page_count,
        })
    }

    /// The built-in catalog: 25 heroes in [`PAGE_COUNT`] pages of 5.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidPartition`] if the catalog no longer
    /// divides evenly into [`PAGE_COUNT`] pages.
    pub fn builtin() -> Result<Self, CoreError> {
        Self::partitioned(catalog::heroes(), PAGE_COUNT)
    }

    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Number of heroes on every page.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Every hero, in catalog order.
    #[must_use]
    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// The heroes on `index`.
    ///
    /// A `PageIndex` obtained from [`PageIndex::parse`] against this dataset
    /// is always in range; out-of-range indices, however large, yield an
    /// empty slice.
    #[must_use]
    pub fn page(&self, index: PageIndex) -> &[Hero] {
        (index.get() - 1)
            .checked_mul(self.page_size)
            .and_then(|start| Some(start..start.checked_add(self.page_size)?))
            .and_then(|range| self.heroes.get(range))
            .unwrap_or_default()
    }

    /// Iterates over all pages in order.
    pub fn pages(&self) -> impl Iterator<Item = &[Hero]> {
        self.heroes.chunks(self.page_size)
    }
}
