//! Page token validation and neighbor-page arithmetic.

use std::fmt;

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::CoreError;
use crate::hero::Hero;

/// Token used when the client sends no `page` parameter.
pub const DEFAULT_PAGE_TOKEN: &str = "1";

/// A 1-based page number known to lie within `[1, page_count]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PageIndex(usize);

impl PageIndex {
    /// Returns the index if `value` lies in `[1, page_count]`.
    #[must_use]
    pub fn new(value: usize, page_count: usize) -> Option<Self> {
        (1..=page_count).contains(&value).then_some(Self(value))
    }

    /// Parses a raw page token and bounds-checks it.
    ///
    /// The token must be a 32-bit signed integer literal with an optional
    /// sign. Surrounding whitespace is not trimmed.
    ///
    /// # Errors
    /// - [`CoreError::InvalidInput`] if `token` is not an integer literal.
    /// - [`CoreError::NotFound`] if the integer is outside `[1, page_count]`.
    pub fn parse(token: &str, page_count: usize) -> Result<Self, CoreError> {
        let value: i32 = token.parse().map_err(|_| CoreError::InvalidInput)?;
        usize::try_from(value)
            .ok()
            .and_then(|v| Self::new(v, page_count))
            .ok_or(CoreError::NotFound)
    }

    /// Returns the page number.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// The page before this one, if any.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        (self.0 > 1).then(|| Self(self.0 - 1))
    }

    /// The page after this one, if it is within `page_count`.
    #[must_use]
    pub fn next(self, page_count: usize) -> Option<Self> {
        (self.0 < page_count).then(|| Self(self.0 + 1))
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One page of heroes plus its neighbor pointers.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedPage<'a> {
    /// The page that was requested.
    pub current: PageIndex,
    /// `None` on the first page.
    pub prev_page: Option<PageIndex>,
    /// `None` on the last page.
    pub next_page: Option<PageIndex>,
    /// The heroes on `current`, in catalog order.
    pub heroes: &'a [Hero],
}

impl Dataset {
    /// Resolves a raw page token to a page of heroes.
    ///
    /// A missing token selects page 1.
    ///
    /// # Errors
    /// See [`PageIndex::parse`].
    pub fn resolve_page(&self, token: Option<&str>) -> Result<ResolvedPage<'_>, CoreError> {
        let current = PageIndex::parse(token.unwrap_or(DEFAULT_PAGE_TOKEN), self.page_count())?;
        Ok(ResolvedPage {
            current,
            prev_page: current.previous(),
            next_page: current.next(self.page_count()),
            heroes: self.page(current),
        })
    }
}
