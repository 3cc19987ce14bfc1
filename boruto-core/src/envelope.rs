//! The uniform success envelope returned by the listing and search routes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::hero::Hero;
use crate::page::{PageIndex, ResolvedPage};

/// Message carried by every successful response.
pub const OK_MESSAGE: &str = "ok";

/// Successful API response.
///
/// Serialized in camelCase; absent page pointers are omitted and
/// `lastUpdated` is epoch milliseconds.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<'a> {
    /// Always `true` for this type; failures are reported by the HTTP layer.
    pub success: bool,
    /// Always [`OK_MESSAGE`].
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<PageIndex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<PageIndex>,
    /// Matched heroes, in catalog order.
    pub heroes: Vec<&'a Hero>,
    /// Wall-clock time the response was assembled.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_updated: DateTime<Utc>,
}

impl<'a> ApiResponse<'a> {
    /// Wraps one page of heroes, stamped with the current time.
    #[must_use]
    pub fn from_page(page: ResolvedPage<'a>) -> Self {
        Self::from_page_at(page, Utc::now())
    }

    /// Wraps search results, stamped with the current time.
    ///
    /// Search is not paginated, so both page pointers are absent.
    #[must_use]
    pub fn from_search(heroes: Vec<&'a Hero>) -> Self {
        Self::from_search_at(heroes, Utc::now())
    }

    /// Like [`ApiResponse::from_page`] with an explicit timestamp.
    #[must_use]
    pub fn from_page_at(page: ResolvedPage<'a>, now: DateTime<Utc>) -> Self {
        Self {
            success: true,
            message: OK_MESSAGE,
            prev_page: page.prev_page,
            next_page: page.next_page,
            heroes: page.heroes.iter().collect(),
            last_updated: now,
        }
    }

    /// Like [`ApiResponse::from_search`] with an explicit timestamp.
    #[must_use]
    pub fn from_search_at(heroes: Vec<&'a Hero>, now: DateTime<Utc>) -> Self {
        Self {
            success: true,
            message: OK_MESSAGE,
            prev_page: None,
            next_page: None,
            heroes,
            last_updated: now,
        }
    }
}
