//! Core logic for the Boruto hero catalog API.
//!
//! Holds the hero records, the fixed page partition, page-token resolution,
//! name search, and the response envelope. Nothing here performs I/O; the
//! HTTP layer lives in `boruto-gateway`.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod catalog;
pub mod dataset;
pub mod envelope;
pub mod error;
pub mod hero;
pub mod id;
pub mod page;
pub mod search;

pub use dataset::{Dataset, PAGE_COUNT};
pub use envelope::{ApiResponse, OK_MESSAGE};
pub use error::CoreError;
pub use hero::Hero;
pub use id::HeroId;
pub use page::{PageIndex, ResolvedPage, DEFAULT_PAGE_TOKEN};
