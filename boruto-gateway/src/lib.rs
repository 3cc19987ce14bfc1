//! HTTP API gateway for the Boruto hero catalog.
//!
//! Serves paginated hero listings, name search and hero images over axum,
//! delegating every decision to `boruto-core`.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
