// src/specs/mod.rs
//! # Page specs
//!
//! Where the data lives in the catalogue HTML and how to read it.
//!
//! ## What lives here
//! - **Pure HTML parsing** of fetched pages, built on the tolerant scanning
//!   helpers in `core::html` (case-insensitive tag blocks, attribute lookup,
//!   tag stripping) and `core::sanitize` (entities, price text).
//! - **Selector choice & precedence**: the full title comes from the link's
//!   `title` attribute, with the (possibly truncated) link text as fallback.
//!
//! ## What does **not** live here
//! - Fetching, pagination and politeness pauses (`scrape`).
//! - Filtering, alerts and persistence (`scrape`, `store`).
//!
//! ## Typical call chain
//! ```text
//! GUI / cli → scrape::run → net::http_get → specs::catalog::parse_page
//!                        ↘ store::append
//! ```
//!
//! Specs are tested offline against inline HTML fixtures.
pub mod catalog;
