// src/specs/mod.rs
//! # Page specs
//!
//! Each spec encodes *where the ground truth lives in one page's HTML* and how to
//! read it into typed values.
//!
//! ## What lives here
//! - **Pure HTML reading** over an already-parsed document (`scraper::Html`).
//! - **Selector choice & precedence** (e.g. prefer the named vote-count marker,
//!   fall back to its fixed position only on layouts that carry no names).
//! - **Coercion** of text and attributes into record fields, with a structured
//!   [`ExtractionError`](crate::error::ExtractionError) naming the field on failure.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), accumulation and failure policy (`scrape`),
//!   export (`file`, `csv`) and charts (`chart`).
//! - Logging. Specs are side-effect free so they can run against fixtures.
//!
//! ## Typical call chain
//! ```text
//! runner / GUI → scrape::collect_top_chart → core::net::load_source
//!                                         → specs::top_chart::rows
//!                                         → scrape::build_dataset → specs::top_chart::extract_row
//! ```
pub mod top_chart;
