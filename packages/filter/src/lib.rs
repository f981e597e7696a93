#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Search and filter pipeline for report lists.
//!
//! The [`engine`] module holds the pure predicate stages — free-text
//! search, relative date classification, and the two multi-select
//! categorical filters. [`SearchController`] owns the mutable
//! [`FilterState`] and recomputes the visible subset on every change.
//!
//! Filtering is a pure intersection: every stage preserves the input's
//! newest-first order and never reorders. Date-relative stages take the
//! reference instant as an explicit parameter so evaluations are
//! reproducible.

pub mod engine;

mod controller;
mod state;

pub use controller::SearchController;
pub use state::{DateFilter, FilterState, SearchScope};
