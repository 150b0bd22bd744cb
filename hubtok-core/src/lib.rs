//! # Hubtok Core
//!
//! The catalog acquisition core behind the Hubtok model browser: fetch a
//! paginated listing of machine-learning model records from a hub API,
//! accumulate them into an ordered catalog, derive the visible tag set and
//! filtered views, and track a circular navigation cursor for swipe/scroll
//! browsing.
//!
//! ## Overview
//!
//! The core composes three stages linearly:
//!
//! - [`providers`]: issues listing requests against the upstream hub and
//!   validates raw records at the boundary
//! - [`catalog`]: merges batches into the growing catalog under a
//!   single-flight guard, tracks the fetch cursor and exhaustion, and
//!   derives tag sets and filtered views
//! - [`nav`]: the circular swipe/scroll cursor with gesture hysteresis
//!
//! Presentation is an external collaborator: it consumes the catalog
//! snapshot, loading flag, tag set, and cursor, and raises gesture and
//! selection events back into a [`catalog::CatalogSession`].
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Catalog accumulation, tag extraction, filtered views, and the session
/// that sequences fetches.
pub mod catalog;

/// Error types and error handling utilities.
pub mod error;

/// Circular navigation cursor for the swipe/scroll variant.
pub mod nav;

/// Upstream catalog providers (hub listing API integration).
pub mod providers;

pub mod prelude;

pub use error::{FetchError, Result};
