//! Use Case Catalog Domain Layer
//!
//! This crate contains the core logic and domain model for the use case
//! catalog browser. It has ZERO external dependencies and defines the records,
//! filter state and the pure reduction that turns a catalog into the view a
//! user sees.
//!
//! ## Key Concepts
//!
//! - **Record**: One catalog entry (a use case) with name, description and tags
//! - **FilterState**: Active tag filters plus the free-text search query
//! - **TagMode**: How multiple active tags combine (any vs. all)
//! - **Filter Engine**: Pure function from (records, state) to the visible subset
//! - **Selection**: Single-select toggle keyed by stable record id
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - No I/O, no logging, no panics on malformed input
//! - Loading and presentation live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod filter_state;
pub mod record;
pub mod selection;
pub mod tag_mode;

// Re-exports for convenience
pub use filter::{available_tags, filter, filter_with, search_tags};
pub use filter_state::FilterState;
pub use record::{Record, RecordId};
pub use selection::select;
pub use tag_mode::TagMode;
