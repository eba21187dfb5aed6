//! Filter matching and matrix construction.
//!
//! # Responsibility
//! - Normalize raw filter input into a canonical selection.
//! - Decide which tools satisfy a selection.
//! - Build the goal x filter (or goal x tool) grid for presentation layers.
//!
//! # Invariants
//! - Matching is AND across categories, OR within one category.
//! - Engine output is structured data; no markup is produced here.
//! - Building is pure: the same (document, selection, config) yields the
//!   same matrix.

pub mod detail;
pub mod matching;
pub mod matrix;
pub mod selection;
pub mod taxonomy;
pub mod validate;
