//! Catalog domain model for the tool matrix.
//!
//! # Responsibility
//! - Define the canonical document shape shared by store, engine and editor.
//! - Keep one schema for every filter-taxonomy variant (flat, license-only,
//!   multi-category).
//!
//! # Invariants
//! - `goals` order and filter category order are significant and preserved.
//! - Tools are identified by `name` by convention; the model does not
//!   enforce uniqueness.

pub mod catalog;
pub mod filters;
pub mod scenario;
pub mod tool;
