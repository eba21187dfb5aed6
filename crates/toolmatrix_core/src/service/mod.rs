//! Core use-case services.
//!
//! # Responsibility
//! - Apply admin mutations with persistence (`CatalogEditor`).
//! - Run one load -> mutate -> render interaction (`MatrixSession`).
//! - Keep CLI/UI layers decoupled from storage details.

pub mod catalog_editor;
pub mod session;
