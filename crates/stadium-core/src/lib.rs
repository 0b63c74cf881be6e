//! Core types for stadium-rs.
//!
//! This crate provides the pieces shared by every stage of the stadium pipeline:
//! - [`StadiumError`] and the crate-wide [`Result`] alias
//! - [`Aabb`], the axis-aligned box used for cell bounds and layer extents
//! - [`GeneratorOptions`] and [`WireframeOptions`], loadable from JSON

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod aabb;
pub mod error;
pub mod options;

pub use aabb::Aabb;
pub use error::{Result, StadiumError};
pub use options::{GeneratorOptions, WireframeOptions};

// Re-export glam types for convenience
pub use glam::{UVec3, Vec3};
