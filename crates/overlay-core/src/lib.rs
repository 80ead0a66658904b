//! Core types, alignment codes, and error types for overlay positioning.
//!
//! This crate provides the foundational types used across the other overlay crates:
//! - Alignment codes (`"tl"`, `"cr"`, ...) and pin/base alignment pairs
//! - Geometry value types (points, sizes, rects, pixel offsets)
//! - Computed CSS length reading
//! - Error types

pub mod align;
pub mod css;
pub mod errors;
pub mod types;

pub use align::*;
pub use css::parse_px;
pub use errors::*;
pub use types::*;
