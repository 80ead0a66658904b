//! Geometry access for overlay positioning.
//!
//! The placement engine never touches a rendering tree directly. Everything it
//! needs (bounding rects, computed styles, scroll offsets, style writes) goes
//! through the [`GeometryAdapter`] trait defined here.
//!
//! Two implementations exist:
//!
//! 1. **Browser**: `overlay-wasm` implements the trait over `web-sys`
//! 2. **Snapshot**: [`Snapshot`] is an in-memory layout document with fixed
//!    rectangles, used to run placements without a browser
//!
//! # Example
//!
//! ```
//! use overlay_core::{Rect, Size};
//! use overlay_geometry::{GeometryAdapter, Snapshot, SnapshotNode};
//!
//! let mut doc = Snapshot::new(Size::new(800.0, 600.0));
//! let body = doc.body_id();
//! let button = doc.add(body, SnapshotNode::new(Rect::new(100.0, 100.0, 50.0, 20.0)));
//!
//! assert_eq!(doc.bounding_client_rect(&button), Rect::new(100.0, 100.0, 50.0, 20.0));
//! ```

mod adapter;
mod snapshot;

pub use adapter::{GeometryAdapter, StyleProperty, StyleValue, Target};
pub use snapshot::{NodeId, Snapshot, SnapshotNode};
