//! Placement engine for floating overlays.
//!
//! Anchors a *pin* element (tooltip, dropdown, popover) to a *base* element
//! so that a requested point of the pin touches a requested point of the
//! base, keeping the pin inside its container whenever possible.
//!
//! # Pipeline
//!
//! 1. **Alignment model**: expand the requested alignment into an ordered
//!    list of fallback candidates
//! 2. **Coordinate resolution**: anchor points and offsets for pin and base,
//!    across fixed/absolute layout and nested scrolling
//! 3. **Collision check**: first candidate that keeps the pin inside the
//!    container wins, otherwise a clamped fallback is written
//! 4. **Auto-fit and RTL**: optional offset correction for scrolling
//!    containers and right-anchored output
//!
//! # Example
//!
//! ```
//! use overlay_core::{Rect, Size};
//! use overlay_geometry::{Snapshot, SnapshotNode};
//! use overlay_position::{place, PlacementConfig};
//!
//! let mut doc = Snapshot::new(Size::new(800.0, 600.0));
//! let body = doc.body_id();
//! let button = doc.add(body, SnapshotNode::new(Rect::new(100.0, 100.0, 50.0, 20.0)));
//! let menu = doc.add(body, SnapshotNode::new(Rect::new(0.0, 0.0, 30.0, 10.0)));
//!
//! let config = PlacementConfig::new(menu, button).align("tl bl")?;
//! let used = place(&mut doc, config)?;
//! assert_eq!(used.map(|a| a.to_string()).as_deref(), Some("tl bl"));
//! # Ok::<(), overlay_core::PositionError>(())
//! ```

mod autofit;
mod collision;
mod config;
mod container;
mod coords;
mod engine;
mod expected;
mod policy;
mod rtl;

pub use config::{ContainerSource, PlacementConfig, PlacementOptions};
pub use container::resolve_container;
pub use engine::{place, place_with_report, Placement, PlacementOutcome, Position};
pub use expected::{expected_align, replace_align_dir, ExpectedAlign, Substitution};
pub use policy::{BaseOffsetSource, ScrollPolicy};
