//! The placement engine.
//!
//! One [`Position`] is built per placement and consumed by
//! [`Position::set_position`]. Candidates from [`expected_align`] are tried
//! in order; each is written to the pin and measured. The first one that
//! keeps the pin inside the container wins. If none does, the first
//! candidate's position is clamped into view and written instead.

use overlay_core::{AlignPair, Offset, Point, PositionError, PositionKind};
use overlay_geometry::{GeometryAdapter, StyleProperty, StyleValue, Target};

use crate::autofit;
use crate::collision::{is_in_viewport, make_in_viewport, viewport_offset, Axis};
use crate::config::PlacementConfig;
use crate::container::resolve_container;
use crate::coords::{parent_offset, parent_scroll_offset, styled_left_top, AnchorPoints};
use crate::expected::expected_align;
use crate::policy::{BaseOffsetSource, ScrollPolicy};
use crate::rtl::write_position;

/// How a placement ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// A candidate alignment fits inside the container.
    Fitted,
    /// No candidate fits. The first candidate was clamped into view.
    Clamped,
}

/// Result of a placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Alignment reported to the caller. For a clamped placement this is
    /// the first candidate, not necessarily what ended up on screen.
    pub align: AlignPair,
    pub outcome: PlacementOutcome,
    /// Position written before the offset, relative to the pin's offset
    /// parent
    pub position: Point,
    /// Offset added on top of `position`
    pub offset: Offset,
}

/// A single placement of a pin against its base.
pub struct Position<'a, A: GeometryAdapter> {
    adapter: &'a mut A,
    config: PlacementConfig<A::Element>,
    container: Option<A::Element>,
}

impl<'a, A: GeometryAdapter> Position<'a, A> {
    /// Resolve the container and prepare a placement.
    pub fn new(adapter: &'a mut A, config: PlacementConfig<A::Element>) -> Self {
        let container = resolve_container(&*adapter, &config.container, &config.base);
        Self {
            adapter,
            config,
            container,
        }
    }

    /// The container collision checks run against.
    pub fn container(&self) -> Option<&A::Element> {
        self.container.as_ref()
    }

    /// Compute and write the pin's position.
    ///
    /// Returns `None` without touching the document when the pin is the
    /// viewport or no document is available.
    pub fn set_position(self) -> Result<Option<Placement>, PositionError> {
        let Position {
            adapter,
            config,
            container,
        } = self;

        let pin = match &config.pin {
            Target::Viewport => return Ok(None),
            Target::Element(pin) => pin.clone(),
        };
        if !adapter.has_document() {
            log::debug!("no document, skipping placement of {:?}", pin);
            return Ok(None);
        }
        if !is_attached(&*adapter, &pin) {
            return Err(PositionError::DetachedPin);
        }

        let pin_fixed = adapter.position(&pin) == PositionKind::Fixed;
        if !pin_fixed {
            adapter.set_styles(
                &pin,
                &[(
                    StyleProperty::Position,
                    StyleValue::Position(PositionKind::Absolute),
                )],
            )?;
        }
        let base_fixed = config
            .base
            .element()
            .map_or(false, |base| adapter.position(base) == PositionKind::Fixed);
        let policy = ScrollPolicy::new(pin_fixed, base_fixed, config.pin_follow_base_when_fixed);

        let expected = expected_align(config.align, config.need_adjust, config.is_rtl);
        let mut first_position: Option<Point> = None;

        for align in expected.iter().copied() {
            let position = candidate_position(&*adapter, &config, &pin, align, policy);
            write_position(adapter, &pin, position, config.offset, config.is_rtl)?;

            let fits = is_in_viewport(&*adapter, &pin, container.as_ref(), align, config.auto_fit);
            log::debug!("candidate {} at {:?}: fits={}", align, position, fits);
            if fits {
                return Ok(Some(Placement {
                    align,
                    outcome: PlacementOutcome::Fitted,
                    position,
                    offset: config.offset,
                }));
            }
            if first_position.is_none() {
                let mut first = position;
                if config.need_adjust && !config.auto_fit {
                    let edges = viewport_offset(&*adapter, &pin, container.as_ref(), align);
                    if edges.right < 0.0 {
                        first.x += edges.right;
                    }
                }
                first_position = Some(first);
            }
        }

        let first = first_position.unwrap_or_default();
        let clamped = Point::new(
            make_in_viewport(&*adapter, &pin, first.x, Axis::Left, pin_fixed),
            make_in_viewport(&*adapter, &pin, first.y, Axis::Top, pin_fixed),
        );
        let align = expected[0];
        let offset = autofit::pin_offset(&*adapter, &config, &pin, container.as_ref(), align);
        write_position(adapter, &pin, clamped, offset, config.is_rtl)?;

        log::debug!(
            "no alignment fits {:?}, clamped {} to {:?}",
            pin,
            align,
            clamped
        );
        Ok(Some(Placement {
            align,
            outcome: PlacementOutcome::Clamped,
            position: clamped,
            offset,
        }))
    }
}

fn is_attached<A: GeometryAdapter>(adapter: &A, element: &A::Element) -> bool {
    *element == adapter.document_element()
        || *element == adapter.body()
        || adapter.parent_node(element).is_some()
}

/// Pin position for one candidate, relative to the pin's offset parent.
fn candidate_position<A: GeometryAdapter>(
    adapter: &A,
    config: &PlacementConfig<A::Element>,
    pin: &A::Element,
    align: AlignPair,
    policy: ScrollPolicy,
) -> Point {
    let pin_target = Target::Element(pin.clone());
    let pin_points = AnchorPoints::resolve(adapter, &pin_target, align.pin, policy.pin_fixed);
    let base_points =
        AnchorPoints::resolve(adapter, &config.base, align.base, policy.ignores_base_offset());

    let base_offset = match (policy.base_offset_source(), config.base.element()) {
        (BaseOffsetSource::FixedStyle, Some(base)) => styled_left_top(adapter, base),
        _ => base_points.offset(adapter, policy.ignores_page_scroll()),
    };
    let parent = parent_offset(adapter, pin).offset;
    let parent_scroll = parent_scroll_offset(adapter, pin);

    base_offset + base_points.anchor - parent - pin_points.anchor + parent_scroll
}

/// Place `config.pin` against `config.base` and return the alignment used.
///
/// `Ok(None)` means nothing was placed: the pin is the viewport or there is
/// no document.
pub fn place<A: GeometryAdapter>(
    adapter: &mut A,
    config: PlacementConfig<A::Element>,
) -> Result<Option<AlignPair>, PositionError> {
    Ok(place_with_report(adapter, config)?.map(|placement| placement.align))
}

/// Like [`place`], also reporting whether the alignment fitted or was
/// clamped.
pub fn place_with_report<A: GeometryAdapter>(
    adapter: &mut A,
    config: PlacementConfig<A::Element>,
) -> Result<Option<Placement>, PositionError> {
    Position::new(adapter, config).set_position()
}
