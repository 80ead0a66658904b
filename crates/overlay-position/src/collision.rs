//! Containment checks and the clamped fallback.

use overlay_core::{AlignPair, PositionKind, Size};
use overlay_geometry::GeometryAdapter;

use crate::coords::{element_rect, viewport_size};

/// Distance from each container edge to the pin. Negative values overflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    fn fits_vertically(&self) -> bool {
        self.top >= 0.0 && self.bottom >= 0.0
    }

    fn fits_horizontally(&self) -> bool {
        self.left >= 0.0 && self.right >= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Left,
    Top,
}

/// Usable container size for `align`. Browsers report an exactly flush
/// right or bottom edge inconsistently, so the limit shrinks by one pixel
/// unless the pin is meant to line up with that edge.
fn effective_viewport(viewport: Size, align: AlignPair) -> Size {
    Size::new(
        if align.is_right_aligned() {
            viewport.width
        } else {
            viewport.width - 1.0
        },
        if align.is_bottom_aligned() {
            viewport.height
        } else {
            viewport.height - 1.0
        },
    )
}

/// Whether the pin, as currently laid out, fits inside the container.
/// With `auto_fit` only the vertical extent is checked.
pub(crate) fn is_in_viewport<A: GeometryAdapter>(
    adapter: &A,
    pin: &A::Element,
    container: Option<&A::Element>,
    align: AlignPair,
    auto_fit: bool,
) -> bool {
    let edges = viewport_offset(adapter, pin, container, align);
    if auto_fit {
        return edges.fits_vertically();
    }
    edges.fits_horizontally() && edges.fits_vertically()
}

pub(crate) fn viewport_offset<A: GeometryAdapter>(
    adapter: &A,
    pin: &A::Element,
    container: Option<&A::Element>,
    align: AlignPair,
) -> Edges {
    let viewport = effective_viewport(viewport_size(adapter, container), align);
    let rect = element_rect(adapter, pin, container);

    Edges {
        top: rect.top,
        right: viewport.width - rect.right(),
        bottom: viewport.height - rect.bottom(),
        left: rect.left,
    }
}

/// Pull a negative coordinate back into view.
///
/// A fixed pin is clamped to zero. A pin laid out against a static body is
/// moved to the current document scroll. Other pins keep their value since
/// their offset parent already scrolls with them.
pub(crate) fn make_in_viewport<A: GeometryAdapter>(
    adapter: &A,
    pin: &A::Element,
    value: f64,
    axis: Axis,
    pin_fixed: bool,
) -> f64 {
    if value >= 0.0 || value.is_nan() {
        return value;
    }
    if pin_fixed {
        return 0.0;
    }

    let body = adapter.body();
    let offset_parent = adapter
        .offset_parent(pin)
        .unwrap_or_else(|| adapter.document_element());
    if offset_parent != body || adapter.position(&body) != PositionKind::Static {
        return value;
    }

    let root = adapter.scroll_offset(&adapter.document_element()).sanitized();
    let body_scroll = adapter.scroll_offset(&body).sanitized();
    match axis {
        Axis::Left => root.x.max(body_scroll.x),
        Axis::Top => root.y.max(body_scroll.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlay_core::Rect;
    use overlay_geometry::{NodeId, Snapshot, SnapshotNode};

    fn align(s: &str) -> AlignPair {
        s.parse().unwrap()
    }

    fn doc_with_pin(bounds: Rect) -> (Snapshot, NodeId) {
        let mut doc = Snapshot::new(Size::new(800.0, 600.0));
        let body = doc.body_id();
        let pin = doc.add(body, SnapshotNode::new(bounds));
        (doc, pin)
    }

    #[test]
    fn test_inside() {
        let (doc, pin) = doc_with_pin(Rect::new(100.0, 100.0, 50.0, 20.0));
        let body = doc.body_id();
        assert!(is_in_viewport(&doc, &pin, Some(&body), align("tl bl"), false));
    }

    #[test]
    fn test_flush_right_edge_needs_right_alignment() {
        // Right edge lands exactly on 800.
        let (doc, pin) = doc_with_pin(Rect::new(750.0, 100.0, 50.0, 20.0));
        let body = doc.body_id();
        assert!(!is_in_viewport(&doc, &pin, Some(&body), align("tl bl"), false));
        assert!(is_in_viewport(&doc, &pin, Some(&body), align("tr br"), false));
    }

    #[test]
    fn test_flush_bottom_edge_needs_bottom_alignment() {
        let (doc, pin) = doc_with_pin(Rect::new(100.0, 580.0, 50.0, 20.0));
        let body = doc.body_id();
        assert!(!is_in_viewport(&doc, &pin, Some(&body), align("tl tl"), false));
        assert!(is_in_viewport(&doc, &pin, Some(&body), align("bl bl"), false));
    }

    #[test]
    fn test_auto_fit_ignores_horizontal_overflow() {
        let (doc, pin) = doc_with_pin(Rect::new(-40.0, 100.0, 50.0, 20.0));
        let body = doc.body_id();
        assert!(!is_in_viewport(&doc, &pin, Some(&body), align("tl bl"), false));
        assert!(is_in_viewport(&doc, &pin, Some(&body), align("tl bl"), true));
    }

    #[test]
    fn test_viewport_offset_edges() {
        let (doc, pin) = doc_with_pin(Rect::new(780.0, 10.0, 50.0, 20.0));
        let body = doc.body_id();
        let edges = viewport_offset(&doc, &pin, Some(&body), align("tl bl"));
        assert_eq!(edges.left, 780.0);
        assert_eq!(edges.top, 10.0);
        // 799 - 830
        assert_eq!(edges.right, -31.0);
        // 599 - 30
        assert_eq!(edges.bottom, 569.0);
    }

    #[test]
    fn test_make_in_viewport_static_body() {
        let (mut doc, pin) = doc_with_pin(Rect::new(0.0, 0.0, 50.0, 20.0));
        assert_eq!(make_in_viewport(&doc, &pin, -10.0, Axis::Left, false), 0.0);
        assert_eq!(make_in_viewport(&doc, &pin, 25.0, Axis::Left, false), 25.0);

        doc.set_page_scroll(overlay_core::Point::new(0.0, 300.0));
        assert_eq!(make_in_viewport(&doc, &pin, -10.0, Axis::Top, false), 300.0);
    }

    #[test]
    fn test_make_in_viewport_fixed_pin() {
        let (doc, pin) = doc_with_pin(Rect::new(0.0, 0.0, 50.0, 20.0));
        assert_eq!(make_in_viewport(&doc, &pin, -10.0, Axis::Top, true), 0.0);
    }

    #[test]
    fn test_make_in_viewport_keeps_value_in_positioned_parent() {
        let mut doc = Snapshot::new(Size::new(800.0, 600.0));
        let body = doc.body_id();
        let panel = doc.add(
            body,
            SnapshotNode::new(Rect::new(100.0, 100.0, 300.0, 300.0))
                .with_position(PositionKind::Relative),
        );
        let pin = doc.add(panel, SnapshotNode::new(Rect::new(0.0, 0.0, 50.0, 20.0)));
        assert_eq!(make_in_viewport(&doc, &pin, -10.0, Axis::Left, false), -10.0);
    }
}
