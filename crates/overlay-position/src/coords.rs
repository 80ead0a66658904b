//! Coordinate resolution.
//!
//! Turns an element (or the viewport) plus an alignment code into an anchor
//! point inside the element and an origin in page coordinates.

use overlay_core::{finite_or_zero, AlignCode, Point, PositionKind, Rect, Size};
use overlay_geometry::{GeometryAdapter, StyleProperty, Target};

/// First non-zero reading, as in `a || b || 0`.
fn first_nonzero(a: f64, b: f64) -> f64 {
    let a = finite_or_zero(a);
    if a != 0.0 {
        a
    } else {
        finite_or_zero(b)
    }
}

/// Rendered size of an element. Elements without a layout box (SVG) fall
/// back to their bounding rect.
pub(crate) fn size_of<A: GeometryAdapter>(adapter: &A, element: &A::Element) -> Size {
    adapter
        .offset_size(element)
        .unwrap_or_else(|| adapter.bounding_client_rect(element).size())
}

fn target_size<A: GeometryAdapter>(adapter: &A, target: &Target<A::Element>) -> Size {
    match target {
        Target::Viewport => adapter.client_size(&adapter.document_element()),
        Target::Element(element) => size_of(adapter, element),
    }
}

/// Document scroll as reported by the root, or the body when the root
/// reports none.
pub(crate) fn document_scroll<A: GeometryAdapter>(adapter: &A) -> Point {
    let root = adapter.scroll_offset(&adapter.document_element());
    let body = adapter.scroll_offset(&adapter.body());
    Point::new(first_nonzero(root.x, body.x), first_nonzero(root.y, body.y))
}

/// Page coordinates of an element's border box. With `ignore_scroll` the
/// result stays viewport-relative, which is what fixed contexts need.
pub(crate) fn element_offset<A: GeometryAdapter>(
    adapter: &A,
    element: &A::Element,
    ignore_scroll: bool,
) -> Point {
    let rect = adapter.bounding_client_rect(element);
    let root = adapter.client_origin(&adapter.document_element());
    let body = adapter.client_origin(&adapter.body());
    let client = Point::new(first_nonzero(root.x, body.x), first_nonzero(root.y, body.y));
    let scroll = if ignore_scroll {
        Point::ZERO
    } else {
        adapter.page_offset().sanitized()
    };

    rect.origin().sanitized() + scroll - client
}

/// `left`/`top` styles of an element, zero when unset.
pub(crate) fn styled_left_top<A: GeometryAdapter>(adapter: &A, element: &A::Element) -> Point {
    Point::new(
        finite_or_zero(adapter.computed_length(element, StyleProperty::Left)),
        finite_or_zero(adapter.computed_length(element, StyleProperty::Top)),
    )
}

/// Rect of `element` relative to `container`.
///
/// Walks the offset-parent chain up to the container, undoing the scroll of
/// every offset parent except the body. When the container is the body (or
/// missing) the frame is the viewport and document scroll is removed too.
pub(crate) fn element_rect<A: GeometryAdapter>(
    adapter: &A,
    element: &A::Element,
    container: Option<&A::Element>,
) -> Rect {
    let size = size_of(adapter, element);
    let body = adapter.body();

    let mut offset = Point::ZERO;
    let mut scroll = Point::ZERO;
    let mut current = Some(element.clone());
    while let Some(node) = current {
        offset = offset + adapter.offset_origin(&node).sanitized();
        let parent = adapter.offset_parent(&node);
        if let Some(parent) = &parent {
            if *parent != body {
                scroll = scroll + adapter.scroll_offset(parent).sanitized();
            }
        }
        current = parent.filter(|parent| container != Some(parent));
    }

    let treat_as_window = container.map_or(true, |container| *container == body);
    let window_scroll = if treat_as_window {
        document_scroll(adapter)
    } else {
        Point::ZERO
    };

    Rect::from_origin(offset - scroll - window_scroll, size)
}

/// Visible size of the container. The body (or no container) means the
/// viewport.
pub(crate) fn viewport_size<A: GeometryAdapter>(
    adapter: &A,
    container: Option<&A::Element>,
) -> Size {
    let body = adapter.body();
    match container {
        Some(container) if *container != body => adapter.bounding_client_rect(container).size(),
        _ => adapter.client_size(&adapter.document_element()),
    }
}

/// Offset of the pin's positioning parent, including its borders.
pub(crate) struct ParentOffset<E> {
    pub offset: Point,
    pub parent: E,
}

pub(crate) fn parent_offset<A: GeometryAdapter>(
    adapter: &A,
    element: &A::Element,
) -> ParentOffset<A::Element> {
    let parent = adapter
        .offset_parent(element)
        .unwrap_or_else(|| adapter.document_element());

    let static_body =
        parent == adapter.body() && adapter.position(&parent) == PositionKind::Static;
    let origin = if static_body {
        Point::ZERO
    } else {
        element_offset(adapter, &parent, false)
    };
    let border = Point::new(
        finite_or_zero(adapter.computed_length(&parent, StyleProperty::BorderLeftWidth)),
        finite_or_zero(adapter.computed_length(&parent, StyleProperty::BorderTopWidth)),
    );

    ParentOffset {
        offset: origin + border,
        parent,
    }
}

/// Scroll of the pin's offset parent. Body scroll is already part of page
/// coordinates and is not counted.
pub(crate) fn parent_scroll_offset<A: GeometryAdapter>(adapter: &A, element: &A::Element) -> Point {
    match adapter.offset_parent(element) {
        Some(parent) if parent != adapter.body() => adapter.scroll_offset(&parent).sanitized(),
        _ => Point::ZERO,
    }
}

/// Anchor point of an alignment code on a target, plus how to find the
/// target's origin.
pub(crate) struct AnchorPoints<'t, E> {
    target: &'t Target<E>,
    ignore_element_offset: bool,
    /// Anchor relative to the target's own box
    pub anchor: Point,
}

impl<'t, E: Clone + PartialEq> AnchorPoints<'t, E> {
    pub fn resolve<A>(
        adapter: &A,
        target: &'t Target<E>,
        code: AlignCode,
        ignore_element_offset: bool,
    ) -> Self
    where
        A: GeometryAdapter<Element = E>,
    {
        let anchor = code.anchor(target_size(adapter, target)).sanitized();
        Self {
            target,
            ignore_element_offset,
            anchor,
        }
    }

    /// Origin of the target in page coordinates.
    pub fn offset<A>(&self, adapter: &A, ignore_scroll: bool) -> Point
    where
        A: GeometryAdapter<Element = E>,
    {
        if self.ignore_element_offset {
            return Point::ZERO;
        }
        match self.target {
            Target::Viewport => adapter.page_offset().sanitized(),
            Target::Element(element) => element_offset(adapter, element, ignore_scroll),
        }
    }
}
