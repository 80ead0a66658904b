//! Writing the computed position back to the pin.

use overlay_core::{GeometryError, Offset, Point};
use overlay_geometry::{GeometryAdapter, StyleProperty, StyleValue};

use crate::coords::{parent_offset, size_of};

/// `right` value equivalent to a `left` value inside a parent of the given
/// width.
pub(crate) fn right_from_left(parent_width: f64, left: f64, width: f64) -> f64 {
    parent_width - (left + width)
}

/// Write `position` plus `offset` to the pin.
///
/// Left-to-right layouts get `left`/`top`. Right-to-left layouts get the
/// equivalent `right`/`top` with `left: auto`, so the pin keeps its distance
/// from the right edge when the parent resizes.
pub(crate) fn write_position<A: GeometryAdapter>(
    adapter: &mut A,
    pin: &A::Element,
    position: Point,
    offset: Offset,
    is_rtl: bool,
) -> Result<(), GeometryError> {
    let top = StyleValue::Px(position.y + offset.dy);
    if !is_rtl {
        return adapter.set_styles(
            pin,
            &[
                (StyleProperty::Left, StyleValue::Px(position.x + offset.dx)),
                (StyleProperty::Top, top),
            ],
        );
    }

    let parent = parent_offset(adapter, pin).parent;
    let parent_width = size_of(adapter, &parent).width;
    let width = size_of(adapter, pin).width;
    let right = right_from_left(parent_width, position.x, width);

    adapter.set_styles(
        pin,
        &[
            (StyleProperty::Left, StyleValue::Auto),
            (StyleProperty::Right, StyleValue::Px(right + offset.dx)),
            (StyleProperty::Top, top),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlay_core::{Rect, Size};
    use overlay_geometry::{NodeId, Snapshot, SnapshotNode};

    #[test]
    fn test_right_from_left() {
        assert_eq!(right_from_left(500.0, 50.0, 100.0), 350.0);
        assert_eq!(right_from_left(500.0, 400.0, 100.0), 0.0);
    }

    fn doc_with_pin() -> (Snapshot, NodeId) {
        let mut doc = Snapshot::new(Size::new(800.0, 600.0));
        let body = doc.body_id();
        let pin = doc.add(body, SnapshotNode::new(Rect::new(0.0, 0.0, 100.0, 10.0)));
        (doc, pin)
    }

    #[test]
    fn test_ltr_write() {
        let (mut doc, pin) = doc_with_pin();
        write_position(&mut doc, &pin, Point::new(50.0, 20.0), Offset::new(1.0, 2.0), false)
            .unwrap();

        assert_eq!(doc.style(pin, StyleProperty::Left), Some(StyleValue::Px(51.0)));
        assert_eq!(doc.style(pin, StyleProperty::Top), Some(StyleValue::Px(22.0)));
        assert_eq!(doc.style(pin, StyleProperty::Right), None);
    }

    #[test]
    fn test_rtl_write() {
        let (mut doc, pin) = doc_with_pin();
        write_position(&mut doc, &pin, Point::new(50.0, 20.0), Offset::new(5.0, 0.0), true)
            .unwrap();

        // body is 800 wide: 800 - (50 + 100) + 5
        assert_eq!(doc.style(pin, StyleProperty::Left), Some(StyleValue::Auto));
        assert_eq!(doc.style(pin, StyleProperty::Right), Some(StyleValue::Px(655.0)));
        assert_eq!(doc.style(pin, StyleProperty::Top), Some(StyleValue::Px(20.0)));
    }

    #[test]
    fn test_write_to_unknown_pin_fails() {
        let mut doc = Snapshot::new(Size::new(800.0, 600.0));
        let result = write_position(&mut doc, &NodeId(42), Point::ZERO, Offset::ZERO, false);
        assert!(result.is_err());
    }
}
