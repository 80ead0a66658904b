//! The geometry capability set the placement engine consumes.

use std::fmt;

use overlay_core::{GeometryError, Point, PositionKind, Rect, Size};

/// Either a real element or the viewport sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum Target<E> {
    /// The visible window/document.
    Viewport,
    Element(E),
}

impl<E> Target<E> {
    pub fn is_viewport(&self) -> bool {
        matches!(self, Target::Viewport)
    }

    pub fn element(&self) -> Option<&E> {
        match self {
            Target::Viewport => None,
            Target::Element(element) => Some(element),
        }
    }
}

impl<E> From<E> for Target<E> {
    fn from(element: E) -> Self {
        Target::Element(element)
    }
}

/// Style properties the engine reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Position,
    Left,
    Right,
    Top,
    BorderTopWidth,
    BorderLeftWidth,
}

impl StyleProperty {
    /// CSS property name.
    pub fn css_name(&self) -> &'static str {
        match self {
            StyleProperty::Position => "position",
            StyleProperty::Left => "left",
            StyleProperty::Right => "right",
            StyleProperty::Top => "top",
            StyleProperty::BorderTopWidth => "border-top-width",
            StyleProperty::BorderLeftWidth => "border-left-width",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// A value written to a style property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    Px(f64),
    Auto,
    Position(PositionKind),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Px(value) => write!(f, "{}px", value),
            StyleValue::Auto => f.write_str("auto"),
            StyleValue::Position(kind) => f.write_str(kind.as_css()),
        }
    }
}

/// Read and write access to a laid-out document.
///
/// Readers follow DOM semantics: rects from [`bounding_client_rect`] are
/// viewport-relative, [`offset_origin`] is relative to the offset parent and
/// ignores scrolling, lengths that cannot be read come back as NaN.
///
/// [`bounding_client_rect`]: GeometryAdapter::bounding_client_rect
/// [`offset_origin`]: GeometryAdapter::offset_origin
pub trait GeometryAdapter {
    /// Handle to an element. Handles compare equal when they name the same node.
    type Element: Clone + PartialEq + fmt::Debug;

    /// Whether a document is available at all. Without one the engine
    /// performs no reads and no writes.
    fn has_document(&self) -> bool {
        true
    }

    /// The root element (`<html>`).
    fn document_element(&self) -> Self::Element;

    /// The `<body>` element.
    fn body(&self) -> Self::Element;

    fn parent_node(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Nearest positioned ancestor, body for unpositioned chains, `None` for
    /// fixed elements and the root.
    fn offset_parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Computed `position`.
    fn position(&self, element: &Self::Element) -> PositionKind;

    /// Computed length of a property in pixels, NaN when not a length.
    fn computed_length(&self, element: &Self::Element, property: StyleProperty) -> f64;

    fn bounding_client_rect(&self, element: &Self::Element) -> Rect;

    /// Layout box size (`offsetWidth`/`offsetHeight`); `None` for elements
    /// without one, such as SVG nodes.
    fn offset_size(&self, element: &Self::Element) -> Option<Size>;

    /// `offsetLeft`/`offsetTop`.
    fn offset_origin(&self, element: &Self::Element) -> Point;

    /// `scrollLeft`/`scrollTop`.
    fn scroll_offset(&self, element: &Self::Element) -> Point;

    /// `clientWidth`/`clientHeight`.
    fn client_size(&self, element: &Self::Element) -> Size;

    /// `clientLeft`/`clientTop`.
    fn client_origin(&self, element: &Self::Element) -> Point;

    /// Page scroll (`pageXOffset`/`pageYOffset`).
    fn page_offset(&self) -> Point;

    /// Write inline styles, in order.
    fn set_styles(
        &mut self,
        element: &Self::Element,
        styles: &[(StyleProperty, StyleValue)],
    ) -> Result<(), GeometryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_value_display() {
        assert_eq!(StyleValue::Px(12.5).to_string(), "12.5px");
        assert_eq!(StyleValue::Px(-3.0).to_string(), "-3px");
        assert_eq!(StyleValue::Auto.to_string(), "auto");
        assert_eq!(StyleValue::Position(PositionKind::Absolute).to_string(), "absolute");
    }

    #[test]
    fn test_target() {
        let target: Target<u32> = 7.into();
        assert_eq!(target.element(), Some(&7));
        assert!(!target.is_viewport());
        assert!(Target::<u32>::Viewport.element().is_none());
    }
}
