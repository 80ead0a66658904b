//! Geometry adapter over the live DOM.

use overlay_core::{parse_px, GeometryError, Point, PositionKind, Rect, Size};
use overlay_geometry::{GeometryAdapter, StyleProperty, StyleValue};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Element, HtmlElement, SvgElement, Window};

/// Reads layout from the browser and writes inline styles.
pub struct DomAdapter {
    window: Window,
    root: Element,
    body: Element,
}

impl DomAdapter {
    /// Bind to the current window. `None` outside a browser document
    /// (workers, server-side rendering).
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let root = document.document_element()?;
        let body = document.body()?.into();
        Some(Self { window, root, body })
    }

    fn computed_style(&self, element: &Element) -> Option<CssStyleDeclaration> {
        self.window.get_computed_style(element).ok().flatten()
    }

    fn computed_value(&self, element: &Element, property: &str) -> Option<String> {
        self.computed_style(element)?.get_property_value(property).ok()
    }
}

fn html(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

/// Inline style of an HTML or SVG element.
fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    html(element)
        .map(HtmlElement::style)
        .or_else(|| element.dyn_ref::<SvgElement>().map(SvgElement::style))
}

impl GeometryAdapter for DomAdapter {
    type Element = Element;

    fn document_element(&self) -> Element {
        self.root.clone()
    }

    fn body(&self) -> Element {
        self.body.clone()
    }

    fn parent_node(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn offset_parent(&self, element: &Element) -> Option<Element> {
        html(element)?.offset_parent()
    }

    fn position(&self, element: &Element) -> PositionKind {
        self.computed_value(element, "position")
            .map(|value| PositionKind::from_css(&value))
            .unwrap_or_default()
    }

    fn computed_length(&self, element: &Element, property: StyleProperty) -> f64 {
        self.computed_value(element, property.css_name())
            .map_or(f64::NAN, |value| parse_px(&value))
    }

    fn bounding_client_rect(&self, element: &Element) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
    }

    fn offset_size(&self, element: &Element) -> Option<Size> {
        let element = html(element)?;
        Some(Size::new(
            element.offset_width() as f64,
            element.offset_height() as f64,
        ))
    }

    fn offset_origin(&self, element: &Element) -> Point {
        match html(element) {
            Some(element) => Point::new(element.offset_left() as f64, element.offset_top() as f64),
            None => Point::new(f64::NAN, f64::NAN),
        }
    }

    fn scroll_offset(&self, element: &Element) -> Point {
        Point::new(element.scroll_left() as f64, element.scroll_top() as f64)
    }

    fn client_size(&self, element: &Element) -> Size {
        Size::new(element.client_width() as f64, element.client_height() as f64)
    }

    fn client_origin(&self, element: &Element) -> Point {
        Point::new(element.client_left() as f64, element.client_top() as f64)
    }

    fn page_offset(&self) -> Point {
        let root = self.scroll_offset(&self.root);
        let x = self.window.page_x_offset().unwrap_or(0.0);
        let y = self.window.page_y_offset().unwrap_or(0.0);
        Point::new(
            if x != 0.0 { x } else { root.x },
            if y != 0.0 { y } else { root.y },
        )
    }

    fn set_styles(
        &mut self,
        element: &Element,
        styles: &[(StyleProperty, StyleValue)],
    ) -> Result<(), GeometryError> {
        let style = inline_style(element).ok_or_else(|| GeometryError::StyleWrite {
            property: styles
                .first()
                .map(|(property, _)| property.css_name().to_string())
                .unwrap_or_default(),
            reason: "element has no inline style".to_string(),
        })?;

        for (property, value) in styles {
            style
                .set_property(property.css_name(), &value.to_string())
                .map_err(|err| GeometryError::StyleWrite {
                    property: property.css_name().to_string(),
                    reason: format!("{:?}", err),
                })?;
        }
        Ok(())
    }
}
