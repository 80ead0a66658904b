//! In-memory layout snapshots.
//!
//! A [`Snapshot`] is a tiny box tree with fixed rectangles. It answers the
//! same questions a browser would (offset parents, client rects, scroll
//! offsets) and re-derives element positions from written `left`, `right`
//! and `top` styles, so a placement can be checked end to end.
//!
//! Model:
//! - The root (`<html>`) and `<body>` sit at the document origin and span the
//!   viewport. Page scroll is stored on the snapshot, not on either node.
//! - In-flow nodes are placed at `origin` relative to their parent's padding
//!   box, shifted by the parent's scroll.
//! - Absolute nodes are placed by their styles relative to the nearest
//!   positioned ancestor (or the document origin), falling back to `origin`.
//! - Fixed nodes are placed relative to the viewport and ignore all scrolling.
//! - Borders are symmetric: `border` gives the left and top widths and the
//!   right and bottom widths match them.

use indexmap::IndexMap;
use overlay_core::{GeometryError, Point, PositionKind, Rect, Size};

use crate::adapter::{GeometryAdapter, StyleProperty, StyleValue};

/// Unique identifier for a snapshot node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// A box in a snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotNode {
    /// Border-box origin relative to the parent's padding box
    /// (relative to the viewport for fixed nodes)
    pub origin: Point,
    /// Border-box size
    pub size: Size,
    /// Computed `position` before any style writes
    pub position: PositionKind,
    /// Left and top border widths
    pub border: Point,
    /// Scroll offset of this node's content
    pub scroll: Point,
    /// Whether the node has a layout box size (false for SVG-like nodes)
    pub has_offset_size: bool,
    parent: Option<NodeId>,
    styles: IndexMap<StyleProperty, StyleValue>,
}

impl SnapshotNode {
    /// Create a static node with the given origin and size.
    pub fn new(bounds: Rect) -> Self {
        Self {
            origin: bounds.origin(),
            size: bounds.size(),
            position: PositionKind::Static,
            border: Point::ZERO,
            scroll: Point::ZERO,
            has_offset_size: true,
            parent: None,
            styles: IndexMap::new(),
        }
    }

    /// Set the computed position.
    pub fn with_position(mut self, position: PositionKind) -> Self {
        self.position = position;
        self
    }

    /// Set the content scroll offset.
    pub fn with_scroll(mut self, left: f64, top: f64) -> Self {
        self.scroll = Point::new(left, top);
        self
    }

    /// Set the border widths.
    pub fn with_border(mut self, top: f64, left: f64) -> Self {
        self.border = Point::new(left, top);
        self
    }

    /// Report no layout box size, forcing readers onto the bounding rect.
    pub fn without_offset_size(mut self) -> Self {
        self.has_offset_size = false;
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    fn styled_px(&self, property: StyleProperty) -> Option<f64> {
        match self.styles.get(&property) {
            Some(StyleValue::Px(value)) => Some(*value),
            _ => None,
        }
    }

    fn client_size(&self) -> Size {
        Size::new(
            self.size.width - 2.0 * self.border.x,
            self.size.height - 2.0 * self.border.y,
        )
    }
}

/// An in-memory layout document.
#[derive(Debug, Clone)]
pub struct Snapshot {
    nodes: IndexMap<NodeId, SnapshotNode>,
    root: NodeId,
    body: NodeId,
    viewport: Size,
    page_scroll: Point,
    attached: bool,
    next_id: u64,
}

impl Snapshot {
    /// Create a document whose viewport has the given size.
    pub fn new(viewport: Size) -> Self {
        let root = NodeId(0);
        let body = NodeId(1);
        let page = Rect::from_origin(Point::ZERO, viewport);

        let mut nodes = IndexMap::new();
        nodes.insert(root, SnapshotNode::new(page));
        let mut body_node = SnapshotNode::new(page);
        body_node.parent = Some(root);
        nodes.insert(body, body_node);

        Self {
            nodes,
            root,
            body,
            viewport,
            page_scroll: Point::ZERO,
            attached: true,
            next_id: 2,
        }
    }

    /// Create a snapshot that reports no document, as in a non-interactive
    /// rendering context.
    pub fn detached(viewport: Size) -> Self {
        Self {
            attached: false,
            ..Self::new(viewport)
        }
    }

    /// Set the page scroll.
    pub fn with_page_scroll(mut self, left: f64, top: f64) -> Self {
        self.page_scroll = Point::new(left, top);
        self
    }

    pub fn set_page_scroll(&mut self, scroll: Point) {
        self.page_scroll = scroll;
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn body_id(&self) -> NodeId {
        self.body
    }

    /// Add a node under `parent`.
    pub fn add(&mut self, parent: NodeId, mut node: SnapshotNode) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        node.parent = Some(parent);
        self.nodes.insert(id, node);
        id
    }

    /// Change a node's computed position (e.g. to make `<body>` relative).
    pub fn set_position(&mut self, id: NodeId, position: PositionKind) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.position = position;
        }
    }

    /// The last value written to a style property, if any.
    pub fn style(&self, id: NodeId, property: StyleProperty) -> Option<StyleValue> {
        self.nodes.get(&id)?.styles.get(&property).copied()
    }

    fn is_document_node(&self, id: NodeId) -> bool {
        id == self.root || id == self.body
    }

    fn effective_position(&self, id: NodeId) -> PositionKind {
        match self.nodes.get(&id) {
            Some(node) => match node.styles.get(&StyleProperty::Position) {
                Some(StyleValue::Position(kind)) => *kind,
                _ => node.position,
            },
            None => PositionKind::Static,
        }
    }

    /// Nearest positioned ancestor; `None` stands for the document origin.
    fn containing_block(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.nodes.get(&id)?.parent;
        while let Some(ancestor) = current {
            if ancestor == self.root {
                return None;
            }
            if self.effective_position(ancestor).is_positioned() {
                return Some(ancestor);
            }
            current = self.nodes.get(&ancestor)?.parent;
        }
        None
    }

    /// Padding-box origin and client size of a containing block.
    fn padding_box(&self, block: Option<NodeId>, scrolled: bool) -> (Point, Size) {
        let Some(id) = block else {
            return (Point::ZERO, self.viewport);
        };
        let Some(node) = self.nodes.get(&id) else {
            return (Point::ZERO, self.viewport);
        };
        let mut origin = self.origin(id, scrolled) + node.border;
        if scrolled && !self.is_document_node(id) {
            origin = origin - node.scroll;
        }
        (origin, node.client_size())
    }

    /// Border-box origin in document coordinates. With `scrolled` the
    /// scroll offsets of ancestors are applied (what is painted), without it
    /// they are ignored (what offsetLeft/offsetTop report).
    fn origin(&self, id: NodeId, scrolled: bool) -> Point {
        if self.is_document_node(id) {
            return Point::ZERO;
        }
        let Some(node) = self.nodes.get(&id) else {
            return Point::ZERO;
        };

        match self.effective_position(id) {
            PositionKind::Fixed => self.page_scroll + self.styled_origin(node, self.viewport),
            PositionKind::Absolute => {
                let (base, client) = self.padding_box(self.containing_block(id), scrolled);
                base + self.styled_origin(node, client)
            }
            _ => {
                let parent = node.parent.unwrap_or(self.body);
                let (base, _) = self.padding_box(Some(parent), scrolled);
                base + node.origin
            }
        }
    }

    /// Origin inside the containing block from `left`/`right`/`top` styles.
    fn styled_origin(&self, node: &SnapshotNode, block: Size) -> Point {
        let x = match (
            node.styled_px(StyleProperty::Left),
            node.styled_px(StyleProperty::Right),
        ) {
            (Some(left), _) => left,
            (None, Some(right)) => block.width - right - node.size.width,
            (None, None) => node.origin.x,
        };
        let y = node.styled_px(StyleProperty::Top).unwrap_or(node.origin.y);
        Point::new(x, y)
    }
}

impl GeometryAdapter for Snapshot {
    type Element = NodeId;

    fn has_document(&self) -> bool {
        self.attached
    }

    fn document_element(&self) -> NodeId {
        self.root
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn parent_node(&self, element: &NodeId) -> Option<NodeId> {
        self.nodes.get(element)?.parent
    }

    fn offset_parent(&self, element: &NodeId) -> Option<NodeId> {
        if self.is_document_node(*element) || !self.nodes.contains_key(element) {
            return None;
        }
        if self.effective_position(*element) == PositionKind::Fixed {
            return None;
        }
        Some(self.containing_block(*element).unwrap_or(self.body))
    }

    fn position(&self, element: &NodeId) -> PositionKind {
        self.effective_position(*element)
    }

    fn computed_length(&self, element: &NodeId, property: StyleProperty) -> f64 {
        let Some(node) = self.nodes.get(element) else {
            return f64::NAN;
        };
        match property {
            StyleProperty::BorderTopWidth => node.border.y,
            StyleProperty::BorderLeftWidth => node.border.x,
            StyleProperty::Position => f64::NAN,
            StyleProperty::Left | StyleProperty::Top | StyleProperty::Right => {
                match node.styles.get(&property) {
                    Some(StyleValue::Px(value)) => *value,
                    Some(_) => f64::NAN,
                    None => {
                        let positioned = matches!(
                            self.effective_position(*element),
                            PositionKind::Absolute | PositionKind::Fixed
                        );
                        match property {
                            StyleProperty::Left if positioned => node.origin.x,
                            StyleProperty::Top if positioned => node.origin.y,
                            _ => f64::NAN,
                        }
                    }
                }
            }
        }
    }

    fn bounding_client_rect(&self, element: &NodeId) -> Rect {
        let Some(node) = self.nodes.get(element) else {
            return Rect::default();
        };
        let origin = self.origin(*element, true) - self.page_scroll;
        Rect::from_origin(origin, node.size)
    }

    fn offset_size(&self, element: &NodeId) -> Option<Size> {
        self.nodes
            .get(element)
            .filter(|node| node.has_offset_size)
            .map(|node| node.size)
    }

    fn offset_origin(&self, element: &NodeId) -> Point {
        if self.is_document_node(*element) {
            return Point::ZERO;
        }
        let origin = self.origin(*element, false);
        match self.offset_parent(element) {
            Some(parent) if parent != self.body => {
                let border = self
                    .nodes
                    .get(&parent)
                    .map(|node| node.border)
                    .unwrap_or_default();
                origin - (self.origin(parent, false) + border)
            }
            _ => origin,
        }
    }

    fn scroll_offset(&self, element: &NodeId) -> Point {
        if *element == self.root {
            return self.page_scroll;
        }
        if *element == self.body {
            return Point::ZERO;
        }
        self.nodes
            .get(element)
            .map(|node| node.scroll)
            .unwrap_or_default()
    }

    fn client_size(&self, element: &NodeId) -> Size {
        if *element == self.root {
            return self.viewport;
        }
        self.nodes
            .get(element)
            .map(SnapshotNode::client_size)
            .unwrap_or_default()
    }

    fn client_origin(&self, element: &NodeId) -> Point {
        if *element == self.root {
            return Point::ZERO;
        }
        self.nodes
            .get(element)
            .map(|node| node.border)
            .unwrap_or_default()
    }

    fn page_offset(&self) -> Point {
        self.page_scroll
    }

    fn set_styles(
        &mut self,
        element: &NodeId,
        styles: &[(StyleProperty, StyleValue)],
    ) -> Result<(), GeometryError> {
        let node = self
            .nodes
            .get_mut(element)
            .ok_or_else(|| GeometryError::UnknownElement {
                id: format!("{:?}", element),
            })?;
        for (property, value) in styles {
            log::trace!("snapshot: {:?} {}: {}", element, property, value);
            node.styles.insert(*property, *value);
        }
        Ok(())
    }
}
