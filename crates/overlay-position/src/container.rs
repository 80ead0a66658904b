//! Container resolution.

use overlay_core::PositionKind;
use overlay_geometry::{GeometryAdapter, Target};

use crate::config::ContainerSource;

/// Find the reference container for collision checks.
///
/// Starts from the node named by `source` and walks up through `static`
/// ancestors. The first positioned node wins; reaching the body (or running
/// out of parents) yields the body, which stands for the viewport.
///
/// Without a document nothing is read and only an explicitly supplied
/// element is returned.
pub fn resolve_container<A: GeometryAdapter>(
    adapter: &A,
    source: &ContainerSource<A::Element>,
    base: &Target<A::Element>,
) -> Option<A::Element> {
    if !adapter.has_document() {
        return source.element().cloned();
    }

    let body = adapter.body();
    let start = match source {
        ContainerSource::Auto => None,
        ContainerSource::BaseAncestor => base
            .element()
            .and_then(|element| adapter.parent_node(element)),
        ContainerSource::Element(element) => Some(element.clone()),
        ContainerSource::Resolve(resolve) => base.element().and_then(|element| resolve(element)),
    };

    let mut current = start.unwrap_or_else(|| body.clone());
    while adapter.position(&current) == PositionKind::Static {
        if current == body {
            return Some(body);
        }
        match adapter.parent_node(&current) {
            Some(parent) => current = parent,
            None => return Some(body),
        }
    }

    log::trace!("container resolved to {:?}", current);
    Some(current)
}
