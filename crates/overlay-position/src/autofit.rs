//! Vertical correction for pins inside scrolling containers.

use overlay_core::{AlignPair, Offset, Rect, Size, Vertical};
use overlay_geometry::GeometryAdapter;

use crate::config::PlacementConfig;
use crate::coords::{element_rect, viewport_size};

/// Offset to apply to the clamped fallback.
///
/// Starts from the configured offset. With auto-fit enabled inside a real
/// container (anything but the body), a pin that still overflows the
/// container vertically gets its vertical offset replaced so that it moves
/// back over the base element.
pub(crate) fn pin_offset<A: GeometryAdapter>(
    adapter: &A,
    config: &PlacementConfig<A::Element>,
    pin: &A::Element,
    container: Option<&A::Element>,
    align: AlignPair,
) -> Offset {
    let offset = config.offset;
    if !config.auto_fit {
        return offset;
    }
    let Some(container) = container else {
        return offset;
    };
    if *container == adapter.body() {
        return offset;
    }
    let Some(base) = config.base.element() else {
        return offset;
    };

    let base_rect = element_rect(adapter, base, Some(container));
    let pin_rect = element_rect(adapter, pin, Some(container));
    let viewport = viewport_size(adapter, Some(container));

    match fit_vertical(base_rect, pin_rect, viewport, align.pin.vertical) {
        Some(dy) => {
            log::debug!("auto-fit: vertical offset {} -> {}", offset.dy, dy);
            Offset::new(offset.dx, dy)
        }
        None => offset,
    }
}

/// Replacement vertical offset, or `None` when the pin already fits.
fn fit_vertical(base: Rect, pin: Rect, viewport: Size, pin_vertical: Vertical) -> Option<f64> {
    if pin.top >= 0.0 && pin.bottom() <= viewport.height {
        return None;
    }
    let height = if pin_vertical == Vertical::Top {
        base.height
    } else {
        0.0
    };
    Some(-base.top - height)
}
