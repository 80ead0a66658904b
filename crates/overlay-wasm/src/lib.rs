//! WebAssembly bindings for the overlay placement engine.
//!
//! ## Example
//!
//! ```js
//! import { place, placeInViewport, placeWithReport } from 'overlay-position';
//!
//! // Dropdown under its trigger, flipping when it would overflow.
//! const used = place(menu, button, { align: 'tl bl', needAdjust: true });
//!
//! // Centered dialog.
//! placeInViewport(dialog, { align: 'cc cc' });
//!
//! // Inside a scrolling panel, with details about the outcome.
//! const report = placeWithReport(list, row, { autoFit: true }, panel);
//! if (report && report.outcome === 'clamped') { ... }
//! ```
//!
//! `pin` and `base` accept an element or the string `"viewport"`. The
//! optional `container` accepts an element or a function receiving the base
//! element. All functions return `null` when there is no document.

use std::rc::Rc;

use overlay_geometry::Target;
use overlay_position::{place_with_report, ContainerSource, Placement, PlacementOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

mod dom;
mod types;

pub use dom::DomAdapter;
pub use types::PlacementReport;

/// Sentinel accepted in place of an element.
pub const VIEWPORT: &str = "viewport";

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

fn target(value: JsValue, name: &str) -> Result<Target<Element>, JsError> {
    if value.as_string().as_deref() == Some(VIEWPORT) {
        return Ok(Target::Viewport);
    }
    value
        .dyn_into::<Element>()
        .map(Target::Element)
        .map_err(|_| JsError::new(&format!("{} must be an element or \"viewport\"", name)))
}

fn options(value: JsValue) -> Result<PlacementOptions, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(PlacementOptions::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

fn container(value: JsValue) -> Result<ContainerSource<Element>, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(ContainerSource::Auto);
    }
    if let Some(resolve) = value.dyn_ref::<js_sys::Function>() {
        let resolve = resolve.clone();
        return Ok(ContainerSource::Resolve(Rc::new(move |base: &Element| {
            resolve
                .call1(&JsValue::NULL, base)
                .ok()
                .and_then(|node| node.dyn_into::<Element>().ok())
        })));
    }
    value
        .dyn_into::<Element>()
        .map(ContainerSource::Element)
        .map_err(|_| JsError::new("container must be an element or a function"))
}

fn run(
    pin: JsValue,
    base: JsValue,
    opts: JsValue,
    within: JsValue,
) -> Result<Option<Placement>, JsError> {
    let config = options(opts)?
        .into_config(target(pin, "pin")?, target(base, "base")?)
        .container(container(within)?);

    let Some(mut adapter) = DomAdapter::new() else {
        log::debug!("no document, nothing to place");
        return Ok(None);
    };
    Ok(place_with_report(&mut adapter, config)?)
}

/// Position `pin` against `base`. Returns the alignment used, or `null`.
#[wasm_bindgen]
pub fn place(
    pin: JsValue,
    base: JsValue,
    options: JsValue,
    container: JsValue,
) -> Result<Option<String>, JsError> {
    Ok(run(pin, base, options, container)?.map(|placement| placement.align.to_string()))
}

/// Position `pin` against the viewport.
#[wasm_bindgen(js_name = placeInViewport)]
pub fn place_in_viewport(pin: JsValue, options: JsValue) -> Result<Option<String>, JsError> {
    place(pin, JsValue::from_str(VIEWPORT), options, JsValue::UNDEFINED)
}

/// Like `place`, returning `{ align, outcome, left, top, offset }`.
#[wasm_bindgen(js_name = placeWithReport)]
pub fn place_with_report_js(
    pin: JsValue,
    base: JsValue,
    options: JsValue,
    container: JsValue,
) -> Result<JsValue, JsError> {
    match run(pin, base, options, container)? {
        Some(placement) => serde_wasm_bindgen::to_value(&PlacementReport::from(placement))
            .map_err(|e| JsError::new(&format!("Failed to serialize report: {}", e))),
        None => Ok(JsValue::NULL),
    }
}
