//! Browser tests, run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use overlay_wasm::{place, place_in_viewport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, SvgElement};

wasm_bindgen_test_configure!(run_in_browser);

fn styled_div(style: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let element: Element = document.create_element("div").unwrap();
    element.set_attribute("style", style).unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element.dyn_into::<HtmlElement>().unwrap()
}

#[wasm_bindgen_test]
fn places_menu_below_button() {
    let button = styled_div("position:absolute;left:100px;top:100px;width:50px;height:20px");
    let menu = styled_div("width:30px;height:10px");
    let options = options_from_json(r#"{"align":"tl bl"}"#);

    let used = place(menu.clone().into(), button.into(), options, JsValue::UNDEFINED).unwrap();
    assert_eq!(used.as_deref(), Some("tl bl"));
    assert_eq!(menu.style().get_property_value("position").unwrap(), "absolute");
    assert_eq!(menu.style().get_property_value("top").unwrap(), "120px");
}

#[wasm_bindgen_test]
fn places_svg_pin_below_button() {
    let button = styled_div("position:absolute;left:100px;top:100px;width:50px;height:20px");
    let document = web_sys::window().unwrap().document().unwrap();
    let icon = document
        .create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")
        .unwrap();
    icon.set_attribute("width", "30").unwrap();
    icon.set_attribute("height", "10").unwrap();
    document.body().unwrap().append_child(&icon).unwrap();
    let options = options_from_json(r#"{"align":"tl bl"}"#);

    let used = place(icon.clone().into(), button.into(), options, JsValue::UNDEFINED).unwrap();
    assert_eq!(used.as_deref(), Some("tl bl"));
    let style = icon.dyn_into::<SvgElement>().unwrap().style();
    assert_eq!(style.get_property_value("position").unwrap(), "absolute");
    assert_eq!(style.get_property_value("top").unwrap(), "120px");
}

#[wasm_bindgen_test]
fn viewport_pin_returns_null() {
    let options = JsValue::UNDEFINED;
    let used = place_in_viewport(JsValue::from_str("viewport"), options).unwrap();
    assert_eq!(used, None);
}

#[wasm_bindgen_test]
fn rejects_non_element_pin() {
    let result = place(JsValue::from_f64(1.0), JsValue::from_str("viewport"), JsValue::NULL, JsValue::NULL);
    assert!(result.is_err());
}

fn options_from_json(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap()
}
