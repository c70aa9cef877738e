#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use pixel_pad::DrawingPad;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn drawing_pad_paints_in_browser() {
    pixel_pad::init();
    let mut pad = DrawingPad::new();
    assert!(pad.press(10.0, 10.0, 0, false));
    assert_eq!(pad.history_color(0, 0).as_deref(), Some("#009578"));
}

#[wasm_bindgen_test]
fn invalid_config_surfaces_as_js_error() {
    assert!(DrawingPad::from_config(r#"{"columns": 0}"#.to_string()).is_err());
}
