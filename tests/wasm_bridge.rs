#![cfg(target_arch = "wasm32")]
use candle_motion::presentation::wasm_api::{
    SceneRenderer, builtin_scene, builtin_scene_names, render_frame, render_intro_frame, validate_scene,
};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn builtin_scene_renders_through_the_bridge() {
    let names = builtin_scene_names();
    assert_eq!(names.length(), 1);
    let json = builtin_scene(&names.get(0).as_string().unwrap()).unwrap();
    assert!(validate_scene(&json).is_ok());

    let frame = render_frame(&json, 60.0, 1920.0, 1080.0, 30.0).unwrap();
    assert!(frame.contains("\"cameraX\""));

    let renderer = SceneRenderer::new(&json, 1920.0, 1080.0, 30.0).unwrap();
    assert_eq!(renderer.render_frame(60.0).unwrap(), frame);
    assert_eq!(renderer.content_width(), 182.0 * 20.0 + 100.0);
}

#[wasm_bindgen_test]
fn bridge_errors_become_js_errors() {
    assert!(validate_scene("{\"candles\": []}").is_err());
    assert!(builtin_scene("missing").is_err());
    assert!(SceneRenderer::new("not json", 1920.0, 1080.0, 30.0).is_err());
}

#[wasm_bindgen_test]
fn intro_renders_with_default_config() {
    let frame = render_intro_frame(100.0, 1920.0, 1080.0, 30.0, None).unwrap();
    assert!(frame.contains("YHH TRADING"));
}
