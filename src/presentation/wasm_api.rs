//! JavaScript bridge. Scenes and frames cross the boundary as JSON strings;
//! errors become JS `Error` objects carrying the [`SceneError`] message.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::application::{IntroConfig, IntroFrame, IntroOverrides, SceneComposer};
use crate::domain::{
    errors::{SceneError, SceneResult},
    logging::{LogComponent, init_logger},
    scene::{Composition, load_scene},
};
use crate::infrastructure::services::ConsoleLogger;
use crate::{log_error, log_info, scenes};

/// Install the panic hook and the console logger. Runs once on module load.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    if init_logger(Box::new(ConsoleLogger::default())) {
        log_info!(LogComponent::Presentation("Initialize"), "candle-motion {} ready", env!("CARGO_PKG_VERSION"));
    }
}

/// Parse and validate a scene; throws with the first problem found.
#[wasm_bindgen(js_name = validateScene)]
pub fn validate_scene(scene_json: &str) -> Result<(), JsValue> {
    load_scene(scene_json).map(|_| ()).map_err(|err| to_js("validateScene", err))
}

/// One-shot render of a single frame. Prefer [`SceneRenderer`] for sequences.
#[wasm_bindgen(js_name = renderFrame)]
pub fn render_frame(scene_json: &str, frame: f64, width: f64, height: f64, fps: f64) -> Result<String, JsValue> {
    render_frame_json(scene_json, frame, Composition::new(width, height, fps))
        .map_err(|err| to_js("renderFrame", err))
}

#[wasm_bindgen(js_name = renderIntroFrame)]
pub fn render_intro_frame(
    frame: f64,
    width: f64,
    height: f64,
    fps: f64,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    intro_frame_json(frame, Composition::new(width, height, fps), config_json.as_deref())
        .map_err(|err| to_js("renderIntroFrame", err))
}

/// JSON of a built-in scene, ready to be edited and passed back in.
#[wasm_bindgen(js_name = builtinScene)]
pub fn builtin_scene(name: &str) -> Result<String, JsValue> {
    builtin_scene_json(name).map_err(|err| to_js("builtinScene", err))
}

#[wasm_bindgen(js_name = builtinSceneNames)]
pub fn builtin_scene_names() -> js_sys::Array {
    scenes::BUILTIN_SCENES.iter().map(|name| JsValue::from_str(name)).collect()
}

/// Scene bound to a composition; reuses the scale and camera across frames.
#[wasm_bindgen]
pub struct SceneRenderer {
    composer: SceneComposer,
}

#[wasm_bindgen]
impl SceneRenderer {
    #[wasm_bindgen(constructor)]
    pub fn new(scene_json: &str, width: f64, height: f64, fps: f64) -> Result<SceneRenderer, JsValue> {
        SceneComposer::from_json(scene_json, Composition::new(width, height, fps))
            .map(|composer| Self { composer })
            .map_err(|err| to_js("SceneRenderer", err))
    }

    #[wasm_bindgen(js_name = renderFrame)]
    pub fn render_frame(&self, frame: f64) -> Result<String, JsValue> {
        self.composer
            .render_frame(frame)
            .and_then(|output| to_json(&output))
            .map_err(|err| to_js("SceneRenderer.renderFrame", err))
    }

    /// Frames `start..end` as a JSON array.
    #[wasm_bindgen(js_name = renderFrames)]
    pub fn render_frames(&self, start: u32, end: u32) -> Result<String, JsValue> {
        to_json(&self.composer.render_frames(start..end)).map_err(|err| to_js("SceneRenderer.renderFrames", err))
    }

    #[wasm_bindgen(js_name = lastAppearFrame)]
    pub fn last_appear_frame(&self) -> f64 {
        self.composer.last_appear_frame()
    }

    #[wasm_bindgen(getter, js_name = contentWidth)]
    pub fn content_width(&self) -> f64 {
        self.composer.camera().content_width
    }
}

pub(crate) fn render_frame_json(scene_json: &str, frame: f64, composition: Composition) -> SceneResult<String> {
    let composer = SceneComposer::from_json(scene_json, composition)?;
    to_json(&composer.render_frame(frame)?)
}

pub(crate) fn intro_frame_json(frame: f64, composition: Composition, config_json: Option<&str>) -> SceneResult<String> {
    let config = match config_json {
        Some(json) => serde_json::from_str::<IntroOverrides>(json)?.resolve(),
        None => IntroConfig::default(),
    };
    to_json(&IntroFrame::compute(frame, composition.fps, composition.width, composition.height, &config)?)
}

pub(crate) fn builtin_scene_json(name: &str) -> SceneResult<String> {
    let scene = scenes::by_name(name).ok_or_else(|| {
        SceneError::validation("name", format!("unknown scene, expected one of {:?}", scenes::BUILTIN_SCENES))
    })?;
    to_json(&scene)
}

fn to_json<T: Serialize>(value: &T) -> SceneResult<String> {
    serde_json::to_string(value).map_err(SceneError::from)
}

fn to_js(call: &'static str, err: SceneError) -> JsValue {
    log_error!(LogComponent::Presentation(call), "{err}");
    js_sys::Error::new(&err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_scene_round_trips_through_render() {
        let json = builtin_scene_json(scenes::DESCENDING_CHANNEL_BREAKOUT).unwrap();
        let frame = render_frame_json(&json, 80.0, Composition::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(value["frame"], 80.0);
        assert_eq!(value["textLayer"]["texts"][0]["text"], "돌파");
        assert!(value["viewBox"]["x"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn unknown_scene_names_the_choices() {
        let err = builtin_scene_json("nope").unwrap_err();
        assert_eq!(err.field(), Some("name"));
        assert!(err.to_string().contains(scenes::DESCENDING_CHANNEL_BREAKOUT));
    }

    #[test]
    fn intro_accepts_partial_config() {
        let json = intro_frame_json(90.0, Composition::default(), Some(r#"{"tagline": "MACRO"}"#)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tagline"]["text"], "MACRO");
        assert_eq!(value["title"]["text"], "YHH TRADING");

        let err = intro_frame_json(90.0, Composition::default(), Some("{")).unwrap_err();
        assert!(matches!(err, SceneError::Schema { .. }));
    }
}
