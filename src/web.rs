//! Browser Entry Point
//!
//! A thin `wasm-bindgen` facade over [`Stage`] for a JavaScript host that
//! owns the WebGL renderer and the glTF loader. Clip lists and configs cross
//! the boundary as JSON.
//!
//! ```js
//! const stage = new WebStage(configJson, gateClipsJson, wizardClipsJson);
//! canvas.addEventListener("click", (e) => stage.click(e.offsetX, e.offsetY));
//! function frame(dt) {
//!     for (const event of stage.tick(dt)) console.log(event);
//!     camera.position.fromArray(stage.camera_position());
//! }
//! ```

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::animation::clip::AnimationClip;
use crate::config::SceneConfig;
use crate::errors::Result;
use crate::scene::layout::SceneLayout;
use crate::stage::Stage;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    // The host page may already have installed a logger.
    let _ = console_log::init_with_level(log::Level::Info);
}

fn to_js<T>(result: Result<T>) -> std::result::Result<T, JsValue> {
    result.map_err(|err| JsValue::from_str(&err.to_string()))
}

fn parse_clips(json: &str) -> Result<Vec<AnimationClip>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(json)?)
}

#[wasm_bindgen]
pub struct WebStage {
    config: SceneConfig,
    stage: Stage,
}

#[wasm_bindgen]
impl WebStage {
    /// `config_json` may be empty for the default scene. Clip lists are
    /// arrays of `{ "name": ..., "duration": ... }`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: &str,
        gate_clips_json: &str,
        wizard_clips_json: &str,
    ) -> std::result::Result<WebStage, JsValue> {
        let config = if config_json.trim().is_empty() {
            SceneConfig::default()
        } else {
            to_js(SceneConfig::from_json_str(config_json))?
        };
        let gate_clips = to_js(parse_clips(gate_clips_json))?;
        let wizard_clips = to_js(parse_clips(wizard_clips_json))?;
        let stage = Stage::from_clips(&config, gate_clips, wizard_clips);
        Ok(Self { config, stage })
    }

    /// Advances the scene and returns the names of the milestones reached.
    pub fn tick(&mut self, dt: f32) -> Vec<String> {
        self.stage
            .update(dt)
            .into_iter()
            .map(|event| event.as_str().to_string())
            .collect()
    }

    pub fn click(&mut self, x: f32, y: f32) -> bool {
        self.stage.handle_click(Vec2::new(x, y))
    }

    pub fn trigger_attack(&mut self) -> bool {
        self.stage.trigger_attack()
    }

    pub fn camera_position(&self) -> Vec<f32> {
        self.stage.camera_position().to_array().to_vec()
    }

    /// The static scene description for the renderer, as JSON.
    pub fn layout_json(&self) -> std::result::Result<String, JsValue> {
        serde_json::to_string(&SceneLayout::build(&self.config))
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    pub fn teardown(&mut self) {
        self.stage.teardown();
    }
}
