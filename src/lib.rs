mod color;
mod config;
mod dom;
mod effects;
mod error;
mod field;
mod particle;
mod render_loop;
mod surface;
mod utils;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, IntersectionObserver};

pub use crate::color::{Color, PALETTE};
pub use crate::config::AnimationConfig;
pub use crate::effects::typewriter::{Typewriter, TypewriterStep};
pub use crate::error::AnimationError;
pub use crate::field::{Connection, FrameStats, ParticleField};
pub use crate::particle::Particle;
pub use crate::surface::{CanvasSurface, Surface};

use crate::render_loop::{FrameLoop, ParticleBackground};
use crate::utils::Timer;

/// Installs the panic hook and routes `log` to the browser console.
/// Call once from the page before anything else.
#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    // A second call finds the logger already set, which is fine
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Fixed description of the particle background.
#[wasm_bindgen]
pub struct AnimationStats {
    particle_count: u32,
    canvas_id: String,
    animations_active: bool,
}

#[wasm_bindgen]
impl AnimationStats {
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.particle_count
    }

    #[wasm_bindgen(getter)]
    pub fn canvas_id(&self) -> String {
        self.canvas_id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn animations_active(&self) -> bool {
        self.animations_active
    }
}

/// Same answer whether or not anything has been initialized.
#[wasm_bindgen]
pub fn get_animation_stats() -> AnimationStats {
    let defaults = AnimationConfig::default();
    AnimationStats {
        particle_count: defaults.particle_count as u32,
        canvas_id: defaults.canvas_id,
        animations_active: true,
    }
}

/// Everything the page may want to poke at after startup.
#[wasm_bindgen]
pub struct AnimationHandle {
    canvas: HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
    frame_loop: FrameLoop,
    typewriter_interval: Option<i32>,
    scroll_observer: Option<IntersectionObserver>,
}

impl AnimationHandle {
    fn from_background(background: ParticleBackground) -> Self {
        AnimationHandle {
            canvas: background.canvas,
            field: background.field,
            frame_loop: background.frame_loop,
            typewriter_interval: None,
            scroll_observer: None,
        }
    }
}

#[wasm_bindgen]
impl AnimationHandle {
    #[wasm_bindgen(getter)]
    pub fn canvas(&self) -> HtmlCanvasElement {
        self.canvas.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.field.borrow().particles().len() as u32
    }

    /// Particle positions flattened as [x0, y0, x1, y1, ...].
    pub fn particle_positions(&self) -> Vec<f64> {
        self.field
            .borrow()
            .particles()
            .iter()
            .flat_map(|p| p.pos.to_vec())
            .collect()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.field.borrow().width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.field.borrow().height()
    }

    #[wasm_bindgen(getter)]
    pub fn typewriter_interval(&self) -> Option<i32> {
        self.typewriter_interval
    }

    #[wasm_bindgen(getter)]
    pub fn scroll_observer(&self) -> Option<IntersectionObserver> {
        self.scroll_observer.clone()
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// Halts the particle loop, cancels a typewriter still typing and stops
    /// watching sections.
    pub fn stop(&self) {
        self.frame_loop.stop();
        if let Some(window) = web_sys::window() {
            if let Some(id) = self.typewriter_interval {
                window.clear_interval_with_handle(id);
            }
        }
        if let Some(observer) = &self.scroll_observer {
            observer.disconnect();
        }
    }
}

/// Start only the particle background, with default settings.
#[wasm_bindgen]
pub fn init_accessibility_animations() -> Result<AnimationHandle, JsValue> {
    start_background(&AnimationConfig::default())
}

/// Start only the particle background, with settings from a JSON object.
/// Fields left out keep their defaults.
#[wasm_bindgen]
pub fn init_accessibility_animations_with_config(json: &str) -> Result<AnimationHandle, JsValue> {
    let config = AnimationConfig::from_json(json)
        .map_err(|err| AnimationError::InvalidConfig(err.to_string()))?;
    start_background(&config)
}

fn start_background(config: &AnimationConfig) -> Result<AnimationHandle, JsValue> {
    let _timer = Timer::new("init_accessibility_animations");
    let background = render_loop::start(config).map_err(|err| {
        log::error!("particle background failed to start: {}", err);
        err
    })?;
    Ok(AnimationHandle::from_background(background))
}

/// Returns the typewriter's interval id, or nothing if there is no header.
#[wasm_bindgen]
pub fn init_typewriter_effect() -> Option<i32> {
    match effects::typewriter::start(&AnimationConfig::default()) {
        Ok(id) => id,
        Err(err) => {
            log::warn!("typewriter disabled: {}", err);
            None
        }
    }
}

#[wasm_bindgen]
pub fn init_scroll_reveal() -> Result<IntersectionObserver, JsValue> {
    Ok(effects::scroll_reveal::start(&AnimationConfig::default())?)
}

/// Returns how many buttons got the ripple.
#[wasm_bindgen]
pub fn enhance_buttons() -> Result<u32, JsValue> {
    Ok(effects::ripple::enhance_buttons(&AnimationConfig::default())?)
}

/// Start the background and every page effect. Each one is started on its
/// own: a failure is logged and the rest still start. A background failure
/// is returned after the page effects are running.
#[wasm_bindgen]
pub fn init_all_animations() -> Result<AnimationHandle, JsValue> {
    init_all_with(&AnimationConfig::default())
}

#[wasm_bindgen]
pub fn init_all_animations_with_config(json: &str) -> Result<AnimationHandle, JsValue> {
    let config = AnimationConfig::from_json(json)
        .map_err(|err| AnimationError::InvalidConfig(err.to_string()))?;
    init_all_with(&config)
}

fn init_all_with(config: &AnimationConfig) -> Result<AnimationHandle, JsValue> {
    let background = start_background(config);

    let typewriter_interval = effects::typewriter::start(config).unwrap_or_else(|err| {
        log::warn!("typewriter disabled: {}", err);
        None
    });

    let scroll_observer = match effects::scroll_reveal::start(config) {
        Ok(observer) => Some(observer),
        Err(err) => {
            log::warn!("scroll reveal disabled: {}", err);
            None
        }
    };

    if let Err(err) = effects::ripple::enhance_buttons(config) {
        log::warn!("button ripple disabled: {}", err);
    }

    let mut handle = background?;
    handle.typewriter_interval = typewriter_interval;
    handle.scroll_observer = scroll_observer;
    log::info!("all animations initialized");
    Ok(handle)
}
