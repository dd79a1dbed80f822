// Browser side of the particle background: creates the full-viewport canvas,
// keeps it sized to the window and drives ParticleField from requestAnimationFrame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::config::AnimationConfig;
use crate::dom;
use crate::error::AnimationError;
use crate::field::ParticleField;
use crate::surface::CanvasSurface;

/// Lets the host halt the frame loop. Without a call to `stop` the loop runs
/// for as long as the page delivers animation frames.
#[derive(Clone)]
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending_frame: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    fn new() -> Self {
        FrameLoop {
            running: Rc::new(Cell::new(true)),
            pending_frame: Rc::new(Cell::new(None)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.pending_frame.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        log::info!("particle background stopped");
    }
}

pub struct ParticleBackground {
    pub canvas: HtmlCanvasElement,
    pub field: Rc<RefCell<ParticleField>>,
    pub frame_loop: FrameLoop,
}

pub fn start(config: &AnimationConfig) -> Result<ParticleBackground, AnimationError> {
    config.validate()?;

    let window = dom::window()?;
    let document = dom::document()?;
    let body = dom::body()?;

    let canvas: HtmlCanvasElement = dom::create_element(&document, "canvas")?;
    canvas.set_id(&config.canvas_id);
    let opacity = config.canvas_opacity.to_string();
    dom::set_styles(
        &canvas,
        &[
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("pointer-events", "none"),
            ("z-index", "-1"),
            ("opacity", opacity.as_str()),
        ],
    )?;
    body.insert_before(&canvas, body.first_child().as_ref())?;

    start_on_canvas(config, &window, canvas)
}

// Takes the canvas out of the page again if anything after insertion fails
fn start_on_canvas(
    config: &AnimationConfig,
    window: &Window,
    canvas: HtmlCanvasElement,
) -> Result<ParticleBackground, AnimationError> {
    match animate_canvas(config, window, &canvas) {
        Ok((field, frame_loop)) => Ok(ParticleBackground {
            canvas,
            field,
            frame_loop,
        }),
        Err(err) => {
            canvas.remove();
            Err(err)
        }
    }
}

fn animate_canvas(
    config: &AnimationConfig,
    window: &Window,
    canvas: &HtmlCanvasElement,
) -> Result<(Rc<RefCell<ParticleField>>, FrameLoop), AnimationError> {
    let context = context_2d(canvas)?;

    let (width, height) = dom::viewport_size(window);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!(
        "creating {} particles on {}x{} (seed {})",
        config.particle_count,
        width,
        height,
        seed
    );
    let mut rng = StdRng::seed_from_u64(seed);
    let field = Rc::new(RefCell::new(ParticleField::new(config, width, height, &mut rng)));

    watch_resize(window, canvas, &field)?;

    let frame_loop = FrameLoop::new();
    run_frames(window, CanvasSurface::new(context), field.clone(), frame_loop.clone())?;

    Ok((field, frame_loop))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, AnimationError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(AnimationError::NoCanvasContext)
}

// Only dimensions are touched here; particles are left to reflect back in
fn watch_resize(
    window: &Window,
    canvas: &HtmlCanvasElement,
    field: &Rc<RefCell<ParticleField>>,
) -> Result<(), AnimationError> {
    let canvas = canvas.clone();
    let field = field.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        let (width, height) = dom::viewport_size(&window);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        field.borrow_mut().resize(width, height);
        log::debug!("canvas resized to {}x{}", width, height);
    }) as Box<dyn FnMut()>);

    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    // Lives as long as the page
    on_resize.forget();
    Ok(())
}

fn run_frames(
    window: &Window,
    mut surface: CanvasSurface,
    field: Rc<RefCell<ParticleField>>,
    frame_loop: FrameLoop,
) -> Result<(), AnimationError> {
    let next: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = next.clone();
    let pending_frame = frame_loop.pending_frame.clone();

    *first.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_loop.pending_frame.set(None);
        if !frame_loop.is_running() {
            return;
        }

        if let Err(err) = field.borrow_mut().tick(&mut surface) {
            log::error!("particle frame failed: {:?}", err);
            frame_loop.running.set(false);
            return;
        }

        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        if let Some(callback) = next.borrow().as_ref() {
            match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(id) => frame_loop.pending_frame.set(Some(id)),
                Err(err) => {
                    log::error!("requestAnimationFrame failed: {:?}", err);
                    frame_loop.running.set(false);
                }
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = first.borrow().as_ref() {
        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        pending_frame.set(Some(id));
    }
    Ok(())
}
