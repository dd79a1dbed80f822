// Hover ripple for buttons: a small circle grows out from the pointer and fades.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::AnimationConfig;
use crate::dom;
use crate::error::AnimationError;

pub const BUTTON_SELECTOR: &str = "button";
pub const RIPPLE_STYLE_ID: &str = "ripple-effect-style";
pub const RIPPLE_CLASS: &str = "ripple-span";

pub const RIPPLE_KEYFRAMES: &str = "
    @keyframes ripple-effect {
      to {
        transform: translate(-50%, -50%) scale(4);
        opacity: 0;
      }
    }
  ";

/// Where a ripple lands inside its button, in pixels from the button's
/// top-left corner.
pub fn ripple_origin(client: (f64, f64), button_rect: (f64, f64)) -> (f64, f64) {
    (client.0 - button_rect.0, client.1 - button_rect.1)
}

pub fn ripple_styles(origin: (f64, f64), duration_ms: i32) -> Vec<(&'static str, String)> {
    vec![
        ("position", "absolute".to_owned()),
        ("border-radius", "50%".to_owned()),
        ("background", "rgba(255, 255, 255, 0.6)".to_owned()),
        ("width", "20px".to_owned()),
        ("height", "20px".to_owned()),
        ("pointer-events", "none".to_owned()),
        ("transform", "translate(-50%, -50%) scale(0)".to_owned()),
        (
            "animation",
            format!("ripple-effect {}s ease-out", duration_ms as f64 / 1000.0),
        ),
        ("left", format!("{}px", origin.0)),
        ("top", format!("{}px", origin.1)),
    ]
}

/// Wire the ripple into every button and make sure the keyframes exist.
/// Returns the number of buttons enhanced; zero buttons is not an error.
pub fn enhance_buttons(config: &AnimationConfig) -> Result<u32, AnimationError> {
    let document = dom::document()?;
    ensure_keyframes(&document)?;

    let buttons = dom::select_all(&document, BUTTON_SELECTOR);
    for button in &buttons {
        dom::set_styles(button, &[("position", "relative"), ("overflow", "hidden")])?;
        attach_ripple(button, config.ripple_duration_ms)?;
    }

    log::info!("ripple: enhanced {} buttons", buttons.len());
    Ok(buttons.len() as u32)
}

// Keyframes go into <head> once, however many times buttons are enhanced
fn ensure_keyframes(document: &Document) -> Result<(), AnimationError> {
    if document.get_element_by_id(RIPPLE_STYLE_ID).is_some() {
        return Ok(());
    }
    let head = dom::head()?;
    let style: HtmlElement = dom::create_element(document, "style")?;
    style.set_id(RIPPLE_STYLE_ID);
    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    head.append_child(&style)?;
    Ok(())
}

fn attach_ripple(button: &HtmlElement, duration_ms: i32) -> Result<(), AnimationError> {
    let target = button.clone();
    let on_enter = Closure::wrap(Box::new(move |event: MouseEvent| {
        if let Err(err) = spawn_ripple(&target, &event, duration_ms) {
            log::warn!("ripple: {}", err);
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    button.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
    on_enter.forget();
    Ok(())
}

fn spawn_ripple(
    button: &HtmlElement,
    event: &MouseEvent,
    duration_ms: i32,
) -> Result<(), AnimationError> {
    let document = dom::document()?;
    let ripple: HtmlElement = dom::create_element(&document, "span")?;
    ripple.set_class_name(RIPPLE_CLASS);

    let rect = button.get_bounding_client_rect();
    let origin = ripple_origin(
        (event.client_x() as f64, event.client_y() as f64),
        (rect.left(), rect.top()),
    );
    let styles = ripple_styles(origin, duration_ms);
    let styles: Vec<(&str, &str)> = styles.iter().map(|(k, v)| (*k, v.as_str())).collect();
    dom::set_styles(&ripple, &styles)?;
    button.append_child(&ripple)?;

    let remove = Closure::once(move || ripple.remove());
    dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        remove.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    remove.forget();
    Ok(())
}
