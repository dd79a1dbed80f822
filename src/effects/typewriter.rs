// Types out the page header one character at a time, with a border standing in
// for the cursor until shortly after the last character lands.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::AnimationConfig;
use crate::dom;
use crate::error::AnimationError;

pub const HEADER_SELECTOR: &str = "header h1";

#[derive(Debug, Clone, PartialEq)]
pub enum TypewriterStep {
    /// The text typed so far, one character longer than the previous step.
    Typed(String),
    Done,
}

/// Reveals a string by whole characters, not bytes.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Typewriter {
            chars: text.chars().collect(),
            typed: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn next_step(&mut self) -> TypewriterStep {
        if self.typed < self.chars.len() {
            self.typed += 1;
            TypewriterStep::Typed(self.chars[..self.typed].iter().collect())
        } else {
            TypewriterStep::Done
        }
    }
}

/// Start typing the header. Returns the interval id so the host can cancel it,
/// or `None` when the page has no header.
pub fn start(config: &AnimationConfig) -> Result<Option<i32>, AnimationError> {
    let document = dom::document()?;
    let header = match dom::select_one(&document, HEADER_SELECTOR) {
        Some(header) => header,
        None => {
            log::warn!("typewriter: no `{}` on the page, skipping", HEADER_SELECTOR);
            return Ok(None);
        }
    };

    let text = header.text_content().unwrap_or_default();
    header.set_text_content(Some(""));
    dom::set_styles(
        &header,
        &[
            ("border-right", config.cursor_style.as_str()),
            ("padding-right", "5px"),
            ("display", "inline-block"),
        ],
    )?;

    let window = dom::window()?;
    let mut typewriter = Typewriter::new(&text);
    let interval_id = Rc::new(Cell::new(0));
    let cursor_delay = config.cursor_removal_delay_ms;

    let on_tick = {
        let header = header.clone();
        let interval_id = interval_id.clone();
        Closure::wrap(Box::new(move || match typewriter.next_step() {
            TypewriterStep::Typed(prefix) => header.set_text_content(Some(&prefix)),
            TypewriterStep::Done => {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(interval_id.get());
                    hide_cursor_later(&window, &header, cursor_delay);
                }
            }
        }) as Box<dyn FnMut()>)
    };

    let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        on_tick.as_ref().unchecked_ref(),
        config.typewriter_interval_ms,
    )?;
    interval_id.set(id);
    // The interval is cleared once the text is done, the closure is leaked
    on_tick.forget();

    log::info!("typewriter: typing {} characters", text.chars().count());
    Ok(Some(id))
}

fn hide_cursor_later(window: &web_sys::Window, header: &HtmlElement, delay_ms: i32) {
    let header = header.clone();
    let hide = Closure::once(move || {
        let _ = header.style().set_property("border-right", "none");
    });
    if let Err(err) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(hide.as_ref().unchecked_ref(), delay_ms)
    {
        log::warn!("typewriter: could not schedule cursor removal: {:?}", err);
    }
    hide.forget();
}
