// Fades sections in and slides them up the first time they scroll into view.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::AnimationConfig;
use crate::dom;
use crate::error::AnimationError;

pub const SECTION_SELECTOR: &str = "section";

/// Inline styles a section starts with, before it has been seen.
pub fn hidden_styles(config: &AnimationConfig) -> Vec<(&'static str, String)> {
    vec![
        ("opacity", "0".to_owned()),
        ("transform", format!("translateY({}px)", config.reveal_offset_px)),
        ("transition", config.reveal_transition.clone()),
    ]
}

pub fn shown_styles() -> [(&'static str, &'static str); 2] {
    [("opacity", "1"), ("transform", "translateY(0)")]
}

/// Hide every section and observe it. Each section is revealed once and then
/// unobserved. The observer is returned even if the page has no sections.
pub fn start(config: &AnimationConfig) -> Result<IntersectionObserver, AnimationError> {
    let document = dom::document()?;
    let sections = dom::select_all(&document, SECTION_SELECTOR);

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(section) = target.dyn_ref::<HtmlElement>() {
                    if let Err(err) = dom::set_styles(section, &shown_styles()) {
                        log::warn!("scroll reveal: {}", err);
                    }
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    // The observer calls back for the rest of the page's life
    on_intersect.forget();

    let hidden = hidden_styles(config);
    let hidden: Vec<(&str, &str)> = hidden.iter().map(|(k, v)| (*k, v.as_str())).collect();
    for section in &sections {
        dom::set_styles(section, &hidden)?;
        observer.observe(section);
    }

    log::info!("scroll reveal: observing {} sections", sections.len());
    Ok(observer)
}
