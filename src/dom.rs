// Helper functions for reaching into the page: global objects, element lookup
// and inline styles. Missing pieces become AnimationErrors instead of panics.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlHeadElement, Window};

use crate::error::AnimationError;

pub fn window() -> Result<Window, AnimationError> {
    web_sys::window().ok_or(AnimationError::NoWindow)
}

pub fn document() -> Result<Document, AnimationError> {
    window()?.document().ok_or(AnimationError::NoDocument)
}

pub fn body() -> Result<HtmlElement, AnimationError> {
    document()?.body().ok_or(AnimationError::NoBody)
}

pub fn head() -> Result<HtmlHeadElement, AnimationError> {
    document()?.head().ok_or(AnimationError::NoHead)
}

pub fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

pub fn create_element<T: JsCast>(document: &Document, tag: &str) -> Result<T, AnimationError> {
    document
        .create_element(tag)
        .ok()
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| AnimationError::CreateElement(tag.to_owned()))
}

/// Every element matching `selector` that is an HtmlElement. An invalid
/// selector or no matches both give an empty list.
pub fn select_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(_) => return Vec::new(),
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn select_one(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el: Element| el.dyn_into::<HtmlElement>().ok())
}

pub fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), AnimationError> {
    let style = element.style();
    for (property, value) in styles {
        style.set_property(property, value)?;
    }
    Ok(())
}
