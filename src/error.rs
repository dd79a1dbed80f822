// Error type for everything that can go wrong while wiring animations into the page

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum AnimationError {
    NoWindow,
    NoDocument,
    NoBody,
    NoHead,
    CreateElement(String),
    NoCanvasContext,
    InvalidConfig(String),
    Js(String),
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationError::NoWindow => write!(f, "no global `window` exists"),
            AnimationError::NoDocument => write!(f, "window has no `document`"),
            AnimationError::NoBody => write!(f, "document has no `body`"),
            AnimationError::NoHead => write!(f, "document has no `head`"),
            AnimationError::CreateElement(tag) => {
                write!(f, "unable to create <{}> element", tag)
            }
            AnimationError::NoCanvasContext => {
                write!(f, "canvas has no 2d rendering context")
            }
            AnimationError::InvalidConfig(reason) => {
                write!(f, "invalid animation config: {}", reason)
            }
            AnimationError::Js(message) => write!(f, "javascript error: {}", message),
        }
    }
}

impl std::error::Error for AnimationError {}

impl From<JsValue> for AnimationError {
    fn from(value: JsValue) -> Self {
        AnimationError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<AnimationError> for JsValue {
    fn from(err: AnimationError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
