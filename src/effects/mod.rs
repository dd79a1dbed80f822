//! Page effects that run beside the particle background. Each one degrades to
//! a no-op when the elements it decorates are missing.

pub mod ripple;
pub mod scroll_reveal;
pub mod typewriter;
