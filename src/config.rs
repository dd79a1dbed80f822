use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::AnimationError;

/// Upper bound on `particle_count`. The connection pass is quadratic.
pub const MAX_PARTICLES: usize = 1000;

/// Tunables for the particle background and the page effects.
///
/// Every field has a default, so a host can pass a partial JSON document
/// and only override what it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Number of particles created at startup (default: 50).
    pub particle_count: usize,
    /// Particles closer than this are joined by a line (default: 100).
    pub link_distance: f64,
    /// Line opacity for two particles at the same position (default: 0.2).
    pub link_max_opacity: f64,
    pub link_line_width: f64,
    /// Link color as 0xRRGGBBAA; the alpha byte is replaced per line.
    pub link_color: u32,
    /// DOM id of the background canvas.
    pub canvas_id: String,
    /// CSS opacity of the whole canvas layer (default: 0.3).
    pub canvas_opacity: f64,
    /// Delay between typed characters (default: 100ms).
    pub typewriter_interval_ms: i32,
    /// Delay after the last character before the cursor disappears.
    pub cursor_removal_delay_ms: i32,
    pub cursor_style: String,
    /// Fraction of a section that must be visible before it is revealed.
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    /// Starting downward offset of hidden sections, in pixels.
    pub reveal_offset_px: u32,
    pub reveal_transition: String,
    /// Lifetime of a button ripple (default: 600ms).
    pub ripple_duration_ms: i32,
    /// Seed for particle placement. `None` draws one from the host.
    pub seed: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            link_distance: 100.0,
            link_max_opacity: 0.2,
            link_line_width: 1.0,
            link_color: 0x3b82f6ff,
            canvas_id: "accessibility-canvas".to_owned(),
            canvas_opacity: 0.3,
            typewriter_interval_ms: 100,
            cursor_removal_delay_ms: 500,
            cursor_style: "2px solid #3b82f6".to_owned(),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),
            reveal_offset_px: 30,
            reveal_transition: "opacity 0.6s ease, transform 0.6s ease".to_owned(),
            ripple_duration_ms: 600,
            seed: None,
        }
    }
}

impl AnimationConfig {
    /// Parse a config from a JSON string. Missing fields keep their default.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), AnimationError> {
        if self.particle_count > MAX_PARTICLES {
            return Err(AnimationError::InvalidConfig(format!(
                "particle_count must be at most {}, got {}",
                MAX_PARTICLES, self.particle_count
            )));
        }
        if !self.link_distance.is_finite() || self.link_distance <= 0.0 {
            return Err(AnimationError::InvalidConfig(format!(
                "link_distance must be positive and finite, got {}",
                self.link_distance
            )));
        }
        if !self.link_line_width.is_finite() || self.link_line_width <= 0.0 {
            return Err(AnimationError::InvalidConfig(format!(
                "link_line_width must be positive and finite, got {}",
                self.link_line_width
            )));
        }
        if !(0.0..=1.0).contains(&self.link_max_opacity) {
            return Err(AnimationError::InvalidConfig(format!(
                "link_max_opacity must be within [0, 1], got {}",
                self.link_max_opacity
            )));
        }
        if !(0.0..=1.0).contains(&self.canvas_opacity) {
            return Err(AnimationError::InvalidConfig(format!(
                "canvas_opacity must be within [0, 1], got {}",
                self.canvas_opacity
            )));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(AnimationError::InvalidConfig(format!(
                "reveal_threshold must be within [0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if self.canvas_id.is_empty() {
            return Err(AnimationError::InvalidConfig(
                "canvas_id must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn link_color(&self) -> Color {
        Color::from_u32(self.link_color)
    }
}
