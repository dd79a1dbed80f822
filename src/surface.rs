// Drawing seam between the particle simulation and whatever draws it.
// In the browser that's a 2d canvas context; tests record the calls instead.

use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::color::Color;

pub trait Surface {
    type Error;

    /// Wipe the rectangle (0, 0, width, height).
    fn clear(&mut self, width: f64, height: f64);

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: &Color,
    ) -> Result<(), Self::Error>;

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        css_color: &str,
        line_width: f64,
    ) -> Result<(), Self::Error>;
}

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        CanvasSurface { context }
    }
}

#[allow(deprecated)]
impl Surface for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: &Color,
    ) -> Result<(), JsValue> {
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.begin_path();
        self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0)?;
        self.context.fill();
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        css_color: &str,
        line_width: f64,
    ) -> Result<(), JsValue> {
        self.context.set_stroke_style(&JsValue::from_str(css_color));
        self.context.set_line_width(line_width);
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
        Ok(())
    }
}
