// Simple color struct, created from an unsigned 32 representing RRGGBBAA

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Colors a particle can be given at creation.
pub const PALETTE: [Color; 3] = [
    Color::from_u32(0x3b82f680), // blue
    Color::from_u32(0x9333ea80), // purple
    Color::from_u32(0xec489980), // pink
];

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    pub fn from_palette<R: Rng + ?Sized>(rng: &mut R) -> Color {
        PALETTE[rng.gen_range(0, PALETTE.len())]
    }

    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.2})",
            self.r,
            self.g,
            self.b,
            self.a as f64 / 255.0
        )
    }

    // Alpha is passed through untouched so faded links keep their precision
    pub fn to_css_with_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}
