// Simple particle struct to keep track of individual position, velocity, size and color

use rand::Rng;
use vecmath::Vector2;

use crate::color::Color;
use crate::surface::Surface;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
    pub color: Color,
}

impl Particle {
    pub const MIN_SIZE: f64 = 1.0;
    pub const MAX_SIZE: f64 = 4.0;
    pub const MAX_SPEED: f64 = 1.0;

    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, size: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            size,
            color,
        }
    }

    // Uniform position inside the surface, speed in [-1, 1) per axis,
    // size in [1, 4) and one of the palette colors
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let size = rng.gen::<f64>() * (Particle::MAX_SIZE - Particle::MIN_SIZE) + Particle::MIN_SIZE;
        let vel_x = rng.gen::<f64>() * 2.0 * Particle::MAX_SPEED - Particle::MAX_SPEED;
        let vel_y = rng.gen::<f64>() * 2.0 * Particle::MAX_SPEED - Particle::MAX_SPEED;
        let color = Color::from_palette(rng);
        Particle::new([pos_x, pos_y], [vel_x, vel_y], size, color)
    }

    /// Move by one step of velocity, pointing an axis back inside once the
    /// particle is past that edge. Position is not clamped, so a particle can
    /// sit outside the surface until its velocity carries it back in.
    pub fn update(&mut self, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        self.vel[0] = reflect_inward(self.pos[0], self.vel[0], width);
        self.vel[1] = reflect_inward(self.pos[1], self.vel[1], height);
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.fill_circle(self.pos, self.size, &self.color)
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, other.pos))
    }
}

// Velocity on one axis after a step, heading into [0, max] when outside it
fn reflect_inward(pos: f64, vel: f64, max: f64) -> f64 {
    if pos > max {
        -vel.abs()
    } else if pos < 0.0 {
        vel.abs()
    } else {
        vel
    }
}
