// The particle background without any browser in it: a fixed set of particles
// bouncing inside a surface, joined by fading lines when they come close.

use rand::Rng;
use vecmath::Vector2;

use crate::color::Color;
use crate::config::AnimationConfig;
use crate::particle::Particle;
use crate::surface::Surface;

/// A line between two particles closer than the link distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub distance: f64,
    pub opacity: f64,
}

/// What one tick did, mostly useful for tests and debugging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles_drawn: usize,
    pub pairs_checked: usize,
    pub lines_drawn: usize,
}

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    link_distance: f64,
    link_max_opacity: f64,
    link_line_width: f64,
    link_color: Color,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(
        config: &AnimationConfig,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> ParticleField {
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        ParticleField::from_particles(config, width, height, particles)
    }

    pub fn from_particles(
        config: &AnimationConfig,
        width: f64,
        height: f64,
        particles: Vec<Particle>,
    ) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
            link_distance: config.link_distance,
            link_max_opacity: config.link_max_opacity,
            link_line_width: config.link_line_width,
            link_color: config.link_color(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Only the bounds change; particles outside the new bounds are steered
    /// back in by their own reflection, one step per tick.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Line opacity for a pair at `distance`, fading linearly to zero at the
    /// link distance. `None` if the pair is too far apart to be linked.
    pub fn link_opacity(&self, distance: f64) -> Option<f64> {
        if distance < self.link_distance {
            Some(self.link_max_opacity * (1.0 - distance / self.link_distance))
        } else {
            None
        }
    }

    /// Every unordered pair (i < j) closer than the link distance, in
    /// enumeration order. O(n^2): fine for a few hundred particles, past that
    /// this wants a spatial grid.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let particles = &self.particles;
        (0..particles.len())
            .flat_map(move |i| ((i + 1)..particles.len()).map(move |j| (i, j)))
            .filter_map(move |(i, j)| {
                let (p1, p2) = (&particles[i], &particles[j]);
                let distance = p1.distance_to(p2);
                self.link_opacity(distance).map(|opacity| Connection {
                    from: p1.pos,
                    to: p2.pos,
                    distance,
                    opacity,
                })
            })
    }

    pub fn pair_count(&self) -> usize {
        let n = self.particles.len();
        n * n.saturating_sub(1) / 2
    }

    /// Run one animation frame: clear, move and draw every particle in order,
    /// then draw the links.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> Result<FrameStats, S::Error> {
        surface.clear(self.width, self.height);

        let mut stats = FrameStats::default();
        for particle in &mut self.particles {
            particle.update(self.width, self.height);
            particle.draw(surface)?;
            stats.particles_drawn += 1;
        }

        stats.pairs_checked = self.pair_count();
        for connection in self.connections() {
            let css_color = self.link_color.to_css_with_alpha(connection.opacity);
            surface.stroke_line(
                connection.from,
                connection.to,
                &css_color,
                self.link_line_width,
            )?;
            stats.lines_drawn += 1;
        }

        Ok(stats)
    }
}
