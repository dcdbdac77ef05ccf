//! The particle set and its per-frame simulate-and-draw pass.

use glam::DVec2;
use rand::Rng;

use crate::color::{Hsl, Ink};
use crate::config::FieldConfig;
use crate::particle::{Bounds, Particle};

/// Where a frame is drawn. The browser implementation wraps a canvas 2D
/// context; tests record the calls.
pub trait DrawSurface {
    fn clear(&mut self, bounds: Bounds);
    fn fill_circle(&mut self, center: DVec2, radius: f64, ink: Ink);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, ink: Ink);
}

/// Counters for one rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles_drawn: usize,
    pub pairs_checked: usize,
    pub links_drawn: usize,
}

/// Opacity of the line joining two particles `distance` apart, or `None`
/// when they are too far apart to be linked.
#[inline]
pub fn link_alpha(distance: f64, link_distance: f64, max_alpha: f64) -> Option<f64> {
    (distance < link_distance).then(|| (max_alpha * (1.0 - distance / link_distance)).max(0.0))
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    link_distance: f64,
    particle_alpha: f64,
    link_alpha: f64,
}

impl ParticleField {
    /// Spawn `config.particle_count` random particles inside `bounds`.
    pub fn spawn<R: Rng>(rng: &mut R, bounds: Bounds, config: &FieldConfig) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(rng, bounds, config))
            .collect();
        Self::from_particles(particles, config)
    }

    pub fn from_particles(particles: Vec<Particle>, config: &FieldConfig) -> Self {
        Self {
            particles,
            link_distance: config.link_distance,
            particle_alpha: config.particle_alpha,
            link_alpha: config.link_alpha,
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Clear, then for each particle in creation order: advance it, draw
    /// it, and link it to every later particle in range. Later particles
    /// have not moved yet this frame when they are paired.
    pub fn render_frame<S: DrawSurface + ?Sized>(
        &mut self,
        bounds: Bounds,
        foreground: Hsl,
        surface: &mut S,
    ) -> FrameStats {
        surface.clear(bounds);
        let mut stats = FrameStats::default();
        let dot_ink = foreground.with_alpha(self.particle_alpha);

        for i in 0..self.particles.len() {
            self.particles[i].advance(bounds);
            let p = self.particles[i];
            surface.fill_circle(p.pos, p.radius, dot_ink);
            stats.particles_drawn += 1;

            for other in &self.particles[i + 1..] {
                stats.pairs_checked += 1;
                let d = p.pos.distance(other.pos);
                if let Some(alpha) = link_alpha(d, self.link_distance, self.link_alpha) {
                    surface.stroke_line(p.pos, other.pos, foreground.with_alpha(alpha));
                    stats.links_drawn += 1;
                }
            }
        }
        stats
    }
}
