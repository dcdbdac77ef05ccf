use glam::DVec2;
use rand::Rng;

use crate::config::FieldConfig;

/// Pixel size of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Viewport sizes can arrive as NaN or negative from a detached host;
    /// those collapse to zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

#[inline]
fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// One drifting dot of the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
}

impl Particle {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64) -> Self {
        Self { pos, vel, radius }
    }

    /// Uniform placement in `[0, w) x [0, h)`, velocity in
    /// `[-max_speed, max_speed)` per axis, radius in `[min, max)`.
    pub fn random<R: Rng>(rng: &mut R, bounds: Bounds, config: &FieldConfig) -> Self {
        let pos = DVec2::new(rng.gen::<f64>() * bounds.width, rng.gen::<f64>() * bounds.height);
        let span = config.max_speed * 2.0;
        let vel = DVec2::new(
            (rng.gen::<f64>() - 0.5) * span,
            (rng.gen::<f64>() - 0.5) * span,
        );
        let radius =
            config.min_radius + rng.gen::<f64>() * (config.max_radius - config.min_radius);
        Self { pos, vel, radius }
    }

    /// Move one frame's worth and bounce off the surface edges.
    ///
    /// The position is never clamped. A component that ends up outside the
    /// surface gets its velocity pointed back inwards, which for a normal
    /// crossing is a single sign flip.
    pub fn advance(&mut self, bounds: Bounds) {
        self.pos += self.vel;
        if self.pos.x < 0.0 {
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x > bounds.width {
            self.vel.x = -self.vel.x.abs();
        }
        if self.pos.y < 0.0 {
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y > bounds.height {
            self.vel.y = -self.vel.y.abs();
        }
    }
}
