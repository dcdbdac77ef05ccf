//! Tuning for the particle field.
//!
//! Defaults reproduce the hero background as shipped: 50 particles drifting at
//! most a quarter pixel per frame, linked when closer than 150 px.

use crate::error::ConfigError;

// Reference values
pub const DEFAULT_PARTICLE_COUNT: usize = 50;
pub const DEFAULT_MAX_SPEED: f64 = 0.25; // px per frame, per axis
pub const DEFAULT_MIN_RADIUS: f64 = 1.0;
pub const DEFAULT_MAX_RADIUS: f64 = 3.0;
pub const DEFAULT_LINK_DISTANCE: f64 = 150.0; // px
pub const DEFAULT_PARTICLE_ALPHA: f64 = 0.15;
pub const DEFAULT_LINK_ALPHA: f64 = 0.1; // opacity of a zero-length link

// Pairs are checked every frame, so cost grows with the square of the count.
pub const MAX_PARTICLE_COUNT: usize = 2000;

// Host-page attribute keys accepted by `FieldConfig::apply_attribute`
pub const ATTR_PARTICLES: &str = "data-particles";
pub const ATTR_SEED: &str = "data-seed";
pub const ATTR_LINK_DISTANCE: &str = "data-link-distance";
pub const ATTR_MAX_SPEED: &str = "data-max-speed";
pub const ATTR_COLOR: &str = "data-color";

pub const ATTRIBUTE_KEYS: [&str; 5] = [
    ATTR_PARTICLES,
    ATTR_SEED,
    ATTR_LINK_DISTANCE,
    ATTR_MAX_SPEED,
    ATTR_COLOR,
];

/// When the foreground colour is looked up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorResolution {
    /// Re-read the theme token before every frame.
    #[default]
    PerFrame,
    /// Read once per mount; later changes need an explicit refresh.
    AtStart,
}

impl ColorResolution {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "per-frame" => Some(ColorResolution::PerFrame),
            "at-start" => Some(ColorResolution::AtStart),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub link_distance: f64,
    pub particle_alpha: f64,
    pub link_alpha: f64,
    /// Fixed seed for reproducible layouts; `None` draws from entropy.
    pub seed: Option<u64>,
    pub color_resolution: ColorResolution,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            max_speed: DEFAULT_MAX_SPEED,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            link_distance: DEFAULT_LINK_DISTANCE,
            particle_alpha: DEFAULT_PARTICLE_ALPHA,
            link_alpha: DEFAULT_LINK_ALPHA,
            seed: None,
            color_resolution: ColorResolution::PerFrame,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::ParticleCount {
                count: self.particle_count,
                max: MAX_PARTICLE_COUNT,
            });
        }
        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err(ConfigError::MaxSpeed(self.max_speed));
        }
        if !(self.min_radius > 0.0 && self.min_radius < self.max_radius)
            || !self.max_radius.is_finite()
        {
            return Err(ConfigError::RadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if !self.link_distance.is_finite() || self.link_distance <= 0.0 {
            return Err(ConfigError::LinkDistance(self.link_distance));
        }
        check_alpha("particle_alpha", self.particle_alpha)?;
        check_alpha("link_alpha", self.link_alpha)?;
        Ok(())
    }

    /// Apply one `data-*` override from the host element.
    ///
    /// Unknown keys are ignored so pages can carry unrelated attributes. A
    /// rejected value leaves the config untouched.
    pub fn apply_attribute(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let raw = value.trim();
        match key {
            ATTR_PARTICLES => {
                let n: usize = raw.parse().map_err(|_| invalid(ATTR_PARTICLES, value))?;
                if n > MAX_PARTICLE_COUNT {
                    return Err(ConfigError::ParticleCount {
                        count: n,
                        max: MAX_PARTICLE_COUNT,
                    });
                }
                self.particle_count = n;
            }
            ATTR_SEED => {
                self.seed = Some(raw.parse().map_err(|_| invalid(ATTR_SEED, value))?);
            }
            ATTR_LINK_DISTANCE => {
                let d: f64 = raw
                    .parse()
                    .map_err(|_| invalid(ATTR_LINK_DISTANCE, value))?;
                if !d.is_finite() || d <= 0.0 {
                    return Err(invalid(ATTR_LINK_DISTANCE, value));
                }
                self.link_distance = d;
            }
            ATTR_MAX_SPEED => {
                let s: f64 = raw.parse().map_err(|_| invalid(ATTR_MAX_SPEED, value))?;
                if !s.is_finite() || s < 0.0 {
                    return Err(invalid(ATTR_MAX_SPEED, value));
                }
                self.max_speed = s;
            }
            ATTR_COLOR => {
                self.color_resolution =
                    ColorResolution::parse(raw).ok_or_else(|| invalid(ATTR_COLOR, value))?;
            }
            _ => {}
        }
        Ok(())
    }
}

fn check_alpha(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Alpha { name, value })
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidAttribute {
        key,
        value: value.to_string(),
    }
}
