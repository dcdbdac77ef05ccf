use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ColorParseError {
    #[error("expected 3 HSL components in {token:?}, found {found}")]
    ComponentCount { token: String, found: usize },
    #[error("invalid HSL component {0:?}")]
    InvalidComponent(String),
    #[error("saturation/lightness out of range in {0:?}")]
    OutOfRange(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("particle_count must be at most {max}, got {count}")]
    ParticleCount { count: usize, max: usize },
    #[error("max_speed must be finite and non-negative, got {0}")]
    MaxSpeed(f64),
    #[error("radius range must satisfy 0 < min < max, got [{min}, {max})")]
    RadiusRange { min: f64, max: f64 },
    #[error("link_distance must be finite and positive, got {0}")]
    LinkDistance(f64),
    #[error("{name} must lie in [0, 1], got {value}")]
    Alpha { name: &'static str, value: f64 },
    #[error("invalid value {value:?} for {key}")]
    InvalidAttribute { key: &'static str, value: String },
}
