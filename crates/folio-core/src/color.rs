//! Theme colour values.
//!
//! The page publishes its ink colour as an HSL triple in the `--foreground`
//! custom property (`"210 40% 98%"`). These types parse that token and turn
//! it back into CSS colour strings with an alpha for canvas fill/stroke.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

/// Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Parse a custom-property token such as `"222.2 84% 4.9%"`.
    ///
    /// Commas between components are accepted, `%` signs are optional.
    pub fn parse(token: &str) -> Result<Self, ColorParseError> {
        let parts: Vec<&str> = token
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 3 {
            return Err(ColorParseError::ComponentCount {
                token: token.trim().to_string(),
                found: parts.len(),
            });
        }
        let h = component(parts[0], false)?;
        let s = component(parts[1], true)?;
        let l = component(parts[2], true)?;
        if !(0.0..=100.0).contains(&s) || !(0.0..=100.0).contains(&l) {
            return Err(ColorParseError::OutOfRange(token.trim().to_string()));
        }
        Ok(Self { h, s, l })
    }

    #[inline]
    pub fn with_alpha(self, alpha: f64) -> Ink {
        Ink { color: self, alpha }
    }
}

fn component(raw: &str, percent: bool) -> Result<f64, ColorParseError> {
    let digits = if percent {
        raw.strip_suffix('%').unwrap_or(raw)
    } else {
        raw.strip_suffix("deg").unwrap_or(raw)
    };
    digits
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ColorParseError::InvalidComponent(raw.to_string()))
}

impl FromStr for Hsl {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hsl::parse(s)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

/// A colour plus opacity, ready to hand to a fill or stroke style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ink {
    pub color: Hsl,
    pub alpha: f64,
}

impl Ink {
    /// CSS Color 4 form, e.g. `hsl(210 40% 98% / 0.15)`.
    pub fn css(&self) -> String {
        format!("hsl({} / {})", self.color, self.alpha)
    }
}

/// Active page theme. Only the value is modeled here; the page stores it as
/// a class on the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub const LIGHT_FOREGROUND: Hsl = Hsl::new(222.2, 84.0, 4.9);
    pub const DARK_FOREGROUND: Hsl = Hsl::new(210.0, 40.0, 98.0);

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[inline]
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Theme named by the first `light`/`dark` entry of a class list.
    pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        classes
            .into_iter()
            .find_map(Theme::from_class)
            .unwrap_or_default()
    }

    /// Foreground used when the stylesheet token cannot be read.
    #[inline]
    pub fn fallback_foreground(self) -> Hsl {
        match self {
            Theme::Light => Self::LIGHT_FOREGROUND,
            Theme::Dark => Self::DARK_FOREGROUND,
        }
    }
}
