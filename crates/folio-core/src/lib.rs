//! Platform-free logic behind the folio hero section.
//!
//! Nothing here touches the DOM. The web front-end supplies a
//! [`DrawSurface`] and a [`FrameScheduler`]; tests supply recording fakes.

pub mod animator;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod particle;
pub mod typing;

pub use animator::*;
pub use color::*;
pub use config::{ColorResolution, FieldConfig};
pub use error::*;
pub use field::*;
pub use particle::*;
pub use typing::*;
