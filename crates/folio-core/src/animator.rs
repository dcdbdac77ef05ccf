//! Start/stop lifecycle around a [`ParticleField`].
//!
//! The animator is a two-state machine. `start` spawns a fresh field and
//! asks the scheduler for a frame; every `on_frame` renders and asks for the
//! next one; `stop` cancels whatever is pending and drops the field. A frame
//! callback that still arrives after `stop` renders nothing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Hsl;
use crate::config::FieldConfig;
use crate::error::ConfigError;
use crate::field::{DrawSurface, FrameStats, ParticleField};
use crate::particle::Bounds;

/// Opaque id of a requested frame (`requestAnimationFrame` handle on the web).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Display-synchronised frame requests.
pub trait FrameScheduler {
    /// Ask for one callback on the next refresh. `None` when the host
    /// refused, which ends the loop until the next `start`.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorState {
    Stopped,
    Running,
}

enum Phase {
    Stopped,
    Running {
        field: ParticleField,
        pending: Option<FrameHandle>,
    },
}

pub struct Animator<R = StdRng> {
    config: FieldConfig,
    bounds: Bounds,
    foreground: Hsl,
    rng: R,
    phase: Phase,
    frames: u64,
}

impl Animator<StdRng> {
    /// Seeded from `config.seed` when set, otherwise from entropy.
    pub fn new(config: FieldConfig, foreground: Hsl) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, foreground, rng)
    }
}

impl<R: Rng> Animator<R> {
    pub fn with_rng(config: FieldConfig, foreground: Hsl, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            bounds: Bounds::default(),
            foreground,
            rng,
            phase: Phase::Stopped,
            frames: 0,
        })
    }

    pub fn state(&self) -> AnimatorState {
        match self.phase {
            Phase::Stopped => AnimatorState::Stopped,
            Phase::Running { .. } => AnimatorState::Running,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state() == AnimatorState::Running
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn foreground(&self) -> Hsl {
        self.foreground
    }

    /// Frames rendered since the last `start`.
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> Option<&ParticleField> {
        match &self.phase {
            Phase::Running { field, .. } => Some(field),
            Phase::Stopped => None,
        }
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        match &self.phase {
            Phase::Running { pending, .. } => *pending,
            Phase::Stopped => None,
        }
    }

    /// Stopped -> Running. Returns `false` if already running.
    pub fn start<F: FrameScheduler + ?Sized>(&mut self, bounds: Bounds, scheduler: &mut F) -> bool {
        if self.is_running() {
            log::warn!("[field] start ignored; already running");
            return false;
        }
        self.bounds = bounds;
        let field = ParticleField::spawn(&mut self.rng, bounds, &self.config);
        self.frames = 0;
        let pending = scheduler.request_frame();
        log::debug!(
            "[field] start particles={} surface={}x{}",
            field.len(),
            bounds.width,
            bounds.height
        );
        if pending.is_none() {
            log::warn!("[field] host refused the first frame request");
        }
        self.phase = Phase::Running { field, pending };
        true
    }

    /// Render one frame and schedule the next. A no-op while stopped.
    pub fn on_frame<S, F>(&mut self, surface: &mut S, scheduler: &mut F) -> Option<FrameStats>
    where
        S: DrawSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        let Phase::Running { field, pending } = &mut self.phase else {
            log::trace!("[field] frame after stop dropped");
            return None;
        };
        *pending = None;
        let stats = field.render_frame(self.bounds, self.foreground, surface);
        self.frames += 1;
        *pending = scheduler.request_frame();
        log::trace!(
            "[field] frame={} pairs={} links={}",
            self.frames,
            stats.pairs_checked,
            stats.links_drawn
        );
        Some(stats)
    }

    /// New reflection boundary for subsequent frames. Particles stay where
    /// they are.
    pub fn resize(&mut self, bounds: Bounds) {
        if bounds != self.bounds {
            log::debug!("[field] resize {}x{}", bounds.width, bounds.height);
        }
        self.bounds = bounds;
    }

    pub fn set_foreground(&mut self, foreground: Hsl) {
        self.foreground = foreground;
    }

    /// Running -> Stopped. Safe to call repeatedly.
    pub fn stop<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) {
        match std::mem::replace(&mut self.phase, Phase::Stopped) {
            Phase::Running { pending, .. } => {
                if let Some(handle) = pending {
                    scheduler.cancel_frame(handle);
                }
                log::debug!("[field] stop after {} frames", self.frames);
            }
            Phase::Stopped => {}
        }
    }
}
