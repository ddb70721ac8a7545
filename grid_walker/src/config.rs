//! Walker configuration.
//!
//! [`WalkConfig`] collects everything a host needs to start a walk: grid
//! size, frame pacing, boundary rule and an optional seed. [`validate`]
//! turns it into the checked values the kernel accepts.
//!
//! [`validate`]: WalkConfig::validate

use crate::error::WalkError;
use crate::grid::{BoundaryRule, GridSize};
use crate::pacing::{DEFAULT_FRAMES_PER_STEP, FrameThrottle};
use crate::picker::RandomPicker;
use crate::walk::GridWalker;

/// Grid edge length used when the host supplies none.
pub const DEFAULT_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkConfig {
    /// Grid edge length.
    pub size: usize,
    /// Frames between walk steps.
    pub frames_per_step: u32,
    pub boundary: BoundaryRule,
    /// Fixed seed for a reproducible walk; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            frames_per_step: DEFAULT_FRAMES_PER_STEP,
            boundary: BoundaryRule::GridSize,
            seed: None,
        }
    }
}

/// Checked form of a [`WalkConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidConfig {
    pub size: GridSize,
    pub frames_per_step: u32,
    pub boundary: BoundaryRule,
    pub seed: Option<u64>,
}

impl WalkConfig {
    pub fn validate(&self) -> Result<ValidConfig, WalkError> {
        let size = GridSize::new(self.size)?;
        if self.frames_per_step == 0 {
            return Err(WalkError::InvalidPacing);
        }
        let boundary = self.boundary.validate()?;
        Ok(ValidConfig {
            size,
            frames_per_step: self.frames_per_step,
            boundary,
            seed: self.seed,
        })
    }
}

impl ValidConfig {
    pub fn picker(&self) -> RandomPicker {
        match self.seed {
            Some(seed) => RandomPicker::seeded(seed),
            None => RandomPicker::from_os_rng(),
        }
    }

    pub fn throttle(&self) -> FrameThrottle {
        FrameThrottle::new(self.frames_per_step)
    }

    pub fn start(&self, picker: &mut RandomPicker) -> GridWalker {
        GridWalker::initialize(self.size, self.boundary, picker)
    }
}
