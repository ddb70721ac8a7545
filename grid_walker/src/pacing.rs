// pacing.rs - Frame-counter throttle for the host's update loop

/// Frames between two walk steps when nothing else is configured.
pub const DEFAULT_FRAMES_PER_STEP: u32 = 15;

/// Counts rendered frames and fires once every `threshold` frames.
///
/// This is frame pacing, not wall-clock timing: a faster display steps the
/// walk faster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameThrottle {
    threshold: u32,
    counter: u32,
}

impl FrameThrottle {
    /// `threshold` must be at least 1; `WalkConfig::validate` enforces this.
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            counter: 1,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Call once per frame. Returns true on frames where the walk should step.
    pub fn tick(&mut self) -> bool {
        if self.counter % self.threshold == 0 {
            self.counter = 1;
            true
        } else {
            self.counter += 1;
            false
        }
    }

    pub fn reset(&mut self) {
        self.counter = 1;
    }
}

impl Default for FrameThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_FRAMES_PER_STEP)
    }
}
