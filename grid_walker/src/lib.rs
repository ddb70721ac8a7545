//! Random self-avoiding walk over a square grid.
//!
//! A [`GridWalker`] owns an `N x N` grid of cells. It starts with one random
//! cell lit, and each [`GridWalker::step`] lights a random unlit neighbour of
//! the last lit cell. The walk ends `Complete` when every cell is lit, or
//! `Stuck` when the last cell has no unlit neighbour.
//!
//! Rendering is left to the host: read [`Grid::rows`] or
//! [`Grid::active_mask`] each frame, and use a [`FrameThrottle`] to decide
//! when to step.

pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod pacing;
pub mod picker;
pub mod walk;

pub use config::{ValidConfig, WalkConfig};
pub use direction::Direction;
pub use error::WalkError;
pub use grid::{BoundaryRule, Cell, Grid, GridSize};
pub use pacing::FrameThrottle;
pub use picker::{Picker, RandomPicker, ScriptedPicker};
pub use walk::{GridWalker, WalkState, WalkStatus};
