// main.rs - Desktop host for the grid walk animation

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use egui::Color32;
use grid_walker::config::DEFAULT_SIZE;
use grid_walker::{
    BoundaryRule, FrameThrottle, GridWalker, RandomPicker, ValidConfig, WalkConfig, WalkStatus,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod ui;

/// Animate a random walk lighting up a square grid.
#[derive(Parser, Debug)]
#[command(name = "proc-grid")]
struct Args {
    /// Grid edge length.
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Seed for a reproducible walk.
    #[arg(long)]
    seed: Option<u64>,

    /// Detect row edges with a fixed width of 5 columns, whatever the grid size.
    #[arg(long)]
    legacy_columns: bool,
}

impl Args {
    fn walk_config(&self) -> WalkConfig {
        WalkConfig {
            size: self.size,
            boundary: if self.legacy_columns {
                BoundaryRule::LEGACY
            } else {
                BoundaryRule::GridSize
            },
            seed: self.seed,
            ..WalkConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.walk_config().validate().context("invalid walk configuration")?;
    info!(
        size = config.size.get(),
        frames_per_step = config.frames_per_step,
        seed = ?config.seed,
        "starting proc-grid"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Proc Grid",
        options,
        Box::new(move |_cc| Box::new(ProcGrid::new(config))),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}

/// One walker, its pacing and its colours.
pub struct ProcGrid {
    config: ValidConfig,
    picker: RandomPicker,
    walker: GridWalker,
    throttle: FrameThrottle,

    pub active_color: Color32,
    pub idle_color: Color32,
}

impl ProcGrid {
    pub fn new(config: ValidConfig) -> Self {
        let mut picker = config.picker();
        let walker = config.start(&mut picker);
        Self {
            config,
            picker,
            walker,
            throttle: config.throttle(),
            active_color: Color32::from_rgb(255, 192, 203), // pink
            idle_color: Color32::from_rgb(0x13, 0x13, 0x13),
        }
    }

    pub fn walker(&self) -> &GridWalker {
        &self.walker
    }

    /// Fresh grid and start cell. A seeded picker keeps its stream, so
    /// restarts are reproducible too.
    pub fn restart(&mut self) {
        self.walker = self.config.start(&mut self.picker);
        self.throttle.reset();
        info!("walk restarted");
    }

    /// Called once per rendered frame. Returns true if the walk stepped.
    pub fn advance_frame(&mut self) -> bool {
        if self.walker.status() != WalkStatus::Running {
            return false;
        }
        if !self.throttle.tick() {
            return false;
        }
        self.walker.step(&mut self.picker);
        true
    }
}
