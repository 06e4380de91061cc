//! Fluent builder for constructing a [`Sim`].

use mc_cart::Cart;
use mc_core::{CollisionCheck, SimConfig};
use mc_track::{CartPlacement, TrackGrid, parse_layout};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`TrackGrid`] + [`CartPlacement`]s — from [`mc_track::parse_layout`] or
///   the file loaders, or both at once via [`SimBuilder::from_layout`].
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                          |
/// |-------------------------|----------------------------------|
/// | `.config(c)`            | `SimConfig::default()`           |
/// | `.max_ticks(n)`         | uncapped                         |
/// | `.collision_check(c)`   | `CollisionCheck::NextTickStart`  |
/// | `.output_interval(n)`   | 1 (snapshot every tick)          |
///
/// # Example
///
/// ```rust,ignore
/// let (grid, placements) = load_layout_path(path)?;
/// let mut sim = SimBuilder::new(grid, placements)
///     .max_ticks(10_000)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    grid:         TrackGrid,
    placements:   Vec<CartPlacement>,
    config:       SimConfig,
    layout_error: Option<String>,
}

impl SimBuilder {
    pub fn new(grid: TrackGrid, placements: Vec<CartPlacement>) -> Self {
        Self { grid, placements, config: SimConfig::default(), layout_error: None }
    }

    /// Parse an in-memory layout, one row per line.
    ///
    /// A layout that fails to parse is reported by [`build`][Self::build].
    pub fn from_layout(layout: &str) -> Self {
        match parse_layout(layout.lines()) {
            Ok((grid, placements)) => Self::new(grid, placements),
            Err(e) => {
                let mut builder = Self::new(TrackGrid::default(), Vec::new());
                builder.layout_error = Some(e.to_string());
                builder
            }
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_ticks(mut self, max_ticks: u64) -> Self {
        self.config.max_ticks = Some(max_ticks);
        self
    }

    pub fn collision_check(mut self, check: CollisionCheck) -> Self {
        self.config.collision_check = check;
        self
    }

    /// Snapshot every `interval` ticks; 0 disables snapshots.
    pub fn output_interval(mut self, interval: u64) -> Self {
        self.config.output_interval_ticks = interval;
        self
    }

    /// Validate placements and return a ready-to-run [`Sim`].
    ///
    /// Every cart must start on a straight segment.  Two carts starting on the
    /// same cell is *not* rejected here: the first tick reports it as a
    /// collision at `T0`.
    pub fn build(self) -> SimResult<Sim> {
        if let Some(msg) = self.layout_error {
            return Err(SimError::Config(msg));
        }
        if self.placements.is_empty() {
            return Err(SimError::Config("layout has no carts".into()));
        }

        for p in &self.placements {
            let on_straight = self
                .grid
                .segment_at(p.position)
                .is_some_and(|segment| segment.is_straight());
            if !on_straight {
                return Err(SimError::InvalidPlacement { cart: p.id, position: p.position });
            }
        }

        let carts = self.placements.into_iter().map(Cart::from).collect();
        Ok(Sim::new(self.config, self.grid, carts))
    }
}
