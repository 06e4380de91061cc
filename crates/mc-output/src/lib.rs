//! `mc-output` — presentation for the minecart track simulator.
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`render`]   | `render_board` — the track with carts (and `X`) overlaid   |
//! | [`csv`]      | `CsvWriter` — `cart_snapshots.csv`, `tick_summaries.csv`   |
//! | [`observer`] | `SimOutputObserver<W>` — drives any `OutputWriter`         |
//!
//! # Usage
//!
//! ```rust,ignore
//! use mc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod render;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use render::render_board;
pub use row::{CartSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
