//! first_crash — run carts around a track until two of them meet.
//!
//! Loads a layout (or uses the built-in two-loop example), runs the tick
//! scheduler until the first collision, and prints the crash site as `X,Y`
//! (column, row).  A fault (a cart leaving the grid or landing on something
//! that is not track) exits with an error instead.
//!
//! ```text
//! first_crash tracks.txt --max-ticks 50000 --csv-dir output/
//! ```

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;

use mc_cart::{Cart, CartError};
use mc_core::{CollisionCheck, Tick};
use mc_output::{CsvWriter, SimOutputObserver, render_board};
use mc_sim::{Collision, RunOutcome, SimBuilder, SimObserver};
use mc_track::{TrackGrid, load_layout_path, load_layout_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_MAX_TICKS: u64 = 10_000;

const DEFAULT_LAYOUT: &str = "\
/->-\\
|   |  /----\\
| /-+--+-\\  |
| | |  | v  |
\\-+-/  \\-+--/
  \\------/
";

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "first_crash", about = "Find the first cart collision on a track layout")]
struct Args {
    /// Layout file; the built-in two-loop example if omitted.
    layout: Option<PathBuf>,

    /// Give up after this many ticks without a collision.
    #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
    max_ticks: u64,

    /// Check for shared cells right after each tick instead of at the start
    /// of the next one.
    #[arg(long)]
    eager: bool,

    /// Write cart_snapshots.csv and tick_summaries.csv into this directory.
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Print the board after every tick.
    #[arg(long)]
    show_board: bool,
}

// ── Observers ─────────────────────────────────────────────────────────────────

/// Prints the board every tick and the crash site at the end.
struct BoardPrinter {
    show_every_tick: bool,
}

impl SimObserver for BoardPrinter {
    fn on_snapshot(&mut self, tick: Tick, grid: &TrackGrid, carts: &[Cart]) {
        if self.show_every_tick {
            println!("── {tick} ──");
            print!("{}", render_board(grid, carts, None));
        }
    }

    fn on_collision(&mut self, collision: &Collision, _carts: &[Cart]) {
        println!("CRASH at {} on {}", collision.position, collision.tick);
    }

    fn on_fault(&mut self, tick: Tick, error: &CartError, _carts: &[Cart]) {
        eprintln!("fault during tick {}: {error}", tick.0 + 1);
    }
}

/// Fans every callback out to the printer and, when enabled, the CSV writer.
struct Observers {
    printer: BoardPrinter,
    csv:     Option<SimOutputObserver<CsvWriter>>,
}

impl SimObserver for Observers {
    fn on_tick_end(&mut self, tick: Tick, carts: &[Cart]) {
        if let Some(csv) = &mut self.csv {
            csv.on_tick_end(tick, carts);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, grid: &TrackGrid, carts: &[Cart]) {
        self.printer.on_snapshot(tick, grid, carts);
        if let Some(csv) = &mut self.csv {
            csv.on_snapshot(tick, grid, carts);
        }
    }

    fn on_collision(&mut self, collision: &Collision, carts: &[Cart]) {
        self.printer.on_collision(collision, carts);
        if let Some(csv) = &mut self.csv {
            csv.on_collision(collision, carts);
        }
    }

    fn on_fault(&mut self, tick: Tick, error: &CartError, carts: &[Cart]) {
        self.printer.on_fault(tick, error, carts);
        if let Some(csv) = &mut self.csv {
            csv.on_fault(tick, error, carts);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        if let Some(csv) = &mut self.csv {
            csv.on_sim_end(final_tick);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load the layout.
    let (grid, placements) = match &args.layout {
        Some(path) => load_layout_path(path)
            .with_context(|| format!("loading layout {}", path.display()))?,
        None => load_layout_reader(Cursor::new(DEFAULT_LAYOUT))?,
    };
    println!(
        "Track: {} rows × {} cols, {} carts",
        grid.row_count(),
        grid.width(),
        placements.len()
    );

    // 2. Build the sim.
    let check = if args.eager { CollisionCheck::EndOfTick } else { CollisionCheck::NextTickStart };
    let mut sim = SimBuilder::new(grid, placements)
        .max_ticks(args.max_ticks)
        .collision_check(check)
        .build()?;

    // 3. Set up output.
    let csv = match &args.csv_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Some(SimOutputObserver::new(CsvWriter::new(dir)?))
        }
        None => None,
    };
    let mut obs = Observers {
        printer: BoardPrinter { show_every_tick: args.show_board },
        csv,
    };

    // 4. Run.
    let t0 = Instant::now();
    let outcome = sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.csv.as_mut().and_then(SimOutputObserver::take_error) {
        eprintln!("output error: {e}");
    }

    // 5. Report.
    match outcome? {
        RunOutcome::Collision(collision) => {
            print!("{}", render_board(&sim.grid, &sim.carts, Some(collision.position)));
            println!("First crash: {}", collision.position);
            println!(
                "Ticks: {}  |  elapsed {:.3} ms",
                collision.tick.0,
                elapsed.as_secs_f64() * 1e3
            );
            Ok(())
        }
        RunOutcome::TickLimit(tick) => {
            bail!("no collision within {} ticks", tick.0)
        }
    }
}
