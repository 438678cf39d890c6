//! Soak runner: fires random taps, commits, undos and redos at a controller
//! and checks the history invariants after every event.
//!
//! Run with:
//! `cargo run --release --bin random_taps -- [events] [seed]`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tap_board::board_state::board_types::{Coordinate, PieceGrid};
use tap_board::config::BoardConfig;
use tap_board::controller::board_controller::BoardSelectionController;
use tap_board::controller::board_outcome::BoardOutcome;
use tap_board::utils::render_board::render_board;

#[derive(Debug, Default)]
struct Tally {
    taps: usize,
    commits: usize,
    undos: usize,
    redos: usize,
    rejections: usize,
}

fn main() -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    let events = match args.next() {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| format!("invalid event count '{raw}'"))?,
        None => 10_000,
    };
    let seed = match args.next() {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| format!("invalid seed '{raw}'"))?,
        None => rand::rng().random(),
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let mut controller = BoardSelectionController::new(PieceGrid::new_game());
    let mut tally = Tally::default();

    for event in 0..events {
        let pieces_before = controller.board().piece_count();

        let outcome = match rng.random_range(0..10) {
            0..=5 => {
                tally.taps += 1;
                let cell = Coordinate::new(rng.random_range(0..8), rng.random_range(0..8))
                    .map_err(|err| err.to_string())?;
                controller.on_cell_tapped(cell)
            }
            6 | 7 => controller.on_commit_requested(),
            8 => controller.on_undo_requested(),
            _ => controller.on_redo_requested(),
        };

        match &outcome {
            BoardOutcome::MoveCommitted { .. } => {
                tally.commits += 1;
                if !controller.redo_history().is_empty() {
                    return Err(format!("event {event}: redo history survived a commit"));
                }
            }
            BoardOutcome::MoveUndone { .. } => tally.undos += 1,
            BoardOutcome::MoveRedone { .. } => tally.redos += 1,
            other if other.is_rejection() => tally.rejections += 1,
            _ => {}
        }

        if controller.board().piece_count() > pieces_before {
            return Err(format!("event {event}: piece count grew after {outcome:?}"));
        }
    }

    println!("seed {seed}, {events} events");
    println!("{tally:?}");
    println!(
        "undo depth {}, redo depth {}",
        controller.undo_history().len(),
        controller.redo_history().len()
    );
    println!("{}", render_board(controller.board(), &BoardConfig::default()));
    Ok(())
}
