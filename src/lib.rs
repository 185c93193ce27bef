//! Pure tic-tac-toe game logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over board snapshots
//! - **Engine**: [`GameState`] owns the history, applies moves, and
//!   jumps between recorded steps (branch-discard on the next move)
//! - **View model**: [`project`] turns engine state into display data
//!   (status line, ordered move list, highlighted winning cells)
//! - **Invariants**: first-class checked properties, asserted after
//!   every transition in debug builds
//!
//! The crate exposes plain data and operations; rendering is left to a
//! presentation layer that calls back into the engine.
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{project, GameState};
//!
//! let mut game = GameState::new();
//! game.apply_move(0); // X
//! game.apply_move(4); // O
//! game.apply_move(1); // X
//!
//! let view = project(&game);
//! assert_eq!(view.status_text, "Next player: O");
//!
//! // Time travel: revisit the position after X's first move,
//! // then branch from it. The discarded future is dropped on
//! // the next move, not on the jump itself.
//! game.jump_to_step(1)?;
//! game.apply_move(8); // O, replacing the old step 2
//! assert_eq!(game.history().len(), 3);
//! # Ok::<(), tictactoe_replay::StepError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod invariants;
mod line;
mod rules;
mod types;
mod view;

// Crate-level exports - Domain types
pub use line::Line;
pub use types::{Board, Player, Square};

// Crate-level exports - Rules
pub use rules::{detect_winner, is_full};

// Crate-level exports - Engine
pub use engine::{GameState, HistoryEntry, Snapshot, StepError};

// Crate-level exports - View model
pub use view::{MoveEntry, ViewModel, project};

// Crate-level exports - Invariants
pub use invariants::{
    GameStateInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    StepInRangeInvariant, TurnBalanceInvariant,
};
