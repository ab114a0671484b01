// Library interface for ordle
// This allows integration tests to access internal modules

pub mod activity;
pub mod cli;
pub mod engine;
pub mod feedback;
pub mod game;
pub mod identity;
pub mod logging;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use activity::{ActivityKind, ActivityReporter, LogReporter};
pub use engine::{GameStatus, GuessEngine, MAX_GUESSES, RoundResult, SubmitError};
pub use feedback::{CellFeedback, color_guess};
pub use game::{BoardView, GameAction, GameInterface, game_loop};
pub use identity::{Identity, IdentityStore};
pub use wordbank::{WORD_LENGTH, WordBank, load_words_from_file, load_words_from_str};
