//! Game loop and the interface seam between the engine and its front-ends.
//!
//! Front-ends implement [`GameInterface`]: they turn raw input into
//! discrete [`GameAction`] events and render [`BoardView`] snapshots. The
//! loop owns the engine, applies every event synchronously, and is the
//! only place that dispatches the win notification.

use crate::activity::{ActivityKind, ActivityReporter};
use crate::debug_log;
use crate::engine::{GameStatus, GuessEngine, SubmitError};
use crate::feedback::{CellFeedback, color_guess};
use crate::identity::Identity;
use crate::info_log;
use crate::wordbank::WordBank;

/// One discrete player event. Each is applied to completion before the
/// next is read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameAction {
    Letter(char),
    Backspace,
    Submit,
    NewRound,
    Exit,
}

/// A submitted row, ready to render.
#[derive(Clone, Debug)]
pub struct BoardRow {
    pub letters: Vec<char>,
    pub feedback: Vec<CellFeedback>,
}

/// Immutable rendering snapshot. Coloring is recomputed from history on
/// every snapshot; the history itself is never touched.
#[derive(Clone, Debug)]
pub struct BoardView {
    pub rows: Vec<BoardRow>,
    pub current_input: String,
    pub status: GameStatus,
    pub guesses_left: usize,
}

impl BoardView {
    #[must_use]
    pub fn from_engine(engine: &GuessEngine) -> Self {
        let rows = engine
            .history()
            .iter()
            .map(|guess| BoardRow {
                letters: guess.chars().collect(),
                feedback: color_guess(guess, engine.target()),
            })
            .collect();
        Self {
            rows,
            current_input: engine.current_input().to_string(),
            status: engine.status(),
            guesses_left: engine.guesses_left(),
        }
    }
}

/// Contract between the game loop and a front-end (line-based or TUI).
pub trait GameInterface {
    /// A new round has begun against a bank of `target_count` words.
    fn display_round_start(&mut self, target_count: usize);

    /// Blocks for the next player event. `None` means the input was
    /// consumed without producing an event (bad line, ignored key).
    fn read_action(&mut self) -> Option<GameAction>;

    fn display_board(&mut self, view: &BoardView);

    /// A submit was rejected; the working input is still in place.
    fn display_rejection(&mut self, error: SubmitError);

    fn display_win(&mut self, target: &str, guess_count: usize);

    fn display_loss(&mut self, target: &str);

    fn display_exit(&mut self);
}

/// Runs rounds until the player exits.
///
/// The win report fires after the engine has already committed the Won
/// state; reporting trouble can neither roll it back nor block it.
pub fn game_loop(
    bank: &WordBank,
    dictionary_check: bool,
    identity: &Identity,
    reporter: &mut dyn ActivityReporter,
    interface: &mut dyn GameInterface,
) {
    let mut engine = GuessEngine::new(bank, dictionary_check);
    interface.display_round_start(bank.target_count());
    interface.display_board(&BoardView::from_engine(&engine));

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - applying action: {:?}", action);

        match action {
            GameAction::Exit => {
                interface.display_exit();
                break;
            }
            GameAction::NewRound => {
                engine.start_round(bank);
                interface.display_round_start(bank.target_count());
            }
            GameAction::Letter(letter) => engine.append_letter(letter),
            GameAction::Backspace => engine.backspace(),
            GameAction::Submit => match engine.submit_guess(bank) {
                Ok(result) => {
                    if result.won_this_turn {
                        info_log!("game_loop() - round won, reporting activity");
                        reporter.report_activity(&identity.id, ActivityKind::Game);
                        interface.display_win(engine.target(), engine.history().len());
                    } else if result.lost_this_turn {
                        interface.display_loss(engine.target());
                    }
                }
                Err(error) => interface.display_rejection(error),
            },
        }

        interface.display_board(&BoardView::from_engine(&engine));
    }
}
