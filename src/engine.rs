//! Round state machine: consumes discrete key events against a secret
//! target word and reports win/loss transitions.
//!
//! # State Machine
//! - `Playing` is entered whenever a round starts (fresh target, empty
//!   history, empty input).
//! - `Won` and `Lost` are terminal; only `start_round` leaves them.
//! - Letter and backspace events outside their preconditions are ignored,
//!   not errors. Submit surfaces `SubmitError` and leaves state untouched.

use crate::wordbank::{WORD_LENGTH, WordBank};
use std::fmt;

pub const MAX_GUESSES: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// Submit attempted with fewer than five letters entered.
    InvalidLength,
    /// The entered word is not in the accepted-guess set.
    UnknownWord,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => write!(f, "guess must be exactly {WORD_LENGTH} letters"),
            Self::UnknownWord => write!(f, "word is not in the word list"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Outcome of an accepted submit, returned to the caller so it can decide
/// what to announce and whom to notify. There is no hidden broadcast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub status: GameStatus,
    pub won_this_turn: bool,
    pub lost_this_turn: bool,
}

pub struct GuessEngine {
    target: String,
    history: Vec<String>,
    current_input: String,
    status: GameStatus,
    dictionary_check: bool,
}

impl GuessEngine {
    /// Starts the first round. `dictionary_check` controls whether submits
    /// are validated against the bank's accepted-guess set.
    pub fn new(bank: &WordBank, dictionary_check: bool) -> Self {
        Self {
            target: bank.pick_target().to_string(),
            history: Vec::new(),
            current_input: String::new(),
            status: GameStatus::Playing,
            dictionary_check,
        }
    }

    /// Replaces the round wholesale: fresh target, cleared history and
    /// input. Allowed from any state.
    pub fn start_round(&mut self, bank: &WordBank) {
        self.target = bank.pick_target().to_string();
        self.history.clear();
        self.current_input.clear();
        self.status = GameStatus::Playing;
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        MAX_GUESSES - self.history.len()
    }

    /// Appends one letter to the working input. Ignored when the round is
    /// over or the input is already full.
    pub fn append_letter(&mut self, letter: char) {
        if self.status != GameStatus::Playing {
            return;
        }
        if self.current_input.chars().count() < WORD_LENGTH {
            self.current_input.push(letter);
        }
    }

    /// Drops the last letter of the working input, if any. Ignored when the
    /// round is over.
    pub fn backspace(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.current_input.pop();
    }

    /// Commits the working input as a guess.
    ///
    /// Rejections leave the input in place for the player to correct. In a
    /// finished round this is a no-op that reports the standing status.
    pub fn submit_guess(&mut self, bank: &WordBank) -> Result<RoundResult, SubmitError> {
        if self.status != GameStatus::Playing {
            return Ok(RoundResult {
                status: self.status,
                won_this_turn: false,
                lost_this_turn: false,
            });
        }
        if self.current_input.chars().count() != WORD_LENGTH {
            return Err(SubmitError::InvalidLength);
        }
        if self.dictionary_check && !bank.is_valid_guess(&self.current_input) {
            return Err(SubmitError::UnknownWord);
        }

        let guess = std::mem::take(&mut self.current_input);
        let won = guess == self.target;
        self.history.push(guess);

        if won {
            self.status = GameStatus::Won;
        } else if self.history.len() >= MAX_GUESSES {
            self.status = GameStatus::Lost;
        }

        Ok(RoundResult {
            status: self.status,
            won_this_turn: won,
            lost_this_turn: self.status == GameStatus::Lost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_bank() -> WordBank {
        WordBank::new(
            vec!["KAFFE".to_string()],
            vec![
                "NORSK".to_string(),
                "SKOLE".to_string(),
                "KVELD".to_string(),
                "SNAKK".to_string(),
                "TRIST".to_string(),
                "STOLT".to_string(),
            ],
        )
        .unwrap()
    }

    fn type_word(engine: &mut GuessEngine, word: &str) {
        for c in word.chars() {
            engine.append_letter(c);
        }
    }

    #[test]
    fn test_new_round_starts_playing_and_empty() {
        let bank = test_bank();
        let engine = GuessEngine::new(&bank, true);
        assert_eq!(engine.status(), GameStatus::Playing);
        assert!(engine.history().is_empty());
        assert!(engine.current_input().is_empty());
        assert_eq!(engine.target(), "KAFFE");
    }

    #[test]
    fn test_append_stops_at_word_length() {
        let bank = test_bank();
        let mut engine = GuessEngine::new(&bank, true);
        type_word(&mut engine, "NORSKE");
        assert_eq!(engine.current_input(), "NORSK");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let bank = test_bank();
        let mut engine = GuessEngine::new(&bank, true);
        engine.backspace();
        assert!(engine.current_input().is_empty());
        engine.append_letter('N');
        engine.backspace();
        assert!(engine.current_input().is_empty());
    }

    #[test]
    fn test_submit_partial_input_rejected_unchanged() {
        let bank = test_bank();
        let mut engine = GuessEngine::new(&bank, true);
        type_word(&mut engine, "KAF");
        let err = engine.submit_guess(&bank).unwrap_err();
        assert_eq!(err, SubmitError::InvalidLength);
        assert_eq!(engine.current_input(), "KAF");
        assert!(engine.history().is_empty());
        assert_eq!(engine.status(), GameStatus::Playing);
    }

    #[test]
    fn test_submit_unknown_word_rejected_unchanged() {
        let bank = test_bank();
        let mut engine = GuessEngine::new(&bank, true);
        type_word(&mut engine, "QQQQQ");
        let err = engine.submit_guess(&bank).unwrap_err();
        assert_eq!(err, SubmitError::UnknownWord);
        assert_eq!(engine.current_input(), "QQQQQ");
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_lenient_mode_accepts_unknown_word() {
        let bank = test_bank();
        let mut engine = GuessEngine::new(&bank, false);
        type_word(&mut engine, "QQQQQ");
        let result = engine.submit_guess(&bank).unwrap();
        assert_eq!(result.status, GameStatus::Playing);
        assert_eq!(engine.history(), &["QQQQQ".to_string()]);
    }

    #[test]
    fn test_winning_guess_transitions_in_one_step() {
        let bank = test_bank();
        let mut engine = GuessEngine::new(&bank, true);
        type_word(&mut engine, "KAFFE");
        let result = engine.submit_guess(&bank).unwrap();
        assert_eq!(result.status, GameStatus::Won);
        assert!(result.won_this_turn);
        assert!(!result.lost_this_turn);
        assert!(engine.current_input().is_empty());
    }

    #[test]
    fn test_fifth_miss_keeps_playing_sixth_loses() {
        let bank = test_bank();
        let mut engine = GuessEngine::new(&bank, true);
        let misses = ["NORSK", "SKOLE", "KVELD", "SNAKK", "TRIST"];
        for word in misses {
            type_word(&mut engine, word);
            let result = engine.submit_guess(&bank).unwrap();
            assert_eq!(result.status, GameStatus::Playing);
        }
        type_word(&mut engine, "STOLT");
        let result = engine.submit_guess(&bank).unwrap();
        assert_eq!(result.status, GameStatus::Lost);
        assert!(result.lost_this_turn);
        assert!(!result.won_this_turn);
        assert_eq!(engine.history().len(), MAX_GUESSES);
    }

    #[test]
    fn test_history_never_exceeds_max_guesses() {
        let bank = test_bank();
        let mut engine = GuessEngine::new(&bank, true);
        for word in ["NORSK", "SKOLE", "KVELD", "SNAKK", "TRIST", "STOLT"] {
            type_word(&mut engine, word);
            let _ = engine.submit_guess(&bank);
        }
        // Further input and submits must be ignored.
        type_word(&mut engine, "NORSK");
        let result = engine.submit_guess(&bank).unwrap();
        assert_eq!(engine.history().len(), MAX_GUESSES);
        assert_eq!(result.status, GameStatus::Lost);
        assert!(!result.lost_this_turn);
    }

    #[test]
    fn test_stored_guesses_always_full_length() {
        let bank = test_bank();
        let mut engine = GuessEngine::new(&bank, true);
        type_word(&mut engine, "KAF");
        let _ = engine.submit_guess(&bank);
        type_word(&mut engine, "FE");
        let _ = engine.submit_guess(&bank);
        for guess in engine.history() {
            assert_eq!(guess.chars().count(), crate::wordbank::WORD_LENGTH);
        }
    }

    #[test]
    fn test_input_ignored_after_win() {
        let bank = test_bank();
        let mut engine = GuessEngine::new(&bank, true);
        type_word(&mut engine, "KAFFE");
        let _ = engine.submit_guess(&bank);
        engine.append_letter('N');
        assert!(engine.current_input().is_empty());
        engine.backspace();
        let result = engine.submit_guess(&bank).unwrap();
        assert_eq!(result.status, GameStatus::Won);
        assert!(!result.won_this_turn);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_start_round_resets_from_terminal_state() {
        let bank = test_bank();
        let mut engine = GuessEngine::new(&bank, true);
        type_word(&mut engine, "KAFFE");
        let _ = engine.submit_guess(&bank);
        assert_eq!(engine.status(), GameStatus::Won);

        engine.start_round(&bank);
        assert_eq!(engine.status(), GameStatus::Playing);
        assert!(engine.history().is_empty());
        assert!(engine.current_input().is_empty());
        assert_eq!(engine.guesses_left(), MAX_GUESSES);
    }
}
