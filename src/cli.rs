use crate::debug_log;
use crate::engine::{GameStatus, SubmitError};
use crate::game::{BoardView, GameAction, GameInterface};
use crate::wordbank::{WORD_LENGTH, is_alphabet_letter};
use clap::Parser;
use std::collections::VecDeque;
use std::io::BufRead;

/// Ordle CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited target-word file
    #[arg(short = 'i', long = "input")]
    pub targets_path: Option<String>,

    /// Path to a newline-delimited file of extra accepted guesses
    #[arg(long = "guesses")]
    pub guesses_path: Option<String>,

    /// Accept any 5-letter guess without a dictionary lookup
    #[arg(long = "no-dict-check")]
    pub no_dict_check: bool,

    /// Play line-by-line on stdin instead of the full-screen interface
    #[arg(long)]
    pub plain: bool,

    /// Forget the stored player identity before starting
    #[arg(long = "reset-identity")]
    pub reset_identity: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

fn is_well_formed_word(word: &str) -> bool {
    word.chars().count() == WORD_LENGTH && word.chars().all(is_alphabet_letter)
}

/// Line-based implementation of the game interface.
///
/// Each prompt consumes one line: commands pass through directly, and a
/// well-formed word expands into per-letter events followed by a submit so
/// the engine sees the same event stream the full-screen interface sends.
pub struct CliInterface<R: BufRead> {
    reader: R,
    pending: VecDeque<GameAction>,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn read_line_action(&mut self) -> Option<GameAction> {
        println!(
            "\nEnter your guess (5 letters, or 'exit' to quit, or 'next' to start a new round):"
        );
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) | Err(_) => return Some(GameAction::Exit),
            Ok(_) => {}
        }
        let input = input.trim().to_uppercase();

        match input.as_str() {
            "EXIT" => Some(GameAction::Exit),
            "NEXT" | "NY" => Some(GameAction::NewRound),
            _ if is_well_formed_word(&input) => {
                // A rejected submit leaves its letters in the engine; a
                // fresh line replaces them, so clear the row first.
                self.pending
                    .extend(std::iter::repeat_n(GameAction::Backspace, WORD_LENGTH));
                self.pending.extend(input.chars().map(GameAction::Letter));
                self.pending.push_back(GameAction::Submit);
                self.pending.pop_front()
            }
            _ => {
                println!("Invalid guess. Please enter 5 letters.");
                None
            }
        }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round_start(&mut self, target_count: usize) {
        println!("New round started. Drawing from {target_count} target words.");
        println!("Guess the 5-letter word. You have 6 tries.");
    }

    fn read_action(&mut self) -> Option<GameAction> {
        if let Some(action) = self.pending.pop_front() {
            debug_log!("read_action() - replaying queued action: {:?}", action);
            return Some(action);
        }
        self.read_line_action()
    }

    fn display_board(&mut self, view: &BoardView) {
        // Called once per applied event; stay quiet until the line's
        // queued events have all landed so each input line prints one
        // board, and skip it while a rejected guess is still in place.
        if !self.pending.is_empty() || !view.current_input.is_empty() {
            return;
        }
        for row in &view.rows {
            let word: String = row.letters.iter().collect();
            let marks: String = row.feedback.iter().map(|f| f.to_char()).collect();
            println!("{word}  {marks}");
        }
        if view.status == GameStatus::Playing && !view.rows.is_empty() {
            println!("{} guesses left.", view.guesses_left);
        }
    }

    fn display_rejection(&mut self, error: SubmitError) {
        match error {
            SubmitError::InvalidLength => println!("Guess must be exactly 5 letters."),
            SubmitError::UnknownWord => println!("Not in the word list. Try another word."),
        }
    }

    fn display_win(&mut self, target: &str, guess_count: usize) {
        println!("You got it in {guess_count}! The word was {target}.");
        println!("Type 'next' for a new round or 'exit' to quit.");
    }

    fn display_loss(&mut self, target: &str) {
        println!("Out of guesses. The word was {target}.");
        println!("Type 'next' for a new round or 'exit' to quit.");
    }

    fn display_exit(&mut self) {
        println!("Exiting.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn drain<R: BufRead>(interface: &mut CliInterface<R>, count: usize) -> Vec<GameAction> {
        let mut actions = Vec::new();
        while actions.len() < count {
            if let Some(action) = interface.read_action() {
                actions.push(action);
            }
        }
        actions
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli {
            targets_path: None,
            guesses_path: None,
            no_dict_check: false,
            plain: false,
            reset_identity: false,
        };
        assert!(cli.targets_path.is_none());
        assert!(!cli.no_dict_check);
    }

    #[test]
    fn test_word_line_expands_to_row_clear_letters_and_submit() {
        let mut interface = CliInterface::new(Cursor::new("KAFFE\n"));
        let actions = drain(&mut interface, 11);
        assert_eq!(actions[..5], vec![GameAction::Backspace; 5]);
        assert_eq!(
            actions[5..],
            vec![
                GameAction::Letter('K'),
                GameAction::Letter('A'),
                GameAction::Letter('F'),
                GameAction::Letter('F'),
                GameAction::Letter('E'),
                GameAction::Submit,
            ]
        );
    }

    #[test]
    fn test_lowercase_input_is_uppercased() {
        let mut interface = CliInterface::new(Cursor::new("båten\n"));
        let actions = drain(&mut interface, 11);
        assert_eq!(actions[6], GameAction::Letter('Å'));
        assert_eq!(actions[10], GameAction::Submit);
    }

    #[test]
    fn test_exit_command() {
        let mut interface = CliInterface::new(Cursor::new("exit\n"));
        assert_eq!(interface.read_action(), Some(GameAction::Exit));
    }

    #[test]
    fn test_new_round_commands() {
        let mut interface = CliInterface::new(Cursor::new("next\nny\n"));
        assert_eq!(interface.read_action(), Some(GameAction::NewRound));
        assert_eq!(interface.read_action(), Some(GameAction::NewRound));
    }

    #[test]
    fn test_eof_becomes_exit() {
        let mut interface = CliInterface::new(Cursor::new(""));
        assert_eq!(interface.read_action(), Some(GameAction::Exit));
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let mut interface = CliInterface::new(Cursor::new("KAF\nKAFFEE\nKAF3E\nexit\n"));
        assert_eq!(interface.read_action(), None);
        assert_eq!(interface.read_action(), None);
        assert_eq!(interface.read_action(), None);
        assert_eq!(interface.read_action(), Some(GameAction::Exit));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut interface = CliInterface::new(Cursor::new("  KAFFE  \n"));
        let actions = drain(&mut interface, 11);
        assert_eq!(actions[5], GameAction::Letter('K'));
    }

    #[test]
    fn test_rejected_word_is_replaced_by_next_line() {
        // The second line's leading backspaces clear whatever the first
        // submit left behind before its own letters arrive.
        let mut interface = CliInterface::new(Cursor::new("QUERT\nKAFFE\n"));
        let first = drain(&mut interface, 11);
        assert_eq!(first[10], GameAction::Submit);
        let second = drain(&mut interface, 11);
        assert_eq!(second[..5], vec![GameAction::Backspace; 5]);
        assert_eq!(second[5], GameAction::Letter('K'));
    }
}
