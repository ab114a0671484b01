use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Secret words a round can be built from.
pub const EMBEDDED_TARGETS: &str = include_str!("resources/targets.txt");
/// Additional words accepted as guesses but never drawn as targets.
pub const EMBEDDED_GUESSES: &str = include_str!("resources/guesses.txt");

pub const WORD_LENGTH: usize = 5;

/// The recognized uppercase alphabet: A-Z plus the Norwegian letters.
pub fn is_alphabet_letter(c: char) -> bool {
    c.is_ascii_uppercase() || matches!(c, 'Æ' | 'Ø' | 'Å')
}

fn is_playable_word(word: &str) -> bool {
    word.chars().count() == WORD_LENGTH && word.chars().all(is_alphabet_letter)
}

pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|word| is_playable_word(word))
        .collect()
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_uppercase();
        if is_playable_word(&word) {
            words.push(word);
        }
    }
    Ok(words)
}

#[derive(Debug, PartialEq, Eq)]
pub enum WordBankError {
    /// No usable target words survived loading. Fatal at startup.
    EmptyTargets,
}

impl fmt::Display for WordBankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTargets => write!(f, "word bank contains no target words"),
        }
    }
}

impl std::error::Error for WordBankError {}

/// Read-only dictionary shared by every round: the target pool plus the
/// superset of words accepted as guesses.
#[derive(Debug)]
pub struct WordBank {
    targets: Vec<String>,
    valid: HashSet<String>,
}

impl WordBank {
    /// Builds a bank from normalized word lists. `extra_guesses` widens the
    /// accepted-guess set; targets are always accepted as guesses.
    pub fn new(targets: Vec<String>, extra_guesses: Vec<String>) -> Result<Self, WordBankError> {
        if targets.is_empty() {
            return Err(WordBankError::EmptyTargets);
        }
        let mut valid: HashSet<String> = targets.iter().cloned().collect();
        valid.extend(extra_guesses);
        Ok(Self { targets, valid })
    }

    /// Bank built from the embedded resources.
    pub fn embedded() -> Result<Self, WordBankError> {
        Self::new(
            load_words_from_str(EMBEDDED_TARGETS),
            load_words_from_str(EMBEDDED_GUESSES),
        )
    }

    /// Uniform random draw from the target pool. The pool is non-empty by
    /// construction, so this never fails.
    pub fn pick_target(&self) -> &str {
        let index = rand::thread_rng().gen_range(0..self.targets.len());
        &self.targets[index]
    }

    /// Case-insensitive membership test against the accepted-guess set.
    /// Candidates of the wrong length are rejected before any lookup.
    #[must_use]
    pub fn is_valid_guess(&self, candidate: &str) -> bool {
        if candidate.chars().count() != WORD_LENGTH {
            return false;
        }
        self.valid.contains(&candidate.to_uppercase())
    }

    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_bank() -> WordBank {
        WordBank::new(
            vec!["KAFFE".to_string(), "BÅTEN".to_string()],
            vec!["BRUKT".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_load_words_filters_length_by_chars() {
        // BÅTEN is five characters but six bytes; it must survive the filter.
        let words = load_words_from_str("båten\nbordet\nfint\nkaffe\n");
        assert_eq!(words, vec!["BÅTEN".to_string(), "KAFFE".to_string()]);
    }

    #[test]
    fn test_load_words_rejects_non_alphabet() {
        let words = load_words_from_str("kaf3e\nka fe\nkaffe\n");
        assert_eq!(words, vec!["KAFFE".to_string()]);
    }

    #[test]
    fn test_load_words_uppercases_norwegian_letters() {
        let words = load_words_from_str("lærer\ndøren\n");
        assert_eq!(words, vec!["LÆRER".to_string(), "DØREN".to_string()]);
    }

    #[test]
    fn test_empty_targets_is_fatal() {
        let result = WordBank::new(Vec::new(), vec!["KAFFE".to_string()]);
        assert_eq!(result.unwrap_err(), WordBankError::EmptyTargets);
    }

    #[test]
    fn test_pick_target_draws_from_target_pool() {
        let bank = small_bank();
        for _ in 0..20 {
            let target = bank.pick_target();
            assert!(target == "KAFFE" || target == "BÅTEN");
        }
    }

    #[test]
    fn test_is_valid_guess_accepts_targets_and_extras() {
        let bank = small_bank();
        assert!(bank.is_valid_guess("KAFFE"));
        assert!(bank.is_valid_guess("BRUKT"));
    }

    #[test]
    fn test_is_valid_guess_case_insensitive() {
        let bank = small_bank();
        assert!(bank.is_valid_guess("kaffe"));
        assert!(bank.is_valid_guess("båten"));
    }

    #[test]
    fn test_is_valid_guess_rejects_unknown_word() {
        let bank = small_bank();
        assert!(!bank.is_valid_guess("XYZZY"));
    }

    #[test]
    fn test_is_valid_guess_length_short_circuits() {
        let bank = small_bank();
        assert!(!bank.is_valid_guess("KAFF"));
        assert!(!bank.is_valid_guess("KAFFEE"));
        assert!(!bank.is_valid_guess(""));
    }

    #[test]
    fn test_embedded_bank_loads() {
        let bank = WordBank::embedded().unwrap();
        assert!(bank.target_count() > 100);
        assert!(bank.is_valid_guess("NORSK"));
        assert!(bank.is_valid_guess("BRUKE"));
    }
}
