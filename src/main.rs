use ordle::activity::LogReporter;
use ordle::cli::{CliInterface, parse_cli};
use ordle::game::game_loop;
use ordle::identity::IdentityStore;
use ordle::info_log;
use ordle::tui::TuiInterface;
use ordle::wordbank::{
    EMBEDDED_GUESSES, EMBEDDED_TARGETS, WordBank, load_words_from_file, load_words_from_str,
};
use std::io;
use std::process::ExitCode;

fn load_list(path: Option<&str>, embedded: &str) -> io::Result<Vec<String>> {
    match path {
        Some(path) => load_words_from_file(path),
        None => Ok(load_words_from_str(embedded)),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = parse_cli();

    let targets = match load_list(cli.targets_path.as_deref(), EMBEDDED_TARGETS) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load target words: {e}");
            return ExitCode::FAILURE;
        }
    };
    let extra_guesses = match load_list(cli.guesses_path.as_deref(), EMBEDDED_GUESSES) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load guess words: {e}");
            return ExitCode::FAILURE;
        }
    };
    let bank = match WordBank::new(targets, extra_guesses) {
        Ok(bank) => bank,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let store = IdentityStore::at_default_location();
    if cli.reset_identity {
        store.clear();
    }
    let identity = store.get_or_create();
    if identity.is_new {
        info_log!("generated new identity: {}", identity.id);
    } else {
        info_log!("recognized returning player: {}", identity.id);
    }

    let dictionary_check = !cli.no_dict_check;
    let mut reporter = LogReporter;

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(
            &bank,
            dictionary_check,
            &identity,
            &mut reporter,
            &mut interface,
        );
    } else {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to initialize terminal UI: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(
            &bank,
            dictionary_check,
            &identity,
            &mut reporter,
            &mut interface,
        );
    }

    ExitCode::SUCCESS
}
