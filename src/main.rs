use hashspell::{SpellChecker, SuggestionConfig, repl};
use std::{env, io, process};

const DEFAULT_DICTIONARY: &str = "dictionary.txt";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let dict_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DICTIONARY.into());

    let checker = match SpellChecker::from_word_list_file(&dict_path, SuggestionConfig::default()) {
        Ok(checker) => checker,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    if let Err(e) = repl::run(&checker, stdin.lock(), io::stdout()) {
        log::error!("prompt loop failed: {}", e);
        process::exit(1);
    }
}
