use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use wordle_game::cli::{Cli, CliInterface, parse_cli};
use wordle_game::logging;
use wordle_game::tui::TuiInterface;
use wordle_game::{
    GameError, HttpDictionary, Status, WordSource, WordValidator, Wordbank, play,
};

fn run<D>(cli: &Cli, dictionary: D) -> Result<Status, GameError>
where
    D: WordSource + WordValidator + Send + Sync + 'static,
{
    let dictionary = Arc::new(dictionary);
    if cli.plain {
        let mut interface = CliInterface::new(io::stdin().lock());
        play(&mut interface, dictionary)
    } else {
        let mut interface = TuiInterface::new()?;
        play(&mut interface, dictionary)
    }
}

fn start(cli: &Cli) -> Result<Status, GameError> {
    if !cli.is_offline() {
        log::info!("Using word service at {}", cli.api_base);
        let dictionary = HttpDictionary::new(&cli.api_base, cli.timeout(), cli.word_pick())?;
        return run(cli, dictionary);
    }

    let wordbank = match &cli.wordbank_path {
        Some(path) => Wordbank::from_file(path, cli.word_pick())?,
        None => Wordbank::embedded(cli.word_pick())?,
    };
    log::info!("Playing offline with {} words", wordbank.len());
    run(cli, wordbank)
}

fn main() -> ExitCode {
    let cli = parse_cli();

    if let Some(path) = cli.log_file.clone().or_else(logging::default_log_path)
        && let Err(e) = logging::init(&path)
    {
        eprintln!("Logging disabled, could not open '{}': {e}", path.display());
    }

    match start(&cli) {
        Ok(status) => {
            log::info!("Session finished: {status:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
