use crate::board::Board;
use crate::debug_log;
use crate::dictionary::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS, WordPick};
use crate::game_state::{GameInterface, Instruction, ROUNDS, UserAction, WORD_LENGTH};
use crate::wordbank::is_valid_word;
use clap::Parser;
use std::collections::VecDeque;
use std::io::BufRead;
use std::path::PathBuf;
use std::time::Duration;

/// Terminal Wordle
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited wordbank file (plays offline)
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Play offline against the built-in wordbank
    #[arg(long)]
    pub offline: bool,

    /// Base URL of the word service
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Play the word of the day instead of a random word
    #[arg(long)]
    pub daily: bool,

    /// Timeout for word service requests, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Read one guess per line instead of the full-screen interface
    #[arg(long)]
    pub plain: bool,

    /// Where to write the log (defaults to the user cache directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.offline || self.wordbank_path.is_some()
    }

    #[must_use]
    pub fn word_pick(&self) -> WordPick {
        if self.daily {
            WordPick::Daily
        } else {
            WordPick::Random
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

enum GuessInput {
    Valid(String),
    Invalid,
    Exit,
}

fn parse_guess(line: &str) -> GuessInput {
    let input = line.trim().to_uppercase();
    match input.as_str() {
        "EXIT" | "QUIT" => GuessInput::Exit,
        _ if is_valid_word(&input) => GuessInput::Valid(input),
        _ => GuessInput::Invalid,
    }
}

/// Keystrokes that replace whatever is in the current row with `guess` and submit it.
fn keystrokes(guess: &str) -> impl Iterator<Item = UserAction> + '_ {
    std::iter::repeat_n(UserAction::Backspace, WORD_LENGTH)
        .chain(guess.chars().map(UserAction::Letter))
        .chain(std::iter::once(UserAction::Submit))
}

/// Line-mode interface: one guess per line, scored rows printed as `WORD  GYXXG`.
pub struct CliInterface<R: BufRead> {
    reader: R,
    queued: VecDeque<UserAction>,
    board: Board,
    printed_rows: usize,
    last_status: String,
    was_loading: bool,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            queued: VecDeque::new(),
            board: Board::new(),
            printed_rows: 0,
            last_status: String::new(),
            was_loading: false,
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                log::warn!("Failed to read guess: {e}");
                None
            }
        }
    }

    fn prompt(&self) {
        println!(
            "\nRow {}/{}: enter a {}-letter guess (or 'exit' to quit):",
            self.board.round, ROUNDS, WORD_LENGTH
        );
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn next_event(&mut self) -> Option<UserAction> {
        while self.queued.is_empty() {
            self.prompt();
            let line = self.read_line()?;
            match parse_guess(&line) {
                GuessInput::Exit => {
                    println!("Exiting.");
                    return Some(UserAction::Exit);
                }
                GuessInput::Valid(guess) => self.queued.extend(keystrokes(&guess)),
                GuessInput::Invalid => {
                    println!("Invalid guess. Please enter {WORD_LENGTH} letters.");
                }
            }
        }
        self.queued.pop_front()
    }

    fn poll_event(&mut self) -> Option<UserAction> {
        None
    }

    fn render(&mut self, instruction: &Instruction) {
        debug_log!("CliInterface::render() - {:?}", instruction);
        self.board.apply(instruction);
    }

    fn flush(&mut self) {
        if self.board.loading && !self.was_loading {
            println!("Checking...");
        }
        self.was_loading = self.board.loading;

        while let Some(row) = self.board.rows.get(self.printed_rows) {
            let Some(code) = row.code() else { break };
            println!("{}  {}", row.word(), code);
            self.printed_rows += 1;
        }

        if self.board.status != self.last_status {
            if !self.board.status.is_empty() {
                println!("{}", self.board.status);
            }
            self.last_status.clone_from(&self.board.status);
        }
    }
}
