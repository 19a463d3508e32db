// Library interface for wordle-game
// This allows integration tests to access internal modules

pub mod board;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod scoring;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::{HttpDictionary, WordPick, WordSource, WordValidator};
pub use error::GameError;
pub use game_state::{
    GameInterface, GameSession, Instruction, ROUNDS, Status, UserAction, WORD_LENGTH, game_loop,
    play,
};
pub use scoring::{Feedback, GuessResult, score_guess};
pub use wordbank::{Wordbank, load_wordbank_from_file, load_wordbank_from_str};
