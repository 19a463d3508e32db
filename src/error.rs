use crate::game_state::WORD_LENGTH;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("'{0}' is not a {len}-letter word", len = WORD_LENGTH)]
    InvalidWord(String),

    #[error("dictionary request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("dictionary returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("malformed dictionary response: {0}")]
    Body(#[from] serde_json::Error),

    #[error("failed to read wordbank: {0}")]
    Io(#[from] std::io::Error),

    #[error("wordbank contains no usable words")]
    EmptyWordbank,

    #[error("word check stopped before answering")]
    WorkerGone,
}
