//! Word source and word validator seams, plus the remote implementation
//! backed by the `words.dev-apis.com` service.

use crate::error::GameError;
use crate::info_log;
use crate::wordbank::normalize_word;
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://words.dev-apis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Supplies the secret word for a session.
pub trait WordSource {
    fn fetch_word(&self) -> Result<String, GameError>;
}

/// Answers whether a guess is a dictionary word.
pub trait WordValidator {
    fn validate(&self, word: &str) -> Result<bool, GameError>;
}

/// How a source chooses the secret word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordPick {
    /// The word of the day; stable for a calendar date.
    Daily,
    #[default]
    Random,
}

#[derive(Debug, Deserialize)]
struct WordOfTheDay {
    word: String,
}

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    word: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateResponse {
    valid_word: bool,
}

fn parse_word_response(body: &str) -> Result<String, GameError> {
    let parsed: WordOfTheDay = serde_json::from_str(body)?;
    normalize_word(&parsed.word)
}

fn parse_validate_response(body: &str) -> Result<bool, GameError> {
    let parsed: ValidateResponse = serde_json::from_str(body)?;
    Ok(parsed.valid_word)
}

pub struct HttpDictionary {
    client: Client,
    base_url: String,
    pick: WordPick,
}

impl HttpDictionary {
    pub fn new(base_url: &str, timeout: Duration, pick: WordPick) -> Result<Self, GameError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            pick,
        })
    }

    fn word_url(&self) -> String {
        match self.pick {
            WordPick::Daily => format!("{}/word-of-the-day", self.base_url),
            WordPick::Random => format!("{}/word-of-the-day?random=1", self.base_url),
        }
    }

    fn validate_url(&self) -> String {
        format!("{}/validate-word", self.base_url)
    }

    fn read_body(response: Response, url: &str) -> Result<String, GameError> {
        let status = response.status();
        if !status.is_success() {
            return Err(GameError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text()?)
    }
}

impl WordSource for HttpDictionary {
    fn fetch_word(&self) -> Result<String, GameError> {
        let url = self.word_url();
        info_log!("Fetching secret word from {}", url);
        let response = self.client.get(&url).send()?;
        parse_word_response(&Self::read_body(response, &url)?)
    }
}

impl WordValidator for HttpDictionary {
    fn validate(&self, word: &str) -> Result<bool, GameError> {
        let url = self.validate_url();
        info_log!("Validating '{}' against {}", word, url);
        let response = self
            .client
            .post(&url)
            .json(&ValidateRequest { word })
            .send()?;
        parse_validate_response(&Self::read_body(response, &url)?)
    }
}
