use crate::dictionary::{WordPick, WordSource, WordValidator};
use crate::error::GameError;
use crate::game_state::WORD_LENGTH;
use chrono::{Datelike, Local, NaiveDate, Utc};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

#[must_use]
pub fn is_valid_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Trims and uppercases `raw`, rejecting anything that is not a playable word.
pub fn normalize_word(raw: &str) -> Result<String, GameError> {
    let word = raw.trim().to_uppercase();
    if is_valid_word(&word) {
        Ok(word)
    } else {
        Err(GameError::InvalidWord(raw.trim().to_string()))
    }
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .filter_map(|line| normalize_word(line).ok())
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, GameError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Ok(word) = normalize_word(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Local word list acting as both secret-word source and dictionary.
#[derive(Debug, Clone)]
pub struct Wordbank {
    words: Vec<String>,
    lookup: HashSet<String>,
    pick: WordPick,
}

impl Wordbank {
    pub fn new(words: Vec<String>, pick: WordPick) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordbank);
        }
        let lookup = words.iter().cloned().collect();
        Ok(Self {
            words,
            lookup,
            pick,
        })
    }

    pub fn embedded(pick: WordPick) -> Result<Self, GameError> {
        Self::new(load_wordbank_from_str(EMBEDDED_WORDBANK), pick)
    }

    pub fn from_file<P: AsRef<Path>>(path: P, pick: WordPick) -> Result<Self, GameError> {
        Self::new(load_wordbank_from_file(path)?, pick)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(&word.to_uppercase())
    }

    /// The same date always maps to the same word.
    #[must_use]
    pub fn word_for_date(&self, date: NaiveDate) -> &str {
        let day = i64::from(date.num_days_from_ce());
        self.word_at(day)
    }

    fn word_at(&self, n: i64) -> &str {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = n.rem_euclid(self.words.len() as i64) as usize;
        &self.words[index]
    }
}

impl WordSource for Wordbank {
    fn fetch_word(&self) -> Result<String, GameError> {
        let word = match self.pick {
            WordPick::Daily => self.word_for_date(Local::now().date_naive()),
            WordPick::Random => self.word_at(i64::from(Utc::now().timestamp_subsec_nanos())),
        };
        Ok(word.to_string())
    }
}

impl WordValidator for Wordbank {
    fn validate(&self, word: &str) -> Result<bool, GameError> {
        Ok(self.contains(word))
    }
}
