use crate::game_state::WORD_LENGTH;
use std::collections::HashMap;

/// Outcome for a single letter of a scored guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct, // Green
    Present, // Yellow
    Absent,  // Gray
}

impl Feedback {
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub feedback: [Feedback; WORD_LENGTH],
    pub exact: bool,
}

impl GuessResult {
    /// Feedback in `G`/`Y`/`X` notation, e.g. `XGYXX`.
    #[must_use]
    pub fn code(&self) -> String {
        self.feedback.iter().map(|f| f.to_char()).collect()
    }
}

fn letter_counts(word: &[char]) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for &c in word {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Scores `guess` against `secret`.
///
/// Exact matches consume a letter's budget before any Present marks are
/// handed out, so a repeated guess letter is only colored as many times as
/// it occurs in the secret. Positions missing from a short guess score Absent.
#[must_use]
pub fn score_guess(guess: &str, secret: &str) -> GuessResult {
    let guess: Vec<char> = guess.chars().collect();
    let secret: Vec<char> = secret.chars().collect();
    let mut remaining = letter_counts(&secret);
    let mut feedback = [Feedback::Absent; WORD_LENGTH];

    // First pass: greens
    for (i, slot) in feedback.iter_mut().enumerate() {
        if let Some(&g) = guess.get(i)
            && secret.get(i) == Some(&g)
        {
            *slot = Feedback::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count -= 1;
            }
        }
    }

    // Second pass: yellows, limited by what the greens left over
    for (i, slot) in feedback.iter_mut().enumerate() {
        if *slot == Feedback::Correct {
            continue;
        }
        let Some(g) = guess.get(i) else { continue };
        if let Some(count) = remaining.get_mut(g)
            && *count > 0
        {
            *slot = Feedback::Present;
            *count -= 1;
        }
    }

    GuessResult {
        feedback,
        exact: guess == secret,
    }
}
