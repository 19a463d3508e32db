use crate::game_state::{CellClass, Instruction, ROUNDS, StatusColor, WORD_LENGTH};
use crate::scoring::Feedback;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellState {
    Empty,
    Entered,
    Correct,
    Present,
    Absent,
    Flash,
}

impl CellState {
    fn feedback(self) -> Option<Feedback> {
        match self {
            Self::Correct => Some(Feedback::Correct),
            Self::Present => Some(Feedback::Present),
            Self::Absent => Some(Feedback::Absent),
            Self::Empty | Self::Entered | Self::Flash => None,
        }
    }
}

impl From<CellClass> for CellState {
    fn from(class: CellClass) -> Self {
        match class {
            CellClass::Correct => Self::Correct,
            CellClass::Present => Self::Present,
            CellClass::Absent => Self::Absent,
            CellClass::Flash => Self::Flash,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GuessRow {
    pub letters: [char; WORD_LENGTH],
    pub states: [CellState; WORD_LENGTH],
}

impl GuessRow {
    fn new() -> Self {
        Self {
            letters: [' '; WORD_LENGTH],
            states: [CellState::Empty; WORD_LENGTH],
        }
    }

    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().collect()
    }

    /// `G`/`Y`/`X` code once every cell is scored.
    #[must_use]
    pub fn code(&self) -> Option<String> {
        self.states
            .iter()
            .map(|s| s.feedback().map(Feedback::to_char))
            .collect()
    }

    #[cfg(test)]
    fn is_flashing(&self) -> bool {
        self.states.contains(&CellState::Flash)
    }

    fn clear_flash(&mut self) {
        for (state, letter) in self.states.iter_mut().zip(self.letters) {
            if *state == CellState::Flash {
                *state = if letter == ' ' {
                    CellState::Empty
                } else {
                    CellState::Entered
                };
            }
        }
    }
}

/// What the player sees: the grid, status line, loading flag and round label.
#[derive(Debug, Clone)]
pub struct Board {
    pub rows: [GuessRow; ROUNDS],
    pub status: String,
    pub status_color: StatusColor,
    pub loading: bool,
    pub round: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: [GuessRow::new(); ROUNDS],
            status: String::new(),
            status_color: StatusColor::Neutral,
            loading: false,
            round: 1,
        }
    }
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, instruction: &Instruction) {
        match instruction {
            Instruction::SetCellText { row, col, letter } => {
                let Some(guess_row) = self.rows.get_mut(*row) else {
                    return;
                };
                if *col >= WORD_LENGTH {
                    return;
                }
                guess_row.clear_flash();
                guess_row.letters[*col] = letter.unwrap_or(' ');
                guess_row.states[*col] = if letter.is_some() {
                    CellState::Entered
                } else {
                    CellState::Empty
                };
            }
            Instruction::SetCellClass { row, col, class } => {
                if let Some(state) = self
                    .rows
                    .get_mut(*row)
                    .and_then(|r| r.states.get_mut(*col))
                {
                    *state = (*class).into();
                }
            }
            Instruction::SetStatus { text, color } => {
                self.status.clone_from(text);
                self.status_color = *color;
            }
            Instruction::SetLoading(loading) => self.loading = *loading,
            Instruction::SetRoundLabel(round) => self.round = *round,
        }
    }
}
