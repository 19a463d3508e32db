//! Game session state machine and the event loop that drives it.
//!
//! The session never touches a terminal or the network. Every operation
//! returns the [`Instruction`]s a display should apply, and validation is
//! split into [`GameSession::begin_validation`] / [`GameSession::complete_validation`]
//! so the loop can run the dictionary check on a worker thread.

use crate::dictionary::{WordSource, WordValidator};
use crate::error::GameError;
use crate::scoring::{Feedback, GuessResult, score_guess};
use crate::wordbank::normalize_word;
use crate::{debug_log, info_log};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

pub const WORD_LENGTH: usize = 5;
pub const ROUNDS: usize = 6;

const BUSY_POLL_INTERVAL_MS: u64 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    Correct,
    Present,
    Absent,
    /// Transient marker for a rejected guess.
    Flash,
}

impl From<Feedback> for CellClass {
    fn from(feedback: Feedback) -> Self {
        match feedback {
            Feedback::Correct => Self::Correct,
            Feedback::Present => Self::Present,
            Feedback::Absent => Self::Absent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Neutral,
    Success,
    Failure,
}

/// A rendering step for the display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    SetCellText {
        row: usize,
        col: usize,
        letter: Option<char>,
    },
    SetCellClass {
        row: usize,
        col: usize,
        class: CellClass,
    },
    SetStatus {
        text: String,
        color: StatusColor,
    },
    SetLoading(bool),
    /// 1-based round number.
    SetRoundLabel(usize),
}

impl Instruction {
    fn status(text: impl Into<String>, color: StatusColor) -> Self {
        Self::SetStatus {
            text: text.into(),
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Letter(char),
    Backspace,
    Submit,
    Exit,
}

/// Result of handling one action: what to draw, and a guess to validate
/// if the action started a submission.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Step {
    pub instructions: Vec<Instruction>,
    pub pending: Option<String>,
}

impl From<Vec<Instruction>> for Step {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions,
            pending: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    secret: String,
    row: usize,
    guess: String,
    status: Status,
    busy: bool,
}

impl GameSession {
    /// Starts a session; the secret is trimmed and uppercased.
    pub fn new(secret: &str) -> Result<Self, GameError> {
        Ok(Self {
            secret: normalize_word(secret)?,
            row: 0,
            guess: String::new(),
            status: Status::InProgress,
            busy: false,
        })
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[must_use]
    pub fn current_row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.guess
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    fn accepts_input(&self) -> bool {
        !self.busy && !self.status.is_terminal()
    }

    /// Keyboard entry point. Ignored while busy or after the game ended;
    /// otherwise clears the status line and dispatches the action.
    pub fn handle_action(&mut self, action: &UserAction) -> Step {
        if !self.accepts_input() {
            debug_log!("handle_action() - Ignoring {:?} (busy={}, status={:?})", action, self.busy, self.status);
            return Step::default();
        }

        let mut step = Step::from(vec![Instruction::status("", StatusColor::Neutral)]);
        match action {
            UserAction::Letter(c) if c.is_ascii_alphabetic() => {
                step.instructions.extend(self.handle_letter(*c));
            }
            UserAction::Backspace => step.instructions.extend(self.handle_backspace()),
            UserAction::Submit => {
                if let Some((guess, instructions)) = self.begin_validation() {
                    step.instructions.extend(instructions);
                    step.pending = Some(guess);
                }
            }
            UserAction::Letter(_) | UserAction::Exit => {}
        }
        step
    }

    /// Appends a letter, replacing the last one when the row is full.
    pub fn handle_letter(&mut self, letter: char) -> Vec<Instruction> {
        if !self.accepts_input() || !letter.is_ascii_alphabetic() {
            return Vec::new();
        }
        if self.guess.len() == WORD_LENGTH {
            self.guess.pop();
        }
        let letter = letter.to_ascii_uppercase();
        let col = self.guess.len();
        self.guess.push(letter);
        vec![Instruction::SetCellText {
            row: self.row,
            col,
            letter: Some(letter),
        }]
    }

    pub fn handle_backspace(&mut self) -> Vec<Instruction> {
        if !self.accepts_input() || self.guess.pop().is_none() {
            return Vec::new();
        }
        vec![Instruction::SetCellText {
            row: self.row,
            col: self.guess.len(),
            letter: None,
        }]
    }

    /// Enters the busy state and hands back the guess to check, or `None`
    /// when the guess is incomplete or input is not accepted.
    pub fn begin_validation(&mut self) -> Option<(String, Vec<Instruction>)> {
        if !self.accepts_input() || self.guess.len() != WORD_LENGTH {
            return None;
        }
        self.busy = true;
        info_log!("Submitting guess '{}' for row {}", self.guess, self.row + 1);
        Some((self.guess.clone(), vec![Instruction::SetLoading(true)]))
    }

    /// Leaves the busy state and applies the dictionary's verdict.
    pub fn complete_validation(&mut self, verdict: Result<bool, GameError>) -> Vec<Instruction> {
        if !self.busy {
            return Vec::new();
        }
        self.busy = false;
        let mut instructions = vec![Instruction::SetLoading(false)];

        match verdict {
            Err(e) => {
                log::warn!("Word check for '{}' failed: {e}", self.guess);
                instructions.push(Instruction::status(
                    format!("Could not check word: {e}"),
                    StatusColor::Failure,
                ));
            }
            Ok(false) => {
                info_log!("'{}' rejected by dictionary", self.guess);
                instructions.extend((0..WORD_LENGTH).map(|col| Instruction::SetCellClass {
                    row: self.row,
                    col,
                    class: CellClass::Flash,
                }));
                instructions.push(Instruction::status("Invalid word", StatusColor::Failure));
            }
            Ok(true) => {
                let row = self.row;
                let result = score_guess(&self.guess, &self.secret);
                instructions.extend(result.feedback.iter().enumerate().map(|(col, &f)| {
                    Instruction::SetCellClass {
                        row,
                        col,
                        class: f.into(),
                    }
                }));
                instructions.push(match self.advance_round(&result) {
                    Status::Won => Instruction::status("YOU WIN!", StatusColor::Success),
                    Status::Lost => Instruction::status(
                        format!("YOU LOSE. The word was {}", self.secret),
                        StatusColor::Failure,
                    ),
                    Status::InProgress => Instruction::SetRoundLabel(self.row + 1),
                });
            }
        }
        instructions
    }

    /// Validates and scores the current guess in one blocking call.
    pub fn validate_and_submit<V: WordValidator + ?Sized>(
        &mut self,
        validator: &V,
    ) -> Vec<Instruction> {
        let Some((guess, mut instructions)) = self.begin_validation() else {
            return Vec::new();
        };
        instructions.extend(self.complete_validation(validator.validate(&guess)));
        instructions
    }

    /// Moves to the next row, or ends the game on a win or the last miss.
    pub fn advance_round(&mut self, result: &GuessResult) -> Status {
        if self.status.is_terminal() {
            return self.status;
        }
        if result.exact {
            self.status = Status::Won;
            info_log!("Solved '{}' on row {}", self.secret, self.row + 1);
            return self.status;
        }
        self.row += 1;
        if self.row == ROUNDS {
            self.status = Status::Lost;
            info_log!("Out of rounds, secret was '{}'", self.secret);
        } else {
            self.guess.clear();
        }
        self.status
    }
}

/// Input source and display sink for a game.
pub trait GameInterface {
    /// Blocks until the next action; `None` once input is exhausted.
    fn next_event(&mut self) -> Option<UserAction>;

    /// Returns an action only if one is already waiting.
    fn poll_event(&mut self) -> Option<UserAction>;

    fn render(&mut self, instruction: &Instruction);

    /// Called after each batch of instructions.
    fn flush(&mut self) {}

    /// Called once the game is over, or after a fatal error, before returning.
    fn wait_for_exit(&mut self) {}
}

fn render_all<I: GameInterface + ?Sized>(interface: &mut I, instructions: &[Instruction]) {
    for instruction in instructions {
        interface.render(instruction);
    }
    interface.flush();
}

fn spawn_validation<V>(validator: Arc<V>, guess: String) -> Receiver<Result<bool, GameError>>
where
    V: WordValidator + Send + Sync + ?Sized + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let verdict = validator.validate(&guess);
        // The loop may have exited already; nobody is left to tell
        let _ = tx.send(verdict);
    });
    rx
}

/// Runs the session until it ends, the player exits, or input runs out.
pub fn game_loop<I, V>(session: &mut GameSession, interface: &mut I, validator: Arc<V>) -> Status
where
    I: GameInterface + ?Sized,
    V: WordValidator + Send + Sync + ?Sized + 'static,
{
    let mut pending: Option<Receiver<Result<bool, GameError>>> = None;

    while !session.status().is_terminal() {
        if let Some(rx) = &pending {
            let verdict = match rx.recv_timeout(Duration::from_millis(BUSY_POLL_INTERVAL_MS)) {
                Ok(verdict) => verdict,
                Err(RecvTimeoutError::Timeout) => {
                    // Keys pressed while busy are read and dropped by the session
                    match interface.poll_event() {
                        Some(UserAction::Exit) => break,
                        Some(action) => {
                            let step = session.handle_action(&action);
                            render_all(interface, &step.instructions);
                        }
                        None => {}
                    }
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => Err(GameError::WorkerGone),
            };
            pending = None;
            let instructions = session.complete_validation(verdict);
            render_all(interface, &instructions);
            continue;
        }

        let Some(action) = interface.next_event() else {
            debug_log!("game_loop() - Input exhausted");
            break;
        };
        if action == UserAction::Exit {
            info_log!("game_loop() - Exit requested");
            break;
        }

        let step = session.handle_action(&action);
        render_all(interface, &step.instructions);
        if let Some(guess) = step.pending {
            pending = Some(spawn_validation(Arc::clone(&validator), guess));
        }
    }

    session.status()
}

/// Fetches the secret word, then plays one game on `interface`.
///
/// Failing to obtain the secret is fatal: the error is shown, the interface
/// is given a chance to wait for the player, and the error is returned.
pub fn play<I, D>(interface: &mut I, dictionary: Arc<D>) -> Result<Status, GameError>
where
    I: GameInterface + ?Sized,
    D: WordSource + WordValidator + Send + Sync + 'static,
{
    render_all(interface, &[Instruction::SetLoading(true)]);

    let session = dictionary
        .fetch_word()
        .and_then(|secret| GameSession::new(&secret));
    let mut session = match session {
        Ok(session) => session,
        Err(e) => {
            log::error!("Could not start a game: {e}");
            render_all(
                interface,
                &[
                    Instruction::SetLoading(false),
                    Instruction::status(format!("Could not fetch the word: {e}"), StatusColor::Failure),
                ],
            );
            interface.wait_for_exit();
            return Err(e);
        }
    };
    debug_log!("play() - Secret word is '{}'", session.secret());

    render_all(
        interface,
        &[Instruction::SetLoading(false), Instruction::SetRoundLabel(1)],
    );

    let status = game_loop(&mut session, interface, dictionary);
    if status.is_terminal() {
        interface.wait_for_exit();
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordPick;
    use crate::wordbank::{Wordbank, load_wordbank_from_str};
    use std::collections::VecDeque;

    fn session() -> GameSession {
        GameSession::new("erase").unwrap()
    }

    fn type_word(session: &mut GameSession, word: &str) {
        for c in word.chars() {
            session.handle_letter(c);
        }
    }

    struct Always(bool);

    impl WordValidator for Always {
        fn validate(&self, _word: &str) -> Result<bool, GameError> {
            Ok(self.0)
        }
    }

    struct Broken;

    impl WordValidator for Broken {
        fn validate(&self, _word: &str) -> Result<bool, GameError> {
            Err(GameError::WorkerGone)
        }
    }

    impl WordSource for Broken {
        fn fetch_word(&self) -> Result<String, GameError> {
            Err(GameError::EmptyWordbank)
        }
    }

    /// Known secret, every five-letter guess accepted.
    struct Fixed(&'static str);

    impl WordSource for Fixed {
        fn fetch_word(&self) -> Result<String, GameError> {
            Ok(self.0.to_string())
        }
    }

    impl WordValidator for Fixed {
        fn validate(&self, _word: &str) -> Result<bool, GameError> {
            Ok(true)
        }
    }

    /// Scripted interface: `events` feed `next_event`, `busy_events` feed `poll_event`.
    #[derive(Default)]
    struct Scripted {
        events: VecDeque<UserAction>,
        busy_events: VecDeque<UserAction>,
        rendered: Vec<Instruction>,
        waited: bool,
    }

    impl Scripted {
        fn typing(lines: &[&str]) -> Self {
            let mut events = VecDeque::new();
            for line in lines {
                events.extend(line.chars().map(UserAction::Letter));
                events.push_back(UserAction::Submit);
            }
            Self {
                events,
                ..Self::default()
            }
        }

        fn statuses(&self) -> Vec<&str> {
            self.rendered
                .iter()
                .filter_map(|i| match i {
                    Instruction::SetStatus { text, .. } if !text.is_empty() => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl GameInterface for Scripted {
        fn next_event(&mut self) -> Option<UserAction> {
            self.events.pop_front()
        }

        fn poll_event(&mut self) -> Option<UserAction> {
            self.busy_events.pop_front()
        }

        fn render(&mut self, instruction: &Instruction) {
            self.rendered.push(instruction.clone());
        }

        fn wait_for_exit(&mut self) {
            self.waited = true;
        }
    }

    fn bank(words: &str) -> Arc<Wordbank> {
        Arc::new(Wordbank::new(load_wordbank_from_str(words), WordPick::Daily).unwrap())
    }

    #[test]
    fn test_new_session_normalizes_secret() {
        let s = GameSession::new("  crane ").unwrap();
        assert_eq!(s.secret(), "CRANE");
        assert_eq!(s.current_row(), 0);
        assert_eq!(s.status(), Status::InProgress);
        assert!(!s.is_busy());
        assert!(GameSession::new("cranes").is_err());
    }

    #[test]
    fn test_handle_letter_emits_cell_text() {
        let mut s = session();
        let out = s.handle_letter('c');
        assert_eq!(
            out,
            vec![Instruction::SetCellText {
                row: 0,
                col: 0,
                letter: Some('C')
            }]
        );
        assert_eq!(s.current_guess(), "C");
    }

    #[test]
    fn test_letter_at_full_length_overwrites_last() {
        let mut s = session();
        type_word(&mut s, "CRANE");
        let out = s.handle_letter('S');
        assert_eq!(s.current_guess(), "CRANS");
        assert_eq!(
            out,
            vec![Instruction::SetCellText {
                row: 0,
                col: 4,
                letter: Some('S')
            }]
        );
    }

    #[test]
    fn test_non_ascii_letters_rejected() {
        let mut s = session();
        for _ in 0..7 {
            assert!(s.handle_letter('é').is_empty());
        }
        assert!(s.handle_letter('1').is_empty());
        assert_eq!(s.current_guess(), "");

        type_word(&mut s, "CRANE");
        s.handle_letter('ß');
        assert_eq!(s.current_guess(), "CRANE");
        assert!(s.current_guess().chars().count() <= WORD_LENGTH);
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut s = session();
        let before = format!("{s:?}");
        assert!(s.handle_backspace().is_empty());
        assert_eq!(format!("{s:?}"), before);
    }

    #[test]
    fn test_backspace_clears_last_cell() {
        let mut s = session();
        type_word(&mut s, "CR");
        let out = s.handle_backspace();
        assert_eq!(s.current_guess(), "C");
        assert_eq!(
            out,
            vec![Instruction::SetCellText {
                row: 0,
                col: 1,
                letter: None
            }]
        );
    }

    #[test]
    fn test_premature_submit_is_ignored() {
        let mut s = session();
        type_word(&mut s, "CRAN");
        assert!(s.begin_validation().is_none());
        assert!(s.validate_and_submit(&Always(true)).is_empty());
        assert!(!s.is_busy());
        assert_eq!(s.current_row(), 0);
    }

    #[test]
    fn test_busy_gate_blocks_all_actions() {
        let mut s = session();
        type_word(&mut s, "CRANE");
        let (guess, out) = s.begin_validation().unwrap();
        assert_eq!(guess, "CRANE");
        assert_eq!(out, vec![Instruction::SetLoading(true)]);
        assert!(s.is_busy());

        let before = format!("{s:?}");
        for action in [
            UserAction::Letter('X'),
            UserAction::Backspace,
            UserAction::Submit,
        ] {
            assert_eq!(s.handle_action(&action), Step::default());
        }
        assert!(s.handle_letter('Q').is_empty());
        assert!(s.handle_backspace().is_empty());
        assert!(s.begin_validation().is_none());
        assert_eq!(format!("{s:?}"), before);

        s.complete_validation(Ok(true));
        assert!(!s.is_busy());
    }

    #[test]
    fn test_complete_without_pending_is_ignored() {
        let mut s = session();
        assert!(s.complete_validation(Ok(true)).is_empty());
    }

    #[test]
    fn test_invalid_word_flashes_row_and_keeps_guess() {
        let mut s = session();
        type_word(&mut s, "XXXXX");
        let out = s.validate_and_submit(&Always(false));
        let flashes = out
            .iter()
            .filter(|i| matches!(i, Instruction::SetCellClass { row: 0, class: CellClass::Flash, .. }))
            .count();
        assert_eq!(flashes, WORD_LENGTH);
        assert!(out.contains(&Instruction::SetStatus {
            text: "Invalid word".to_string(),
            color: StatusColor::Failure
        }));
        assert_eq!(s.current_row(), 0);
        assert_eq!(s.current_guess(), "XXXXX");
        assert!(!s.is_busy());

        // Still editable afterwards
        s.handle_backspace();
        assert_eq!(s.current_guess(), "XXXX");
    }

    #[test]
    fn test_validator_failure_is_recoverable() {
        let mut s = session();
        type_word(&mut s, "CRANE");
        let out = s.validate_and_submit(&Broken);
        assert!(!s.is_busy());
        assert_eq!(s.current_row(), 0);
        assert_eq!(s.current_guess(), "CRANE");
        assert!(out.iter().any(|i| matches!(
            i,
            Instruction::SetStatus { text, color: StatusColor::Failure } if text.starts_with("Could not check word")
        )));

        // Retry succeeds
        s.validate_and_submit(&Always(true));
        assert_eq!(s.current_row(), 1);
    }

    #[test]
    fn test_valid_guess_colors_row_and_advances() {
        let mut s = session();
        type_word(&mut s, "SPEED");
        let out = s.validate_and_submit(&Always(true));
        let classes: Vec<CellClass> = out
            .iter()
            .filter_map(|i| match i {
                Instruction::SetCellClass { row: 0, class, .. } => Some(*class),
                _ => None,
            })
            .collect();
        assert_eq!(
            classes,
            vec![
                CellClass::Present,
                CellClass::Absent,
                CellClass::Present,
                CellClass::Present,
                CellClass::Absent
            ]
        );
        assert_eq!(out.last(), Some(&Instruction::SetRoundLabel(2)));
        assert_eq!(s.current_row(), 1);
        assert_eq!(s.current_guess(), "");
        assert_eq!(s.status(), Status::InProgress);
    }

    #[test]
    fn test_win_is_terminal() {
        let mut s = session();
        type_word(&mut s, "ERASE");
        let out = s.validate_and_submit(&Always(true));
        assert_eq!(s.status(), Status::Won);
        assert_eq!(
            out.last(),
            Some(&Instruction::SetStatus {
                text: "YOU WIN!".to_string(),
                color: StatusColor::Success
            })
        );

        let before = format!("{s:?}");
        assert_eq!(s.handle_action(&UserAction::Letter('A')), Step::default());
        assert!(s.handle_letter('A').is_empty());
        assert!(s.handle_backspace().is_empty());
        assert!(s.begin_validation().is_none());
        assert_eq!(format!("{s:?}"), before);
    }

    #[test]
    fn test_sixth_miss_loses_and_reveals() {
        let mut s = session();
        for round in 0..ROUNDS {
            assert_eq!(s.current_row(), round);
            type_word(&mut s, "CRANE");
            let out = s.validate_and_submit(&Always(true));
            if round + 1 == ROUNDS {
                assert_eq!(
                    out.last(),
                    Some(&Instruction::SetStatus {
                        text: "YOU LOSE. The word was ERASE".to_string(),
                        color: StatusColor::Failure
                    })
                );
            }
        }
        assert_eq!(s.status(), Status::Lost);
        assert_eq!(s.current_row(), ROUNDS);

        // No seventh row
        assert!(s.handle_letter('C').is_empty());
        let miss = score_guess("CRANE", "ERASE");
        assert_eq!(s.advance_round(&miss), Status::Lost);
        assert_eq!(s.current_row(), ROUNDS);
    }

    #[test]
    fn test_handle_action_clears_status_and_ignores_non_letters() {
        let mut s = session();
        let step = s.handle_action(&UserAction::Letter('7'));
        assert_eq!(
            step.instructions,
            vec![Instruction::SetStatus {
                text: String::new(),
                color: StatusColor::Neutral
            }]
        );
        assert_eq!(s.current_guess(), "");

        type_word(&mut s, "CRANE");
        let step = s.handle_action(&UserAction::Submit);
        assert_eq!(step.pending.as_deref(), Some("CRANE"));
        assert!(s.is_busy());
    }

    #[test]
    fn test_game_loop_plays_to_a_win() {
        let mut s = GameSession::new("SLATE").unwrap();
        let mut ui = Scripted::typing(&["crane", "slate"]);
        let status = game_loop(&mut s, &mut ui, bank("crane\nslate"));
        assert_eq!(status, Status::Won);
        assert_eq!(s.current_row(), 1);
        assert_eq!(ui.statuses(), vec!["YOU WIN!"]);
    }

    #[test]
    fn test_game_loop_rejects_unknown_word() {
        let mut s = GameSession::new("SLATE").unwrap();
        let mut ui = Scripted::typing(&["zzzzz"]);
        let status = game_loop(&mut s, &mut ui, bank("crane\nslate"));
        assert_eq!(status, Status::InProgress);
        assert_eq!(s.current_row(), 0);
        assert_eq!(ui.statuses(), vec!["Invalid word"]);
    }

    #[test]
    fn test_game_loop_ignores_input_while_busy() {
        struct Slow;
        impl WordValidator for Slow {
            fn validate(&self, _word: &str) -> Result<bool, GameError> {
                thread::sleep(Duration::from_millis(120));
                Ok(true)
            }
        }

        let mut s = GameSession::new("SLATE").unwrap();
        let mut ui = Scripted::typing(&["crane"]);
        ui.busy_events
            .extend([UserAction::Backspace, UserAction::Letter('Q'), UserAction::Submit]);
        let status = game_loop(&mut s, &mut ui, Arc::new(Slow));
        assert_eq!(status, Status::InProgress);
        assert_eq!(s.current_row(), 1);
        assert_eq!(s.current_guess(), "");
        assert!(!ui.rendered.contains(&Instruction::SetCellText {
            row: 0,
            col: 4,
            letter: None
        }));
    }

    #[test]
    fn test_game_loop_stops_on_exit() {
        let mut s = GameSession::new("SLATE").unwrap();
        let mut ui = Scripted::default();
        ui.events
            .extend([UserAction::Letter('A'), UserAction::Exit, UserAction::Letter('B')]);
        let status = game_loop(&mut s, &mut ui, bank("slate"));
        assert_eq!(status, Status::InProgress);
        assert_eq!(s.current_guess(), "A");
        assert_eq!(ui.events.len(), 1);
    }

    #[test]
    fn test_play_loses_after_six_rounds() {
        let mut ui = Scripted::typing(&["crane"; ROUNDS]);
        let status = play(&mut ui, Arc::new(Fixed("SLATE"))).unwrap();
        assert_eq!(status, Status::Lost);
        assert!(ui.waited);
        assert_eq!(ui.rendered.first(), Some(&Instruction::SetLoading(true)));
        assert!(
            ui.statuses()
                .last()
                .is_some_and(|s| *s == "YOU LOSE. The word was SLATE")
        );
    }

    #[test]
    fn test_play_surfaces_fetch_failure() {
        let mut ui = Scripted::default();
        let result = play(&mut ui, Arc::new(Broken));
        assert!(matches!(result, Err(GameError::EmptyWordbank)));
        assert!(ui.waited);
        assert!(ui.statuses()[0].starts_with("Could not fetch the word"));
    }
}
