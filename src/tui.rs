//! TUI (Terminal User Interface) module for Wordle
//!
//! This module provides the full-screen interface using Ratatui.
//!
//! `TuiInterface` is both the input source and the display sink of a game:
//! key presses become [`UserAction`]s, and every [`Instruction`] the session
//! emits is applied to a [`Board`] that is redrawn on `flush`.

use crate::board::{Board, CellState, GuessRow};
use crate::game_state::{GameInterface, Instruction, ROUNDS, StatusColor, UserAction, WORD_LENGTH};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
#[allow(clippy::cast_possible_truncation)]
const BOARD_HEIGHT: u16 = ROUNDS as u16 * ROW_SPACING + 2;
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

fn cell_colors(state: CellState) -> (Color, Color) {
    match state {
        CellState::Empty | CellState::Entered => (Color::DarkGray, Color::White),
        CellState::Correct => (Color::Green, Color::Black),
        CellState::Present => (Color::Yellow, Color::Black),
        CellState::Absent => (Color::Gray, Color::White),
        CellState::Flash => (Color::Red, Color::White),
    }
}

fn status_style(color: StatusColor) -> Style {
    match color {
        StatusColor::Neutral => MESSAGE_STYLE,
        StatusColor::Success => SUCCESS_STYLE,
        StatusColor::Failure => ERROR_STYLE,
    }
}

/// Maps a key press to a game action. Letters come back uppercased; keys
/// with Alt/Ctrl held and anything that is not a letter, Backspace, Enter
/// or Esc are dropped.
fn key_to_action(key: KeyEvent) -> Option<UserAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) {
        debug_log!("key_to_action() - Ignoring key with modifier: {:?}", key.modifiers);
        return None;
    }
    match key.code {
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(UserAction::Letter(c.to_ascii_uppercase())),
        KeyCode::Backspace => Some(UserAction::Backspace),
        KeyCode::Enter => Some(UserAction::Submit),
        KeyCode::Esc => Some(UserAction::Exit),
        _ => None,
    }
}

/// Main TUI interface component.
///
/// Manages terminal setup, rendering and input.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: Board,
    game_over: bool,
    tick: usize,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            board: Board::new(),
            game_over: false,
            tick: 0,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let board = &self.board;
        let game_over = self.game_over;
        let spinner = SPINNER[self.tick % SPINNER.len()];
        self.terminal.draw(|f| {
            Self::render_static(f, board, game_over, spinner);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, board: &Board, game_over: bool, spinner: char) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(BOARD_HEIGHT), // Game board
                Constraint::Min(3),    // Messages
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], board);
        Self::render_message(f, chunks[2], board);
        Self::render_status(f, chunks[3], board, spinner);
        Self::render_instructions(f, chunks[4], board, game_over);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORDLE")
            .style(HEADER_STYLE)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, board: &Board) {
        let block = Block::default().title("Guesses").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        for (row_index, row) in board.rows.iter().enumerate() {
            Self::render_guess_row(f, row, row_index, inner);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_guess_row(f: &mut Frame, row: &GuessRow, row_index: usize, area: Rect) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        for i in 0..WORD_LENGTH {
            let (bg_color, fg_color) = cell_colors(row.states[i]);
            let letter = row.letters[i];
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }

        let paragraph = Paragraph::new(Line::from(spans));
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_message(f: &mut Frame, area: Rect, board: &Board) {
        let line = Line::from(vec![Span::styled(
            board.status.as_str(),
            status_style(board.status_color),
        )]);
        let paragraph = Paragraph::new(line)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, board: &Board, spinner: char) {
        let (text, style) = if board.loading {
            (format!("{spinner} Checking..."), INFO_STYLE)
        } else {
            (format!("Row: {}/{}", board.round.min(ROUNDS), ROUNDS), HEADER_STYLE)
        };
        let paragraph = Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, board: &Board, game_over: bool) {
        let text = if game_over {
            "Game over | Press any key to quit"
        } else if board.loading {
            "Checking the word... | ESC: Quit"
        } else {
            "Type a 5-letter guess | ENTER: Submit | BACKSPACE: Delete | ESC: Quit"
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Reads one key event if one arrives within `timeout`.
    fn read_key(timeout: Duration) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(Some(key)),
            other => {
                debug_log!("read_key() - Ignoring non-key event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn next_event(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("next_event() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match Self::read_key(Duration::from_millis(EVENT_POLL_TIMEOUT_MS)) {
                Ok(Some(key)) => {
                    if let Some(action) = key_to_action(key) {
                        debug_log!("next_event() - {:?}", action);
                        return Some(action);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("next_event() - Input error {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn poll_event(&mut self) -> Option<UserAction> {
        // Called repeatedly while a word is being checked; animate the spinner
        self.tick = self.tick.wrapping_add(1);
        self.draw_or_log();
        match Self::read_key(Duration::ZERO) {
            Ok(Some(key)) => key_to_action(key),
            Ok(None) => None,
            Err(e) => {
                debug_log!("poll_event() - Input error: {}", e);
                None
            }
        }
    }

    fn render(&mut self, instruction: &Instruction) {
        self.board.apply(instruction);
    }

    fn flush(&mut self) {
        self.draw_or_log();
    }

    fn wait_for_exit(&mut self) {
        self.game_over = true;
        loop {
            self.draw_or_log();
            match Self::read_key(Duration::from_millis(EVENT_POLL_TIMEOUT_MS)) {
                Ok(Some(key)) if key.kind == KeyEventKind::Press => return,
                Ok(_) => {}
                Err(_) => return,
            }
        }
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
