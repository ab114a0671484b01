//! TUI (Terminal User Interface) module for Ordle
//!
//! Full-screen board rendered with Ratatui, driven one key at a time.
//!
//! # Architecture
//! - `TuiInterface` owns the terminal and the last board snapshot; the
//!   game loop owns all rules. Keys are translated into `GameAction`
//!   events and every display callback redraws.
//!
//! # State Machine
//! The UI has two phases:
//! - `Typing`: letters, backspace, and enter map to engine events
//! - `RoundOver`: only N (new round) and ESC are live
//! `display_win`/`display_loss` enter `RoundOver`; `display_round_start`
//! returns to `Typing`.

use crate::engine::{GameStatus, MAX_GUESSES, SubmitError};
use crate::feedback::CellFeedback;
use crate::game::{BoardRow, BoardView, GameAction, GameInterface};
use crate::wordbank::{WORD_LENGTH, is_alphabet_letter};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

fn feedback_colors(feedback: CellFeedback) -> (Color, Color) {
    match feedback {
        CellFeedback::Correct => (Color::Green, Color::Black),
        CellFeedback::Present => (Color::Yellow, Color::Black),
        CellFeedback::Absent => (Color::Gray, Color::White),
    }
}

#[derive(Debug, PartialEq)]
enum TuiPhase {
    Typing,
    RoundOver,
}

/// Context for rendering the UI - groups related parameters to avoid too
/// many function arguments.
struct RenderContext<'a> {
    rows: &'a [BoardRow],
    current_input: &'a str,
    show_input_row: bool,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
    phase: &'a TuiPhase,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and board display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    rows: Vec<BoardRow>,
    current_input: String,
    game_status: GameStatus,
    phase: TuiPhase,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            rows: Vec::new(),
            current_input: String::new(),
            game_status: GameStatus::Playing,
            phase: TuiPhase::Typing,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
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
        let ctx = RenderContext {
            rows: &self.rows,
            current_input: &self.current_input,
            show_input_row: self.game_status == GameStatus::Playing
                && self.rows.len() < MAX_GUESSES,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
            phase: &self.phase,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    /// Render the complete UI layout using the provided context.
    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(14), // Game board
                Constraint::Min(5),     // Messages
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx);
        Self::render_info(f, chunks[2], ctx.message, ctx.error_message);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.phase);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("O R D L E")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default().title("Guesses").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        for (row_index, row) in ctx.rows.iter().enumerate() {
            Self::render_guess_row(f, row, row_index, inner);
        }

        let mut next_row = ctx.rows.len();
        if ctx.show_input_row {
            Self::render_input_row(f, next_row, inner, ctx.current_input);
            next_row += 1;
        }
        for empty_index in next_row..MAX_GUESSES {
            Self::render_empty_row(f, empty_index, inner);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn row_y(area: Rect, row_index: usize) -> Option<u16> {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height { None } else { Some(y) }
    }

    fn render_guess_row(f: &mut Frame, row: &BoardRow, row_index: usize, area: Rect) {
        let Some(y) = Self::row_y(area, row_index) else {
            return;
        };

        let mut spans = vec![Span::raw("  ")];
        for i in 0..WORD_LENGTH {
            let letter = row.letters.get(i).copied().unwrap_or(' ');
            let (bg_color, fg_color) = row
                .feedback
                .get(i)
                .copied()
                .map_or((Color::DarkGray, Color::White), feedback_colors);

            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }

        Self::render_line(f, area, y, spans);
    }

    fn render_input_row(f: &mut Frame, row_index: usize, area: Rect, current_input: &str) {
        let Some(y) = Self::row_y(area, row_index) else {
            return;
        };

        let mut spans = vec![Span::raw("  ")];
        for i in 0..WORD_LENGTH {
            let letter = current_input.chars().nth(i).unwrap_or(' ');
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            spans.push(Span::raw(" "));
        }

        Self::render_line(f, area, y, spans);
    }

    fn render_empty_row(f: &mut Frame, row_index: usize, area: Rect) {
        let Some(y) = Self::row_y(area, row_index) else {
            return;
        };

        let mut spans = vec![Span::raw("  ")];
        for _ in 0..WORD_LENGTH {
            spans.push(Span::styled(" . ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(" "));
        }

        Self::render_line(f, area, y, spans);
    }

    fn render_line(f: &mut Frame, area: Rect, y: u16, spans: Vec<Span>) {
        let line = Line::from(spans);
        let paragraph = Paragraph::new(line);
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

    fn render_info(f: &mut Frame, area: Rect, message: &str, error_message: &str) {
        let mut lines = Vec::new();

        if !message.is_empty() {
            let style = if message.starts_with("You got it") {
                SUCCESS_STYLE
            } else {
                MESSAGE_STYLE
            };
            lines.push(Line::from(vec![Span::styled(message, style)]));
        }

        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Messages").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, phase: &TuiPhase) {
        let text = match phase {
            TuiPhase::Typing => "Type your 5-letter guess | ENTER: Submit | ESC: Quit",
            TuiPhase::RoundOver => "N: New Round | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<GameAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let event = event::read()?;
        debug_log!("handle_input() - Event received: {:?}", event);

        let Event::Key(key) = event else {
            // Mouse, focus, paste, and resize events carry no game input.
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid
        // double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        // Filter out garbage characters that arrive as escape-sequence
        // remnants when alt-tabbing
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}'
                || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD && c != '\t' && c != '\n' && c != '\r')
        {
            debug_log!("handle_input() - Ignoring control character: {:?}", c);
            return Ok(None);
        }

        match self.phase {
            TuiPhase::Typing => Ok(self.handle_typing_input(key)),
            TuiPhase::RoundOver => Ok(Self::handle_round_over_input(key)),
        }
    }

    fn handle_typing_input(&mut self, key: KeyEvent) -> Option<GameAction> {
        self.error_message.clear();

        match key.code {
            KeyCode::Char(c) => {
                if Self::has_modifier_keys(&key) {
                    debug_log!(
                        "handle_typing_input() - Ignoring character with modifier: {:?}",
                        key.modifiers
                    );
                    return None;
                }
                let upper = c.to_uppercase().next().unwrap_or(c);
                if is_alphabet_letter(upper) {
                    info_log!("handle_typing_input() - Letter: '{}'", upper);
                    Some(GameAction::Letter(upper))
                } else {
                    self.error_message =
                        format!("Only letters are allowed! ('{c}' is not a letter)");
                    None
                }
            }
            KeyCode::Backspace => Some(GameAction::Backspace),
            KeyCode::Enter => {
                info_log!("handle_typing_input() - Submitting guess");
                Some(GameAction::Submit)
            }
            KeyCode::Esc => {
                info_log!("handle_typing_input() - ESC pressed, exiting");
                Some(GameAction::Exit)
            }
            _ => {
                debug_log!("handle_typing_input() - Ignoring key: {:?}", key.code);
                None
            }
        }
    }

    fn handle_round_over_input(key: KeyEvent) -> Option<GameAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(GameAction::NewRound),
            KeyCode::Esc => Some(GameAction::Exit),
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }
}

impl GameInterface for TuiInterface {
    fn display_round_start(&mut self, target_count: usize) {
        self.rows.clear();
        self.current_input.clear();
        self.game_status = GameStatus::Playing;
        self.phase = TuiPhase::Typing;
        self.message = format!("New round. Drawing from {target_count} target words.");
        self.error_message.clear();
        self.status = "Enter your first 5-letter guess".to_string();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<GameAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(GameAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {
                    // No action yet, keep polling
                }
                Err(_e) => {
                    info_log!("read_action() - Input error, returning Exit");
                    return Some(GameAction::Exit);
                }
            }
        }
    }

    fn display_board(&mut self, view: &BoardView) {
        self.rows = view.rows.clone();
        self.current_input = view.current_input.clone();
        self.game_status = view.status;
        if view.status == GameStatus::Playing {
            self.status = format!("{} guesses left", view.guesses_left);
        }
        self.draw_or_log();
    }

    fn display_rejection(&mut self, error: SubmitError) {
        self.error_message = match error {
            SubmitError::InvalidLength => "Guess must be exactly 5 letters!".to_string(),
            SubmitError::UnknownWord => "Not in the word list!".to_string(),
        };
        self.draw_or_log();
    }

    fn display_win(&mut self, target: &str, guess_count: usize) {
        self.phase = TuiPhase::RoundOver;
        self.message = format!("You got it in {guess_count}! The word was {target}.");
        self.status = format!("Round over - word: {target}");
        self.draw_or_log();
    }

    fn display_loss(&mut self, target: &str) {
        self.phase = TuiPhase::RoundOver;
        self.message = format!("Out of guesses. The word was {target}.");
        self.status = format!("Round over - word: {target}");
        self.draw_or_log();
    }

    fn display_exit(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
