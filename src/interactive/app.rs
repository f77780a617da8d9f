//! TUI application state and logic

use crate::core::Board;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Tiles per row in the TUI grid
pub const BOARD_COLUMNS: usize = 6;

/// Application state
pub struct App {
    pub board: Board,
    pub max: u8,
    pub cursor: usize,
    /// First tile flipped this turn, shown face-up until the second flip
    pub first_pick: Option<usize>,
    /// Pair from the last failed guess, shown face-up until the next input
    pub mismatch: Option<[usize; 2]>,
    pub attempts: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Picking,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_completed: usize,
    pub total_attempts: usize,
    pub best_attempts: Option<usize>,
}

impl App {
    /// Create an app with a freshly dealt board
    ///
    /// # Errors
    /// Returns an error if `max` is zero.
    pub fn new(max: u8) -> Result<Self> {
        let board = Board::new(max)?;

        let mut app = Self {
            board,
            max,
            cursor: 0,
            first_pick: None,
            mismatch: None,
            attempts: 0,
            messages: Vec::new(),
            stats: Statistics::default(),
            input_mode: InputMode::Picking,
            should_quit: false,
        };
        app.add_message(
            "Flip two tiles per turn; matching pairs stay revealed.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Number of matched pairs so far
    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.board.revealed_count() / 2
    }

    /// Total pairs on the board
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.board.len() / 2
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor + 1 < self.board.len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor >= BOARD_COLUMNS {
            self.cursor -= BOARD_COLUMNS;
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + BOARD_COLUMNS < self.board.len() {
            self.cursor += BOARD_COLUMNS;
        }
    }

    /// Flip the tile under the cursor
    ///
    /// The first flip of a turn stays face-up; the second resolves the guess.
    pub fn select(&mut self) {
        self.mismatch = None;
        let index = self.cursor;

        if self.board.tiles()[index].is_revealed() {
            self.add_message("That tile is already matched.", MessageStyle::Error);
            return;
        }
        if self.first_pick == Some(index) {
            self.add_message("Pick a different second tile.", MessageStyle::Error);
            return;
        }

        match self.first_pick.take() {
            None => {
                self.first_pick = Some(index);
            }
            Some(first) => {
                self.attempts += 1;
                match self.board.guess(first, index) {
                    Ok(true) => {
                        let left = self.total_pairs() - self.pairs_found();
                        if self.board.game_over() {
                            self.celebrate();
                        } else {
                            self.add_message(
                                &format!("Match! {left} pairs to go."),
                                MessageStyle::Success,
                            );
                        }
                    }
                    Ok(false) => {
                        self.mismatch = Some([first, index]);
                        self.add_message("No match — the tiles flip back.", MessageStyle::Info);
                    }
                    Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
                }
            }
        }
    }

    fn celebrate(&mut self) {
        self.stats.games_completed += 1;
        self.stats.total_attempts += self.attempts;
        self.stats.best_attempts = Some(
            self.stats
                .best_attempts
                .map_or(self.attempts, |best| best.min(self.attempts)),
        );
        self.input_mode = InputMode::WinCelebration;

        let celebration = if self.attempts == self.total_pairs() {
            "🏆 PERFECT GAME! Every guess a match! 🏆"
        } else {
            "🎉 BOARD CLEARED! 🎉"
        };
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for a new board or 'q' to quit.", MessageStyle::Info);
    }

    /// Deal a fresh board; session statistics carry over
    pub fn new_game(&mut self) {
        match Board::new(self.max) {
            Ok(board) => {
                self.board = board;
                self.cursor = 0;
                self.first_pick = None;
                self.mismatch = None;
                self.attempts = 0;
                self.input_mode = InputMode::Picking;
                self.add_message("New board dealt!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::WinCelebration => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // In celebration mode, ignore other keys
                    }
                },
                InputMode::Picking => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Left | KeyCode::Char('h') => {
                        app.move_cursor_left();
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        app.move_cursor_right();
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        app.move_cursor_up();
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        app.move_cursor_down();
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        app.select();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Indices of every tile matching `pips`, in board order
    fn positions_of(app: &App, pips: (u8, u8)) -> Vec<usize> {
        (0..app.board.len())
            .filter(|&i| app.board.tiles()[i].pips() == pips)
            .collect()
    }

    #[test]
    fn first_select_stores_the_pick() {
        let mut app = App::new(2).unwrap();
        app.cursor = 3;
        app.select();

        assert_eq!(app.first_pick, Some(3));
        assert_eq!(app.attempts, 0);
    }

    #[test]
    fn matching_pair_stays_revealed() {
        let mut app = App::new(2).unwrap();
        let ones = positions_of(&app, (1, 1));

        app.cursor = ones[0];
        app.select();
        app.cursor = ones[1];
        app.select();

        assert_eq!(app.attempts, 1);
        assert!(app.board.tiles()[ones[0]].is_revealed());
        assert!(app.board.tiles()[ones[1]].is_revealed());
        assert!(app.first_pick.is_none());
        assert!(app.mismatch.is_none());
    }

    #[test]
    fn mismatch_flashes_then_hides() {
        let mut app = App::new(2).unwrap();
        let ones = positions_of(&app, (1, 1));
        let twos = positions_of(&app, (2, 2));

        app.cursor = ones[0];
        app.select();
        app.cursor = twos[0];
        app.select();

        assert_eq!(app.attempts, 1);
        assert_eq!(app.mismatch, Some([ones[0], twos[0]]));
        assert!(!app.board.tiles()[ones[0]].is_revealed());
        assert!(!app.board.tiles()[twos[0]].is_revealed());

        // Any further input clears the flash
        app.cursor = ones[1];
        app.select();
        assert!(app.mismatch.is_none());
    }

    #[test]
    fn revealed_tiles_cannot_be_picked() {
        let mut app = App::new(2).unwrap();
        let ones = positions_of(&app, (1, 1));

        app.cursor = ones[0];
        app.select();
        app.cursor = ones[1];
        app.select();

        app.cursor = ones[0];
        app.select();
        assert!(app.first_pick.is_none());
        assert_eq!(app.attempts, 1);
    }

    #[test]
    fn second_pick_must_differ_from_first() {
        let mut app = App::new(2).unwrap();
        app.cursor = 2;
        app.select();
        app.select();

        assert_eq!(app.first_pick, Some(2));
        assert_eq!(app.attempts, 0);
    }

    #[test]
    fn clearing_the_board_celebrates() {
        // A max-1 board holds a single pair
        let mut app = App::new(1).unwrap();

        app.cursor = 0;
        app.select();
        app.cursor = 1;
        app.select();

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_completed, 1);
        assert_eq!(app.stats.best_attempts, Some(1));
    }

    #[test]
    fn new_game_resets_board_but_keeps_stats() {
        let mut app = App::new(1).unwrap();
        app.cursor = 0;
        app.select();
        app.cursor = 1;
        app.select();
        assert_eq!(app.stats.games_completed, 1);

        app.new_game();

        assert_eq!(app.input_mode, InputMode::Picking);
        assert_eq!(app.attempts, 0);
        assert_eq!(app.board.revealed_count(), 0);
        assert_eq!(app.stats.games_completed, 1);
    }

    #[test]
    fn cursor_stays_inside_the_board() {
        let mut app = App::new(1).unwrap();
        assert_eq!(app.board.len(), 2);

        app.move_cursor_left();
        assert_eq!(app.cursor, 0);
        app.move_cursor_up();
        assert_eq!(app.cursor, 0);

        app.move_cursor_right();
        assert_eq!(app.cursor, 1);
        app.move_cursor_right();
        assert_eq!(app.cursor, 1);
        app.move_cursor_down();
        assert_eq!(app.cursor, 1);
    }
}
