use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use minidoku_core::{Generator, Grid, Position, GRID_SIZE};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// The main application state: one live grid, replaced wholesale on "new
/// game", plus cursor and message-line bookkeeping.
pub struct App {
    pub grid: Grid,
    pub cursor: Position,
    pub theme: Theme,
    /// Message to display on the status line
    pub message: Option<String>,
    /// Outcome of the last board check, for message coloring
    pub last_check: Option<bool>,
    generator: Generator,
}

impl App {
    pub fn new(seed: Option<u64>, theme: Theme) -> Self {
        let mut generator = match seed {
            Some(seed) => Generator::with_seed(seed),
            None => Generator::new(),
        };
        let grid = generator.generate();
        Self {
            grid,
            cursor: Position::new(0, 0),
            theme,
            message: None,
            last_check: None,
            generator,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        self.message = None;
        self.last_check = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,

            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),

            KeyCode::Char(c @ '1'..='9') => self.edit(&c.to_string()),
            KeyCode::Char('0') | KeyCode::Backspace | KeyCode::Delete => self.edit(""),

            KeyCode::Char('c') | KeyCode::Enter => self.check_board(),
            KeyCode::Char('n') => self.new_game(),

            _ => {}
        }
        AppAction::Continue
    }

    fn move_cursor(&mut self, dr: isize, dc: isize) {
        let row = self.cursor.row as isize + dr;
        let col = self.cursor.col as isize + dc;
        let max = GRID_SIZE as isize - 1;
        self.cursor = Position::new(row.clamp(0, max) as usize, col.clamp(0, max) as usize);
    }

    /// Route a text edit through the core and react to the result; a
    /// rejected edit leaves the stored value on screen.
    fn edit(&mut self, raw: &str) {
        if let Err(e) = self.grid.apply_edit(self.cursor, raw) {
            self.message = Some(e.to_string());
        }
    }

    fn check_board(&mut self) {
        let report = self.grid.validate();
        self.last_check = Some(report.is_valid);
        self.message = Some(
            if report.is_valid {
                "Board is valid!"
            } else {
                "Board is not valid!"
            }
            .to_string(),
        );
    }

    fn new_game(&mut self) {
        self.grid = self.generator.generate();
        self.cursor = Position::new(0, 0);
        self.message = Some("New puzzle".to_string());
    }
}
