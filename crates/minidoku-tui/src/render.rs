use crate::app::App;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use minidoku_core::{Position, BLOCK_SIZE, GRID_SIZE};
use std::io;

const BOARD_X: u16 = 2;
const BOARD_Y: u16 = 1;
const SEPARATOR: &str = "+-------+-------+-------+";

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    queue!(
        stdout,
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.fg),
        Clear(ClearType::All)
    )?;

    draw_board(stdout, app)?;
    draw_status(stdout, app)?;

    queue!(stdout, ResetColor)?;
    Ok(())
}

fn draw_board(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    let mut y = BOARD_Y;

    for row in 0..GRID_SIZE {
        if row % BLOCK_SIZE == 0 {
            queue!(
                stdout,
                MoveTo(BOARD_X, y),
                SetForegroundColor(theme.border),
                Print(SEPARATOR)
            )?;
            y += 1;
        }

        let mut x = BOARD_X;
        for col in 0..GRID_SIZE {
            if col % BLOCK_SIZE == 0 {
                queue!(
                    stdout,
                    MoveTo(x, y),
                    SetForegroundColor(theme.border),
                    Print("| ")
                )?;
                x += 2;
            }

            let pos = Position::new(row, col);
            let cell = app.grid.cell(pos);
            let text = if cell.is_blank() {
                ".".to_string()
            } else {
                cell.value().to_string()
            };
            let fg = if !cell.is_valid() {
                theme.error
            } else if cell.is_blank() {
                theme.blank
            } else {
                theme.digit
            };
            let bg = if pos == app.cursor {
                theme.selected_bg
            } else {
                theme.bg
            };

            queue!(
                stdout,
                MoveTo(x, y),
                SetBackgroundColor(bg),
                SetForegroundColor(fg),
                Print(text),
                SetBackgroundColor(theme.bg),
                Print(" ")
            )?;
            x += 2;
        }

        queue!(
            stdout,
            MoveTo(x, y),
            SetForegroundColor(theme.border),
            Print("|")
        )?;
        y += 1;
    }

    queue!(
        stdout,
        MoveTo(BOARD_X, y),
        SetForegroundColor(theme.border),
        Print(SEPARATOR)
    )?;
    Ok(())
}

fn draw_status(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    // Board height: 9 cell rows plus 4 separator lines.
    let base_y = BOARD_Y + (GRID_SIZE + BLOCK_SIZE + 1) as u16 + 1;

    queue!(
        stdout,
        MoveTo(BOARD_X, base_y),
        SetForegroundColor(theme.info),
        Print(format!("{} blanks left", app.grid.blank_count()))
    )?;

    if let Some(message) = &app.message {
        let color = match app.last_check {
            Some(true) => theme.success,
            Some(false) => theme.error,
            None => theme.info,
        };
        queue!(
            stdout,
            MoveTo(BOARD_X, base_y + 1),
            SetForegroundColor(color),
            Print(message)
        )?;
    }

    queue!(
        stdout,
        MoveTo(BOARD_X, base_y + 3),
        SetForegroundColor(theme.key),
        Print("arrows/hjkl move   1-9 set   0/backspace clear"),
        MoveTo(BOARD_X, base_y + 4),
        SetForegroundColor(theme.key),
        Print("c check board   n new game   q quit")
    )?;
    Ok(())
}
