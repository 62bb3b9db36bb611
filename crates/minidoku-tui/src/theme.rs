use clap::ValueEnum;
use crossterm::style::Color;

/// Theme selection exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeKind {
    Dark,
    Light,
}

impl ThemeKind {
    pub fn palette(self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color (3x3 separators)
    pub border: Color,
    /// Cell digit color
    pub digit: Color,
    /// Blank-cell marker color
    pub blank: Color,
    /// Selected cell background
    pub selected_bg: Color,
    /// Conflict color
    pub error: Color,
    /// Valid-board message color
    pub success: Color,
    /// Status/info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 130, g: 140, b: 170 },
            digit: Color::Rgb { r: 80, g: 180, b: 255 },
            blank: Color::Rgb { r: 90, g: 95, b: 110 },
            selected_bg: Color::Rgb { r: 60, g: 70, b: 110 },
            error: Color::Rgb { r: 255, g: 95, b: 95 },
            success: Color::Rgb { r: 95, g: 220, b: 120 },
            info: Color::Rgb { r: 180, g: 185, b: 200 },
            key: Color::Rgb { r: 150, g: 155, b: 175 },
        }
    }

    /// Light theme for bright terminals
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 245, g: 245, b: 240 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 110, g: 115, b: 140 },
            digit: Color::Rgb { r: 0, g: 90, b: 200 },
            blank: Color::Rgb { r: 170, g: 170, b: 180 },
            selected_bg: Color::Rgb { r: 200, g: 210, b: 240 },
            error: Color::Rgb { r: 200, g: 30, b: 30 },
            success: Color::Rgb { r: 20, g: 140, b: 60 },
            info: Color::Rgb { r: 90, g: 95, b: 110 },
            key: Color::Rgb { r: 120, g: 125, b: 145 },
        }
    }
}
