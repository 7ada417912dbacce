use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// State of a single grid cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Wall,
    Floor,
}

impl Tile {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    pub fn is_floor(self) -> bool {
        matches!(self, Tile::Floor)
    }

    pub fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// Single character used by the plain text dump of a grid.
    pub fn as_char(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
        }
    }
}

/// Overlays drawn on top of floor tiles by the terminal preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Start,
    Goal,
    /// A cell on the BFS route between start and goal.
    Route,
}

fn write_cell(f: &mut fmt::Formatter<'_>, styled_symbol: StyledContent<&str>) -> fmt::Result {
    #[cfg(debug_assertions)]
    {
        use unicode_width::UnicodeWidthStr;
        assert_eq!(
            styled_symbol.content().width(),
            Tile::CELL_WIDTH as usize,
            "Each cell must occupy exactly two character widths."
        );
    }

    write!(f, "{}", styled_symbol)
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Floor => "  ".with(Color::Reset),
        };
        write_cell(f, styled_symbol)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Marker::Start => "🟩".with(Color::Green),
            Marker::Goal => "🟥".with(Color::Red),
            Marker::Route => "* ".with(Color::Yellow),
        };
        write_cell(f, styled_symbol)
    }
}
