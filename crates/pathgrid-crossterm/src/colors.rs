//! Cell palette.

use crossterm::style::Color;
use pathgrid_core::CellState;

pub const WHITE: Color = Color::Rgb { r: 255, g: 255, b: 255 };
pub const GREEN: Color = Color::Rgb { r: 0, g: 255, b: 0 };
pub const RED: Color = Color::Rgb { r: 255, g: 0, b: 0 };
pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
pub const ORANGE: Color = Color::Rgb { r: 255, g: 165, b: 0 };
pub const TURQUOISE: Color = Color::Rgb { r: 64, g: 224, b: 208 };
pub const PURPLE: Color = Color::Rgb { r: 128, g: 0, b: 128 };
/// Grid dots drawn on empty cells.
pub const GREY: Color = Color::Rgb { r: 128, g: 128, b: 128 };

/// Background colour for a cell state.
pub const fn state_color(state: CellState) -> Color {
    match state {
        CellState::Empty => WHITE,
        CellState::Open => GREEN,
        CellState::Closed => RED,
        CellState::Barrier => BLACK,
        CellState::Start => ORANGE,
        CellState::End => TURQUOISE,
        CellState::Path => PURPLE,
    }
}
