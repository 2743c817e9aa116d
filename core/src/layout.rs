use serde::{Deserialize, Serialize};

use crate::*;

/// Pixel offset of the top-left cell from the surface origin.
pub const LAYOUT_MARGIN: ScreenPos = (135, 150);

/// Extra cell pitches reserved around the grid when sizing cells.
pub const LAYOUT_PADDING_CELLS: u32 = 3;

/// Axis-aligned pixel rectangle, containment is half-open.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub const fn right(&self) -> i32 {
        self.left + self.width as i32
    }

    pub const fn bottom(&self) -> i32 {
        self.top + self.height as i32
    }

    pub const fn contains(&self, (x, y): ScreenPos) -> bool {
        self.left <= x && x < self.right() && self.top <= y && y < self.bottom()
    }

    pub const fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    /// Top-left position that centers a box of `size` inside this rect.
    pub const fn centered(&self, (width, height): (u32, u32)) -> ScreenPos {
        (
            self.left + (self.width as i32 - width as i32) / 2,
            self.top + (self.height as i32 - height as i32) / 2,
        )
    }
}

/// Pixel geometry of the board, derived once from the surface size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    board_size: Coord,
    origin: ScreenPos,
    cell_width: u32,
    cell_height: u32,
}

impl BoardLayout {
    pub fn new((width, height): (u32, u32), board_size: Coord) -> Result<Self> {
        if board_size == 0 {
            return Err(GameError::InvalidBoardShape);
        }

        let divisor = u32::from(board_size) + LAYOUT_PADDING_CELLS;
        let cell_width = width / divisor;
        let cell_height = height / divisor;
        if cell_width == 0 || cell_height == 0 {
            return Err(GameError::SurfaceTooSmall { width, height });
        }

        if width % divisor != 0 || height % divisor != 0 {
            log::debug!(
                "surface {}x{} leaves a remainder at cell size {}x{}",
                width,
                height,
                cell_width,
                cell_height
            );
        }

        Ok(Self {
            board_size,
            origin: LAYOUT_MARGIN,
            cell_width,
            cell_height,
        })
    }

    pub fn board_size(&self) -> Coord {
        self.board_size
    }

    pub fn size(&self) -> Coord2 {
        (self.board_size, self.board_size)
    }

    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    pub fn cell_rect(&self, (x, y): Coord2) -> Rect {
        let (left, top) = self.origin;
        Rect::new(
            left + i32::from(x) * self.cell_width as i32,
            top + i32::from(y) * self.cell_height as i32,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Rectangle enclosing the whole grid.
    pub fn bounds(&self) -> Rect {
        let (left, top) = self.origin;
        Rect::new(
            left,
            top,
            self.cell_width * u32::from(self.board_size),
            self.cell_height * u32::from(self.board_size),
        )
    }
}
