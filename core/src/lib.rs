#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use clock::*;
pub use controller::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use placement::*;
pub use surface::*;
pub use types::*;

mod board;
mod cell;
mod clock;
mod controller;
mod error;
mod generator;
mod layout;
mod placement;
mod surface;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    /// The only configuration the game ships with: 8×8 cells, 20 mines.
    pub const CLASSIC: Self = Self::new_unchecked(8, 20);

    pub const fn new_unchecked(board_size: Coord, mines: CellCount) -> Self {
        Self { board_size, mines }
    }

    pub fn new(board_size: Coord, mines: CellCount) -> Result<Self> {
        if board_size == 0 {
            return Err(GameError::InvalidBoardShape);
        }
        if mines > mult(board_size, board_size) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(board_size, mines))
    }

    pub const fn size(&self) -> Coord2 {
        (self.board_size, self.board_size)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.board_size, self.board_size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoOp,
    MineHit,
    SafeReveal(u8),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoOp => false,
            MineHit => true,
            SafeReveal(_) => true,
        }
    }
}
