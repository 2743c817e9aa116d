use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Text shown on the mine marker.
pub const MINE_MARKER: &str = "X";

/// What a revealed cell shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellLabel {
    Mine,
    Count(u8),
}

impl fmt::Display for CellLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellLabel::Mine => f.write_str(MINE_MARKER),
            CellLabel::Count(count) => write!(f, "{count}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord2,
    rect: Rect,
    is_mine: bool,
    label: Option<CellLabel>,
}

impl Cell {
    pub(crate) fn new(coords: Coord2, rect: Rect, is_mine: bool) -> Self {
        Self {
            coords,
            rect,
            is_mine,
            label: None,
        }
    }

    pub fn coords(&self) -> Coord2 {
        self.coords
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub fn label(&self) -> Option<CellLabel> {
        self.label
    }

    pub fn is_revealed(&self) -> bool {
        self.label.is_some()
    }

    pub(crate) fn reveal(&mut self, label: CellLabel) {
        self.label = Some(label);
    }
}
