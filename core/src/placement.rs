use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Partition of every board coordinate into a mine set and a safe set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinePlacement {
    mine_mask: Array2<bool>,
    mines: Vec<Coord2>,
    safe: Vec<Coord2>,
}

impl MinePlacement {
    /// Splits `order`, a permutation of all coordinates, after its first `mine_count` entries.
    pub(crate) fn from_partition(size: Coord2, mut order: Vec<Coord2>, mine_count: usize) -> Self {
        debug_assert_eq!(order.len(), usize::from(mult(size.0, size.1)));
        let safe = order.split_off(mine_count.min(order.len()));
        let mines = order;

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in &mines {
            mine_mask[coords.to_nd_index()] = true;
        }

        Self {
            mine_mask,
            mines,
            safe,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        let mut mines = Vec::with_capacity(mine_coords.len());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            let slot = &mut mine_mask[coords.to_nd_index()];
            if !*slot {
                *slot = true;
                mines.push(coords);
            }
        }

        let safe = row_major(size)
            .filter(|&coords| !mine_mask[coords.to_nd_index()])
            .collect();

        Ok(Self {
            mine_mask,
            mines,
            safe,
        })
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.mine_mask.dim();
        // dimensions always come from a Coord2
        (x as Coord, y as Coord)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn mine_coords(&self) -> &[Coord2] {
        &self.mines
    }

    pub fn safe_coords(&self) -> &[Coord2] {
        &self.safe
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.safe.len() as CellCount
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_count() + self.safe_cell_count()
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.validate_coords(coords).is_ok_and(|coords| self[coords])
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        Neighbors::new(coords, self.size())
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MinePlacement {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn explicit_mines_partition_the_board() {
        let placement = MinePlacement::from_mine_coords((3, 3), &[(0, 0), (2, 1)]).unwrap();

        assert_eq!(placement.mine_count(), 2);
        assert_eq!(placement.safe_cell_count(), 7);
        assert!(placement.contains_mine((2, 1)));
        assert!(!placement.contains_mine((1, 1)));
        assert!(!placement.safe_coords().contains(&(0, 0)));
    }

    #[test]
    fn duplicate_mines_collapse() {
        let placement = MinePlacement::from_mine_coords((2, 2), &[(1, 1), (1, 1)]).unwrap();
        assert_eq!(placement.mine_coords(), &[(1, 1)]);
        assert_eq!(placement.safe_cell_count(), 3);
    }

    #[test]
    fn out_of_range_mine_is_rejected() {
        let result = MinePlacement::from_mine_coords((2, 2), &[(2, 0)]);
        assert_eq!(result, Err(GameError::InvalidCoords));
    }

    #[test]
    fn contains_mine_is_false_off_board() {
        let placement = MinePlacement::from_mine_coords((2, 2), &[(1, 1)]).unwrap();
        assert!(!placement.contains_mine((5, 5)));
    }

    #[test]
    fn adjacent_count_uses_index_neighbors() {
        // X . X
        // . . .
        // X X X
        let mines = &[(0, 0), (2, 0), (0, 2), (1, 2), (2, 2)];
        let placement = MinePlacement::from_mine_coords((3, 3), mines).unwrap();

        assert_eq!(placement.adjacent_mine_count((1, 1)), 5);
        assert_eq!(placement.adjacent_mine_count((1, 0)), 2);
        assert_eq!(placement.adjacent_mine_count((0, 1)), 3);
    }

    #[test]
    fn fully_mined_neighborhood_counts_eight() {
        let mines: alloc::vec::Vec<_> = row_major((3, 3)).filter(|&c| c != (1, 1)).collect();
        let placement = MinePlacement::from_mine_coords((3, 3), &mines).unwrap();
        assert_eq!(placement.adjacent_mine_count((1, 1)), 8);
    }

    #[test]
    fn partition_splits_after_mine_count() {
        let order: alloc::vec::Vec<_> = row_major((2, 2)).collect();
        let placement = MinePlacement::from_partition((2, 2), order, 1);

        assert_eq!(placement.mine_coords(), &[(0, 0)]);
        assert_eq!(placement.safe_coords(), &[(1, 0), (0, 1), (1, 1)]);

        let mines: BTreeSet<_> = placement.mine_coords().iter().collect();
        assert!(placement.safe_coords().iter().all(|c| !mines.contains(c)));
    }
}
