use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    layout: BoardLayout,
    placement: MinePlacement,
    cells: Array2<Cell>,
}

impl Board {
    pub fn new(layout: BoardLayout, placement: MinePlacement) -> Result<Self> {
        let size = placement.size();
        if layout.size() != size {
            return Err(GameError::InvalidBoardShape);
        }

        let cells = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            let coords = (x as Coord, y as Coord);
            Cell::new(coords, layout.cell_rect(coords), placement[coords])
        });

        Ok(Self {
            layout,
            placement,
            cells,
        })
    }

    /// Lays out the cells and places the mines in one step.
    pub fn generate(
        layout: BoardLayout,
        config: GameConfig,
        generator: impl PlacementGenerator,
    ) -> Result<Self> {
        if layout.board_size() != config.board_size {
            return Err(GameError::InvalidBoardShape);
        }
        Self::new(layout, generator.generate(config))
    }

    pub fn size(&self) -> Coord2 {
        self.placement.size()
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn placement(&self) -> &MinePlacement {
        &self.placement
    }

    pub fn mine_count(&self) -> CellCount {
        self.placement.mine_count()
    }

    pub fn cell(&self, coords: Coord2) -> Option<&Cell> {
        self.placement
            .validate_coords(coords)
            .ok()
            .map(|coords| &self.cells[coords.to_nd_index()])
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        row_major(self.size()).map(|coords| &self.cells[coords.to_nd_index()])
    }

    /// The cell whose rect contains `position`, scanning row by row.
    pub fn cell_at(&self, position: ScreenPos) -> Option<Coord2> {
        self.cells()
            .find(|cell| cell.rect().contains(position))
            .map(Cell::coords)
    }

    pub fn neighbor_mine_count(&self, coords: Coord2) -> u8 {
        self.placement.adjacent_mine_count(coords)
    }

    pub fn reveal_at(&mut self, position: ScreenPos) -> RevealOutcome {
        let Some(coords) = self.cell_at(position) else {
            log::trace!("no cell at {:?}", position);
            return RevealOutcome::NoOp;
        };

        let count = self.neighbor_mine_count(coords);
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_mine() {
            cell.reveal(CellLabel::Mine);
            RevealOutcome::MineHit
        } else {
            cell.reveal(CellLabel::Count(count));
            RevealOutcome::SafeReveal(count)
        }
    }

    pub fn all_mine_coordinates(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.placement.mine_coords().iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn classic_layout() -> BoardLayout {
        BoardLayout::new((1000, 800), 8).unwrap()
    }

    fn board(size: Coord, mines: &[Coord2]) -> Board {
        let layout = BoardLayout::new((1000, 800), size).unwrap();
        let placement = MinePlacement::from_mine_coords((size, size), mines).unwrap();
        Board::new(layout, placement).unwrap()
    }

    fn center_of(board: &Board, coords: Coord2) -> ScreenPos {
        let rect = board.layout().cell_rect(coords);
        (
            rect.left + rect.width as i32 / 2,
            rect.top + rect.height as i32 / 2,
        )
    }

    fn labels(board: &Board) -> Vec<Option<CellLabel>> {
        board.cells().map(Cell::label).collect()
    }

    fn manual_count(board: &Board, (x, y): Coord2) -> u8 {
        let mut count = 0;
        for dy in -1i16..=1 {
            for dx in -1i16..=1 {
                if (dx, dy) == (0, 0) {
                    continue;
                }
                let (nx, ny) = (i16::from(x) + dx, i16::from(y) + dy);
                if (0..8).contains(&nx)
                    && (0..8).contains(&ny)
                    && board.placement().contains_mine((nx as Coord, ny as Coord))
                {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn click_outside_grid_is_noop() {
        let mut board = board(8, &[(0, 0)]);
        let before = labels(&board);

        assert_eq!(board.reveal_at((0, 0)), RevealOutcome::NoOp);
        assert_eq!(board.reveal_at((134, 150)), RevealOutcome::NoOp);
        assert_eq!(board.reveal_at((855, 300)), RevealOutcome::NoOp);
        assert_eq!(board.reveal_at((500, 726)), RevealOutcome::NoOp);
        assert_eq!(board.reveal_at((-5, -5)), RevealOutcome::NoOp);
        assert_eq!(labels(&board), before);
    }

    #[test]
    fn click_on_mine_is_hit() {
        let mut board = board(8, &[(3, 2)]);

        let outcome = board.reveal_at(center_of(&board, (3, 2)));

        assert_eq!(outcome, RevealOutcome::MineHit);
        assert_eq!(board.cell((3, 2)).unwrap().label(), Some(CellLabel::Mine));
    }

    #[test]
    fn click_on_safe_cell_shows_neighbor_count() {
        let mut board = board(8, &[(0, 0), (1, 0), (2, 2), (5, 5)]);

        let outcome = board.reveal_at(center_of(&board, (1, 1)));

        assert_eq!(outcome, RevealOutcome::SafeReveal(3));
        assert_eq!(board.cell((1, 1)).unwrap().label(), Some(CellLabel::Count(3)));
    }

    #[test]
    fn only_clicked_cell_changes() {
        let mut board = board(8, &[(4, 4)]);

        board.reveal_at(center_of(&board, (6, 1)));

        let revealed: Vec<_> = board
            .cells()
            .filter(|cell| cell.is_revealed())
            .map(Cell::coords)
            .collect();
        assert_eq!(revealed, [(6, 1)]);
    }

    #[test]
    fn top_left_pixel_of_a_cell_hits_it() {
        let mut board = board(8, &[]);
        let rect = board.layout().cell_rect((2, 5));

        assert_eq!(board.cell_at((rect.left, rect.top)), Some((2, 5)));
        assert_eq!(board.cell_at((rect.right(), rect.top)), Some((3, 5)));
        assert_eq!(
            board.reveal_at((rect.right() - 1, rect.bottom() - 1)),
            RevealOutcome::SafeReveal(0)
        );
    }

    #[test]
    fn counts_match_manual_neighbor_computation() {
        let layout = classic_layout();
        let placement = ShuffleGenerator::new(2024).generate(GameConfig::CLASSIC);
        let reference = Board::new(layout, placement.clone()).unwrap();

        for &coords in placement.safe_coords() {
            let mut board = reference.clone();
            let expected = manual_count(&board, coords);
            assert!(expected <= 8);
            assert_eq!(
                board.reveal_at(center_of(&board, coords)),
                RevealOutcome::SafeReveal(expected)
            );
        }
        for &coords in placement.mine_coords() {
            let mut board = reference.clone();
            assert_eq!(
                board.reveal_at(center_of(&board, coords)),
                RevealOutcome::MineHit
            );
        }
    }

    #[test]
    fn generate_uses_config_mine_count() {
        let board = Board::generate(classic_layout(), GameConfig::CLASSIC, ShuffleGenerator::new(9))
            .unwrap();

        assert_eq!(board.mine_count(), 20);
        assert_eq!(board.all_mine_coordinates().count(), 20);
        assert_eq!(board.cells().filter(|cell| cell.is_mine()).count(), 20);
        assert!(board
            .all_mine_coordinates()
            .all(|coords| board.cell(coords).is_some_and(Cell::is_mine)));
    }

    #[test]
    fn mismatched_layout_is_rejected() {
        let layout = BoardLayout::new((1000, 800), 4).unwrap();
        let result = Board::generate(layout, GameConfig::CLASSIC, ShuffleGenerator::new(1));
        assert_eq!(result, Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn cells_carry_their_layout_rect() {
        let board = board(8, &[]);
        for cell in board.cells() {
            assert_eq!(cell.rect(), board.layout().cell_rect(cell.coords()));
        }
        assert!(board.cell((8, 0)).is_none());
    }
}
