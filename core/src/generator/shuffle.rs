use alloc::vec::Vec;

use super::*;

/// Shuffles every coordinate uniformly and takes the leading ones as mines.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleGenerator {
    seed: u64,
}

impl ShuffleGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl PlacementGenerator for ShuffleGenerator {
    fn generate(self, config: GameConfig) -> MinePlacement {
        use rand::prelude::*;

        let total_cells = config.total_cells();
        if config.mines > total_cells {
            log::warn!(
                "Board already full, generated anyway, requested {} but only fits {}",
                config.mines,
                total_cells
            );
        }

        let mut order: Vec<Coord2> = row_major(config.size()).collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        order.shuffle(&mut rng);

        let placement = MinePlacement::from_partition(config.size(), order, config.mines.into());
        log::debug!(
            "placed {} mines, {} safe cells (seed {})",
            placement.mine_count(),
            placement.safe_cell_count(),
            self.seed
        );
        placement
    }
}
