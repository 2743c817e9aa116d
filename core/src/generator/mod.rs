use crate::*;
pub use shuffle::*;

mod shuffle;

pub trait PlacementGenerator {
    fn generate(self, config: GameConfig) -> MinePlacement;
}
