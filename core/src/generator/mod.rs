use ndarray::Array2;

use crate::*;
pub use random::*;

mod random;

/// Produces the initial lit/unlit grid for a board.
pub trait LightsGenerator {
    /// Returns a grid shaped `config.size`, `true` meaning lit.
    fn generate(self, config: GameConfig) -> Result<Array2<bool>>;
}
