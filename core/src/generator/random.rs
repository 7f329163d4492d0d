use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Generation strategy that lights every cell independently with the configured chance, drawing
/// from an injected random source.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLightsGenerator<R> {
    rng: R,
}

impl RandomLightsGenerator<SmallRng> {
    /// Deterministic generator, the same seed always yields the same board.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomLightsGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> LightsGenerator for RandomLightsGenerator<R> {
    fn generate(mut self, config: GameConfig) -> Result<Array2<bool>> {
        config.validate()?;

        Ok(Array2::from_shape_simple_fn(
            config.size.to_grid_index(),
            || self.rng.random_bool(config.light_chance),
        ))
    }
}
