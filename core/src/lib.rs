#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod error;
mod generator;
mod snapshot;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board size as `(rows, cols)`.
    pub size: Coord2,
    /// Chance for each cell to start lit, only consulted while generating.
    pub light_chance: f64,
    #[serde(default)]
    pub post_win: PostWinPolicy,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord2 = (5, 5);
    pub const DEFAULT_LIGHT_CHANCE: f64 = 0.25;

    pub const fn new_unchecked(size: Coord2, light_chance: f64) -> Self {
        Self {
            size,
            light_chance,
            post_win: PostWinPolicy::KeepPlaying,
        }
    }

    pub fn new((rows, cols): (usize, usize), light_chance: f64) -> Result<Self> {
        let size = (validate_dimension(rows)?, validate_dimension(cols)?);
        validate_light_chance(light_chance)?;
        Ok(Self::new_unchecked(size, light_chance))
    }

    pub const fn with_post_win(self, post_win: PostWinPolicy) -> Self {
        Self { post_win, ..self }
    }

    /// Checks a config whose fields were set directly or deserialized.
    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.size;
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidSize);
        }
        validate_light_chance(self.light_chance)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, Self::DEFAULT_LIGHT_CHANCE)
    }
}

fn validate_dimension(len: usize) -> Result<Coord> {
    Coord::try_from(len)
        .ok()
        .filter(|&len| len > 0)
        .ok_or(GameError::InvalidSize)
}

fn validate_light_chance(light_chance: f64) -> Result<()> {
    // NaN fails the range check too
    if (0.0..=1.0).contains(&light_chance) {
        Ok(())
    } else {
        Err(GameError::InvalidLightChance)
    }
}

/// What a board does with activations once every light is off.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostWinPolicy {
    /// Activations after a win are ignored.
    Freeze,
    /// Activations keep toggling cells, so a won board can be un-won.
    #[default]
    KeepPlaying,
}

impl PostWinPolicy {
    pub const fn accepts_moves_after_win(self) -> bool {
        matches!(self, Self::KeepPlaying)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    Active,
    Won,
}

impl BoardState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActivateOutcome {
    NoChange,
    Toggled,
    Won,
}

impl ActivateOutcome {
    pub const fn has_update(self) -> bool {
        use ActivateOutcome::*;
        match self {
            NoChange => false,
            Toggled => true,
            Won => true,
        }
    }
}
