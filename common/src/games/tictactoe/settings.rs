use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use super::types::Mark;

/// Which side plays which mark. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolAssignment {
    pub player: Mark,
    pub ai: Mark,
}

impl SymbolAssignment {
    pub fn new(player: Mark, ai: Mark) -> Result<Self, GameError> {
        if player == Mark::Empty || ai == Mark::Empty {
            return Err(GameError::invalid_configuration(
                "symbols must be X or O, not empty",
            ));
        }
        if player == ai {
            return Err(GameError::invalid_configuration(format!(
                "player and computer cannot both play {}",
                player
            )));
        }
        Ok(Self { player, ai })
    }

    pub fn for_player(player: Mark) -> Result<Self, GameError> {
        let ai = player
            .opponent()
            .ok_or_else(|| GameError::invalid_configuration("player symbol must be X or O"))?;
        Self::new(player, ai)
    }
}

impl Default for SymbolAssignment {
    fn default() -> Self {
        Self {
            player: Mark::X,
            ai: Mark::O,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    Player,
    Computer,
    Random,
    /// Decided interactively by the front end before each game.
    Ask,
}

impl FirstPlayerMode {
    /// `Some(player_goes_first)`, or `None` for `Ask`.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<bool> {
        match self {
            FirstPlayerMode::Player => Some(true),
            FirstPlayerMode::Computer => Some(false),
            FirstPlayerMode::Random => Some(rng.random_bool(0.5)),
            FirstPlayerMode::Ask => None,
        }
    }
}
