//! Common types for the rules engine: errors, attack outcomes, board sets.

use crate::cellset::CellSet;
use crate::config::CELL_COUNT;
use crate::ship::ShipKind;

/// Concrete cell set sized for one board.
pub type BoardSet = CellSet<u128, CELL_COUNT>;

/// Result of resolving an attack on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Attack landed on open water.
    Miss,
    /// Attack hit a ship that still has hit points left.
    Hit,
    /// Attack removed the last hit point, carrying the sunk ship's kind.
    Sunk(ShipKind),
}

impl AttackOutcome {
    /// Returns `true` for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackOutcome::Hit | AttackOutcome::Sunk(_))
    }

    /// The sunk ship's kind, if this outcome sank one.
    pub fn sunk(&self) -> Option<ShipKind> {
        match self {
            AttackOutcome::Sunk(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Errors returned by board and game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate or index is outside the board.
    OutOfBounds,
    /// Cell was already attacked this battle.
    AlreadyAttacked,
    /// Placement overlaps another ship, runs off the board, or the ship is
    /// already deployed.
    InvalidPlacement,
    /// Auto-deployment ran out of candidate head cells for a ship.
    DeploymentExhausted,
    /// Auto-attack has no untried cells left to fire at.
    CandidatesExhausted,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            GameError::AlreadyAttacked => write!(f, "Cell was already attacked"),
            GameError::InvalidPlacement => write!(f, "Ship placement is invalid"),
            GameError::DeploymentExhausted => {
                write!(f, "Unable to auto-deploy the remaining ships")
            }
            GameError::CandidatesExhausted => write!(f, "No untried cells remain"),
        }
    }
}
