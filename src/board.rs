//! Per-cell board state, the fleet roster, and attack resolution.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{AttackOutcome, BoardSet, GameError};
use crate::config::{CELL_COUNT, NUM_SHIPS, SHIP_KINDS};
use crate::deployment;
use crate::events::{Event, EventQueue};
use crate::grid::{self, Coord};
use crate::ship::{Facing, Ship, ShipKind};

/// What one board cell currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Open water, never attacked.
    Empty,
    /// Covered by a deployed ship, never attacked.
    Occupied,
    /// Attacked and a ship was there.
    Hit,
    /// Attacked and nothing was there.
    Miss,
}

/// One player's board: a cell grid plus the fleet that lives on it.
pub struct Board {
    cells: [CellState; CELL_COUNT],
    ships: [Ship; NUM_SHIPS],
}

impl Board {
    /// Create an empty board with a full, undeployed fleet.
    pub fn new() -> Self {
        Board {
            cells: [CellState::Empty; CELL_COUNT],
            ships: core::array::from_fn(|i| Ship::new(SHIP_KINDS[i])),
        }
    }

    /// State of the cell at `coord`, or `None` off the board.
    pub fn cell_state(&self, coord: Coord) -> Option<CellState> {
        let index = grid::cell_index(coord).ok()?;
        Some(self.cells[index as usize])
    }

    /// Returns `true` when `coord` is on the board and not yet attacked.
    pub fn is_attackable(&self, coord: Coord) -> bool {
        matches!(
            self.cell_state(coord),
            Some(CellState::Empty) | Some(CellState::Occupied)
        )
    }

    /// Immutable view of the fleet roster.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship of the given class.
    pub fn ship(&self, kind: ShipKind) -> &Ship {
        &self.ships[kind.roster_index()]
    }

    /// The class of the deployed ship covering `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<ShipKind> {
        self.ships
            .iter()
            .find(|s| s.is_deployed() && s.occupies(coord))
            .map(Ship::kind)
    }

    /// Returns `true` once every ship of the fleet is deployed.
    pub fn is_fleet_deployed(&self) -> bool {
        self.ships.iter().all(Ship::is_deployed)
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Set of cells covered by deployed ships.
    pub fn occupied_cells(&self) -> BoardSet {
        self.ships
            .iter()
            .filter(|s| s.is_deployed())
            .flat_map(|s| s.positions().iter().filter_map(|&c| grid::cell_index(c).ok()))
            .collect()
    }

    /// Turn a ship one step; placement is not revalidated.
    pub fn rotate_ship(&mut self, kind: ShipKind, clockwise: bool) {
        self.ships[kind.roster_index()].rotate(clockwise);
    }

    /// Deploy a ship with its head at `head`, extending along `facing`.
    ///
    /// Fails with `InvalidPlacement` when the run leaves the board, overlaps
    /// another ship, or the ship is already deployed.
    pub fn deploy_ship(
        &mut self,
        kind: ShipKind,
        head: Coord,
        facing: Facing,
        events: &mut EventQueue,
    ) -> Result<(), GameError> {
        if self.ship(kind).is_deployed() {
            return Err(GameError::InvalidPlacement);
        }
        let positions = deployment::can_deploy(self, kind, head, facing)
            .ok_or(GameError::InvalidPlacement)?;
        let indices: Vec<u32> = positions
            .iter()
            .map(|&c| grid::cell_index(c))
            .collect::<Result<_, _>>()?;
        let ship = &mut self.ships[kind.roster_index()];
        ship.set_facing(facing);
        ship.deploy(positions);
        for &i in &indices {
            self.cells[i as usize] = CellState::Occupied;
        }
        events.push(Event::DeploymentChanged {
            ship: kind,
            deployed: true,
        });
        Ok(())
    }

    /// Take a ship off the board. Untouched cells revert to Empty; cells
    /// already attacked keep their mark. No-op while undeployed.
    pub fn undeploy_ship(&mut self, kind: ShipKind, events: &mut EventQueue) {
        if !self.ship(kind).is_deployed() {
            return;
        }
        let indices: Vec<u32> = self
            .ship(kind)
            .positions()
            .iter()
            .filter_map(|&c| grid::cell_index(c).ok())
            .collect();
        for &i in &indices {
            if self.cells[i as usize] == CellState::Occupied {
                self.cells[i as usize] = CellState::Empty;
            }
        }
        self.ships[kind.roster_index()].undeploy();
        events.push(Event::DeploymentChanged {
            ship: kind,
            deployed: false,
        });
    }

    /// Resolve an attack on `coord`, marking the cell and damaging the ship
    /// there, if any. Repeat attacks on a cell are rejected.
    pub fn resolve_attack(
        &mut self,
        coord: Coord,
        events: &mut EventQueue,
    ) -> Result<AttackOutcome, GameError> {
        let index = grid::cell_index(coord)? as usize;
        if matches!(self.cells[index], CellState::Hit | CellState::Miss) {
            return Err(GameError::AlreadyAttacked);
        }
        // hit detection goes by ship occupancy, not the cell flag
        match self
            .ships
            .iter_mut()
            .find(|s| s.is_deployed() && s.occupies(coord))
        {
            Some(ship) => {
                let kind = ship.kind();
                let sank = ship.apply_hit();
                self.cells[index] = CellState::Hit;
                events.push(Event::ShipHit { ship: kind, coord });
                if sank {
                    events.push(Event::ShipSunk { ship: kind });
                    Ok(AttackOutcome::Sunk(kind))
                } else {
                    Ok(AttackOutcome::Hit)
                }
            }
            None => {
                self.cells[index] = CellState::Miss;
                Ok(AttackOutcome::Miss)
            }
        }
    }

    /// Clear all cells and restore every ship for a fresh round.
    pub fn reset(&mut self, events: &mut EventQueue) {
        for ship in &mut self.ships {
            if ship.is_deployed() {
                events.push(Event::DeploymentChanged {
                    ship: ship.kind(),
                    deployed: false,
                });
            }
            ship.reset();
        }
        self.cells = [CellState::Empty; CELL_COUNT];
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        writeln!(f, "  occupied: {:?},", self.occupied_cells())?;
        for ship in &self.ships {
            writeln!(
                f,
                "  {}: hp {}/{}, deployed: {},",
                ship.kind(),
                ship.hit_points(),
                ship.size(),
                ship.is_deployed()
            )?;
        }
        write!(f, "}}")
    }
}
