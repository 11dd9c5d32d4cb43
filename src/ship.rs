//! Ship kinds, facing directions, and per-ship runtime state.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::grid::Coord;

/// The five ship classes of the standard fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipKind {
    Carrier,
    Battleship,
    Destroyer,
    Submarine,
    PatrolBoat,
}

impl ShipKind {
    /// Number of cells the ship occupies.
    pub const fn size(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Destroyer => 3,
            ShipKind::Submarine => 3,
            ShipKind::PatrolBoat => 2,
        }
    }

    /// Display name of the ship class.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
            ShipKind::PatrolBoat => "Patrol Boat",
        }
    }

    /// Position of the kind in the fleet roster.
    pub(crate) const fn roster_index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction a ship's run extends in from its head cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    /// All facings in clockwise order.
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// Unit step (`dc`, `dr`) along the facing. North points toward row 0.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Facing::North => (0, -1),
            Facing::East => (1, 0),
            Facing::South => (0, 1),
            Facing::West => (-1, 0),
        }
    }

    /// The next facing clockwise.
    pub const fn clockwise(self) -> Self {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    /// The next facing counter-clockwise.
    pub const fn counter_clockwise(self) -> Self {
        match self {
            Facing::North => Facing::West,
            Facing::West => Facing::South,
            Facing::South => Facing::East,
            Facing::East => Facing::North,
        }
    }

    /// Draw a facing uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// One ship of the fleet: class, damage, and current placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    hit_points: usize,
    facing: Facing,
    positions: Vec<Coord>,
    deployed: bool,
}

impl Ship {
    /// Create an undamaged, undeployed ship of the given class.
    pub fn new(kind: ShipKind) -> Self {
        Ship {
            kind,
            hit_points: kind.size(),
            facing: Facing::North,
            positions: Vec::new(),
            deployed: false,
        }
    }

    /// Ship's class.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Number of cells the ship occupies.
    pub fn size(&self) -> usize {
        self.kind.size()
    }

    /// Remaining hit points.
    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    /// Current facing.
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Cells the ship occupies, head first. Empty while undeployed.
    pub fn positions(&self) -> &[Coord] {
        &self.positions
    }

    /// Returns `true` while the ship sits on a board.
    pub fn is_deployed(&self) -> bool {
        self.deployed
    }

    /// Returns `true` once all hit points are gone.
    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }

    /// Returns `true` if the deployed ship covers `coord`.
    pub fn occupies(&self, coord: Coord) -> bool {
        self.positions.contains(&coord)
    }

    /// Turn the ship one step clockwise or counter-clockwise. Rotation is a
    /// plain state update; it never revalidates an existing placement.
    pub fn rotate(&mut self, clockwise: bool) {
        self.facing = if clockwise {
            self.facing.clockwise()
        } else {
            self.facing.counter_clockwise()
        };
    }

    pub(crate) fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }

    /// Record a placement. The caller has already validated the run.
    pub(crate) fn deploy(&mut self, positions: Vec<Coord>) {
        debug_assert_eq!(positions.len(), self.kind.size());
        self.positions = positions;
        self.deployed = true;
    }

    /// Take the ship off the board. Damage is kept; a ship picked up and
    /// placed again mid-battle still carries its hits.
    pub(crate) fn undeploy(&mut self) {
        self.positions.clear();
        self.deployed = false;
    }

    /// Remove one hit point. Returns `true` only on the hit that sinks the
    /// ship; further calls on a sunk ship change nothing.
    pub(crate) fn apply_hit(&mut self) -> bool {
        if self.hit_points == 0 {
            return false;
        }
        self.hit_points -= 1;
        self.hit_points == 0
    }

    /// Restore the ship to its freshly built state for a new round.
    pub(crate) fn reset(&mut self) {
        self.hit_points = self.kind.size();
        self.facing = Facing::North;
        self.positions.clear();
        self.deployed = false;
    }
}
