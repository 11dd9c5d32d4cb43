use rand::Rng;

use crate::board::Board;
use crate::common::{AttackOutcome, GameError};
use crate::events::{Event, EventQueue};
use crate::grid::Coord;
use crate::planner;
use crate::ship::{Facing, ShipKind};
use crate::targeting::Targeting;

/// One seat of the game: a fleet board, attack selection state, and the
/// queue of events this seat's presentation should play back.
pub struct Player {
    board: Board,
    targeting: Targeting,
    events: EventQueue,
}

impl Player {
    /// Create a seat with an empty board and an idle attack selector.
    pub fn new() -> Self {
        Player {
            board: Board::new(),
            targeting: Targeting::new(),
            events: EventQueue::new(),
        }
    }

    /// The player's own board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player's attack selection state.
    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }

    /// Deploy one ship by hand.
    pub fn try_deploy(
        &mut self,
        kind: ShipKind,
        head: Coord,
        facing: Facing,
    ) -> Result<(), GameError> {
        self.board.deploy_ship(kind, head, facing, &mut self.events)
    }

    /// Turn a ship one step clockwise or counter-clockwise.
    pub fn rotate_ship(&mut self, kind: ShipKind, clockwise: bool) {
        self.board.rotate_ship(kind, clockwise);
    }

    /// Take one ship off the board.
    pub fn undeploy(&mut self, kind: ShipKind) {
        self.board.undeploy_ship(kind, &mut self.events);
    }

    /// Take whatever ship covers `coord` off the board, reporting its class.
    pub fn undeploy_at(&mut self, coord: Coord) -> Option<ShipKind> {
        let kind = self.board.ship_at(coord)?;
        self.board.undeploy_ship(kind, &mut self.events);
        Some(kind)
    }

    /// Clear the whole board for a fresh deployment phase.
    pub fn undeploy_all(&mut self) {
        self.board.reset(&mut self.events);
    }

    /// Deploy all still-undeployed ships at random.
    pub fn auto_deploy<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        planner::auto_deploy(&mut self.board, rng, &mut self.events)
    }

    /// Returns `true` once the whole fleet is placed.
    pub fn is_fleet_deployed(&self) -> bool {
        self.board.is_fleet_deployed()
    }

    /// Arm the attack selector for a new battle.
    pub fn start_battle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.targeting.reset(rng);
    }

    /// Resolve an incoming attack on this player's board.
    pub fn receive_attack(&mut self, coord: Coord) -> Result<AttackOutcome, GameError> {
        self.board.resolve_attack(coord, &mut self.events)
    }

    /// Record the outcome of this player's own shot so follow-ups can chase
    /// the hit. `defender` is the board that was shot at.
    pub fn observe_attack<R: Rng + ?Sized>(
        &mut self,
        coord: Coord,
        outcome: AttackOutcome,
        defender: &Board,
        rng: &mut R,
    ) {
        self.targeting.observe(coord, outcome, defender, rng);
    }

    /// The next cell this player's selector wants to fire at.
    pub fn next_target(&mut self) -> Option<Coord> {
        self.targeting.next_target()
    }

    /// Drain queued presentation events in arrival order.
    pub fn drain_events(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.events.drain()
    }
}
