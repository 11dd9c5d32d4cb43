use rand::Rng;

use crate::common::{AttackOutcome, GameError};
use crate::config::CELL_COUNT;
use crate::events::Event;
use crate::grid::{self, Coord};
use crate::player::Player;

/// The two seats of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    User,
    Enemy,
}

impl Side {
    /// The opposing seat.
    pub fn opponent(self) -> Side {
        match self {
            Side::User => Side::Enemy,
            Side::Enemy => Side::User,
        }
    }
}

/// A hot-seat session: two players and the turn plumbing between them.
pub struct Game {
    user: Player,
    enemy: Player,
}

impl Game {
    /// Create a session with two fresh players.
    pub fn new() -> Self {
        Game {
            user: Player::new(),
            enemy: Player::new(),
        }
    }

    /// The player seated on `side`.
    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::User => &self.user,
            Side::Enemy => &self.enemy,
        }
    }

    /// Mutable access to the player seated on `side`.
    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::User => &mut self.user,
            Side::Enemy => &mut self.enemy,
        }
    }

    fn pair_mut(&mut self, attacker: Side) -> (&mut Player, &mut Player) {
        match attacker {
            Side::User => (&mut self.user, &mut self.enemy),
            Side::Enemy => (&mut self.enemy, &mut self.user),
        }
    }

    /// Arm both attack selectors for a new battle.
    pub fn start_battle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.user.start_battle(rng);
        self.enemy.start_battle(rng);
    }

    /// Clear one board for a new deployment phase.
    pub fn reset(&mut self, side: Side) {
        self.player_mut(side).undeploy_all();
    }

    /// Clear both boards for a new round.
    pub fn reset_all(&mut self) {
        self.reset(Side::User);
        self.reset(Side::Enemy);
    }

    /// Resolve `side` firing at the opposing board.
    pub fn attack<R: Rng + ?Sized>(
        &mut self,
        side: Side,
        coord: Coord,
        rng: &mut R,
    ) -> Result<AttackOutcome, GameError> {
        let (attacker, defender) = self.pair_mut(side);
        let outcome = defender.receive_attack(coord)?;
        attacker.observe_attack(coord, outcome, defender.board(), rng);
        Ok(outcome)
    }

    /// Like [`Game::attack`], addressing the cell by linear index.
    pub fn attack_index<R: Rng + ?Sized>(
        &mut self,
        side: Side,
        index: u32,
        rng: &mut R,
    ) -> Result<AttackOutcome, GameError> {
        if index as usize >= CELL_COUNT {
            return Err(GameError::OutOfBounds);
        }
        self.attack(side, grid::coord_at(index), rng)
    }

    /// Let `side`'s selector pick and fire its next shot.
    pub fn auto_attack<R: Rng + ?Sized>(
        &mut self,
        side: Side,
        rng: &mut R,
    ) -> Result<(Coord, AttackOutcome), GameError> {
        let target = self
            .player_mut(side)
            .next_target()
            .ok_or(GameError::CandidatesExhausted)?;
        let outcome = self.attack(side, target, rng)?;
        Ok((target, outcome))
    }

    /// The winning seat, once the opposing fleet is entirely sunk.
    pub fn victor(&self) -> Option<Side> {
        if self.enemy.board().all_sunk() {
            Some(Side::User)
        } else if self.user.board().all_sunk() {
            Some(Side::Enemy)
        } else {
            None
        }
    }

    /// Returns `true` once either fleet is gone.
    pub fn is_over(&self) -> bool {
        self.victor().is_some()
    }

    /// Drain the presentation events queued for `side`.
    pub fn drain_events(&mut self, side: Side) -> impl Iterator<Item = Event> + '_ {
        self.player_mut(side).drain_events()
    }
}
