// Hunt-and-target attack selection. A shuffled pool of every cell drives
// the hunt; each hit promotes nearby cells into a critical pool that is
// drained first, and two hits in a line aim the follow-up shots at both
// ends of that line.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::AttackOutcome;
use crate::config::CELL_COUNT;
use crate::grid::{self, Coord};
use crate::pool::CandidatePool;

const NEIGHBOR_STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// Attack selection state for one attacker against one defender board.
#[derive(Debug, Default)]
pub struct Targeting {
    normal: CandidatePool,
    critical: CandidatePool,
    last_hit: Option<Coord>,
}

impl Targeting {
    /// Create an idle selector. Call [`Targeting::reset`] before a battle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the pools for a fresh battle: every cell becomes a hunt
    /// candidate in shuffled order, priorities and the hit memory clear.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.normal.clear();
        self.critical.clear();
        self.last_hit = None;
        for i in 0..CELL_COUNT as u32 {
            self.normal.push_back(i);
        }
        self.normal.shuffle(rng);
    }

    /// Take the next cell to fire at. Critical candidates come first; a cell
    /// taken from the critical pool also leaves the hunt pool.
    pub fn next_target(&mut self) -> Option<Coord> {
        if let Some(index) = self.critical.pop_front() {
            self.normal.remove(index);
            return Some(grid::coord_at(index));
        }
        self.normal.pop_front().map(grid::coord_at)
    }

    /// Fold a resolved attack back into the pools. `defender` is the board
    /// that was shot at; candidate filtering checks it for cells that can
    /// still be attacked.
    pub fn observe<R: Rng + ?Sized>(
        &mut self,
        coord: Coord,
        outcome: AttackOutcome,
        defender: &Board,
        rng: &mut R,
    ) {
        let index = match grid::cell_index(coord) {
            Ok(i) => i,
            Err(_) => return,
        };
        self.normal.remove(index);
        self.critical.remove(index);
        match outcome {
            AttackOutcome::Sunk(_) => {
                self.critical.clear();
                self.last_hit = None;
            }
            AttackOutcome::Hit => {
                match self.last_hit {
                    Some(last) => self.extend_line(last, coord, defender, rng),
                    None => self.ring_neighbors(coord, defender, rng),
                }
                self.last_hit = Some(coord);
            }
            AttackOutcome::Miss => {
                self.last_hit = None;
            }
        }
    }

    /// The unresolved hit the selector is working from, if any.
    pub fn last_hit(&self) -> Option<Coord> {
        self.last_hit
    }

    /// Live critical candidates in firing order.
    pub fn critical_cells(&self) -> impl Iterator<Item = u32> + '_ {
        self.critical.iter()
    }

    /// Number of live critical candidates.
    pub fn critical_len(&self) -> usize {
        self.critical.len()
    }

    /// Number of live hunt candidates.
    pub fn normal_len(&self) -> usize {
        self.normal.len()
    }

    // Promote the attackable 4-neighbors of a lone hit, in random order.
    // push_front reverses the shuffle, which is fine: the order stays random.
    fn ring_neighbors<R: Rng + ?Sized>(&mut self, coord: Coord, defender: &Board, rng: &mut R) {
        let mut steps = NEIGHBOR_STEPS;
        steps.shuffle(rng);
        for (dc, dr) in steps {
            let cell = coord.offset(dc, dr);
            if defender.is_attackable(cell) {
                if let Ok(i) = grid::cell_index(cell) {
                    self.critical.push_front(i);
                }
            }
        }
    }

    // Two hits in a line: aim just beyond each end. A pair that is not
    // collinear (manual fire can produce one) rings the newer hit instead.
    fn extend_line<R: Rng + ?Sized>(
        &mut self,
        last: Coord,
        now: Coord,
        defender: &Board,
        rng: &mut R,
    ) {
        let dc = now.col - last.col;
        let dr = now.row - last.row;
        if (dc != 0 && dr != 0) || (dc == 0 && dr == 0) {
            return self.ring_neighbors(now, defender, rng);
        }
        let (sc, sr) = (dc.signum(), dr.signum());
        for cell in [last.offset(-sc, -sr), now.offset(sc, sr)] {
            if defender.is_attackable(cell) {
                if let Ok(i) = grid::cell_index(cell) {
                    self.critical.push_front(i);
                }
            }
        }
    }
}
