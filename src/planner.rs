// Random fleet deployment over two candidate pools. Interior cells are
// preferred; edge-adjacent cells act as a fallback so awkward leftovers can
// still land. Cells flanking a placed ship get demoted to the edge pool,
// which spreads the fleet out without enforcing a hard gap.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::GameError;
use crate::config::{BOARD_SIZE, CELL_COUNT, SHIP_KINDS};
use crate::deployment;
use crate::events::EventQueue;
use crate::grid::{self, Coord};
use crate::pool::CandidatePool;
use crate::ship::{Facing, Ship, ShipKind};

// Head-cell draws per ship before moving on. The interior pass gives up
// quickly and falls back; the edge pass cycles its smaller pool hard before
// declaring the board unplaceable.
const INTERIOR_HEAD_ATTEMPTS: usize = 10;
const EDGE_HEAD_ATTEMPTS: usize = 1000;

/// Deploy every undeployed ship of `board` at random. Ships already on the
/// board keep their placement and constrain the rest. On exhaustion the
/// ships placed so far stay put and `DeploymentExhausted` is returned.
pub fn auto_deploy<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    events: &mut EventQueue,
) -> Result<(), GameError> {
    let (mut interior, mut edge) = build_pools(board);
    interior.shuffle(rng);
    edge.shuffle(rng);
    debug!(
        "deployment pools: {} interior, {} edge",
        interior.len(),
        edge.len()
    );

    for kind in SHIP_KINDS {
        if board.ship(kind).is_deployed() {
            continue;
        }
        let facing = Facing::random(rng);
        let head = match find_interior_head(board, kind, facing, &mut interior)
            .or_else(|| find_edge_head(board, kind, facing, &mut edge))
        {
            Some(head) => head,
            None => {
                warn!("auto-deploy ran out of candidate cells for {}", kind);
                return Err(GameError::DeploymentExhausted);
            }
        };
        board.deploy_ship(kind, head, facing, events)?;

        let ship = board.ship(kind);
        for &cell in ship.positions() {
            if let Ok(i) = grid::cell_index(cell) {
                interior.remove(i);
                edge.remove(i);
            }
        }
        demote_perimeter(ship, &mut interior, &mut edge);
    }
    debug!("fleet deployed");
    Ok(())
}

// Split the board into the outer ring (edge pool) and everything else
// (interior pool), then carve out ships that are already deployed.
fn build_pools(board: &Board) -> (CandidatePool, CandidatePool) {
    let mut interior = CandidatePool::new();
    let mut edge = CandidatePool::new();
    for i in 0..CELL_COUNT as u32 {
        if is_edge(i) {
            edge.push_back(i);
        } else {
            interior.push_back(i);
        }
    }
    for ship in board.ships().iter().filter(|s| s.is_deployed()) {
        for &cell in ship.positions() {
            if let Ok(i) = grid::cell_index(cell) {
                interior.remove(i);
                edge.remove(i);
            }
        }
        demote_perimeter(ship, &mut interior, &mut edge);
    }
    (interior, edge)
}

fn is_edge(index: u32) -> bool {
    let n = BOARD_SIZE as i32;
    let cell = grid::coord_at(index);
    cell.col == 0 || cell.col == n - 1 || cell.row == 0 || cell.row == n - 1
}

// Interior draws demand the whole run inside the interior pool; the head
// itself was just popped, so only the rest of the run is checked. Failed
// heads rotate to the back of the queue.
fn find_interior_head(
    board: &Board,
    kind: ShipKind,
    facing: Facing,
    pool: &mut CandidatePool,
) -> Option<Coord> {
    for _ in 0..INTERIOR_HEAD_ATTEMPTS {
        let index = pool.pop_front()?;
        let head = grid::coord_at(index);
        match deployment::can_deploy(board, kind, head, facing) {
            Some(run) if rest_in_pool(&run, pool) => return Some(head),
            _ => pool.push_back(index),
        }
    }
    None
}

// Edge draws only need the placement itself to be legal.
fn find_edge_head(
    board: &Board,
    kind: ShipKind,
    facing: Facing,
    pool: &mut CandidatePool,
) -> Option<Coord> {
    for _ in 0..EDGE_HEAD_ATTEMPTS {
        let index = pool.pop_front()?;
        let head = grid::coord_at(index);
        if deployment::can_deploy(board, kind, head, facing).is_some() {
            return Some(head);
        }
        pool.push_back(index);
    }
    None
}

fn rest_in_pool(run: &[Coord], pool: &CandidatePool) -> bool {
    run.iter().skip(1).all(|&cell| match grid::cell_index(cell) {
        Ok(i) => pool.contains(i),
        Err(_) => false,
    })
}

// The perimeter of a run: both flanks of every cell, plus the cell beyond
// each end with its own flanks. Off-board cells are discarded.
fn perimeter_cells(positions: &[Coord], facing: Facing) -> Vec<Coord> {
    let (dc, dr) = facing.offset();
    let (pc, pr) = (-dr, dc);
    let mut cells = Vec::with_capacity(positions.len() * 2 + 6);
    for &pos in positions {
        cells.push(pos.offset(pc, pr));
        cells.push(pos.offset(-pc, -pr));
    }
    if let (Some(&head), Some(&tail)) = (positions.first(), positions.last()) {
        for base in [head.offset(-dc, -dr), tail.offset(dc, dr)] {
            cells.push(base);
            cells.push(base.offset(pc, pr));
            cells.push(base.offset(-pc, -pr));
        }
    }
    cells.retain(|&c| grid::in_bounds(c));
    cells
}

fn demote_perimeter(ship: &Ship, interior: &mut CandidatePool, edge: &mut CandidatePool) {
    for cell in perimeter_cells(ship.positions(), ship.facing()) {
        if let Ok(i) = grid::cell_index(cell) {
            if interior.remove(i) {
                edge.push_back(i);
            }
        }
    }
}
