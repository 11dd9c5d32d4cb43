use alloc::vec::Vec;

use crate::board::{Board, CellState};
use crate::grid::{self, Coord};
use crate::ship::{Facing, ShipKind};

/// Cells a ship of `kind` would cover with its head at `head`, extending
/// along `facing`, head first. `None` when any cell leaves the board.
pub fn deployment_run(kind: ShipKind, head: Coord, facing: Facing) -> Option<Vec<Coord>> {
    let (dc, dr) = facing.offset();
    let mut run = Vec::with_capacity(kind.size());
    for i in 0..kind.size() as i32 {
        let cell = head.offset(dc * i, dr * i);
        if !grid::in_bounds(cell) {
            return None;
        }
        run.push(cell);
    }
    Some(run)
}

/// Validate a placement against `board`. Returns the run when every cell is
/// on the board and free of other ships.
pub fn can_deploy(
    board: &Board,
    kind: ShipKind,
    head: Coord,
    facing: Facing,
) -> Option<Vec<Coord>> {
    let run = deployment_run(kind, head, facing)?;
    if run
        .iter()
        .all(|&c| board.cell_state(c) == Some(CellState::Empty))
    {
        Some(run)
    } else {
        None
    }
}
