#![cfg(feature = "std")]

use std::string::String;

use crate::board::{Board, CellState};
use crate::config::BOARD_SIZE;
use crate::events::Event;
use crate::grid::{self, Coord};
use crate::ship::Facing;

/// Parse a coordinate like `B4` (column letter, 1-based row).
pub fn parse_coord(input: &str) -> Option<Coord> {
    let input = input.trim();
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as i32;
    let row_str: String = chars.collect();
    let row: i32 = row_str.trim().parse().ok()?;
    if row < 1 {
        return None;
    }
    Some(Coord::new(col, row - 1))
}

/// Parse a facing from its first letter: `n`, `e`, `s` or `w`.
pub fn parse_facing(input: &str) -> Option<Facing> {
    match input.trim().chars().next()?.to_ascii_lowercase() {
        'n' => Some(Facing::North),
        'e' => Some(Facing::East),
        's' => Some(Facing::South),
        'w' => Some(Facing::West),
        _ => None,
    }
}

/// Render a coordinate in `B4` form; off-board coordinates fall back to
/// their numeric form.
pub fn coord_label(coord: Coord) -> String {
    if !grid::in_bounds(coord) {
        return std::format!("{}", coord);
    }
    let col = (b'A' + coord.col as u8) as char;
    std::format!("{}{}", col, coord.row + 1)
}

/// Print a board. Hits show as `X`, misses as `o`; with `reveal` set,
/// surviving ship cells show as `S`.
pub fn print_board(board: &Board, reveal: bool) {
    let occupied = board.occupied_cells();
    std::print!("   ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c) as char;
        std::print!(" {}", ch);
    }
    std::println!();
    for r in 0..BOARD_SIZE as i32 {
        std::print!("{:2} ", r + 1);
        for c in 0..BOARD_SIZE as i32 {
            let coord = Coord::new(c, r);
            let ch = match board.cell_state(coord) {
                Some(CellState::Hit) => 'X',
                Some(CellState::Miss) => 'o',
                _ => {
                    let occupied_here = grid::cell_index(coord)
                        .map(|i| occupied.contains(i))
                        .unwrap_or(false);
                    if reveal && occupied_here {
                        'S'
                    } else {
                        '.'
                    }
                }
            };
            std::print!(" {}", ch);
        }
        std::println!();
    }
}

/// Print hit and sink chatter for a drained event stream. `owner` prefixes
/// the ship, e.g. `Your` or `Enemy`. Deployment events stay silent.
pub fn announce_events(owner: &str, events: impl Iterator<Item = Event>) {
    for event in events {
        match event {
            Event::ShipHit { ship, coord } => {
                std::println!("{} {} was hit at {}!", owner, ship, coord_label(coord));
            }
            Event::ShipSunk { ship } => {
                std::println!("{} {} was sunk!", owner, ship);
            }
            Event::DeploymentChanged { .. } => {}
        }
    }
}
