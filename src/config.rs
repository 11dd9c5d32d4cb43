use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);
pub const NUM_SHIPS: usize = 5;
pub const TOTAL_SHIP_CELLS: usize = 17;

/// Fleet roster in deployment order.
pub const SHIP_KINDS: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Destroyer,
    ShipKind::Submarine,
    ShipKind::PatrolBoat,
];
