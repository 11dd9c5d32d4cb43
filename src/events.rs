//! Typed notifications raised by board mutations, queued for presentation.

use alloc::vec::Vec;

use crate::grid::Coord;
use crate::ship::ShipKind;

/// Something observable happened on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A deployed ship took a hit at `coord`.
    ShipHit { ship: ShipKind, coord: Coord },
    /// A ship lost its last hit point. Raised at most once per battle.
    ShipSunk { ship: ShipKind },
    /// A ship was deployed onto or removed from the board.
    DeploymentChanged { ship: ShipKind, deployed: bool },
}

/// FIFO queue of events awaiting presentation.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<Event>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove and yield all queued events in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.events.drain(..)
    }
}
