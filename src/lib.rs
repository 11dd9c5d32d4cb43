#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod cellset;
mod common;
mod config;
mod deployment;
mod events;
mod game;
mod grid;
mod planner;
mod player;
mod pool;
mod ship;
mod targeting;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
mod logging;

pub use board::*;
pub use cellset::{CellSet, Indices};
pub use common::*;
pub use config::*;
pub use deployment::{can_deploy, deployment_run};
pub use events::*;
pub use game::*;
pub use grid::{cell_index, coord_at, in_bounds, Coord};
pub use planner::auto_deploy;
pub use player::*;
pub use pool::CandidatePool;
pub use ship::*;
pub use targeting::*;
#[cfg(feature = "std")]
pub use console::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
