#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
pub mod ai;
mod board;
mod common;
mod config;
mod game;
mod geometry;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use geometry::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::{
    create_player, AwfulPlayer, GoodPlayer, MediocrePlayer, Player, PlayerKind,
};
#[cfg(feature = "std")]
pub use player::HumanPlayer;
pub use ship::ShipType;
#[cfg(feature = "std")]
pub use ui::ConsoleObserver;
