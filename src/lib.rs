//! Blaster Game - a one-enemy arcade shooter
//!
//! Core modules:
//! - `compute`: spawn, movement, hit and game-over rules
//! - `game`: driver that owns the state and dispatches timers and keys
//! - `scheduler`: one-shot timers over a virtual clock
//! - `render`: drawing seam; `display` implements it for the terminal

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod game;
pub mod input;
pub mod random;
pub mod render;
pub mod scheduler;

pub use config::GameConfig;
pub use error::ConfigError;
pub use game::{Control, Game};
