//! # kancli
//!
//! A three-column task board (To Do, In Progress, Done) driven by a stream
//! of keyboard commands.
//!
//! The crate is split into the board state machine ([`domain`]), the
//! [`controller`] that feeds commands into it, and a [`render`] boundary
//! that hands read-only snapshots to whatever draws the board.

pub mod command;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod render;
pub mod seed;
pub mod theme;

// Re-export commonly used types
pub use command::{Command, ListInput};
pub use config::Config;
pub use controller::{Controller, Flow};
pub use domain::{Board, BoardConfig, Column, Promotion, Status, Task};
pub use error::{KancliError, Result};
pub use seed::Seed;
pub use theme::Theme;
