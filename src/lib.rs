//! Cham Cham Cham - a move-guessing game against the computer
//!
//! Players keep persistent profiles, play sessions of up to twenty rounds,
//! and winning sessions are ranked on a scoreboard built from an append-only
//! ledger.

pub mod arcade;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod storage;

pub use error::{ChamError, Result};
