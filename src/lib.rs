//! Pseudo-legal move generation on a 64-square mailbox board, plus a
//! random self-play driver built on top of it.

pub mod agent;
pub mod config;
pub mod game_repr;
pub mod orchestrator;
