//! Sand CLI library.
//!
//! This crate provides the command-line interface and presentation layer
//! for the sand time tracker.

mod cli;
pub mod commands;
mod config;
pub mod display;

pub use cli::{Cli, Commands};
pub use config::Config;
