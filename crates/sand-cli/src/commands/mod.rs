//! CLI subcommand implementations.

pub mod init;
pub mod query;
pub mod start;
pub mod status;
pub mod stop;
