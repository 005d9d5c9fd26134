//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Personal activity time tracker.
///
/// Records START/STOP lines to a plain-text log and reconstructs how long
/// each activity took.
#[derive(Debug, Parser)]
#[command(name = "sand", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Set up a tracking file, creating it if it does not exist.
    Init {
        /// The tracking file to record activities in.
        file: PathBuf,
    },

    /// Start an activity, stopping the current one first.
    Start {
        /// Activity description (e.g., "coding sand cli").
        activity: Vec<String>,
    },

    /// Stop the current activity.
    Stop,

    /// Show the running activity.
    Status,

    /// Show today's activities.
    Today {
        /// Total durations per activity.
        #[arg(long)]
        sum: bool,
    },

    /// Show yesterday's activities.
    Yesterday {
        /// Total durations per activity.
        #[arg(long)]
        sum: bool,
    },

    /// Search activities by text or date (e.g., "programming", "2020-05-20").
    Query {
        /// Text to search for; matches everything when omitted.
        terms: Vec<String>,

        /// Total durations per activity.
        #[arg(long)]
        sum: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_collects_activity_words() {
        let cli = Cli::try_parse_from(["sand", "start", "coding", "sand", "cli"]).unwrap();
        match cli.command {
            Some(Commands::Start { activity }) => assert_eq!(activity, ["coding", "sand", "cli"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_query_accepts_sum_after_terms() {
        let cli = Cli::try_parse_from(["sand", "query", "programming", "--sum"]).unwrap();
        match cli.command {
            Some(Commands::Query { terms, sum }) => {
                assert_eq!(terms, ["programming"]);
                assert!(sum);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
