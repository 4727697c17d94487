//! Shell command parsing
//!
//! One command per line, whitespace separated, parsed with clap. Positions
//! are 0-based, the same as the indices printed by `show`. `help` and
//! `<command> --help` come from clap and surface as a `DisplayHelp` error.

use crate::error::CliError;
use cadenza_core::TrackId;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "cadenza", no_binary_name = true)]
#[command(about = "Cadenza queue shell", long_about = None)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Append tracks
    Add {
        #[arg(required = true)]
        ids: Vec<TrackId>,
    },
    /// Add tracks and play them now
    Play {
        #[arg(required = true)]
        ids: Vec<TrackId>,
    },
    /// Select the next track
    Next,
    /// Select the previous track
    Prev,
    /// Select the track at a position
    Jump { pos: usize },
    /// Remove the track at a position
    Remove { pos: usize },
    /// Move a track
    Move { from: usize, to: usize },
    /// Turn shuffle mode on
    Shuffle,
    /// Turn shuffle mode off
    Unshuffle,
    /// Empty the queue
    Clear,
    /// Simulate a track-changes event
    Changed {
        id: TrackId,
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Simulate a track-removals event
    Removed {
        #[arg(required = true)]
        ids: Vec<TrackId>,
    },
    /// Click tracks; two clicks in a row form a double click
    Click {
        #[arg(required = true)]
        ids: Vec<TrackId>,
    },
    /// Change an enqueue setting
    Set {
        setting: Setting,
        #[arg(required = true, action = ArgAction::Set)]
        value: bool,
    },
    /// Print the queue
    Show,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Setting changed with `set`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Setting {
    /// A single click enqueues (true) or plays (false)
    OnClick,
    /// Clear the queue before playing
    ClearBefore,
}

/// Parse one shell line
///
/// Help requests come back as an error of kind `DisplayHelp`; print them
/// with [`clap::Error::print`].
pub fn parse_line(line: &str) -> Result<Command, clap::Error> {
    ShellLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_line(line).map_err(|e| CliError::command(e.to_string()))
    }
}
