//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::create::CreateArgs;
use crate::commands::get::GetArgs;
use crate::commands::list::ListArgs;

/// Books record service CLI.
#[derive(Parser, Debug)]
#[command(name = "books")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file path (":memory:" for a throwaway database)
    #[arg(long, default_value = "books.db", global = true)]
    pub db: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a book
    Create(CreateArgs),
    /// Fetch one book by id
    Get(GetArgs),
    /// List books with optional substring filters
    List(ListArgs),
}
