//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;

use books_service::BooksService;
use books_sqlite::SqliteStore;

use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Book id
    pub id: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(service: &BooksService<SqliteStore>, args: GetArgs) -> Result<()> {
    let book = service
        .get_book(&args.id)
        .await
        .context("Failed to get book")?;

    if args.pretty {
        output::json_pretty(&book)?;
    } else {
        output::json(&book)?;
    }

    Ok(())
}
