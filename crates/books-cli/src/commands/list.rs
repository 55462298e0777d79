//! List command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use books_core::types::ListBooksRequest;
use books_core::validate;
use books_service::BooksService;
use books_sqlite::SqliteStore;

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Substring filter on author
    #[arg(long, default_value = "")]
    pub author: String,

    /// Substring filter on title
    #[arg(long, default_value = "")]
    pub title: String,

    /// Maximum number of records per page (1-50)
    #[arg(long, default_value_t = validate::MAX_PAGE_SIZE)]
    pub page_size: i64,

    /// Token from a previous page
    #[arg(long, default_value = "")]
    pub page_token: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(service: &BooksService<SqliteStore>, args: ListArgs) -> Result<()> {
    let req = ListBooksRequest {
        author: args.author,
        title: args.title,
        page_size: args.page_size,
        page_token: args.page_token,
    };

    let res = service
        .list_books(req)
        .await
        .context("Failed to list books")?;

    if res.books.is_empty() {
        output::note("No books found.");
        return Ok(());
    }

    for book in &res.books {
        if args.pretty {
            output::json_pretty(book)?;
        } else {
            output::json(book)?;
        }
    }

    if !res.next_page_token.is_empty() {
        eprintln!();
        eprintln!("{}: {}", "Next page token".dimmed(), res.next_page_token);
    }

    Ok(())
}
