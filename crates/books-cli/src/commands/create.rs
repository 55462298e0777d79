//! Create command implementation.

use anyhow::{Context, Result};
use clap::Args;
use ulid::Ulid;

use books_core::types::{BookDraft, CreateBookRequest};
use books_service::BooksService;
use books_sqlite::SqliteStore;

use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Book title
    #[arg(long)]
    pub title: String,

    /// Book author
    #[arg(long)]
    pub author: String,

    /// Client-chosen id (defaults to a server-generated ULID)
    #[arg(long)]
    pub id: Option<String>,

    /// Idempotency token (defaults to a fresh ULID)
    #[arg(long)]
    pub request_id: Option<String>,
}

pub async fn run(service: &BooksService<SqliteStore>, args: CreateArgs) -> Result<()> {
    let request_id = args
        .request_id
        .unwrap_or_else(|| Ulid::new().to_string());

    let req = CreateBookRequest {
        book: BookDraft {
            id: args.id,
            title: args.title,
            author: args.author,
            creation_time: None,
        },
        request_id,
    };

    let res = service
        .create_book(req)
        .await
        .context("Failed to create book")?;

    output::success(&format!("Created book {}", res.book.id));
    output::json(&res.book)?;

    Ok(())
}
