//! books-service - Service façade for the books record service.
//!
//! Orchestrates the request pipeline: validation, server-side default
//! assignment, storage, and page-token handling. The store is injected at
//! construction; this crate holds no persistent state of its own.

pub mod id;
pub mod service;

pub use id::IdGenerator;
pub use service::BooksService;
