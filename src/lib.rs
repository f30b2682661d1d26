//! # BookStack Client
//!
//! An async client for the [BookStack](https://www.bookstackapp.com/) REST API.
//!
//! The crate is split the same way the remote API is consumed:
//!
//! * [`model::http::Bookstack`] holds the connection settings and exposes the two
//!   request primitives: a JSON-body request and a form request. Every call takes
//!   one token from a shared rate limiter and carries the
//!   `Authorization: Token <id>:<secret>` header.
//! * [`model::responses`] decodes the raw bytes returned by the primitives into
//!   the entity shapes found in [`presentation`].
//! * [`application::client::Client`] implements the typed book and user
//!   operations on top of the primitives.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bookstack_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let bookstack = Bookstack::builder()
//!         .url("https://wiki.example.com")
//!         .token("token-id", "token-secret")
//!         .rate_limit(60)
//!         .build()?;
//!
//!     let raw = bookstack.request(Method::GET, "books", None).await?;
//!     let books: Vec<Book> = parse_multiple(&raw)?;
//!     for book in books {
//!         println!("{} {}", book.id, book.name);
//!     }
//!     Ok(())
//! }
//! ```

/// Application layer: configuration, rate limiting and typed operations
pub mod application;

/// Default values shared across the crate
pub mod constants;

/// Error type returned by every fallible operation
pub mod error;

/// Request primitives, form encoding and response envelopes
pub mod model;

/// Commonly used types re-exported in one place
pub mod prelude;

/// Entity shapes returned by the API
pub mod presentation;

/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
