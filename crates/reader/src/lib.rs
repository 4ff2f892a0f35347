// ABOUTME: Main library entry point for the lectern article reader.
// ABOUTME: Re-exports the public API: Reader, ReaderBuilder, Article, ReadError, ErrorCode, FetchStrategy, Options.

//! Lectern - extracts the readable article (title + body text) from a web page.
//!
//! The pipeline fetches a page (single HTTP GET or rendered headless-browser
//! capture), strips non-content elements, and applies a readability heuristic
//! to isolate the main article text.
//!
//! # Example
//!
//! ```no_run
//! use lectern_reader::{ReadError, Reader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ReadError> {
//!     let reader = Reader::builder().build();
//!     let article = reader.read("https://example.com/article").await?;
//!     println!("{}\n\n{}", article.title, article.content);
//!     Ok(())
//! }
//! ```

pub mod article;
pub mod dom;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod formats;
pub mod options;
pub mod reader;
pub mod sanitize;

pub use crate::article::Article;
pub use crate::error::{ErrorCode, ReadError};
pub use crate::fetch::{Fetch, FetchStrategy, FetchedPage, IMPERSONATE_USER_AGENT};
pub use crate::options::{Options, ReaderBuilder};
pub use crate::reader::Reader;
pub use crate::sanitize::{sanitize, SanitizedPage, DEFAULT_TITLE, DENYLIST};
