//! # Page Envelope
//!
//! Pagination metadata shared by HTTP list endpoints, including:
//! - Page boundary arithmetic (last page, item from/to ranges)
//! - Next/previous navigation URLs built by rewriting the `page` query parameter
//! - Base URL construction from service host/port configuration
//! - Permissive numeric coercion over upstream query-layer results
//!
//! The central type is [`PageBuilder`]: construct one per request from the
//! upstream result object and the current request URL, then call
//! [`PageBuilder::paginate`] to produce the flat [`PageEnvelope`] returned in
//! the response body.

pub mod builder;
pub mod config;
pub mod error;
#[cfg(feature = "axum")]
pub mod extract;
pub mod query;
pub mod source;

pub use builder::{Fallback, PageBuilder, PageEnvelope};
pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use source::PageSource;
