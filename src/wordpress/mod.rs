//! WordPress REST API transport.
//!
//! - [`WpClient`] — authenticated GET/POST/PUT/DELETE with JSON bodies
//! - [`Query`] — query-string assembly that keeps `0`/`false` and drops absent values
//! - [`WpError`] — status-carrying error for non-2xx responses

pub mod client;
pub mod error;
pub mod query;

pub use client::WpClient;
pub use error::{WpError, WpResult};
pub use query::{encode_segment, Query, QueryValue};
