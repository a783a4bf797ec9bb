//! Exact-match path-to-URL redirect routing.
//!
//! Builds request handlers that map request paths to redirect destinations,
//! with the path/URL associations sourced from an in-memory map, YAML bytes,
//! or JSON bytes. Paths with no association are delegated unchanged to a
//! caller-supplied fallback service.
//!
//! # Data Flow
//!
//! ```text
//! raw bytes (YAML | JSON)
//!     → parser (decode to ordered Vec<PathUrl>)
//!     → table  (fold records into RedirectTable, last duplicate wins)
//!     → routing (RedirectService: table + fallback)
//!     → per request: exact lookup → 302 Found, or fallback unchanged
//! ```
//!
//! The produced [`RedirectService`] is a `tower::Service` over axum request
//! types, so it can be served directly or composed with an `axum::Router`
//! as its fallback.

// Core subsystems
pub mod parser;
pub mod routing;
pub mod table;

// Cross-cutting concerns
pub mod loader;

pub use loader::{load_table, LoadError, TableFormat};
pub use parser::{parse_json, parse_yaml, ParseError};
pub use routing::RedirectService;
pub use table::{PathUrl, RedirectTable};
