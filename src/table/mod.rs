//! Redirect table subsystem.
//!
//! # Data Flow
//! ```text
//! Ordered records (from parser or literal construction):
//!     Vec<PathUrl>
//!     → fold in sequence order (later duplicates overwrite earlier)
//!     → Freeze as immutable RedirectTable
//!
//! Per request:
//!     path string → exact-match lookup → Option<destination URL>
//! ```
//!
//! # Design Decisions
//! - Table is immutable after construction (thread-safe without locks)
//! - Exact, case-sensitive path match; no normalization of either side
//! - Duplicate paths are not an error: last record wins, by insertion order
//! - Destination URLs are opaque strings, never validated here

pub mod map;
pub mod record;

pub use map::RedirectTable;
pub use record::PathUrl;
