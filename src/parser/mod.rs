//! Structured input parsing.
//!
//! # Data Flow
//! ```text
//! raw bytes (already in memory, no I/O here)
//!     → serde decode (YAML or JSON front-end)
//!     → Vec<PathUrl> in input order
//! ```
//!
//! # Design Decisions
//! - Syntactic validation only: well-formed input of the right shape passes,
//!   anything else is a ParseError, never a partial record list
//! - Input order is preserved; it decides overwrite precedence downstream
//! - The two adapters differ only in wire format, not in semantics

pub mod error;
pub mod json;
pub mod yaml;

pub use error::ParseError;
pub use json::parse_json;
pub use yaml::parse_yaml;
