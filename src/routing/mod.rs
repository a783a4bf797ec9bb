//! Redirect resolution.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → resolver.rs (exact-match table lookup)
//!     → hit:  302 Found + Location header, handling ends
//!     → miss: fallback service called with the original request
//!
//! Service Construction (once, before serving):
//!     RedirectTable + fallback service
//!     → Freeze table behind Arc
//!     → RedirectService (immutable, cloneable per connection)
//! ```
//!
//! # Design Decisions
//! - Table is captured read-only; concurrent calls need no locking
//! - Fallback is an opaque tower Service, never inspected or rebuilt
//! - Lookup miss is the defined delegation path, not an error
//! - 302 exactly: clients should retry the new location, nothing is permanent

pub mod resolver;

pub use resolver::RedirectService;
