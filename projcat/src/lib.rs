//! Project source aggregation into a single reviewable document.
//!
//! The tool walks a directory tree, prunes excluded directories, filters
//! files by name and suffix, and streams everything that qualifies into one
//! delimited text document. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (name filtering, document
//!   formatting, run counters). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config loading, traversal,
//!   document and report writing). Isolated to keep failure handling in one
//!   place.
//!
//! [`aggregate`] coordinates core logic with I/O to implement the CLI
//! commands.

pub mod aggregate;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
