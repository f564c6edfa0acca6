//! Stream property checker
//!
//! Routes a file by testing one property of its streams:
//! - Stream type, audio channel count and language filters
//! - `includes` / `not_includes` / `equals` / `not_equals` matching
//! - Any-stream semantics for positive conditions, all-streams for negative

pub mod evaluate;
pub mod filter;

pub use evaluate::{check_stream, evaluate, narrow};
pub use filter::{split_list, Condition, ConfigError, FilterConfig, StreamTypeFilter};
