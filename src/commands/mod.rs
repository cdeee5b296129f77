//! Command implementations
//!
//! - `porcelain`: User-facing commands comparing two directory trees
//!   (diff, status, summary)

pub mod porcelain;
