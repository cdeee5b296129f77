//! Porcelain commands
//!
//! Each command captures a `before` tree, folds an `after` tree into the same
//! session and prints one view of the result.
//!
//! ## Commands
//!
//! - `diff`: Print the unified patch
//! - `status`: Print one `<status>\t<path>` line per changed file
//! - `summary`: Print the changed files and their content as JSON

pub mod diff;
pub mod status;
pub mod summary;
