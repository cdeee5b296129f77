//! Stateful components
//!
//! This module contains everything that holds or gathers snapshot state:
//!
//! - `session`: Directory-driven tracking session (capture, then rescan)
//! - `snapshot_store`: The `before`/`after` snapshots of one session
//! - `tracker`: Entry point used by commands, owns the output writer
//! - `workspace`: Directory tree reader producing snapshots and observations

pub mod session;
pub mod snapshot_store;
pub mod tracker;
pub mod workspace;
