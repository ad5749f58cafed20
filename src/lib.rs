//! moviesearch - terminal movie search client
//!
//! Library crate exposing the remote client and the TUI used by the binary.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod api;
pub mod logging;

pub mod ui;
