// Crate root library declaration and module exports.
pub mod calendar;
pub mod cli;
pub mod config;
pub mod context;
pub mod feed;
pub mod model;
pub mod storage;
pub mod store;

#[cfg(feature = "tui")]
pub mod tui;
