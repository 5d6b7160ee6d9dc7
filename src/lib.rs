//! Quotation Gallery TUI Library
//!
//! Exposes modules for testing

pub mod clipboard;
pub mod config;
pub mod export;
pub mod logging;
pub mod logic;
pub mod model;
pub mod quotes;
pub mod services;
pub mod ui;
pub mod utils;
