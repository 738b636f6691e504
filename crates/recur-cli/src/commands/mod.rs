//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `config` - Detection config resolution shared by commands
//! - `detect` - Load a transaction file and detect recurring descriptions
//! - `inspect` - Normalize descriptions and check date sequences

pub mod config;
pub mod detect;
pub mod inspect;

// Re-export command functions for main.rs
pub use config::*;
pub use detect::*;
pub use inspect::*;
