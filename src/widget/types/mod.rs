//! Type definitions for the Dice3D widget
//!
//! This module is organized into submodules:
//! - `dice` - Named die types (D4..D20) used by presets and the CLI
//! - `config` - Attribute parsing and the validated `DieConfig`
//! - `state` - Roll budget and the mutable `DieState`
//! - `events` - Outbound events dispatched by the controller
//! - `error` - Configuration errors

pub mod config;
pub mod dice;
pub mod error;
pub mod events;
pub mod state;

// Re-export all public types for convenient access
pub use config::*;
pub use dice::*;
pub use error::*;
pub use events::*;
pub use state::*;
