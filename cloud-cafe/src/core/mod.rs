//! Core module - configuration and the café aggregate
//!
//! - [`Config`] - environment-driven configuration
//! - [`Cafe`] - the four managers behind one "save everything" handle

pub mod config;
pub mod state;

pub use config::Config;
pub use state::Cafe;
