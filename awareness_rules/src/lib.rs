//! # Awareness Rules
//!
//! The "rule book" crate - holds the data model the assistant works on and the
//! small stores the dialogue engine calls into. This crate contains no intent
//! matching or response logic.

pub mod activity;
pub mod clock;
pub mod config;
pub mod error;
pub mod profile;
pub mod quiz_bank;
pub mod tasks;

pub use activity::*;
pub use clock::*;
pub use config::*;
pub use error::*;
pub use profile::*;
pub use quiz_bank::*;
pub use tasks::*;
