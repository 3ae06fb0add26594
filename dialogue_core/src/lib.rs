//! # Dialogue Core
//!
//! The conversational engine of the awareness assistant. This crate resolves a
//! line of free text to an intent, mutates the session it belongs to, and
//! produces the reply. It works on the data model from `awareness_rules`.
//!
//! ## Core Components
//!
//! - **patterns**: The ordered regex table behind every recognizable intent
//! - **dispatcher**: Precedence-ordered intent resolution and dialogue state
//! - **knowledge**: Sentiment, memory and keyword fallback responder
//! - **quiz**: Answer equivalence checking and quiz session lifecycle
//! - **session**: The per-user context object every call works on
//!
//! ## Design Philosophy
//!
//! - **Explicit precedence**: Rule order is data, not an `if`/`else` chain
//! - **Owned sessions**: No globals; each session owns its state and RNG
//! - **Answers, not errors**: Malformed input always becomes a reply string

pub mod dispatcher;
pub mod error;
pub mod knowledge;
pub mod patterns;
pub mod quiz;
pub mod session;

pub use dispatcher::*;
pub use error::*;
pub use knowledge::*;
pub use patterns::*;
pub use quiz::*;
pub use session::*;
