//! Reusable hooks for common UI patterns

mod use_session_probe;

pub use use_session_probe::*;
