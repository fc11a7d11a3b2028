//! Crate error type.
//!
//! The state machine itself is total; only index-based entry points can fail.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown producer index: {0}")]
    UnknownProducer(usize),
}
