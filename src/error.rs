//! Errors emitted by the dynamically-typed construction boundary.
//!
//! The typed operations ([`crate::Node::insert`] and friends) take `i64`
//! and cannot be handed a value of the wrong type, so they are infallible.
//! The only fallibility in this crate is converting untyped data into an
//! [`crate::Init`].

/// Errors propagated through the public API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A dynamically-typed initializer held something other than an
    /// integer, `null`, or a sequence of integers.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
