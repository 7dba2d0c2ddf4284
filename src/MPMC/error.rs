use std::collections::TryReserveError;
use std::fmt;
use thiserror::Error;

/// Failure to construct a [`BoundedBuffer`](crate::BoundedBuffer).
#[derive(Debug, Error)]
pub enum BufferError {
    /// A buffer must be able to hold at least one message.
    #[error("buffer capacity must be greater than zero")]
    ZeroCapacity,
    /// Storage for the requested number of slots could not be reserved.
    #[error("failed to reserve storage for {capacity} message slots")]
    Allocation {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Failure mode of [`try_insert`](crate::BoundedBuffer::try_insert).
///
/// The rejected message is handed back to the caller, who keeps ownership of it.
#[derive(PartialEq, Eq, Clone, Copy, Error)]
pub enum TryInsertError<M> {
    /// The buffer was already holding `capacity` messages.
    #[error("inserting into a full buffer")]
    Full(M),
}

impl<M> TryInsertError<M> {
    /// Returns the message that failed to insert.
    pub fn into_inner(self) -> M {
        match self {
            TryInsertError::Full(msg) => msg,
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, TryInsertError::Full(_))
    }
}

impl<M> fmt::Debug for TryInsertError<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TryInsertError::Full(_) => f.write_str("Full(..)"),
        }
    }
}

/// Failure mode of [`try_remove`](crate::BoundedBuffer::try_remove).
#[derive(PartialEq, Eq, Clone, Copy, Debug, Error)]
pub enum TryRemoveError {
    /// No message was stored in the buffer.
    #[error("removing from an empty buffer")]
    Empty,
}
