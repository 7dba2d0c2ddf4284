// In src/MPMC/producer.rs
use crate::MPMC::Buffer::BoundedBuffer;
use crate::MPMC::TryInsertError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A producer for sending messages into a shared [`BoundedBuffer`].
///
/// Producers are cheap to clone; every clone feeds the same buffer and keeps
/// its own count of sent messages, starting from zero.
pub struct Producer<M> {
    buffer: Arc<BoundedBuffer<M>>,
    sent: AtomicU64,
}

impl<M> Producer<M> {
    pub fn new(buffer: Arc<BoundedBuffer<M>>) -> Self {
        Self {
            buffer,
            sent: AtomicU64::new(0),
        }
    }

    /// Sends a message without blocking.
    ///
    /// # Returns
    /// * `Ok(())` if the message was stored
    /// * `Err(TryInsertError::Full(message))` if the buffer is full; the message
    ///   is handed back unchanged
    pub fn send(&self, message: M) -> Result<(), TryInsertError<M>> {
        self.buffer.try_insert(message)?;
        self.sent.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Sends a message, blocking until a slot is free.
    pub fn send_blocking(&self, message: M) {
        self.buffer.insert(message);
        self.sent.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of messages this handle has stored in the buffer.
    pub fn sent(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }

    pub fn buffer(&self) -> &Arc<BoundedBuffer<M>> {
        &self.buffer
    }
}

impl<M> Clone for Producer<M> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.buffer))
    }
}
