// src/MPMC/consumer.rs

use crate::MPMC::Buffer::BoundedBuffer;
use crate::MPMC::TryRemoveError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A consumer for receiving messages from a shared [`BoundedBuffer`].
///
/// Every received message is owned by the caller from then on.
pub struct Consumer<M> {
    buffer: Arc<BoundedBuffer<M>>,
    received: AtomicU64,
}

impl<M> Consumer<M> {
    pub fn new(buffer: Arc<BoundedBuffer<M>>) -> Self {
        Self {
            buffer,
            received: AtomicU64::new(0),
        }
    }

    /// Receives a message from the buffer if one is available.
    ///
    /// # Returns
    /// * `Ok(message)` if a message was removed
    /// * `Err(TryRemoveError::Empty)` if the buffer held nothing
    pub fn receive(&self) -> Result<M, TryRemoveError> {
        let message = self.buffer.try_remove()?;
        self.received.fetch_add(1, Ordering::Relaxed);
        Ok(message)
    }

    /// Receives a message, blocking until one is available.
    pub fn receive_blocking(&self) -> M {
        let message = self.buffer.remove();
        self.received.fetch_add(1, Ordering::Relaxed);
        message
    }

    /// Number of messages this handle has taken from the buffer.
    pub fn received(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }

    pub fn buffer(&self) -> &Arc<BoundedBuffer<M>> {
        &self.buffer
    }
}

impl<M> Clone for Consumer<M> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.buffer))
    }
}
