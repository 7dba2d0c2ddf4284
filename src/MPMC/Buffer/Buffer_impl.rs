use std::collections::VecDeque;

use log::{debug, trace};
use parking_lot::Mutex;

use super::Buffer::{BoundedBuffer, RemovalOrder, DEFAULT_NAME};
use crate::Core::Signal;
use crate::MPMC::{BufferError, TryInsertError, TryRemoveError};

impl<M> BoundedBuffer<M> {
    /// Create an empty buffer able to hold `capacity` messages.
    ///
    /// Messages are removed most-recently-inserted first; use
    /// [`BufferBuilder`](crate::BufferBuilder) to pick another order or a name.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        Self::with_config(capacity, RemovalOrder::default(), DEFAULT_NAME.to_owned())
    }

    pub(crate) fn with_config(
        capacity: usize,
        order: RemovalOrder,
        name: String,
    ) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }

        let mut slots = VecDeque::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|source| BufferError::Allocation { capacity, source })?;

        debug!("{name}: created buffer (capacity: {capacity}, order: {order:?})");

        Ok(Self {
            slots: Mutex::new(slots),
            not_full: Signal::new(),
            not_empty: Signal::new(),
            capacity,
            order,
            name,
        })
    }

    /// Insert a message, blocking while the buffer is full.
    ///
    /// Wakes at most one consumer parked in [`remove`](Self::remove).
    pub fn insert(&self, msg: M) {
        let capacity = self.capacity;
        let mut slots = self.slots.lock();

        if slots.len() >= capacity {
            trace!("{}: insert waiting, buffer full", self.name);
            let parks = self.not_full.wait_while(&mut slots, |slots| slots.len() >= capacity);
            trace!("{}: insert resumed after {parks} park(s)", self.name);
        }

        self.push_locked(&mut slots, msg);
    }

    /// Insert a message if a slot is free.
    ///
    /// On a full buffer nothing changes and the message comes back inside
    /// [`TryInsertError::Full`].
    pub fn try_insert(&self, msg: M) -> Result<(), TryInsertError<M>> {
        let mut slots = self.slots.lock();
        if slots.len() >= self.capacity {
            return Err(TryInsertError::Full(msg));
        }

        self.push_locked(&mut slots, msg);
        Ok(())
    }

    /// Remove a message, blocking while the buffer is empty.
    ///
    /// Wakes at most one producer parked in [`insert`](Self::insert).
    pub fn remove(&self) -> M {
        let mut slots = self.slots.lock();
        loop {
            if let Some(msg) = self.take_locked(&mut slots) {
                return msg;
            }

            trace!("{}: remove waiting, buffer empty", self.name);
            let parks = self.not_empty.wait_while(&mut slots, |slots| slots.is_empty());
            trace!("{}: remove resumed after {parks} park(s)", self.name);
        }
    }

    /// Remove a message if one is stored.
    pub fn try_remove(&self) -> Result<M, TryRemoveError> {
        let mut slots = self.slots.lock();
        self.take_locked(&mut slots).ok_or(TryRemoveError::Empty)
    }

    /// Tear the buffer down, destroying every message still stored.
    ///
    /// Messages are destroyed most-recently-inserted first. Returns how many
    /// were destroyed. Dropping the buffer does the same.
    pub fn destroy(mut self) -> usize {
        self.teardown()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored messages, read under the lock.
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.lock().len() >= self.capacity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn order(&self) -> RemovalOrder {
        self.order
    }

    /// Number of threads currently parked in [`insert`](Self::insert).
    pub fn blocked_inserters(&self) -> usize {
        self.not_full.waiters()
    }

    /// Number of threads currently parked in [`remove`](Self::remove).
    pub fn blocked_removers(&self) -> usize {
        self.not_empty.waiters()
    }

    // Caller holds the lock and has checked there is a free slot.
    fn push_locked(&self, slots: &mut VecDeque<M>, msg: M) {
        debug_assert!(slots.len() < self.capacity);
        slots.push_back(msg);
        self.not_empty.notify_one();
    }

    // Caller holds the lock.
    fn take_locked(&self, slots: &mut VecDeque<M>) -> Option<M> {
        let msg = match self.order {
            RemovalOrder::Lifo => slots.pop_back(),
            RemovalOrder::Fifo => slots.pop_front(),
        }?;
        self.not_full.notify_one();
        Some(msg)
    }

    fn teardown(&mut self) -> usize {
        let slots = self.slots.get_mut();
        let mut destroyed = 0;
        while let Some(msg) = slots.pop_back() {
            drop(msg);
            destroyed += 1;
        }
        if destroyed > 0 {
            debug!("{}: destroyed {destroyed} stored message(s)", self.name);
        }
        destroyed
    }
}

impl<M> Drop for BoundedBuffer<M> {
    fn drop(&mut self) {
        self.teardown();
        debug!("{}: buffer torn down", self.name);
    }
}
