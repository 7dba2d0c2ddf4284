use std::sync::Arc;

use super::Buffer::{BoundedBuffer, RemovalOrder, DEFAULT_NAME};
use super::{BufferError, Consumer, Producer};

#[derive(Clone, Debug)]
pub struct BufferBuilder {
    capacity: usize,
    name: String,
    order: RemovalOrder,
}

impl Default for BufferBuilder {
    fn default() -> Self {
        Self {
            capacity: 1024, // 1024 slots
            name: DEFAULT_NAME.to_owned(),
            order: RemovalOrder::default(),
        }
    }
}

impl BufferBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Label used in the buffer's log lines.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_order(mut self, order: RemovalOrder) -> Self {
        self.order = order;
        self
    }

    pub fn build<M>(self) -> Result<BoundedBuffer<M>, BufferError> {
        BoundedBuffer::with_config(self.capacity, self.order, self.name)
    }

    /// Build a buffer and the first producer/consumer pair sharing it.
    ///
    /// Both handles can be cloned to add more producers or consumers.
    pub fn build_channel<M>(self) -> Result<(Producer<M>, Consumer<M>), BufferError> {
        let buffer = Arc::new(self.build()?);
        Ok((Producer::new(Arc::clone(&buffer)), Consumer::new(buffer)))
    }
}
