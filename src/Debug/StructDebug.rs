use std::fmt;
use crate::MPMC::Buffer::BoundedBuffer;
use crate::MPMC::{Consumer, Producer};

/// Debug function for BoundedBuffer
///
/// Shows:
/// - Name, capacity and removal order
/// - Current occupancy, or `<locked>` when another thread holds the lock
/// - Number of parked inserters and removers
///
/// Never blocks and never formats the stored messages themselves.
pub fn debug_bounded_buffer<M>(buffer: &BoundedBuffer<M>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut s = f.debug_struct("BoundedBuffer");
    s.field("name", &buffer.name)
        .field("capacity", &buffer.capacity)
        .field("order", &buffer.order);
    match buffer.slots.try_lock() {
        Some(slots) => s.field("len", &slots.len()),
        None => s.field("len", &format_args!("<locked>")),
    };
    s.field("blocked_inserters", &buffer.blocked_inserters())
        .field("blocked_removers", &buffer.blocked_removers())
        .finish()
}

/// Debug function for Producer
pub fn debug_producer<M>(producer: &Producer<M>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Producer")
        .field("buffer", &producer.buffer().name())
        .field("sent", &producer.sent())
        .finish()
}

/// Debug function for Consumer
pub fn debug_consumer<M>(consumer: &Consumer<M>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Consumer")
        .field("buffer", &consumer.buffer().name())
        .field("received", &consumer.received())
        .finish()
}
