// This is the bounded monitor buffer shared by producers and consumers

use crate::Core::Signal;

use parking_lot::Mutex;
use std::collections::VecDeque;

/// Log label used when a buffer is built without an explicit name.
pub const DEFAULT_NAME: &str = "msgbuf";

/// Which stored message a removal hands out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RemovalOrder {
    /// The most recently inserted message leaves first.
    #[default]
    Lifo,
    /// The oldest message leaves first.
    Fifo,
}

/// A fixed-capacity, multi-producer, multi-consumer message buffer.
///
/// ### Concurrency Design:
/// - **One lock**: `slots` lives behind a single mutex; every read or write of the
///   stored messages and their count happens while holding it.
/// - **Two signals**: producers park on `not_full` while the buffer holds
///   `capacity` messages, consumers park on `not_empty` while it holds none.
///   Each wait rechecks its predicate after waking, so spurious wakeups and
///   competing waiters are harmless.
/// - **Ownership**: a message moves into the buffer on a successful insert and
///   out of it on removal. Messages still stored when the buffer is dropped are
///   destroyed by the buffer.
pub struct BoundedBuffer<M> {
    /// Stored messages; `slots.len()` never exceeds `capacity`.
    pub(crate) slots: Mutex<VecDeque<M>>,

    /// Signalled after a removal frees a slot.
    pub(crate) not_full: Signal,

    /// Signalled after an insertion stores a message.
    pub(crate) not_empty: Signal,

    /// Maximum number of stored messages. Fixed at construction.
    pub(crate) capacity: usize,

    pub(crate) order: RemovalOrder,

    /// Label included in every log line this buffer emits.
    pub(crate) name: String,
}
