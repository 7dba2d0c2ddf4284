// Module naming follows project convention (MPMC = Multi-Producer Multi-Consumer)
#[allow(non_snake_case)]
pub mod MPMC;
#[allow(non_snake_case)]
pub mod Core;
#[allow(non_snake_case)]
pub mod Debug;

pub use MPMC::Buffer::{BoundedBuffer, RemovalOrder};
pub use MPMC::Structs::{Message, TextMessage};
pub use MPMC::{BufferBuilder, BufferError, Consumer, Producer, TryInsertError, TryRemoveError};
