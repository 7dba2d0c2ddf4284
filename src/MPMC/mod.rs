mod builder;
mod consumer;
mod debug;
mod error;
mod producer;

pub use builder::BufferBuilder;
pub use consumer::Consumer;
pub use error::{BufferError, TryInsertError, TryRemoveError};
pub use producer::Producer;

pub mod Buffer {
    #[allow(clippy::module_inception)]
    pub mod Buffer;
    pub mod Buffer_impl;
    pub use Buffer::{BoundedBuffer, RemovalOrder, DEFAULT_NAME}; // re-export for stable path
}

pub mod Structs {
    pub mod Message_Structs;
    pub use Message_Structs::{Message, TextMessage}; // re-export for stable path
}
