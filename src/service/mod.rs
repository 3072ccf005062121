//! Implementations of [`WordService`](crate::protocol::WordService).

pub mod http;
pub mod in_memory;

pub use http::HttpService;
pub use in_memory::InMemoryService;
