pub mod chunk;
pub mod classify;
pub mod client;
pub mod reply;
pub mod request;

pub use classify::{decide, DispatchDecision, RequestKind};
pub use client::FormatClient;
pub use request::FormatRequest;
