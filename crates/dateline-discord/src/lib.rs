pub mod ack;
pub mod adapter;
pub mod attach;
pub mod handler;
pub mod send;

pub use adapter::DiscordAdapter;
