pub mod chat;
pub mod client;
pub mod config;
pub mod embeddings;
pub mod error;
