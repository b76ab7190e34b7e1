//! Infrastructure layer - Configuration and log persistence

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{FileSystemRepository, LogStore, MemoryLogStore};
