//! Infrastructure layer for StageLink.
//!
//! File and in-memory implementations of `KeyValueStore`, configuration
//! loading, path management, and the remote service backends.

pub mod config;
pub mod file_store;
pub mod memory_store;
pub mod paths;
pub mod remote;
pub mod storage;

pub use crate::config::{AppConfig, ConfigService};
pub use crate::file_store::FileKeyValueStore;
pub use crate::memory_store::InMemoryKeyValueStore;
pub use crate::paths::StagelinkPaths;
pub use crate::remote::{HttpRemoteService, MockRemoteService, build_remote_service};
