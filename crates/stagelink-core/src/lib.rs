//! Domain layer for StageLink.
//!
//! Models, the shared error type, and the traits (`KeyValueStore`,
//! `RemoteService`) that infrastructure implements.

pub mod booking;
pub mod catalog;
pub mod error;
pub mod remote;
pub mod route;
pub mod session;
pub mod store;
pub mod theme;
pub mod validation;

// Re-export common error type
pub use error::StagelinkError;
