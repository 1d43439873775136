//! Remote service implementations.
//!
//! - `mock`: fixed-delay backend that always succeeds
//! - `http`: JSON-over-HTTP backend
//! - `ids`: identifier generators

mod http;
mod ids;
mod mock;

use std::sync::Arc;

use stagelink_core::error::Result;
use stagelink_core::remote::RemoteService;

use crate::config::{RemoteConfig, RemoteMode};

pub use http::HttpRemoteService;
pub use ids::{UserIdGenerator, new_booking_id};
pub use mock::MockRemoteService;

/// Builds the backend selected by `config.mode`.
pub fn build_remote_service(config: &RemoteConfig) -> Result<Arc<dyn RemoteService>> {
    match config.mode {
        RemoteMode::Mock => Ok(Arc::new(MockRemoteService::from_config(config))),
        RemoteMode::Http => Ok(Arc::new(HttpRemoteService::from_config(config)?)),
    }
}
