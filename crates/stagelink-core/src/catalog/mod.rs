//! Creative catalog domain module.
//!
//! # Module Structure
//!
//! - `model`: creatives, their bookable services, and the normalized id
//! - `catalog`: the immutable catalog value with lookup and genre filtering

mod catalog;
mod model;

pub use catalog::CreativeCatalog;
pub use model::{Creative, CreativeId, ServiceOffering};
