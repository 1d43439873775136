//! Theme domain module.
//!
//! # Module Structure
//!
//! - `model`: the two-valued theme preference and its startup resolution

mod model;

pub use model::{ThemePreference, ThemeSource};
