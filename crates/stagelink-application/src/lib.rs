//! Application layer for StageLink.
//!
//! Use cases coordinating the domain and infrastructure layers: the theme
//! controller, authentication, and the booking workflow, assembled by
//! [`AppBootstrap`].

pub mod auth_service;
pub mod booking_workflow;
pub mod bootstrap;
pub mod theme_controller;

pub use auth_service::AuthService;
pub use booking_workflow::{BookingReceipt, BookingWorkflow, DraftContext};
pub use bootstrap::{App, AppBootstrap};
pub use theme_controller::ThemeController;
