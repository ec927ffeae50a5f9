//! Headless controllers for the Galleria admin console
//!
//! Every admin list screen is the same machine: filter state, one fetched
//! page, a request status, and mutations that refetch. This crate owns that
//! machine plus the dashboard controller; rendering stays with the caller.

pub mod controller;
pub mod dashboard;
pub mod screens;
pub mod status;

pub use controller::{CollectionOps, FetchTicket, ListController};
pub use dashboard::{DashboardController, MetricsSource};
pub use screens::*;
pub use status::{RequestStatus, ViewState};
