//! # UI Module
//!
//! Presentation layer for the MRR tracker. All state lives on
//! `MrrTrackerApp`; components are `impl MrrTrackerApp` blocks that render
//! from a freshly computed `DashboardView` and record user actions.

pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod state;

pub use app_state::MrrTrackerApp;
