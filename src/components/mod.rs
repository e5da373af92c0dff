//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render marketplace chrome and per-role dashboard surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod admin_dashboard;
pub mod auth_gate;
pub mod full_page_loader;
pub mod google_signin;
pub mod guide_dashboard;
pub mod navbar;
pub mod status_badge;
pub mod tour_card;
pub mod tourist_dashboard;
