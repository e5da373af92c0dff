//! Shared reactive state provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the single source of truth for the authenticated identity;
//! the other modules hold per-screen data and the pure logic that shapes it.

pub mod bookings;
pub mod explore;
pub mod session;
pub mod ui;
