//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`session`,
//! `explore`, `bookings`) so chrome controls can evolve independently of
//! wire data.

/// UI state shared through context.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
