//! Terminal rendering for the dualtime watchface.
//!
//! All rendering uses [`ratatui`]: this crate owns the visual presentation
//! while [`dualtime_core`] owns the state.

pub mod bigtext;
pub mod face;
pub mod layout;
