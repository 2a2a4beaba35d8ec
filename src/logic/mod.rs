//! Core non-UI logic: the pure view projection and the action handlers.

pub mod actions;
pub mod projection;

pub use projection::{Projection, project, refresh_projection};
