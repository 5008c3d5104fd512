//! Screen state containers.
//!
//! Plain structs with explicit fields, owned by a single screen controller.
//! Transitions are methods so the invariants live next to the data.

pub mod catalog;
pub mod toast;
