//! State Management
//!
//! Page state shared by the activity list, signup form and notice area.

pub mod global;

pub use global::{notice_class, provide_roster_state, RosterState};
