//! Roster API access from the browser

pub mod client;

pub use client::{fetch_activities, submit_mutation};
