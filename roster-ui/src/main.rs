//! Roster Signup Page
//!
//! Activity listing and signup page built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with remaining capacity and participant rosters
//! - Signup form bound to the activity selector
//! - One-click unregister with confirmation
//! - Auto-hiding success/error notices
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the roster service over three HTTP endpoints and
//! reloads the whole catalog after every accepted change.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
