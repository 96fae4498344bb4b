//! # Roster
//!
//! Client for an activity signup service: loads the activity catalog,
//! renders each activity with its participant roster, and sends signup and
//! unregister requests, re-fetching the whole catalog after every accepted
//! change.
//!
//! ## Modules
//!
//! - [`catalog`]: Activity and catalog value types
//! - [`endpoints`]: URLs and bodies of the three backend calls
//! - [`flow`]: Signup validation and what follows a mutation
//! - [`notice`]: Success/error notices and their expiry
//! - [`sequence`]: Ordering of overlapping catalog loads
//! - [`view`]: What gets drawn, and the surface it is drawn on
//! - [`backend`]: HTTP transport (`native`)
//! - [`client`]: The view-controller tying it together (`native`)
//!
//! Without the default `native` feature only the platform-neutral modules are
//! built; the browser app in `roster-ui` uses them that way.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roster::{BackendConfig, HttpBackend, OutputFormat, RosterClient, TerminalView};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = HttpBackend::new(&BackendConfig::default())?;
//!     let view = TerminalView::stdio(OutputFormat::Table, false);
//!     let client = RosterClient::new(backend, view);
//!
//!     client.load_activities().await;
//!     client.signup("Chess Club", "michael@mergington.edu").await;
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod endpoints;
pub mod error;
pub mod flow;
pub mod notice;
pub mod sequence;
pub mod view;

#[cfg(feature = "native")]
pub mod backend;
#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod telemetry;

pub use catalog::{Activity, ActivityCatalog};
pub use endpoints::Mutation;
pub use error::{ClientError, ClientResult};
pub use flow::{validate_signup, MutationEffects, NoticeDelays};
pub use notice::{Notice, NoticeBoard, NoticeTicket, Severity};
pub use sequence::LoadSequencer;
pub use view::{ActivityCard, CatalogView, Roster, RosterEntry, SelectOption, UnregisterControl, View};

#[cfg(feature = "native")]
pub use backend::{Backend, BackendConfig, HttpBackend};
#[cfg(feature = "native")]
pub use client::{LoadOutcome, MutationOutcome, RosterClient};
#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
#[cfg(feature = "native")]
pub use view::{OutputFormat, TerminalView};
