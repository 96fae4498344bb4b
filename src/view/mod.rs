//! View Layer
//!
//! [`CatalogView`] is what gets drawn for a catalog: one card per activity and
//! the options of the activity selector. It is rebuilt from scratch on every
//! load, so drawing it twice never duplicates anything.
//!
//! [`View`] is the rendering surface a [`crate::RosterClient`] drives.

#[cfg(feature = "native")]
pub mod terminal;

#[cfg(feature = "native")]
pub use terminal::{OutputFormat, TerminalView};

use serde::Serialize;

use crate::catalog::{Activity, ActivityCatalog};
use crate::notice::Notice;

/// Label of the empty leading option of the activity selector
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Single roster entry shown for an activity nobody has joined
pub const EMPTY_ROSTER_TEXT: &str = "No participants yet";

/// Everything drawn for one catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub cards: Vec<ActivityCard>,
    pub options: Vec<SelectOption>,
}

impl CatalogView {
    pub fn build(catalog: &ActivityCatalog) -> Self {
        let mut options = Vec::with_capacity(catalog.len() + 1);
        options.push(SelectOption {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
        });
        options.extend(catalog.iter().map(|a| SelectOption {
            value: a.name.clone(),
            label: a.name.clone(),
        }));

        Self {
            cards: catalog.iter().map(ActivityCard::from_activity).collect(),
            options,
        }
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards.iter().find(|c| c.name == name)
    }
}

/// One activity as drawn in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub roster: Roster,
}

impl ActivityCard {
    pub fn from_activity(activity: &Activity) -> Self {
        let roster = if activity.participants.is_empty() {
            Roster::Empty
        } else {
            Roster::Participants(
                activity
                    .participants
                    .iter()
                    .map(|email| RosterEntry {
                        email: email.clone(),
                        unregister: UnregisterControl {
                            activity: activity.name.clone(),
                            email: email.clone(),
                        },
                    })
                    .collect(),
            )
        };

        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            roster,
        }
    }

    /// e.g. "9 spots left"
    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// The bulleted participant list of a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "entries", rename_all = "snake_case")]
pub enum Roster {
    /// Drawn as a single [`EMPTY_ROSTER_TEXT`] entry without controls
    Empty,
    Participants(Vec<RosterEntry>),
}

impl Roster {
    /// Number of rows drawn, placeholder included
    pub fn row_count(&self) -> usize {
        match self {
            Roster::Empty => 1,
            Roster::Participants(entries) => entries.len(),
        }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        match self {
            Roster::Empty => &[],
            Roster::Participants(entries) => entries,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub email: String,
    pub unregister: UnregisterControl,
}

/// The remove button next to a participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnregisterControl {
    pub activity: String,
    pub email: String,
}

impl UnregisterControl {
    /// Accessible label / tooltip of the button
    pub fn label(&self) -> String {
        format!("Unregister {}", self.email)
    }

    /// Question asked before anything is sent
    pub fn confirm_prompt(&self) -> String {
        confirm_prompt(&self.activity, &self.email)
    }
}

pub fn confirm_prompt(activity: &str, email: &str) -> String {
    format!("Unregister {} from {}?", email, activity)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Rendering surface driven by [`crate::RosterClient`]
pub trait View: Send + Sync {
    /// Replace the activity list and selector with `view`
    fn render_catalog(&self, view: &CatalogView);

    /// Replace the activity list with a static failure message
    fn render_load_failure(&self, message: &str);

    /// Show `notice`, overwriting any visible one
    fn show_notice(&self, notice: &Notice);

    fn hide_notice(&self);

    /// Clear the signup form fields
    fn reset_form(&self);

    /// Ask the user a yes/no question; blocks until answered
    fn confirm(&self, prompt: &str) -> bool;
}
