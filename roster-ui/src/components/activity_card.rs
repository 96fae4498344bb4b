//! Activity Card Component
//!
//! One activity with its availability and participant roster.

use leptos::*;

use roster::view::{ActivityCard as Card, Roster, RosterEntry, EMPTY_ROSTER_TEXT};

use crate::state::RosterState;

/// Activity card component
#[component]
pub fn ActivityCard(card: Card) -> impl IntoView {
    let availability = card.availability_text();

    let roster = match card.roster {
        Roster::Empty => view! { <li class="muted">{EMPTY_ROSTER_TEXT}</li> }.into_view(),
        Roster::Participants(entries) => entries
            .into_iter()
            .map(|entry| view! { <ParticipantItem entry=entry /> })
            .collect_view(),
    };

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p><strong>"Schedule:"</strong>" "{card.schedule}</p>
            <p><strong>"Availability:"</strong>" "{availability}</p>

            <div class="participants-section">
                <strong>"Participants:"</strong>
                <ul class="participants-list">{roster}</ul>
            </div>
        </div>
    }
}

/// Roster row with its unregister button
#[component]
fn ParticipantItem(entry: RosterEntry) -> impl IntoView {
    let state = use_context::<RosterState>().expect("RosterState not found");

    let label = entry.unregister.label();
    let control = entry.unregister;

    let on_click = move |_| {
        let control = control.clone();
        spawn_local(async move {
            // Declining sends nothing and shows nothing
            state
                .unregister(control, |prompt| {
                    window().confirm_with_message(prompt).unwrap_or(false)
                })
                .await;
        });
    };

    view! {
        <li class="participant-item">
            <span class="participant-email">{entry.email}</span>
            <button
                type="button"
                class="delete-participant"
                title=label.clone()
                aria-label=label
                on:click=on_click
            >
                "✖"
            </button>
        </li>
    }
}
