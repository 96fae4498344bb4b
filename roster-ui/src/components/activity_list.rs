//! Activity List Component

use leptos::*;

use roster::notice::LOAD_FAILURE_MESSAGE;

use crate::components::ActivityCard;
use crate::state::RosterState;

/// All activity cards, rebuilt whenever the catalog is replaced
#[component]
pub fn ActivityList() -> impl IntoView {
    let state = use_context::<RosterState>().expect("RosterState not found");

    view! {
        <div id="activities-list">
            {move || {
                if !state.loaded.get() {
                    view! { <p>"Loading activities..."</p> }.into_view()
                } else if state.load_failed.get() {
                    view! { <p>{LOAD_FAILURE_MESSAGE}</p> }.into_view()
                } else {
                    state.catalog.get()
                        .cards
                        .into_iter()
                        .map(|card| view! { <ActivityCard card=card /> })
                        .collect_view()
                }
            }}
        </div>
    }
}
