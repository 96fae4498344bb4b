//! App Root Component
//!
//! Page layout and the initial catalog load.

use leptos::*;

use crate::components::{ActivityList, NoticeArea, SignupForm};
use crate::state::{provide_roster_state, RosterState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_roster_state();

    let state = use_context::<RosterState>().expect("RosterState not found");

    // Initial load on mount
    create_effect(move |_| {
        spawn_local(state.load_activities());
    });

    view! {
        <header>
            <h1>"Activity Roster"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <NoticeArea />
            </section>
        </main>
    }
}
