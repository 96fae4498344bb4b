//! Signup Form Component

use leptos::*;

use crate::state::RosterState;

/// Email field, activity selector and submit button
#[component]
pub fn SignupForm() -> impl IntoView {
    let state = use_context::<RosterState>().expect("RosterState not found");

    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        set_submitting.set(true);
        spawn_local(async move {
            state.signup().await;
            set_submitting.set(false);
        });
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@example.edu"
                    prop:value=move || state.email.get()
                    on:input=move |ev| state.email.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    on:change=move |ev| state.selected_activity.set(event_target_value(&ev))
                    prop:value=move || state.selected_activity.get()
                >
                    {move || {
                        state.catalog.get()
                            .options
                            .into_iter()
                            .map(|option| view! {
                                <option value=option.value>{option.label}</option>
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <button type="submit" disabled=move || submitting.get()>
                "Sign Up"
            </button>
        </form>
    }
}
