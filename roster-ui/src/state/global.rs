//! Global Application State
//!
//! Reactive state management using Leptos signals.

use gloo_timers::callback::Timeout;
use leptos::*;
use std::time::Duration;
use wasm_bindgen::JsValue;

use roster::{
    validate_signup, CatalogView, LoadSequencer, Mutation, MutationEffects, Notice, NoticeBoard,
    NoticeDelays, UnregisterControl,
};

use crate::api;

/// Page state provided to all components
#[derive(Clone, Copy)]
pub struct RosterState {
    /// What the activity list and selector currently show
    pub catalog: RwSignal<CatalogView>,
    /// The first load has finished (either way)
    pub loaded: RwSignal<bool>,
    /// The latest applied load failed
    pub load_failed: RwSignal<bool>,
    /// Notice on screen, if any
    pub notice: RwSignal<Option<Notice>>,
    /// Signup form: selected activity name ("" for the placeholder)
    pub selected_activity: RwSignal<String>,
    /// Signup form: email field
    pub email: RwSignal<String>,
    delays: NoticeDelays,
    board: StoredValue<NoticeBoard>,
    loads: StoredValue<LoadSequencer>,
}

/// Provide page state to the component tree
pub fn provide_roster_state() {
    provide_context(RosterState::new());
}

/// CSS class of the notice area
pub fn notice_class(notice: Option<&Notice>) -> &'static str {
    notice.map(|n| n.severity.css_class()).unwrap_or("hidden")
}

fn log_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

impl RosterState {
    pub fn new() -> Self {
        Self {
            catalog: create_rw_signal(CatalogView::default()),
            loaded: create_rw_signal(false),
            load_failed: create_rw_signal(false),
            notice: create_rw_signal(None),
            selected_activity: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            delays: NoticeDelays::default(),
            board: store_value(NoticeBoard::new()),
            loads: store_value(LoadSequencer::new()),
        }
    }

    /// Fetch the catalog and replace the list and selector.
    ///
    /// A response is dropped if a later-issued load has already rendered.
    pub async fn load_activities(self) {
        let Some(seq) = self.loads.try_update_value(|loads| loads.issue()) else {
            return;
        };

        let result = api::fetch_activities().await;

        let fresh = self
            .loads
            .try_update_value(|loads| loads.try_apply(seq))
            .unwrap_or(false);
        if !fresh {
            return;
        }

        match result {
            Ok(catalog) => {
                self.catalog.set(CatalogView::build(&catalog));
                self.load_failed.set(false);
            }
            Err(e) => {
                log_error(&format!("Error fetching activities: {}", e));
                self.load_failed.set(true);
            }
        }
        self.loaded.set(true);
    }

    /// Submit the signup form
    pub async fn signup(self) {
        let activity = self.selected_activity.get_untracked();
        let email = self.email.get_untracked();

        if let Err(err) = validate_signup(&activity, &email) {
            self.apply(MutationEffects::invalid_signup(&err, &self.delays));
            return;
        }

        self.submit(Mutation::Signup, activity, email).await;
    }

    /// Ask `confirm` first; send the unregister only if it says yes.
    ///
    /// Returns whether the request was sent.
    pub async fn unregister(
        self,
        control: UnregisterControl,
        confirm: impl FnOnce(&str) -> bool,
    ) -> bool {
        if !confirm(&control.confirm_prompt()) {
            return false;
        }

        self.submit(Mutation::Unregister, control.activity, control.email).await;
        true
    }

    /// Send a mutation, show its notice, and reload on success
    pub async fn submit(self, mutation: Mutation, activity: String, email: String) {
        let result = api::submit_mutation(mutation, &activity, &email).await;

        if let Err(e) = &result {
            if e.is_transport() {
                log_error(&format!("Error during {}: {}", mutation.segment(), e));
            }
        }

        if self.apply(MutationEffects::for_outcome(mutation, &result, &self.delays)) {
            self.load_activities().await;
        }
    }

    /// Show the notice and clear the form as `effects` says.
    ///
    /// Returns whether the catalog should be reloaded.
    pub fn apply(self, effects: MutationEffects) -> bool {
        self.show_notice(effects.notice, effects.hide_after);
        if effects.reset_form {
            self.reset_form();
        }
        effects.reload
    }

    /// Show a notice, replacing the current one, and hide it after `hide_after`
    pub fn show_notice(self, notice: Notice, hide_after: Duration) {
        let Some(ticket) = self
            .board
            .try_update_value(|board| board.post(notice.clone(), hide_after))
        else {
            return;
        };
        self.notice.set(Some(notice));

        let millis = u32::try_from(ticket.hide_after.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            let expired = self
                .board
                .try_update_value(|board| board.expire(ticket))
                .unwrap_or(false);
            if expired {
                self.notice.set(None);
            }
        })
        .forget();
    }

    /// Clear the signup form
    pub fn reset_form(self) {
        self.selected_activity.set(String::new());
        self.email.set(String::new());
    }
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::notice::MISSING_INPUT_MESSAGE;
    use roster::{ClientError, Severity};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn filled_state() -> RosterState {
        let state = RosterState::new();
        state.selected_activity.set("Chess Club".to_string());
        state.email.set("a@x.com".to_string());
        state
    }

    #[test]
    fn test_notice_class() {
        assert_eq!(notice_class(None), "hidden");
        assert_eq!(notice_class(Some(&Notice::success("Signed up"))), "success");
        assert_eq!(notice_class(Some(&Notice::error("Activity is full"))), "error");
    }

    #[wasm_bindgen_test]
    fn test_accepted_signup_resets_form_and_asks_for_reload() {
        let runtime = create_runtime();
        let state = filled_state();

        let reload = state.apply(MutationEffects::for_outcome(
            Mutation::Signup,
            &Ok("Signed up a@x.com for Chess Club".into()),
            &NoticeDelays::default(),
        ));

        assert!(reload);
        assert_eq!(state.selected_activity.get_untracked(), "");
        assert_eq!(state.email.get_untracked(), "");
        assert_eq!(
            state.notice.get_untracked(),
            Some(Notice::success("Signed up a@x.com for Chess Club"))
        );
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_rejected_signup_keeps_form() {
        let runtime = create_runtime();
        let state = filled_state();

        let reload = state.apply(MutationEffects::for_outcome(
            Mutation::Signup,
            &Err(ClientError::Rejected {
                status: 400,
                detail: Some("Activity is full".into()),
            }),
            &NoticeDelays::default(),
        ));

        assert!(!reload);
        assert_eq!(state.email.get_untracked(), "a@x.com");
        assert_eq!(
            state.notice.get_untracked().map(|n| n.severity),
            Some(Severity::Error)
        );
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn test_blank_signup_shows_error_without_request() {
        let runtime = create_runtime();
        let state = filled_state();
        state.selected_activity.set("  ".to_string());

        state.signup().await;

        assert_eq!(
            state.notice.get_untracked(),
            Some(Notice::error(MISSING_INPUT_MESSAGE))
        );
        assert!(!state.loaded.get_untracked());
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn test_declined_unregister_sends_nothing() {
        let runtime = create_runtime();
        let state = RosterState::new();
        let control = UnregisterControl {
            activity: "Chess Club".to_string(),
            email: "a@x.com".to_string(),
        };

        let mut asked = None;
        let sent = state
            .unregister(control, |prompt| {
                asked = Some(prompt.to_string());
                false
            })
            .await;

        assert!(!sent);
        assert_eq!(asked.as_deref(), Some("Unregister a@x.com from Chess Club?"));
        assert!(state.notice.get_untracked().is_none());
        runtime.dispose();
    }
}
