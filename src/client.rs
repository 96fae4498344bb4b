//! Roster Client
//!
//! The view-controller: loads the catalog into a [`View`], turns user actions
//! into backend calls, and re-fetches the whole catalog after every
//! successful mutation.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::Instrument;

use crate::backend::Backend;
use crate::endpoints::Mutation;
use crate::flow::{validate_signup, MutationEffects, NoticeDelays};
use crate::notice::{Notice, NoticeBoard, LOAD_FAILURE_MESSAGE};
use crate::sequence::LoadSequencer;
use crate::view::{confirm_prompt, CatalogView, View};

/// What a catalog load ended up doing to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The catalog was drawn with this many activities
    Rendered(usize),
    /// The failure message was drawn
    Failed,
    /// A newer load had already drawn; this response was dropped
    Superseded,
}

/// What a signup or unregister ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The backend accepted; the catalog was reloaded
    Accepted { message: String, reload: LoadOutcome },
    /// The backend refused with the given notice text
    Rejected(String),
    /// The request failed in transit
    Failed,
    /// The user declined the confirmation; nothing was sent
    Cancelled,
    /// Input was missing; nothing was sent
    Invalid,
}

impl MutationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MutationOutcome::Accepted { .. })
    }
}

/// Synchronizes a [`View`] with backend-held roster state
pub struct RosterClient<B, V> {
    inner: Arc<Inner<B, V>>,
}

struct Inner<B, V> {
    backend: B,
    view: V,
    delays: NoticeDelays,
    notices: Mutex<NoticeBoard>,
    loads: Mutex<LoadSequencer>,
}

impl<B, V> Clone for RosterClient<B, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B, V> RosterClient<B, V>
where
    B: Backend + 'static,
    V: View + 'static,
{
    pub fn new(backend: B, view: V) -> Self {
        Self::with_delays(backend, view, NoticeDelays::default())
    }

    pub fn with_delays(backend: B, view: V, delays: NoticeDelays) -> Self {
        Self {
            inner: Arc::new(Inner {
                backend,
                view,
                delays,
                notices: Mutex::new(NoticeBoard::new()),
                loads: Mutex::new(LoadSequencer::new()),
            }),
        }
    }

    pub fn backend(&self) -> &B {
        &self.inner.backend
    }

    pub fn view(&self) -> &V {
        &self.inner.view
    }

    /// The notice currently on screen, if any
    pub fn current_notice(&self) -> Option<Notice> {
        self.inner
            .notices
            .lock()
            .ok()
            .and_then(|board| board.current().cloned())
    }

    /// Fetch the catalog and redraw the list and selector from scratch
    pub async fn load_activities(&self) -> LoadOutcome {
        let seq = match self.inner.loads.lock() {
            Ok(mut loads) => loads.issue(),
            Err(_) => return LoadOutcome::Superseded,
        };

        let result = self.inner.backend.list_activities().await;

        // Hold the sequencer while drawing so two responses never interleave
        let Ok(mut loads) = self.inner.loads.lock() else {
            return LoadOutcome::Superseded;
        };
        if !loads.try_apply(seq) {
            tracing::debug!(seq, latest = loads.latest_issued(), "Dropping stale catalog response");
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(catalog) => {
                let view = CatalogView::build(&catalog);
                self.inner.view.render_catalog(&view);
                tracing::debug!(seq, activities = catalog.len(), "Catalog rendered");
                LoadOutcome::Rendered(catalog.len())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching activities");
                self.inner.view.render_load_failure(LOAD_FAILURE_MESSAGE);
                LoadOutcome::Failed
            }
        }
    }

    /// Sign `email` up for `activity`
    pub async fn signup(&self, activity: &str, email: &str) -> MutationOutcome {
        if let Err(err) = validate_signup(activity, email) {
            let effects = MutationEffects::invalid_signup(&err, &self.inner.delays);
            self.post_notice(effects.notice, effects.hide_after);
            return MutationOutcome::Invalid;
        }

        self.mutate(Mutation::Signup, activity, email).await
    }

    /// Remove `email` from `activity` after the user confirms
    pub async fn unregister(&self, activity: &str, email: &str) -> MutationOutcome {
        if !self.inner.view.confirm(&confirm_prompt(activity, email)) {
            tracing::debug!(activity, "Unregister cancelled");
            return MutationOutcome::Cancelled;
        }

        self.mutate(Mutation::Unregister, activity, email).await
    }

    async fn mutate(&self, mutation: Mutation, activity: &str, email: &str) -> MutationOutcome {
        let request_id = uuid::Uuid::new_v4().to_string();
        let span = tracing::info_span!(
            "mutation",
            request_id = %request_id,
            op = mutation.segment(),
            activity,
        );

        async move {
            let result = self.inner.backend.mutate(mutation, activity, email).await;
            let effects = MutationEffects::for_outcome(mutation, &result, &self.inner.delays);
            let text = effects.notice.text.clone();
            self.post_notice(effects.notice, effects.hide_after);

            if effects.reset_form {
                self.inner.view.reset_form();
            }

            match result {
                Ok(message) => {
                    tracing::info!("Mutation accepted");
                    let reload = self.load_activities().await;
                    MutationOutcome::Accepted { message, reload }
                }
                Err(e) if e.is_transport() => {
                    tracing::error!(error = %e, "Error during {}", mutation.segment());
                    MutationOutcome::Failed
                }
                Err(_) => MutationOutcome::Rejected(text),
            }
        }
        .instrument(span)
        .await
    }

    /// Show `notice` now and schedule it to hide after `hide_after`.
    ///
    /// The view is only touched while the board is locked, so what is drawn
    /// always matches the board.
    fn post_notice(&self, notice: Notice, hide_after: Duration) {
        let ticket = {
            let Ok(mut board) = self.inner.notices.lock() else {
                return;
            };
            let ticket = board.post(notice.clone(), hide_after);
            self.inner.view.show_notice(&notice);
            ticket
        };

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(ticket.hide_after).await;
            let Ok(mut board) = inner.notices.lock() else {
                return;
            };
            if board.expire(ticket) {
                inner.view.hide_notice();
            }
        });
    }
}
