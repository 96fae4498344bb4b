//! Mutation Flow
//!
//! The decisions shared by every front end: when a signup may be sent, and
//! what happens on screen once a signup or unregister comes back.

use std::time::Duration;

use crate::endpoints::Mutation;
use crate::error::{ClientError, ClientResult};
use crate::notice::{Notice, SIGNUP_NOTICE_DELAY, UNREGISTER_NOTICE_DELAY};

/// How long notices stay visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeDelays {
    pub signup: Duration,
    pub unregister: Duration,
}

impl Default for NoticeDelays {
    fn default() -> Self {
        Self {
            signup: SIGNUP_NOTICE_DELAY,
            unregister: UNREGISTER_NOTICE_DELAY,
        }
    }
}

impl NoticeDelays {
    pub fn for_mutation(&self, mutation: Mutation) -> Duration {
        match mutation {
            Mutation::Signup => self.signup,
            Mutation::Unregister => self.unregister,
        }
    }
}

/// Check signup input before anything is sent.
///
/// Both fields must contain something other than whitespace.
pub fn validate_signup(activity: &str, email: &str) -> ClientResult<()> {
    if activity.trim().is_empty() || email.trim().is_empty() {
        return Err(ClientError::InvalidInput(
            "activity and email are required".to_string(),
        ));
    }
    Ok(())
}

/// What the page does after a mutation returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationEffects {
    pub notice: Notice,
    pub hide_after: Duration,
    /// Clear the signup form
    pub reset_form: bool,
    /// Re-fetch the whole catalog
    pub reload: bool,
}

impl MutationEffects {
    pub fn for_outcome(
        mutation: Mutation,
        outcome: &ClientResult<String>,
        delays: &NoticeDelays,
    ) -> Self {
        let accepted = outcome.is_ok();
        Self {
            notice: Notice::for_outcome(mutation, outcome),
            hide_after: delays.for_mutation(mutation),
            reset_form: accepted && mutation == Mutation::Signup,
            reload: accepted,
        }
    }

    /// Effects of a signup refused before sending
    pub fn invalid_signup(error: &ClientError, delays: &NoticeDelays) -> Self {
        Self {
            notice: Notice::for_outcome(Mutation::Signup, &Err(error.clone())),
            hide_after: delays.signup,
            reset_form: false,
            reload: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::{Severity, MISSING_INPUT_MESSAGE};

    #[test]
    fn test_validate_signup_trims_both_fields() {
        assert!(validate_signup("Chess Club", "a@x.com").is_ok());
        assert!(validate_signup("", "a@x.com").is_err());
        assert!(validate_signup("   ", "a@x.com").is_err());
        assert!(validate_signup("Chess Club", "").is_err());
        assert!(validate_signup("Chess Club", " \t").is_err());
    }

    #[test]
    fn test_accepted_signup_resets_and_reloads() {
        let effects = MutationEffects::for_outcome(
            Mutation::Signup,
            &Ok("Signed up a@x.com for Chess Club".into()),
            &NoticeDelays::default(),
        );
        assert_eq!(effects.notice, Notice::success("Signed up a@x.com for Chess Club"));
        assert_eq!(effects.hide_after, Duration::from_secs(5));
        assert!(effects.reset_form);
        assert!(effects.reload);
    }

    #[test]
    fn test_accepted_unregister_reloads_without_reset() {
        let effects = MutationEffects::for_outcome(
            Mutation::Unregister,
            &Ok("Unregistered a@x.com from Chess Club".into()),
            &NoticeDelays::default(),
        );
        assert_eq!(effects.hide_after, Duration::from_secs(4));
        assert!(!effects.reset_form);
        assert!(effects.reload);
    }

    #[test]
    fn test_failures_keep_form_and_skip_reload() {
        let delays = NoticeDelays::default();
        let rejected = MutationEffects::for_outcome(
            Mutation::Signup,
            &Err(ClientError::Rejected {
                status: 400,
                detail: Some("Activity is full".into()),
            }),
            &delays,
        );
        assert_eq!(rejected.notice, Notice::error("Activity is full"));
        assert!(!rejected.reset_form);
        assert!(!rejected.reload);

        let down = MutationEffects::for_outcome(
            Mutation::Unregister,
            &Err(ClientError::Network("refused".into())),
            &delays,
        );
        assert_eq!(down.notice.severity, Severity::Error);
        assert!(!down.reload);
    }

    #[test]
    fn test_invalid_signup_notice() {
        let delays = NoticeDelays {
            signup: Duration::from_millis(250),
            unregister: Duration::from_secs(1),
        };
        let err = validate_signup("", "a@x.com").unwrap_err();
        let effects = MutationEffects::invalid_signup(&err, &delays);
        assert_eq!(effects.notice, Notice::error(MISSING_INPUT_MESSAGE));
        assert_eq!(effects.hide_after, Duration::from_millis(250));
        assert!(!effects.reload);
    }
}
