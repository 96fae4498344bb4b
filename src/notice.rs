//! Notices
//!
//! Transient success/error messages shown after a mutation. The board is a
//! small state machine, `hidden -> visible -> hidden`, driven by whoever owns
//! the timer: posting returns a ticket, and expiring a ticket only hides the
//! notice if nothing newer has been posted since.

use serde::Serialize;
use std::time::Duration;

use crate::endpoints::Mutation;
use crate::error::ClientError;

/// Shown in place of the activity list when loading fails
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load activities. Please try again later.";

/// Shown when signup is attempted without an activity or email
pub const MISSING_INPUT_MESSAGE: &str = "Please select an activity and enter an email.";

/// Default display time of a signup notice
pub const SIGNUP_NOTICE_DELAY: Duration = Duration::from_secs(5);

/// Default display time of an unregister notice
pub const UNREGISTER_NOTICE_DELAY: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// CSS class applied to the notice area
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// A message with its styling
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub text: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }

    /// Notice for the outcome of a mutation.
    ///
    /// Rejections show the server's detail (or a per-operation fallback);
    /// transport failures always show the generic retry message.
    pub fn for_outcome(mutation: Mutation, outcome: &Result<String, ClientError>) -> Self {
        match outcome {
            Ok(message) => Notice::success(message.clone()),
            Err(ClientError::InvalidInput(_)) => Notice::error(MISSING_INPUT_MESSAGE),
            Err(e) if e.is_transport() => Notice::error(transport_failure_message(mutation)),
            Err(e) => Notice::error(
                e.detail()
                    .map(str::to_string)
                    .unwrap_or_else(|| rejection_fallback(mutation).to_string()),
            ),
        }
    }
}

/// Generic text when a rejection carries no detail
pub fn rejection_fallback(mutation: Mutation) -> &'static str {
    match mutation {
        Mutation::Signup => "An error occurred",
        Mutation::Unregister => "Failed to unregister",
    }
}

/// Generic text when the request never produced a usable answer
pub fn transport_failure_message(mutation: Mutation) -> &'static str {
    match mutation {
        Mutation::Signup => "Failed to sign up. Please try again.",
        Mutation::Unregister => "Failed to unregister. Please try again.",
    }
}

/// Handle for a posted notice, redeemed when its timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket {
    generation: u64,
    pub hide_after: Duration,
}

/// Holds the currently displayed notice
#[derive(Debug, Default)]
pub struct NoticeBoard {
    generation: u64,
    current: Option<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display `notice`, replacing whatever is shown, and start a new timer
    pub fn post(&mut self, notice: Notice, hide_after: Duration) -> NoticeTicket {
        self.generation += 1;
        self.current = Some(notice);
        NoticeTicket {
            generation: self.generation,
            hide_after,
        }
    }

    /// Timer callback. Returns true if this hid the notice.
    pub fn expire(&mut self, ticket: NoticeTicket) -> bool {
        if ticket.generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_then_expire_hides() {
        let mut board = NoticeBoard::new();
        assert!(board.current().is_none());

        let ticket = board.post(Notice::success("Signed up"), SIGNUP_NOTICE_DELAY);
        assert_eq!(board.current().unwrap().text, "Signed up");
        assert_eq!(ticket.hide_after, Duration::from_secs(5));

        assert!(board.expire(ticket));
        assert!(board.current().is_none());
        assert!(!board.expire(ticket));
    }

    #[test]
    fn test_newer_notice_survives_stale_timer() {
        let mut board = NoticeBoard::new();
        let first = board.post(Notice::success("first"), SIGNUP_NOTICE_DELAY);
        let second = board.post(Notice::error("second"), UNREGISTER_NOTICE_DELAY);

        assert!(!board.expire(first));
        let current = board.current().unwrap();
        assert_eq!(current.text, "second");
        assert_eq!(current.severity, Severity::Error);

        assert!(board.expire(second));
    }

    #[test]
    fn test_outcome_notices() {
        let ok = Notice::for_outcome(Mutation::Signup, &Ok("Signed up a@x.com for Chess Club".into()));
        assert_eq!(ok, Notice::success("Signed up a@x.com for Chess Club"));

        let full = Notice::for_outcome(
            Mutation::Signup,
            &Err(ClientError::Rejected {
                status: 400,
                detail: Some("Activity is full".into()),
            }),
        );
        assert_eq!(full, Notice::error("Activity is full"));

        let bare = Notice::for_outcome(
            Mutation::Unregister,
            &Err(ClientError::Rejected {
                status: 500,
                detail: None,
            }),
        );
        assert_eq!(bare, Notice::error("Failed to unregister"));

        let down = Notice::for_outcome(Mutation::Signup, &Err(ClientError::Network("refused".into())));
        assert_eq!(down, Notice::error("Failed to sign up. Please try again."));

        let garbled = Notice::for_outcome(Mutation::Unregister, &Err(ClientError::Parse("eof".into())));
        assert_eq!(garbled, Notice::error("Failed to unregister. Please try again."));
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(Severity::Success.css_class(), "success");
        assert_eq!(Severity::Error.css_class(), "error");
    }
}
