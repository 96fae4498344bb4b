//! Backend Endpoints
//!
//! URL construction and response bodies for the three backend calls:
//!
//! - `GET /activities` - the full catalog
//! - `POST /activities/{name}/signup?email=` - add a participant
//! - `POST /activities/{name}/unregister?email=` - remove a participant
//!
//! Activity names and emails are percent-encoded; mutations carry no body.

use serde::{Deserialize, Serialize};

/// Path of the catalog listing
pub const ACTIVITIES_PATH: &str = "/activities";

/// A state-changing call on a single activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Signup,
    Unregister,
}

impl Mutation {
    /// Last path segment of the endpoint
    pub fn segment(self) -> &'static str {
        match self {
            Mutation::Signup => "signup",
            Mutation::Unregister => "unregister",
        }
    }
}

/// Strip trailing slashes so paths can be appended directly.
///
/// An empty base yields same-origin relative URLs.
pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

/// `GET` target for the catalog
pub fn activities_url(base: &str) -> String {
    format!("{}{}", normalize_base(base), ACTIVITIES_PATH)
}

/// `POST` target for a mutation on `activity` for `email`
pub fn mutation_url(base: &str, mutation: Mutation, activity: &str, email: &str) -> String {
    format!(
        "{}{}/{}/{}?email={}",
        normalize_base(base),
        ACTIVITIES_PATH,
        urlencoding::encode(activity),
        mutation.segment(),
        urlencoding::encode(email)
    )
}

pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    mutation_url(base, Mutation::Signup, activity, email)
}

pub fn unregister_url(base: &str, activity: &str, email: &str) -> String {
    mutation_url(base, Mutation::Unregister, activity, email)
}

// ============ Response Bodies ============

/// 2xx body of a mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Non-2xx body of any call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailResponse {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activities_url() {
        assert_eq!(activities_url("http://localhost:8000"), "http://localhost:8000/activities");
        assert_eq!(activities_url("http://localhost:8000/"), "http://localhost:8000/activities");
        assert_eq!(activities_url(""), "/activities");
    }

    #[test]
    fn test_mutation_urls_escape_name_and_email() {
        assert_eq!(
            signup_url("", "Chess Club", "a+b@x.com"),
            "/activities/Chess%20Club/signup?email=a%2Bb%40x.com"
        );
        assert_eq!(
            unregister_url("http://h:1/", "Art/Design", "me@x.com"),
            "http://h:1/activities/Art%2FDesign/unregister?email=me%40x.com"
        );
    }

    #[test]
    fn test_detail_is_optional() {
        let body: DetailResponse = serde_json::from_str("{}").unwrap();
        assert!(body.detail.is_none());

        let body: DetailResponse = serde_json::from_str(r#"{"detail": "Activity not found"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("Activity not found"));
    }
}
