//! UI Components
//!
//! Leptos components bound to the page's fixed element IDs:
//! `activities-list`, `signup-form`, `activity`, `email` and `message`.

pub mod activity_card;
pub mod activity_list;
pub mod notice;
pub mod signup_form;

pub use activity_card::ActivityCard;
pub use activity_list::ActivityList;
pub use notice::NoticeArea;
pub use signup_form::SignupForm;
