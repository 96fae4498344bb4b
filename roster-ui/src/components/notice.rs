//! Notice Component
//!
//! The `message` area: hidden, or showing one success/error notice.

use leptos::*;

use crate::state::{notice_class, RosterState};

#[component]
pub fn NoticeArea() -> impl IntoView {
    let state = use_context::<RosterState>().expect("RosterState not found");

    view! {
        <div
            id="message"
            class=move || state.notice.with(|notice| notice_class(notice.as_ref()))
        >
            {move || state.notice.with(|notice| {
                notice.as_ref().map(|n| n.text.clone()).unwrap_or_default()
            })}
        </div>
    }
}
