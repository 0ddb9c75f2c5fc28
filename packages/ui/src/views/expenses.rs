use dioxus::prelude::*;

use crate::{ExpenseEntry, ExpenseList, LoginPanel};

const TRACKER_CSS: Asset = asset!("/assets/tracker.css");

/// The whole single-page tracker: login, entry form and list.
///
/// Must be rendered inside a [`crate::TrackerProvider`].
#[component]
pub fn ExpensesView() -> Element {
    rsx! {
        document::Stylesheet { href: TRACKER_CSS }
        div {
            class: "tracker-page",
            h1 { class: "tracker-title", "Daily Expense Tracker" }
            LoginPanel {}
            ExpenseEntry {}
            ExpenseList {}
        }
    }
}
