use dioxus::prelude::*;

const TRACKER_CSS: Asset = asset!("/assets/tracker.css");

/// Shown instead of the tracker when the backend is not configured.
#[component]
pub fn ConfigErrorView(message: String) -> Element {
    rsx! {
        document::Stylesheet { href: TRACKER_CSS }
        div {
            class: "config-error",
            h2 { "Backend not configured" }
            p { "{message}" }
            p { "Set SUPABASE_URL and SUPABASE_ANON_KEY and restart." }
        }
    }
}
