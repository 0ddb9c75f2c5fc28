use api::BackendConfig;
use dioxus::prelude::*;

use ui::views::{ConfigErrorView, ExpensesView};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // SUPABASE_URL / SUPABASE_ANON_KEY are baked in at build time for the browser.
    let config = use_hook(BackendConfig::from_build_env);

    let page = match config {
        Ok(config) => rsx! {
            ui::TrackerProvider {
                config,
                ExpensesView {}
            }
        },
        Err(e) => {
            tracing::error!("Backend configuration error: {}", e);
            rsx! {
                ConfigErrorView { message: e.to_string() }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {page}
    }
}
