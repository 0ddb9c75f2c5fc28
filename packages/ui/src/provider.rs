//! Tracker context and hooks for the UI.

use std::rc::Rc;

use api::BackendConfig;
use dioxus::prelude::*;

use crate::platform::{make_tracker, AppTracker};
use crate::state::TrackerState;
use crate::tracker::StateHandle;

impl StateHandle for Signal<TrackerState> {
    fn with<R>(&self, f: impl FnOnce(&TrackerState) -> R) -> R {
        f(&*self.peek())
    }

    fn with_mut<R>(&mut self, f: impl FnOnce(&mut TrackerState) -> R) -> R {
        f(&mut *self.write())
    }
}

/// The shared tracker service.
pub fn use_tracker() -> Rc<AppTracker> {
    use_context::<Rc<AppTracker>>()
}

/// The view-model. Components re-render when it changes.
pub fn use_tracker_state() -> Signal<TrackerState> {
    use_context::<Signal<TrackerState>>()
}

/// Provider component that owns the tracker and its state.
/// Wrap the page with this component; on mount it restores the stored session
/// and loads the expense list.
#[component]
pub fn TrackerProvider(config: BackendConfig, children: Element) -> Element {
    let tracker = use_context_provider(|| Rc::new(make_tracker(config)));
    let state = use_context_provider(|| Signal::new(TrackerState::default()));

    let _ = use_resource(move || {
        let tracker = tracker.clone();
        let mut state = state;
        async move {
            tracker.start(&mut state).await;
        }
    });

    rsx! {
        {children}
    }
}
