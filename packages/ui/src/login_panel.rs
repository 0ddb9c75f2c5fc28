//! Login fields, Login/Logout buttons and the message line.

use dioxus::prelude::*;

use crate::provider::{use_tracker, use_tracker_state};

#[component]
pub fn LoginPanel() -> Element {
    let tracker = use_tracker();
    let mut state = use_tracker_state();
    let mut loading = use_signal(|| false);

    let on_login = {
        let tracker = tracker.clone();
        move |_| {
            let tracker = tracker.clone();
            async move {
                loading.set(true);
                tracker.login(&mut state).await;
                loading.set(false);
            }
        }
    };

    let on_logout = move |_| {
        let tracker = tracker.clone();
        async move {
            tracker.logout(&mut state).await;
        }
    };

    let current = state.read();
    let email = current.login.email.clone();
    let password = current.login.password.clone();
    let message = current.message.clone();
    let signed_in_as = current
        .session
        .as_ref()
        .map(|s| s.user.email.clone().unwrap_or_else(|| s.user_id().to_string()));
    drop(current);

    rsx! {
        div {
            class: "login-panel",
            h2 { "Login" }
            input {
                r#type: "email",
                placeholder: "Email",
                value: email,
                oninput: move |evt: FormEvent| state.write().login.email = evt.value(),
            }
            input {
                r#type: "password",
                placeholder: "Password",
                value: password,
                oninput: move |evt: FormEvent| state.write().login.password = evt.value(),
            }
            button {
                disabled: loading(),
                onclick: on_login,
                if loading() {
                    "Loading..."
                } else {
                    "Login"
                }
            }
            if let Some(message) = message {
                p { class: "message", "{message}" }
            }
        }
        div {
            class: "session-bar",
            if let Some(who) = signed_in_as {
                span { class: "session-user", "Signed in as {who}" }
            }
            button {
                class: "logout-btn",
                onclick: on_logout,
                "Logout"
            }
        }
    }
}
