use dioxus::prelude::*;
use store::ExpenseType;

use crate::provider::{use_tracker, use_tracker_state};

/// Amount, description and type inputs with the Add / Save Edit button.
#[component]
pub fn ExpenseEntry() -> Element {
    let tracker = use_tracker();
    let mut state = use_tracker_state();

    let on_submit = move |_| {
        let tracker = tracker.clone();
        async move {
            tracker.submit(&mut state).await;
        }
    };

    let current = state.read();
    let amount = current.form.amount.clone();
    let description = current.form.description.clone();
    let selected = current.form.r#type;
    let editing = current.is_editing();
    let label = current.submit_label();
    drop(current);

    rsx! {
        div {
            class: "expense-form",
            input {
                r#type: "number",
                placeholder: "Amount",
                value: amount,
                oninput: move |evt: FormEvent| state.write().form.amount = evt.value(),
            }
            input {
                r#type: "text",
                placeholder: "Description",
                value: description,
                oninput: move |evt: FormEvent| state.write().form.description = evt.value(),
            }
            select {
                value: selected.as_str(),
                onchange: move |evt: FormEvent| {
                    if let Some(kind) = ExpenseType::from_value(&evt.value()) {
                        state.write().form.r#type = kind;
                    }
                },
                for kind in [ExpenseType::Out, ExpenseType::In] {
                    option {
                        value: kind.as_str(),
                        selected: kind == selected,
                        {kind.label()}
                    }
                }
            }
            button {
                class: if editing { "submit-btn editing" } else { "submit-btn" },
                onclick: on_submit,
                "{label}"
            }
            if editing {
                button {
                    class: "cancel-btn",
                    onclick: move |_| state.write().cancel_editing(),
                    "Cancel"
                }
            }
        }
    }
}
