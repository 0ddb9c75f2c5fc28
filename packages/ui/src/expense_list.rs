use dioxus::prelude::*;
use store::{Expense, ExpenseType};

use crate::icons::{FaPen, FaTrash};
use crate::provider::{use_tracker, use_tracker_state};
use crate::Icon;

/// Every loaded expense, newest first as inserted.
#[component]
pub fn ExpenseList() -> Element {
    let state = use_tracker_state();
    let expenses = state.read().expenses.clone();

    rsx! {
        ul {
            class: "expense-list",
            for expense in expenses {
                ExpenseRow {
                    key: "{expense.id}",
                    expense: expense.clone(),
                }
            }
        }
    }
}

/// One record with its Delete and Edit actions.
#[component]
fn ExpenseRow(expense: Expense) -> Element {
    let tracker = use_tracker();
    let mut state = use_tracker_state();

    let id = expense.id.clone();
    let editing = state.read().mode.is_editing_expense(&id);
    let on_delete = move |_| {
        let tracker = tracker.clone();
        let id = id.clone();
        async move {
            tracker.delete_expense(&mut state, &id).await;
        }
    };

    let (marker_class, marker) = match expense.r#type {
        ExpenseType::Out => ("marker text-red-500", "\u{1F534}"),
        ExpenseType::In => ("marker text-green-500", "\u{1F7E2}"),
    };

    rsx! {
        li {
            class: if editing { "expense-item editing" } else { "expense-item" },
            div {
                span { class: "{marker_class}", "{marker}" }
                span { "{expense.description} - ${expense.amount}" }
            }
            div {
                class: "expense-actions",
                button {
                    class: "delete-btn",
                    title: "Delete",
                    onclick: on_delete,
                    Icon { icon: FaTrash, width: 12, height: 12 }
                    " Delete"
                }
                button {
                    class: "edit-btn",
                    title: "Edit",
                    onclick: {
                        let expense = expense.clone();
                        move |_| state.write().start_editing(&expense)
                    },
                    Icon { icon: FaPen, width: 12, height: 12 }
                    " Edit"
                }
            }
        }
    }
}
