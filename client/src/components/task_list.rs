//! The dashboard's `#taskList`.
//!
//! DESIGN
//! ======
//! Every render rebuilds the whole list from the current state, in server
//! order. Descriptions are text nodes, so markup in a task shows literally.

#[cfg(all(test, feature = "ssr"))]
#[path = "task_list_test.rs"]
mod task_list_test;

use leptos::prelude::*;

use crate::state::tasks::TaskListState;

/// One `<li>` per task in `tasks`.
#[component]
pub fn TaskList(#[prop(into)] tasks: Signal<TaskListState>) -> impl IntoView {
    view! {
        <ul id="taskList" class="task-list">
            {move || {
                tasks
                    .get()
                    .items
                    .into_iter()
                    .map(|task| view! { <li class="task-list__item">{task.task_description}</li> })
                    .collect_view()
            }}
        </ul>
    }
}
