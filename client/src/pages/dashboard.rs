//! Dashboard page listing the user's tasks with an add-task form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is fetched once when the page mounts in the browser and again
//! after every submit.

use leptos::prelude::*;

use crate::components::task_list::TaskList;
use crate::state::tasks::TaskListState;
use crate::util::browser::SignalTaskList;
use crate::util::in_flight::InFlight;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let tasks = RwSignal::new(TaskListState { loading: true, ..TaskListState::default() });
    let draft = RwSignal::new(String::new());
    let in_flight = InFlight::new();
    let list = SignalTaskList { tasks, draft };

    // Effects only run in the browser, where the session is readable.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpTaskApi::default();
            let session = crate::state::session::Session::browser();
            let _ = crate::flows::dashboard::refresh_tasks(&api, &session, &crate::util::browser::BrowserShell, &list)
                .await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = list;
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !in_flight.try_begin() {
            return;
        }
        let description = draft.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpTaskApi::default();
            let session = crate::state::session::Session::browser();
            let shell = crate::util::browser::BrowserShell;
            let _ = crate::flows::dashboard::create_task(&api, &session, &shell, &list, description).await;
            in_flight.finish();
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = description;
    };

    let on_logout = move |_| {
        crate::flows::log_out(
            &crate::state::session::Session::browser(),
            &crate::util::browser::BrowserShell,
        );
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"My tasks"</h1>
                <button class="btn dashboard-page__logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>

            <form id="newTaskForm" class="task-form" on:submit=on_submit>
                <input
                    id="taskDescription"
                    class="task-input"
                    type="text"
                    placeholder="What needs doing?"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || in_flight.is_busy()>
                    "Add task"
                </button>
            </form>

            <Show when=move || tasks.with(|s| s.error.is_some())>
                <p class="dashboard-page__error">
                    {move || tasks.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>
            <Show when=move || tasks.with(|s| s.loading)>
                <p class="dashboard-page__loading">"Loading tasks..."</p>
            </Show>
            <TaskList tasks=tasks />
        </div>
    }
}
