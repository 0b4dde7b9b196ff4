use super::*;

#[test]
fn signal_task_list_replaces_and_clears() {
    let owner = Owner::new();
    owner.with(|| {
        let list = SignalTaskList {
            tasks: RwSignal::new(TaskListState::default()),
            draft: RwSignal::new("Buy milk".to_owned()),
        };
        list.tasks.update(|s| s.replace(vec![Task { task_description: "old".to_owned() }]));

        list.replace_tasks(vec![
            Task { task_description: "A".to_owned() },
            Task { task_description: "B".to_owned() },
        ]);
        list.clear_draft();

        let state = list.tasks.get_untracked();
        assert_eq!(state.descriptions().collect::<Vec<_>>(), ["A", "B"]);
        assert!(list.draft.get_untracked().is_empty());
    });
}

#[test]
fn signal_task_list_error_keeps_items() {
    let owner = Owner::new();
    owner.with(|| {
        let list = SignalTaskList {
            tasks: RwSignal::new(TaskListState::default()),
            draft: RwSignal::new(String::new()),
        };
        list.replace_tasks(vec![Task { task_description: "A".to_owned() }]);
        list.show_error("Could not load tasks.");

        let state = list.tasks.get_untracked();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.error.as_deref(), Some("Could not load tasks."));
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_shell_is_inert_outside_the_browser() {
    BrowserShell.notify("hello");
    BrowserShell.navigate(PageKind::Login);
}
