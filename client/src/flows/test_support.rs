//! Recording fakes for flow tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use super::{Shell, TaskListView};
use crate::net::api::{ApiError, TaskApi};
use crate::net::types::{Credentials, LoginResponse, NewTask, Task, UserId};
use crate::pages::PageKind;

/// One backend call as the fake saw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Register(Credentials),
    Login(Credentials),
    ListTasks(UserId),
    CreateTask(NewTask),
}

/// Scripted [`TaskApi`]. Each queue is consumed front to back; an empty
/// queue answers with a network error.
#[derive(Default)]
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub register_results: RefCell<VecDeque<Result<(), ApiError>>>,
    pub login_results: RefCell<VecDeque<Result<LoginResponse, ApiError>>>,
    pub list_results: RefCell<VecDeque<Result<Vec<Task>, ApiError>>>,
    pub create_results: RefCell<VecDeque<Result<(), ApiError>>>,
}

fn exhausted() -> ApiError {
    ApiError::Network("no scripted response".to_owned())
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn push_register(&self, result: Result<(), ApiError>) -> &Self {
        self.register_results.borrow_mut().push_back(result);
        self
    }

    pub fn push_login(&self, result: Result<LoginResponse, ApiError>) -> &Self {
        self.login_results.borrow_mut().push_back(result);
        self
    }

    pub fn push_list(&self, result: Result<Vec<Task>, ApiError>) -> &Self {
        self.list_results.borrow_mut().push_back(result);
        self
    }

    pub fn push_create(&self, result: Result<(), ApiError>) -> &Self {
        self.create_results.borrow_mut().push_back(result);
        self
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeApi {
    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::Register(credentials.clone()));
        self.register_results.borrow_mut().pop_front().unwrap_or_else(|| Err(exhausted()))
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.calls.borrow_mut().push(Call::Login(credentials.clone()));
        self.login_results.borrow_mut().pop_front().unwrap_or_else(|| Err(exhausted()))
    }

    async fn list_tasks(&self, user_id: &UserId) -> Result<Vec<Task>, ApiError> {
        self.calls.borrow_mut().push(Call::ListTasks(user_id.clone()));
        self.list_results.borrow_mut().pop_front().unwrap_or_else(|| Err(exhausted()))
    }

    async fn create_task(&self, task: &NewTask) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::CreateTask(task.clone()));
        self.create_results.borrow_mut().pop_front().unwrap_or_else(|| Err(exhausted()))
    }
}

/// What the page would have shown or done, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    Notify(String),
    Navigate(PageKind),
}

#[derive(Default)]
pub struct RecordingShell {
    pub events: RefCell<Vec<ShellEvent>>,
}

impl RecordingShell {
    pub fn events(&self) -> Vec<ShellEvent> {
        self.events.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<PageKind> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ShellEvent::Navigate(page) => Some(page),
                ShellEvent::Notify(_) => None,
            })
            .collect()
    }
}

impl Shell for RecordingShell {
    fn notify(&self, message: &str) {
        self.events.borrow_mut().push(ShellEvent::Notify(message.to_owned()));
    }

    fn navigate(&self, page: PageKind) {
        self.events.borrow_mut().push(ShellEvent::Navigate(page));
    }
}

/// List view backed by plain fields.
#[derive(Default)]
pub struct RecordingList {
    pub rendered: RefCell<Vec<String>>,
    pub renders: RefCell<usize>,
    pub error: RefCell<Option<String>>,
    pub draft: RefCell<String>,
}

impl RecordingList {
    pub fn with_draft(draft: &str) -> Self {
        let list = Self::default();
        *list.draft.borrow_mut() = draft.to_owned();
        list
    }

    pub fn rendered(&self) -> Vec<String> {
        self.rendered.borrow().clone()
    }
}

impl TaskListView for RecordingList {
    fn replace_tasks(&self, tasks: Vec<Task>) {
        *self.renders.borrow_mut() += 1;
        *self.rendered.borrow_mut() = tasks.into_iter().map(|task| task.task_description).collect();
        *self.error.borrow_mut() = None;
    }

    fn show_error(&self, message: &str) {
        *self.error.borrow_mut() = Some(message.to_owned());
    }

    fn clear_draft(&self) {
        self.draft.borrow_mut().clear();
    }
}

pub fn task(description: &str) -> Task {
    Task { task_description: description.to_owned() }
}
