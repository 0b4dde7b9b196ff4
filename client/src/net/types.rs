//! Wire DTOs for the task backend.
//!
//! DESIGN
//! ======
//! Response types only name the fields the UI reads. Serde ignores anything
//! else the backend sends, so new columns never break decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Username/password pair sent to the register and login endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

/// Identifier of the logged-in user.
///
/// The backend may send it as a JSON string or number; either way it is kept
/// in its textual form, which is also how it sits in browser storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawUserId", into = "String")]
pub struct UserId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawUserId> for UserId {
    fn from(raw: RawUserId) -> Self {
        match raw {
            RawUserId::Text(text) => Self(text),
            RawUserId::Number(number) => Self(number.to_string()),
        }
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl UserId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Integer form used in task payloads. `None` when the stored text is
    /// not a plain integer.
    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        self.0.trim().parse().ok()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Successful `POST /api/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub id: UserId,
}

/// A task as returned by `GET /api/tasks/{user_id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub task_description: String,
}

/// Body of `POST /api/tasks`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub task_description: String,
    pub user_id: i64,
}
