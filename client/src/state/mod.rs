//! Client-side state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the durable logged-in user identifier; `tasks` is the model
//! behind the dashboard list.

pub mod session;
pub mod tasks;
