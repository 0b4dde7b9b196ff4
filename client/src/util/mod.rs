//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and flow
//! logic to improve reuse and testability.

pub mod browser;
pub mod in_flight;
