//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the advertisement widgets and read/write shared state
//! from Leptos context providers. Anything with branching behavior lives
//! in `state`; components stay declarative.

pub mod advertisement_entry;
pub mod advertisement_register;
pub mod icon;
