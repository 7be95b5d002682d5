//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`ads`, `entry`, `register`, `toast`) so
//! individual components can depend on small focused models. Lifecycle
//! logic is written as plain reducers over these models; components only
//! dispatch events and execute the returned commands.

pub mod ads;
pub mod entry;
pub mod register;
pub mod toast;
