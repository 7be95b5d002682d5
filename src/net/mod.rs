//! Networking modules for the GraphQL mutation boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` sends the create/update/delete mutations over HTTP and `types`
//! defines the shared wire schema, including the optional-`data` response
//! envelopes the portal backend returns.

pub mod api;
pub mod types;
