//! Networking for the lead form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` sends submissions to the hosted form service and `types` defines
//! the JSON body it receives.

pub mod api;
pub mod types;
