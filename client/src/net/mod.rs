//! Networking modules for the host server's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls from the browser and `types` defines the wire
//! schema shared with the server crate.

pub mod api;
pub mod types;
