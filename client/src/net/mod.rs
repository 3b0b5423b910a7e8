//! Networking modules for the campus REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and classifies failures; `types` defines the
//! shared wire schema.

pub mod api;
pub mod types;
