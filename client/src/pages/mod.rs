//! Top-level routed pages.
//!
//! Pages own data loading and mutation for their view; the components they
//! render only see signals and callbacks.

pub mod admin;
pub mod common;
pub mod index;
pub mod login;
pub mod student;
