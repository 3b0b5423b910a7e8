//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `guard`, `records`, `ui`, etc.) so
//! individual components can depend on small focused models.

pub mod demo;
pub mod guard;
pub mod records;
pub mod rejection;
pub mod session;
pub mod storage;
pub mod ui;
