//! Reusable UI components shared by the campus pages.
//!
//! ARCHITECTURE
//! ============
//! Components take signals and callbacks as props and never call the API
//! themselves; pages own data loading and mutation.

pub mod announcement_form;
pub mod announcements_list;
pub mod attendance_marker;
pub mod attendance_table;
pub mod header;
pub mod notice_toast;
pub mod outing_requests;
pub mod outing_requests_admin;
pub mod profile_card;
pub mod protected_route;
pub mod students_list;
