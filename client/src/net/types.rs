//! Shared REST DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the campus API's camelCase JSON so serde round-trips
//! stay lossless. Enumerated strings (`role`, `status`) are typed enums; an
//! unknown value fails deserialization instead of silently widening access.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access role carried by an authenticated identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

impl Role {
    /// Display label used in the header badge.
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Admin => "Admin",
        }
    }
}

/// The authenticated user's identity. Persisted under the `user` storage key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    /// Fixed for the lifetime of a session.
    pub role: Role,
}

/// Response body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Student profile as returned by `/profile` and `/students`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: String,
    pub name: String,
    pub roll_number: String,
    pub branch: String,
    pub email: String,
    pub semester: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

/// One class-attendance entry for the current student.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    pub subject: String,
    pub status: AttendanceStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutingStatus {
    Pending,
    Approved,
    Rejected,
}

impl OutingStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// A student's request to leave campus between two dates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutingRequest {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub reason: String,
    pub from_date: String,
    pub to_date: String,
    pub status: OutingStatus,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub author: String,
}

/// Request body of `POST /attendance`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendance {
    pub student_id: String,
    pub date: String,
    pub subject: String,
    pub status: AttendanceStatus,
}

/// Request body of `POST /outing`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOutingRequest {
    pub reason: String,
    pub from_date: String,
    pub to_date: String,
}

/// Request body of `POST /announcements`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
}
