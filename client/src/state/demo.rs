//! Demo sessions and the fixture data shown while one is active.
//!
//! A demo session is an ordinary session whose token is [`DEMO_TOKEN`].
//! Dashboards check for it and serve these fixtures instead of calling the
//! API, applying mutations to local state only.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

use crate::net::types::{
    Announcement, AttendanceRecord, AttendanceStatus, NewAnnouncement, NewOutingRequest, OutingRequest,
    OutingStatus, Role, StudentProfile, User,
};

pub const DEMO_TOKEN: &str = "demo-token-12345";

pub fn is_demo_token(token: Option<&str>) -> bool {
    token == Some(DEMO_TOKEN)
}

pub fn demo_user(role: Role) -> User {
    match role {
        Role::Admin => User {
            id: "1".into(),
            email: "admin@campus.edu".into(),
            name: "Admin User".into(),
            role,
        },
        Role::Student => User {
            id: "1".into(),
            email: "student@campus.edu".into(),
            name: "John Doe".into(),
            role,
        },
    }
}

fn student(id: &str, name: &str, roll_number: &str, branch: &str, email: &str, semester: u32) -> StudentProfile {
    StudentProfile {
        id: id.into(),
        name: name.into(),
        roll_number: roll_number.into(),
        branch: branch.into(),
        email: email.into(),
        semester,
    }
}

pub fn demo_profile() -> StudentProfile {
    student("1", "John Doe", "CS2024001", "Computer Science", "john.doe@campus.edu", 4)
}

pub fn demo_students() -> Vec<StudentProfile> {
    vec![
        student("1", "John Doe", "CS2024001", "Computer Science", "john@campus.edu", 4),
        student("2", "Jane Smith", "CS2024002", "Computer Science", "jane@campus.edu", 4),
        student("3", "Bob Wilson", "EC2024001", "Electronics", "bob@campus.edu", 2),
        student("4", "Alice Brown", "ME2024001", "Mechanical", "alice@campus.edu", 6),
    ]
}

pub fn demo_attendance() -> Vec<AttendanceRecord> {
    [
        ("1", "2024-01-15", "Data Structures", AttendanceStatus::Present),
        ("2", "2024-01-15", "Database Systems", AttendanceStatus::Present),
        ("3", "2024-01-16", "Data Structures", AttendanceStatus::Absent),
        ("4", "2024-01-16", "Operating Systems", AttendanceStatus::Present),
        ("5", "2024-01-17", "Computer Networks", AttendanceStatus::Present),
    ]
    .into_iter()
    .map(|(id, date, subject, status)| AttendanceRecord {
        id: id.into(),
        date: date.into(),
        subject: subject.into(),
        status,
    })
    .collect()
}

fn outing(
    id: &str,
    student: (&str, &str),
    reason: &str,
    dates: (&str, &str),
    status: OutingStatus,
    created_at: &str,
) -> OutingRequest {
    OutingRequest {
        id: id.into(),
        student_id: student.0.into(),
        student_name: student.1.into(),
        reason: reason.into(),
        from_date: dates.0.into(),
        to_date: dates.1.into(),
        status,
        created_at: created_at.into(),
    }
}

/// Outing requests as the given role would see them.
pub fn demo_outing_requests(role: Role) -> Vec<OutingRequest> {
    match role {
        Role::Student => vec![
            outing("1", ("1", "John Doe"), "Family function", ("2024-01-20", "2024-01-22"), OutingStatus::Approved, "2024-01-15"),
            outing("2", ("1", "John Doe"), "Medical appointment", ("2024-01-25", "2024-01-25"), OutingStatus::Pending, "2024-01-18"),
        ],
        Role::Admin => vec![
            outing("1", ("1", "John Doe"), "Family function", ("2024-01-20", "2024-01-22"), OutingStatus::Pending, "2024-01-15"),
            outing("2", ("2", "Jane Smith"), "Medical checkup", ("2024-01-18", "2024-01-18"), OutingStatus::Approved, "2024-01-14"),
            outing("3", ("3", "Bob Wilson"), "Personal work", ("2024-01-25", "2024-01-26"), OutingStatus::Pending, "2024-01-17"),
        ],
    }
}

pub fn demo_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "1".into(),
            title: "Mid-Semester Exams Schedule".into(),
            content: "The mid-semester examinations will begin from February 15th. \
                      Please check the detailed schedule on the notice board."
                .into(),
            created_at: "2024-01-10".into(),
            author: "Academic Office".into(),
        },
        Announcement {
            id: "2".into(),
            title: "Campus Maintenance".into(),
            content: "The library will be closed on Sunday for annual maintenance work.".into(),
            created_at: "2024-01-12".into(),
            author: "Admin Office".into(),
        },
    ]
}

/// Build the request the API would have returned for a locally filed outing.
pub fn local_outing_request(new: NewOutingRequest, user: &User, id: String, today: String) -> OutingRequest {
    OutingRequest {
        id,
        student_id: user.id.clone(),
        student_name: user.name.clone(),
        reason: new.reason,
        from_date: new.from_date,
        to_date: new.to_date,
        status: OutingStatus::Pending,
        created_at: today,
    }
}

/// Build the announcement the API would have returned for a local publish.
pub fn local_announcement(new: NewAnnouncement, id: String, today: String) -> Announcement {
    Announcement { id, title: new.title, content: new.content, created_at: today, author: "Admin".into() }
}

/// Identifier for locally created records, unique within one list.
pub fn next_local_id(prefix: &str, existing: usize) -> String {
    format!("{prefix}-{}", existing + 1)
}

/// Today's date as `YYYY-MM-DD`. Empty outside the browser.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso: String = js_sys::Date::new_0().to_iso_string().into();
        iso.split('T').next().unwrap_or_default().to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
