use super::*;

// =============================================================
// User / Role
// =============================================================

#[test]
fn user_deserializes_from_persisted_shape() {
    let raw = r#"{"id":"1","email":"s@x.edu","name":"S","role":"student"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.email, "s@x.edu");
    assert_eq!(user.name, "S");
    assert_eq!(user.role, Role::Student);
}

#[test]
fn user_serializes_role_lowercase() {
    let user = User { id: "7".into(), email: "a@x.edu".into(), name: "A".into(), role: Role::Admin };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["role"], "admin");
}

#[test]
fn user_rejects_unknown_role() {
    let raw = r#"{"id":"1","email":"s@x.edu","name":"S","role":"superuser"}"#;
    assert!(serde_json::from_str::<User>(raw).is_err());
}

#[test]
fn user_rejects_missing_fields() {
    assert!(serde_json::from_str::<User>(r#"{"id":"1"}"#).is_err());
}

#[test]
fn role_labels() {
    assert_eq!(Role::Student.label(), "Student");
    assert_eq!(Role::Admin.label(), "Admin");
}

// =============================================================
// Campus records
// =============================================================

#[test]
fn login_response_parses_nested_user() {
    let raw = r#"{"token":"abc","user":{"id":"2","email":"a@x.edu","name":"Ad","role":"admin"}}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "abc");
    assert_eq!(resp.user.role, Role::Admin);
}

#[test]
fn student_profile_uses_camel_case_fields() {
    let raw = r#"{"id":"1","name":"John","rollNumber":"CS2024001","branch":"CS","email":"j@x.edu","semester":4}"#;
    let profile: StudentProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.roll_number, "CS2024001");
    assert_eq!(profile.semester, 4);
}

#[test]
fn outing_request_parses_status_and_dates() {
    let raw = r#"{
        "id":"1","studentId":"1","studentName":"John","reason":"Family",
        "fromDate":"2024-01-20","toDate":"2024-01-22","status":"pending","createdAt":"2024-01-15"
    }"#;
    let req: OutingRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(req.status, OutingStatus::Pending);
    assert_eq!(req.from_date, "2024-01-20");
    assert_eq!(req.created_at, "2024-01-15");
}

#[test]
fn mark_attendance_body_matches_api_shape() {
    let body = MarkAttendance {
        student_id: "3".into(),
        date: "2024-01-16".into(),
        subject: "Networks".into(),
        status: AttendanceStatus::Absent,
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "studentId": "3", "date": "2024-01-16", "subject": "Networks", "status": "absent" })
    );
}

#[test]
fn new_outing_request_body_matches_api_shape() {
    let body = NewOutingRequest { reason: "Trip".into(), from_date: "2024-02-01".into(), to_date: "2024-02-03".into() };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "reason": "Trip", "fromDate": "2024-02-01", "toDate": "2024-02-03" })
    );
}

#[test]
fn status_strings_match_wire_values() {
    assert_eq!(OutingStatus::Approved.as_str(), "approved");
    assert_eq!(AttendanceStatus::Present.as_str(), "present");
    assert_eq!(OutingStatus::Rejected.label(), "Rejected");
}
