use super::*;

#[test]
fn validate_attendance_form_builds_request() {
    assert_eq!(
        validate_attendance_form("3", "2024-01-16", " Networks ", AttendanceStatus::Absent),
        Ok(MarkAttendance {
            student_id: "3".into(),
            date: "2024-01-16".into(),
            subject: "Networks".into(),
            status: AttendanceStatus::Absent,
        })
    );
}

#[test]
fn validate_attendance_form_requires_all_fields() {
    let missing = Err("Please fill all fields");
    assert_eq!(validate_attendance_form("", "2024-01-16", "Networks", AttendanceStatus::Present), missing);
    assert_eq!(validate_attendance_form("3", " ", "Networks", AttendanceStatus::Present), missing);
    assert_eq!(validate_attendance_form("3", "2024-01-16", "", AttendanceStatus::Present), missing);
}
