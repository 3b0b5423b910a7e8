use super::*;

#[test]
fn attendance_marked_notice_describes_entry() {
    let notice = attendance_marked_notice(AttendanceStatus::Absent, "2024-02-01", false);
    assert_eq!(notice.title, "Attendance Marked");
    assert_eq!(notice.description, "Marked absent for student on 2024-02-01");
}

#[test]
fn attendance_marked_notice_flags_demo() {
    let notice = attendance_marked_notice(AttendanceStatus::Present, "2024-02-01", true);
    assert_eq!(notice.title, "Attendance Marked (Demo)");
    assert_eq!(notice.description, "Marked present for student on 2024-02-01");
}
