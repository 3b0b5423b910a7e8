use super::*;

fn attendance(id: &str, status: AttendanceStatus) -> AttendanceRecord {
    AttendanceRecord { id: id.into(), date: "2024-01-15".into(), subject: "Data Structures".into(), status }
}

fn outing(id: &str, status: OutingStatus) -> OutingRequest {
    OutingRequest {
        id: id.into(),
        student_id: "1".into(),
        student_name: "John Doe".into(),
        reason: "Family function".into(),
        from_date: "2024-01-20".into(),
        to_date: "2024-01-22".into(),
        status,
        created_at: "2024-01-15".into(),
    }
}

fn ids(requests: &[OutingRequest]) -> Vec<&str> {
    requests.iter().map(|r| r.id.as_str()).collect()
}

// =============================================================
// AttendanceSummary
// =============================================================

#[test]
fn summary_of_empty_list_is_zero_percent() {
    let summary = AttendanceSummary::from_records(&[]);
    assert_eq!(summary, AttendanceSummary::default());
    assert_eq!(summary.percentage(), 0);
}

#[test]
fn summary_counts_present_and_absent() {
    let records = [
        attendance("1", AttendanceStatus::Present),
        attendance("2", AttendanceStatus::Present),
        attendance("3", AttendanceStatus::Absent),
        attendance("4", AttendanceStatus::Present),
        attendance("5", AttendanceStatus::Present),
    ];
    let summary = AttendanceSummary::from_records(&records);
    assert_eq!(summary, AttendanceSummary { total: 5, present: 4, absent: 1 });
    assert_eq!(summary.percentage(), 80);
}

#[test]
fn percentage_rounds_half_up() {
    // 1/8 = 12.5%
    assert_eq!(AttendanceSummary { total: 8, present: 1, absent: 7 }.percentage(), 13);
    // 2/3 = 66.67%
    assert_eq!(AttendanceSummary { total: 3, present: 2, absent: 1 }.percentage(), 67);
    // 1/3 = 33.33%
    assert_eq!(AttendanceSummary { total: 3, present: 1, absent: 2 }.percentage(), 33);
}

#[test]
fn percentage_bounds() {
    assert_eq!(AttendanceSummary { total: 4, present: 4, absent: 0 }.percentage(), 100);
    assert_eq!(AttendanceSummary { total: 4, present: 0, absent: 4 }.percentage(), 0);
}

// =============================================================
// Outing requests
// =============================================================

#[test]
fn sort_pending_first_is_stable() {
    let mut requests = vec![
        outing("a", OutingStatus::Approved),
        outing("b", OutingStatus::Pending),
        outing("c", OutingStatus::Rejected),
        outing("d", OutingStatus::Pending),
    ];
    sort_pending_first(&mut requests);
    assert_eq!(ids(&requests), ["b", "d", "a", "c"]);
}

#[test]
fn sort_pending_first_handles_empty_list() {
    let mut requests: Vec<OutingRequest> = Vec::new();
    sort_pending_first(&mut requests);
    assert!(requests.is_empty());
}

#[test]
fn pending_count_counts_only_pending() {
    let requests = [
        outing("a", OutingStatus::Pending),
        outing("b", OutingStatus::Approved),
        outing("c", OutingStatus::Pending),
    ];
    assert_eq!(pending_count(&requests), 2);
}

#[test]
fn apply_outing_status_updates_matching_request() {
    let mut requests = vec![outing("a", OutingStatus::Pending), outing("b", OutingStatus::Pending)];
    assert!(apply_outing_status(&mut requests, "b", OutingStatus::Rejected));
    assert_eq!(requests[0].status, OutingStatus::Pending);
    assert_eq!(requests[1].status, OutingStatus::Rejected);
}

#[test]
fn apply_outing_status_unknown_id_changes_nothing() {
    let mut requests = vec![outing("a", OutingStatus::Pending)];
    assert!(!apply_outing_status(&mut requests, "zzz", OutingStatus::Approved));
    assert_eq!(requests[0].status, OutingStatus::Pending);
}
