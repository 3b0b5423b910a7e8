use super::*;

#[test]
fn demo_token_detection() {
    assert!(is_demo_token(Some(DEMO_TOKEN)));
    assert!(!is_demo_token(Some("t1")));
    assert!(!is_demo_token(None));
}

#[test]
fn demo_user_carries_requested_role() {
    assert_eq!(demo_user(Role::Admin).role, Role::Admin);
    assert_eq!(demo_user(Role::Admin).email, "admin@campus.edu");
    assert_eq!(demo_user(Role::Student).role, Role::Student);
    assert_eq!(demo_user(Role::Student).name, "John Doe");
}

#[test]
fn admin_fixtures_include_other_students() {
    let requests = demo_outing_requests(Role::Admin);
    assert!(requests.iter().any(|r| r.student_name != "John Doe"));
    assert_eq!(demo_students().len(), 4);
}

#[test]
fn student_fixtures_belong_to_demo_student() {
    let user = demo_user(Role::Student);
    assert!(demo_outing_requests(Role::Student).iter().all(|r| r.student_id == user.id));
    assert_eq!(demo_profile().id, user.id);
}

#[test]
fn local_outing_request_is_pending_and_attributed() {
    let user = demo_user(Role::Student);
    let new = NewOutingRequest { reason: "Trip".into(), from_date: "2024-02-01".into(), to_date: "2024-02-02".into() };
    let request = local_outing_request(new, &user, next_local_id("local", 2), "2024-01-30".into());
    assert_eq!(request.id, "local-3");
    assert_eq!(request.status, OutingStatus::Pending);
    assert_eq!(request.student_name, "John Doe");
    assert_eq!(request.created_at, "2024-01-30");
}

#[test]
fn local_announcement_is_authored_by_admin() {
    let new = NewAnnouncement { title: "Holiday".into(), content: "No classes Friday".into() };
    let announcement = local_announcement(new, "local-1".into(), String::new());
    assert_eq!(announcement.author, "Admin");
    assert_eq!(announcement.title, "Holiday");
}

#[test]
fn today_iso_is_empty_off_browser() {
    assert_eq!(today_iso(), "");
}
