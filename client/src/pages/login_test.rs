use super::*;

fn student() -> User {
    User { id: "1".into(), email: "s@x.edu".into(), name: "S".into(), role: Role::Student }
}

#[test]
fn validate_login_input_trims_email_only() {
    assert_eq!(
        validate_login_input("  user@example.com  ", " secret "),
        Ok(("user@example.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Please enter both email and password"));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Please enter both email and password"));
}

#[test]
fn login_failure_message_prefers_server_message() {
    let err = ApiError::Status { status: 401, message: "Invalid email or password".into() };
    assert_eq!(login_failure_message(&err), "Invalid email or password");
}

#[test]
fn login_failure_message_for_network_errors() {
    assert_eq!(
        login_failure_message(&ApiError::Network("dns".into())),
        "Could not reach the campus server. Please try again."
    );
}

#[test]
fn welcome_notice_names_user_or_role() {
    assert_eq!(welcome_notice(&student(), false).description, "Logged in as S");
    let demo = welcome_notice(&student(), true);
    assert_eq!(demo.title, "Demo Mode");
    assert_eq!(demo.description, "Logged in as Student");
}

#[test]
fn expired_reason_detection() {
    assert!(is_expired_reason(Some("expired")));
    assert!(!is_expired_reason(Some("other")));
    assert!(!is_expired_reason(None));
}
