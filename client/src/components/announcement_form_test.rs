use super::*;

#[test]
fn validate_announcement_trims_fields() {
    assert_eq!(
        validate_announcement("  Holiday ", " No classes Friday\n"),
        Ok(NewAnnouncement { title: "Holiday".into(), content: "No classes Friday".into() })
    );
}

#[test]
fn validate_announcement_requires_both_fields() {
    assert_eq!(validate_announcement("", "Body"), Err("Enter both a title and a message."));
    assert_eq!(validate_announcement("Title", "   "), Err("Enter both a title and a message."));
}
