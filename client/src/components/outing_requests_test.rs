use super::*;

#[test]
fn validate_outing_form_trims_fields() {
    assert_eq!(
        validate_outing_form("  Family function ", "2024-01-20", " 2024-01-22 "),
        Ok(NewOutingRequest {
            reason: "Family function".into(),
            from_date: "2024-01-20".into(),
            to_date: "2024-01-22".into(),
        })
    );
}

#[test]
fn validate_outing_form_requires_every_field() {
    let missing = Err("Please fill in the reason and both dates.");
    assert_eq!(validate_outing_form("   ", "2024-01-20", "2024-01-22"), missing);
    assert_eq!(validate_outing_form("Trip", "", "2024-01-22"), missing);
    assert_eq!(validate_outing_form("Trip", "2024-01-20", ""), missing);
}

#[test]
fn validate_outing_form_allows_same_day() {
    assert!(validate_outing_form("Doctor", "2024-01-25", "2024-01-25").is_ok());
}

#[test]
fn validate_outing_form_rejects_reversed_dates() {
    assert_eq!(
        validate_outing_form("Trip", "2024-01-22", "2024-01-20"),
        Err("The return date cannot be before the departure date.")
    );
}

#[test]
fn status_badge_classes_are_distinct() {
    assert_eq!(status_badge_class(OutingStatus::Pending), "badge badge--warning");
    assert_eq!(status_badge_class(OutingStatus::Approved), "badge badge--success");
    assert_eq!(status_badge_class(OutingStatus::Rejected), "badge badge--danger");
}
