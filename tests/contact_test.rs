//! Tests for contact form validation and the honeypot drop rule.
//!
//! Run with: `cargo test --test contact_test`

use portfolio_backend::models::contact::{ContactError, ContactSubmission, is_valid_email};

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Alice Smith".to_string(),
        email: "alice@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "I liked your earthquake analysis project.".to_string(),
        gotcha: String::new(),
    }
}

#[test]
fn test_complete_submission_validates() {
    assert_eq!(submission().validate(), Ok(()));
}

#[test]
fn test_every_field_is_required() {
    for field in ["name", "email", "subject", "message"] {
        let mut s = submission();
        match field {
            "name" => s.name = "   ".to_string(),
            "email" => s.email = String::new(),
            "subject" => s.subject = "\t".to_string(),
            _ => s.message = String::new(),
        }

        let err = s.validate().unwrap_err();
        assert_eq!(err, ContactError::FieldRequired { field });
        assert_eq!(err.to_string(), "This field is required.");
        assert_eq!(err.field(), field);
    }
}

#[test]
fn test_malformed_email_is_rejected() {
    let mut s = submission();
    s.email = "not-an-email".to_string();

    let err = s.validate().unwrap_err();
    assert_eq!(err, ContactError::InvalidEmail);
    assert_eq!(err.to_string(), "Please enter a valid email.");
    assert_eq!(err.field(), "email");
}

#[test]
fn test_email_shape_rules() {
    for ok in [
        "a@b.c",
        "alice@example.com",
        "first.last@sub.example.co",
        "user+tag@example.io",
    ] {
        assert!(is_valid_email(ok), "{ok} should be accepted");
    }

    for bad in [
        "",
        "plain",
        "a@b",
        "a@b.",
        "a@.b",
        "@example.com",
        "alice@",
        "a b@example.com",
        "a@exa mple.com",
        "two@@example.com",
        "a@b@c.d",
    ] {
        assert!(!is_valid_email(bad), "{bad} should be rejected");
    }
}

#[test]
fn test_honeypot_marks_bot_traffic() {
    let mut s = submission();
    assert!(!s.is_trap());

    s.gotcha = "https://spam.example".to_string();
    assert!(s.is_trap());

    // A trap submission is otherwise well-formed; the drop decision is
    // separate from validation.
    assert_eq!(s.validate(), Ok(()));
}

#[test]
fn test_honeypot_field_deserializes_from_underscore_name() {
    let s: ContactSubmission = serde_json::from_str(
        r#"{"name":"n","email":"n@e.x","subject":"s","message":"m","_gotcha":"bot"}"#,
    )
    .unwrap();
    assert!(s.is_trap());

    // Absent honeypot defaults to empty.
    let s: ContactSubmission =
        serde_json::from_str(r#"{"name":"n","email":"n@e.x","subject":"s","message":"m"}"#)
            .unwrap();
    assert!(!s.is_trap());
}
