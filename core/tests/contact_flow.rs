use folio_core::{
    begin, finish, FieldName, FormFields, Severity, SubmitPlan, TransportError, ValidationError,
    CONTACT_RECIPIENT,
};

fn filled() -> FormFields {
    FormFields::new("A", "a@b.co", "S", "M")
}

#[test]
fn any_empty_field_rejects_without_network_plan() {
    for field in FieldName::ALL {
        let mut fields = filled();
        match field {
            FieldName::Name => fields.name.clear(),
            FieldName::Email => fields.email.clear(),
            FieldName::Subject => fields.subject.clear(),
            FieldName::Message => fields.message.clear(),
        }
        assert_eq!(
            begin(&fields, "https://forms.example/send"),
            Err(ValidationError::MissingField(field))
        );
    }
}

#[test]
fn malformed_email_rejects_before_endpoint_is_considered() {
    let mut fields = filled();
    fields.email = "a@b".to_string();
    assert_eq!(
        begin(&fields, "https://forms.example/send"),
        Err(ValidationError::InvalidEmail)
    );
    assert_eq!(
        ValidationError::InvalidEmail.user_message(),
        "Please enter a valid email address"
    );
}

#[test]
fn empty_endpoint_goes_straight_to_mail_client() {
    let plan = begin(&filled(), "").expect("valid fields");
    let SubmitPlan::Fallback(completion) = plan else {
        panic!("expected fallback plan");
    };
    assert_eq!(completion.severity, Severity::Info);
    assert!(completion.clear_form);
    let mailto = completion.mailto.expect("fallback mailto");
    assert_eq!(mailto.recipient, CONTACT_RECIPIENT);
    assert_eq!(mailto.subject, "S");
    assert_eq!(mailto.body, "Name: A\nEmail: a@b.co\n\nM");
}

#[test]
fn whitespace_endpoint_counts_as_missing() {
    let plan = begin(&filled(), "   ").expect("valid fields");
    assert!(matches!(plan, SubmitPlan::Fallback(_)));
}

#[test]
fn configured_endpoint_posts_json_payload() {
    let plan = begin(&filled(), " https://forms.example/send ").expect("valid fields");
    let SubmitPlan::Post { endpoint, payload } = plan else {
        panic!("expected post plan");
    };
    assert_eq!(endpoint, "https://forms.example/send");
    let body: serde_json::Value =
        serde_json::from_str(&payload.to_json().expect("json body")).expect("parse body");
    assert_eq!(
        body,
        serde_json::json!({"name": "A", "email": "a@b.co", "subject": "S", "message": "M"})
    );
}

#[test]
fn ok_response_clears_and_thanks() {
    let completion = finish(&filled(), TransportError::check_status(200, ""));
    assert_eq!(completion.severity, Severity::Success);
    assert!(completion.clear_form);
    assert!(completion.mailto.is_none());
    assert!(completion.failure.is_none());
}

#[test]
fn server_error_falls_back_without_clearing() {
    let completion = finish(&filled(), TransportError::check_status(500, "boom"));
    assert_eq!(completion.severity, Severity::Error);
    assert!(!completion.clear_form);
    assert!(completion.mailto.is_some());
    assert_eq!(
        completion.failure.map(|err| err.to_string()),
        Some("submission failed with status 500: boom".to_string())
    );
}

#[test]
fn network_error_matches_server_error_path() {
    let rejected = finish(&filled(), TransportError::check_status(404, ""));
    let unreachable = finish(
        &filled(),
        Err(TransportError::Network("Failed to fetch".to_string())),
    );
    assert_eq!(rejected.severity, unreachable.severity);
    assert_eq!(rejected.clear_form, unreachable.clear_form);
    assert_eq!(rejected.mailto, unreachable.mailto);
}

#[test]
fn any_2xx_is_success() {
    assert!(TransportError::check_status(204, "").is_ok());
    assert!(TransportError::check_status(299, "").is_ok());
    assert!(TransportError::check_status(302, "").is_err());
}
