use super::*;

// =============================================================
// Lead
// =============================================================

#[test]
fn lead_deserializes_backend_payload_and_ignores_extra_fields() {
    let lead: Lead = serde_json::from_value(serde_json::json!({
        "id": 7,
        "owner_id": 1,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "company": "Engines Ltd",
        "email": "ada@example.com",
        "note": "call back",
        "date_created": "2024-01-01T09:00:00",
        "date_last_updated": "2024-01-02T10:30:00.123456"
    }))
    .unwrap();

    assert_eq!(lead.id, 7);
    assert_eq!(lead.company, "Engines Ltd");
    assert_eq!(lead.date_last_updated, "2024-01-02T10:30:00.123456");
}

#[test]
fn lead_defaults_missing_company_and_note() {
    let lead: Lead = serde_json::from_value(serde_json::json!({
        "id": 1,
        "first_name": "A",
        "last_name": "B",
        "email": "a@b.com",
        "date_last_updated": "2024-01-02T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(lead.company, "");
    assert_eq!(lead.note, "");
}

#[test]
fn lead_draft_copies_editable_fields() {
    let lead = Lead {
        id: 3,
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        company: "C".to_owned(),
        email: "a@b.com".to_owned(),
        note: "n".to_owned(),
        date_last_updated: "2024-01-02T00:00:00Z".to_owned(),
    };
    let draft = LeadDraft::from(&lead);
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        serde_json::json!({
            "first_name": "A",
            "last_name": "B",
            "company": "C",
            "email": "a@b.com",
            "note": "n"
        })
    );
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn token_grant_reads_access_token() {
    let grant: TokenGrant =
        serde_json::from_str(r#"{"access_token":"abc.def","token_type":"Bearer"}"#).unwrap();
    assert_eq!(grant.access_token(), "abc.def");
    assert_eq!(grant.token_type(), "Bearer");
}

#[test]
fn token_grant_defaults_token_type() {
    let grant: TokenGrant = serde_json::from_str(r#"{"access_token":"t"}"#).unwrap();
    assert_eq!(grant.token_type(), "bearer");
}

#[test]
fn token_grant_requires_access_token() {
    assert!(serde_json::from_str::<TokenGrant>(r#"{"detail":"nope"}"#).is_err());
}

#[test]
fn credentials_serialize_email_and_password() {
    let body = Credentials { email: "a@b.com".to_owned(), password: "hunter2".to_owned() };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "hunter2" })
    );
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_string_detail() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"Email already registered"}"#).unwrap();
    assert_eq!(body.message().as_deref(), Some("Email already registered"));
}

#[test]
fn error_body_validation_list_uses_first_msg() {
    let body: ErrorBody = serde_json::from_str(
        r#"{"detail":[{"loc":["body","email"],"msg":"field required","type":"missing"}]}"#,
    )
    .unwrap();
    assert_eq!(body.message().as_deref(), Some("field required"));
}

#[test]
fn error_body_without_detail_has_no_message() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message(), None);

    let blank: ErrorBody = serde_json::from_str(r#"{"detail":"  "}"#).unwrap();
    assert_eq!(blank.message(), None);
}
