use super::*;

fn envelope_from(json: &str) -> AuthEnvelope {
    serde_json::from_str(json).expect("envelope should deserialize")
}

// =============================================================
// User accessors
// =============================================================

#[test]
fn user_display_name_reads_name_field() {
    let user = User(serde_json::json!({ "id": 1, "name": "A" }));
    assert_eq!(user.display_name(), Some("A"));
}

#[test]
fn user_display_name_missing_is_none() {
    let user = User(serde_json::json!({ "id": 1 }));
    assert_eq!(user.display_name(), None);
}

#[test]
fn user_role_reads_role_field() {
    let user = User(serde_json::json!({ "role": "instructor" }));
    assert_eq!(user.role(), Some("instructor"));
}

#[test]
fn instructor_role_passes_predicate() {
    let user = User(serde_json::json!({ "role": "instructor" }));
    assert!(user.is_instructor());
}

#[test]
fn student_role_fails_instructor_predicate() {
    let user = User(serde_json::json!({ "role": "student" }));
    assert!(!user.is_instructor());
}

#[test]
fn missing_role_fails_instructor_predicate() {
    let user = User(serde_json::json!({ "id": 7 }));
    assert!(!user.is_instructor());
}

#[test]
fn user_preserves_unknown_fields() {
    let raw = serde_json::json!({ "id": 2, "badges": ["rust"], "nested": { "k": 1 } });
    let user: User = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(serde_json::to_value(&user).unwrap(), raw);
}

// =============================================================
// AuthEnvelope -> AuthPayload
// =============================================================

#[test]
fn successful_envelope_yields_payload() {
    let envelope = envelope_from(
        r#"{ "success": true, "accessToken": "T", "user": { "id": 2 } }"#,
    );
    let payload = AuthPayload::try_from(envelope).expect("should convert");
    assert_eq!(payload.access_token, "T");
    assert_eq!(payload.user, User(serde_json::json!({ "id": 2 })));
}

#[test]
fn declared_failure_surfaces_as_rejected() {
    let envelope = envelope_from(r#"{ "success": false, "message": "wrong password" }"#);
    assert_eq!(
        AuthPayload::try_from(envelope),
        Err(ApiError::Rejected("wrong password".to_owned()))
    );
}

#[test]
fn declared_failure_without_message_gets_default_text() {
    let envelope = envelope_from(r#"{ "success": false }"#);
    assert_eq!(
        AuthPayload::try_from(envelope),
        Err(ApiError::Rejected("request rejected".to_owned()))
    );
}

#[test]
fn missing_success_field_defaults_to_failure() {
    let envelope = envelope_from(r#"{ "accessToken": "T", "user": { "id": 2 } }"#);
    assert!(matches!(
        AuthPayload::try_from(envelope),
        Err(ApiError::Rejected(_))
    ));
}

#[test]
fn success_without_token_is_decode_error() {
    let envelope = envelope_from(r#"{ "success": true, "user": { "id": 2 } }"#);
    assert!(matches!(
        AuthPayload::try_from(envelope),
        Err(ApiError::Decode(_))
    ));
}

#[test]
fn success_without_user_is_decode_error() {
    let envelope = envelope_from(r#"{ "success": true, "accessToken": "T" }"#);
    assert!(matches!(
        AuthPayload::try_from(envelope),
        Err(ApiError::Decode(_))
    ));
}
