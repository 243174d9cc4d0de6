use super::*;

#[test]
fn credentials_serialize_as_backend_expects() {
    let body = Credentials { username: "alice".to_owned(), password: "pw".to_owned() };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "username": "alice", "password": "pw" }));
}

#[test]
fn registration_serializes_all_fields() {
    let body = Registration {
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "secret".to_owned(),
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["email"], "bob@example.com");
    assert_eq!(json["username"], "bob");
}

#[test]
fn token_response_ignores_extra_fields() {
    let resp: TokenResponse = serde_json::from_str(r#"{"ok":true,"token":"abc"}"#).unwrap();
    assert_eq!(resp.token, "abc");
}

#[test]
fn job_created_defaults_ok_to_false() {
    let resp: JobCreated = serde_json::from_str(r#"{"job_id":"01ARZ3NDEKTSV4RRFFQ69G5FAV"}"#).unwrap();
    assert!(!resp.ok);
    assert_eq!(resp.job_id, "01ARZ3NDEKTSV4RRFFQ69G5FAV");
}

// =============================================================
// JobStatus
// =============================================================

#[test]
fn job_status_decodes_image_list() {
    let status: JobStatus =
        serde_json::from_str(r#"{"ok":true,"pk":"job-1","images":[{"pk":"img-a"},{"pk":"img-b"}]}"#).unwrap();
    assert!(status.ok);
    assert_eq!(status.pk, "job-1");
    let ids: Vec<&str> = status.images.iter().map(|i| i.pk.as_str()).collect();
    assert_eq!(ids, ["img-a", "img-b"]);
}

#[test]
fn job_status_null_or_missing_images_is_empty() {
    let null: JobStatus = serde_json::from_str(r#"{"ok":true,"pk":"job-1","images":null}"#).unwrap();
    assert!(null.images.is_empty());
    let missing: JobStatus = serde_json::from_str(r#"{"pk":"job-2"}"#).unwrap();
    assert!(missing.images.is_empty());
    assert!(!missing.ok);
}

#[test]
fn job_status_requires_pk() {
    assert!(serde_json::from_str::<JobStatus>(r#"{"ok":true,"images":[]}"#).is_err());
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_prefers_error_field() {
    let body: ErrorBody = serde_json::from_str(r#"{"ok":false,"error":"Wrong username or password."}"#).unwrap();
    assert_eq!(body.message().as_deref(), Some("Wrong username or password."));
}

#[test]
fn error_body_joins_non_field_errors() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"non_field_errors":["Unable to log in.","Try again."]}"#).unwrap();
    assert_eq!(body.message().as_deref(), Some("Unable to log in.\nTry again."));
}

#[test]
fn error_body_without_message_is_none() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message(), None);
    let blank = ErrorBody { error: Some("  ".to_owned()), non_field_errors: vec![] };
    assert_eq!(blank.message(), None);
}

// =============================================================
// JobKind
// =============================================================

#[test]
fn job_kind_wire_values() {
    assert_eq!(JobKind::Original.as_str(), "original");
    assert_eq!(JobKind::SquareOriginal.as_str(), "square_original");
    assert_eq!(JobKind::SquareSmall.as_str(), "square_small");
    assert_eq!(JobKind::AllThree.as_str(), "all_three");
}

#[test]
fn job_kind_serde_matches_as_str() {
    for kind in JobKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.as_str()));
    }
}

#[test]
fn job_kind_parse() {
    assert_eq!("square_small".parse::<JobKind>(), Ok(JobKind::SquareSmall));
    assert_eq!("thumbnail".parse::<JobKind>(), Err("Not valid job kind: thumbnail".to_owned()));
}

#[test]
fn job_kind_default_is_original() {
    assert_eq!(JobKind::default(), JobKind::Original);
}
