use crate::common;

use serde_json::json;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn test_create_professional() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let app = clinica::presentation::router::app(common::create_test_app_state(pool.clone()));

    let (status, json) = common::send(
        &app,
        "POST",
        "/api/v1/professionals/",
        Some(common::professional_payload("Dr. A")),
    )
    .await;

    assert_eq!(status, 201);
    assert!(json["uuid"].is_string());
    assert_eq!(json["social_name"], "Dr. A");
    assert_eq!(json["profession"], "X");
    assert_eq!(json["address"]["zip_code"], "12345678");
    assert_eq!(json["address"]["number"], serde_json::Value::Null);
    assert_eq!(json["contacts"], json!([{"kind": "email", "value": "a@b.com"}]));
    // Timestamps only on retrieve
    assert!(json.get("created_at").is_none());

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_create_then_retrieve_round_trips() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let app = clinica::presentation::router::app(common::create_test_app_state(pool.clone()));
    let mut payload = common::professional_payload("Dr. A");
    payload["contacts"] = json!([
        {"kind": "phone", "value": "1133334444"},
        {"kind": "email", "value": "a@b.com"},
        {"kind": "whatsapp", "value": "11999998888"}
    ]);

    let (_, created) = common::send(&app, "POST", "/api/v1/professionals/", Some(payload)).await;
    let uri = format!("/api/v1/professionals/{}/", created["uuid"].as_str().unwrap());
    let (status, json) = common::send(&app, "GET", &uri, None).await;

    assert_eq!(status, 200);
    assert_eq!(json["uuid"], created["uuid"]);
    assert!(json["address"].is_object());
    let kinds: Vec<&str> = json["contacts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["email", "phone", "whatsapp"]);
    assert!(json["created_at"].is_string());
    assert!(json["updated_at"].is_string());

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_create_professional_null_fields_are_aggregated() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let app = clinica::presentation::router::app(common::create_test_app_state(pool.clone()));

    let (status, json) = common::send(
        &app,
        "POST",
        "/api/v1/professionals/",
        Some(json!({
            "social_name": "Dr. A",
            "profession": null,
            "address": null,
            "contacts": null
        })),
    )
    .await;

    assert_eq!(status, 400);
    assert!(json.get("detail").is_none());
    assert!(json.get("social_name").is_none());
    assert_eq!(json["profession"], json!(["Profession is required."]));
    assert_eq!(json["address"], json!(["Address is required."]));
    assert_eq!(json["contacts"], json!(["At least one contact is required."]));

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_create_professional_missing_fields() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let app = clinica::presentation::router::app(common::create_test_app_state(pool.clone()));

    let mut payload = common::professional_payload("Dr. A");
    payload.as_object_mut().unwrap().remove("address");
    let (status, json) = common::send(&app, "POST", "/api/v1/professionals/", Some(payload)).await;

    assert_eq!(status, 400);
    assert_eq!(json, json!({"address": ["Address is required."]}));

    let mut payload = common::professional_payload("Dr. A");
    payload["contacts"] = json!([]);
    let (status, json) = common::send(&app, "POST", "/api/v1/professionals/", Some(payload)).await;

    assert_eq!(status, 400);
    assert_eq!(json, json!({"contacts": ["At least one contact is required."]}));

    let (status, json) = common::send(&app, "POST", "/api/v1/professionals/", Some(json!({}))).await;

    assert_eq!(status, 400);
    for field in ["social_name", "profession", "address", "contacts"] {
        assert!(json[field].is_array(), "missing error for {}", field);
    }

    let (_, list) = common::send(&app, "GET", "/api/v1/professionals/", None).await;
    assert_eq!(list["count"], 0);

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_create_professional_invalid_zip_code() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let app = clinica::presentation::router::app(common::create_test_app_state(pool.clone()));
    let mut payload = common::professional_payload("Dr. A");
    payload["address"]["zip_code"] = json!("123");

    let (status, json) = common::send(&app, "POST", "/api/v1/professionals/", Some(payload)).await;

    assert_eq!(status, 400);
    assert_eq!(
        json["address"]["zip_code"],
        json!(["Zip code must contain exactly 8 numeric digits."])
    );

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_malformed_body_is_bad_request() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let app = clinica::presentation::router::app(common::create_test_app_state(pool.clone()));

    let (status, json) = common::send(
        &app,
        "POST",
        "/api/v1/professionals/",
        Some(json!({"social_name": 42})),
    )
    .await;

    assert_eq!(status, 400);
    assert!(json["detail"].is_string());
}

#[tokio::test]
#[serial]
async fn test_list_professionals_paginates() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let app = clinica::presentation::router::app(common::create_test_app_state(pool.clone()));
    for i in 0..21 {
        common::create_professional(&app, &format!("Dr. {:02}", i)).await;
    }

    let (status, first) = common::send(&app, "GET", "/api/v1/professionals/", None).await;
    assert_eq!(status, 200);
    assert_eq!(first["count"], 21);
    assert_eq!(first["results"].as_array().unwrap().len(), 20);
    assert_eq!(first["results"][0]["social_name"], "Dr. 00");
    assert_eq!(first["next"], "/api/v1/professionals/?page=2");
    assert_eq!(first["previous"], serde_json::Value::Null);

    let (status, second) = common::send(&app, "GET", "/api/v1/professionals/?page=2", None).await;
    assert_eq!(status, 200);
    assert_eq!(second["results"].as_array().unwrap().len(), 1);
    assert_eq!(second["results"][0]["social_name"], "Dr. 20");
    assert_eq!(second["next"], serde_json::Value::Null);
    assert_eq!(second["previous"], "/api/v1/professionals/");

    let (status, json) = common::send(&app, "GET", "/api/v1/professionals/?page=3", None).await;
    assert_eq!(status, 404);
    assert_eq!(json, json!({"detail": "Invalid page."}));

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_empty_list_first_page_is_valid() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let app = clinica::presentation::router::app(common::create_test_app_state(pool.clone()));

    let (status, json) = common::send(&app, "GET", "/api/v1/professionals/?page=1", None).await;

    assert_eq!(status, 200);
    assert_eq!(
        json,
        json!({"count": 0, "next": null, "previous": null, "results": []})
    );
}

#[tokio::test]
#[serial]
async fn test_update_replaces_address_and_contacts() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let app = clinica::presentation::router::app(common::create_test_app_state(pool.clone()));
    let uuid = common::create_professional(&app, "Dr. A").await;
    let uri = format!("/api/v1/professionals/{}/", uuid);

    let (status, json) = common::send(
        &app,
        "PUT",
        &uri,
        Some(json!({
            "social_name": "Dr. B",
            "profession": "Y",
            "address": {"street": "New", "number": "10", "city": "C2", "state": "S2", "zip_code": "87654321"},
            "contacts": [
                {"kind": "linkedin", "value": "in/b"},
                {"kind": "mobile", "value": "11988887777"}
            ]
        })),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(json["uuid"], uuid.as_str());
    assert_eq!(json["social_name"], "Dr. B");
    assert_eq!(json["address"]["street"], "New");
    assert_eq!(json["address"]["number"], "10");
    assert_eq!(json["contacts"].as_array().unwrap().len(), 2);

    // Stored rows were replaced, not merged
    let addresses: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM addresses")
        .fetch_one(&pool)
        .await
        .unwrap();
    let emails: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE kind = 'email'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(addresses, 1);
    assert_eq!(emails, 0);

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_patch_requires_full_payload() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let app = clinica::presentation::router::app(common::create_test_app_state(pool.clone()));
    let uuid = common::create_professional(&app, "Dr. A").await;
    let uri = format!("/api/v1/professionals/{}/", uuid);

    let (status, json) =
        common::send(&app, "PATCH", &uri, Some(json!({"social_name": "Dr. B"}))).await;

    assert_eq!(status, 400);
    assert!(json["address"].is_array());
    assert!(json["contacts"].is_array());

    let (_, stored) = common::send(&app, "GET", &uri, None).await;
    assert_eq!(stored["social_name"], "Dr. A");

    let mut payload = common::professional_payload("Dr. B");
    payload["profession"] = json!("Y");
    let (status, json) = common::send(&app, "PATCH", &uri, Some(payload)).await;
    assert_eq!(status, 200);
    assert_eq!(json["profession"], "Y");

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_unknown_or_invalid_identifier_is_not_found() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let app = clinica::presentation::router::app(common::create_test_app_state(pool.clone()));
    let missing = format!("/api/v1/professionals/{}/", uuid::Uuid::new_v4());
    let payload = common::professional_payload("Dr. A");

    for uri in [missing.as_str(), "/api/v1/professionals/invalid-uuid/"] {
        let (status, json) = common::send(&app, "GET", uri, None).await;
        assert_eq!(status, 404);
        assert_eq!(json, json!({"detail": "Not found."}));

        let (status, _) = common::send(&app, "PUT", uri, Some(payload.clone())).await;
        assert_eq!(status, 404);

        let (status, _) = common::send(&app, "DELETE", uri, None).await;
        assert_eq!(status, 404);
    }
}

#[tokio::test]
#[serial]
async fn test_delete_professional_cascades() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let app = clinica::presentation::router::app(common::create_test_app_state(pool.clone()));
    let uuid = common::create_professional(&app, "Dr. A").await;
    let (status, _) = common::send(
        &app,
        "POST",
        "/api/v1/appointments/",
        Some(json!({"date": "2025-06-01T14:30:00Z", "professional_uuid": uuid})),
    )
    .await;
    assert_eq!(status, 201);

    let uri = format!("/api/v1/professionals/{}/", uuid);
    let (status, body) = common::send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, 204);
    assert_eq!(body, serde_json::Value::Null);

    let (status, _) = common::send(&app, "GET", &uri, None).await;
    assert_eq!(status, 404);

    for table in ["addresses", "contacts", "appointments"] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0, "{} left behind", table);
    }

    common::cleanup_test_db(&pool).await;
}
