mod support;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use support::{
    OWNER_EMAIL, OWNER_PASSWORD, TEST_API_KEY, authorized, body_bytes, body_json, json_request,
    test_app, with_bearer,
};

async fn sign_in(app: &axum::Router) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            "/users",
            json!({ "email": OWNER_EMAIL, "password": OWNER_PASSWORD }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

fn plain_get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn root_is_public_and_reports_database_state() {
    let (app, _) = test_app().await;

    let response = app.oneshot(plain_get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "rental-api");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "unavailable");
}

#[tokio::test]
async fn docs_are_public() {
    let (app, _) = test_app().await;

    let response = app.clone().oneshot(plain_get("/docs-json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"]["/users"].is_object());
    assert!(json["paths"]["/rents/{id}/end"].is_object());
    assert!(json["components"]["securitySchemes"]["api_key"].is_object());

    let response = app.oneshot(plain_get("/docs/")).await.unwrap();
    assert_ne!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn other_paths_require_the_api_key() {
    let (app, _) = test_app().await;

    let response = app.clone().oneshot(plain_get("/tenants")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["status_code"], 401);
    assert_eq!(json["message"], "Invalid or missing API key");

    let wrong_key = Request::builder()
        .method("PATCH")
        .uri("/users")
        .header("x-api-key", "not-the-key")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "email": OWNER_EMAIL, "password": OWNER_PASSWORD }).to_string(),
        ))
        .unwrap();
    let response = app.oneshot(wrong_key).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_needs_only_the_api_key() {
    let (app, _) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("PATCH", "/users", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].is_array());

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            "/users",
            json!({ "email": OWNER_EMAIL, "password": "Wrong#123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let token = sign_in(&app).await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn user_routes_require_a_bearer_token() {
    let (app, state) = test_app().await;
    let owner = state.users_service.find_all().await.unwrap().remove(0);

    for (method, uri) in [
        ("GET", "/users".to_string()),
        ("GET", format!("/users/{}", owner.id)),
        ("PUT", format!("/users/{}", owner.id)),
        ("DELETE", format!("/users/{}", owner.id)),
    ] {
        let response = app
            .clone()
            .oneshot(authorized(method, &uri, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Missing bearer token");
    }

    let response = app
        .oneshot(authorized("GET", "/users", Some("not.a.jwt")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid or expired bearer token");
}

#[tokio::test]
async fn user_handlers_return_the_service_output() {
    let (app, state) = test_app().await;
    let token = sign_in(&app).await;

    let response = app
        .clone()
        .oneshot(authorized("GET", "/users", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let expected = serde_json::to_value(state.users_service.find_all().await.unwrap()).unwrap();
    assert_eq!(body_json(response).await, expected);

    let owner_id = expected[0]["id"].as_str().unwrap().to_string();
    let response = app
        .clone()
        .oneshot(authorized("GET", &format!("/users/{}", owner_id), Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, expected[0]);

    let update = with_bearer(
        json_request(
            "PUT",
            &format!("/users/{}", owner_id),
            json!({ "name": "Ibu Kost", "phone": "+6281234567890" }),
        ),
        &token,
    );
    let response = app.clone().oneshot(update).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Ibu Kost");
    assert_eq!(json["email"], OWNER_EMAIL);

    let response = app
        .clone()
        .oneshot(authorized("DELETE", &format!("/users/{}", owner_id), Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], owner_id.as_str());
    assert_eq!(json["message"], "User successfully deleted");

    let response = app
        .oneshot(authorized("GET", &format!("/users/{}", owner_id), Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_ids_are_bad_requests() {
    let (app, _) = test_app().await;
    let token = sign_in(&app).await;

    let response = app
        .oneshot(authorized("GET", "/users/not-a-uuid", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status_code"], 400);
}

#[tokio::test]
async fn feature_routes_are_guarded() {
    let (app, _) = test_app().await;

    for (method, uri) in [
        ("GET", "/tenants".to_string()),
        ("GET", "/roomtypes".to_string()),
        ("GET", "/facilities".to_string()),
        ("GET", "/rooms".to_string()),
        ("GET", "/rents".to_string()),
        ("PATCH", format!("/rents/{}/end", Uuid::new_v4())),
        ("GET", "/finances".to_string()),
        ("GET", "/reports/summary".to_string()),
    ] {
        let response = app
            .clone()
            .oneshot(authorized(method, &uri, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{} {}", method, uri);
    }
}

#[tokio::test]
async fn invalid_input_is_rejected_before_storage() {
    let (app, _) = test_app().await;
    let token = sign_in(&app).await;

    let request = with_bearer(
        json_request("POST", "/tenants", json!({ "name": " ", "phone": "12-34" })),
        &token,
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"].as_array().unwrap().len(), 2);

    let request = with_bearer(
        json_request("POST", "/roomtypes", json!({ "name": "Deluxe", "monthly_price": -1 })),
        &token,
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = with_bearer(
        json_request(
            "POST",
            "/finances",
            json!({ "kind": "income", "category": "Rent", "amount": 0 }),
        ),
        &token,
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(authorized(
            "GET",
            "/reports/summary?from=2024-02-01&to=2024-01-01",
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(authorized("GET", "/rooms?status=broken", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn files_are_public_and_round_trip() {
    let (app, _) = test_app().await;

    let boundary = "rental-boundary";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"ktp.PNG\"\r\n\
         Content-Type: image/png\r\n\r\nfake-png-bytes\r\n--{b}--\r\n",
        b = boundary
    );
    let upload = Request::builder()
        .method("POST")
        .uri("/files")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(upload).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let filename = json["filename"].as_str().unwrap().to_string();
    assert!(filename.ends_with(".png"));
    assert_eq!(json["url"], format!("/files/{}", filename));
    assert_eq!(json["size"], 14);

    let response = app
        .clone()
        .oneshot(plain_get(&format!("/files/{}", filename)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"fake-png-bytes");

    let response = app.oneshot(plain_get("/files/missing.png")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn upload_without_file_field_is_a_validation_error() {
    let (app, _) = test_app().await;

    let boundary = "rental-boundary";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{b}--\r\n",
        b = boundary
    );
    let upload = Request::builder()
        .method("POST")
        .uri("/files")
        .header("x-api-key", TEST_API_KEY)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(upload).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"][0], "File is required");
}

#[tokio::test]
async fn oversized_upload_is_payload_too_large() {
    let (app, _) = test_app().await;

    let boundary = "rental-boundary";
    let mut body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"scan.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n",
        b = boundary
    )
    .into_bytes();
    body.extend(std::iter::repeat_n(b'x', 2 * 1024 * 1024));
    body.extend(format!("\r\n--{}--\r\n", boundary).into_bytes());

    let upload = Request::builder()
        .method("POST")
        .uri("/files")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(upload).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json = body_json(response).await;
    assert_eq!(json["status_code"], 413);
}

#[tokio::test]
async fn rent_requires_an_explicit_monthly_price() {
    let (app, _) = test_app().await;
    let token = sign_in(&app).await;
    let base = json!({
        "tenant_id": Uuid::new_v4(),
        "room_id": Uuid::new_v4(),
        "start_date": "2024-01-01",
    });

    let response = app
        .clone()
        .oneshot(with_bearer(json_request("POST", "/rents", base.clone()), &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("monthly_price"));

    let mut negative = base;
    negative["monthly_price"] = json!(-1);
    let response = app
        .oneshot(with_bearer(json_request("POST", "/rents", negative), &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status_code"], 400);
    assert!(json["message"].is_array());
}
