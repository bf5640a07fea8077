#![cfg(not(coverage))]

use super::*;
use crate::utils::storage;
use chrono::NaiveDate;
use httpmock::prelude::*;
use httpmock::prelude::HttpMockRequest;
use serde_json::json;

fn user_json(id: &str, role: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Aina Rahman",
        "email": "aina@espoint.test",
        "role": role
    })
}

fn service_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Recording Studio",
        "description": "Soundproof room",
        "category": "studio",
        "price": 120.0,
        "capacity": 4,
        "is_active": true,
        "image_url": null
    })
}

fn member_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Hafiz",
        "email": "hafiz@espoint.test",
        "phone": "+60111111111",
        "role": "regular",
        "created_at": "2026-01-01T00:00:00Z"
    })
}

fn body_mentions(req: &HttpMockRequest, needle: &str) -> bool {
    req.body
        .as_deref()
        .map(|body| String::from_utf8_lossy(body).contains(needle))
        .unwrap_or(false)
}

fn booking_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "service_id": "svc-1",
        "service_name": "Recording Studio",
        "client_name": "Nurul",
        "client_email": "nurul@example.com",
        "client_phone": "+60123456789",
        "booking_date": "2026-05-02",
        "start_time": "10:00",
        "end_time": "12:00",
        "status": status,
        "amount": 240.0,
        "notes": null,
        "created_at": "2026-04-20T09:00:00Z"
    })
}

fn content_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "service_id": "svc-1",
        "title": "Studio tour",
        "description": null,
        "media_url": "https://cdn.espoint.test/tour.mp4",
        "media_type": "video/mp4",
        "created_at": "2026-03-01T00:00:00Z"
    })
}

fn sign_in(token: &str) {
    storage::save_session(&Session {
        token: token.into(),
        user: SessionUser {
            id: "m1".into(),
            name: "Aina Rahman".into(),
            email: "aina@espoint.test".into(),
            role: MemberRole::Admin,
        },
    })
    .unwrap();
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn login_persists_session_and_logout_clears_it() {
    storage::clear_session();
    let server = MockServer::start_async().await;
    let login_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/auth/login")
                .json_body(json!({ "email": "aina@espoint.test", "password": "secret123" }));
            then.status(200)
                .json_body(json!({ "token": "tok-login", "user": user_json("m1", "admin") }));
        })
        .await;
    let logout_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/auth/logout")
                .header("authorization", "Bearer tok-login");
            then.status(204);
        })
        .await;

    let client = api_client(&server);
    let response = client
        .login(LoginRequest {
            email: "aina@espoint.test".into(),
            password: "secret123".into(),
        })
        .await
        .unwrap();
    assert_eq!(response.user.role, MemberRole::Admin);
    login_mock.assert_async().await;

    let stored = storage::load_session().unwrap();
    assert_eq!(stored.token, "tok-login");
    assert_eq!(stored.user.name, "Aina Rahman");

    client.logout().await.unwrap();
    logout_mock.assert_async().await;
    assert!(storage::load_session().is_none());
}

#[tokio::test]
async fn login_failure_surfaces_backend_message() {
    storage::clear_session();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(400)
                .json_body(json!({ "message": "Invalid email or password" }));
        })
        .await;

    let err = api_client(&server)
        .login(LoginRequest {
            email: "aina@espoint.test".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error, "Invalid email or password");
    assert_eq!(err.code, "VALIDATION_ERROR");
    assert!(storage::load_session().is_none());
}

#[tokio::test]
async fn logout_clears_session_even_when_request_fails() {
    sign_in("tok-stale");
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/logout");
            then.status(500).json_body(json!({ "error": "boom" }));
        })
        .await;

    let err = api_client(&server).logout().await.unwrap_err();
    assert_eq!(err.error, "boom");
    assert!(storage::load_session().is_none());
}

#[tokio::test]
async fn authenticated_calls_require_a_session() {
    storage::clear_session();
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/services");
            then.status(200).json_body(json!([]));
        })
        .await;

    let err = api_client(&server).list_services().await.unwrap_err();
    assert!(err.is_unauthorized());
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn unauthorized_response_clears_session() {
    sign_in("tok-expired");
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/members");
            then.status(401)
                .json_body(json!({ "error": "Token expired", "code": "UNAUTHORIZED" }));
        })
        .await;

    let err = api_client(&server).list_members().await.unwrap_err();
    assert_eq!(err.code, "UNAUTHORIZED");
    assert_eq!(err.error, "Token expired");
    assert!(storage::load_session().is_none());
}

#[tokio::test]
async fn service_endpoints_succeed() {
    sign_in("tok-1");
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/services")
                .header("authorization", "Bearer tok-1");
            then.status(200).json_body(json!([service_json("svc-1")]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/services").json_body(json!({
                "name": "Recording Studio",
                "description": null,
                "category": "studio",
                "price": 120.0,
                "capacity": 4,
                "is_active": true
            }));
            then.status(201).json_body(service_json("svc-2"));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/services/svc-2");
            then.status(200).json_body(service_json("svc-2"));
        })
        .await;
    let delete_mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/services/svc-2");
            then.status(204);
        })
        .await;

    let client = api_client(&server);
    let services = client.list_services().await.unwrap();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].capacity, Some(4));

    let payload = ServicePayload {
        name: "Recording Studio".into(),
        description: None,
        category: Some("studio".into()),
        price: 120.0,
        capacity: Some(4),
        is_active: true,
    };
    assert_eq!(client.create_service(&payload).await.unwrap().id, "svc-2");
    assert_eq!(
        client.update_service("svc-2", &payload).await.unwrap().id,
        "svc-2"
    );
    client.delete_service("svc-2").await.unwrap();
    delete_mock.assert_async().await;
}

#[tokio::test]
async fn member_endpoints_succeed() {
    sign_in("tok-1");
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/members");
            then.status(200)
                .json_body(json!([member_json("m2"), member_json("m3")]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/members").json_body(json!({
                "name": "Hafiz",
                "email": "hafiz@espoint.test",
                "role": "regular",
                "password": "longenough"
            }));
            then.status(201).json_body(member_json("m4"));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/members/m4").json_body(json!({
                "name": "Hafiz",
                "email": "hafiz@espoint.test",
                "phone": "+60111111111",
                "role": "admin"
            }));
            then.status(200).json_body(member_json("m4"));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/members/m4");
            then.status(200).json_body(json!({}));
        })
        .await;

    let client = api_client(&server);
    assert_eq!(client.list_members().await.unwrap().len(), 2);
    let created = client
        .create_member(&CreateMember {
            name: "Hafiz".into(),
            email: "hafiz@espoint.test".into(),
            phone: None,
            role: MemberRole::Regular,
            password: "longenough".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, "m4");
    client
        .update_member(
            "m4",
            &UpdateMember {
                name: "Hafiz".into(),
                email: "hafiz@espoint.test".into(),
                phone: Some("+60111111111".into()),
                role: MemberRole::Admin,
                password: None,
            },
        )
        .await
        .unwrap();
    client.delete_member("m4").await.unwrap();
}

#[tokio::test]
async fn booking_endpoints_succeed() {
    sign_in("tok-1");
    let server = MockServer::start_async().await;
    let list_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/bookings")
                .query_param("status", "pending")
                .query_param("service_id", "svc-1");
            then.status(200)
                .json_body(json!([booking_json("b1", "pending")]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/bookings");
            then.status(201).json_body(booking_json("b2", "pending"));
        })
        .await;
    let status_mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/bookings/b2/status")
                .json_body(json!({ "status": "confirmed" }));
            then.status(200).json_body(booking_json("b2", "confirmed"));
        })
        .await;

    let client = api_client(&server);
    let bookings = client
        .list_bookings(&BookingQuery {
            status: Some(BookingStatus::Pending),
            service_id: Some("svc-1".into()),
            from: None,
            to: None,
        })
        .await
        .unwrap();
    list_mock.assert_async().await;
    assert_eq!(bookings[0].status, BookingStatus::Pending);
    assert_eq!(bookings[0].amount, Some(240.0));

    let created = client
        .create_booking(&CreateBooking {
            service_id: "svc-1".into(),
            client_name: "Nurul".into(),
            client_email: "nurul@example.com".into(),
            client_phone: "+60123456789".into(),
            booking_date: NaiveDate::from_ymd_opt(2026, 5, 2).unwrap(),
            start_time: Some("10:00".into()),
            end_time: Some("12:00".into()),
            notes: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, "b2");

    let updated = client
        .update_booking_status("b2", BookingStatus::Pending, BookingStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(updated.status, BookingStatus::Confirmed);
    status_mock.assert_async().await;
}

#[tokio::test]
async fn invalid_status_transition_is_rejected_before_sending() {
    sign_in("tok-1");
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/bookings/b1/status");
            then.status(200).json_body(booking_json("b1", "paid"));
        })
        .await;

    let err = api_client(&server)
        .update_booking_status("b1", BookingStatus::Pending, BookingStatus::Paid)
        .await
        .unwrap_err();
    assert_eq!(err.code, "VALIDATION_ERROR");
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn content_endpoints_succeed() {
    sign_in("tok-1");
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/services/svc-1/contents");
            then.status(200).json_body(json!([content_json("c1")]));
        })
        .await;
    let upload_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/contents")
                .header_exists("content-type")
                .body_contains("name=\"service_id\"")
                .body_contains("name=\"title\"")
                .body_contains("name=\"file\"")
                .body_contains("filename=\"tour.mp4\"")
                .matches(|req| !body_mentions(req, "name=\"description\""));
            then.status(201).json_body(content_json("c2"));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/contents/c2");
            then.status(204);
        })
        .await;

    let client = api_client(&server);
    let contents = client.list_contents("svc-1").await.unwrap();
    assert_eq!(contents[0].media_kind(), MediaKind::Video);

    let uploaded = client
        .upload_content(&ContentUpload {
            service_id: "svc-1".into(),
            title: "Studio tour".into(),
            description: None,
            file: UploadFile {
                name: "tour.mp4".into(),
                mime_type: "video/mp4".into(),
                bytes: vec![0, 1, 2, 3],
            },
        })
        .await
        .unwrap();
    assert_eq!(uploaded.id, "c2");
    upload_mock.assert_async().await;
    client.delete_content("c2").await.unwrap();
}

#[tokio::test]
async fn upload_sends_description_when_present() {
    sign_in("tok-1");
    let server = MockServer::start_async().await;
    let upload_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/contents")
                .body_contains("name=\"description\"")
                .body_contains("Ten minute walkthrough")
                .body_contains("name=\"file\"")
                .body_contains("filename=\"menu.pdf\"");
            then.status(201).json_body(content_json("c3"));
        })
        .await;

    let uploaded = api_client(&server)
        .upload_content(&ContentUpload {
            service_id: "svc-1".into(),
            title: "Menu".into(),
            description: Some("Ten minute walkthrough".into()),
            file: UploadFile {
                name: "menu.pdf".into(),
                mime_type: "application/pdf".into(),
                bytes: b"%PDF-1.4".to_vec(),
            },
        })
        .await
        .unwrap();
    assert_eq!(uploaded.id, "c3");
    upload_mock.assert_async().await;
}

#[tokio::test]
async fn dashboard_endpoints_pass_date_range() {
    sign_in("tok-1");
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/dashboard/counts");
            then.status(200).json_body(json!({
                "services": 3,
                "members": 5,
                "bookings": 12
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/dashboard/amounts")
                .query_param("from", "2026-01-01")
                .query_param("to", "2026-01-31");
            then.status(200).json_body(json!({
                "total_amount": 1500.0,
                "paid_amount": 900.0,
                "pending_amount": 600.0,
                "currency": "MYR"
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/bookings/counts")
                .query_param("from", "2026-01-01");
            then.status(200).json_body(json!({
                "2026-01-05": { "pending": { "svc-1": 2 }, "paid": { "svc-2": 1 } }
            }));
        })
        .await;

    let client = api_client(&server);
    let counts = client.get_counts().await.unwrap();
    assert_eq!(counts.bookings, 12);
    assert_eq!(counts.pending_bookings, 0);

    let january = DateRange::new(
        NaiveDate::from_ymd_opt(2026, 1, 1),
        NaiveDate::from_ymd_opt(2026, 1, 31),
    );
    let amounts = client.get_amounts(&january).await.unwrap();
    assert_eq!(amounts.paid_amount, 900.0);

    let nested = client.get_booking_counts(&january).await.unwrap();
    assert_eq!(nested["2026-01-05"]["pending"]["svc-1"], 2);
}

#[tokio::test]
async fn malformed_success_body_is_reported() {
    sign_in("tok-1");
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/dashboard/counts");
            then.status(200).body("not json");
        })
        .await;

    let err = api_client(&server).get_counts().await.unwrap_err();
    assert_eq!(err.code, "UNKNOWN");
    assert!(err.error.starts_with("Failed to parse response"));
}

#[tokio::test]
async fn unreachable_server_reports_request_failed() {
    sign_in("tok-1");
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
    let err = client.list_services().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
}
