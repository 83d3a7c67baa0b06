use std::{cell::Cell, rc::Rc};

use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn schedule_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "className": "IoT Lab A",
        "subject": "Embedded Systems",
        "instructor": "Dr. Rahman",
        "room": "R-201",
        "scheduleDate": "2025-03-01T00:00:00.000Z",
        "startTime": "2000-01-01T08:00:00.000Z",
        "endTime": "2000-01-01T10:00:00.000Z",
        "isActive": true
    })
}

fn user_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "username": "nadia",
        "fullName": "Nadia Putri",
        "email": "nadia@example.com",
        "rfidCard": "04A1B2C3",
        "role": "CADET",
        "isActive": true
    })
}

fn roster_json() -> serde_json::Value {
    json!({
        "schedule": schedule_json("s1"),
        "selectedDate": "2025-03-01",
        "attendance": [
            {
                "userId": "u1",
                "userName": "Nadia Putri",
                "userEmail": "nadia@example.com",
                "rfidCard": "04A1B2C3",
                "assignedAt": "2025-02-20T09:00:00.000Z",
                "hasScanned": true,
                "attendance": {
                    "id": "a1",
                    "userId": "u1",
                    "scheduleId": "s1",
                    "status": "LATE",
                    "notes": "",
                    "scanTime": "2025-03-01T08:12:00.000Z",
                    "isLate": true
                }
            },
            {
                "userId": "u2",
                "userName": "Bima",
                "assignedAt": "2025-02-21T09:00:00.000Z",
                "hasScanned": false
            }
        ],
        "stats": {
            "totalAssigned": 2,
            "totalScanned": 1,
            "totalNotScanned": 1,
            "totalPresent": 0,
            "totalLate": 1
        }
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn login_persists_token_and_uses_response_user() {
    let server = MockServer::start_async().await;
    let login = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/auth/login")
                .json_body(json!({ "email": "admin@example.com", "password": "secret1" }));
            then.status(200).json_body(json!({
                "success": true,
                "token": "aaa.bbb.ccc",
                "user": { "id": 1, "username": "admin", "role": "ADMIN" }
            }));
        })
        .await;

    let response = api_client(&server)
        .login(&LoginRequest {
            email: "admin@example.com".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap();

    login.assert_async().await;
    assert_eq!(response.token, "aaa.bbb.ccc");
    assert_eq!(response.user.unwrap().username, "admin");
    assert_eq!(token::load().as_deref(), Some("aaa.bbb.ccc"));
    token::clear();
}

#[tokio::test]
async fn login_falls_back_to_token_user_claim() {
    let server = MockServer::start_async().await;
    let jwt = token::encode_for_test(&json!({
        "user": { "id": "u9", "username": "claimed", "role": "MAIN_TEAM" },
        "exp": 4_000_000_000i64
    }));
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(json!({ "token": jwt.clone() }));
        })
        .await;

    let response = api_client(&server)
        .login(&LoginRequest {
            email: "a@b.co".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap();
    assert_eq!(response.user.unwrap().username, "claimed");
    token::clear();
}

#[tokio::test]
async fn login_401_is_plain_failure_without_session_hooks() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401)
                .json_body(json!({ "success": false, "message": "Invalid credentials" }));
        })
        .await;
    let client = api_client(&server);
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    client.on_unauthorized(move || flag.set(true));

    let err = client
        .login(&LoginRequest {
            email: "a@b.co".into(),
            password: "wrong!!".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error, "Invalid credentials");
    assert_eq!(err.code, "REQUEST_FAILED");
    assert!(!fired.get());
}

#[tokio::test]
async fn requests_carry_bearer_token_from_store() {
    let server = MockServer::start_async().await;
    token::save("tok-123").unwrap();
    let schedules = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/schedules")
                .header("authorization", "Bearer tok-123");
            then.status(200)
                .json_body(json!({ "success": true, "schedules": [schedule_json("s1")] }));
        })
        .await;

    let list = api_client(&server).get_schedules().await.unwrap();
    schedules.assert_async().await;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].class_name, "IoT Lab A");
    token::clear();
}

#[tokio::test]
async fn unauthorized_clears_token_and_notifies_session() {
    let server = MockServer::start_async().await;
    token::save("stale").unwrap();
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users");
            then.status(401).json_body(json!({ "message": "Token expired" }));
        })
        .await;
    let client = api_client(&server);
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    client.on_unauthorized(move || counter.set(counter.get() + 1));

    let err = client.get_users().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.error, "Token expired");
    assert_eq!(calls.get(), 1);
    assert!(token::load().is_none());
}

#[tokio::test]
async fn success_false_envelope_is_app_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/schedules/s1");
            then.status(200)
                .json_body(json!({ "success": false, "message": "Schedule has attendance records" }));
        })
        .await;

    let err = api_client(&server).delete_schedule("s1").await.unwrap_err();
    assert_eq!(err.code, "APP_ERROR");
    assert_eq!(err.error, "Schedule has attendance records");
}

#[tokio::test]
async fn non_2xx_without_body_reports_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/dashboard/stats");
            then.status(503);
        })
        .await;

    let err = api_client(&server).get_dashboard_stats().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
    assert_eq!(err.error, "Request failed with status 503");
    assert_eq!(err.user_message("Failed to load stats"), "Failed to load stats");
}

#[tokio::test]
async fn non_2xx_with_message_surfaces_server_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/users");
            then.status(409).json_body(json!({ "message": "RFID card already registered" }));
        })
        .await;

    let payload = UserPayload {
        username: "nadia".into(),
        full_name: "Nadia Putri".into(),
        email: "nadia@example.com".into(),
        rfid_card: "04A1B2C3".into(),
        password: Some("secret1".into()),
        role: Role::Cadet,
        is_active: true,
    };
    let err = api_client(&server).create_user(&payload).await.unwrap_err();
    assert_eq!(err.user_message("Failed to create user"), "RFID card already registered");
}

#[tokio::test]
async fn transport_failure_is_request_failed() {
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
    let err = client.get_schedules().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
    assert!(err.error.starts_with("Request failed"));
}

#[tokio::test]
async fn attendance_endpoints_use_expected_paths_and_bodies() {
    let server = MockServer::start_async().await;
    let roster = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/attendance/by-schedule/s1")
                .query_param("date", "2025-03-01");
            then.status(200)
                .json_body(json!({ "success": true, "data": roster_json() }));
        })
        .await;
    let last = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/attendance/last/schedule/s1");
            then.status(200).json_body(json!({
                "success": true,
                "data": { "lastAttendances": [{
                    "id": "a1",
                    "status": "PRESENT",
                    "scanTime": "2025-03-01T07:58:00.000Z",
                    "user": { "username": "nadia" }
                }]}
            }));
        })
        .await;
    let update = server
        .mock_async(|when, then| {
            when.method(httpmock::Method::PATCH)
                .path("/api/attendance/update/a1")
                .json_body(json!({ "status": "LATE", "notes": "bus", "isLate": true }));
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/attendance/delete/a1");
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;
    let manual = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/attendance/manual").json_body(json!({
                "userId": "u2",
                "scheduleId": "s1",
                "status": "PRESENT",
                "notes": "Manual entry by admin - Status: PRESENT",
                "scanTime": "2025-03-01T08:00:00.000Z"
            }));
            then.status(201).json_body(json!({ "success": true }));
        })
        .await;
    let available = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/attendance/users/available")
                .query_param("scheduleId", "s1")
                .query_param("search", "nad");
            then.status(200).json_body(json!({
                "success": true,
                "users": [{ "id": 5, "username": "nadia", "fullName": "Nadia", "email": "n@x.io" }]
            }));
        })
        .await;

    let client = api_client(&server);
    let data = client
        .get_attendance_by_schedule("s1", "2025-03-01")
        .await
        .unwrap();
    assert_eq!(data.attendance.len(), 2);
    assert_eq!(
        data.attendance[0].attendance.as_ref().unwrap().status,
        AttendanceStatus::Late
    );
    assert!(data.attendance[1].attendance.is_none());
    assert_eq!(data.stats.unwrap().total_late, 1);

    let scans = client.get_last_attendance("s1").await.unwrap();
    assert_eq!(
        scans.latest().and_then(|s| s.user.clone()).and_then(|u| u.username).as_deref(),
        Some("nadia")
    );

    client
        .update_attendance("a1", &AttendanceUpdate::new(AttendanceStatus::Late, "bus"))
        .await
        .unwrap();
    client.delete_attendance("a1").await.unwrap();
    client
        .create_manual_attendance(&ManualAttendanceRequest {
            user_id: "u2".into(),
            schedule_id: "s1".into(),
            status: AttendanceStatus::Present,
            notes: "Manual entry by admin - Status: PRESENT".into(),
            scan_time: "2025-03-01T08:00:00.000Z".into(),
        })
        .await
        .unwrap();
    let users = client.get_available_users("s1", " nad ").await.unwrap();
    assert_eq!(users[0].id, "5");

    roster.assert_async().await;
    last.assert_async().await;
    update.assert_async().await;
    delete.assert_async().await;
    manual.assert_async().await;
    available.assert_async().await;
}

#[tokio::test]
async fn assignment_endpoints() {
    let server = MockServer::start_async().await;
    let assign = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/schedule-users")
                .json_body(json!({ "userId": "u2", "scheduleId": "s1" }));
            then.status(201).json_body(json!({ "success": true }));
        })
        .await;
    let remove = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/schedule-users/s1/u2");
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    let client = api_client(&server);
    client
        .assign_user(&AssignmentRequest {
            user_id: "u2".into(),
            schedule_id: "s1".into(),
        })
        .await
        .unwrap();
    client.remove_assignment("s1", "u2").await.unwrap();
    assign.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn schedule_and_user_crud_endpoints() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/schedules")
                .query_param("upcoming", "true");
            then.status(200)
                .json_body(json!({ "schedules": [schedule_json("s2")] }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/schedules/s1");
            then.status(200)
                .json_body(json!({ "success": true, "schedule": schedule_json("s1") }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/schedules");
            then.status(201)
                .json_body(json!({ "success": true, "message": "Schedule created" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/schedules/s1");
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users/u1");
            then.status(200)
                .json_body(json!({ "success": true, "user": user_json("u1") }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/users/u1");
            then.status(200)
                .json_body(json!({ "success": true, "user": user_json("u1") }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/users/u1");
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    let client = api_client(&server);
    let upcoming = client.get_upcoming_schedules().await.unwrap();
    assert_eq!(upcoming[0].id, "s2");
    assert_eq!(client.get_schedule("s1").await.unwrap().room, "R-201");

    let payload = SchedulePayload {
        class_name: "IoT Lab A".into(),
        subject: "Embedded Systems".into(),
        instructor: "Dr. Rahman".into(),
        room: "R-201".into(),
        schedule_date: "2025-03-01T00:00:00.000Z".into(),
        start_time: "2000-01-01T08:00:00.000Z".into(),
        end_time: "2000-01-01T10:00:00.000Z".into(),
        is_active: true,
    };
    assert_eq!(
        client.create_schedule(&payload).await.unwrap().as_deref(),
        Some("Schedule created")
    );
    assert!(client.update_schedule("s1", &payload).await.unwrap().is_none());

    assert_eq!(client.get_user("u1").await.unwrap().role, Role::Cadet);
    let update = UserPayload {
        username: "nadia".into(),
        full_name: "Nadia Putri".into(),
        email: "nadia@example.com".into(),
        rfid_card: "04A1B2C3".into(),
        password: None,
        role: Role::Cadet,
        is_active: false,
    };
    assert!(client.update_user("u1", &update).await.unwrap().is_some());
    client.delete_user("u1").await.unwrap();
}

#[tokio::test]
async fn dashboard_chart_and_audit_logs() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/dashboard/stats");
            then.status(200).json_body(json!({
                "success": true,
                "data": { "members": 10, "cadets": 4, "mainTeam": 6, "totalMembers": 20 }
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/attendance/chart")
                .query_param("period", "monthly");
            then.status(200).json_body(json!({
                "success": true,
                "data": [{ "day": "Mon", "present": 3, "permission": 1, "sick": 0, "absent": 2 }]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/audit-logs");
            then.status(200).json_body(json!({
                "success": true,
                "logs": [{
                    "id": 1,
                    "action": "ATTENDANCE_SCAN",
                    "status": "PRESENT",
                    "scheduleId": 4,
                    "createdAt": "2025-03-01T08:01:00.000Z",
                    "user": { "username": "nadia" }
                }]
            }));
        })
        .await;

    let client = api_client(&server);
    let stats = client.get_dashboard_stats().await.unwrap();
    assert_eq!(stats.total_members, 20);
    let chart = client
        .get_attendance_chart(ChartPeriod::Monthly)
        .await
        .unwrap();
    assert_eq!(chart[0].absent, 2);
    let logs = client.get_audit_logs().await.unwrap();
    assert_eq!(logs[0].schedule_id.as_deref(), Some("4"));
}

#[tokio::test]
async fn logout_clears_token_even_when_server_fails() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/logout");
            then.status(500);
        })
        .await;
    token::save("tok").unwrap();
    let result = api_client(&server).logout().await;
    assert!(result.is_err());
    assert!(token::load().is_none());
}
