//! Integration tests for the HTTP API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server, against the in-memory storage backend.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use orgchart_api::{AppState, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_router() -> Router {
    build_router(Arc::new(AppState::in_memory()))
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn create_employee(router: &Router, body: Value) -> Value {
    let (status, created) = send(router, with_json("POST", "/employee", &body)).await;
    assert_eq!(status, StatusCode::OK);
    created
}

fn id_of(employee: &Value) -> String {
    employee["employeeId"].as_str().unwrap().to_owned()
}

// =========================================================================
// Employees
// =========================================================================

#[tokio::test]
async fn health_reports_backend() {
    let router = test_router();
    let (status, body) = send(&router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
}

#[tokio::test]
async fn create_read_update_employee() {
    let router = test_router();

    let created = create_employee(
        &router,
        json!({
            "employeeId": "caller-chosen",
            "firstName": "John",
            "lastName": "Doe",
            "department": "Engineering",
            "position": "Developer"
        }),
    )
    .await;
    let id = id_of(&created);
    assert_ne!(id, "caller-chosen");
    assert_eq!(created["firstName"], "John");
    assert_eq!(created["position"], "Developer");

    let (status, read) = send(&router, get(&format!("/employee/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read, created);

    let mut replacement = read.clone();
    replacement["position"] = json!("Development Manager");
    let (status, updated) = send(
        &router,
        with_json("PUT", &format!("/employee/{id}"), &replacement),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["position"], "Development Manager");
    assert_eq!(updated["employeeId"], id.as_str());

    let (_, reread) = send(&router, get(&format!("/employee/{id}"))).await;
    assert_eq!(reread, updated);
}

#[tokio::test]
async fn read_unknown_employee_is_404() {
    let router = test_router();
    let (status, body) = send(&router, get("/employee/invalid-id")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn update_unknown_employee_is_404() {
    let router = test_router();
    let (status, _) = send(
        &router,
        with_json("PUT", "/employee/invalid-id", &json!({"firstName": "John"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&router, get("/employee/invalid-id")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_body_is_400_with_error_envelope() {
    let router = test_router();
    let request = Request::post("/employee")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn mistyped_fields_are_400_with_error_envelope() {
    let router = test_router();
    let (status, body) = send(
        &router,
        with_json(
            "POST",
            "/compensation",
            &json!({"employee": "a", "salary": 1, "effectiveDate": "not a date"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    let (status, body) = send(
        &router,
        with_json("PUT", "/employee/a", &json!({"firstName": 42})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

// =========================================================================
// Reporting structure
// =========================================================================

#[tokio::test]
async fn reporting_structure_counts_nested_reports() {
    let router = test_router();

    let george = create_employee(&router, json!({"firstName": "George"})).await;
    let paul = create_employee(
        &router,
        json!({"firstName": "Paul", "directReports": [george]}),
    )
    .await;
    let john = create_employee(
        &router,
        json!({"firstName": "John", "directReports": [paul]}),
    )
    .await;

    let (status, body) = send(&router, get(&format!("/reporting/{}", id_of(&john)))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["numberOfReports"], 2);
    assert_eq!(body["employee"]["firstName"], "John");
}

#[tokio::test]
async fn reporting_structure_resolves_id_only_references() {
    let router = test_router();

    let ringo = create_employee(&router, json!({"firstName": "Ringo"})).await;
    let george = create_employee(&router, json!({"firstName": "George"})).await;
    let paul = create_employee(
        &router,
        json!({"firstName": "Paul", "directReports": [{"employeeId": id_of(&ringo)}]}),
    )
    .await;
    let john = create_employee(
        &router,
        json!({
            "firstName": "John",
            "directReports": [
                {"employeeId": id_of(&paul)},
                {"employeeId": id_of(&george)}
            ]
        }),
    )
    .await;

    let (status, body) = send(&router, get(&format!("/reporting/{}", id_of(&john)))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["numberOfReports"], 3);

    // Giving George a report after the fact is picked up through the
    // reference held by John.
    let pete = create_employee(&router, json!({"firstName": "Pete"})).await;
    let (status, _) = send(
        &router,
        with_json(
            "PUT",
            &format!("/employee/{}", id_of(&george)),
            &json!({"firstName": "George", "directReports": [{"employeeId": id_of(&pete)}]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&router, get(&format!("/reporting/{}", id_of(&john)))).await;
    assert_eq!(body["numberOfReports"], 4);
}

#[tokio::test]
async fn reporting_structure_without_reports_is_zero() {
    let router = test_router();
    let solo = create_employee(&router, json!({"firstName": "Solo"})).await;

    let (status, body) = send(&router, get(&format!("/reporting/{}", id_of(&solo)))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["numberOfReports"], 0);
}

#[tokio::test]
async fn reporting_cycle_is_500() {
    let router = test_router();

    let john = create_employee(&router, json!({"firstName": "John"})).await;
    let paul = create_employee(
        &router,
        json!({"firstName": "Paul", "directReports": [{"employeeId": id_of(&john)}]}),
    )
    .await;

    let (status, _) = send(
        &router,
        with_json(
            "PUT",
            &format!("/employee/{}", id_of(&john)),
            &json!({"firstName": "John", "directReports": [{"employeeId": id_of(&paul)}]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&router, get(&format!("/reporting/{}", id_of(&john)))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], 500);

    let (status, _) = send(&router, get(&format!("/reporting/{}", id_of(&paul)))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn reporting_with_dangling_reference_is_404() {
    let router = test_router();
    let john = create_employee(
        &router,
        json!({"firstName": "John", "directReports": [{"employeeId": "ghost"}]}),
    )
    .await;

    let (status, _) = send(&router, get(&format!("/reporting/{}", id_of(&john)))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reporting_for_unknown_root_is_404() {
    let router = test_router();
    let (status, _) = send(&router, get("/reporting/invalid-id")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =========================================================================
// Compensation
// =========================================================================

#[tokio::test]
async fn compensation_create_then_read() {
    let router = test_router();
    let employee = create_employee(&router, json!({"firstName": "John"})).await;
    let id = id_of(&employee);

    let (status, created) = send(
        &router,
        with_json(
            "POST",
            "/compensation",
            &json!({"employee": id, "salary": 75000, "effectiveDate": "2023-01-01"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["effectiveDate"], "2023-01-01");
    assert!(created["salary"].is_number());

    let (status, read) = send(&router, get(&format!("/compensation/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read, created);
}

#[tokio::test]
async fn compensation_for_unknown_employee_is_404() {
    let router = test_router();
    let (status, _) = send(&router, get("/compensation/invalid-id")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn compensation_missing_for_known_employee_is_204() {
    let router = test_router();
    let employee = create_employee(&router, json!({"firstName": "John"})).await;

    let (status, body) = send(&router, get(&format!("/compensation/{}", id_of(&employee)))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn compensation_create_for_unknown_employee_is_404_and_not_stored() {
    let router = test_router();
    let (status, _) = send(
        &router,
        with_json(
            "POST",
            "/compensation",
            &json!({"employee": "invalid-id", "salary": 75000, "effectiveDate": "2023-01-01"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Still unknown afterwards: nothing was persisted under that id.
    let (status, _) = send(&router, get("/compensation/invalid-id")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn negative_salary_is_400() {
    let router = test_router();
    let employee = create_employee(&router, json!({"firstName": "John"})).await;

    let (status, _) = send(
        &router,
        with_json(
            "POST",
            "/compensation",
            &json!({"employee": id_of(&employee), "salary": -5, "effectiveDate": "2023-01-01"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&router, get(&format!("/compensation/{}", id_of(&employee)))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}
