use test_utils::builder::TestBuilder;

use super::*;

/// Tests every protected endpoint answers 401 to a signed-out request, even when the
/// request is also malformed.
///
/// Expected: 401 with the `UNAUTHORIZED` error envelope for each request
#[tokio::test]
async fn signed_out_requests_get_401_regardless_of_input() {
    let test = TestBuilder::new()
        .with_compliance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cases = [
        (Method::GET, "/api/auth/user", ""),
        (Method::GET, "/api/admin/users?entries=0", ""),
        (Method::PUT, "/api/admin/users/abc/role", "{\"role\":\"overlord\"}"),
        (Method::POST, "/api/internal/payment-run", ""),
        (Method::GET, "/api/internal/payment-run", ""),
        (Method::GET, "/api/internal/payment-runs?page=-1", ""),
        (Method::GET, "/api/internal/payment-runs/not-a-number", ""),
        (Method::GET, "/api/verification/gas-safe?licence=abc", ""),
        (Method::GET, "/api/verification/gas-safe", ""),
        (Method::POST, "/api/verification/gas-safe", "not json"),
        (Method::GET, "/api/compliance/documents?status=bogus", ""),
        (Method::GET, "/api/compliance/documents/1", ""),
        (Method::PUT, "/api/compliance/documents/x/review", "{}"),
        (Method::GET, "/api/invoices?status=paid", ""),
        (Method::GET, "/api/dashboard/summary", ""),
        (Method::GET, "/api/dashboard/expiring-documents?days=9999", ""),
        (Method::GET, "/api/dashboard/payment-blocks", ""),
        (Method::GET, "/api/dashboard/recent-activity?limit=0", ""),
    ];

    for (method, uri, body) in cases {
        let (status, json) = send(test_app(db).await, method.clone(), uri, body).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        assert_eq!(json["success"], false, "{} {}", method, uri);
        assert_eq!(json["error"]["code"], "UNAUTHORIZED", "{} {}", method, uri);
    }
}

/// Tests the OpenAPI document is served.
///
/// Expected: 200 with every documented path present
#[tokio::test]
async fn serves_openapi_document() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, json) = send(
        test_app(db).await,
        Method::GET,
        "/api/docs/openapi.json",
        "",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/api/internal/payment-run"]["post"].is_object());
    assert!(json["paths"]["/api/verification/gas-safe"]["get"].is_object());
}
