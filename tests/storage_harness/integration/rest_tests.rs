//! REST integration test macro for storage backends.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that validate
//! a `StoreRepository` through full REST round-trips:
//! JSON → HTTP request → extractor → service → repository → HTTP response → JSON.

/// Generate a REST integration test suite for a storage backend.
///
/// `$repository_factory` must produce an `impl StoreRepository + 'static`.
///
/// # Generated Tests
///
/// ## CRUD
/// - `test_rest_create` — POST 201, timestamps set, `updatedAt` null
/// - `test_rest_show` — GET 200 with the created record
/// - `test_rest_update_partial` — PATCH only touches present fields
/// - `test_rest_update_noop_sets_updated_at` — empty PATCH still stamps `updatedAt`
/// - `test_rest_delete` — DELETE 204 with empty body, then GET 404
///
/// ## List
/// - `test_rest_list_reference_stores` — city filter, name sort, default order
/// - `test_rest_list_unknown_sort_and_direction` — fall back to id ASC
/// - `test_rest_list_repeated_params_keep_last_value` — `?city=a&city=b` filters on `b`
///
/// ## Error handling
/// - `test_rest_create_missing_name` — 400 naming the field
/// - `test_rest_invalid_json` / `test_rest_non_object_body` — 400 `Invalid JSON`
/// - `test_rest_unknown_and_malformed_ids` — 404
#[macro_export]
macro_rules! rest_integration_tests {
    ($repository_factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use serde_json::{Value, json};
            use std::sync::Arc;
            use store_api::core::StoreRepository;

            async fn make_server() -> TestServer {
                let repository: Arc<dyn StoreRepository> = Arc::new($repository_factory);
                let router = storage_harness::integration::build_test_router(repository);
                TestServer::new(router)
            }

            async fn create(server: &TestServer, name: &str, city: &str, postal_code: &str) -> Value {
                let response = server
                    .post("/api/stores")
                    .json(&json!({
                        "name": name,
                        "address": format!("{name} street"),
                        "city": city,
                        "postalCode": postal_code
                    }))
                    .await;
                response.assert_status(StatusCode::CREATED);
                response.json()
            }

            async fn list_names(server: &TestServer, params: &[(&str, &str)]) -> Vec<String> {
                let mut request = server.get("/api/stores");
                for (key, value) in params {
                    request = request.add_query_param(key, value);
                }
                let response = request.await;
                response.assert_status(StatusCode::OK);

                let body: Vec<Value> = response.json();
                body.iter()
                    .map(|s| s["name"].as_str().unwrap().to_string())
                    .collect()
            }

            // ==============================================================
            // CRUD
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create() {
                let server = make_server().await;

                let body = create(&server, "Wshop", "Paris", "75011").await;
                assert_eq!(body["name"], "Wshop");
                assert_eq!(body["address"], "Wshop street");
                assert_eq!(body["city"], "Paris");
                assert_eq!(body["postalCode"], "75011");
                assert!(body["createdAt"].is_string());
                assert!(body["updatedAt"].is_null());
                uuid::Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();
            }

            #[tokio::test]
            async fn test_rest_create_ignores_unknown_and_server_fields() {
                let server = make_server().await;

                let response = server
                    .post("/api/stores")
                    .json(&json!({
                        "id": "00000000-0000-0000-0000-000000000000",
                        "name": "Wshop",
                        "address": "1 rue de la Paix",
                        "city": "Paris",
                        "postalCode": "75002",
                        "createdAt": "2001-01-01T00:00:00Z",
                        "manager": "Alice"
                    }))
                    .await;

                response.assert_status(StatusCode::CREATED);
                let body: Value = response.json();
                assert_ne!(body["id"], "00000000-0000-0000-0000-000000000000");
                assert_ne!(body["createdAt"], "2001-01-01T00:00:00Z");
                assert!(body.get("manager").is_none());
            }

            #[tokio::test]
            async fn test_rest_show() {
                let server = make_server().await;
                let created = create(&server, "Wshop", "Paris", "75011").await;

                let response = server
                    .get(&format!("/api/stores/{}", created["id"].as_str().unwrap()))
                    .await;

                response.assert_status(StatusCode::OK);
                let body: Value = response.json();
                assert_eq!(body, created);
            }

            #[tokio::test]
            async fn test_rest_update_partial() {
                let server = make_server().await;
                let created = create(&server, "Wshop", "Paris", "75011").await;
                let path = format!("/api/stores/{}", created["id"].as_str().unwrap());

                let response = server.patch(&path).json(&json!({ "city": "Lille" })).await;

                response.assert_status(StatusCode::OK);
                let body: Value = response.json();
                assert_eq!(body["city"], "Lille");
                assert_eq!(body["name"], "Wshop");
                assert_eq!(body["postalCode"], "75011");
                assert_eq!(body["createdAt"], created["createdAt"]);
                assert!(body["updatedAt"].is_string());

                let persisted: Value = server.get(&path).await.json();
                assert_eq!(persisted, body);
            }

            #[tokio::test]
            async fn test_rest_update_noop_sets_updated_at() {
                let server = make_server().await;
                let created = create(&server, "Wshop", "Paris", "75011").await;
                let path = format!("/api/stores/{}", created["id"].as_str().unwrap());

                let response = server.patch(&path).json(&json!({})).await;

                response.assert_status(StatusCode::OK);
                let body: Value = response.json();
                assert!(body["updatedAt"].is_string());
                assert_eq!(body["name"], "Wshop");
            }

            #[tokio::test]
            async fn test_rest_update_allows_empty_string() {
                let server = make_server().await;
                let created = create(&server, "Wshop", "Paris", "75011").await;
                let path = format!("/api/stores/{}", created["id"].as_str().unwrap());

                let response = server.patch(&path).json(&json!({ "address": "" })).await;

                response.assert_status(StatusCode::OK);
                let body: Value = response.json();
                assert_eq!(body["address"], "");
            }

            #[tokio::test]
            async fn test_rest_delete() {
                let server = make_server().await;
                let created = create(&server, "Wshop", "Paris", "75011").await;
                let path = format!("/api/stores/{}", created["id"].as_str().unwrap());

                let response = server.delete(&path).await;
                response.assert_status(StatusCode::NO_CONTENT);
                assert!(response.text().is_empty());

                server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
                server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
            }

            // ==============================================================
            // List
            // ==============================================================

            #[tokio::test]
            async fn test_rest_list_reference_stores() {
                let server = make_server().await;
                create(&server, "Z-Mag", "Paris", "75001").await;
                create(&server, "A-Mag", "Paris", "75002").await;
                create(&server, "B-Mag", "Lyon", "69001").await;

                let asc = list_names(&server, &[("city", "Paris"), ("sort", "name"), ("direction", "ASC")]).await;
                assert_eq!(asc, vec!["A-Mag", "Z-Mag"]);

                let desc = list_names(&server, &[("city", "Paris"), ("sort", "name"), ("direction", "desc")]).await;
                assert_eq!(desc, vec!["Z-Mag", "A-Mag"]);

                let lyon = list_names(&server, &[("city", "Lyon")]).await;
                assert_eq!(lyon, vec!["B-Mag"]);

                let all = list_names(&server, &[]).await;
                assert_eq!(all, vec!["Z-Mag", "A-Mag", "B-Mag"]);

                let by_postal = list_names(&server, &[("postalCode", "69001")]).await;
                assert_eq!(by_postal, vec!["B-Mag"]);

                let by_name = list_names(&server, &[("city", "Paris"), ("name", "A-")]).await;
                assert_eq!(by_name, vec!["A-Mag"]);
            }

            #[tokio::test]
            async fn test_rest_list_unknown_sort_and_direction() {
                let server = make_server().await;
                create(&server, "Z-Mag", "Paris", "75001").await;
                create(&server, "A-Mag", "Paris", "75002").await;

                let names = list_names(&server, &[("sort", "address"), ("direction", "sideways")]).await;
                assert_eq!(names, vec!["Z-Mag", "A-Mag"]);
            }

            #[tokio::test]
            async fn test_rest_list_repeated_params_keep_last_value() {
                let server = make_server().await;
                create(&server, "Z-Mag", "Paris", "75001").await;
                create(&server, "A-Mag", "Paris", "75002").await;
                create(&server, "B-Mag", "Lyon", "69001").await;

                for (query, expected) in [
                    ("city=Paris&city=Lyon", vec!["B-Mag"]),
                    ("sort=name&sort=city", vec!["B-Mag", "Z-Mag", "A-Mag"]),
                ] {
                    let response = server.get(&format!("/api/stores?{query}")).await;
                    response.assert_status(StatusCode::OK);

                    let body: Vec<Value> = response.json();
                    let names: Vec<&str> = body.iter().map(|s| s["name"].as_str().unwrap()).collect();
                    assert_eq!(names, expected, "query: {query}");
                }
            }

            #[tokio::test]
            async fn test_rest_list_empty() {
                let server = make_server().await;
                assert!(list_names(&server, &[]).await.is_empty());
            }

            // ==============================================================
            // Error handling
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create_missing_name() {
                let server = make_server().await;

                let response = server
                    .post("/api/stores")
                    .json(&json!({ "address": "a", "city": "Paris", "postalCode": "75001" }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["error"], "Field \"name\" is required");
                assert_eq!(body["code"], "VALIDATION_ERROR");
            }

            #[tokio::test]
            async fn test_rest_create_empty_field_is_missing() {
                let server = make_server().await;

                let response = server
                    .post("/api/stores")
                    .json(&json!({ "name": "Wshop", "address": "", "city": "Paris", "postalCode": "75001" }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert!(body["error"].as_str().unwrap().contains("address"));
            }

            #[tokio::test]
            async fn test_rest_create_accepts_zero_as_value() {
                let server = make_server().await;

                let body = create(&server, "0", "Paris", "0").await;
                assert_eq!(body["name"], "0");
                assert_eq!(body["postalCode"], "0");
            }

            #[tokio::test]
            async fn test_rest_create_non_string_field() {
                let server = make_server().await;

                let response = server
                    .post("/api/stores")
                    .json(&json!({ "name": "Wshop", "address": "a", "city": "Paris", "postalCode": 75001 }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["error"], "Field \"postalCode\" must be a string");
            }

            #[tokio::test]
            async fn test_rest_length_limits() {
                let server = make_server().await;

                let response = server
                    .post("/api/stores")
                    .json(&json!({ "name": "Wshop", "address": "a", "city": "Paris", "postalCode": "750011" }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["error"], "Postal code cannot be longer than 5 characters.");
                assert_eq!(body["details"]["fields"][0]["field"], "postalCode");

                let created = create(&server, "Wshop", "Paris", "75011").await;
                let path = format!("/api/stores/{}", created["id"].as_str().unwrap());
                let response = server
                    .patch(&path)
                    .json(&json!({ "name": "x".repeat(256) }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let unchanged: Value = server.get(&path).await.json();
                assert_eq!(unchanged["name"], "Wshop");
                assert!(unchanged["updatedAt"].is_null());
            }

            #[tokio::test]
            async fn test_rest_invalid_json() {
                let server = make_server().await;

                let response = server.post("/api/stores").text("{\"name\": ").await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["error"], "Invalid JSON");
            }

            #[tokio::test]
            async fn test_rest_non_object_body() {
                let server = make_server().await;
                let created = create(&server, "Wshop", "Paris", "75011").await;
                let path = format!("/api/stores/{}", created["id"].as_str().unwrap());

                let response = server.post("/api/stores").json(&json!(["Wshop"])).await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let response = server.patch(&path).json(&json!("Wshop")).await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["error"], "Invalid JSON");
            }

            #[tokio::test]
            async fn test_rest_unknown_and_malformed_ids() {
                let server = make_server().await;
                let unknown = format!("/api/stores/{}", uuid::Uuid::now_v7());

                server.get(&unknown).await.assert_status(StatusCode::NOT_FOUND);
                server
                    .patch(&unknown)
                    .json(&json!({ "name": "Ghost" }))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
                server.delete(&unknown).await.assert_status(StatusCode::NOT_FOUND);

                let response = server.get("/api/stores/not-a-uuid").await;
                response.assert_status(StatusCode::NOT_FOUND);
                let body: Value = response.json();
                assert_eq!(body["code"], "ENTITY_NOT_FOUND");
            }

            #[tokio::test]
            async fn test_rest_unknown_id_wins_over_bad_body() {
                let server = make_server().await;
                let unknown = format!("/api/stores/{}", uuid::Uuid::now_v7());

                server
                    .patch(&unknown)
                    .text("not json")
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }
        }
    };
}
