//! HTTP-level integration tests for the avion endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

fn boeing() -> serde_json::Value {
    json!({
        "id_aerolinea": 1,
        "fabricante": "Boeing",
        "tipo": "747",
        "capacidad": 300,
    })
}

async fn create(pool: &PgPool, body: serde_json::Value) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/create", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["avion_id"].as_i64().unwrap()
}

async fn fetch(pool: &PgPool, id: i64) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    body_json(get(app, &format!("/api/avion/{id}")).await).await
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_returns_201_with_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/create", boeing()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["ok"], 1);
    assert_eq!(json["status"], 201);
    assert_eq!(json["message"], "Avión fue creado de manera exitosa");
    assert!(json["avion_id"].as_i64().unwrap() > 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_created_record_reads_back_identical(pool: PgPool) {
    let id = create(&pool, boeing()).await;

    let json = fetch(&pool, id).await;
    assert_eq!(json["ok"], 1);
    assert_eq!(json["status"], 200);
    assert_eq!(
        json["avion"],
        json!({
            "id_avion": id,
            "id_aerolinea": 1,
            "fabricante": "Boeing",
            "tipo": "747",
            "capacidad": 300,
        })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_coerces_numeric_strings_and_trims(pool: PgPool) {
    let id = create(
        &pool,
        json!({
            "id_aerolinea": " 4 ",
            "fabricante": "  Airbus  ",
            "tipo": "A320",
            "capacidad": "180",
        }),
    )
    .await;

    let avion = &fetch(&pool, id).await["avion"];
    assert_eq!(avion["id_aerolinea"], 4);
    assert_eq!(avion["fabricante"], "Airbus");
    assert_eq!(avion["capacidad"], 180);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_escapes_html(pool: PgPool) {
    let id = create(
        &pool,
        json!({
            "id_aerolinea": 1,
            "fabricante": "Boeing & Co",
            "tipo": "<b>",
            "capacidad": 10,
        }),
    )
    .await;

    let avion = &fetch(&pool, id).await["avion"];
    assert_eq!(avion["fabricante"], "Boeing &amp; Co");
    assert_eq!(avion["tipo"], "&lt;b&gt;");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_returns_404_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/avion/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["ok"], 0);
    assert_eq!(json["status"], 404);
    assert_eq!(json["message"], "ID de avión inválido");
    assert!(json.get("avion").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_all_in_id_order(pool: PgPool) {
    let first = create(&pool, boeing()).await;
    let second = create(
        &pool,
        json!({"id_aerolinea": 2, "fabricante": "Airbus", "tipo": "A380", "capacidad": 500}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/aviones").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ok"], 1);
    let aviones = json["aviones"].as_array().unwrap();
    assert_eq!(aviones.len(), 2);
    assert_eq!(aviones[0]["id_avion"], first);
    assert_eq!(aviones[1]["id_avion"], second);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_empty_table(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/aviones").await).await;

    assert_eq!(json["ok"], 1);
    assert_eq!(json["aviones"], json!([]));
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_single_field_leaves_others(pool: PgPool) {
    let id = create(&pool, boeing()).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/edit/{id}"), json!({"capacidad": 320})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["ok"], 1);
    assert_eq!(json["message"], "Avión fue actualizado de manera exitosa");

    let avion = &fetch(&pool, id).await["avion"];
    assert_eq!(avion["capacidad"], 320);
    assert_eq!(avion["id_aerolinea"], 1);
    assert_eq!(avion["fabricante"], "Boeing");
    assert_eq!(avion["tipo"], "747");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_all_fields(pool: PgPool) {
    let id = create(&pool, boeing()).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/edit/{id}"),
        json!({"id_aerolinea": "9", "fabricante": "Embraer", "tipo": "E190", "capacidad": 100}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let avion = &fetch(&pool, id).await["avion"];
    assert_eq!(
        *avion,
        json!({
            "id_avion": id,
            "id_aerolinea": 9,
            "fabricante": "Embraer",
            "tipo": "E190",
            "capacidad": 100,
        })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_applies_zero_airline_id(pool: PgPool) {
    let id = create(&pool, boeing()).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/edit/{id}"), json!({"id_aerolinea": 0})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["ok"], 1);

    let avion = &fetch(&pool, id).await["avion"];
    assert_eq!(avion["id_aerolinea"], 0);
    assert_eq!(avion["capacidad"], 300);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_empty_body_keeps_record(pool: PgPool) {
    let id = create(&pool, boeing()).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/edit/{id}"), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["ok"], 1);

    assert_eq!(fetch(&pool, id).await["avion"]["fabricante"], "Boeing");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_signals_404_in_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/edit/999999", json!({"capacidad": 10})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["ok"], 0);
    assert_eq!(json["status"], 404);
    assert_eq!(json["message"], "ID del avión es inválido");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_rejects_non_positive_capacity(pool: PgPool) {
    let id = create(&pool, boeing()).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/edit/{id}"), json!({"capacidad": 0})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["errors"]["capacidad"], "La capacidad debe ser mayor a 0");

    assert_eq!(fetch(&pool, id).await["avion"]["capacidad"], 300);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_record(pool: PgPool) {
    let id = create(&pool, boeing()).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/delete/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["ok"], 1);
    assert_eq!(json["message"], "Avión fue eliminado de manera exitosa");

    let json = fetch(&pool, id).await;
    assert_eq!(json["ok"], 0);
    assert_eq!(json["status"], 404);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/delete/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["ok"], 0);
    assert_eq!(json["status"], 404);
    assert_eq!(json["message"], "ID de avión inválido");
}

// ---------------------------------------------------------------------------
// Strict status codes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_strict_mode_sends_real_404(pool: PgPool) {
    let config = avion_api::config::ServerConfig {
        strict_status_codes: true,
        ..common::test_config()
    };

    let app = common::build_test_app_with(pool.clone(), config.clone());
    let response = put_json(app, "/api/edit/999999", json!({"capacidad": 10})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["status"], 404);

    let app = common::build_test_app_with(pool, config);
    let response = delete(app, "/api/delete/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["ok"], 0);
}

// ---------------------------------------------------------------------------
// Full lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_lifecycle(pool: PgPool) {
    let id = create(&pool, boeing()).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/aviones").await).await;
    assert_eq!(json["aviones"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/edit/{id}"), json!({"tipo": "747-8"})).await;
    assert_eq!(body_json(response).await["ok"], 1);
    assert_eq!(fetch(&pool, id).await["avion"]["tipo"], "747-8");

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/delete/{id}")).await;
    assert_eq!(body_json(response).await["ok"], 1);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/aviones").await).await;
    assert_eq!(json["aviones"], json!([]));
}
