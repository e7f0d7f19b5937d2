//! Route-level tests for the fixture REST server: resource paths, status
//! codes, and body shapes.

mod common;

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{Value, json};

use catalogo::CatalogStore;

fn test_server() -> TestServer {
    let store = Arc::new(CatalogStore::seeded());
    TestServer::new(common::console_router(store)).unwrap()
}

#[tokio::test]
async fn collection_get_returns_enriched_records() {
    let server = test_server();
    let response = server.get("/empresas").await;
    response.assert_status_ok();

    let records: Vec<Value> = response.json();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["estadoNombre"], json!("Activo"));
}

#[tokio::test]
async fn every_catalog_path_is_routable() {
    let server = test_server();
    for path in [
        "/estados",
        "/empresas",
        "/tipos-proyecto",
        "/fases",
        "/sistemas",
        "/subsistemas",
        "/ramas",
        "/proyectos",
    ] {
        let response = server.get(path).await;
        response.assert_status_ok();
    }
}

#[tokio::test]
async fn unknown_catalog_is_404() {
    let server = test_server();
    let response = server.get("/clientes").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn post_creates_and_coerces_foreign_keys() {
    let server = test_server();
    let response = server
        .post("/fases")
        .json(&json!({"nombre": "Cierre", "descripcion": "", "estadoId": "1"}))
        .await;
    response.assert_status_ok();

    let created: Value = response.json();
    assert_eq!(created["id"], json!(7));
    assert_eq!(created["estadoId"], json!(1));
    assert_eq!(created["estadoNombre"], json!("Activo"));
}

#[tokio::test]
async fn put_replaces_record_by_id() {
    let server = test_server();
    let response = server
        .put("/estados/5")
        .json(&json!({"nombre": "Detenido", "descripcion": "Temporalmente pausado"}))
        .await;
    response.assert_status_ok();

    let updated: Value = response.json();
    assert_eq!(updated["id"], json!(5));
    assert_eq!(updated["nombre"], json!("Detenido"));
}

#[tokio::test]
async fn get_and_put_missing_record_are_404() {
    let server = test_server();
    server.get("/estados/99").await.assert_status_not_found();
    server
        .put("/estados/99")
        .json(&json!({"nombre": "X"}))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn delete_acknowledges_with_catalog_message() {
    let server = test_server();
    let response = server.delete("/proyectos/5").await;
    response.assert_status_ok();

    let ack: Value = response.json();
    assert_eq!(ack["success"], json!(true));
    assert_eq!(ack["message"], json!("Proyecto eliminado"));

    server.get("/proyectos/5").await.assert_status_not_found();
}
