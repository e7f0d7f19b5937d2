//! # Catalog CRUD Services
//!
//! One service per catalog, all sharing the same contract: `get_all`,
//! `get_by_id`, `create`, `update`, `delete`. A service targets either the
//! in-process [`CatalogStore`] (mock mode) or a remote REST API (remote
//! mode); callers cannot tell the backends apart because both return the
//! same enriched-record JSON shape.
//!
//! In mock mode the service owns enrichment: every read and every mutation
//! result is joined against the related catalogs before it is returned. In
//! remote mode the server returns records already enriched, matching the
//! mock shape. Drafts arrive from form controls with string-valued foreign
//! keys; every mutating operation coerces them to numbers before dispatch.
//!
//! The service layer trusts its caller on business rules: required-field
//! validation happens in the form before a draft ever reaches a service.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    ApiClient, CatalogDefinition, CatalogKind, CatalogStore, NameIndex, ServiceError, enrich,
};

/// Which side a service's calls land on.
#[derive(Clone)]
pub enum Backend {
    /// Operate against an in-process store.
    Mock(Arc<CatalogStore>),
    /// Issue HTTP requests to a remote REST API.
    Remote(ApiClient),
}

/// Acknowledgment returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    /// Always true for a completed delete.
    pub success: bool,
    /// Human-readable confirmation (e.g. "Empresa eliminada").
    pub message: String,
}

/// CRUD service for one catalog.
#[derive(Clone)]
pub struct CatalogService {
    definition: CatalogDefinition,
    backend: Backend,
}

impl CatalogService {
    /// Creates the service for `kind` over `backend`.
    pub fn new(kind: CatalogKind, backend: Backend) -> Self {
        Self {
            definition: kind.definition(),
            backend,
        }
    }

    /// The catalog configuration this service operates under.
    pub fn definition(&self) -> &CatalogDefinition {
        &self.definition
    }

    /// The backend this service dispatches to.
    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Returns every record, enriched with the display name for each
    /// declared relation.
    pub async fn get_all(&self) -> Result<Vec<Value>, ServiceError> {
        match &self.backend {
            Backend::Mock(store) => {
                let mut records = store.list(self.definition.kind).await;
                let indexes = self.indexes(store).await;
                for record in &mut records {
                    enrich::enrich(record, &self.definition.relations, &indexes);
                }
                Ok(records)
            }
            Backend::Remote(client) => client.get_all(self.definition.kind.path()).await,
        }
    }

    /// Returns the record with `id`, enriched. Fails with `NotFound` when no
    /// record has that id.
    pub async fn get_by_id(&self, id: i64) -> Result<Value, ServiceError> {
        match &self.backend {
            Backend::Mock(store) => {
                let mut record = store.get(self.definition.kind, id).await?;
                let indexes = self.indexes(store).await;
                enrich::enrich(&mut record, &self.definition.relations, &indexes);
                Ok(record)
            }
            Backend::Remote(client) => client.get_by_id(self.definition.kind.path(), id).await,
        }
    }

    /// Stores a new record built from `draft` and returns it enriched. The
    /// id is assigned by the backend; foreign keys submitted as strings are
    /// coerced to numbers first.
    pub async fn create(&self, mut draft: Value) -> Result<Value, ServiceError> {
        enrich::coerce_foreign_keys(&self.definition.relations, &mut draft);
        match &self.backend {
            Backend::Mock(store) => {
                let mut record = store.insert(self.definition.kind, draft).await;
                let indexes = self.indexes(store).await;
                enrich::enrich(&mut record, &self.definition.relations, &indexes);
                Ok(record)
            }
            Backend::Remote(client) => client.create(self.definition.kind.path(), &draft).await,
        }
    }

    /// Replaces the record at `id` with `draft` (full replace, id
    /// preserved) and returns it enriched. Fails with `NotFound` when the id
    /// is absent, leaving the collection unchanged.
    pub async fn update(&self, id: i64, mut draft: Value) -> Result<Value, ServiceError> {
        enrich::coerce_foreign_keys(&self.definition.relations, &mut draft);
        match &self.backend {
            Backend::Mock(store) => {
                let mut record = store.replace(self.definition.kind, id, draft).await?;
                let indexes = self.indexes(store).await;
                enrich::enrich(&mut record, &self.definition.relations, &indexes);
                Ok(record)
            }
            Backend::Remote(client) => client.update(self.definition.kind.path(), id, &draft).await,
        }
    }

    /// Removes the record at `id`. Fails with `NotFound` when absent.
    pub async fn delete(&self, id: i64) -> Result<DeleteAck, ServiceError> {
        match &self.backend {
            Backend::Mock(store) => {
                store.remove(self.definition.kind, id).await?;
                Ok(DeleteAck {
                    success: true,
                    message: self.definition.deleted_message.to_string(),
                })
            }
            Backend::Remote(client) => {
                let ack = client.delete(self.definition.kind.path(), id).await?;
                Ok(serde_json::from_value(ack)?)
            }
        }
    }

    async fn indexes(&self, store: &CatalogStore) -> HashMap<CatalogKind, NameIndex> {
        let mut indexes = HashMap::new();
        for relation in &self.definition.relations {
            if !indexes.contains_key(&relation.target) {
                indexes.insert(relation.target, store.name_index(relation.target).await);
            }
        }
        indexes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mock_service(kind: CatalogKind) -> (Arc<CatalogStore>, CatalogService) {
        let store = Arc::new(CatalogStore::seeded());
        let service = CatalogService::new(kind, Backend::Mock(Arc::clone(&store)));
        (store, service)
    }

    #[tokio::test]
    async fn get_all_enriches_every_record() {
        let (_store, service) = mock_service(CatalogKind::Empresas);
        let empresas = service.get_all().await.unwrap();
        assert_eq!(empresas.len(), 4);
        assert_eq!(empresas[0]["estadoNombre"], json!("Activo"));
        assert_eq!(empresas[3]["estadoNombre"], json!("Inactivo"));
    }

    #[tokio::test]
    async fn create_coerces_string_foreign_key_and_enriches() {
        let (_store, service) = mock_service(CatalogKind::Empresas);
        let created = service
            .create(json!({
                "nombre": "Nueva S.A.",
                "descripcion": "",
                "correo": "hola@nueva.com",
                "estadoId": "1"
            }))
            .await
            .unwrap();
        assert_eq!(created["estadoId"], json!(1));
        assert_eq!(created["estadoNombre"], json!("Activo"));
        assert_eq!(created["id"], json!(5));
    }

    #[tokio::test]
    async fn create_then_get_by_id_round_trips() {
        let (_store, service) = mock_service(CatalogKind::Fases);
        let created = service
            .create(json!({"nombre": "Cierre", "descripcion": "Fase final", "estadoId": "2"}))
            .await
            .unwrap();
        let id = created["id"].as_i64().unwrap();
        let fetched = service.get_by_id(id).await.unwrap();
        assert_eq!(fetched["nombre"], json!("Cierre"));
        assert_eq!(fetched["descripcion"], json!("Fase final"));
        assert_eq!(fetched["estadoId"], json!(2));
        assert_eq!(fetched["estadoNombre"], json!("Inactivo"));
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found_and_collection_unchanged() {
        let (_store, service) = mock_service(CatalogKind::Empresas);
        let before = service.get_all().await.unwrap();
        let result = service.update(99, json!({"nombre": "X"})).await;
        assert_eq!(result, Err(ServiceError::NotFound));
        assert_eq!(service.get_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn update_replaces_wholesale_preserving_id() {
        let (_store, service) = mock_service(CatalogKind::Empresas);
        let updated = service
            .update(
                2,
                json!({
                    "nombre": "Innovate Global",
                    "descripcion": "Soluciones globales",
                    "correo": "info@innovate.com",
                    "estadoId": "2"
                }),
            )
            .await
            .unwrap();
        assert_eq!(updated["id"], json!(2));
        assert_eq!(updated["estadoId"], json!(2));
        assert_eq!(updated["estadoNombre"], json!("Inactivo"));
    }

    #[tokio::test]
    async fn delete_acknowledges_and_removes() {
        let (_store, service) = mock_service(CatalogKind::Empresas);
        let ack = service.delete(4).await.unwrap();
        assert!(ack.success);
        assert_eq!(ack.message, "Empresa eliminada");
        assert_eq!(service.get_by_id(4).await, Err(ServiceError::NotFound));
        assert!(
            service
                .get_all()
                .await
                .unwrap()
                .iter()
                .all(|r| r["id"] != json!(4))
        );
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let (_store, service) = mock_service(CatalogKind::Ramas);
        assert_eq!(service.delete(99).await, Err(ServiceError::NotFound));
    }

    #[tokio::test]
    async fn get_all_is_idempotent() {
        let (_store, service) = mock_service(CatalogKind::Proyectos);
        let first = service.get_all().await.unwrap();
        let second = service.get_all().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn enrichment_is_recomputed_after_related_rename() {
        let store = Arc::new(CatalogStore::seeded());
        let empresas = CatalogService::new(CatalogKind::Empresas, Backend::Mock(Arc::clone(&store)));
        let estados = CatalogService::new(CatalogKind::Estados, Backend::Mock(Arc::clone(&store)));

        estados
            .update(1, json!({"nombre": "Operativo", "descripcion": "Estado activo"}))
            .await
            .unwrap();
        let after = empresas.get_by_id(1).await.unwrap();
        assert_eq!(after["estadoNombre"], json!("Operativo"));
    }

    #[tokio::test]
    async fn dangling_foreign_key_degrades_to_sentinel() {
        let (_store, service) = mock_service(CatalogKind::Subsistemas);
        let created = service
            .create(json!({
                "nombre": "Módulo Fantasma",
                "descripcion": "",
                "sistemaId": "42",
                "estadoId": "1"
            }))
            .await
            .unwrap();
        assert_eq!(created["sistemaNombre"], json!("N/A"));
        assert_eq!(created["estadoNombre"], json!("Activo"));
    }

    #[tokio::test]
    async fn proyectos_enrich_all_three_relations() {
        let (_store, service) = mock_service(CatalogKind::Proyectos);
        let proyecto = service.get_by_id(1).await.unwrap();
        assert_eq!(proyecto["empresaNombre"], json!("TechCorp S.A."));
        assert_eq!(proyecto["tipoProyectoNombre"], json!("Software"));
        assert_eq!(proyecto["estadoNombre"], json!("En Proceso"));
    }
}
