//! # Catalogo: an Administrative Console for Project Master Data
//!
//! Catalogo manages a small set of related master-data catalogs (companies,
//! states, project types, phases, systems, subsystems, branches, projects)
//! through generic list/create/edit/delete machinery. Per-catalog behavior
//! is configuration, not code: every catalog is described by a column list,
//! a field list, and a relation list, and the same grid, form, and service
//! implementations interpret those descriptors for all eight.
//!
//! ## Core Concepts
//!
//! ### Records
//! Records are JSON objects with a numeric `id` assigned by the store on
//! create. Foreign keys (`estadoId`, `sistemaId`, `empresaId`,
//! `tipoProyectoId`) reference records in related catalogs.
//!
//! ### Enrichment
//! Reads and mutation results are enriched: each declared relation's foreign
//! key is joined against the related catalog and the display name lands next
//! to it (`estadoId` → `estadoNombre`). Display names are derived data,
//! recomputed on every read; a dangling foreign key degrades to `"N/A"`.
//!
//! ### Dual backends
//! Every catalog service runs against either the in-process [`CatalogStore`]
//! (mock mode) or a remote REST API (remote mode). Both paths return the
//! same enriched shape, so screens cannot tell them apart. The store
//! serializes mutations per collection and never reuses a deleted id.
//!
//! ## Architecture
//!
//! The system follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Console (catalogoctl, screens)          │
//! ├─────────────────────────────────────────┤
//! │ Generic UI (DataGrid, GenericForm)      │
//! ├─────────────────────────────────────────┤
//! │ CRUD Services (enrichment, coercion)    │
//! ├─────────────────────────────────────────┤
//! │ Backends (CatalogStore | ApiClient)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage Examples
//!
//! ### Paginating records in the grid
//!
//! ```rust
//! # use catalogo::{Column, ColumnType, DataGrid};
//! # use serde_json::json;
//! let columns = vec![
//!     Column::new("id", "ID", 80, ColumnType::Number),
//!     Column::new("nombre", "Nombre", 200, ColumnType::String),
//! ];
//! let data = (1..=12).map(|i| json!({"id": i, "nombre": format!("Fila {}", i)})).collect();
//! let mut grid = DataGrid::with_data(columns, data);
//!
//! assert_eq!(grid.total_pages(), 2);
//! assert_eq!(grid.page_rows().len(), 10);
//! grid.next_page();
//! assert_eq!(grid.page_rows().len(), 2);
//!
//! // Selection hands back the full record.
//! let selected = grid.select_row(0).unwrap();
//! assert_eq!(selected["id"], json!(11));
//! ```
//!
//! ### Validating a draft in the form
//!
//! ```rust
//! # use catalogo::{FieldKind, FormField, GenericForm};
//! # use serde_json::json;
//! let fields = vec![FormField {
//!     name: "nombre".to_string(),
//!     label: "Nombre".to_string(),
//!     required: true,
//!     kind: FieldKind::Text,
//! }];
//! let mut form = GenericForm::new("Rama", fields);
//!
//! form.open_create();
//! assert!(form.submit().is_none()); // required field empty
//! assert_eq!(form.error("nombre"), Some("Nombre es requerido"));
//!
//! form.set_value("nombre", json!("main"));
//! assert_eq!(form.submit(), Some(json!({"nombre": "main"})));
//! ```
//!
//! ### Running a CRUD service against the mock store
//!
//! ```rust
//! # use catalogo::{Backend, CatalogKind, CatalogService, CatalogStore};
//! # use serde_json::json;
//! # use std::sync::Arc;
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .enable_all()
//!     .build()
//!     .unwrap();
//! runtime.block_on(async {
//!     let store = Arc::new(CatalogStore::seeded());
//!     let empresas = CatalogService::new(CatalogKind::Empresas, Backend::Mock(store));
//!
//!     let created = empresas
//!         .create(json!({"nombre": "Nueva S.A.", "correo": "hola@nueva.com", "estadoId": "1"}))
//!         .await
//!         .unwrap();
//!     assert_eq!(created["estadoId"], json!(1));
//!     assert_eq!(created["estadoNombre"], json!("Activo"));
//! });
//! ```

#![deny(missing_docs)]
mod audit;
mod catalog;
mod client;
mod config;
mod errors;
mod form;
mod screen;
mod service;
mod store;
mod table;

pub mod enrich;
pub mod fixtures;

// CLI utility modules

/// Command-line interface utilities for program termination and output formatting.
pub mod cli_utils;

pub mod commands;

pub use audit::{AuditEntry, AuditLog, AuditOperation};
pub use catalog::{
    CatalogDefinition, CatalogKind, Column, ColumnType, FieldSpec, FieldType, Relation,
};
pub use client::ApiClient;
pub use config::{API_URL_VAR, ConsoleConfig, DEFAULT_API_URL, USE_MOCK_VAR};
pub use enrich::{MISSING_RELATION, NameIndex};
pub use errors::ServiceError;
pub use form::{FieldKind, FormField, FormMode, GenericForm, SelectOption};
pub use screen::CatalogScreen;
pub use service::{Backend, CatalogService, DeleteAck};
pub use store::CatalogStore;
pub use table::{
    DEFAULT_PAGE_SIZE, DataGrid, EMPTY_CELL, EMPTY_TABLE_MESSAGE, PAGE_SIZES,
};
