//! # Entity Screens
//!
//! A screen composes one catalog's service, grid, and form into the flow the
//! console presents: load the collection, show it in the grid, track the
//! selected row, and run create/edit/delete round trips through the service.
//!
//! Failure handling follows the console's policy: a failed service call is
//! reported to the caller and the displayed collection is left exactly as it
//! was; nothing is retried automatically.

use std::collections::HashMap;

use serde_json::Value;

use crate::{
    Backend, CatalogKind, CatalogService, DataGrid, DeleteAck, FieldType, FormField, FormMode,
    GenericForm, SelectOption, ServiceError,
};

/// One catalog's management screen.
pub struct CatalogScreen {
    service: CatalogService,
    option_services: Vec<(CatalogKind, CatalogService)>,
    grid: DataGrid,
    form: GenericForm,
    options: HashMap<CatalogKind, Vec<SelectOption>>,
    loading: bool,
}

impl CatalogScreen {
    /// Creates the screen for `kind`, with one extra service per catalog
    /// that feeds a select field's options.
    pub fn new(kind: CatalogKind, backend: Backend) -> Self {
        let service = CatalogService::new(kind, backend.clone());
        let definition = service.definition();

        let mut option_services = Vec::new();
        for field in &definition.fields {
            if let FieldType::Select(source) = field.field_type
                && !option_services.iter().any(|(kind, _)| *kind == source)
            {
                option_services.push((source, CatalogService::new(source, backend.clone())));
            }
        }

        let grid = DataGrid::new(definition.columns.clone());
        let form = GenericForm::new(definition.singular, Vec::new());
        Self {
            service,
            option_services,
            grid,
            form,
            options: HashMap::new(),
            loading: false,
        }
    }

    /// Screen heading ("Gestión de Empresas").
    pub fn title(&self) -> String {
        format!("Gestión de {}", self.service.definition().title)
    }

    /// Whether a load is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The service this screen drives.
    pub fn service(&self) -> &CatalogService {
        &self.service
    }

    /// The grid showing the collection.
    pub fn grid(&self) -> &DataGrid {
        &self.grid
    }

    /// Mutable access to the grid, for pagination and selection.
    pub fn grid_mut(&mut self) -> &mut DataGrid {
        &mut self.grid
    }

    /// The form, in whatever state the last open/submit left it.
    pub fn form(&self) -> &GenericForm {
        &self.form
    }

    /// Mutable access to the form, for editing draft values.
    pub fn form_mut(&mut self) -> &mut GenericForm {
        &mut self.form
    }

    /// Fetches the collection and the select options for every related
    /// catalog. On failure the grid keeps its previous data.
    pub async fn load(&mut self) -> Result<(), ServiceError> {
        self.loading = true;
        let result = self.load_inner().await;
        self.loading = false;
        result
    }

    async fn load_inner(&mut self) -> Result<(), ServiceError> {
        let records = self.service.get_all().await?;
        let mut options = HashMap::new();
        for (kind, service) in &self.option_services {
            let related = service.get_all().await?;
            let choices = related
                .iter()
                .filter_map(|record| {
                    Some(SelectOption::new(
                        record.get("id")?.as_i64()?,
                        record.get("nombre")?.as_str()?,
                    ))
                })
                .collect();
            options.insert(*kind, choices);
        }
        self.grid.set_data(records);
        self.options = options;
        Ok(())
    }

    fn build_form(&self) -> GenericForm {
        let definition = self.service.definition();
        let fields: Vec<FormField> = definition
            .fields
            .iter()
            .map(|spec| FormField::resolve(spec, &self.options))
            .collect();
        GenericForm::new(definition.singular, fields)
    }

    /// Opens the form in create mode with the current select options.
    pub fn open_create(&mut self) {
        self.form = self.build_form();
        self.form.open_create();
    }

    /// Opens the form in edit mode, prefilled from the selected row.
    /// Returns false (and leaves the form closed) when nothing is selected.
    pub fn open_edit(&mut self) -> bool {
        let Some(selected) = self.grid.selected().cloned() else {
            return false;
        };
        self.form = self.build_form();
        self.form.open_edit(&selected);
        true
    }

    /// Submits the form through the service.
    ///
    /// Returns `Ok(None)` when validation failed (the form stays open with
    /// its errors) or the form was not open. On success the collection is
    /// reloaded, the selection cleared, and the stored record returned. On a
    /// service failure the error propagates and the displayed collection is
    /// untouched.
    pub async fn submit_form(&mut self) -> Result<Option<Value>, ServiceError> {
        let Some(mode) = self.form.mode() else {
            return Ok(None);
        };
        let edit_id = self.grid.selected_id();
        let Some(draft) = self.form.submit() else {
            return Ok(None);
        };

        let record = match mode {
            FormMode::Create => self.service.create(draft).await?,
            FormMode::Edit => {
                let id = edit_id
                    .ok_or_else(|| ServiceError::Internal("no row selected for edit".to_string()))?;
                self.service.update(id, draft).await?
            }
        };
        self.load().await?;
        self.grid.clear_selection();
        Ok(Some(record))
    }

    /// Deletes the selected record. Returns `Ok(None)` when nothing is
    /// selected. On success the collection is reloaded and the selection
    /// cleared.
    pub async fn delete_selected(&mut self) -> Result<Option<DeleteAck>, ServiceError> {
        let Some(id) = self.grid.selected_id() else {
            return Ok(None);
        };
        let ack = self.service.delete(id).await?;
        self.load().await?;
        self.grid.clear_selection();
        Ok(Some(ack))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogStore;
    use serde_json::json;
    use std::sync::Arc;

    fn screen(kind: CatalogKind) -> CatalogScreen {
        CatalogScreen::new(kind, Backend::Mock(Arc::new(CatalogStore::seeded())))
    }

    #[tokio::test]
    async fn load_fills_grid_and_options() {
        let mut screen = screen(CatalogKind::Empresas);
        assert!(screen.grid().data().is_empty());
        screen.load().await.unwrap();
        assert!(!screen.loading());
        assert_eq!(screen.grid().data().len(), 4);
        assert_eq!(screen.grid().data()[0]["estadoNombre"], json!("Activo"));

        screen.open_create();
        let rendered = screen.form().render_text();
        assert!(rendered.contains("1: Activo"));
        assert!(rendered.contains("Seleccione..."));
    }

    #[tokio::test]
    async fn create_flow_adds_record_and_refreshes() {
        let mut screen = screen(CatalogKind::Ramas);
        screen.load().await.unwrap();
        assert_eq!(screen.grid().data().len(), 6);

        screen.open_create();
        screen.form_mut().set_value("nombre", json!("release/1.0"));
        screen.form_mut().set_value("descripcion", json!("Rama de release"));
        let created = screen.submit_form().await.unwrap().unwrap();
        assert_eq!(created["id"], json!(7));
        assert_eq!(screen.grid().data().len(), 7);
        assert!(!screen.form().is_open());
    }

    #[tokio::test]
    async fn validation_failure_keeps_form_open_and_grid_unchanged() {
        let mut screen = screen(CatalogKind::Ramas);
        screen.load().await.unwrap();
        let before = screen.grid().data().to_vec();

        screen.open_create();
        let outcome = screen.submit_form().await.unwrap();
        assert!(outcome.is_none());
        assert!(screen.form().is_open());
        assert_eq!(screen.form().error("nombre"), Some("Nombre de la Rama es requerido"));
        assert_eq!(screen.grid().data(), &before[..]);
    }

    #[tokio::test]
    async fn edit_flow_prefills_and_updates_selected_row() {
        let mut screen = screen(CatalogKind::Empresas);
        screen.load().await.unwrap();
        screen.grid_mut().select_row(1);

        assert!(screen.open_edit());
        assert_eq!(screen.form().value("nombre"), Some(&json!("Innovate Solutions")));
        screen.form_mut().set_value("nombre", json!("Innovate Global"));
        let updated = screen.submit_form().await.unwrap().unwrap();
        assert_eq!(updated["id"], json!(2));
        assert_eq!(updated["nombre"], json!("Innovate Global"));
        assert_eq!(screen.grid().data()[1]["nombre"], json!("Innovate Global"));
        assert_eq!(screen.grid().selected_id(), None);
    }

    #[tokio::test]
    async fn open_edit_without_selection_is_refused() {
        let mut screen = screen(CatalogKind::Empresas);
        screen.load().await.unwrap();
        assert!(!screen.open_edit());
        assert!(!screen.form().is_open());
    }

    #[tokio::test]
    async fn delete_flow_removes_selected_row() {
        let mut screen = screen(CatalogKind::Fases);
        screen.load().await.unwrap();
        screen.grid_mut().select_by_id(6);

        let ack = screen.delete_selected().await.unwrap().unwrap();
        assert!(ack.success);
        assert_eq!(ack.message, "Fase eliminada");
        assert_eq!(screen.grid().data().len(), 5);
        assert_eq!(screen.grid().selected_id(), None);
    }

    #[tokio::test]
    async fn delete_without_selection_is_a_no_op() {
        let mut screen = screen(CatalogKind::Fases);
        screen.load().await.unwrap();
        assert_eq!(screen.delete_selected().await.unwrap(), None);
        assert_eq!(screen.grid().data().len(), 6);
    }

    #[tokio::test]
    async fn screen_title_uses_catalog_title() {
        let screen = screen(CatalogKind::TiposProyecto);
        assert_eq!(screen.title(), "Gestión de Tipos de Proyecto");
    }
}
