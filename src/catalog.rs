//! # Catalog Configuration
//!
//! This module defines the configuration model consumed by the generic
//! console components: the eight catalog kinds, their column layouts for the
//! data grid, their field lists for the form, and the relations used to
//! enrich records with display names from related catalogs.
//!
//! Definitions are data, not code: the grid, form, and service layers stay
//! ignorant of any particular catalog and interpret these descriptors at
//! runtime.

use serde::{Deserialize, Serialize};

//////////////////////////////////////////// CatalogKind ///////////////////////////////////////////

/// The eight master-data catalogs managed by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogKind {
    /// Lifecycle states shared by the other catalogs.
    Estados,
    /// Companies.
    Empresas,
    /// Project types.
    TiposProyecto,
    /// Project phases.
    Fases,
    /// Systems.
    Sistemas,
    /// Subsystems, each belonging to a system.
    Subsistemas,
    /// Source-control branches.
    Ramas,
    /// Projects, tied to a company, a type, and a state.
    Proyectos,
}

impl CatalogKind {
    /// Every catalog kind, in the order the console presents them.
    pub const ALL: [CatalogKind; 8] = [
        CatalogKind::Estados,
        CatalogKind::Empresas,
        CatalogKind::TiposProyecto,
        CatalogKind::Fases,
        CatalogKind::Sistemas,
        CatalogKind::Subsistemas,
        CatalogKind::Ramas,
        CatalogKind::Proyectos,
    ];

    /// REST collection path segment for this catalog (no leading slash).
    pub fn path(&self) -> &'static str {
        match self {
            Self::Estados => "estados",
            Self::Empresas => "empresas",
            Self::TiposProyecto => "tipos-proyecto",
            Self::Fases => "fases",
            Self::Sistemas => "sistemas",
            Self::Subsistemas => "subsistemas",
            Self::Ramas => "ramas",
            Self::Proyectos => "proyectos",
        }
    }

    /// Parses a catalog kind from its path segment.
    pub fn from_path(s: &str) -> Option<CatalogKind> {
        Self::ALL.into_iter().find(|kind| kind.path() == s)
    }

    /// Position of this kind within [`CatalogKind::ALL`].
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Estados => 0,
            Self::Empresas => 1,
            Self::TiposProyecto => 2,
            Self::Fases => 3,
            Self::Sistemas => 4,
            Self::Subsistemas => 5,
            Self::Ramas => 6,
            Self::Proyectos => 7,
        }
    }

    /// Builds the full configuration for this catalog.
    pub fn definition(self) -> CatalogDefinition {
        CatalogDefinition::new(self)
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

///////////////////////////////////////////// Columns //////////////////////////////////////////////

/// Rendering type of a grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Plain text.
    String,
    /// Numeric value, rendered as plain text.
    Number,
    /// Boolean value, rendered as a check or cross glyph.
    Boolean,
    /// Date value, rendered as `DD/MM/YYYY`.
    Date,
}

/// A single grid column: which record field it shows and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Key into the record object.
    pub field: &'static str,
    /// Header text shown above the column.
    pub header: &'static str,
    /// Display width in pixels (advisory for text rendering).
    pub width: u16,
    /// Rendering type.
    pub column_type: ColumnType,
}

impl Column {
    /// Creates a column descriptor.
    pub fn new(field: &'static str, header: &'static str, width: u16, column_type: ColumnType) -> Self {
        Self {
            field,
            header,
            width,
            column_type,
        }
    }
}

////////////////////////////////////////////// Fields //////////////////////////////////////////////

/// Input type of a form field.
///
/// `Select` names the catalog whose records provide the options; the option
/// list itself is resolved when the form is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    TextArea,
    /// Single-line email input.
    Email,
    /// Single-line numeric input.
    Number,
    /// Boolean toggle.
    Checkbox,
    /// Option list populated from the records of another catalog.
    Select(CatalogKind),
}

/// A single form field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key into the draft object; unique within a catalog's field list.
    pub name: &'static str,
    /// Label shown next to the input and used in validation messages.
    pub label: &'static str,
    /// Input type.
    pub field_type: FieldType,
    /// Whether submission requires a non-empty value.
    pub required: bool,
}

impl FieldSpec {
    /// Creates a field declaration.
    pub fn new(name: &'static str, label: &'static str, field_type: FieldType, required: bool) -> Self {
        Self {
            name,
            label,
            field_type,
            required,
        }
    }

    /// Shorthand for a single-line text field.
    pub fn text(name: &'static str, label: &'static str, required: bool) -> Self {
        Self::new(name, label, FieldType::Text, required)
    }

    /// Shorthand for a multi-line text field.
    pub fn textarea(name: &'static str, label: &'static str, required: bool) -> Self {
        Self::new(name, label, FieldType::TextArea, required)
    }

    /// Shorthand for an email field.
    pub fn email(name: &'static str, label: &'static str, required: bool) -> Self {
        Self::new(name, label, FieldType::Email, required)
    }

    /// Shorthand for a select field sourced from another catalog.
    pub fn select(name: &'static str, label: &'static str, source: CatalogKind, required: bool) -> Self {
        Self::new(name, label, FieldType::Select(source), required)
    }
}

///////////////////////////////////////////// Relations ////////////////////////////////////////////

/// A foreign-key relation used for enrichment.
///
/// `field` holds the id of a record in `target`; enrichment writes that
/// record's `nombre` into `display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    /// Foreign-key field on the owning record (e.g. `estadoId`).
    pub field: &'static str,
    /// Catalog the foreign key points into.
    pub target: CatalogKind,
    /// Derived display field written by enrichment (e.g. `estadoNombre`).
    pub display: &'static str,
}

impl Relation {
    /// Creates a relation descriptor.
    pub fn new(field: &'static str, target: CatalogKind, display: &'static str) -> Self {
        Self {
            field,
            target,
            display,
        }
    }
}

//////////////////////////////////////// CatalogDefinition /////////////////////////////////////////

/// Complete configuration for one catalog: identity, grid columns, form
/// fields, and enrichment relations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogDefinition {
    /// Which catalog this configures.
    pub kind: CatalogKind,
    /// Plural display title (e.g. "Empresas").
    pub title: &'static str,
    /// Singular display title used in form headers (e.g. "Empresa").
    pub singular: &'static str,
    /// Acknowledgment message returned by a successful delete.
    pub deleted_message: &'static str,
    /// Grid columns, in display order.
    pub columns: Vec<Column>,
    /// Form fields, in display order.
    pub fields: Vec<FieldSpec>,
    /// Enrichment relations, in display order.
    pub relations: Vec<Relation>,
}

impl CatalogDefinition {
    /// Builds the configuration for `kind`.
    pub fn new(kind: CatalogKind) -> Self {
        use CatalogKind::*;
        use ColumnType::{Number as N, String as S};
        match kind {
            Estados => Self {
                kind,
                title: "Estados",
                singular: "Estado",
                deleted_message: "Estado eliminado",
                columns: vec![
                    Column::new("id", "ID", 80, N),
                    Column::new("nombre", "Nombre", 200, S),
                    Column::new("descripcion", "Descripción", 400, S),
                ],
                fields: vec![
                    FieldSpec::text("nombre", "Nombre del Estado", true),
                    FieldSpec::textarea("descripcion", "Descripción", false),
                ],
                relations: vec![],
            },
            Empresas => Self {
                kind,
                title: "Empresas",
                singular: "Empresa",
                deleted_message: "Empresa eliminada",
                columns: vec![
                    Column::new("id", "ID", 80, N),
                    Column::new("nombre", "Nombre", 200, S),
                    Column::new("descripcion", "Descripción", 250, S),
                    Column::new("correo", "Correo", 200, S),
                    Column::new("estadoNombre", "Estado", 120, S),
                ],
                fields: vec![
                    FieldSpec::text("nombre", "Nombre de la Empresa", true),
                    FieldSpec::textarea("descripcion", "Descripción", false),
                    FieldSpec::email("correo", "Correo Electrónico", true),
                    FieldSpec::select("estadoId", "Estado", Estados, true),
                ],
                relations: vec![Relation::new("estadoId", Estados, "estadoNombre")],
            },
            TiposProyecto => Self {
                kind,
                title: "Tipos de Proyecto",
                singular: "Tipo de Proyecto",
                deleted_message: "Tipo de proyecto eliminado",
                columns: vec![
                    Column::new("id", "ID", 80, N),
                    Column::new("nombre", "Nombre", 200, S),
                    Column::new("descripcion", "Descripción", 350, S),
                    Column::new("estadoNombre", "Estado", 120, S),
                ],
                fields: vec![
                    FieldSpec::text("nombre", "Nombre del Tipo", true),
                    FieldSpec::textarea("descripcion", "Descripción", false),
                    FieldSpec::select("estadoId", "Estado", Estados, true),
                ],
                relations: vec![Relation::new("estadoId", Estados, "estadoNombre")],
            },
            Fases => Self {
                kind,
                title: "Fases",
                singular: "Fase",
                deleted_message: "Fase eliminada",
                columns: vec![
                    Column::new("id", "ID", 80, N),
                    Column::new("nombre", "Nombre", 200, S),
                    Column::new("descripcion", "Descripción", 350, S),
                    Column::new("estadoNombre", "Estado", 120, S),
                ],
                fields: vec![
                    FieldSpec::text("nombre", "Nombre de la Fase", true),
                    FieldSpec::textarea("descripcion", "Descripción", false),
                    FieldSpec::select("estadoId", "Estado", Estados, true),
                ],
                relations: vec![Relation::new("estadoId", Estados, "estadoNombre")],
            },
            Sistemas => Self {
                kind,
                title: "Sistemas",
                singular: "Sistema",
                deleted_message: "Sistema eliminado",
                columns: vec![
                    Column::new("id", "ID", 80, N),
                    Column::new("nombre", "Nombre", 200, S),
                    Column::new("descripcion", "Descripción", 350, S),
                    Column::new("estadoNombre", "Estado", 120, S),
                ],
                fields: vec![
                    FieldSpec::text("nombre", "Nombre del Sistema", true),
                    FieldSpec::textarea("descripcion", "Descripción", false),
                    FieldSpec::select("estadoId", "Estado", Estados, true),
                ],
                relations: vec![Relation::new("estadoId", Estados, "estadoNombre")],
            },
            Subsistemas => Self {
                kind,
                title: "Subsistemas",
                singular: "Subsistema",
                deleted_message: "Subsistema eliminado",
                columns: vec![
                    Column::new("id", "ID", 80, N),
                    Column::new("nombre", "Nombre", 200, S),
                    Column::new("descripcion", "Descripción", 250, S),
                    Column::new("sistemaNombre", "Sistema", 180, S),
                    Column::new("estadoNombre", "Estado", 120, S),
                ],
                fields: vec![
                    FieldSpec::text("nombre", "Nombre del Subsistema", true),
                    FieldSpec::textarea("descripcion", "Descripción", false),
                    FieldSpec::select("sistemaId", "Sistema", Sistemas, true),
                    FieldSpec::select("estadoId", "Estado", Estados, true),
                ],
                relations: vec![
                    Relation::new("sistemaId", Sistemas, "sistemaNombre"),
                    Relation::new("estadoId", Estados, "estadoNombre"),
                ],
            },
            Ramas => Self {
                kind,
                title: "Ramas",
                singular: "Rama",
                deleted_message: "Rama eliminada",
                columns: vec![
                    Column::new("id", "ID", 80, N),
                    Column::new("nombre", "Nombre", 250, S),
                    Column::new("descripcion", "Descripción", 400, S),
                ],
                fields: vec![
                    FieldSpec::text("nombre", "Nombre de la Rama", true),
                    FieldSpec::textarea("descripcion", "Descripción", false),
                ],
                relations: vec![],
            },
            Proyectos => Self {
                kind,
                title: "Proyectos",
                singular: "Proyecto",
                deleted_message: "Proyecto eliminado",
                columns: vec![
                    Column::new("id", "ID", 80, N),
                    Column::new("nombre", "Nombre", 200, S),
                    Column::new("descripcion", "Descripción", 250, S),
                    Column::new("empresaNombre", "Empresa", 180, S),
                    Column::new("tipoProyectoNombre", "Tipo", 150, S),
                    Column::new("estadoNombre", "Estado", 120, S),
                ],
                fields: vec![
                    FieldSpec::text("nombre", "Nombre del Proyecto", true),
                    FieldSpec::textarea("descripcion", "Descripción", false),
                    FieldSpec::select("empresaId", "Empresa", Empresas, true),
                    FieldSpec::select("tipoProyectoId", "Tipo de Proyecto", TiposProyecto, true),
                    FieldSpec::select("estadoId", "Estado", Estados, true),
                ],
                relations: vec![
                    Relation::new("empresaId", Empresas, "empresaNombre"),
                    Relation::new("tipoProyectoId", TiposProyecto, "tipoProyectoNombre"),
                    Relation::new("estadoId", Estados, "estadoNombre"),
                ],
            },
        }
    }

    /// Looks up a field declaration by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        for kind in CatalogKind::ALL {
            assert_eq!(CatalogKind::from_path(kind.path()), Some(kind));
        }
        assert_eq!(CatalogKind::from_path("nope"), None);
    }

    #[test]
    fn every_definition_leads_with_id_column() {
        for kind in CatalogKind::ALL {
            let def = kind.definition();
            assert_eq!(def.columns[0].field, "id");
            assert_eq!(def.columns[0].column_type, ColumnType::Number);
        }
    }

    #[test]
    fn relations_match_select_fields() {
        for kind in CatalogKind::ALL {
            let def = kind.definition();
            for relation in &def.relations {
                let field = def
                    .field(relation.field)
                    .unwrap_or_else(|| panic!("{}: no field for relation {}", kind, relation.field));
                assert_eq!(field.field_type, FieldType::Select(relation.target));
                assert!(
                    def.columns.iter().any(|c| c.field == relation.display),
                    "{}: relation display {} has no column",
                    kind,
                    relation.display
                );
            }
        }
    }

    #[test]
    fn field_names_unique() {
        for kind in CatalogKind::ALL {
            let def = kind.definition();
            for (i, field) in def.fields.iter().enumerate() {
                assert!(
                    def.fields[i + 1..].iter().all(|f| f.name != field.name),
                    "{}: duplicate field {}",
                    kind,
                    field.name
                );
            }
        }
    }

    #[test]
    fn proyectos_declares_three_relations() {
        let def = CatalogKind::Proyectos.definition();
        assert_eq!(def.relations.len(), 3);
        assert_eq!(def.relations[0].display, "empresaNombre");
        assert_eq!(def.relations[1].display, "tipoProyectoNombre");
        assert_eq!(def.relations[2].display, "estadoNombre");
    }
}
