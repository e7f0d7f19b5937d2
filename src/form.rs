//! # Generic Form
//!
//! A modal data-entry surface driven entirely by a field list. The form owns
//! a draft (one value per declared field) and a per-field error map; it
//! performs required-field validation on submit and hands the validated
//! draft back to its caller. It never touches a store or the network; all
//! persistence belongs to the screen driving it through a catalog service.
//!
//! State machine: closed → open(create, empty draft) or open(edit, prefilled
//! draft) → submit. A submit with validation errors stays open with the
//! error map populated; a successful submit yields the draft and closes;
//! cancel closes and discards the draft.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::{CatalogKind, FieldSpec, FieldType};

/// One choice in a select field: a related record's id and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Related record id; the value submitted when chosen.
    pub id: i64,
    /// Display name shown for the choice.
    pub nombre: String,
}

impl SelectOption {
    /// Creates an option.
    pub fn new(id: i64, nombre: impl Into<String>) -> Self {
        Self {
            id,
            nombre: nombre.into(),
        }
    }
}

/// Input kind of a resolved form field. Unlike [`FieldType`], `Select`
/// carries its actual option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
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
    /// Option list; a blank "Seleccione..." choice precedes the options.
    Select {
        /// The selectable options, in display order.
        options: Vec<SelectOption>,
    },
}

/// A form field with its options resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Key in the draft object.
    pub name: String,
    /// Label shown next to the input and used in validation messages.
    pub label: String,
    /// Whether submission requires a non-empty value.
    pub required: bool,
    /// Input kind.
    pub kind: FieldKind,
}

impl FormField {
    /// Resolves a declaration into a form field, pulling select options from
    /// `options` by source catalog (absent sources resolve to an empty
    /// list).
    pub fn resolve(spec: &FieldSpec, options: &HashMap<CatalogKind, Vec<SelectOption>>) -> Self {
        let kind = match spec.field_type {
            FieldType::Text => FieldKind::Text,
            FieldType::TextArea => FieldKind::TextArea,
            FieldType::Email => FieldKind::Email,
            FieldType::Number => FieldKind::Number,
            FieldType::Checkbox => FieldKind::Checkbox,
            FieldType::Select(source) => FieldKind::Select {
                options: options.get(&source).cloned().unwrap_or_default(),
            },
        };
        Self {
            name: spec.name.to_string(),
            label: spec.label.to_string(),
            required: spec.required,
            kind,
        }
    }

    fn empty_value(&self) -> Value {
        match self.kind {
            FieldKind::Checkbox => Value::Bool(false),
            _ => Value::String(String::new()),
        }
    }
}

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Start from an empty draft.
    Create,
    /// Start from an existing record's values.
    Edit,
}

enum FormState {
    Closed,
    Open {
        mode: FormMode,
        draft: BTreeMap<String, Value>,
        errors: BTreeMap<String, String>,
    },
}

/// Generic modal form over a resolved field list.
pub struct GenericForm {
    title: String,
    fields: Vec<FormField>,
    state: FormState,
}

impl GenericForm {
    /// Creates a closed form. `title` is the singular entity title shown in
    /// the header ("Crear {title}" / "Editar {title}").
    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            title: title.into(),
            fields,
            state: FormState::Closed,
        }
    }

    /// The resolved field list.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Whether the form is open.
    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open { .. })
    }

    /// The open mode, if open.
    pub fn mode(&self) -> Option<FormMode> {
        match &self.state {
            FormState::Open { mode, .. } => Some(*mode),
            FormState::Closed => None,
        }
    }

    /// Opens in create mode with an empty draft (empty string per field,
    /// unchecked checkboxes). Any previous draft and errors are discarded.
    pub fn open_create(&mut self) {
        let draft = self
            .fields
            .iter()
            .map(|field| (field.name.clone(), field.empty_value()))
            .collect();
        self.state = FormState::Open {
            mode: FormMode::Create,
            draft,
            errors: BTreeMap::new(),
        };
    }

    /// Opens in edit mode, prefilled with `initial`'s values for the
    /// declared fields. Fields absent from `initial` start empty.
    pub fn open_edit(&mut self, initial: &Value) {
        let draft = self
            .fields
            .iter()
            .map(|field| {
                let value = initial.get(&field.name).cloned().unwrap_or_else(|| field.empty_value());
                (field.name.clone(), value)
            })
            .collect();
        self.state = FormState::Open {
            mode: FormMode::Edit,
            draft,
            errors: BTreeMap::new(),
        };
    }

    /// Closes the form, discarding the draft.
    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
    }

    /// Sets one draft value and clears that field's validation error, if
    /// any. Returns false when the form is closed or the field is unknown.
    pub fn set_value(&mut self, name: &str, value: Value) -> bool {
        if !self.fields.iter().any(|f| f.name == name) {
            return false;
        }
        match &mut self.state {
            FormState::Open { draft, errors, .. } => {
                draft.insert(name.to_string(), value);
                errors.remove(name);
                true
            }
            FormState::Closed => false,
        }
    }

    /// The current draft value for a field.
    pub fn value(&self, name: &str) -> Option<&Value> {
        match &self.state {
            FormState::Open { draft, .. } => draft.get(name),
            FormState::Closed => None,
        }
    }

    /// The validation error for a field, if any.
    pub fn error(&self, name: &str) -> Option<&str> {
        match &self.state {
            FormState::Open { errors, .. } => errors.get(name).map(String::as_str),
            FormState::Closed => None,
        }
    }

    /// Whether the last submit left validation errors.
    pub fn has_errors(&self) -> bool {
        match &self.state {
            FormState::Open { errors, .. } => !errors.is_empty(),
            FormState::Closed => false,
        }
    }

    /// Validates and submits the draft.
    ///
    /// On success the draft object is returned and the form closes. When a
    /// required field is empty, the error map fills with one message per
    /// violation ("{label} es requerido"), nothing is returned, and the form
    /// stays open.
    pub fn submit(&mut self) -> Option<Value> {
        let FormState::Open { draft, errors, .. } = &mut self.state else {
            return None;
        };

        let mut violations = BTreeMap::new();
        for field in &self.fields {
            if field.required && draft.get(&field.name).is_none_or(is_empty) {
                violations.insert(field.name.clone(), format!("{} es requerido", field.label));
            }
        }
        if !violations.is_empty() {
            *errors = violations;
            return None;
        }

        let submitted: serde_json::Map<String, Value> =
            draft.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        self.state = FormState::Closed;
        Some(Value::Object(submitted))
    }

    /// Renders the open form as text: header, one line per field with its
    /// current value (and option list for selects), and any validation
    /// errors. Closed forms render nothing.
    pub fn render_text(&self) -> String {
        let FormState::Open { mode, draft, errors } = &self.state else {
            return String::new();
        };
        let mut out = match mode {
            FormMode::Create => format!("Crear {}\n", self.title),
            FormMode::Edit => format!("Editar {}\n", self.title),
        };
        for field in &self.fields {
            let marker = if field.required { "*" } else { "" };
            let value = draft.get(&field.name).cloned().unwrap_or(Value::Null);
            let rendered = match &field.kind {
                FieldKind::Checkbox => {
                    if value.as_bool().unwrap_or(false) {
                        "[x]".to_string()
                    } else {
                        "[ ]".to_string()
                    }
                }
                FieldKind::Select { options } => {
                    let mut choices = vec!["Seleccione...".to_string()];
                    choices.extend(options.iter().map(|o| format!("{}: {}", o.id, o.nombre)));
                    format!("[{}] ({})", display(&value), choices.join(", "))
                }
                FieldKind::TextArea => format!("[{}] (multilínea)", display(&value)),
                FieldKind::Text | FieldKind::Email | FieldKind::Number => {
                    format!("[{}]", display(&value))
                }
            };
            out.push_str(&format!("{}{}: {}\n", field.label, marker, rendered));
            if let Some(error) = errors.get(&field.name) {
                out.push_str(&format!("  ! {}\n", error));
            }
        }
        out
    }
}

/// Empty per the required-field check: missing, null, the empty string, or
/// an unchecked checkbox.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => !b,
        _ => false,
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
