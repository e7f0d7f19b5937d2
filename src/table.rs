//! # Generic Data Grid
//!
//! A data grid renders an arbitrary record collection against a column
//! descriptor list, with client-side pagination and single-row selection. It
//! knows nothing about catalog semantics: records are JSON objects, columns
//! say which keys to show and how.
//!
//! The displayed page is always `data[page*size .. (page+1)*size]`. The
//! current page is clamped whenever the data or the page size changes, so a
//! shrinking collection can never leave the grid pointing past the end.
//! Selection is sticky: changing pages or data does not clear it; only the
//! caller does, explicitly.

use serde_json::Value;

use crate::{Column, ColumnType};

/// Page sizes the grid accepts.
pub const PAGE_SIZES: [usize; 4] = [5, 10, 20, 50];

/// Page size a grid starts with.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Placeholder for a missing or null cell value.
pub const EMPTY_CELL: &str = "-";

/// Placeholder row text for an empty collection.
pub const EMPTY_TABLE_MESSAGE: &str = "No hay datos disponibles";

const CHECK_GLYPH: &str = "✓";
const CROSS_GLYPH: &str = "✗";

/// Generic paginated grid over a record collection.
pub struct DataGrid {
    data: Vec<Value>,
    columns: Vec<Column>,
    current_page: usize,
    page_size: usize,
    selected_id: Option<i64>,
    on_row_select: Option<Box<dyn FnMut(&Value)>>,
}

impl DataGrid {
    /// Creates an empty grid with the given columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            data: Vec::new(),
            columns,
            current_page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            selected_id: None,
            on_row_select: None,
        }
    }

    /// Creates a grid already holding `data`.
    pub fn with_data(columns: Vec<Column>, data: Vec<Value>) -> Self {
        let mut grid = Self::new(columns);
        grid.set_data(data);
        grid
    }

    /// Registers the callback invoked with the full record whenever a row is
    /// selected.
    pub fn on_row_select(&mut self, callback: impl FnMut(&Value) + 'static) {
        self.on_row_select = Some(Box::new(callback));
    }

    /// Replaces the collection, clamping the current page to the new bounds.
    /// Selection is left untouched.
    pub fn set_data(&mut self, data: Vec<Value>) {
        self.data = data;
        self.clamp_page();
    }

    /// The full collection.
    pub fn data(&self) -> &[Value] {
        &self.data
    }

    /// The column descriptors.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of pages; zero for an empty collection.
    pub fn total_pages(&self) -> usize {
        self.data.len().div_ceil(self.page_size)
    }

    /// Current page, 0-based.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Current page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sets the page size and resets to the first page. Sizes outside
    /// [`PAGE_SIZES`] are rejected.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if !PAGE_SIZES.contains(&size) {
            return false;
        }
        self.page_size = size;
        self.current_page = 0;
        true
    }

    /// Jumps to `page`, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
        self.clamp_page();
    }

    /// Advances one page; a no-op on the last page.
    pub fn next_page(&mut self) {
        self.set_page(self.current_page + 1);
    }

    /// Goes back one page; a no-op on the first page.
    pub fn prev_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    /// The records on the current page.
    pub fn page_rows(&self) -> &[Value] {
        let start = self.current_page * self.page_size;
        if start >= self.data.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.data.len());
        &self.data[start..end]
    }

    /// Selects the row at `index` on the current page, invokes the selection
    /// callback with the full record, and returns it. Out-of-range indexes
    /// return `None` and change nothing.
    pub fn select_row(&mut self, index: usize) -> Option<Value> {
        let record = self.page_rows().get(index)?.clone();
        self.finish_selection(record)
    }

    /// Selects the record with `id` wherever it sits in the collection.
    pub fn select_by_id(&mut self, id: i64) -> Option<Value> {
        let record = self
            .data
            .iter()
            .find(|r| r.get("id").and_then(Value::as_i64) == Some(id))?
            .clone();
        self.finish_selection(record)
    }

    fn finish_selection(&mut self, record: Value) -> Option<Value> {
        self.selected_id = record.get("id").and_then(Value::as_i64);
        if let Some(callback) = &mut self.on_row_select {
            callback(&record);
        }
        Some(record)
    }

    /// Id of the selected row, if any.
    pub fn selected_id(&self) -> Option<i64> {
        self.selected_id
    }

    /// The selected record, if it is still present in the collection.
    pub fn selected(&self) -> Option<&Value> {
        let id = self.selected_id?;
        self.data.iter().find(|r| r.get("id").and_then(Value::as_i64) == Some(id))
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    fn clamp_page(&mut self) {
        let last = self.total_pages().saturating_sub(1);
        if self.current_page > last {
            self.current_page = last;
        }
    }

    /// Renders one cell according to the column's type.
    ///
    /// Missing and null values render as [`EMPTY_CELL`]; boolean columns as
    /// a check or cross glyph; date columns as `DD/MM/YYYY`; everything else
    /// as plain text.
    pub fn render_cell(row: &Value, column: &Column) -> String {
        let value = match row.get(column.field) {
            None | Some(Value::Null) => return EMPTY_CELL.to_string(),
            Some(value) => value,
        };
        match column.column_type {
            ColumnType::Boolean => {
                if truthy(value) {
                    CHECK_GLYPH.to_string()
                } else {
                    CROSS_GLYPH.to_string()
                }
            }
            ColumnType::Date => render_date(value),
            ColumnType::String | ColumnType::Number => plain(value),
        }
    }

    /// Renders the current page as an aligned text table: header, rows (or
    /// the empty placeholder), and a result-count footer.
    pub fn render_text(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .page_rows()
            .iter()
            .map(|row| self.columns.iter().map(|c| Self::render_cell(row, c)).collect())
            .collect();

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.header.chars().count()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for (i, column) in self.columns.iter().enumerate() {
            out.push_str(&pad(column.header, widths[i]));
            out.push_str("  ");
        }
        out.push('\n');

        if self.data.is_empty() {
            out.push_str(EMPTY_TABLE_MESSAGE);
            out.push('\n');
            return out;
        }

        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(&pad(cell, widths[i]));
                out.push_str("  ");
            }
            out.push('\n');
        }

        let start = self.current_page * self.page_size;
        let end = (start + self.page_size).min(self.data.len());
        out.push_str(&format!(
            "Mostrando {} a {} de {} resultados (página {} de {})\n",
            start + 1,
            end,
            self.data.len(),
            self.current_page + 1,
            self.total_pages()
        ));
        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    let mut padded = s.to_string();
    for _ in len..width {
        padded.push(' ');
    }
    padded
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn render_date(value: &Value) -> String {
    let Some(s) = value.as_str() else {
        return plain(value);
    };
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(s) {
        return datetime.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("id", "ID", 80, ColumnType::Number),
            Column::new("nombre", "Nombre", 200, ColumnType::String),
        ]
    }

    fn rows(n: usize) -> Vec<Value> {
        (1..=n).map(|i| json!({"id": i, "nombre": format!("Fila {}", i)})).collect()
    }

    #[test]
    fn twelve_rows_make_two_pages_of_ten() {
        let mut grid = DataGrid::with_data(columns(), rows(12));
        assert_eq!(grid.total_pages(), 2);
        assert_eq!(grid.page_rows().len(), 10);
        assert_eq!(grid.page_rows()[0]["id"], json!(1));
        assert_eq!(grid.page_rows()[9]["id"], json!(10));

        grid.next_page();
        assert_eq!(grid.current_page(), 1);
        assert_eq!(grid.page_rows().len(), 2);
        assert_eq!(grid.page_rows()[0]["id"], json!(11));
        assert_eq!(grid.page_rows()[1]["id"], json!(12));
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut grid = DataGrid::with_data(columns(), rows(12));
        grid.prev_page();
        assert_eq!(grid.current_page(), 0);
        grid.next_page();
        grid.next_page();
        grid.next_page();
        assert_eq!(grid.current_page(), 1);
        grid.set_page(99);
        assert_eq!(grid.current_page(), 1);
    }

    #[test]
    fn shrinking_data_clamps_current_page() {
        let mut grid = DataGrid::with_data(columns(), rows(25));
        grid.set_page(2);
        assert_eq!(grid.current_page(), 2);
        grid.set_data(rows(12));
        assert_eq!(grid.current_page(), 1);
        grid.set_data(Vec::new());
        assert_eq!(grid.current_page(), 0);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut grid = DataGrid::with_data(columns(), rows(25));
        grid.set_page(2);
        assert!(grid.set_page_size(5));
        assert_eq!(grid.current_page(), 0);
        assert_eq!(grid.total_pages(), 5);
    }

    #[test]
    fn page_size_outside_the_set_is_rejected() {
        let mut grid = DataGrid::with_data(columns(), rows(25));
        assert!(!grid.set_page_size(7));
        assert_eq!(grid.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn pages_concatenate_to_the_whole_collection() {
        let data = rows(23);
        let mut grid = DataGrid::with_data(columns(), data.clone());
        assert!(grid.set_page_size(5));
        let mut seen = Vec::new();
        for page in 0..grid.total_pages() {
            grid.set_page(page);
            seen.extend_from_slice(grid.page_rows());
        }
        assert_eq!(seen, data);
    }

    #[test]
    fn selecting_a_row_fires_callback_with_full_record() {
        let mut grid = DataGrid::with_data(columns(), rows(12));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        grid.on_row_select(move |record| sink.borrow_mut().push(record.clone()));

        let selected = grid.select_row(2).unwrap();
        assert_eq!(selected["nombre"], json!("Fila 3"));
        assert_eq!(grid.selected_id(), Some(3));
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0], json!({"id": 3, "nombre": "Fila 3"}));
    }

    #[test]
    fn selection_survives_page_changes() {
        let mut grid = DataGrid::with_data(columns(), rows(12));
        grid.select_row(0);
        grid.next_page();
        assert_eq!(grid.selected_id(), Some(1));
        assert_eq!(grid.selected().unwrap()["nombre"], json!("Fila 1"));
        grid.clear_selection();
        assert_eq!(grid.selected_id(), None);
    }

    #[test]
    fn select_out_of_range_is_a_no_op() {
        let mut grid = DataGrid::with_data(columns(), rows(3));
        assert!(grid.select_row(5).is_none());
        assert_eq!(grid.selected_id(), None);
    }

    #[test]
    fn missing_value_renders_placeholder() {
        let column = Column::new("correo", "Correo", 100, ColumnType::String);
        assert_eq!(DataGrid::render_cell(&json!({"id": 1}), &column), EMPTY_CELL);
        assert_eq!(DataGrid::render_cell(&json!({"correo": null}), &column), EMPTY_CELL);
    }

    #[test]
    fn boolean_column_renders_glyph_pair() {
        let column = Column::new("activo", "Activo", 80, ColumnType::Boolean);
        assert_eq!(DataGrid::render_cell(&json!({"activo": true}), &column), "✓");
        assert_eq!(DataGrid::render_cell(&json!({"activo": false}), &column), "✗");
    }

    #[test]
    fn date_column_renders_day_month_year() {
        let column = Column::new("creado", "Creado", 120, ColumnType::Date);
        assert_eq!(
            DataGrid::render_cell(&json!({"creado": "2024-03-09"}), &column),
            "09/03/2024"
        );
        assert_eq!(
            DataGrid::render_cell(&json!({"creado": "2024-03-09T12:30:00Z"}), &column),
            "09/03/2024"
        );
    }

    #[test]
    fn other_types_render_as_plain_text() {
        let nombre = Column::new("nombre", "Nombre", 100, ColumnType::String);
        let id = Column::new("id", "ID", 80, ColumnType::Number);
        assert_eq!(DataGrid::render_cell(&json!({"nombre": "main"}), &nombre), "main");
        assert_eq!(DataGrid::render_cell(&json!({"id": 42}), &id), "42");
    }

    #[test]
    fn empty_collection_renders_placeholder_row() {
        let grid = DataGrid::new(columns());
        let text = grid.render_text();
        assert!(text.contains(EMPTY_TABLE_MESSAGE));
        assert!(!text.contains("Mostrando"));
    }

    #[test]
    fn render_text_includes_headers_and_result_count() {
        let grid = DataGrid::with_data(columns(), rows(12));
        let text = grid.render_text();
        assert!(text.contains("ID"));
        assert!(text.contains("Nombre"));
        assert!(text.contains("Fila 1"));
        assert!(text.contains("Mostrando 1 a 10 de 12 resultados"));
    }
}
