//! Column descriptors and rendered cells.

use std::fmt;
use std::sync::Arc;

use ustr::Ustr;

use super::row::TableRow;
use super::value::CellValue;

/// Visual emphasis of a rendered cell, used for status badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Default,
    Positive,
    Warning,
    Negative,
    Muted,
}

/// Displayable output of one column for one row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub tone: Tone,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Default,
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

impl From<&CellValue> for Cell {
    fn from(value: &CellValue) -> Self {
        Self::new(value.display())
    }
}

/// Custom cell renderer. Receives the value already looked up by the column
/// key, plus the whole row.
pub type RenderFn<R> = Arc<dyn Fn(&CellValue, &R) -> Cell + Send + Sync>;

/// Describes how to label, sort and render one property of each row.
pub struct Column<R> {
    pub key: Ustr,
    pub header: String,
    pub sortable: bool,
    /// Preferred width in points; `None` lets the column take the remainder.
    pub width: Option<f32>,
    render: Option<RenderFn<R>>,
}

impl<R> Column<R> {
    pub fn new(key: &str, header: impl Into<String>) -> Self {
        Self {
            key: Ustr::from(key),
            header: header.into(),
            sortable: false,
            width: None,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width.max(20.0));
        self
    }

    pub fn render(mut self, render: impl Fn(&CellValue, &R) -> Cell + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn has_renderer(&self) -> bool {
        self.render.is_some()
    }
}

impl<R: TableRow> Column<R> {
    /// Renders this column for `row`. A key the row does not have yields an
    /// empty cell.
    pub fn cell(&self, row: &R) -> Cell {
        let value = row.value(&self.key);
        match &self.render {
            Some(render) => render(&value, row),
            None => Cell::from(&value),
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header.clone(),
            sortable: self.sortable,
            width: self.width,
            render: self.render.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}
