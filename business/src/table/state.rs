//! Search, sort and pagination state of a data table.

use ustr::Ustr;

use super::column::Column;
use super::pagination::{
    DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, clamp_page, page_bounds, page_window, total_pages,
};
use super::row::TableRow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Header indicator.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "⬆",
            Self::Desc => "⬇",
        }
    }
}

/// View state owned by one table instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub sort_column: Option<Ustr>,
    pub sort_direction: SortDirection,
    /// 1-based.
    pub current_page: usize,
    pub page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            sort_column: None,
            sort_direction: SortDirection::Asc,
            current_page: 1,
            page_size,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    pub searchable: bool,
    pub search_placeholder: String,
    pub empty_message: String,
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            searchable: true,
            search_placeholder: "Search...".to_owned(),
            empty_message: "No data".to_owned(),
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableOptions {
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Sets the initial page size. Ignored unless it is one of the options.
    pub fn default_page_size(mut self, page_size: usize) -> Self {
        if self.page_size_options.contains(&page_size) {
            self.default_page_size = page_size;
        }
        self
    }
}

/// A user interaction with the table controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    Search(String),
    Sort(Ustr),
    /// Requested page; out-of-range values are clamped.
    ChangePage(i64),
    ChangePageSize(usize),
}

/// Client-side searchable, sortable, paginated table over `rows`.
///
/// The rows themselves are never reordered or mutated; the table keeps the
/// indices of the matching rows in display order and slices pages out of
/// that.
#[derive(Debug, Clone)]
pub struct DataTable<R> {
    rows: Vec<R>,
    columns: Vec<Column<R>>,
    options: TableOptions,
    state: ViewState,
    /// Indices into `rows` that match the search, in sorted order.
    visible: Vec<usize>,
}

impl<R: TableRow> DataTable<R> {
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self::with_options(columns, TableOptions::default())
    }

    pub fn with_options(columns: Vec<Column<R>>, options: TableOptions) -> Self {
        let state = ViewState::new(options.default_page_size);
        Self {
            rows: Vec::new(),
            columns,
            options,
            state,
            visible: Vec::new(),
        }
    }

    pub fn with_rows(mut self, rows: Vec<R>) -> Self {
        self.replace_rows(rows);
        self
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn filtered_count(&self) -> usize {
        self.visible.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.visible.len(), self.state.page_size)
    }

    /// Applies one interaction. Returns whether the view state changed.
    pub fn apply(&mut self, action: TableAction) -> bool {
        match action {
            TableAction::Search(term) => self.set_search(term),
            TableAction::Sort(key) => self.toggle_sort(&key),
            TableAction::ChangePage(page) => self.set_page(page),
            TableAction::ChangePageSize(size) => self.set_page_size(size),
        }
    }

    /// Sets the search term and goes back to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.state.search_term {
            return false;
        }
        self.state.search_term = term;
        self.state.current_page = 1;
        self.refresh_visible();
        true
    }

    /// Sorts by `key`, toggling the direction when it is already the sort
    /// column. Keys that are not sortable columns are ignored.
    pub fn toggle_sort(&mut self, key: &str) -> bool {
        let Some(column) = self.columns.iter().find(|c| c.sortable && c.key.as_str() == key) else {
            log::debug!("Ignoring sort request for non-sortable column {key}");
            return false;
        };
        let key = column.key;
        if self.state.sort_column == Some(key) {
            self.state.sort_direction = self.state.sort_direction.toggled();
        } else {
            self.state.sort_column = Some(key);
            self.state.sort_direction = SortDirection::Asc;
        }
        self.refresh_visible();
        true
    }

    /// Moves to `page`, clamped into the available range.
    pub fn set_page(&mut self, page: i64) -> bool {
        let page = clamp_page(page, self.total_pages());
        if page == self.state.current_page {
            return false;
        }
        self.state.current_page = page;
        true
    }

    /// Changes the page size and goes back to the first page. Sizes outside
    /// the configured options are rejected.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !self.options.page_size_options.contains(&page_size) {
            log::warn!("Rejecting page size {page_size}, not one of the options");
            return false;
        }
        if page_size == self.state.page_size && self.state.current_page == 1 {
            return false;
        }
        self.state.page_size = page_size;
        self.state.current_page = 1;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        self.set_page(self.state.current_page as i64 - 1)
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.state.current_page as i64 + 1)
    }

    /// Replaces the data, keeping search and sort, and clamps the current
    /// page into the new range.
    pub fn replace_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.refresh_visible();
        self.state.current_page = clamp_page(self.state.current_page as i64, self.total_pages());
    }

    /// Mutable access to the row at `index` in [`rows`](Self::rows). The view
    /// is re-derived afterwards since the edit may change search or sort
    /// results.
    pub fn update_row(&mut self, index: usize, update: impl FnOnce(&mut R)) -> bool {
        let Some(row) = self.rows.get_mut(index) else {
            return false;
        };
        update(row);
        self.refresh_visible();
        self.state.current_page = clamp_page(self.state.current_page as i64, self.total_pages());
        true
    }

    /// Index in [`rows`](Self::rows) of the first row matching `predicate`.
    pub fn position(&self, predicate: impl Fn(&R) -> bool) -> Option<usize> {
        self.rows.iter().position(predicate)
    }

    fn refresh_visible(&mut self) {
        let needle = self.state.search_term.to_lowercase();
        self.visible = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| needle.is_empty() || row.values().iter().any(|v| v.matches(&needle)))
            .map(|(i, _)| i)
            .collect();

        if let Some(key) = self.state.sort_column {
            let rows = &self.rows;
            let descending = self.state.sort_direction == SortDirection::Desc;
            // stable: ties keep their filtered order
            self.visible.sort_by(|&a, &b| {
                let ordering = rows[a].value(&key).compare(&rows[b].value(&key));
                if descending { ordering.reverse() } else { ordering }
            });
        }
    }

    /// Derives what the current page shows.
    pub fn view(&self) -> TableView<'_, R> {
        let filtered_count = self.visible.len();
        let total_pages = self.total_pages();
        let current_page = self.state.current_page;
        let bounds = page_bounds(current_page, self.state.page_size, filtered_count);
        let rows: Vec<&R> = self.visible[bounds.clone()]
            .iter()
            .map(|&i| &self.rows[i])
            .collect();
        let empty_message = rows.is_empty().then_some(self.options.empty_message.as_str());

        TableView {
            rows,
            first_index: bounds.start,
            filtered_count,
            total_rows: self.rows.len(),
            total_pages,
            current_page,
            page_window: page_window(current_page, total_pages).collect(),
            empty_message,
        }
    }
}

/// Snapshot of one rendered page.
#[derive(Debug, Clone)]
pub struct TableView<'a, R> {
    pub rows: Vec<&'a R>,
    /// Zero-based position of `rows[0]` within the filtered list.
    pub first_index: usize,
    pub filtered_count: usize,
    pub total_rows: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_window: Vec<usize>,
    /// Set when the page has no rows.
    pub empty_message: Option<&'a str>,
}

impl<R> TableView<'_, R> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// `"Showing 11 to 12 of 12 entries"`.
    pub fn summary(&self) -> String {
        if self.rows.is_empty() {
            return format!("Showing 0 to 0 of {} entries", self.filtered_count);
        }
        format!(
            "Showing {} to {} of {} entries",
            self.first_index + 1,
            self.first_index + self.rows.len(),
            self.filtered_count
        )
    }
}
