//! Renders a [`DataTable`]: toolbar, sortable header, rows, pagination.
//!
//! Control interactions are collected while drawing and applied to the table
//! once the frame's view has been released.

use backoffice_business::table::Column as TableColumn;
use backoffice_business::table::{
    Cell, DataTable, TableAction, TableOptions, TableRow, TableView, ViewState,
};
use egui::{Align, Button, ComboBox, Frame, Layout, RichText, Stroke, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};
use ustr::Ustr;

use crate::utils::colors::{TABLE_BORDER_COLOR, tone_color};

const ROW_HEIGHT: f32 = 26.0;
const HEADER_HEIGHT: f32 = 24.0;
const SEARCH_WIDTH: f32 = 240.0;
const MIN_FLEX_WIDTH: f32 = 100.0;

type RenderAction<'a, R, A> = Box<dyn FnMut(&mut Ui, &R) -> Option<A> + 'a>;

struct RowActions<'a, R, A> {
    header: &'a str,
    width: f32,
    render: RenderAction<'a, R, A>,
}

/// What happened while the table was shown.
#[derive(Debug)]
pub struct DataTableOutput<A> {
    /// The view state changed.
    pub changed: bool,
    /// Action picked from a row's action column.
    pub action: Option<A>,
}

pub struct DataTableWidget<'a, R, A = ()> {
    id_salt: &'a str,
    table: &'a mut DataTable<R>,
    row_actions: Option<RowActions<'a, R, A>>,
}

impl<'a, R: TableRow> DataTableWidget<'a, R> {
    pub fn new(id_salt: &'a str, table: &'a mut DataTable<R>) -> Self {
        Self {
            id_salt,
            table,
            row_actions: None,
        }
    }
}

impl<'a, R: TableRow, A> DataTableWidget<'a, R, A> {
    /// Adds a trailing column whose cells may return an action for their row.
    pub fn row_actions<B>(
        self,
        header: &'a str,
        width: f32,
        render: impl FnMut(&mut Ui, &R) -> Option<B> + 'a,
    ) -> DataTableWidget<'a, R, B> {
        DataTableWidget {
            id_salt: self.id_salt,
            table: self.table,
            row_actions: Some(RowActions {
                header,
                width,
                render: Box::new(render),
            }),
        }
    }

    pub fn show(self, ui: &mut Ui) -> DataTableOutput<A> {
        let Self {
            id_salt,
            table,
            mut row_actions,
        } = self;
        let mut pending = Vec::new();
        let mut action = None;

        {
            toolbar(ui, id_salt, table.state(), table.options(), &mut pending);
            ui.add_space(4.0);

            let view = table.view();
            let columns = table.columns();
            let state = table.state();

            Frame::NONE
                .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
                .show(ui, |ui| {
                    let mut builder = TableBuilder::new(ui)
                        .id_salt(id_salt)
                        .striped(true)
                        .resizable(false)
                        .vscroll(false)
                        .cell_layout(Layout::left_to_right(Align::Center));
                    for column in columns {
                        builder = builder.column(match column.width {
                            Some(width) => Column::exact(width),
                            None => Column::remainder().at_least(MIN_FLEX_WIDTH),
                        });
                    }
                    if let Some(actions) = &row_actions {
                        builder = builder.column(Column::exact(actions.width));
                    }

                    builder
                        .header(HEADER_HEIGHT, |mut header| {
                            for column in columns {
                                header.col(|ui| {
                                    if let Some(key) = header_cell(ui, column, state) {
                                        pending.push(TableAction::Sort(key));
                                    }
                                });
                            }
                            if let Some(actions) = &row_actions {
                                header.col(|ui| {
                                    ui.strong(actions.header);
                                });
                            }
                        })
                        .body(|mut body| {
                            if let Some(message) = view.empty_message {
                                body.row(ROW_HEIGHT, |mut row| {
                                    row.col(|ui| {
                                        ui.weak(message);
                                    });
                                    let blank =
                                        columns.len().saturating_sub(1) + usize::from(row_actions.is_some());
                                    for _ in 0..blank {
                                        row.col(|_| {});
                                    }
                                });
                                return;
                            }

                            for record in &view.rows {
                                body.row(ROW_HEIGHT, |mut row| {
                                    for column in columns {
                                        row.col(|ui| {
                                            cell_label(ui, &column.cell(record));
                                        });
                                    }
                                    if let Some(actions) = row_actions.as_mut() {
                                        row.col(|ui| {
                                            if let Some(picked) = (actions.render)(ui, record) {
                                                action = Some(picked);
                                            }
                                        });
                                    }
                                });
                            }
                        });
                });

            ui.add_space(4.0);
            pagination(ui, id_salt, &view, &mut pending);
        }

        let changed = pending
            .into_iter()
            .fold(false, |changed, pending| table.apply(pending) | changed);
        if changed {
            ui.ctx().request_repaint();
        }
        DataTableOutput { changed, action }
    }
}

/// Shows `table` without row actions. Returns whether the view state changed.
pub fn data_table<R: TableRow>(ui: &mut Ui, id_salt: &str, table: &mut DataTable<R>) -> bool {
    DataTableWidget::new(id_salt, table).show(ui).changed
}

fn toolbar(
    ui: &mut Ui,
    id_salt: &str,
    state: &ViewState,
    options: &TableOptions,
    pending: &mut Vec<TableAction>,
) {
    ui.horizontal(|ui| {
        if options.searchable {
            let mut term = state.search_term.clone();
            let response = ui.add(
                TextEdit::singleline(&mut term)
                    .id_salt((id_salt, "search"))
                    .hint_text(options.search_placeholder.as_str())
                    .desired_width(SEARCH_WIDTH),
            );
            if response.changed() {
                pending.push(TableAction::Search(term));
            }
            if !state.search_term.is_empty()
                && ui.small_button("✖").on_hover_text("Clear search").clicked()
            {
                pending.push(TableAction::Search(String::new()));
            }
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ComboBox::from_id_salt((id_salt, "page_size"))
                .selected_text(state.page_size.to_string())
                .width(60.0)
                .show_ui(ui, |ui| {
                    for &size in &options.page_size_options {
                        if ui
                            .selectable_label(size == state.page_size, size.to_string())
                            .clicked()
                        {
                            pending.push(TableAction::ChangePageSize(size));
                        }
                    }
                });
            ui.label("Rows per page");
        });
    });
}

/// Header label, clickable when the column sorts. Returns the key to sort by
/// when clicked.
fn header_cell<R>(ui: &mut Ui, column: &TableColumn<R>, state: &ViewState) -> Option<Ustr> {
    if !column.sortable {
        ui.strong(column.header.as_str());
        return None;
    }

    let text = match state.sort_column {
        Some(key) if key == column.key => {
            format!("{} {}", column.header, state.sort_direction.arrow())
        }
        _ => column.header.clone(),
    };
    let clicked = ui
        .add(Button::new(RichText::new(text).strong()).frame(false))
        .on_hover_text("Sort")
        .clicked();
    clicked.then_some(column.key)
}

fn cell_label(ui: &mut Ui, cell: &Cell) {
    let text = RichText::new(&cell.text);
    let text = match tone_color(cell.tone) {
        Some(color) => text.color(color),
        None => text,
    };
    ui.label(text);
}

fn pagination<R>(ui: &mut Ui, id_salt: &str, view: &TableView<'_, R>, pending: &mut Vec<TableAction>) {
    ui.push_id((id_salt, "pagination"), |ui| {
        ui.horizontal(|ui| {
            ui.label(view.summary());

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                // Right to left: Next is laid out first.
                if ui.add_enabled(view.has_next(), Button::new("Next")).clicked() {
                    pending.push(TableAction::ChangePage(view.current_page as i64 + 1));
                }
                for &page in view.page_window.iter().rev() {
                    if ui
                        .selectable_label(page == view.current_page, page.to_string())
                        .clicked()
                    {
                        pending.push(TableAction::ChangePage(page as i64));
                    }
                }
                if ui
                    .add_enabled(view.has_previous(), Button::new("Previous"))
                    .clicked()
                {
                    pending.push(TableAction::ChangePage(view.current_page as i64 - 1));
                }
            });
        });
    });
}
