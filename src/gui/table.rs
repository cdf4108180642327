use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::backend::editor::Editor;

/// Renders the grid as an editable table. Ragged rows are shown padded
/// with empty inputs; typing into one grows that row.
pub fn render_table(ui: &mut egui::Ui, editor: &mut Editor, row_height: f32) {
    let grid = editor.grid();
    let num_rows = grid.num_rows();
    let num_cols = grid.num_cols();

    if num_rows == 0 {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(
                egui::RichText::new("No valid CSV data to display.")
                    .size(16.0)
                    .color(egui::Color32::from_gray(120)),
            );
        });
        return;
    }

    let mut pending_edit: Option<(usize, usize, String)> = None;

    egui::ScrollArea::horizontal().show(ui, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto())
            .columns(Column::initial(150.0).at_least(60.0).resizable(true), num_cols)
            .header(30.0, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                for i in 0..num_cols {
                    header.col(|ui| {
                        ui.strong(format!("Col {}", i + 1));
                    });
                }
            })
            .body(|body| {
                body.rows(row_height, num_rows, |mut row| {
                    let row_index = row.index();
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new((row_index + 1).to_string())
                                .color(egui::Color32::from_gray(100)),
                        );
                    });
                    for col_index in 0..num_cols {
                        row.col(|ui| {
                            let mut text = grid.cell(row_index, col_index).to_string();
                            let response = ui.add(
                                egui::TextEdit::singleline(&mut text)
                                    .desired_width(f32::INFINITY),
                            );
                            if response.changed() {
                                pending_edit = Some((row_index, col_index, text));
                            }
                        });
                    }
                });
            });
    });

    if let Some((row, col, value)) = pending_edit {
        editor.set_cell(row, col, value);
    }
}
