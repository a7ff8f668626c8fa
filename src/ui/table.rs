use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::Dataset;

const ROW_HEIGHT: f32 = 18.0;

/// Render the loaded columns as a scrolling table, one row per sample.
pub fn data_table(ui: &mut Ui, dataset: &Dataset) {
    let columns = dataset.columns();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(40.0))
        .columns(Column::auto().at_least(70.0), columns.len())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            for c in columns {
                header.col(|ui| {
                    ui.strong(&c.name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, dataset.row_count(), |mut row| {
                let i = row.index();
                row.col(|ui| {
                    ui.label(i.to_string());
                });
                for c in columns {
                    row.col(|ui| {
                        ui.monospace(format!("{:.6}", c.values[i]));
                    });
                }
            });
        });
}
