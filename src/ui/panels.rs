use eframe::egui::{self, Color32, RichText, Ui};

use crate::figure::FigureContent;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – series and camera widgets
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Series");
    ui.separator();

    let names: Vec<String> = state
        .figure
        .series_names()
        .into_iter()
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        ui.label("Single unnamed line.");
    }

    for name in &names {
        let color = state.series_colors.color_for(Some(name.as_str()));
        let mut checked = state.is_visible(Some(name.as_str()));
        if ui
            .checkbox(&mut checked, RichText::new(name).color(color))
            .changed()
        {
            state.toggle_series(name);
        }
    }

    if matches!(state.figure.content, FigureContent::HeatSurface(_)) {
        ui.checkbox(&mut state.show_surface, "Surface");
    }

    if state.spec.is_3d() {
        ui.add_space(8.0);
        ui.heading("View");
        ui.separator();

        ui.add(egui::Slider::new(&mut state.view.azimuth, -180.0..=180.0).text("Azimuth"));
        ui.add(egui::Slider::new(&mut state.view.elevation, -90.0..=90.0).text("Elevation"));
        if ui.button("Reset view").clicked() {
            state.reset_view();
        }
        ui.label(RichText::new("Drag the plot to rotate.").weak());
    }

    ui.add_space(8.0);
    ui.separator();
    ui.checkbox(&mut state.show_table, "Data table");
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{}: {} rows",
            state.spec.source_path.display(),
            state.dataset.row_count()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open simulation output")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.reload_from(path);
    }
}
