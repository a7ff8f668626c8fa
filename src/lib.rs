//! Interactive viewers for simulation output stored as CSV.
//!
//! Each binary pairs a fixed [`PlotSpec`] with [`run`]: the file is loaded,
//! shaped into a [`Figure`] and shown in a window until it is closed. Loading
//! and shaping ([`load_figure`]) never touch the GUI.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod figure;
pub mod state;
pub mod ui;
pub mod view;

use anyhow::{anyhow, Context};
use eframe::egui;

use app::PlotViewerApp;
use data::loader::load_file;
use state::AppState;

pub use config::{AxisLabels, PlotKind, PlotSpec};
pub use data::{DataError, Dataset, ErrorKind};
pub use figure::{build_figure, Figure};

/// Read the columns `spec` needs and shape them into a figure.
pub fn load_figure(spec: &PlotSpec) -> Result<(Dataset, Figure), DataError> {
    let dataset = load_file(&spec.source_path, &spec.required_columns())?;
    let figure = build_figure(spec, &dataset)?;
    Ok((dataset, figure))
}

/// Load, shape and display `spec`, blocking until the window is closed.
///
/// Nothing is shown when the data cannot be loaded.
pub fn run(spec: PlotSpec) -> anyhow::Result<()> {
    let (dataset, figure) = load_figure(&spec)
        .with_context(|| format!("loading {}", spec.source_path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let window_title = spec.title.clone();
    let state = AppState::new(spec, dataset, figure);

    eframe::run_native(
        &window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(PlotViewerApp::new(state)))),
    )
    .map_err(|e| anyhow!("display window failed: {e}"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use figure::FigureContent;

    #[test]
    fn test_load_figure_heat_example() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"t,a1,a2,a3,a4,a5\n0,1.0,0.9,0.8,0.7,0.6\n1,0.8,0.85,0.82,0.75,0.65")
            .unwrap();

        let spec = PlotSpec::heat_surface().with_source(file.path());
        let (dataset, figure) = load_figure(&spec).unwrap();

        assert_eq!(dataset.row_count(), 2);
        let FigureContent::HeatSurface(heat) = &figure.content else {
            panic!("expected heat surface");
        };
        assert!(heat.series.iter().all(|s| s.points.len() == 2));
        assert_eq!(heat.grid.shape(), (2, 5));
        assert!(heat.grid.time_grid.row(1).iter().all(|&t| t == 1.0));
        assert_eq!(figure.labels, AxisLabels::xyz("Time", "Position", "Value"));
    }

    #[test]
    fn test_load_figure_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let spec = PlotSpec::lorenz_xy().with_source(dir.path().join("lorenz.csv"));
        let err = load_figure(&spec).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::File);
    }

    #[test]
    fn test_run_fails_before_display_on_missing_column() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"x,y\n1,2\n").unwrap();

        let spec = PlotSpec::trajectory_3d().with_source(file.path());
        let err = run(spec).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("missing column 'z'"), "{msg}");
        assert!(err.downcast_ref::<DataError>().is_some());
    }
}
