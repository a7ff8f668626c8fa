use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Context;

use crate::color::SeriesColors;
use crate::config::PlotSpec;
use crate::data::Dataset;
use crate::figure::Figure;
use crate::load_figure;
use crate::view::ViewAngles;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// What is plotted and from which file.
    pub spec: PlotSpec,

    /// Loaded columns, shown in the data table.
    pub dataset: Dataset,

    /// Shaped plot data.
    pub figure: Figure,

    /// Colour per named series.
    pub series_colors: SeriesColors,

    /// Named series the user switched off.
    pub hidden_series: BTreeSet<String>,

    /// Whether the heat surface is drawn under its lines.
    pub show_surface: bool,

    /// Camera for 3D figures.
    pub view: ViewAngles,

    /// Whether the data table window is open.
    pub show_table: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(spec: PlotSpec, dataset: Dataset, figure: Figure) -> Self {
        let series_colors = SeriesColors::new(figure.series_names());
        Self {
            spec,
            dataset,
            figure,
            series_colors,
            hidden_series: BTreeSet::new(),
            show_surface: true,
            view: ViewAngles::default(),
            show_table: false,
            status_message: None,
        }
    }

    /// Swap in a newly loaded figure; visibility and colours start over.
    pub fn set_figure(&mut self, dataset: Dataset, figure: Figure) {
        self.series_colors = SeriesColors::new(figure.series_names());
        self.hidden_series.clear();
        self.dataset = dataset;
        self.figure = figure;
        self.status_message = None;
    }

    /// Re-read the figure from `path` with the current plot specification.
    ///
    /// On failure the current figure stays and the error goes to the status
    /// bar.
    pub fn reload_from(&mut self, path: PathBuf) {
        let spec = self.spec.clone().with_source(path);
        let loaded =
            load_figure(&spec).with_context(|| format!("loading {}", spec.source_path.display()));

        match loaded {
            Ok((dataset, figure)) => {
                log::info!(
                    "Reloaded '{}' with {} rows",
                    figure.title,
                    dataset.row_count()
                );
                self.spec = spec;
                self.set_figure(dataset, figure);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Re-read the current source file.
    pub fn reload(&mut self) {
        let path = self.spec.source_path.clone();
        self.reload_from(path);
    }

    /// Unnamed series are always visible.
    pub fn is_visible(&self, name: Option<&str>) -> bool {
        name.map_or(true, |n| !self.hidden_series.contains(n))
    }

    /// Toggle a single named series.
    pub fn toggle_series(&mut self, name: &str) {
        if !self.hidden_series.remove(name) {
            self.hidden_series.insert(name.to_string());
        }
    }

    pub fn reset_view(&mut self) {
        self.view = ViewAngles::default();
    }
}
