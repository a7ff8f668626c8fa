use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Plot specification
// ---------------------------------------------------------------------------

/// Which columns go on which axis, and how they are drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotKind {
    /// One 2D polyline through `(x, y)`.
    Line2d {
        x: String,
        y: String,
        /// Legend label; unnamed lines stay out of the legend.
        name: Option<String>,
    },
    /// One 3D polyline through `(x, y, z)`.
    Line3d {
        x: String,
        y: String,
        z: String,
        name: Option<String>,
    },
    /// One 3D line per amplitude column at positions `1..=n`, plus a surface
    /// over the time × position grid.
    HeatSurface { time: String, amplitudes: Vec<String> },
}

/// Axis captions. `z` is only drawn by 3D plots.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
    pub z: Option<String>,
}

impl AxisLabels {
    pub fn xy(x: &str, y: &str) -> Self {
        AxisLabels {
            x: x.to_string(),
            y: y.to_string(),
            z: None,
        }
    }

    pub fn xyz(x: &str, y: &str, z: &str) -> Self {
        AxisLabels {
            x: x.to_string(),
            y: y.to_string(),
            z: Some(z.to_string()),
        }
    }
}

/// Everything one viewer needs: where the data is and how to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub source_path: PathBuf,
    pub kind: PlotKind,
    pub title: String,
    pub labels: AxisLabels,
}

impl PlotSpec {
    /// `t` against `a1..a5` from `outp_.csv`, drawn as lines and a surface.
    pub fn heat_surface() -> Self {
        PlotSpec {
            source_path: PathBuf::from("outp_.csv"),
            kind: PlotKind::HeatSurface {
                time: "t".to_string(),
                amplitudes: (1..=5).map(|i| format!("a{i}")).collect(),
            },
            title: "1D Heat Equation Approximation".to_string(),
            labels: AxisLabels::xyz("Time", "Position", "Value"),
        }
    }

    /// Phase portrait `x` against `y` from `lorenz.csv`.
    pub fn lorenz_xy() -> Self {
        PlotSpec {
            source_path: PathBuf::from("lorenz.csv"),
            kind: PlotKind::Line2d {
                x: "x".to_string(),
                y: "y".to_string(),
                name: None,
            },
            title: "Lorenz System".to_string(),
            labels: AxisLabels::xy("x", "y"),
        }
    }

    /// `x, y, z` trajectory from `outp_.csv`.
    pub fn trajectory_3d() -> Self {
        PlotSpec {
            source_path: PathBuf::from("outp_.csv"),
            kind: PlotKind::Line3d {
                x: "x".to_string(),
                y: "y".to_string(),
                z: "z".to_string(),
                name: Some("3D Line".to_string()),
            },
            title: "3D Plot".to_string(),
            labels: AxisLabels::xyz("x", "y", "z"),
        }
    }

    /// `x` over `time` from `simple.csv`.
    pub fn time_series() -> Self {
        PlotSpec {
            source_path: PathBuf::from("simple.csv"),
            kind: PlotKind::Line2d {
                x: "time".to_string(),
                y: "x".to_string(),
                name: Some("x".to_string()),
            },
            title: "Simple System".to_string(),
            labels: AxisLabels::xy("time", "x"),
        }
    }

    /// Same plot, different input file.
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = path.into();
        self
    }

    /// Every column the plot reads, in axis order.
    pub fn required_columns(&self) -> Vec<&str> {
        match &self.kind {
            PlotKind::Line2d { x, y, .. } => vec![x.as_str(), y.as_str()],
            PlotKind::Line3d { x, y, z, .. } => vec![x.as_str(), y.as_str(), z.as_str()],
            PlotKind::HeatSurface { time, amplitudes } => std::iter::once(time)
                .chain(amplitudes.iter())
                .map(String::as_str)
                .collect(),
        }
    }

    pub fn is_3d(&self) -> bool {
        !matches!(self.kind, PlotKind::Line2d { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_columns() {
        assert_eq!(
            PlotSpec::heat_surface().required_columns(),
            vec!["t", "a1", "a2", "a3", "a4", "a5"]
        );
        assert_eq!(PlotSpec::lorenz_xy().required_columns(), vec!["x", "y"]);
        assert_eq!(PlotSpec::trajectory_3d().required_columns(), vec!["x", "y", "z"]);
        assert_eq!(PlotSpec::time_series().required_columns(), vec!["time", "x"]);
    }

    #[test]
    fn test_with_source_keeps_kind() {
        let spec = PlotSpec::lorenz_xy().with_source("runs/lorenz_2.csv");
        assert_eq!(spec.source_path, PathBuf::from("runs/lorenz_2.csv"));
        assert_eq!(spec.kind, PlotSpec::lorenz_xy().kind);
        assert!(!spec.is_3d());
        assert!(PlotSpec::heat_surface().is_3d());
    }
}
