use ndarray::Array2;

use crate::config::{AxisLabels, PlotKind, PlotSpec};
use crate::data::{DataError, Dataset};

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// A 2D polyline in file row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series2d {
    pub name: Option<String>,
    pub points: Vec<[f64; 2]>,
}

/// A 3D polyline in file row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series3d {
    pub name: Option<String>,
    pub points: Vec<[f64; 3]>,
}

// ---------------------------------------------------------------------------
// Heat grids
// ---------------------------------------------------------------------------

/// Time × position grids of the heat-equation view, all of shape
/// `(rows, positions)`.
///
/// `time_grid[[i, j]] == time[i]`, `position_grid[[i, j]] == j + 1` and
/// `values[[i, j]]` is sample `i` of amplitude column `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatGrid {
    pub time_grid: Array2<f64>,
    pub position_grid: Array2<f64>,
    pub values: Array2<f64>,
}

impl HeatGrid {
    /// Broadcast `time` across one position per amplitude column and stack
    /// the amplitudes.
    ///
    /// Fails with [`DataError::Layout`] when an amplitude slice is not as
    /// long as `time`.
    pub fn new(time: &[f64], amplitudes: &[&[f64]]) -> Result<Self, DataError> {
        if let Some((j, a)) = amplitudes
            .iter()
            .enumerate()
            .find(|(_, a)| a.len() != time.len())
        {
            return Err(DataError::Layout(format!(
                "amplitude column {} has {} values, expected {}",
                j + 1,
                a.len(),
                time.len()
            )));
        }

        let shape = (time.len(), amplitudes.len());
        Ok(HeatGrid {
            time_grid: Array2::from_shape_fn(shape, |(i, _)| time[i]),
            position_grid: Array2::from_shape_fn(shape, |(_, j)| (j + 1) as f64),
            values: Array2::from_shape_fn(shape, |(i, j)| amplitudes[j][i]),
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Grid node `(i, j)` as a `(time, position, value)` point.
    pub fn point(&self, i: usize, j: usize) -> [f64; 3] {
        [
            self.time_grid[[i, j]],
            self.position_grid[[i, j]],
            self.values[[i, j]],
        ]
    }

    /// Smallest and largest finite value, or `None` when there is none.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// One surface patch between rows `i, i+1` and positions `j, j+1`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceQuad {
    /// Corners in drawing order around the patch.
    pub corners: [[f64; 3]; 4],
    /// Mean value of the four corners; drives the patch colour.
    pub height: f64,
}

impl SurfaceQuad {
    pub fn centroid(&self) -> [f64; 3] {
        let mut c = [0.0; 3];
        for p in &self.corners {
            for (acc, v) in c.iter_mut().zip(p) {
                *acc += v / 4.0;
            }
        }
        c
    }
}

/// Lines at fixed positions plus the surface through them.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatSurface {
    pub series: Vec<Series3d>,
    pub grid: HeatGrid,
}

impl HeatSurface {
    /// Split the grid into `(rows - 1) * (positions - 1)` patches.
    pub fn quads(&self) -> Vec<SurfaceQuad> {
        let (rows, cols) = self.grid.shape();
        if rows < 2 || cols < 2 {
            return Vec::new();
        }
        let mut quads = Vec::with_capacity((rows - 1) * (cols - 1));
        for i in 0..rows - 1 {
            for j in 0..cols - 1 {
                let corners = [
                    self.grid.point(i, j),
                    self.grid.point(i + 1, j),
                    self.grid.point(i + 1, j + 1),
                    self.grid.point(i, j + 1),
                ];
                let height = corners.iter().map(|p| p[2]).sum::<f64>() / 4.0;
                quads.push(SurfaceQuad { corners, height });
            }
        }
        quads
    }
}

// ---------------------------------------------------------------------------
// Figure
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum FigureContent {
    Line2d(Series2d),
    Line3d(Series3d),
    HeatSurface(HeatSurface),
}

/// Everything needed to draw a plot, detached from any GUI.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub labels: AxisLabels,
    pub content: FigureContent,
}

impl Figure {
    /// Legend names of the named series, in drawing order.
    pub fn series_names(&self) -> Vec<&str> {
        match &self.content {
            FigureContent::Line2d(s) => s.name.as_deref().into_iter().collect(),
            FigureContent::Line3d(s) => s.name.as_deref().into_iter().collect(),
            FigureContent::HeatSurface(h) => {
                h.series.iter().filter_map(|s| s.name.as_deref()).collect()
            }
        }
    }

    /// All 3D points the figure draws; empty for 2D figures.
    pub fn points_3d(&self) -> Vec<[f64; 3]> {
        match &self.content {
            FigureContent::Line2d(_) => Vec::new(),
            FigureContent::Line3d(s) => s.points.clone(),
            FigureContent::HeatSurface(h) => h
                .series
                .iter()
                .flat_map(|s| s.points.iter().copied())
                .collect(),
        }
    }
}

/// Shape a loaded dataset into the figure `spec` asks for.
///
/// Fails with [`DataError::MissingColumn`] when a column is absent and with
/// [`DataError::NoRows`] when there is nothing to draw.
pub fn build_figure(spec: &PlotSpec, dataset: &Dataset) -> Result<Figure, DataError> {
    let content = match &spec.kind {
        PlotKind::Line2d { x, y, name } => {
            let (xs, ys) = (dataset.column(x)?, dataset.column(y)?);
            FigureContent::Line2d(Series2d {
                name: name.clone(),
                points: xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect(),
            })
        }
        PlotKind::Line3d { x, y, z, name } => {
            let (xs, ys, zs) = (dataset.column(x)?, dataset.column(y)?, dataset.column(z)?);
            FigureContent::Line3d(Series3d {
                name: name.clone(),
                points: xs
                    .iter()
                    .zip(ys)
                    .zip(zs)
                    .map(|((&x, &y), &z)| [x, y, z])
                    .collect(),
            })
        }
        PlotKind::HeatSurface { time, amplitudes } => {
            let t = dataset.column(time)?;
            let amps = amplitudes
                .iter()
                .map(|a| dataset.column(a))
                .collect::<Result<Vec<_>, _>>()?;

            let series = amplitudes
                .iter()
                .zip(&amps)
                .enumerate()
                .map(|(j, (name, values))| Series3d {
                    name: Some(name.clone()),
                    points: t
                        .iter()
                        .zip(values.iter())
                        .map(|(&ti, &v)| [ti, (j + 1) as f64, v])
                        .collect(),
                })
                .collect();

            FigureContent::HeatSurface(HeatSurface {
                series,
                grid: HeatGrid::new(t, &amps)?,
            })
        }
    };

    if dataset.is_empty() {
        return Err(DataError::NoRows);
    }

    log::debug!(
        "Built '{}' from {} rows ({} series)",
        spec.title,
        dataset.row_count(),
        match &content {
            FigureContent::HeatSurface(h) => h.series.len(),
            _ => 1,
        }
    );

    Ok(Figure {
        title: spec.title.clone(),
        labels: spec.labels.clone(),
        content,
    })
}
