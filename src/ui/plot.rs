use eframe::egui::{self, Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, PlotUi, Polygon, Text};

use crate::color::HeightColors;
use crate::config::AxisLabels;
use crate::figure::{FigureContent, HeatSurface, Series2d, Series3d, SurfaceQuad};
use crate::state::AppState;
use crate::view::{cube_edges, Bounds3, Projector};

const SURFACE_ALPHA: f32 = 0.7;
const BOX_COLOR: Color32 = Color32::from_gray(110);
/// How far outside the unit cube axis captions sit.
const LABEL_OFFSET: f64 = 1.3;
const TICK_OFFSET: f64 = 1.12;

// ---------------------------------------------------------------------------
// Figure plot (central panel)
// ---------------------------------------------------------------------------

/// Render the figure in the central panel.
pub fn figure_plot(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&state.figure.title);
    });

    let drag = match &state.figure.content {
        FigureContent::Line2d(series) => {
            line_2d(ui, state, series);
            None
        }
        FigureContent::Line3d(_) | FigureContent::HeatSurface(_) => scene_3d(ui, state),
    };

    if let Some(delta) = drag {
        state.view.rotate_by(delta.x, delta.y);
    }
}

fn line_2d(ui: &mut Ui, state: &AppState, series: &Series2d) {
    let labels = &state.figure.labels;

    Plot::new("line_2d")
        .legend(Legend::default())
        .x_axis_label(labels.x.as_str())
        .y_axis_label(labels.y.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if !state.is_visible(series.name.as_deref()) {
                return;
            }
            let points: PlotPoints = series.points.iter().copied().collect();
            let mut line = Line::new(points)
                .color(state.series_colors.color_for(series.name.as_deref()))
                .width(1.5);
            if let Some(name) = &series.name {
                line = line.name(name);
            }
            plot_ui.line(line);
        });
}

// ---------------------------------------------------------------------------
// 3D scene
// ---------------------------------------------------------------------------

/// Draw a 3D figure projected through the current camera. Returns the drag
/// delta when the user is rotating the view.
fn scene_3d(ui: &mut Ui, state: &AppState) -> Option<egui::Vec2> {
    let Some(bounds) = Bounds3::from_points(state.figure.points_3d()) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No finite points to draw.");
        });
        return None;
    };
    let projector = Projector::new(bounds, state.view);

    let response = Plot::new("scene_3d")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .include_x(-1.6)
        .include_x(1.6)
        .include_y(-1.6)
        .include_y(1.6)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            draw_axes_box(plot_ui, &projector, &state.figure.labels);

            match &state.figure.content {
                FigureContent::Line3d(series) => draw_series_3d(plot_ui, &projector, state, series),
                FigureContent::HeatSurface(heat) => {
                    if state.show_surface {
                        draw_surface(plot_ui, &projector, heat);
                    }
                    for series in &heat.series {
                        draw_series_3d(plot_ui, &projector, state, series);
                    }
                }
                FigureContent::Line2d(_) => {}
            }
        })
        .response;

    response.dragged().then(|| response.drag_delta())
}

fn draw_series_3d(plot_ui: &mut PlotUi, projector: &Projector, state: &AppState, series: &Series3d) {
    if !state.is_visible(series.name.as_deref()) {
        return;
    }
    let points: PlotPoints = series.points.iter().map(|&p| projector.project(p)).collect();
    let mut line = Line::new(points)
        .color(state.series_colors.color_for(series.name.as_deref()))
        .width(1.5);
    if let Some(name) = &series.name {
        line = line.name(name);
    }
    plot_ui.line(line);
}

/// Colormap spanning the finite values of the grid, translucent so the
/// lines stay visible through the surface.
fn surface_colors(heat: &HeatSurface) -> Option<HeightColors> {
    let (min, max) = heat.grid.value_range()?;
    Some(HeightColors {
        min,
        max,
        alpha: SURFACE_ALPHA,
    })
}

/// Surface patches painted far to near, coloured by mean height.
fn draw_surface(plot_ui: &mut PlotUi, projector: &Projector, heat: &HeatSurface) {
    let Some(colors) = surface_colors(heat) else {
        return;
    };

    let mut quads = heat.quads();
    quads.retain(|q| q.corners.iter().flatten().all(|v| v.is_finite()));
    projector.sort_back_to_front(&mut quads, SurfaceQuad::centroid);

    for quad in &quads {
        let corners: PlotPoints = quad.corners.iter().map(|&c| projector.project(c)).collect();
        plot_ui.polygon(
            Polygon::new(corners)
                .fill_color(colors.color_for(quad.height))
                .stroke(Stroke::NONE),
        );
    }
}

/// Unit cube outline, axis captions, and the data range at the ends of one
/// edge per axis.
fn draw_axes_box(plot_ui: &mut PlotUi, projector: &Projector, labels: &AxisLabels) {
    for (from, to) in cube_edges() {
        let edge: PlotPoints = vec![projector.project_unit(from), projector.project_unit(to)].into();
        plot_ui.line(Line::new(edge).color(BOX_COLOR).width(0.5));
    }

    let bounds = *projector.bounds();
    let captions = [
        (0, labels.x.as_str(), [0.0, -LABEL_OFFSET, -1.0]),
        (1, labels.y.as_str(), [LABEL_OFFSET, 0.0, -1.0]),
        (2, labels.z.as_deref().unwrap_or(""), [-1.0, -LABEL_OFFSET, 0.0]),
    ];

    for (axis, caption, anchor) in captions {
        if caption.is_empty() {
            continue;
        }
        text_at(plot_ui, projector, anchor, RichText::new(caption).strong());

        for (end, value) in [(-1.0, bounds.min[axis]), (1.0, bounds.max[axis])] {
            let mut at = anchor.map(|c| {
                if c.abs() == LABEL_OFFSET {
                    c.signum() * TICK_OFFSET
                } else {
                    c
                }
            });
            at[axis] = end;
            text_at(plot_ui, projector, at, RichText::new(format_tick(value)).small().weak());
        }
    }
}

fn text_at(plot_ui: &mut PlotUi, projector: &Projector, unit: [f64; 3], text: RichText) {
    let [u, v] = projector.project_unit(unit);
    plot_ui.text(Text::new(PlotPoint::new(u, v), text));
}

fn format_tick(v: f64) -> String {
    let a = v.abs();
    if a != 0.0 && !(1e-2..1e4).contains(&a) {
        format!("{v:.2e}")
    } else {
        format!("{v:.3}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotSpec;
    use crate::data::loader::read_csv;
    use crate::figure::build_figure;

    #[test]
    fn test_surface_is_translucent_over_value_range() {
        let spec = PlotSpec::heat_surface();
        let csv = "t,a1,a2,a3,a4,a5\n0,1.0,0.9,0.8,0.7,0.6\n1,0.8,0.85,0.82,0.75,0.65";
        let ds = read_csv(csv.as_bytes(), &spec.required_columns()).unwrap();
        let fig = build_figure(&spec, &ds).unwrap();
        let FigureContent::HeatSurface(heat) = &fig.content else {
            panic!("expected heat surface");
        };

        let colors = surface_colors(heat).unwrap();
        assert_eq!((colors.min, colors.max), (0.6, 1.0));
        assert!((colors.alpha - 0.7).abs() < 1e-6);
        // 0.7 * 255 = 178.5
        let a = colors.color_for(0.8).a();
        assert!((178..=179).contains(&a), "alpha byte {a}");
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.0), "0.000");
        assert_eq!(format_tick(1.5), "1.500");
        assert_eq!(format_tick(-0.25), "-0.250");
        assert_eq!(format_tick(12345.0), "1.23e4");
        assert_eq!(format_tick(0.001), "1.00e-3");
    }
}
