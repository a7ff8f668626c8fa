//! Orthographic camera for the 3D plots.
//!
//! Data is first squeezed into the cube `[-1, 1]³` (each axis on its own,
//! so a long time axis does not flatten the amplitudes), then rotated by
//! azimuth and elevation and dropped onto the screen plane.

const DEFAULT_AZIMUTH: f64 = -60.0;
const DEFAULT_ELEVATION: f64 = 30.0;

/// Degrees of rotation per dragged point.
const DRAG_SENSITIVITY: f64 = 0.5;

// ---------------------------------------------------------------------------
// View angles
// ---------------------------------------------------------------------------

/// Camera orientation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewAngles {
    /// Rotation about the vertical axis, `-180..=180`.
    pub azimuth: f64,
    /// Height of the eye above the x/y plane, `-90..=90`.
    pub elevation: f64,
}

impl Default for ViewAngles {
    fn default() -> Self {
        ViewAngles {
            azimuth: DEFAULT_AZIMUTH,
            elevation: DEFAULT_ELEVATION,
        }
    }
}

impl ViewAngles {
    /// Apply a mouse drag given in screen points.
    pub fn rotate_by(&mut self, dx: f32, dy: f32) {
        let az = self.azimuth - dx as f64 * DRAG_SENSITIVITY;
        self.azimuth = (az + 180.0).rem_euclid(360.0) - 180.0;
        self.elevation = (self.elevation + dy as f64 * DRAG_SENSITIVITY).clamp(-90.0, 90.0);
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Axis-aligned bounding box of the finite points of a figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Bounds3 {
    pub fn from_points<I: IntoIterator<Item = [f64; 3]>>(points: I) -> Option<Self> {
        let mut bounds: Option<Bounds3> = None;
        for p in points {
            if !p.iter().all(|v| v.is_finite()) {
                continue;
            }
            let b = bounds.get_or_insert(Bounds3 { min: p, max: p });
            for k in 0..3 {
                b.min[k] = b.min[k].min(p[k]);
                b.max[k] = b.max[k].max(p[k]);
            }
        }
        bounds
    }

    /// Map a data point into `[-1, 1]³`. Flat axes collapse to 0.
    pub fn normalize(&self, p: [f64; 3]) -> [f64; 3] {
        let mut out = [0.0; 3];
        for k in 0..3 {
            let span = self.max[k] - self.min[k];
            if span > 0.0 {
                out[k] = 2.0 * (p[k] - self.min[k]) / span - 1.0;
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Projector
// ---------------------------------------------------------------------------

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Projects data points for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    bounds: Bounds3,
    /// Unit vector towards the eye.
    eye: [f64; 3],
    right: [f64; 3],
    up: [f64; 3],
}

impl Projector {
    pub fn new(bounds: Bounds3, view: ViewAngles) -> Self {
        let (az, el) = (view.azimuth.to_radians(), view.elevation.to_radians());
        let (sa, ca, se, ce) = (az.sin(), az.cos(), el.sin(), el.cos());
        Projector {
            bounds,
            eye: [ce * ca, ce * sa, se],
            right: [-sa, ca, 0.0],
            up: [-se * ca, -se * sa, ce],
        }
    }

    /// Screen position of a point already in `[-1, 1]³`.
    pub fn project_unit(&self, q: [f64; 3]) -> [f64; 2] {
        [dot(q, self.right), dot(q, self.up)]
    }

    /// Screen position of a data point.
    pub fn project(&self, p: [f64; 3]) -> [f64; 2] {
        self.project_unit(self.bounds.normalize(p))
    }

    /// Distance towards the eye; larger is nearer.
    pub fn depth(&self, p: [f64; 3]) -> f64 {
        dot(self.bounds.normalize(p), self.eye)
    }

    /// Order items far to near so that nearer ones are painted over.
    pub fn sort_back_to_front<T>(&self, items: &mut [T], anchor: impl Fn(&T) -> [f64; 3]) {
        items.sort_by(|a, b| self.depth(anchor(a)).total_cmp(&self.depth(anchor(b))));
    }

    pub fn bounds(&self) -> &Bounds3 {
        &self.bounds
    }
}

/// The twelve edges of the unit cube as pairs of corners.
pub fn cube_edges() -> Vec<([f64; 3], [f64; 3])> {
    let mut edges = Vec::with_capacity(12);
    for axis in 0..3 {
        let (a, b) = ((axis + 1) % 3, (axis + 2) % 3);
        for &sa in &[-1.0, 1.0] {
            for &sb in &[-1.0, 1.0] {
                let mut from = [0.0; 3];
                from[axis] = -1.0;
                from[a] = sa;
                from[b] = sb;
                let mut to = from;
                to[axis] = 1.0;
                edges.push((from, to));
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_bounds() -> Bounds3 {
        Bounds3 {
            min: [-1.0; 3],
            max: [1.0; 3],
        }
    }

    fn close(a: [f64; 2], b: [f64; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-12 && (a[1] - b[1]).abs() < 1e-12
    }

    #[test]
    fn test_front_view_projection() {
        let view = ViewAngles {
            azimuth: 0.0,
            elevation: 0.0,
        };
        let p = Projector::new(unit_bounds(), view);
        assert!(close(p.project([0.0, 1.0, 0.0]), [1.0, 0.0]));
        assert!(close(p.project([0.0, 0.0, 1.0]), [0.0, 1.0]));
        assert!(close(p.project([1.0, 0.0, 0.0]), [0.0, 0.0]));
        assert!(p.depth([1.0, 0.0, 0.0]) > p.depth([-1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_top_view_projection() {
        let view = ViewAngles {
            azimuth: 0.0,
            elevation: 90.0,
        };
        let p = Projector::new(unit_bounds(), view);
        assert!(close(p.project([0.0, 1.0, 0.0]), [1.0, 0.0]));
        assert!(close(p.project([-1.0, 0.0, 0.0]), [0.0, 1.0]));
        assert!(p.depth([0.0, 0.0, 1.0]) > p.depth([0.0, 0.0, -1.0]));
    }

    #[test]
    fn test_normalize_per_axis() {
        let b = Bounds3::from_points([[0.0, 10.0, 5.0], [100.0, 20.0, 5.0]]).unwrap();
        assert_eq!(b.normalize([50.0, 10.0, 5.0]), [0.0, -1.0, 0.0]);
        assert_eq!(b.normalize([100.0, 20.0, 7.0]), [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_bounds_skip_non_finite() {
        let b = Bounds3::from_points([[f64::NAN, 0.0, 0.0], [1.0, 2.0, 3.0], [-1.0, 0.0, 4.0]])
            .unwrap();
        assert_eq!(b.min, [-1.0, 0.0, 3.0]);
        assert_eq!(b.max, [1.0, 2.0, 4.0]);
        assert!(Bounds3::from_points(Vec::<[f64; 3]>::new()).is_none());
    }

    #[test]
    fn test_sort_back_to_front() {
        let p = Projector::new(unit_bounds(), ViewAngles::default());
        let mut pts = vec![[1.0, 1.0, 1.0], [-1.0, -1.0, -1.0], [0.0, 0.0, 0.0], [1.0, -1.0, 0.5]];
        p.sort_back_to_front(&mut pts, |q| *q);
        let depths: Vec<f64> = pts.iter().map(|q| p.depth(*q)).collect();
        assert!(depths.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_rotate_wraps_and_clamps() {
        let mut v = ViewAngles {
            azimuth: 170.0,
            elevation: 80.0,
        };
        v.rotate_by(-40.0, 40.0);
        assert!((v.azimuth - (-170.0)).abs() < 1e-9);
        assert_eq!(v.elevation, 90.0);
    }

    #[test]
    fn test_cube_edges() {
        let edges = cube_edges();
        assert_eq!(edges.len(), 12);
        for (a, b) in edges {
            let differing = (0..3).filter(|&k| a[k] != b[k]).count();
            assert_eq!(differing, 1);
        }
    }
}
