// File: crates/kaleido-core/tests/mirror.rs
// Purpose: Mirror engine geometry and mark-surface call discipline.

use kaleido_core::geometry::{canvas_to_centered, cartesian_to_polar, centered_to_canvas};
use kaleido_core::{mirror, DrawSettings, MarkSurface, MirrorPoints, Point2D, Rgb};

const EPS: f64 = 1e-9;

#[derive(Debug, PartialEq)]
enum Call {
    Begin,
    End,
    Disc(Point2D, f32, Rgb),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl MarkSurface for Recorder {
    fn begin_mark(&mut self) {
        self.calls.push(Call::Begin);
    }
    fn end_mark(&mut self) {
        self.calls.push(Call::End);
    }
    fn fill_disc(&mut self, at: Point2D, radius: f32, color: Rgb) {
        self.calls.push(Call::Disc(at, radius, color));
    }
}

impl Recorder {
    fn discs(&self) -> Vec<Point2D> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Disc(p, _, _) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

fn assert_close(got: Point2D, want: (f64, f64)) {
    assert!(
        (got.x - want.0).abs() < EPS && (got.y - want.1).abs() < EPS,
        "got ({}, {}), want {:?}",
        got.x,
        got.y,
        want
    );
}

#[test]
fn four_sectors_from_right_of_center() {
    let pts: Vec<_> = MirrorPoints::new(Point2D::new(110.0, 100.0), 100.0, 4).collect();
    assert_eq!(pts.len(), 4);
    let want_canvas = [(110.0, 100.0), (100.0, 90.0), (90.0, 100.0), (100.0, 110.0)];
    let want_centered = [(10.0, 0.0), (0.0, 10.0), (-10.0, 0.0), (0.0, -10.0)];
    for i in 0..4 {
        assert_close(pts[i], want_canvas[i]);
        assert_close(canvas_to_centered(pts[i], 100.0), want_centered[i]);
    }
}

#[test]
fn two_sectors_flip_through_center() {
    let seed = centered_to_canvas(Point2D::new(5.0, 0.0), 50.0);
    let pts: Vec<_> = MirrorPoints::new(seed, 50.0, 2).collect();
    assert_eq!(pts.len(), 2);
    assert_close(canvas_to_centered(pts[1], 50.0), (-5.0, 0.0));
}

#[test]
fn single_sector_is_only_the_seed() {
    let seed = Point2D::new(12.5, 7.25);
    let mut rec = Recorder::default();
    let settings = DrawSettings { sector_count: 1, ..DrawSettings::default() };
    mirror(seed, 100.0, &settings, &mut rec);
    assert_eq!(rec.discs(), vec![seed]);
}

#[test]
fn points_share_radius_and_step_by_equal_angles() {
    let center = 320.0;
    let seed = Point2D::new(401.3, 211.7);
    let r0 = {
        let c = canvas_to_centered(seed, center);
        cartesian_to_polar(c.x, c.y).radius
    };
    for n in [2u32, 3, 5, 6, 8, 12, 24] {
        let step = std::f64::consts::TAU / n as f64;
        let pts: Vec<_> = MirrorPoints::new(seed, center, n).collect();
        assert_eq!(pts.len(), n as usize);
        let polar: Vec<_> = pts
            .iter()
            .map(|p| {
                let c = canvas_to_centered(*p, center);
                cartesian_to_polar(c.x, c.y)
            })
            .collect();
        let mut total = 0.0;
        for w in polar.windows(2) {
            assert!((w[1].radius - r0).abs() < 1e-6, "radius drift with n={n}");
            let mut delta = w[1].angle - w[0].angle;
            // atan2 wraps at ±π
            if delta < 0.0 {
                delta += std::f64::consts::TAU;
            }
            assert!((delta - step).abs() < 1e-6, "angular step with n={n}: {delta}");
            total += delta;
        }
        let want_total = std::f64::consts::TAU * (n - 1) as f64 / n as f64;
        assert!((total - want_total).abs() < 1e-6, "total rotation with n={n}");
    }
}

#[test]
fn batch_is_bracketed_once_and_uses_settings() {
    let settings = DrawSettings {
        color: Rgb::new(1, 2, 3),
        mark_radius: 7.5,
        sector_count: 6,
        rotation_velocity: 0.0,
    };
    let mut rec = Recorder::default();
    mirror(Point2D::new(30.0, 40.0), 50.0, &settings, &mut rec);
    assert_eq!(rec.calls.len(), 8);
    assert_eq!(rec.calls.first(), Some(&Call::Begin));
    assert_eq!(rec.calls.last(), Some(&Call::End));
    for call in &rec.calls[1..7] {
        match call {
            Call::Disc(_, r, c) => {
                assert_eq!(*r, 7.5);
                assert_eq!(*c, Rgb::new(1, 2, 3));
            }
            other => panic!("unexpected call inside batch: {other:?}"),
        }
    }
}

#[test]
fn seed_at_center_stays_at_center() {
    let pts: Vec<_> = MirrorPoints::new(Point2D::new(100.0, 100.0), 100.0, 5).collect();
    for p in pts {
        assert_close(p, (100.0, 100.0));
    }
}

#[test]
fn iterator_reports_exact_length() {
    let it = MirrorPoints::new(Point2D::new(0.0, 0.0), 10.0, 7);
    assert_eq!(it.len(), 7);
}
