//! Smith chart plots

use std::f64::consts::PI;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{SMITH_CURVE_SUBDIVISIONS, TAU};
use crate::error::{PlotError, Result};
use crate::math::MonotoneCubic;
use crate::nearest::nearest_complex_index;
use crate::path::{line_path, PathBuilder};
use crate::scale::{CoordinateScaling, SmithScale};
use crate::smith::{ArcDescriptor, ReactanceArc, SmithGrid, Winding};
use crate::trace::Trace;

use super::{finite_runs, TracePath, ViewPort};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SmithSettings {
    /// Margin around the chart square, in pixels
    pub inset: f64,
}

/// Everything needed to draw a Smith chart.
///
/// Paths are relative to the chart square; translate by `origin` to place
/// the square in the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmithPlot {
    /// Side of the chart square
    pub size: f64,
    /// Top-left corner of the chart square within the viewport
    pub origin: (f64, f64),
    /// Γ plane to chart-square mapping
    pub scaling: CoordinateScaling,
    pub resistance_paths: Vec<String>,
    pub reactance_paths: Vec<String>,
    pub plot_paths: Option<Vec<TracePath>>,
}

impl SmithPlot {
    /// Reflection coefficient `(Re Γ, Im Γ)` under a pointer position in the
    /// chart square
    pub fn invert(&self, pixel: (f64, f64)) -> (f64, f64) {
        self.scaling.invert(pixel)
    }

    /// Index of the sample of `trace` closest to the pointer on the chart
    pub fn nearest_sample(&self, trace: &Trace, pixel: (f64, f64)) -> Result<Option<usize>> {
        let (re, im) = self.invert(pixel);
        nearest_complex_index(re, im, trace.real(), trace.imag())
    }
}

/// SVG path of a gridline arc under `scale`.
///
/// Angles are mirrored on screen, so the arc's clockwise winding becomes an
/// anticlockwise canvas sweep.
pub fn arc_path(arc: &ArcDescriptor, scale: &SmithScale) -> String {
    let (cx, cy) = scale.project(arc.cx, arc.cy);
    let r = scale.radius.apply(arc.radius);
    let anticlockwise = arc.winding == Winding::Clockwise;
    let a0 = scale.angle.apply(arc.start_angle);
    let a1 = if arc.full_circle {
        if anticlockwise {
            a0 - TAU
        } else {
            a0 + TAU
        }
    } else {
        scale.angle.apply(arc.end_angle)
    };

    let mut path = PathBuilder::new();
    path.arc(cx, cy, r, a0, a1, anticlockwise);
    path.build()
}

fn reactance_path(arc: &ReactanceArc, scale: &SmithScale) -> String {
    match arc {
        ReactanceArc::Arc(arc) => arc_path(arc, scale),
        ReactanceArc::Diameter { from, to } => {
            line_path(scale.project(from.0, from.1), scale.project(to.0, to.1))
        }
    }
}

/// Build a Smith chart with the standard grid and one curve per trace.
///
/// The chart is the largest square that fits the viewport less `inset` on
/// every side, centred in the viewport.
pub fn build_smith_plot(traces: &[Trace], viewport: ViewPort, settings: &SmithSettings) -> Result<SmithPlot> {
    viewport.validate()?;
    let size = viewport.width.min(viewport.height) - 2.0 * settings.inset;
    if !(size > 0.0) {
        return Err(PlotError::InvalidViewPort {
            width: viewport.width,
            height: viewport.height,
        });
    }
    let origin = ((viewport.width - size) / 2.0, (viewport.height - size) / 2.0);
    let scale = SmithScale::new(size);

    let grid = SmithGrid::standard()?;
    let resistance_paths = grid.resistance.iter().map(|arc| arc_path(arc, &scale)).collect();
    let reactance_paths = grid.reactance.iter().map(|arc| reactance_path(arc, &scale)).collect();

    let plot_paths = if traces.is_empty() {
        None
    } else {
        Some(traces.iter().map(|trace| trace_path(trace, &scale)).collect::<Vec<_>>())
    };
    debug!("Smith chart: size {}, {} traces", size, traces.len());

    Ok(SmithPlot {
        size,
        origin,
        scaling: CoordinateScaling::Smith(scale),
        resistance_paths,
        reactance_paths,
        plot_paths,
    })
}

fn trace_path(trace: &Trace, scale: &SmithScale) -> TracePath {
    let points: Vec<(f64, f64)> = trace
        .real()
        .iter()
        .copied()
        .zip(trace.imag().iter().copied())
        .collect();

    let mut path = PathBuilder::new();
    for run in finite_runs(&points) {
        radial_curve(run, scale, &mut path);
    }

    TracePath {
        label: trace.label.clone(),
        color: trace.color.clone(),
        path: path.build(),
        points,
    }
}

/// Smooth curve through Γ samples, interpolating magnitude and unwrapped
/// phase over the sample index so the curve bends around the chart centre.
fn radial_curve(run: &[(f64, f64)], scale: &SmithScale, path: &mut PathBuilder) {
    let Some(&(re, im)) = run.first() else {
        return;
    };
    let (x0, y0) = scale.project(re, im);
    path.move_to(x0, y0);
    if run.len() == 1 {
        return;
    }

    let magnitudes: Vec<f64> = run.iter().map(|&(re, im)| re.hypot(im)).collect();
    let phases = unwrap_phase(run.iter().map(|&(re, im)| im.atan2(re)));

    let mag = MonotoneCubic::over_index(magnitudes).sample(SMITH_CURVE_SUBDIVISIONS);
    let phase = MonotoneCubic::over_index(phases).sample(SMITH_CURVE_SUBDIVISIONS);
    for (&(_, m), &(_, theta)) in mag.iter().zip(&phase).skip(1) {
        let (x, y) = scale.project_polar(m, theta);
        path.line_to(x, y);
    }
}

/// Remove 2π jumps between consecutive phases
fn unwrap_phase(phases: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut out: Vec<f64> = Vec::new();
    for p in phases {
        let next = match out.last() {
            Some(&prev) => {
                let mut d = p - prev;
                while d > PI {
                    d -= TAU;
                }
                while d < -PI {
                    d += TAU;
                }
                prev + d
            }
            None => p,
        };
        out.push(next);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::{Frequency, FrequencyUnit};
    use crate::smith::{constant_reactance_arc, constant_resistance_arc};
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    fn trace(samples: Vec<Complex64>) -> Trace {
        let n = samples.len();
        let freq = Frequency::linear(1.0, n as f64, n, FrequencyUnit::GHz).unwrap();
        Trace::new("S11", freq, samples).unwrap()
    }

    #[test]
    fn test_unit_circle_is_full_circle() {
        let scale = SmithScale::new(200.0);
        let arc = constant_resistance_arc(0.0, f64::MAX, -f64::MAX).unwrap();
        let d = arc_path(&arc, &scale);
        assert_eq!(d.matches('A').count(), 2, "{}", d);
        assert!(d.starts_with("M200,100"), "{}", d);
    }

    #[test]
    fn test_unit_reactance_arc_ends_on_rim() {
        let scale = SmithScale::new(200.0);
        let arc = match constant_reactance_arc(1.0, 0.0, f64::MAX).unwrap() {
            ReactanceArc::Arc(arc) => arc,
            other => panic!("unexpected {:?}", other),
        };
        let d = arc_path(&arc, &scale);
        let (start, arc_cmd) = d[1..].split_once('A').unwrap();
        // Starts at Γ = j (top of the disk), ends at Γ = 1 (right edge)
        let start: Vec<f64> = start.split(',').map(|v| v.parse().unwrap()).collect();
        assert_relative_eq!(start[0], 100.0, epsilon = 1e-6);
        assert_relative_eq!(start[1], 0.0, epsilon = 1e-6);
        let fields: Vec<f64> = arc_cmd.split(',').map(|v| v.parse().unwrap()).collect();
        // radius, radius, rotation, large-arc, sweep, x, y
        assert_eq!(&fields[..5], &[100.0, 100.0, 0.0, 0.0, 0.0]);
        assert_relative_eq!(fields[5], 200.0, epsilon = 1e-6);
        assert_relative_eq!(fields[6], 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_chart_is_centred_square() {
        let viewport = ViewPort::new(500.0, 300.0).unwrap();
        let plot = build_smith_plot(&[], viewport, &SmithSettings { inset: 10.0 }).unwrap();
        assert_eq!(plot.size, 280.0);
        assert_eq!(plot.origin, (110.0, 10.0));
        assert!(plot.plot_paths.is_none());
        assert_eq!(plot.resistance_paths.len(), 6);
        assert_eq!(plot.reactance_paths.len(), 11);
    }

    #[test]
    fn test_inset_too_large() {
        let viewport = ViewPort::new(100.0, 100.0).unwrap();
        assert!(build_smith_plot(&[], viewport, &SmithSettings { inset: 50.0 }).is_err());
    }

    #[test]
    fn test_curve_follows_rim() {
        let samples: Vec<Complex64> = (0..5)
            .map(|k| Complex64::from_polar(1.0, k as f64 * PI / 4.0))
            .collect();
        let plot = build_smith_plot(
            &[trace(samples)],
            ViewPort::new(200.0, 200.0).unwrap(),
            &SmithSettings::default(),
        )
        .unwrap();
        let paths = plot.plot_paths.unwrap();
        let d = &paths[0].path;
        assert_eq!(d.matches('L').count(), 4 * SMITH_CURVE_SUBDIVISIONS);
        for pair in d[1..].split('L') {
            let xy: Vec<f64> = pair.split(',').map(|v| v.parse().unwrap()).collect();
            let r = (xy[0] - 100.0).hypot(xy[1] - 100.0);
            assert_relative_eq!(r, 100.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_pointer_picks_nearest_gamma() {
        let samples = vec![
            Complex64::new(0.5, 0.0),
            Complex64::new(0.0, 0.5),
            Complex64::new(-0.5, 0.0),
        ];
        let trace = trace(samples);
        let plot = build_smith_plot(
            &[trace.clone()],
            ViewPort::new(200.0, 200.0).unwrap(),
            &SmithSettings::default(),
        )
        .unwrap();
        assert_eq!(plot.scaling.smith(), Some(&SmithScale::new(200.0)));
        // Upper half of the chart is positive Im Γ
        let (re, im) = plot.invert((100.0, 40.0));
        assert_relative_eq!(re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(im, 0.6, epsilon = 1e-12);
        assert_eq!(plot.nearest_sample(&trace, (100.0, 40.0)).unwrap(), Some(1));
        assert_eq!(plot.nearest_sample(&trace, (20.0, 110.0)).unwrap(), Some(2));
    }

    #[test]
    fn test_phase_unwrap_takes_short_way() {
        let unwrapped = unwrap_phase([3.0, -3.0].into_iter());
        assert_relative_eq!(unwrapped[1], TAU - 3.0, epsilon = 1e-12);
    }
}
