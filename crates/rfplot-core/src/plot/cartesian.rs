//! Cartesian (frequency vs. component) plots

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TICK_COUNT;
use crate::error::Result;
use crate::math::{Component, MonotoneCubic};
use crate::nearest::nearest_frequency_index_hz;
use crate::path::{line_path, PathBuilder};
use crate::scale::{
    cartesian_scale, compute_axis_extent, compute_ticks, zero_crossing_line, CoordinateScaling,
    ExtentOverride, LinearScale, Tick,
};
use crate::trace::Trace;

use super::{finite_runs, TracePath, ViewPort};

/// Margins between the viewport edge and the plot area, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Insets {
    pub fn uniform(inset: f64) -> Self {
        Self {
            top: inset,
            bottom: inset,
            left: inset,
            right: inset,
        }
    }
}

/// User axis configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisSettings {
    pub insets: Insets,
    /// Frequency bounds in Hz
    pub x: ExtentOverride,
    pub y: ExtentOverride,
    /// Tick intervals on the x axis; 0 selects the default
    pub x_ticks: usize,
    /// Tick intervals on the y axis; 0 selects the default
    pub y_ticks: usize,
}

impl AxisSettings {
    fn tick_count(requested: usize) -> usize {
        if requested == 0 {
            DEFAULT_TICK_COUNT
        } else {
            requested
        }
    }
}

/// Everything needed to draw a Cartesian plot.
///
/// Only the axis paths are present when there are no traces. Traces without
/// samples still get an (empty) entry in `plot_paths`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartesianPlot {
    pub x_axis_path: String,
    pub y_axis_path: String,
    pub ticks_x: Option<Vec<Tick>>,
    pub ticks_y: Option<Vec<Tick>>,
    /// Dashed y = 0 reference, when the y range spans zero
    pub zero_path: Option<String>,
    pub plot_paths: Option<Vec<TracePath>>,
    /// Data (Hz, value) to pixel mapping, once an extent exists
    pub scaling: Option<CoordinateScaling>,
}

impl CartesianPlot {
    /// Data coordinates `(Hz, value)` under a pointer position
    pub fn invert(&self, pixel: (f64, f64)) -> Option<(f64, f64)> {
        self.scaling.as_ref().map(|s| s.invert(pixel))
    }

    /// Index of the sample of `trace` whose frequency is nearest the pointer
    pub fn nearest_sample(&self, trace: &Trace, pixel: (f64, f64)) -> Option<usize> {
        let (hz, _) = self.invert(pixel)?;
        nearest_frequency_index_hz(hz, trace.frequency.f(), trace.frequency.unit())
    }
}

/// Build the Cartesian plot of `component` against frequency for `traces`.
///
/// Pass only the traces that should be visible: the auto extent covers
/// exactly the traces given.
pub fn build_cartesian_plot(
    traces: &[Trace],
    component: Component,
    viewport: ViewPort,
    settings: &AxisSettings,
) -> Result<CartesianPlot> {
    viewport.validate()?;
    let insets = settings.insets;
    let y_top = insets.top;
    let y_bottom = viewport.height - insets.bottom;
    let x_left = insets.left;
    let x_right = viewport.width - insets.right;

    let frame_only = CartesianPlot {
        x_axis_path: line_path((x_left, 0.0), (x_right, 0.0)),
        y_axis_path: line_path((0.0, y_top), (0.0, y_bottom)),
        ticks_x: None,
        ticks_y: None,
        zero_path: None,
        plot_paths: None,
        scaling: None,
    };

    let Some(extent) = compute_axis_extent(traces, component, settings.x, settings.y)? else {
        if traces.is_empty() {
            return Ok(frame_only);
        }
        // Every trace is empty; keep them listed so none vanish unreported
        let plot_paths = traces.iter().map(empty_trace_path).collect();
        return Ok(CartesianPlot {
            plot_paths: Some(plot_paths),
            ..frame_only
        });
    };
    let (x_min, x_max) = extent.x;
    let (y_min, y_max) = extent.y;

    let x_scale = cartesian_scale(x_min, x_max, x_left, x_right)?;
    let y_scale = cartesian_scale(y_min, y_max, y_bottom, y_top)?;

    let ticks_x = compute_ticks(x_min, x_max, AxisSettings::tick_count(settings.x_ticks), &x_scale);
    let ticks_y = compute_ticks(y_min, y_max, AxisSettings::tick_count(settings.y_ticks), &y_scale);
    let zero_path = zero_crossing_line(y_min, y_max, &y_scale, x_right - x_left);

    let plot_paths = traces
        .iter()
        .map(|trace| trace_path(trace, component, &x_scale, &y_scale))
        .collect::<Result<Vec<_>>>()?;
    debug!(
        "Cartesian plot: {} traces, {} component, x=[{}, {}] y=[{}, {}]",
        plot_paths.len(),
        component,
        x_min,
        x_max,
        y_min,
        y_max
    );

    Ok(CartesianPlot {
        ticks_x: Some(ticks_x),
        ticks_y: Some(ticks_y),
        zero_path,
        plot_paths: Some(plot_paths),
        scaling: Some(CoordinateScaling::Cartesian {
            x: x_scale,
            y: y_scale,
        }),
        ..frame_only
    })
}

fn empty_trace_path(trace: &Trace) -> TracePath {
    TracePath {
        label: trace.label.clone(),
        color: trace.color.clone(),
        path: String::new(),
        points: Vec::new(),
    }
}

fn trace_path(
    trace: &Trace,
    component: Component,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
) -> Result<TracePath> {
    let points: Vec<(f64, f64)> = trace
        .frequency
        .to_hz()
        .into_iter()
        .zip(trace.component(component).iter().copied())
        .collect();

    let mut path = PathBuilder::new();
    for run in finite_runs(&points) {
        let screen: Vec<(f64, f64)> = run
            .iter()
            .map(|&(x, y)| (x_scale.apply(x), y_scale.apply(y)))
            .collect();
        monotone_x_curve(&screen, &mut path)?;
    }

    Ok(TracePath {
        label: trace.label.clone(),
        color: trace.color.clone(),
        path: path.build(),
        points,
    })
}

/// Monotone-in-x cubic through `points` (ascending x), as Bezier segments
fn monotone_x_curve(points: &[(f64, f64)], path: &mut PathBuilder) -> Result<()> {
    let Some(&(x0, y0)) = points.first() else {
        return Ok(());
    };
    path.move_to(x0, y0);
    if points.len() == 2 {
        path.line_to(points[1].0, points[1].1);
        return Ok(());
    }

    let (xs, ys): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
    let curve = MonotoneCubic::new(xs, ys)?;
    for seg in curve.segments() {
        let [(c1x, c1y), (c2x, c2y)] = seg.bezier_controls();
        path.bezier_curve_to(c1x, c1y, c2x, c2y, seg.x1, seg.y1);
    }
    Ok(())
}
