//! SVG rendering of telemetry. These only draw; every number on the page is
//! computed by the caller.

use crate::{fit::LinearFit, histogram::Histogram};
use plotters::prelude::*;
use std::{fmt::Display, ops::Range, path::Path};
use thiserror::Error;

const SIZE: (u32, u32) = (1000, 600);

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("drawing failed: {0}")]
    Drawing(String),

    #[error("nothing to plot")]
    Empty,
}

fn drawing(e: impl Display) -> PlotError {
    PlotError::Drawing(e.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    Line,
    Points,
}

#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub style: SeriesStyle,
}

pub struct Labels<'a> {
    pub title: &'a str,
    pub x: &'a str,
    pub y: &'a str,
}

pub fn histogram(path: &Path, labels: &Labels<'_>, hist: &Histogram) -> Result<(), PlotError> {
    let edges = hist.edges();
    let x_range = padded(edges[0], edges[edges.len() - 1]);
    let max_count = hist.counts().iter().copied().max().unwrap_or(0);

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(labels.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, 0.0..(max_count as f64 * 1.05).max(1.0))
        .map_err(drawing)?;
    chart
        .configure_mesh()
        .x_desc(labels.x)
        .y_desc(labels.y)
        .draw()
        .map_err(drawing)?;

    chart
        .draw_series(hist.bins().map(|(left, right, count)| {
            Rectangle::new([(left, 0.0), (right, count as f64)], BLUE.mix(0.3).filled())
        }))
        .map_err(drawing)?;

    root.present().map_err(drawing)?;
    Ok(())
}

/// Draws each series in its own colour. `fit`, if given, is drawn as a line
/// across the whole x range.
pub fn series(
    path: &Path,
    labels: &Labels<'_>,
    series: &[Series],
    fit: Option<&LinearFit>,
) -> Result<(), PlotError> {
    let points = || series.iter().flat_map(|s| s.points.iter());
    let (x_min, x_max) = bounds(points().map(|p| p.0)).ok_or(PlotError::Empty)?;
    let mut y_bounds = bounds(points().map(|p| p.1)).ok_or(PlotError::Empty)?;
    if let Some(fit) = fit {
        let (lo, hi) = y_bounds;
        let (a, b) = (fit.eval(x_min), fit.eval(x_max));
        y_bounds = (lo.min(a).min(b), hi.max(a).max(b));
    }

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(labels.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(padded(x_min, x_max), padded(y_bounds.0, y_bounds.1))
        .map_err(drawing)?;
    chart
        .configure_mesh()
        .x_desc(labels.x)
        .y_desc(labels.y)
        .draw()
        .map_err(drawing)?;

    for (i, s) in series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let anno = match s.style {
            SeriesStyle::Line => chart
                .draw_series(LineSeries::new(s.points.iter().copied(), &color))
                .map_err(drawing)?,
            SeriesStyle::Points => chart
                .draw_series(s.points.iter().map(|&p| Circle::new(p, 2, color.filled())))
                .map_err(drawing)?,
        };
        anno.label(s.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    if let Some(fit) = fit {
        let line = vec![(x_min, fit.eval(x_min)), (x_max, fit.eval(x_max))];
        chart
            .draw_series(LineSeries::new(line, &BLACK))
            .map_err(drawing)?
            .label(format!("{:.5}x + {:.3}", fit.slope, fit.intercept))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(drawing)?;

    root.present().map_err(drawing)?;
    Ok(())
}

/// Scatter of `(x, y, z)` points. Points get redder as z grows; z is expected
/// to be normalized to `-1..=1`.
pub fn scatter3d(
    path: &Path,
    title: &str,
    axis_names: [&str; 3],
    points: &[(f64, f64, f64)],
) -> Result<(), PlotError> {
    let (x_min, x_max) = bounds(points.iter().map(|p| p.0)).ok_or(PlotError::Empty)?;
    let (y_min, y_max) = bounds(points.iter().map(|p| p.1)).ok_or(PlotError::Empty)?;
    let (z_min, z_max) = bounds(points.iter().map(|p| p.2)).ok_or(PlotError::Empty)?;

    let root = SVGBackend::new(path, (800, 800)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .build_cartesian_3d(
            padded(x_min, x_max),
            padded(y_min, y_max),
            padded(z_min, z_max),
        )
        .map_err(drawing)?;
    chart.configure_axes().draw().map_err(drawing)?;

    chart
        .draw_series(points.iter().map(|&(x, y, z)| {
            let red = (z.abs().min(1.0) * 255.0) as u8;
            Circle::new((x, y, z), 2, RGBColor(red, 128, 255).filled())
        }))
        .map_err(drawing)?
        .label(format!("{} / {} / {}", axis_names[0], axis_names[1], axis_names[2]))
        .legend(|(x, y)| Circle::new((x + 10, y), 3, RGBColor(255, 128, 255).filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(drawing)?;

    root.present().map_err(drawing)?;
    Ok(())
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Widens a range slightly so nothing sits on the frame, and gives a
/// zero-width range some width.
fn padded(lo: f64, hi: f64) -> Range<f64> {
    let pad = if hi > lo { (hi - lo) * 0.02 } else { 1.0 };
    (lo - pad)..(hi + pad)
}
