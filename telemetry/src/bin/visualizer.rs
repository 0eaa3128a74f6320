//! Loads one or more telemetry recordings and plots them.
//!
//! Usage: `visualizer [config.toml]`. Without a config this draws the
//! histogram of column 2 of `data/yeet-000.csv`.

use log::info;
use std::{env, error::Error, path::PathBuf};
use telemetry::{
    acceleration_samples,
    config::{self, ModelKind, PlotKind, VisualizerConfig},
    fit_linear, load_trimmed,
    plot::{self, Labels, Series, SeriesStyle},
    relative_acceleration, DecelerationModel, Histogram, LinearFit, TelemetryTable,
};

fn main() -> Result<(), Box<dyn Error>> {
    common::logging::init();

    let config_path = env::args().nth(1).map(PathBuf::from);
    let config: VisualizerConfig = config::load(config_path.as_deref())?;

    let mut tables = Vec::with_capacity(config.inputs.len());
    for input in &config.inputs {
        let table = load_trimmed(
            input,
            config.delimiter,
            config.skip_header,
            &config.columns,
            (config.trim_leading, config.trim_trailing),
        )?;
        info!("{}: {} rows", input.display(), table.rows());
        tables.push(table);
    }

    let labels = Labels {
        title: &config.title,
        x: &config.x_label,
        y: &config.y_label,
    };

    match config.kind {
        PlotKind::Histogram => {
            let mut values = Vec::new();
            for table in &tables {
                values.extend(table.column(0)?);
            }
            let hist = Histogram::auto(&values, config.edges)?;
            plot::histogram(&config.output, &labels, &hist)?;
        }
        PlotKind::Series => {
            let mut series = Vec::with_capacity(tables.len());
            let (mut xs, mut ys) = (Vec::new(), Vec::new());
            for (input, table) in config.inputs.iter().zip(&tables) {
                let points = xy(table)?;
                xs.extend(points.iter().map(|p| p.0));
                ys.extend(points.iter().map(|p| p.1));
                series.push(Series {
                    label: input.display().to_string(),
                    points,
                    style: SeriesStyle::Line,
                });
            }
            let fit = fit_linear(&xs, &ys)?;
            info!("fit: {:?}", fit);
            plot::series(&config.output, &labels, &series, Some(&fit))?;
        }
        PlotKind::Coast => {
            let mut series = Vec::with_capacity(tables.len() * 2);
            for (input, table) in config.inputs.iter().zip(&tables) {
                let times = table.column(0)?;
                let speeds = table.column(1)?;
                let model = match config.model {
                    ModelKind::Air => DecelerationModel::Air,
                    ModelKind::GroundRolling => DecelerationModel::GroundRolling,
                    ModelKind::Fitted => DecelerationModel::Fitted(fit_deceleration(&times, &speeds)?),
                };
                let initial_speed = *speeds.first().ok_or("no samples left after trimming")?;
                if let Ok(drag) = relative_acceleration(&times, &speeds, 0) {
                    info!("{}: relative acceleration {}", input.display(), drag);
                }
                series.push(Series {
                    label: input.display().to_string(),
                    points: times.iter().copied().zip(speeds.iter().copied()).collect(),
                    style: SeriesStyle::Points,
                });
                series.push(Series {
                    label: format!("{:?}", model),
                    points: model.integrate(&times, initial_speed),
                    style: SeriesStyle::Line,
                });
            }
            plot::series(&config.output, &labels, &series, None)?;
        }
    }

    info!("wrote {}", config.output.display());
    Ok(())
}

fn xy(table: &TelemetryTable) -> Result<Vec<(f64, f64)>, telemetry::TelemetryError> {
    let xs = table.column(0)?;
    let ys = table.column(1)?;
    Ok(xs.into_iter().zip(ys).collect())
}

fn fit_deceleration(times: &[f64], speeds: &[f64]) -> Result<LinearFit, telemetry::FitError> {
    let samples = acceleration_samples(times, speeds);
    let speeds: Vec<f64> = samples.iter().map(|s| s.0).collect();
    let accels: Vec<f64> = samples.iter().map(|s| s.1).collect();
    let fit = fit_linear(&speeds, &accels)?;
    info!("deceleration fit: a = {} v + {}", fit.slope, fit.intercept);
    Ok(fit)
}
