//! 3D scatter of three columns of a drift-turn recording.
//!
//! Usage: `visualizer3d [config.toml]`. Without a config this plots INSPEED,
//! OUTSPEED, and ENDANGLE from `turn.drift.txt`.

use log::info;
use std::{env, error::Error, path::PathBuf};
use telemetry::{
    config::{self, Visualizer3dConfig},
    plot, TelemetryTable,
};

/// Column names of `turn.drift.txt`, in file order.
const DRIFT_COLUMNS: [&str; 7] = [
    "INSPEED",
    "ENDANGLE",
    "TOTALTICKS",
    "DRIFTTICKS",
    "OUTSPEED",
    "OUTOFFSETX",
    "OUTOFFSETY",
];

fn main() -> Result<(), Box<dyn Error>> {
    common::logging::init();

    let config_path = env::args().nth(1).map(PathBuf::from);
    let config: Visualizer3dConfig = config::load(config_path.as_deref())?;

    let table = TelemetryTable::load(&config.input, config.delimiter, config.skip_header)?;
    let mut selected = table.select_columns(&config.columns)?;
    if config.normalize {
        selected.normalize_columns()?;
    }
    info!("{}: {} points", config.input.display(), selected.rows());

    let names: Vec<&str> = config
        .columns
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            selected
                .name(i)
                .or_else(|| DRIFT_COLUMNS.get(c).copied())
                .unwrap_or("?")
        })
        .collect();

    let data = selected.data();
    let points: Vec<(f64, f64, f64)> = (0..selected.rows())
        .map(|r| (data[(r, 0)], data[(r, 1)], data[(r, 2)]))
        .collect();

    plot::scatter3d(
        &config.output,
        &config.title,
        [names[0], names[1], names[2]],
        &points,
    )?;
    info!("wrote {}", config.output.display());
    Ok(())
}
