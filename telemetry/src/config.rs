//! Settings for the plotting binaries. Every field has a default, so a config
//! file only needs to mention what it changes, and no file at all reproduces
//! the usual plots.

use crate::table::Delimiter;
use serde::{de::DeserializeOwned, Deserialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("bad config {path:?}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Reads a TOML config, or returns the defaults if `path` is `None`.
pub fn load<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T, ConfigError> {
    let path = match path {
        Some(path) => path,
        None => return Ok(T::default()),
    };
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotKind {
    /// Histogram of the first selected column.
    Histogram,
    /// The second selected column against the first, one series per input,
    /// with a least-squares line through all of them.
    Series,
    /// Speed (second column) against time (first column), overlaid with the
    /// deceleration model integrated from the first sample.
    Coast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Air,
    GroundRolling,
    /// Fit acceleration against speed from the data itself.
    Fitted,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub inputs: Vec<PathBuf>,
    pub delimiter: Delimiter,
    pub skip_header: usize,
    pub columns: Vec<usize>,
    pub trim_leading: usize,
    pub trim_trailing: usize,
    pub kind: PlotKind,
    pub model: ModelKind,
    /// Number of histogram bin edges.
    pub edges: usize,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub output: PathBuf,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            inputs: vec![PathBuf::from("data/yeet-000.csv")],
            delimiter: Delimiter::Whitespace,
            skip_header: 1,
            columns: vec![2],
            trim_leading: 20,
            trim_trailing: 5,
            kind: PlotKind::Histogram,
            model: ModelKind::GroundRolling,
            edges: 100,
            title: "Drawing with points".to_string(),
            x_label: "distance".to_string(),
            y_label: String::new(),
            output: PathBuf::from("visualizer.svg"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Visualizer3dConfig {
    pub input: PathBuf,
    pub delimiter: Delimiter,
    pub skip_header: usize,
    /// x, y, and z. Colour follows z.
    pub columns: [usize; 3],
    pub normalize: bool,
    pub title: String,
    pub output: PathBuf,
}

impl Default for Visualizer3dConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("turn.drift.txt"),
            delimiter: Delimiter::Whitespace,
            skip_header: 1,
            // INSPEED, OUTSPEED, ENDANGLE
            columns: [0, 4, 1],
            normalize: true,
            title: "turn.drift".to_string(),
            output: PathBuf::from("visualizer3d.svg"),
        }
    }
}
