use crate::{error::TelemetryError, table::TelemetryTable};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FitError {
    #[error("got {xs} x values but {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("need at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("every x value is the same, so there is no slope to fit")]
    ZeroVariance,

    #[error("fit is not finite")]
    NotFinite,
}

/// `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Fits column `y` of `table` against column `x`.
    pub fn fit_columns(table: &TelemetryTable, x: usize, y: usize) -> Result<Self, TelemetryError> {
        let xs = table.column(x)?;
        let ys = table.column(y)?;
        Ok(fit_linear(&xs, &ys)?)
    }
}

/// Ordinary least squares through `(xs[i], ys[i])`.
pub fn fit_linear(xs: &[f64], ys: &[f64]) -> Result<LinearFit, FitError> {
    if xs.len() != ys.len() {
        return Err(FitError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.len() < 2 {
        return Err(FitError::TooFewPoints(xs.len()));
    }
    // Checked directly since a mean computed in floating point can leave a
    // tiny nonzero variance behind.
    if xs.iter().all(|&x| x == xs[0]) {
        return Err(FitError::ZeroVariance);
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }
    if !sxx.is_finite() || !sxy.is_finite() {
        return Err(FitError::NotFinite);
    }
    if sxx <= 0.0 {
        return Err(FitError::ZeroVariance);
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(FitError::NotFinite);
    }
    Ok(LinearFit { slope, intercept })
}

/// Finite-difference acceleration: `(v[i], (v[i+1] - v[i]) / (t[i+1] - t[i]))`
/// for each consecutive pair of samples. Pairs where time does not move
/// forward (duplicated or out-of-order ticks) are skipped.
pub fn acceleration_samples(times: &[f64], speeds: &[f64]) -> Vec<(f64, f64)> {
    times
        .windows(2)
        .zip(speeds.windows(2))
        .filter_map(|(t, v)| {
            let dt = t[1] - t[0];
            if dt > 0.0 {
                Some((v[0], (v[1] - v[0]) / dt))
            } else {
                None
            }
        })
        .collect()
}

/// The acceleration at `row` as a fraction of the speed at `row`, i.e. the
/// drag coefficient if the car is coasting.
pub fn relative_acceleration(
    times: &[f64],
    speeds: &[f64],
    row: usize,
) -> Result<f64, TelemetryError> {
    let rows = times.len().min(speeds.len());
    if row + 1 >= rows {
        return Err(TelemetryError::RowOutOfRange { index: row, rows });
    }
    let dt = times[row + 1] - times[row];
    Ok((speeds[row + 1] - speeds[row]) / (speeds[row] * dt))
}
