//! Hand-derived models that recorded runs get compared against.

use crate::{error::TelemetryError, fit::LinearFit, table::TelemetryTable};

/// Speeds at or below this are out of range for the ground-rolling fit, and
/// the air-drag term takes over.
const GROUND_ROLLING_MIN_SPEED: f64 = 550.0;

/// Velocity decay of a car with no input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecelerationModel {
    /// Free in the air: `a = -0.0305 v`.
    Air,
    /// Rolling on the ground: `a = -227.205... - 0.03047 v` above 550 uu/s.
    GroundRolling,
    /// Whatever was just fit to a recording.
    Fitted(LinearFit),
}

impl DecelerationModel {
    pub fn acceleration(&self, speed: f64) -> f64 {
        match *self {
            DecelerationModel::Air => -0.0305 * speed,
            DecelerationModel::GroundRolling => {
                if speed > GROUND_ROLLING_MIN_SPEED {
                    -227.20539704480407 - 0.03047 * speed
                } else {
                    DecelerationModel::Air.acceleration(speed)
                }
            }
            DecelerationModel::Fitted(fit) => fit.eval(speed),
        }
    }

    /// Steps the speed forward through `times` starting from `initial_speed`
    /// at `times[0]`. Returns one `(time, speed)` pair per step, so one fewer
    /// than there are times.
    pub fn integrate(&self, times: &[f64], initial_speed: f64) -> Vec<(f64, f64)> {
        let mut speed = initial_speed;
        times
            .windows(2)
            .map(|t| {
                speed += self.acceleration(speed) * (t[1] - t[0]);
                (t[1], speed)
            })
            .collect()
    }
}

/// Constants of the turning-slowdown formula in [`corrected_acceleration`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionConstants {
    pub steer_cubic: f64,
    pub steer_quadratic: f64,
    pub steer_linear: f64,
    pub curvature_gain: f64,
}

/// Hand-tuned stand-in values, not fit to any recording. Frozen: a real fit
/// goes in a new table passed to [`corrected_acceleration_with`], or old plots
/// stop lining up.
pub const TURN_CORRECTION: CorrectionConstants = CorrectionConstants {
    steer_cubic: 0.024_816_391_732,
    steer_quadratic: -0.103_177_210_458,
    steer_linear: -0.071_866_930_339_453_46,
    curvature_gain: 96.512_033,
};

/// How much speed a car loses per second just from steering, given its
/// forward speed, the curvature of its path, and its steer input.
///
/// A cubic in `|steer|` times a term linear in speed. Zero steer means zero
/// slowdown, and left and right turns slow the car the same.
pub fn corrected_acceleration(speed: f64, curvature: f64, steer: f64) -> f64 {
    corrected_acceleration_with(&TURN_CORRECTION, speed, curvature, steer)
}

pub fn corrected_acceleration_with(
    c: &CorrectionConstants,
    speed: f64,
    curvature: f64,
    steer: f64,
) -> f64 {
    let s = steer.abs();
    let steer_term = ((c.steer_cubic * s + c.steer_quadratic) * s + c.steer_linear) * s;
    steer_term * (speed + c.curvature_gain * curvature * speed)
}

/// [`corrected_acceleration`] for every row of `table`, reading speed,
/// curvature, and steer from the given columns.
pub fn corrected_acceleration_rows(
    table: &TelemetryTable,
    speed: usize,
    curvature: usize,
    steer: usize,
) -> Result<Vec<f64>, TelemetryError> {
    let speeds = table.column(speed)?;
    let curvatures = table.column(curvature)?;
    let steers = table.column(steer)?;
    Ok(speeds
        .iter()
        .zip(&curvatures)
        .zip(&steers)
        .map(|((&v, &k), &s)| corrected_acceleration(v, k, s))
        .collect())
}
