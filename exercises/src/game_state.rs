use common::{ext::ExtendRotation3, rl};
use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3Partial {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
}

impl Vector3Partial {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// Returns the vector if every component is set.
    pub fn to_vector(&self) -> Option<Vector3<f32>> {
        Some(Vector3::new(self.x?, self.y?, self.z?))
    }
}

impl From<Vector3<f32>> for Vector3Partial {
    fn from(v: Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Angles are in radians, using Unreal's (pitch, yaw, roll) convention.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotatorPartial {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaw: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll: Option<f32>,
}

impl RotatorPartial {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self {
            pitch: Some(pitch),
            yaw: Some(yaw),
            roll: Some(roll),
        }
    }

    pub fn to_rotation(&self) -> Option<Rotation3<f32>> {
        Some(Rotation3::from_unreal_angles(
            self.pitch?,
            self.yaw?,
            self.roll?,
        ))
    }
}

impl From<&Rotation3<f32>> for RotatorPartial {
    fn from(rot: &Rotation3<f32>) -> Self {
        let (pitch, yaw, roll) = rot.to_unreal_angles();
        Self::new(pitch, yaw, roll)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesiredPhysics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vector3Partial>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<RotatorPartial>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity: Option<Vector3Partial>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angular_velocity: Option<Vector3Partial>,
}

impl DesiredPhysics {
    /// Physics that only moves the object and leaves everything else alone.
    pub fn at(location: Vector3Partial) -> Self {
        Self {
            location: Some(location),
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesiredBallState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physics: Option<DesiredPhysics>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesiredCarState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physics: Option<DesiredPhysics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost_amount: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jumped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_jumped: Option<bool>,
}

impl DesiredCarState {
    /// Sets the boost amount, clamped to a real tank.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost_amount = Some(boost.max(0.0).min(rl::BOOST_MAX));
        self
    }

    /// A car moved somewhere it cannot touch the ball.
    pub fn parked() -> Self {
        Self {
            physics: Some(DesiredPhysics::at(Vector3Partial::new(
                rl::OUT_OF_PLAY,
                rl::OUT_OF_PLAY,
                rl::OUT_OF_PLAY,
            ))),
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesiredGameInfoState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_speed: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world_gravity_z: Option<f32>,
}

/// A starting configuration for one episode. Any field left as `None` is not
/// touched by the runner.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesiredGameState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_state: Option<DesiredBallState>,
    pub car_states: Vec<DesiredCarState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_info_state: Option<DesiredGameInfoState>,
}

impl DesiredGameState {
    pub fn ball_physics(&self) -> Option<&DesiredPhysics> {
        self.ball_state.as_ref()?.physics.as_ref()
    }

    pub fn car_physics(&self, index: usize) -> Option<&DesiredPhysics> {
        self.car_states.get(index)?.physics.as_ref()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
