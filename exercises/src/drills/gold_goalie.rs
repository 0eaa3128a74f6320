use crate::{
    exercise::{Exercise, ExerciseKind},
    game_state::{
        DesiredBallState, DesiredCarState, DesiredGameState, DesiredPhysics, RotatorPartial,
        Vector3Partial,
    },
    playlist::Playlist,
    rng::RandomSource,
};
use std::f32::consts::PI;

/// The ball rolls diagonally across the box toward the far post while the
/// goalie starts out of position.
pub struct GoldBallRollingToGoalie {
    name: String,
}

impl GoldBallRollingToGoalie {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Exercise for GoldBallRollingToGoalie {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ExerciseKind {
        ExerciseKind::Goalie
    }

    fn make_game_state(&self, _rng: &mut dyn RandomSource) -> DesiredGameState {
        DesiredGameState {
            ball_state: Some(DesiredBallState {
                physics: Some(DesiredPhysics {
                    location: Some(Vector3Partial::new(-2500.0, -2500.0, 100.0)),
                    velocity: Some(Vector3Partial::new(1000.0, -1000.0, 0.0)),
                    angular_velocity: Some(Vector3Partial::new(0.0, 0.0, 0.0)),
                    ..Default::default()
                }),
            }),
            car_states: vec![DesiredCarState {
                physics: Some(DesiredPhysics {
                    location: Some(Vector3Partial::new(0.0, -1500.0, 17.0)),
                    rotation: Some(RotatorPartial::new(0.0, PI * -0.5, 0.0)),
                    velocity: Some(Vector3Partial::new(0.0, 0.0, 0.0)),
                    angular_velocity: Some(Vector3Partial::new(0.0, 0.0, 0.0)),
                }),
                ..Default::default()
            }
            .with_boost(30.0)],
            ..Default::default()
        }
    }
}

pub fn make_default_playlist() -> Playlist {
    Playlist::new().with(GoldBallRollingToGoalie::new("GoldBallRollingToGoalie"))
}
