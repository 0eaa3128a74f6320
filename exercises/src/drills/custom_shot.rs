use crate::{
    exercise::{Exercise, ExerciseKind, GraderSettings},
    game_state::{
        DesiredBallState, DesiredCarState, DesiredGameInfoState, DesiredGameState,
        DesiredPhysics, RotatorPartial, Vector3Partial,
    },
    playlist::Playlist,
    rng::RandomSource,
};
use std::f32::consts::PI;

/// A shot where you have to hook it to score.
pub struct HookShot {
    name: String,
}

impl HookShot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Exercise for HookShot {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ExerciseKind {
        ExerciseKind::Striker
    }

    fn grader(&self) -> GraderSettings {
        GraderSettings {
            max_duration_seconds: Some(5.0),
        }
    }

    fn make_game_state(&self, rng: &mut dyn RandomSource) -> DesiredGameState {
        // Draw order matters for replays: ball location, ball velocity, car.
        let ball_x = rng.uniform(-500.0, 500.0);
        let ball_y = rng.uniform(-500.0, 500.0);
        let ball_vel_y = rng.uniform(-300.0, 500.0);
        let ball_vel_z = rng.uniform(0.0, 600.0);
        let car_x = rng.uniform(-100.0, -90.0);

        DesiredGameState {
            game_info_state: Some(DesiredGameInfoState {
                game_speed: Some(1.0),
                ..Default::default()
            }),
            ball_state: Some(DesiredBallState {
                physics: Some(DesiredPhysics {
                    location: Some(Vector3Partial::new(ball_x, ball_y, 94.0)),
                    velocity: Some(Vector3Partial::new(0.0, ball_vel_y, ball_vel_z)),
                    angular_velocity: Some(Vector3Partial::new(0.0, 0.0, 0.0)),
                    ..Default::default()
                }),
            }),
            car_states: vec![
                DesiredCarState {
                    physics: Some(DesiredPhysics {
                        location: Some(Vector3Partial::new(car_x, -2200.0, 25.0)),
                        rotation: Some(RotatorPartial::new(0.0, PI / 2.0, 0.0)),
                        velocity: Some(Vector3Partial::new(0.0, 1000.0, 0.0)),
                        angular_velocity: Some(Vector3Partial::new(0.0, 0.0, 0.0)),
                    }),
                    ..Default::default()
                }
                .with_boost(80.0),
                DesiredCarState::parked(),
            ],
        }
    }
}

pub fn make_default_playlist() -> Playlist {
    Playlist::new().with(HookShot::new("HookShot"))
}
