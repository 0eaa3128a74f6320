use crate::{
    exercise::{Exercise, ExerciseKind},
    game_state::{
        DesiredBallState, DesiredCarState, DesiredGameState, DesiredPhysics, RotatorPartial,
        Vector3Partial,
    },
    rng::RandomSource,
};
use common::rl;
use std::f32::consts::PI;

/// The ball rolls slowly toward the goal from midfield. The goalie starts in
/// net facing it.
pub struct BallRollingToGoalie {
    name: String,
}

impl BallRollingToGoalie {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Exercise for BallRollingToGoalie {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ExerciseKind {
        ExerciseKind::Goalie
    }

    fn make_game_state(&self, rng: &mut dyn RandomSource) -> DesiredGameState {
        let ball_x = rng.uniform(-200.0, 200.0);
        // let side = if rng.uniform(0.0, 1.0) < 0.5 { -1.0 } else { 1.0 };
        let side = 1.0;

        DesiredGameState {
            ball_state: Some(DesiredBallState {
                physics: Some(DesiredPhysics {
                    location: Some(Vector3Partial::new(side * ball_x, -2500.0, 100.0)),
                    velocity: Some(Vector3Partial::new(0.0, -1500.0, 0.0)),
                    angular_velocity: Some(Vector3Partial::new(0.0, 0.0, 0.0)),
                    ..Default::default()
                }),
            }),
            car_states: vec![DesiredCarState {
                physics: Some(DesiredPhysics {
                    location: Some(Vector3Partial::new(0.0, -5000.0, rl::OCTANE_NEUTRAL_Z)),
                    rotation: Some(RotatorPartial::new(0.0, PI / 2.0, 0.0)),
                    velocity: Some(Vector3Partial::new(0.0, 0.0, 0.0)),
                    angular_velocity: Some(Vector3Partial::new(0.0, 0.0, 0.0)),
                }),
                jumped: Some(false),
                double_jumped: Some(false),
                ..Default::default()
            }
            .with_boost(rl::BOOST_MAX)],
            ..Default::default()
        }
    }
}
