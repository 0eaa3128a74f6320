use crate::{
    exercise::{Exercise, ExerciseKind},
    game_state::{
        DesiredBallState, DesiredCarState, DesiredGameInfoState, DesiredGameState,
        DesiredPhysics, RotatorPartial, Vector3Partial,
    },
    rng::RandomSource,
};
use common::rl;

/// The ball rolls across the field in front of the car, which has to cut it
/// off and put it on net.
pub struct SideRoll {
    name: String,
}

impl SideRoll {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Exercise for SideRoll {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ExerciseKind {
        ExerciseKind::Striker
    }

    fn make_game_state(&self, rng: &mut dyn RandomSource) -> DesiredGameState {
        // Both ends of this range are the same, so the ball always starts at
        // x = -800. Left as-is until someone confirms the intended spread.
        let ball_x = rng.uniform(-800.0, -800.0);
        let ball_y = rng.uniform(0.0, 1500.0);
        let roll_speed = rng.uniform(500.0, 1000.0);
        let boost = rng.uniform(20.0, 60.0);

        DesiredGameState {
            game_info_state: Some(DesiredGameInfoState {
                game_speed: Some(1.0),
                world_gravity_z: Some(rl::GRAVITY),
            }),
            ball_state: Some(DesiredBallState {
                physics: Some(DesiredPhysics {
                    location: Some(Vector3Partial::new(ball_x, ball_y, rl::BALL_RADIUS)),
                    velocity: Some(Vector3Partial::new(roll_speed, 0.0, 0.0)),
                    angular_velocity: Some(Vector3Partial::new(0.0, 0.0, 0.0)),
                    ..Default::default()
                }),
            }),
            car_states: vec![DesiredCarState {
                physics: Some(DesiredPhysics {
                    location: Some(Vector3Partial::new(0.0, -1000.0, rl::OCTANE_NEUTRAL_Z)),
                    rotation: Some(RotatorPartial::new(0.0, std::f32::consts::FRAC_PI_2, 0.0)),
                    velocity: Some(Vector3Partial::new(0.0, 0.0, 0.0)),
                    angular_velocity: Some(Vector3Partial::new(0.0, 0.0, 0.0)),
                }),
                ..Default::default()
            }
            .with_boost(boost)],
        }
    }
}
