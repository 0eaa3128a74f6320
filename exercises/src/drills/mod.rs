//! The individual drills. Each one is a named factory for starting states;
//! the numbers are hand-picked and only some of them are randomized.

pub use self::{
    bronze_goalie::BallRollingToGoalie, custom_shot::HookShot,
    gold_goalie::GoldBallRollingToGoalie, side_roll::SideRoll,
};

mod bronze_goalie;
pub mod custom_shot;
pub mod gold_goalie;
mod side_roll;

#[cfg(test)]
mod tests {
    use crate::{
        drills::{BallRollingToGoalie, GoldBallRollingToGoalie, HookShot, SideRoll},
        exercise::{Exercise, ExerciseKind},
        rng::{tests::FixedFraction, SeededRandom},
        DesiredGameState,
    };
    use common::ext::ExtendRotation3;
    use nalgebra::Vector3;

    fn all() -> Vec<Box<dyn Exercise>> {
        vec![
            Box::new(HookShot::new("HookShot")),
            Box::new(GoldBallRollingToGoalie::new("GoldBallRollingToGoalie")),
            Box::new(BallRollingToGoalie::new("BallRollingToGoalie")),
            Box::new(SideRoll::new("SideRoll")),
        ]
    }

    fn ball_location(state: &DesiredGameState) -> Vector3<f32> {
        state
            .ball_physics()
            .and_then(|p| p.location)
            .and_then(|l| l.to_vector())
            .unwrap()
    }

    #[test]
    fn same_seed_same_state() {
        for exercise in all() {
            for seed in 0..20 {
                let a = exercise.make_game_state(&mut SeededRandom::new(seed));
                let b = exercise.make_game_state(&mut SeededRandom::new(seed));
                assert_eq!(a, b, "{} seed {}", exercise.name(), seed);
            }
        }
    }

    #[test]
    fn same_draws_same_state() {
        for exercise in all() {
            let a = exercise.make_game_state(&mut FixedFraction(0.25));
            let b = exercise.make_game_state(&mut FixedFraction(0.25));
            assert_eq!(a, b, "{}", exercise.name());
        }
    }

    #[test]
    fn boost_is_a_real_tank() {
        for exercise in all() {
            for seed in 0..50 {
                let state = exercise.make_game_state(&mut SeededRandom::new(seed));
                for car in &state.car_states {
                    if let Some(boost) = car.boost_amount {
                        assert!(boost >= 0.0 && boost <= 100.0, "{} {}", exercise.name(), boost);
                    }
                }
            }
        }
    }

    #[test]
    fn hook_shot_ranges() {
        let exercise = HookShot::new("HookShot");
        let low = exercise.make_game_state(&mut FixedFraction(0.0));
        let high = exercise.make_game_state(&mut FixedFraction(0.999));

        assert_eq!(ball_location(&low), Vector3::new(-500.0, -500.0, 94.0));
        let loc = ball_location(&high);
        assert!(loc.x > 498.0 && loc.x < 500.0);
        assert!(loc.y > 498.0 && loc.y < 500.0);

        let car = low.car_physics(0).unwrap().location.unwrap();
        assert_eq!(car.x, Some(-100.0));
        let car = high.car_physics(0).unwrap().location.unwrap();
        assert!(car.x.unwrap() < -90.0 && car.x.unwrap() > -90.1);

        assert_eq!(low.car_states[0].boost_amount, Some(80.0));
        assert_eq!(low.game_info_state.as_ref().unwrap().game_speed, Some(1.0));
        assert_eq!(exercise.kind(), ExerciseKind::Striker);
        assert_eq!(exercise.grader().max_duration_seconds, Some(5.0));
    }

    #[test]
    fn hook_shot_parks_the_second_car() {
        let state = HookShot::new("HookShot").make_game_state(&mut SeededRandom::new(3));
        assert_eq!(state.car_states.len(), 2);
        let parked = state.car_physics(1).unwrap();
        assert_eq!(
            parked.location.unwrap().to_vector(),
            Some(Vector3::new(10000.0, 10000.0, 10000.0)),
        );
        assert!(parked.velocity.is_none());
        assert!(state.car_states[1].boost_amount.is_none());
    }

    #[test]
    fn hook_shot_car_drives_upfield() {
        let state = HookShot::new("HookShot").make_game_state(&mut SeededRandom::new(0));
        let physics = state.car_physics(0).unwrap();
        let forward = physics.rotation.unwrap().to_rotation().unwrap().forward_axis();
        let velocity = physics.velocity.unwrap().to_vector().unwrap();
        assert!(forward.dot(&velocity.normalize()) > 0.999);
    }

    #[test]
    fn gold_goalie_is_fixed() {
        let exercise = GoldBallRollingToGoalie::new("GoldBallRollingToGoalie");
        let a = exercise.make_game_state(&mut FixedFraction(0.0));
        let b = exercise.make_game_state(&mut SeededRandom::new(42));
        assert_eq!(a, b);
        assert_eq!(ball_location(&a), Vector3::new(-2500.0, -2500.0, 100.0));
        assert_eq!(a.car_states[0].boost_amount, Some(30.0));
        assert_eq!(exercise.kind(), ExerciseKind::Goalie);
    }

    #[test]
    fn bronze_goalie_faces_the_ball() {
        let state =
            BallRollingToGoalie::new("BallRollingToGoalie").make_game_state(&mut SeededRandom::new(8));
        let car = state.car_physics(0).unwrap();
        let forward = car.rotation.unwrap().to_rotation().unwrap().forward_axis();
        let to_ball = ball_location(&state) - car.location.unwrap().to_vector().unwrap();
        assert!(forward.dot(&to_ball.normalize()) > 0.9);
    }

    #[test]
    fn side_roll_always_starts_at_the_same_x() {
        let exercise = SideRoll::new("SideRoll");
        for &fraction in &[0.0, 0.5, 0.999] {
            let state = exercise.make_game_state(&mut FixedFraction(fraction));
            assert_eq!(ball_location(&state).x, -800.0);
        }
        for seed in 0..20 {
            let state = exercise.make_game_state(&mut SeededRandom::new(seed));
            assert_eq!(ball_location(&state).x, -800.0);
        }
    }
}
