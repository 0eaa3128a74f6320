use crate::{game_state::DesiredGameState, rng::RandomSource};
use serde::Serialize;

/// What the runner should grade an exercise on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExerciseKind {
    /// Pass if the bot scores.
    Striker,
    /// Pass if the bot keeps the ball out of its own net.
    Goalie,
}

/// Overrides for the runner's graders. `None` keeps the runner's default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct GraderSettings {
    pub max_duration_seconds: Option<f32>,
}

pub trait Exercise {
    fn name(&self) -> &str;

    fn kind(&self) -> ExerciseKind;

    fn grader(&self) -> GraderSettings {
        GraderSettings::default()
    }

    /// Builds the starting state for one episode. Called once per episode;
    /// every random choice must come from `rng`.
    fn make_game_state(&self, rng: &mut dyn RandomSource) -> DesiredGameState;
}
