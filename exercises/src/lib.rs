//! Training exercises: starting game states for evaluating the bot, and the
//! playlists that group them for an external exercise runner.

#![warn(future_incompatible, rust_2018_compatibility, rust_2018_idioms, unused)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub use crate::{
    exercise::{Exercise, ExerciseKind, GraderSettings},
    game_state::{
        DesiredBallState, DesiredCarState, DesiredGameInfoState, DesiredGameState,
        DesiredPhysics, RotatorPartial, Vector3Partial,
    },
    playlist::{MatchConfig, PlayerConfig, Playlist, PlaylistEntry, Team},
    rng::{RandomSource, SeededRandom},
};

pub mod drills;
mod exercise;
mod game_state;
mod playlist;
mod rng;
pub mod run;
