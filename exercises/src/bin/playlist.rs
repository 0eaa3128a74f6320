//! Prints the starting states of a playlist as JSON, one per exercise, for an
//! external runner to apply.
//!
//! Usage: `playlist [custom_shot|gold_goalie|side_roll|run] [seed]`

use exercises::{drills, run, Playlist, SeededRandom};
use log::info;
use serde::Serialize;
use std::{env, error::Error};

#[derive(Serialize)]
struct Episode<'a> {
    name: &'a str,
    seed: u64,
    kind: exercises::ExerciseKind,
    grader: exercises::GraderSettings,
    match_config: &'a exercises::MatchConfig,
    game_state: exercises::DesiredGameState,
}

fn main() -> Result<(), Box<dyn Error>> {
    common::logging::init();

    let mut args = env::args().skip(1);
    let which = args.next().unwrap_or_else(|| "run".to_string());
    let seed = match args.next() {
        Some(s) => s.parse()?,
        None => 0,
    };

    let playlist = playlist_by_name(&which).ok_or_else(|| format!("unknown playlist {:?}", which))?;
    info!("playlist {} has {} exercises, seed {}", which, playlist.len(), seed);

    for entry in &playlist {
        let mut rng = SeededRandom::new(seed);
        let episode = Episode {
            name: entry.name(),
            seed,
            kind: entry.exercise.kind(),
            grader: entry.exercise.grader(),
            match_config: &entry.match_config,
            game_state: entry.make_game_state(&mut rng),
        };
        println!("{}", serde_json::to_string_pretty(&episode)?);
    }

    Ok(())
}

fn playlist_by_name(name: &str) -> Option<Playlist> {
    match name {
        "custom_shot" => Some(drills::custom_shot::make_default_playlist()),
        "gold_goalie" => Some(drills::gold_goalie::make_default_playlist()),
        "side_roll" => Some(Playlist::new().with(drills::SideRoll::new("SideRoll"))),
        "run" => Some(run::make_default_playlist()),
        _ => None,
    }
}
