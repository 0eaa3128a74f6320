use crate::{exercise::Exercise, game_state::DesiredGameState, rng::RandomSource};
use serde::Serialize;
use std::{path::PathBuf, slice};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Team {
    Blue,
    Orange,
}

/// A bot the runner should put on the field, identified by its config file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerConfig {
    pub config_path: PathBuf,
    pub team: Team,
}

impl PlayerConfig {
    pub fn bot(config_path: impl Into<PathBuf>, team: Team) -> Self {
        Self {
            config_path: config_path.into(),
            team,
        }
    }
}

/// Match settings for one exercise. An empty list of players means the
/// runner's default lineup.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct MatchConfig {
    pub player_configs: Vec<PlayerConfig>,
}

pub struct PlaylistEntry {
    pub exercise: Box<dyn Exercise>,
    pub match_config: MatchConfig,
}

impl PlaylistEntry {
    pub fn name(&self) -> &str {
        self.exercise.name()
    }

    pub fn make_game_state(&self, rng: &mut dyn RandomSource) -> DesiredGameState {
        self.exercise.make_game_state(rng)
    }
}

/// An ordered list of exercises, built once and then only read.
#[derive(Default)]
pub struct Playlist {
    entries: Vec<PlaylistEntry>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, exercise: impl Exercise + 'static) -> Self {
        self.entries.push(PlaylistEntry {
            exercise: Box::new(exercise),
            match_config: MatchConfig::default(),
        });
        self
    }

    /// Puts the given bot, and only that bot, into every exercise.
    pub fn with_bot(mut self, config_path: impl Into<PathBuf>, team: Team) -> Self {
        let player = PlayerConfig::bot(config_path, team);
        for entry in &mut self.entries {
            entry.match_config.player_configs = vec![player.clone()];
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, PlaylistEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(PlaylistEntry::name).collect()
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a PlaylistEntry;
    type IntoIter = slice::Iter<'a, PlaylistEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
