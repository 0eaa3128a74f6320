//! The playlist used for day-to-day evaluation of the bot.

use crate::{
    drills::BallRollingToGoalie,
    playlist::{Playlist, Team},
};
use std::path::{Path, PathBuf};

/// The bot config, relative to the workspace root.
pub const BOT_CONFIG: &str = "YangBot/src/main/python/yangbot.cfg";

pub fn bot_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(BOT_CONFIG)
}

pub fn make_default_playlist() -> Playlist {
    Playlist::new()
        .with(BallRollingToGoalie::new("Hi!"))
        .with_bot(bot_config_path(), Team::Blue)
}
