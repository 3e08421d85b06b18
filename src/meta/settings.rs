use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use serde::Deserialize;

/// Whether emotes are drawn in a particular kind of text.
#[derive(Clone, Copy, PartialEq, Eq, Deserialize, Debug)]
pub enum EmoteVisibility {
    /// Emote names are replaced with icons. This is the default.
    Shown,

    /// Emote names are left as text.
    Hidden,
}

impl EmoteVisibility {
    pub fn is_shown(self) -> bool {
        matches!(self, EmoteVisibility::Shown)
    }
}

impl Default for EmoteVisibility {
    fn default() -> Self {
        EmoteVisibility::Shown
    }
}

/// The user's emote settings.
#[derive(Clone, Default, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Options {
    /// Whether emotes are drawn in the chatbox.
    pub chat_emotes: EmoteVisibility,

    /// Whether emotes are drawn in the text above players' heads.
    pub overhead_emotes: EmoteVisibility,

    /// A folder to load emote images from instead of the default one.
    pub images_dir: Option<PathBuf>,
}

impl Options {
    /// Attempts to parse the contents of `reader` to get an `Options` value.
    fn parse_json(reader: impl Read) -> Result<Options> {
        // Coerce with `?`.
        Ok(serde_json::from_reader(reader)?)
    }

    /// Looks for a settings file at `path` and loads it.
    fn load_from_file(path: &Path) -> Result<Option<Options>> {
        if !path.exists() {
            // This isn't an error, but we didn't find any settings.
            return Ok(None);
        }

        let file = File::open(path).wrap_err("failed to open settings file")?;

        Ok(Some(
            Options::parse_json(file).wrap_err("failed to parse settings file")?,
        ))
    }

    /// Either loads the settings from `path` or generates default values for them.
    pub fn load(path: &Path) -> Options {
        match Options::load_from_file(path) {
            Ok(Some(options)) => return options,

            Ok(None) => log::info!("No settings file found. Defaults will be used."),

            Err(err) => {
                log::error!("Error loading settings file: {err:?}. Defaults will be used.")
            }
        };

        Options::default()
    }
}
