//! Shows emotes in game chat. Emote names written in chat messages or above players' heads are
//! swapped for icon tags, which the client draws inline using icons that the plugin adds to its
//! chat icon table.

use std::path::PathBuf;

pub mod game;
pub mod hook;
mod logging;
pub mod meta;
pub mod text;

pub use game::EmotesPlugin;

use meta::{resources::Resources, settings::Options};

/// Sets the plugin up in `data_dir` and starts it on `client`.
///
/// The returned plugin should be given the client's events. Emote icons are added to the client
/// now if its icon table exists, or otherwise when the player logs in.
pub fn load<C: hook::Client>(client: C, data_dir: impl Into<PathBuf>) -> EmotesPlugin<C> {
    let mut resources = Resources::new(data_dir);

    // Load the logging system before everything else so that setup problems are recorded.
    if let Err(err) = resources
        .create_root()
        .and_then(|_| logging::init(&resources))
    {
        // There's no log to write this to.
        eprintln!("emotes: logging unavailable: {err:?}");
    }

    log::info!("Cargo package version is {}", env!("CARGO_PKG_VERSION"));

    let options = Options::load(&resources.settings_path());
    log::info!("Options: {:#?}", options);

    resources.set_images_dir(options.images_dir.clone());
    log::info!("Loading emotes from {:?}", resources.images_path());

    let mut plugin = EmotesPlugin::new(client, options, resources);
    plugin.start_up();

    plugin
}
