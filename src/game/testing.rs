//! An in-memory client for tests.

use eyre::{eyre, Result};
use tempfile::TempDir;

use crate::hook::{Client, GameState};

/// Icons are the text of the PNG files they were built from, which makes the icon table easy to
/// check.
pub struct TestClient {
    pub state: GameState,
    pub icons: Option<Vec<String>>,
    pub chat_refreshes: usize,
}

impl TestClient {
    /// Returns a logged-in client whose icon table holds `icon_count` icons named after their IDs.
    pub fn logged_in(icon_count: usize) -> TestClient {
        TestClient {
            state: GameState::LoggedIn,
            icons: Some((0..icon_count).map(|id| id.to_string()).collect()),
            chat_refreshes: 0,
        }
    }

    pub fn icon_names(&self) -> Vec<&str> {
        self.icons.iter().flatten().map(String::as_str).collect()
    }
}

impl Client for TestClient {
    type Icon = String;

    fn game_state(&self) -> GameState {
        self.state
    }

    fn mod_icons(&self) -> Option<Vec<String>> {
        self.icons.clone()
    }

    fn set_mod_icons(&mut self, icons: Vec<String>) {
        self.icons = Some(icons);
    }

    fn icon_from_png(&self, png: &[u8]) -> Result<String> {
        if png.is_empty() {
            return Err(eyre!("empty image"));
        }

        Ok(String::from_utf8_lossy(png).into_owned())
    }

    fn refresh_chat(&mut self) {
        self.chat_refreshes += 1;
    }
}

/// Creates a data directory with the emotes `kappa` and `lul`.
pub fn emote_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let images = dir.path().join("images");

    std::fs::create_dir(&images).unwrap();
    std::fs::write(images.join("lul.png"), "lul").unwrap();
    std::fs::write(images.join("Kappa.png"), "kappa").unwrap();
    std::fs::write(images.join("notes.txt"), "not an emote").unwrap();

    dir
}
