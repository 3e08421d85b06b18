//! Connects the emote rewriter to the client's events.

pub mod icons;

#[cfg(test)]
mod testing;

use crate::{
    hook::{ActorKind, ChatMessage, Client, GameState, GameStateChanged, OverheadTextChanged},
    meta::{resources::Resources, settings::Options},
    text,
};

use icons::EmoteIcons;

/// The plugin's state, driven by the client's events.
pub struct EmotesPlugin<C: Client> {
    client: C,
    options: Options,
    resources: Resources,
    icons: EmoteIcons,
}

impl<C: Client> EmotesPlugin<C> {
    /// Creates the plugin. Nothing is added to the client until `start_up` is called.
    pub fn new(client: C, options: Options, resources: Resources) -> EmotesPlugin<C> {
        EmotesPlugin {
            client,
            options,
            resources,
            icons: EmoteIcons::new(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn icons(&self) -> &EmoteIcons {
        &self.icons
    }

    /// Called when the plugin is enabled.
    pub fn start_up(&mut self) {
        self.load_icons();
    }

    fn load_icons(&mut self) {
        self.icons.load(&mut self.client, &self.resources);
    }

    pub fn on_game_state_changed(&mut self, event: &GameStateChanged) {
        log::debug!("Game state changed to {}", <&str>::from(event.state));

        // The icon table may not have existed at start-up, so try again once we're in the game.
        if event.state == GameState::LoggedIn {
            self.load_icons();
        }
    }

    /// Rewrites the emote names in `message`. Returns `None` if nothing was changed or if the
    /// icons haven't been loaded yet.
    pub fn rewrite(&self, message: &str) -> Option<String> {
        let base_id = self.icons.base_id()?;
        text::rewrite(message, self.icons.triggers(), base_id)
    }

    pub fn on_chat_message(&mut self, message: &mut ChatMessage) {
        if self.client.game_state() != GameState::LoggedIn || !self.icons.is_ready() {
            return;
        }

        if !self.options.chat_emotes.is_shown() || !message.kind.is_player_chat() {
            return;
        }

        let updated = match self.rewrite(message.node.value()) {
            Some(updated) => updated,
            None => return,
        };

        log::trace!("Added emotes to {} message", <&str>::from(message.kind));

        message.node.set_formatted(updated);
        self.client.refresh_chat();
    }

    pub fn on_overhead_text_changed(&self, event: &mut OverheadTextChanged) {
        if event.actor != ActorKind::Player || !self.options.overhead_emotes.is_shown() {
            return;
        }

        if let Some(updated) = self.rewrite(&event.text) {
            event.text = updated;
        }
    }
}
