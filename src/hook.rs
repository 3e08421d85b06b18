//! Describes how the plugin hooks into the host client: the capabilities it needs from the client
//! and the events that the client delivers to it.

use eyre::Result;
use strum::IntoStaticStr;

/// The client's connection state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, IntoStaticStr)]
pub enum GameState {
    Unknown,
    Starting,
    LoginScreen,
    LoginScreenAuthenticator,
    Loading,
    LoggingIn,
    ConnectionLost,
    Hopping,
    LoggedIn,
}

/// The parts of the host client that the plugin uses.
pub trait Client {
    /// The client's representation of a chat icon.
    type Icon: Clone;

    /// Returns the current game state.
    fn game_state(&self) -> GameState;

    /// Returns a copy of the client's chat icon table, or `None` if the client hasn't created it
    /// yet.
    fn mod_icons(&self) -> Option<Vec<Self::Icon>>;

    /// Replaces the chat icon table. Icon `n` in the table is drawn for `<img=n>`.
    fn set_mod_icons(&mut self, icons: Vec<Self::Icon>);

    /// Builds an icon from the contents of a PNG file.
    fn icon_from_png(&self, png: &[u8]) -> Result<Self::Icon>;

    /// Redraws the chatbox so that edited messages are shown.
    fn refresh_chat(&mut self);
}

/// Categories of chat message.
#[derive(Clone, Copy, PartialEq, Eq, Debug, IntoStaticStr)]
pub enum ChatMessageType {
    GameMessage,
    ModChat,
    PublicChat,
    PrivateChat,
    Engine,
    LoginLogoutNotification,
    PrivateChatOut,
    ModPrivateChat,
    FriendsChat,
    FriendsChatNotification,
    Broadcast,
    Console,
    TradeRequest,
    ClanChat,
    Unknown,
}

impl ChatMessageType {
    /// Returns true for the messages that players write themselves. These are the only messages
    /// that emotes are shown in.
    pub fn is_player_chat(self) -> bool {
        matches!(
            self,
            ChatMessageType::PublicChat
                | ChatMessageType::ModChat
                | ChatMessageType::FriendsChat
                | ChatMessageType::PrivateChat
                | ChatMessageType::PrivateChatOut
                | ChatMessageType::ModPrivateChat
        )
    }
}

/// A line in the chatbox.
#[derive(Clone, Debug)]
pub struct MessageNode {
    /// The message as it was received.
    value: String,

    /// Replacement text to display instead of `value`.
    formatted: Option<String>,
}

impl MessageNode {
    pub fn new(value: impl Into<String>) -> MessageNode {
        MessageNode {
            value: value.into(),
            formatted: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the text that will be displayed for this message, if it differs from the value.
    pub fn formatted(&self) -> Option<&str> {
        self.formatted.as_deref()
    }

    pub fn set_formatted(&mut self, formatted: String) {
        self.formatted = Some(formatted);
    }
}

/// Sent when a message is added to the chatbox.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub kind: ChatMessageType,
    pub node: MessageNode,
}

impl ChatMessage {
    pub fn new(kind: ChatMessageType, value: impl Into<String>) -> ChatMessage {
        ChatMessage {
            kind,
            node: MessageNode::new(value),
        }
    }
}

/// The kinds of actor that can show overhead text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActorKind {
    Player,
    Npc,
}

/// Sent when the text above an actor's head changes. Handlers may replace `text`.
#[derive(Clone, Debug)]
pub struct OverheadTextChanged {
    pub actor: ActorKind,
    pub text: String,
}

/// Sent when the client's game state changes.
#[derive(Clone, Copy, Debug)]
pub struct GameStateChanged {
    pub state: GameState,
}
