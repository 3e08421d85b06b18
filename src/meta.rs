//! The plugin's own files and settings. Nothing in here touches the client.

pub mod resources;
pub mod settings;
