//! Adds the emote images to the client's chat icon table.

use eyre::WrapErr;

use crate::{hook::Client, meta::resources::Resources, text::TriggerDictionary};

/// The emote icons that have been added to the client, and the names that refer to them.
#[derive(Debug, Default)]
pub struct EmoteIcons {
    triggers: TriggerDictionary,

    /// The ID of the first emote icon. `None` until the icons have been loaded.
    base_id: Option<u32>,
}

impl EmoteIcons {
    pub fn new() -> EmoteIcons {
        EmoteIcons::default()
    }

    /// Returns true once the icons have been added to the client.
    pub fn is_ready(&self) -> bool {
        self.base_id.is_some()
    }

    pub fn base_id(&self) -> Option<u32> {
        self.base_id
    }

    pub fn triggers(&self) -> &TriggerDictionary {
        &self.triggers
    }

    /// Appends the emote images to the client's icon table.
    ///
    /// Does nothing if the icons have already been added or if the client's icon table doesn't
    /// exist yet. If the images can't be found, the icons stay unloaded so that loading can be
    /// tried again later.
    pub fn load<C: Client>(&mut self, client: &mut C, resources: &Resources) {
        if self.is_ready() {
            return;
        }

        let mut icons = match client.mod_icons() {
            Some(icons) => icons,
            None => {
                log::debug!("Icon table doesn't exist yet");
                return;
            }
        };

        let images = match resources.emote_images() {
            Ok(images) => images,
            Err(err) => {
                log::warn!("Error locating emote images: {:?}", err);
                return;
            }
        };

        // The emotes go after the icons the client already has.
        let base_id = match u32::try_from(icons.len()) {
            Ok(base_id) => base_id,
            Err(_) => {
                log::error!(
                    "Icon table is too large ({} icons) to add emotes",
                    icons.len()
                );
                return;
            }
        };

        let mut triggers = TriggerDictionary::new();

        for image in images {
            if triggers.lookup(image.name()).is_some() {
                log::warn!("Skipping {}, the name is already in use", image);
                continue;
            }

            let icon = image.read().and_then(|png| {
                client
                    .icon_from_png(&png)
                    .wrap_err_with(|| format!("unable to create icon for {}", image))
            });

            match icon {
                Ok(icon) => {
                    icons.push(icon);
                    triggers.insert(image.name());
                }

                Err(err) => log::warn!("Failed to load {}: {:?}", image, err),
            }
        }

        log::debug!("Adding {} emote icons from ID {}", triggers.len(), base_id);
        client.set_mod_icons(icons);

        self.triggers = triggers;
        self.base_id = Some(base_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::testing::{emote_dir, TestClient};

    #[test]
    fn test_load_appends_icons() {
        let dir = emote_dir();
        let mut client = TestClient::logged_in(5);
        let mut icons = EmoteIcons::new();

        icons.load(&mut client, &Resources::new(dir.path()));

        assert!(icons.is_ready());
        assert_eq!(icons.base_id(), Some(5));
        assert_eq!(icons.triggers().lookup("kappa"), Some(0));
        assert_eq!(icons.triggers().lookup("lul"), Some(1));
        assert_eq!(
            client.icon_names(),
            vec!["0", "1", "2", "3", "4", "kappa", "lul"]
        );
    }

    #[test]
    fn test_load_once() {
        let dir = emote_dir();
        let mut client = TestClient::logged_in(1);
        let mut icons = EmoteIcons::new();
        let resources = Resources::new(dir.path());

        icons.load(&mut client, &resources);
        icons.load(&mut client, &resources);

        assert_eq!(client.icon_names(), vec!["0", "kappa", "lul"]);
    }

    #[test]
    fn test_empty_icon_table() {
        let dir = emote_dir();
        let mut client = TestClient::logged_in(0);
        let mut icons = EmoteIcons::new();

        icons.load(&mut client, &Resources::new(dir.path()));

        // The first emote gets ID 0, which the rewriter never substitutes.
        assert_eq!(icons.base_id(), Some(0));
        assert_eq!(client.icon_names(), vec!["kappa", "lul"]);
    }

    #[test]
    fn test_no_icon_table() {
        let dir = emote_dir();
        let mut client = TestClient::logged_in(0);
        client.icons = None;

        let mut icons = EmoteIcons::new();
        icons.load(&mut client, &Resources::new(dir.path()));

        assert!(!icons.is_ready());
        assert!(client.icons.is_none());
    }

    #[test]
    fn test_missing_images_folder() {
        let dir = tempfile::tempdir().unwrap();
        let mut client = TestClient::logged_in(2);
        let mut icons = EmoteIcons::new();

        icons.load(&mut client, &Resources::new(dir.path()));

        assert!(!icons.is_ready());
        assert_eq!(client.icon_names(), vec!["0", "1"]);
    }

    #[test]
    fn test_bad_images_skipped() {
        let dir = emote_dir();
        std::fs::write(dir.path().join("images").join("broken.png"), "").unwrap();
        std::fs::write(dir.path().join("images").join("LUL.PNG"), "LUL").unwrap();

        let mut client = TestClient::logged_in(2);
        let mut icons = EmoteIcons::new();
        icons.load(&mut client, &Resources::new(dir.path()));

        // Indices stay dense, so every emote still lines up with its icon.
        assert_eq!(icons.triggers().len(), 2);
        assert_eq!(icons.triggers().lookup("broken"), None);
        assert_eq!(icons.triggers().lookup("kappa"), Some(0));
        assert_eq!(icons.triggers().lookup("lul"), Some(1));
        assert_eq!(client.icon_names().len(), 4);
        assert_eq!(client.icon_names()[..3], ["0", "1", "kappa"]);
    }

    #[test]
    fn test_base_id_is_icon_count() {
        let dir = emote_dir();
        let mut client = TestClient::logged_in(300);
        let mut icons = EmoteIcons::new();

        icons.load(&mut client, &Resources::new(dir.path()));

        assert_eq!(icons.base_id(), Some(300));
        assert_eq!(client.icon_names()[300..], ["kappa", "lul"]);
    }
}
