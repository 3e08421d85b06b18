//! Finds the plugin's files inside its data directory.

/*
    <data dir>
      images              Emote images. Each `name.png` adds the emote `name`.
      settings.emotes.json    Options (see `settings`). Optional.
      emotes.log          The log from the current session.
      PANIC.txt           Details of the last panic, if there was one.
*/

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// An image that adds an emote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmoteImage {
    /// The emote's name: the lowercase file name without the extension.
    name: String,

    path: PathBuf,
}

impl Display for EmoteImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "emote '{}' ({})", self.name, self.path.display())
    }
}

impl EmoteImage {
    fn from_path(path: &Path) -> Option<EmoteImage> {
        if path.is_dir() {
            // Emotes are only taken from the top level of the images folder.
            return None;
        }

        let extension = path.extension().and_then(std::ffi::OsStr::to_str);

        match extension.map(str::to_lowercase).as_deref() {
            Some("png") => {}

            Some(extension) => {
                log::warn!("Unrecognised extension '{}' for {:?}", extension, path);
                return None;
            }

            None => {
                log::warn!("Skipping {:?}, emote images must be PNG files", path);
                return None;
            }
        }

        let name = path.file_stem()?.to_str()?.to_lowercase();

        Some(EmoteImage {
            name,
            path: path.to_path_buf(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the contents of the image file.
    pub fn read(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path).wrap_err_with(|| format!("failed to read {}", self))
    }
}

/// Paths to the plugin's files.
#[derive(Clone, Debug)]
pub struct Resources {
    root: PathBuf,

    /// Overrides the default images folder.
    images_dir: Option<PathBuf>,
}

impl Resources {
    pub fn new(root: impl Into<PathBuf>) -> Resources {
        Resources {
            root: root.into(),
            images_dir: None,
        }
    }

    /// Makes the emotes load from `images_dir` rather than the default folder. `None` restores the
    /// default.
    pub fn set_images_dir(&mut self, images_dir: Option<PathBuf>) {
        self.images_dir = images_dir;
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the data directory if it doesn't exist.
    pub fn create_root(&self) -> Result<()> {
        if self.root.exists() {
            return Ok(());
        }

        std::fs::create_dir_all(&self.root)
            .wrap_err_with(|| format!("failed to create data directory {:?}", self.root))
    }

    pub fn images_path(&self) -> PathBuf {
        match &self.images_dir {
            Some(dir) => dir.clone(),
            None => self.root.join("images"),
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join("settings.emotes.json")
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join("emotes.log")
    }

    pub fn panic_path(&self) -> PathBuf {
        self.root.join("PANIC.txt")
    }

    /// Returns the emote images in the images folder, sorted by name.
    pub fn emote_images(&self) -> Result<Vec<EmoteImage>> {
        let path = self.images_path();

        let directory = path
            .read_dir()
            .wrap_err_with(|| format!("failed to read images folder {:?}", path))?;

        let mut images = vec![];

        for entry in directory {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Error while reading images folder: {}", err);
                    continue;
                }
            };

            if let Some(image) = EmoteImage::from_path(&entry.path()) {
                images.push(image);
            }
        }

        images.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));

        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let mut resources = Resources::new("/data/emotes");

        assert_eq!(resources.images_path(), Path::new("/data/emotes/images"));
        assert_eq!(
            resources.settings_path(),
            Path::new("/data/emotes/settings.emotes.json")
        );
        assert_eq!(resources.log_path(), Path::new("/data/emotes/emotes.log"));
        assert_eq!(resources.panic_path(), Path::new("/data/emotes/PANIC.txt"));

        resources.set_images_dir(Some(PathBuf::from("/elsewhere")));
        assert_eq!(resources.images_path(), Path::new("/elsewhere"));
    }

    #[test]
    fn test_emote_images() {
        let root = tempfile::tempdir().unwrap();
        let images = root.path().join("images");
        std::fs::create_dir(&images).unwrap();

        std::fs::write(images.join("lul.png"), b"lul").unwrap();
        std::fs::write(images.join("Kappa.PNG"), b"kappa").unwrap();
        std::fs::write(images.join("readme.txt"), b"not an emote").unwrap();
        std::fs::write(images.join("noextension"), b"").unwrap();
        std::fs::create_dir(images.join("nested.png")).unwrap();

        let found = Resources::new(root.path()).emote_images().unwrap();
        let names: Vec<_> = found.iter().map(EmoteImage::name).collect();

        assert_eq!(names, vec!["kappa", "lul"]);
        assert_eq!(found[1].path(), images.join("lul.png"));
        assert_eq!(found[1].read().unwrap(), b"lul");
    }

    #[test]
    fn test_missing_images_folder() {
        let root = tempfile::tempdir().unwrap();

        assert!(Resources::new(root.path()).emote_images().is_err());
    }

    #[test]
    fn test_create_root() {
        let root = tempfile::tempdir().unwrap();
        let resources = Resources::new(root.path().join("a").join("b"));

        resources.create_root().unwrap();
        assert!(resources.root().is_dir());

        // Creating it again is fine.
        resources.create_root().unwrap();
    }
}
