use std::path::{Path, PathBuf};

use filaship_base::consts::COMPOSE_FILE_NAMES;

/// The compose file a command works on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComposeFile {
    pub path: PathBuf,
    pub exists: bool,
}

impl ComposeFile {
    /// Picks the compose file relative to the working directory, see
    /// [`Self::locate_in`].
    pub fn locate(explicit: Option<PathBuf>, preferred: &Path) -> Self {
        Self::locate_in(Path::new(""), explicit, preferred)
    }

    /// Picks the compose file in `dir`.
    ///
    /// An explicitly given path is always used. Otherwise the first existing
    /// file among `preferred` and the usual compose file names is chosen, and
    /// `preferred` if none exists.
    pub fn locate_in(dir: &Path, explicit: Option<PathBuf>, preferred: &Path) -> Self {
        if let Some(path) = explicit {
            let path = dir.join(path);
            let exists = path.try_exists().unwrap_or(false);
            return Self { path, exists };
        }

        std::iter::once(dir.join(preferred))
            .chain(COMPOSE_FILE_NAMES.iter().map(|name| dir.join(name)))
            .find(|path| path.try_exists().unwrap_or(false))
            .map_or_else(
                || Self { path: dir.join(preferred), exists: false },
                |path| Self { path, exists: true },
            )
    }
}
