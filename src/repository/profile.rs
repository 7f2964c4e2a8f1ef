use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::anyhow;
use tracing::debug;

use crate::model::profile::Profile;

/// Single-slot store for the submitted profile.
pub trait ProfileStorage: Send + Sync {
    /// Returns `None` when nothing has been saved yet.
    fn get(&self) -> anyhow::Result<Option<Profile>>;
    /// Replaces the stored record.
    fn save(&self, profile: &Profile) -> anyhow::Result<()>;
}

pub struct FileProfileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileProfileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl ProfileStorage for FileProfileStorage {
    fn get(&self) -> anyhow::Result<Option<Profile>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(val) => val,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let profile: Profile = serde_json::from_str(&raw)?;
        Ok(Some(profile))
    }

    fn save(&self, profile: &Profile) -> anyhow::Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| anyhow!("profile storage lock poisoned"))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        // write the whole document aside, then swap it in
        let temp_path = self.temp_path();
        fs::write(&temp_path, serde_json::to_vec(profile)?)?;
        fs::rename(&temp_path, &self.path)?;
        debug!("profile written to {}", self.path.display());
        Ok(())
    }
}
