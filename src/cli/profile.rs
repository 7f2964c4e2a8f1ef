use std::{fs, path::Path};

use crate::{
    core::validation::{validate_profile, Violation},
    repository::profile::ProfileStorage,
};

/// Pretty printed stored profile, `None` when nothing was saved yet.
pub fn show_profile(storage: &dyn ProfileStorage) -> anyhow::Result<Option<String>> {
    let Some(profile) = storage.get()? else {
        return Ok(None);
    };
    Ok(Some(serde_json::to_string_pretty(&profile)?))
}

/// Runs the profile schema over a json file and returns what it rejected.
pub fn validate_profile_file(path: &Path) -> anyhow::Result<Vec<Violation>> {
    let raw = fs::read_to_string(path)?;
    let body: serde_json::Value = serde_json::from_str(&raw)?;
    match validate_profile(&body) {
        Ok(_) => Ok(vec![]),
        Err(violations) => Ok(violations),
    }
}
