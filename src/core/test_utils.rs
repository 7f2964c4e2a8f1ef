use std::sync::Arc;

use poem::test::TestClient;
use tempfile::TempDir;

use crate::{
    init_openapi_route,
    repository::profile::{FileProfileStorage, ProfileStorage},
    settings::Config,
    AppEndpoint, AppState,
};

pub struct TestApp {
    pub client: TestClient<AppEndpoint>,
    pub storage: Arc<FileProfileStorage>,
    // dropped last, removes the storage file
    pub dir: TempDir,
}

pub fn test_config(dir: &TempDir) -> Config {
    Config {
        prefix: Some("/api".to_string()),
        public_dir: dir.path().join("public").to_string_lossy().into_owned(),
        profile_path: dir.path().join(".profile.json").to_string_lossy().into_owned(),
        log_dir: dir.path().join("logs").to_string_lossy().into_owned(),
        ..Config::default()
    }
}

pub fn generate_test_client(
    storage: Arc<dyn ProfileStorage>,
    config: &Config,
) -> TestClient<AppEndpoint> {
    let app_state = Arc::new(AppState {
        storage,
        max_body_size: config.max_body_size,
    });
    TestClient::new(init_openapi_route(app_state, config))
}

/// App backed by file storage inside a fresh temporary directory.
pub fn generate_test_app() -> anyhow::Result<TestApp> {
    let dir = tempfile::tempdir()?;
    let config = test_config(&dir);
    std::fs::create_dir_all(&config.public_dir)?;
    let storage = Arc::new(FileProfileStorage::new(&config.profile_path));
    let client = generate_test_client(storage.clone(), &config);
    Ok(TestApp {
        client,
        storage,
        dir,
    })
}

#[cfg(test)]
mod tests {
    use crate::{core::test_utils::generate_test_app, repository::profile::ProfileStorage};

    #[test]
    fn test_generate_test_app() -> anyhow::Result<()> {
        let app = generate_test_app()?;
        assert!(app.storage.path().starts_with(app.dir.path()));
        assert!(app.storage.get()?.is_none());
        assert!(app.dir.path().join("public").is_dir());
        Ok(())
    }
}
