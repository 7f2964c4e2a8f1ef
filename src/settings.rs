use std::env;

use serde::Deserialize;
use tracing::info;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_env")]
    pub env: String, // file / server
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub prefix: Option<String>,
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
    #[serde(default = "default_profile_path")]
    pub profile_path: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// log to stdout instead of the rolling file under `log_dir`
    #[serde(default)]
    pub log_console: bool,
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
}

fn default_env() -> String {
    "file".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8888
}

fn default_public_dir() -> String {
    "./public".to_string()
}

fn default_profile_path() -> String {
    "./.profile.json".to_string()
}

fn default_log_dir() -> String {
    "./logs".to_string()
}

fn default_log_level() -> String {
    "debug".to_string()
}

fn default_max_body_size() -> usize {
    64 * 1024
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env: default_env(),
            host: default_host(),
            port: default_port(),
            prefix: None,
            public_dir: default_public_dir(),
            profile_path: default_profile_path(),
            log_dir: default_log_dir(),
            log_level: default_log_level(),
            log_console: false,
            max_body_size: default_max_body_size(),
        }
    }
}

pub fn get_config() -> anyhow::Result<Config> {
    let env_var = env::var("env").unwrap_or("file".to_string());
    if env_var == "file" {
        info!("using .env file as environtment variable");
        let _ = dotenvy::dotenv();
    } else {
        info!("using server environtment as environtment variable");
    }
    let config = envy::from_env::<Config>()?;
    Ok(config)
}
