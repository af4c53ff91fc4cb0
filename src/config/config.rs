use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::store::StoreConfig;

/// Path of the YAML file read when `GALLERIA_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "./config.yaml";

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0: listener, store, upload limits and logging.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
#[serde(default)]
pub struct ConfigV1 {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
    pub upload: UploadConfig,
    pub uploads: StaticFilesConfig,
    pub logging: LoggingConfig,
}

impl Default for ConfigV1 {
    fn default() -> Self {
        ConfigV1 {
            host: "0.0.0.0".to_string(),
            port: 3000,
            store: StoreConfig::default(),
            upload: UploadConfig::default(),
            uploads: StaticFilesConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ConfigV1 {
    /// The `host:port` pair the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Limits applied to `POST /upload`.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
#[serde(default)]
pub struct UploadConfig {
    /// Largest accepted request body in bytes. The whole file is buffered in
    /// memory, so this also bounds per-request memory use.
    pub max_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        // Same as axum's built-in body limit.
        UploadConfig {
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

/// The local directory served for paths no route claims.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub directory: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        StaticFilesConfig {
            directory: "./uploads".to_string(),
        }
    }
}

/// Layers defaults, the YAML file at `path` and the environment.
///
/// `MONGODB_URI` and `PORT` are honoured as-is; anything else can be set
/// with `GALLERIA_` prefixed variables, e.g. `GALLERIA_LOGGING__LEVEL=debug`.
pub fn config_sources(path: &str) -> Figment {
    Figment::from(Serialized::defaults(Config::ConfigV1(ConfigV1::default())))
        .merge(Yaml::file(path))
        .merge(Env::raw().only(&["MONGODB_URI"]).map(|_| "store.uri".into()))
        .merge(Env::raw().only(&["PORT"]))
        .merge(Env::prefixed("GALLERIA_").split("__"))
}

/// Extracts the versioned config from an already layered figment.
pub fn extract_config(sources: &Figment) -> Result<ConfigV1, figment::Error> {
    match sources.extract::<Config>()? {
        Config::ConfigV1(c) => Ok(c),
    }
}

/// Loads `./.env` into the process environment, if there is one.
///
/// Variables that are already set are left alone.
pub fn load_dotenv() -> Result<(), dotenvy::Error> {
    match dotenvy::from_path(".env") {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e),
    }
}

/// Load config from `GALLERIA_CONFIG` (or `./config.yaml`) plus the environment,
/// after `.env` has been applied.
pub fn load_config() -> ConfigV1 {
    if let Err(e) = load_dotenv() {
        eprintln!("Error loading .env: {}", e);
        std::process::exit(1);
    }
    let path = std::env::var("GALLERIA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    match extract_config(&config_sources(&path)) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() {
    let schema = schema_for!(Config);
    match serde_json::to_string_pretty(&schema) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error rendering configuration schema: {}", e),
    }
}
