use common::{ImageGenConfig, ObjectStorageConfig};
use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CreditsConfig {
    /// Credits granted to a newly registered account.
    pub initial_balance: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub credits: CreditsConfig,
    #[serde(default)]
    pub image: ImageGenConfig,
    #[serde(default)]
    pub storage: ObjectStorageConfig,
}

impl CreditsConfig {
    /// Balance a new account starts with. Negative settings count as zero.
    pub fn starting_balance(&self) -> i32 {
        self.initial_balance.clamp(0, i32::MAX)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources("config/config", std::env::vars().collect())
    }

    /// Layer defaults, the optional file at `file` and the variables in `vars`.
    pub fn from_sources(file: &str, vars: Map<String, String>) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("database.max_connections", 20)?
            .set_default("database.min_connections", 2)?
            .set_default("credits.initial_balance", 10)?
            // Load from config/config.toml
            .add_source(File::with_name(file).required(false))
            // Override from environment (e.g., ICONGEN__AUTH__JWT_SECRET)
            .add_source(
                Environment::with_prefix("ICONGEN")
                    .separator("__")
                    .source(Some(vars.clone())),
            )
            // Flat variable names used by existing deployments
            .set_override_option("storage.access_key_id", vars.get("ACCESS_KEY_ID").cloned())?
            .set_override_option(
                "storage.secret_access_key",
                vars.get("SECRET_ACCESS_KEY").cloned(),
            )?
            .set_override_option("image.api_key", vars.get("DALLE_API_KEY").cloned())?
            .set_override_option("image.mock", vars.get("MOCK_DALLE").map(|v| mock_flag(v)))?
            .build()?;

        s.try_deserialize()
    }
}

/// Only the exact string "true" enables mock mode.
pub fn mock_flag(value: &str) -> bool {
    value == "true"
}
