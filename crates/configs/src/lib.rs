use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 5000, worker_threads: Some(4) }
    }
}

/// Where the collection files live; one `<collection>.json` per collection.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of the compact format.
    #[serde(default)]
    pub json: bool,
}

fn default_data_dir() -> String { "data".to_string() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

pub fn from_toml_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Build a config purely from environment variables, used when no
    /// `config.toml` is present.
    pub fn from_env() -> Self {
        let defaults = ServerConfig::default();
        let host = std::env::var("SERVER_HOST").unwrap_or(defaults.host);
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());
        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| default_data_dir());
        let json = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        Self {
            server: ServerConfig { host, port, worker_threads },
            storage: StorageConfig { data_dir },
            logging: LoggingConfig { json },
        }
    }

    /// File config when available and valid, otherwise the env fallback.
    pub fn load_or_env() -> Self {
        Self::load_and_validate().unwrap_or_else(|_| Self::from_env())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<std::net::SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!("storage.data_dir must not be empty"));
        }
        Ok(())
    }
}
