use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub server: ServerConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UploadConfig {
    /// Interval between simulated progress ticks
    pub tick_interval_ms: u32,
    /// Upper bound of one random progress increment, in percent points
    pub max_increment: f64,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
base_url = "https://studyassistant-dzq4.onrender.com"

[upload]
tick_interval_ms = 200
max_increment = 15.0
"#;

/// Overrides read from the page query string, e.g. `?api=http://127.0.0.1:8000`
#[derive(Debug, Default, Deserialize)]
struct QueryOverrides {
    api: Option<String>,
}

impl ClientConfig {
    /// Full URL of a server endpoint (`path` is one of the contract paths)
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.server.base_url.trim_end_matches('/'), path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                base_url: "https://studyassistant-dzq4.onrender.com".to_string(),
            },
            upload: UploadConfig {
                tick_interval_ms: 200,
                max_increment: 15.0,
            },
        }
    }
}

/// Parse TOML configuration and apply query-string overrides on top of it
pub fn parse_config(contents: &str, query: &str) -> anyhow::Result<ClientConfig> {
    let mut config: ClientConfig = toml::from_str(contents)?;

    if !(config.upload.max_increment > 0.0 && config.upload.max_increment.is_finite()) {
        anyhow::bail!(
            "upload.max_increment must be a positive number, got {}",
            config.upload.max_increment
        );
    }

    let overrides: QueryOverrides =
        serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();
    if let Some(api) = overrides.api.filter(|a| !a.trim().is_empty()) {
        log::info!("Server base URL overridden from query string: {}", api);
        config.server.base_url = api.trim().to_string();
    }

    Ok(config)
}

/// Load configuration
///
/// Starts from the embedded default and applies overrides from
/// `window.location.search`.
pub fn load_config() -> anyhow::Result<ClientConfig> {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_config(DEFAULT_CONFIG, &search)
}
