/// Application configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |-----------|---------|-------------------------------|
/// | DATA_DIR | data | Directory holding the CSV files |
/// | LOG_LEVEL | info | Tracing filter |
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the CSV files live in
    pub data_dir: String,
    /// Tracing filter, e.g. `info` or `cloud_cafe=debug`
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults when unset.
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "data".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Override the data directory, mostly for tests.
    pub fn with_data_dir(data_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
