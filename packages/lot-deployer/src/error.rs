use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: String,
        source: toml::de::Error,
    },

    /// Storing or instantiating a contract failed
    #[error("Failed to deploy {contract}: {error:#}")]
    Deploy {
        contract: &'static str,
        error: anyhow::Error,
    },
}
