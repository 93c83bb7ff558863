use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No per-user configuration directory is available on this host.")]
    NoConfigDir,
    #[error("Preferences I/O failed. Error: '{0}'.")]
    Io(#[from] std::io::Error),
    #[error("Preferences file is not valid JSON. Error: '{0}'.")]
    Json(#[from] serde_json::Error),
}
