use thiserror::Error;

/// Failures while assembling the dashboard at mount time
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("sales dataset is empty")]
    EmptyStore,

    #[error("duplicate month in sales dataset: {0}")]
    DuplicateMonth(String),

    #[error("failed to parse sales dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("failed to parse dashboard config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid dashboard config: {0}")]
    InvalidConfig(String),
}
