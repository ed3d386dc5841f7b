use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to parse site configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site configuration: {0}")]
    Invalid(String),
}

impl SiteError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        SiteError::Invalid(reason.into())
    }
}
