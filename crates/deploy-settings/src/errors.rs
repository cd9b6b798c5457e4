use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] deploy_domain::DomainError),

    /// No profile with the given id exists in the collection.
    #[error("配置不存在: {0}")]
    NotFound(String),
}
