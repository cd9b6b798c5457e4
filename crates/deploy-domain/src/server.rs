use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Perfil de servidor: credenciales y dirección del host objetivo donde se
/// ejecuta un flujo (el "connection profile" de un lanzamiento).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerProfile {
    pub id: String,
    /// Hospital al que pertenece el servidor; la vista filtra por este campo.
    pub hospital_id: String,
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl ServerProfile {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::ValidationError("server name must not be empty".to_string()));
        }
        if self.host.trim().is_empty() {
            return Err(DomainError::ValidationError("server host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(DomainError::ValidationError("server port must be non-zero".to_string()));
        }
        if self.username.trim().is_empty() {
            return Err(DomainError::ValidationError("server username must not be empty".to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for ServerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<server: {}@{}:{}>", self.username, self.host, self.port)
    }
}
