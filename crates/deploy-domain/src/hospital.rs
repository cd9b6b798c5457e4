use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Perfil de hospital: agrupa las IPs de los servidores que componen un
/// despliegue. Es el contexto con el que se evalúan los comandos de un
/// flujo; el core nunca lo muta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalProfile {
    pub id: String,
    pub name: String,
    pub main_server_ip: String,
    pub database_server_ip: String,
    pub redis_server_ip: String,
    pub minio_server_ip: String,
    pub report_server_ip: String,
    pub file_preview_server_ip: String,
    pub dashboard_server_ip: String,
    pub big_screen_server_ip: String,
}

impl HospitalProfile {
    /// Valida los campos mínimos para que el perfil sea utilizable en un
    /// despliegue. Las IPs secundarias pueden quedar vacías (no todos los
    /// hospitales despliegan todos los servicios).
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::ValidationError("hospital name must not be empty".to_string()));
        }
        if self.main_server_ip.trim().is_empty() {
            return Err(DomainError::ValidationError("main server ip must not be empty".to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for HospitalProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<hospital: {} ({})>", self.name, self.main_server_ip)
    }
}
