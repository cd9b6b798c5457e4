//! Contrato con el ejecutor remoto.

use async_trait::async_trait;
use deploy_domain::{HospitalProfile, ServerProfile};

use crate::errors::CoreError;
use crate::params::LaunchArgs;

/// Ejecutor de flujos. La implementación real (sesión SSH, transferencias,
/// plantillas de comando) vive en el proceso anfitrión; aquí sólo se fija
/// el contrato que el store consume.
#[async_trait]
pub trait FlowExecutor {
    /// Ejecuta el flujo nombrado contra el servidor objetivo. Se invoca una
    /// vez por lanzamiento y debe resolver exactamente una vez: `Ok` mapea
    /// a `Succeeded`, `Err` a `Failed` con su mensaje.
    async fn execute_flow(&self,
                          hospital: &HospitalProfile,
                          server: &ServerProfile,
                          flow_name: &str,
                          args: &LaunchArgs)
                          -> Result<(), CoreError>;

    /// Prueba de conectividad contra el servidor; devuelve una descripción
    /// del sistema remoto. Sus fallos se muestran como aviso transitorio y
    /// nunca tocan el estado de ejecución.
    async fn test_connection(&self, server: &ServerProfile) -> Result<String, CoreError>;
}
