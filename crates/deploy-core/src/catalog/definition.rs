use serde::{Deserialize, Serialize};

use super::parameter::FlowParameter;

/// Definición inmutable de un flujo: secuencia ordenada de pasos remotos
/// más el esquema de parámetros que el usuario resuelve al lanzar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDefinition {
    /// Flujo que se ejecuta contra la máquina local en vez del servidor.
    #[serde(default)]
    pub local: bool,
    /// Identidad del flujo dentro del catálogo (y texto de presentación).
    pub name: String,
    pub description: String,
    /// Clave simbólica del icono; la resuelve la capa de presentación.
    pub icon: String,
    #[serde(default)]
    pub parameters: Vec<FlowParameter>,
    pub steps: Vec<FlowStepDefinition>,
}

impl FlowDefinition {
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Tipo cerrado de paso. Cada variante corresponde a un `type` del JSON de
/// definición; un valor desconocido falla al deserializar en lugar de
/// llegar hasta la ejecución.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowStepKind {
    RunCommand,
    DownloadPackage,
    TransferPackage,
    TransferConfigFile,
    TransferFile,
    DecompressionOfflinePackage,
}

impl FlowStepKind {
    /// Pasos que pueden emitir instantáneas de progreso de archivo.
    pub fn involves_file_transfer(&self) -> bool {
        match self {
            FlowStepKind::RunCommand => false,
            FlowStepKind::DownloadPackage
            | FlowStepKind::TransferPackage
            | FlowStepKind::TransferConfigFile
            | FlowStepKind::TransferFile
            | FlowStepKind::DecompressionOfflinePackage => true,
        }
    }
}

/// Un paso del flujo: un comando remoto o una transferencia de archivo.
/// Los campos opcionales aplican según `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStepDefinition {
    #[serde(rename = "type")]
    pub kind: FlowStepKind,
    /// Identidad del paso dentro del flujo (y título en la lista de pasos).
    pub name: String,
    /// Script de guardia: si evalúa verdadero el paso se omite.
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub source_file_param_name: Option<String>,
    #[serde(default)]
    pub source_file: Option<String>,
    #[serde(default)]
    pub target_dir: Option<String>,
    #[serde(default)]
    pub target_file: Option<String>,
}
