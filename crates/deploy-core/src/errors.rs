//! Errores del core: fallos del ejecutor y rechazos locales de validación.

use std::io;

use thiserror::Error;

/// Fallo terminal de un lanzamiento o del catálogo. Los mensajes visibles
/// para el usuario conservan el idioma de la interfaz original.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The server authentication failed.
    #[error("服务器认证失败")]
    AuthenticationFailed,

    /// The command execution timed out.
    #[error("命令执行超时")]
    CommandExecutionTimeout,

    /// The command execution failed.
    #[error("命令执行失败: {0}")]
    CommandExecutionFailed(String),

    /// The flow execution failed.
    #[error("流程执行失败: {0}")]
    FlowExecutionFailed(String),

    /// No flow with the given name exists in the catalog.
    #[error("流程不存在: {0}")]
    UnknownFlow(String),

    /// A flow definition file could not be parsed.
    #[error("无效的流程定义: {0}")]
    InvalidFlowDefinition(String),
}

/// Rechazo local previo al lanzamiento. Se muestra como aviso transitorio;
/// nunca produce una transición de la máquina de estados.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("请先选择一个服务器")] NoServerSelected,
    #[error("请先选择一个流程")] NoFlowSelected,
    #[error("此参数必须: {0}")] MissingParameter(String),
    #[error("参数类型不正确: {0}")] InvalidParameterValue(String),
}
