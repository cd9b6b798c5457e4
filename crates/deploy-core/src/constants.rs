//! Constantes del core.
//!
//! Nombres de los canales de evento que el ejecutor remoto publica hacia la
//! vista de ejecución. Forman parte del contrato observable con el proceso
//! anfitrión: cambiarlos rompe a cualquier suscriptor existente.

/// Trozos de salida cruda de los comandos remotos.
pub const EVENT_COMMAND_RESULT: &str = "command-result";

/// Cambios del índice de paso en ejecución.
pub const EVENT_FLOW_STEP_CHANGE: &str = "flow-step-change";

/// Instantáneas de progreso de transferencias de archivos.
pub const EVENT_FILE_PROGRESS: &str = "file-progress";
