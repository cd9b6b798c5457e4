//! Unión etiquetada de los tres canales de evento del ejecutor.
//!
//! Rol en el flujo:
//! - El ejecutor publica estos eventos mientras un lanzamiento corre.
//! - La vista los pliega en su estado con una única función
//!   (`ExecutionMonitor::apply`), canal por canal.
//! - No hay números de secuencia: el orden observable es el de llegada y
//!   entre canales distintos no se asume orden alguno.

use serde::{Deserialize, Serialize};

use crate::constants::{EVENT_COMMAND_RESULT, EVENT_FILE_PROGRESS, EVENT_FLOW_STEP_CHANGE};
use crate::progress::ProgressEvent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "kebab-case")]
pub enum ExecutorEvent {
    /// Trozo opaco de salida del comando remoto; se escribe tal cual al
    /// terminal, cero o más veces por lanzamiento.
    CommandResult { data: String },
    /// Nuevo índice de paso en ejecución. Valores repetidos son no-ops.
    FlowStepChange { data: usize },
    /// Instantánea de progreso de una transferencia; sólo durante pasos
    /// que mueven archivos.
    FileProgress(ProgressEvent),
}

impl ExecutorEvent {
    /// Nombre del canal original al que corresponde el evento.
    pub fn channel(&self) -> &'static str {
        match self {
            ExecutorEvent::CommandResult { .. } => EVENT_COMMAND_RESULT,
            ExecutorEvent::FlowStepChange { .. } => EVENT_FLOW_STEP_CHANGE,
            ExecutorEvent::FileProgress(_) => EVENT_FILE_PROGRESS,
        }
    }
}
