//! Regla de presentación derivada del estado de ejecución.
//!
//! La lista de pasos no guarda estado propio: la clase de cada paso se
//! deriva de comparar su índice con `current_step` y del `status` global.
//! La vista no rastrea "qué paso falló"; lo infiere de la coincidencia de
//! `current_step` con un `status` terminal.

use super::store::{ExecutionStatus, FlowExecutionState};

/// Clasificación exhaustiva de un paso: exactamente una variante aplica a
/// cada par (estado, índice).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepClass {
    /// Aún no ejecutado (o nada corre todavía).
    Pending,
    /// Índice ya superado: un paso dejado atrás se considera hecho, sea
    /// cual sea el estado global.
    Succeeded,
    /// Paso actual con la ejecución en marcha.
    CurrentInProgress,
    /// Paso actual cuando el lanzamiento terminó en fallo.
    CurrentFailed,
    /// Paso actual cuando el lanzamiento terminó bien.
    CurrentSucceeded,
}

pub fn classify_step(state: &FlowExecutionState, index: usize) -> StepClass {
    if state.status == ExecutionStatus::Idle || index > state.current_step {
        return StepClass::Pending;
    }
    if index < state.current_step {
        return StepClass::Succeeded;
    }
    match state.status {
        ExecutionStatus::Failed => StepClass::CurrentFailed,
        ExecutionStatus::Succeeded => StepClass::CurrentSucceeded,
        // Idle ya retornó arriba; sólo queda Running.
        ExecutionStatus::Running | ExecutionStatus::Idle => StepClass::CurrentInProgress,
    }
}

/// Texto de descripción del paso, con las cadenas de la interfaz original.
/// El mensaje de fallo se atribuye al paso actual.
pub fn step_description(state: &FlowExecutionState, index: usize) -> String {
    match classify_step(state, index) {
        StepClass::Pending => "待执行".to_string(),
        StepClass::Succeeded | StepClass::CurrentSucceeded => "执行成功".to_string(),
        StepClass::CurrentInProgress => "执行中...".to_string(),
        StepClass::CurrentFailed => match state.error_message.as_deref() {
            Some(message) => format!("执行失败: {message}"),
            None => "执行失败".to_string(),
        },
    }
}
