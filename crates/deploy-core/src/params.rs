//! Recolección y validación de parámetros de lanzamiento.
//!
//! Antes de despachar un `launch`, el disparo del usuario pasa por una
//! puerta local: servidor seleccionado y, si el flujo declara parámetros,
//! argumentos que cumplan el esquema. Un rechazo aquí se muestra como
//! aviso y no toca la máquina de estados.

use std::collections::HashMap;

use serde_json::Value;

use crate::catalog::{FlowDefinition, FlowParameter, ParameterKind};
use crate::errors::ValidationError;

/// Argumentos resueltos por el usuario para un lanzamiento.
pub type LaunchArgs = HashMap<String, Value>;

/// Qué toca hacer entre el disparo del usuario y el `launch` real.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPlan {
    /// Sin parámetros declarados: lanzar de inmediato con args vacíos.
    Immediate,
    /// El flujo declara parámetros: recolectar input antes de lanzar.
    CollectParameters,
}

pub fn plan_launch(flow: &FlowDefinition, server_selected: bool) -> Result<LaunchPlan, ValidationError> {
    if !server_selected {
        return Err(ValidationError::NoServerSelected);
    }
    if flow.parameters.is_empty() {
        Ok(LaunchPlan::Immediate)
    } else {
        Ok(LaunchPlan::CollectParameters)
    }
}

/// Valida los argumentos recolectados contra el esquema del flujo. Los
/// parámetros no requeridos aceptan cualquier valor, incluida su ausencia.
pub fn validate_args(parameters: &[FlowParameter], args: &LaunchArgs) -> Result<(), ValidationError> {
    for parameter in parameters {
        if !parameter.required {
            continue;
        }
        validate_required(parameter, args.get(&parameter.name))?;
    }
    Ok(())
}

/// Regla requerida derivada por tipo, una rama por constructor: añadir un
/// `ParameterKind` nuevo obliga a decidir aquí qué exige.
fn validate_required(parameter: &FlowParameter, value: Option<&Value>) -> Result<(), ValidationError> {
    let value = value.ok_or_else(|| ValidationError::MissingParameter(parameter.name.clone()))?;
    let accepted = match parameter.kind {
        ParameterKind::Text => value.as_str().is_some_and(|s| !s.is_empty()),
        ParameterKind::Number => value.is_number(),
        ParameterKind::File { multiple: false } => value.as_str().is_some_and(|s| !s.is_empty()),
        ParameterKind::File { multiple: true } => value.as_array().is_some_and(|a| !a.is_empty()),
    };
    if accepted {
        Ok(())
    } else {
        Err(ValidationError::InvalidParameterValue(parameter.name.clone()))
    }
}
