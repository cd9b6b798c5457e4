//! Catálogo de flujos de despliegue.
//!
//! Las definiciones son entradas inmutables: el core las consume, nunca las
//! muta. El formato de alambre es el JSON camelCase de los assets de flujo
//! originales.

mod container;
mod definition;
mod parameter;

pub use container::FlowCatalog;
pub use definition::{FlowDefinition, FlowStepDefinition, FlowStepKind};
pub use parameter::{FlowParameter, ParameterKind};
