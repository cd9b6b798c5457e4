//! Máquina de estados de la ejecución de un flujo.

mod display;
mod store;

pub use display::{classify_step, step_description, StepClass};
pub use store::{ExecutionStatus, ExecutionStore, FlowExecutionState};
