//! deploy-core: máquina de estados de ejecución de flujos de despliegue.
pub mod catalog;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod exec;
pub mod monitor;
pub mod params;
pub mod progress;
pub mod terminal;

pub use catalog::{FlowCatalog, FlowDefinition, FlowParameter, FlowStepDefinition, FlowStepKind, ParameterKind};
pub use engine::{classify_step, step_description, ExecutionStatus, ExecutionStore, FlowExecutionState, StepClass};
pub use errors::{CoreError, ValidationError};
pub use event::{EventBridge, EventEmitter, EventSubscription, ExecutorEvent};
pub use exec::FlowExecutor;
pub use monitor::ExecutionMonitor;
pub use params::{plan_launch, validate_args, LaunchArgs, LaunchPlan};
pub use progress::{ChannelProgressReporter, NoopProgressReporter, ProgressEvent, ProgressReporter, ProgressTracker};
pub use terminal::{TerminalBuffer, TerminalSink};
