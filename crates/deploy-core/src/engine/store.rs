use deploy_domain::{HospitalProfile, ServerProfile};
use tracing::{debug, warn};

use crate::catalog::FlowDefinition;
use crate::errors::{CoreError, ValidationError};
use crate::exec::FlowExecutor;
use crate::params::LaunchArgs;

/// Estado global de un lanzamiento.
///
/// Las transiciones válidas son:
/// - `Idle` -> `Running`
/// - `Running` -> `Succeeded`
/// - `Running` -> `Failed`
///
/// `clear` siempre vuelve a `Idle`. No hay reintento automático: un
/// lanzamiento fallido es terminal hasta que el usuario limpia y relanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    Idle,
    Running,
    Succeeded,
    Failed,
}

/// Estado mutable de la ejecución en curso, único por sesión de la vista.
///
/// `error_message` es `Some` si y sólo si `status == Failed`; `current_step`
/// sólo tiene sentido con `current_flow` presente.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowExecutionState {
    pub current_flow: Option<FlowDefinition>,
    pub current_step: usize,
    pub status: ExecutionStatus,
    pub error_message: Option<String>,
}

impl FlowExecutionState {
    pub fn initial() -> Self {
        Self { current_flow: None,
               current_step: 0,
               status: ExecutionStatus::Idle,
               error_message: None }
    }
}

impl Default for FlowExecutionState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Contenedor de escritor único sobre `FlowExecutionState`.
///
/// Toda mutación pasa por despachos discretos; la serialización de
/// despachos concurrentes la da el event loop de la vista, no un lock.
#[derive(Debug, Default)]
pub struct ExecutionStore {
    state: FlowExecutionState,
}

impl ExecutionStore {
    pub fn new() -> Self {
        Self { state: FlowExecutionState::initial() }
    }

    pub fn state(&self) -> &FlowExecutionState {
        &self.state
    }

    /// Reemplaza el flujo seleccionado, completo y de una pieza. No valida
    /// ni resetea nada: el caller debe haber pasado por `clear` antes.
    pub fn set_flow(&mut self, definition: FlowDefinition) {
        self.state.current_flow = Some(definition);
    }

    /// Reset incondicional al estado inicial. El acumulador de progreso de
    /// la vista vive fuera del store y debe resetearse junto con esto.
    pub fn clear(&mut self) {
        self.state = FlowExecutionState::initial();
    }

    /// Aplica el índice recibido tal cual llega. La monotonía es un
    /// invariante del feed del ejecutor, no se defiende aquí; valores
    /// repetidos son no-ops inocuos.
    pub fn advance_step(&mut self, index: usize) {
        self.state.current_step = index;
    }

    /// Fase síncrona del lanzamiento: `status` pasa a `Running` antes de
    /// que el futuro del ejecutor resuelva.
    pub fn begin_launch(&mut self) {
        debug!(step = self.state.current_step, "flow launch dispatched");
        self.state.status = ExecutionStatus::Running;
        self.state.error_message = None;
    }

    /// Fase terminal: vuelca el desenlace del ejecutor en el estado. Todo
    /// fallo se convierte aquí en estado, nunca se re-propaga.
    pub fn finish_launch(&mut self, outcome: Result<(), CoreError>) {
        match outcome {
            Ok(()) => {
                self.state.status = ExecutionStatus::Succeeded;
                self.state.error_message = None;
            }
            Err(error) => {
                let message = error.to_string();
                warn!(step = self.state.current_step, %message, "flow launch failed");
                self.state.status = ExecutionStatus::Failed;
                self.state.error_message = Some(message);
            }
        }
    }

    /// Lanza el flujo seleccionado contra el perfil objetivo y espera el
    /// desenlace. Sin flujo seleccionado el despacho se rechaza localmente
    /// y el estado queda intacto.
    pub async fn launch<X>(&mut self,
                           executor: &X,
                           hospital: &HospitalProfile,
                           server: &ServerProfile,
                           args: &LaunchArgs)
                           -> Result<ExecutionStatus, ValidationError>
        where X: FlowExecutor + ?Sized
    {
        let flow_name = match self.state.current_flow.as_ref() {
            Some(flow) => flow.name.clone(),
            None => return Err(ValidationError::NoFlowSelected),
        };

        self.begin_launch();
        let outcome = executor.execute_flow(hospital, server, &flow_name, args).await;
        self.finish_launch(outcome);
        Ok(self.state.status)
    }
}
