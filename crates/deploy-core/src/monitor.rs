//! Vista de ejecución sin render: pliega los tres canales sobre el estado.

use tracing::trace;

use crate::catalog::FlowDefinition;
use crate::engine::ExecutionStore;
use crate::event::{EventSubscription, ExecutorEvent};
use crate::progress::ProgressTracker;
use crate::terminal::TerminalSink;

/// Dueño del estado de la vista de ejecución durante su montaje. Store,
/// terminal y acumulador de progreso se adquieren juntos y se sueltan
/// juntos al soltar el monitor, también en rutas de error: no quedan
/// listeners colgando entre navegaciones.
#[derive(Debug)]
pub struct ExecutionMonitor<T: TerminalSink> {
    store: ExecutionStore,
    terminal: T,
    progress: ProgressTracker,
}

impl<T: TerminalSink> ExecutionMonitor<T> {
    pub fn new(terminal: T) -> Self {
        Self { store: ExecutionStore::new(),
               terminal,
               progress: ProgressTracker::new() }
    }

    /// Montaje de la vista para un nuevo flujo: limpia el estado previo,
    /// resetea el acumulador de progreso local y fija el flujo nuevo.
    pub fn mount_flow(&mut self, definition: FlowDefinition) {
        self.store.clear();
        self.progress.reset();
        self.store.set_flow(definition);
    }

    /// Única función de plegado para los tres canales. Cada regla es
    /// robusta por sí sola a entregas sin orden entre canales.
    pub fn apply(&mut self, event: ExecutorEvent) {
        trace!(channel = event.channel(), "folding executor event");
        match event {
            ExecutorEvent::CommandResult { data } => self.terminal.write(&data),
            ExecutorEvent::FlowStepChange { data } => self.store.advance_step(data),
            ExecutorEvent::FileProgress(progress) => self.progress.apply(progress),
        }
    }

    /// Pliega todo lo encolado en la suscripción, sin bloquear.
    pub fn drain(&mut self, subscription: &mut EventSubscription) {
        while let Some(event) = subscription.try_recv() {
            self.apply(event);
        }
    }

    /// Espera y pliega eventos hasta que el puente se cierre (todos los
    /// emisores soltados).
    pub async fn run(&mut self, subscription: &mut EventSubscription) {
        while let Some(event) = subscription.recv().await {
            self.apply(event);
        }
    }

    pub fn store(&self) -> &ExecutionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ExecutionStore {
        &mut self.store
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }
}
