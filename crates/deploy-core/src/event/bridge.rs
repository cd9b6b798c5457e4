//! Puente de eventos ejecutor -> vista sobre un canal mpsc.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::trace;

use super::types::ExecutorEvent;
use crate::progress::ProgressEvent;

pub struct EventBridge;

impl EventBridge {
    /// Crea el par emisor/suscripción. La suscripción vive exactamente lo
    /// que la vista montada; no hay buffer de reposición: un suscriptor
    /// tardío no ve los eventos ya emitidos.
    pub fn channel() -> (EventEmitter, EventSubscription) {
        let (tx, rx) = mpsc::unbounded_channel();
        (EventEmitter { tx }, EventSubscription { rx })
    }
}

/// Extremo del ejecutor. Clonable: cada colaborador del ejecutor (stream de
/// comandos, transferencias) puede quedarse con su copia.
#[derive(Debug, Clone)]
pub struct EventEmitter {
    tx: UnboundedSender<ExecutorEvent>,
}

impl EventEmitter {
    /// Publica un evento. Si la vista ya se desmontó, el evento se
    /// descarta en silencio: nadie volverá a escuchar ese canal.
    pub fn emit(&self, event: ExecutorEvent) {
        if self.tx.send(event).is_err() {
            trace!("executor event dropped, subscription torn down");
        }
    }

    pub fn emit_output(&self, data: impl Into<String>) {
        self.emit(ExecutorEvent::CommandResult { data: data.into() });
    }

    pub fn emit_step_change(&self, index: usize) {
        self.emit(ExecutorEvent::FlowStepChange { data: index });
    }

    pub fn emit_progress(&self, progress: ProgressEvent) {
        self.emit(ExecutorEvent::FileProgress(progress));
    }
}

/// Extremo de la vista. Soltarlo equivale a des-suscribirse de los tres
/// canales a la vez.
#[derive(Debug)]
pub struct EventSubscription {
    rx: UnboundedReceiver<ExecutorEvent>,
}

impl EventSubscription {
    /// Espera el siguiente evento; `None` cuando todos los emisores se
    /// soltaron.
    pub async fn recv(&mut self) -> Option<ExecutorEvent> {
        self.rx.recv().await
    }

    /// Toma un evento ya encolado, sin bloquear.
    pub fn try_recv(&mut self) -> Option<ExecutorEvent> {
        self.rx.try_recv().ok()
    }
}
