//! Instantáneas de progreso de transferencias y su regla de plegado.

use async_trait::async_trait;
use bytesize::ByteSize;
use serde::{Deserialize, Serialize};

use crate::event::EventEmitter;

/// Instantánea de una transferencia en curso. Transitoria: cada evento
/// nuevo reemplaza al anterior y nada de esto se persiste.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    pub total_size: u64,
    pub total_size_format: String,
    pub processed_size: u64,
    pub processed_size_format: String,
    pub progress_percent: f64,
}

impl ProgressEvent {
    pub fn new(total_size: u64, processed_size: u64) -> Self {
        let progress_percent = if total_size == 0 {
            0.0
        } else {
            (processed_size as f64 / total_size as f64) * 100f64
        };
        Self { total_size,
               total_size_format: ByteSize::b(total_size).to_string_as(false),
               processed_size,
               processed_size_format: ByteSize::b(processed_size).to_string_as(false),
               progress_percent }
    }

    /// Centinela cero/vacío: con él la vista oculta el overlay.
    pub fn zero() -> Self {
        Self { total_size: 0,
               total_size_format: String::new(),
               processed_size: 0,
               processed_size_format: String::new(),
               progress_percent: 0.0 }
    }
}

/// Destino de las instantáneas de progreso durante una transferencia.
#[async_trait]
pub trait ProgressReporter {
    async fn report_progress(&self, progress: ProgressEvent);
}

pub struct NoopProgressReporter;

#[async_trait]
impl ProgressReporter for NoopProgressReporter {
    async fn report_progress(&self, _progress: ProgressEvent) {}
}

/// Reporter que publica cada instantánea por el puente de eventos.
pub struct ChannelProgressReporter {
    emitter: EventEmitter,
}

impl ChannelProgressReporter {
    pub fn new(emitter: EventEmitter) -> Self {
        Self { emitter }
    }
}

#[async_trait]
impl ProgressReporter for ChannelProgressReporter {
    async fn report_progress(&self, progress: ProgressEvent) {
        self.emitter.emit_progress(progress);
    }
}

/// Plegado local a la vista de las instantáneas recibidas.
///
/// Política de visualización monótona dentro de una transferencia:
/// - un 100% resetea al centinela (transferencia terminada, overlay fuera);
/// - un porcentaje estrictamente mayor al mostrado reemplaza la
///   instantánea, con el porcentaje redondeado al entero para mostrar;
/// - cualquier otro valor se ignora, así un evento duplicado o llegado
///   fuera de orden no hace retroceder lo mostrado.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    current: ProgressEvent,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self { current: ProgressEvent::zero() }
    }

    pub fn reset(&mut self) {
        self.current = ProgressEvent::zero();
    }

    pub fn current(&self) -> &ProgressEvent {
        &self.current
    }

    pub fn percent(&self) -> f64 {
        self.current.progress_percent
    }

    /// El overlay sólo se muestra con una transferencia a medias.
    pub fn is_visible(&self) -> bool {
        self.current.progress_percent > 0.0 && self.current.progress_percent < 100.0
    }

    pub fn apply(&mut self, incoming: ProgressEvent) {
        if incoming.progress_percent == 100.0 {
            self.reset();
            return;
        }
        if self.current.progress_percent < incoming.progress_percent {
            let rounded = incoming.progress_percent.round();
            self.current = ProgressEvent { progress_percent: rounded, ..incoming };
        }
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}
