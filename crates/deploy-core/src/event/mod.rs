//! Eventos del ejecutor y puente hacia la vista.

mod bridge;
mod types;

pub use bridge::{EventBridge, EventEmitter, EventSubscription};
pub use types::ExecutorEvent;
