//! Superficie de terminal de la vista de ejecución.

/// Sumidero append-only de la salida cruda del ejecutor. Cada trozo se
/// escribe tal cual y en orden de llegada; no hay coalescencia ni buffering
/// más allá del propio sumidero.
pub trait TerminalSink {
    fn write(&mut self, data: &str);
}

/// Sumidero en memoria, el equivalente sin render del terminal de la vista.
#[derive(Debug, Default)]
pub struct TerminalBuffer {
    contents: String,
}

impl TerminalBuffer {
    pub fn new() -> Self {
        Self { contents: String::new() }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn clear(&mut self) {
        self.contents.clear();
    }
}

impl TerminalSink for TerminalBuffer {
    fn write(&mut self, data: &str) {
        self.contents.push_str(data);
    }
}
