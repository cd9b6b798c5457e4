use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use super::definition::FlowDefinition;
use crate::errors::CoreError;

/// Contenedor de definiciones de flujo indexadas por nombre y en orden de
/// carga estable.
#[derive(Debug, Default)]
pub struct FlowCatalog {
    flows: IndexMap<String, FlowDefinition>,
}

impl FlowCatalog {
    /// Carga todas las definiciones `*.json` de un directorio. El orden es
    /// el lexicográfico de los nombres de archivo para que el catálogo sea
    /// reproducible entre arranques.
    pub fn from_dir(dir: &Path) -> Result<Self, CoreError> {
        let mut paths: Vec<_> = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?
                                                  .into_iter()
                                                  .map(|entry| entry.path())
                                                  .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
                                                  .collect();
        paths.sort();

        let mut catalog = Self::default();
        for path in paths {
            let raw = fs::read_to_string(&path)?;
            let flow: FlowDefinition =
                serde_json::from_str(&raw).map_err(|e| CoreError::InvalidFlowDefinition(format!("{}: {e}", path.display())))?;
            catalog.insert(flow);
        }
        debug!(flows = catalog.len(), "flow catalog loaded");
        Ok(catalog)
    }

    /// Construye el catálogo a partir de fuentes JSON ya en memoria (assets
    /// embebidos, fixtures de test).
    pub fn from_json_sources<'a, I>(sources: I) -> Result<Self, CoreError>
        where I: IntoIterator<Item = &'a str>
    {
        let mut catalog = Self::default();
        for source in sources {
            let flow: FlowDefinition =
                serde_json::from_str(source).map_err(|e| CoreError::InvalidFlowDefinition(e.to_string()))?;
            catalog.insert(flow);
        }
        Ok(catalog)
    }

    fn insert(&mut self, flow: FlowDefinition) {
        self.flows.insert(flow.name.clone(), flow);
    }

    pub fn get_flow(&self, name: &str) -> Option<&FlowDefinition> {
        self.flows.get(name)
    }

    pub fn all_flows(&self) -> impl Iterator<Item = &FlowDefinition> {
        self.flows.values()
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}
