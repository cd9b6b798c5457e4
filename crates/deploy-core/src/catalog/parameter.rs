use serde::{Deserialize, Serialize};

/// Parámetro de lanzamiento declarado por un flujo. En el alambre el tipo
/// viaja como cadena (`"text" | "number" | "file"`) con un flag `multiple`
/// separado; aquí ambos colapsan en un tipo cerrado por constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawFlowParameter", into = "RawFlowParameter")]
pub struct FlowParameter {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub kind: ParameterKind,
}

/// Tipos de parámetro soportados. Añadir una variante obliga a revisar por
/// exhaustividad tanto la validación como el widget de entrada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Text,
    Number,
    File { multiple: bool },
}

/// Forma de alambre original del parámetro.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFlowParameter {
    name: String,
    label: String,
    r#type: RawParameterType,
    required: bool,
    #[serde(default)]
    multiple: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawParameterType {
    Text,
    Number,
    File,
}

impl From<RawFlowParameter> for FlowParameter {
    fn from(raw: RawFlowParameter) -> Self {
        let kind = match raw.r#type {
            RawParameterType::Text => ParameterKind::Text,
            RawParameterType::Number => ParameterKind::Number,
            RawParameterType::File => ParameterKind::File { multiple: raw.multiple },
        };
        Self { name: raw.name,
               label: raw.label,
               required: raw.required,
               kind }
    }
}

impl From<FlowParameter> for RawFlowParameter {
    fn from(parameter: FlowParameter) -> Self {
        let (r#type, multiple) = match parameter.kind {
            ParameterKind::Text => (RawParameterType::Text, false),
            ParameterKind::Number => (RawParameterType::Number, false),
            ParameterKind::File { multiple } => (RawParameterType::File, multiple),
        };
        Self { name: parameter.name,
               label: parameter.label,
               r#type,
               required: parameter.required,
               multiple }
    }
}
