//! Normalized generation results.

use serde::{Deserialize, Serialize};

use super::error::AppError;

/// The two shapes a generation can produce, fully determined by the problem
/// type: app creation yields a structured proposal, everything else plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedPrompt {
    PlainText(String),
    AppProposal(AppProposal),
}

impl GeneratedPrompt {
    /// Serialize for display and clipboard transport.
    pub fn to_copy_text(&self) -> String {
        match self {
            GeneratedPrompt::PlainText(text) => text.clone(),
            GeneratedPrompt::AppProposal(proposal) => proposal.to_copy_text(),
        }
    }
}

/// Structured application concept returned by the upstream model.
///
/// Field names follow the camelCase wire contract declared in the response
/// schema; all fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppProposal {
    pub problema: String,
    pub usuarios_afectados: String,
    pub solucion_propuesta: String,
    pub funcionalidades_clave: Vec<String>,
    pub beneficios_esperados: String,
    pub impacto_potencial: String,
}

const LABEL_PROBLEMA: &str = "Problema";
const LABEL_USUARIOS: &str = "Usuarios Afectados";
const LABEL_SOLUCION: &str = "Solución Propuesta";
const LABEL_FUNCIONALIDADES: &str = "Funcionalidades Clave";
const LABEL_BENEFICIOS: &str = "Beneficios Esperados";
const LABEL_IMPACTO: &str = "Impacto Potencial";

const LABELS: [&str; 6] = [
    LABEL_PROBLEMA,
    LABEL_USUARIOS,
    LABEL_SOLUCION,
    LABEL_FUNCIONALIDADES,
    LABEL_BENEFICIOS,
    LABEL_IMPACTO,
];

impl AppProposal {
    /// Render the proposal as labeled sections, one per field, with key
    /// functionalities as a bullet list.
    pub fn to_copy_text(&self) -> String {
        let bullets: Vec<String> =
            self.funcionalidades_clave.iter().map(|item| format!("- {item}")).collect();

        format!(
            "{LABEL_PROBLEMA}:\n{}\n\n{LABEL_USUARIOS}:\n{}\n\n{LABEL_SOLUCION}:\n{}\n\n\
             {LABEL_FUNCIONALIDADES}:\n{}\n\n{LABEL_BENEFICIOS}:\n{}\n\n{LABEL_IMPACTO}:\n{}",
            self.problema,
            self.usuarios_afectados,
            self.solucion_propuesta,
            bullets.join("\n"),
            self.beneficios_esperados,
            self.impacto_potencial,
        )
    }

    /// Re-extract a proposal from its labeled-section copy text.
    ///
    /// Inverse of [`to_copy_text`](Self::to_copy_text) for values that do not
    /// themselves contain a section label line.
    pub fn from_copy_text(text: &str) -> Result<Self, AppError> {
        let mut bodies: [Vec<&str>; 6] = Default::default();
        let mut seen = [false; 6];
        let mut current: Option<usize> = None;

        for line in text.lines() {
            let header = line
                .strip_suffix(':')
                .and_then(|name| LABELS.iter().position(|label| *label == name));
            match header {
                Some(index) => {
                    seen[index] = true;
                    current = Some(index);
                }
                None => {
                    if let Some(index) = current {
                        bodies[index].push(line);
                    }
                }
            }
        }

        if let Some(missing) = LABELS.iter().zip(seen).find(|(_, seen)| !*seen) {
            return Err(AppError::MalformedResponse(format!(
                "missing section '{}'",
                missing.0
            )));
        }

        let section = |index: usize| bodies[index].join("\n").trim().to_string();
        let funcionalidades_clave = bodies[3]
            .iter()
            .filter_map(|line| line.strip_prefix("- "))
            .map(str::to_string)
            .collect();

        Ok(Self {
            problema: section(0),
            usuarios_afectados: section(1),
            solucion_propuesta: section(2),
            funcionalidades_clave,
            beneficios_esperados: section(4),
            impacto_potencial: section(5),
        })
    }
}
