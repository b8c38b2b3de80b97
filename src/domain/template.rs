//! Meta-prompt template builder.
//!
//! Pure string construction: maps a validated request to the instruction sent
//! upstream, plus the response schema when the output is structured. The
//! templates are embedded and rendered with strict Jinja-compatible
//! interpolation.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};
use serde_json::{Value, json};

use super::catalog::ProblemType;
use super::error::AppError;
use super::request::PromptRequest;

/// The instruction to send upstream, tagged with the expected response shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSpec {
    /// Free-text response; the reply must be exactly the generated prompt.
    FreeText { text: String },
    /// JSON response constrained by the given schema.
    Structured { text: String, schema: Value },
}

impl TemplateSpec {
    pub fn text(&self) -> &str {
        match self {
            TemplateSpec::FreeText { text } | TemplateSpec::Structured { text, .. } => text,
        }
    }
}

const APP_CREATION_TEMPLATE: &str = "\
Como experto estratega de productos en la industria de **{{ industry }}**, tu tarea es conceptualizar una nueva aplicación.
Identifica un problema o necesidad significativa dentro de esta industria y diseña una solución de aplicación a un nivel de complejidad **{{ complexity }}**.
Proporciona los detalles de tu concepto de aplicación en formato JSON estructurado.";

const FREE_TEXT_TEMPLATE: &str = "\
Eres un experto en ingeniería de prompts. Tu tarea es generar un único prompt creativo, preciso y profesional para un modelo de IA generativa. El propósito de este prompt es ayudar a un usuario a concebir y diseñar una aplicación o a resolver un problema específico dentro de su campo.

**Contexto y Requisitos:**
1. **Industria/Profesión/Servicio:** {{ industry }}
2. **Tipo de Problema a Resolver:** {{ problem_type }}
3. **Nivel de Complejidad Deseado:** {{ complexity }}. El prompt debe reflejar este nivel; un nivel 'Experto' debe requerir un conocimiento profundo del dominio, mientras que 'Principiante' debe ser más accesible.
4. **Formato del Prompt Solicitado:** {{ prompt_format }}.
   - Si es 'Instrucciones Detalladas', el prompt debe ser una lista de pasos o requisitos claros.
   - Si es 'Serie de Preguntas', el prompt debe guiar al usuario a través de una reflexión estructurada.
   - Si es 'Basado en Ejemplos', el prompt debe presentar un caso concreto y pedir una solución o expansión.
   - Si es 'Escenario de Rol', el prompt debe establecer un personaje y una situación para que el usuario actúe.

**Tu Tarea:**
Genera UN (1) prompt de alta calidad que cumpla con todos los criterios anteriores. El prompt debe ser original, inspirador y estar perfectamente adaptado al contexto profesional indicado.

**IMPORTANTE:** NO incluyas introducciones, saludos, explicaciones o cualquier texto conversacional. Tu respuesta debe ser ÚNICAMENTE el prompt generado, listo para ser copiado y utilizado.";

/// Build the meta-prompt for a request.
///
/// App creation yields a structured spec carrying the proposal schema; every
/// other problem type yields a free-text spec that weaves in the prompt
/// format. Deterministic for identical requests.
pub fn build(request: &PromptRequest) -> Result<TemplateSpec, AppError> {
    if request.problem_type() == ProblemType::AppCreation {
        let text = render(
            APP_CREATION_TEMPLATE,
            context! {
                industry => request.industry(),
                complexity => request.complexity().display_name(),
            },
        )?;
        Ok(TemplateSpec::Structured { text, schema: app_proposal_schema() })
    } else {
        let text = render(
            FREE_TEXT_TEMPLATE,
            context! {
                industry => request.industry(),
                problem_type => request.problem_type().display_name(),
                complexity => request.complexity().display_name(),
                prompt_format => request.prompt_format().display_name(),
            },
        )?;
        Ok(TemplateSpec::FreeText { text })
    }
}

/// Response schema for the structured proposal, in Gemini schema syntax.
///
/// Field names and order are part of the wire contract with the upstream
/// structured-output enforcement and must match `AppProposal` exactly.
fn app_proposal_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "problema": {
                "type": "STRING",
                "description": "El problema, desafío o ineficiencia que enfrenta el sector."
            },
            "usuariosAfectados": {
                "type": "STRING",
                "description": "Los principales usuarios, roles o perfiles que sufren este problema."
            },
            "solucionPropuesta": {
                "type": "STRING",
                "description": "Cómo la aplicación solucionará el problema. El concepto central de la app."
            },
            "funcionalidadesClave": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Una lista de 3 a 5 funcionalidades esenciales de la aplicación."
            },
            "beneficiosEsperados": {
                "type": "STRING",
                "description": "Beneficios concretos para usuarios y negocio (ahorro de tiempo, reducción de costos, etc.)."
            },
            "impactoPotencial": {
                "type": "STRING",
                "description": "El impacto más amplio que la aplicación podría tener en la industria."
            }
        },
        "required": [
            "problema",
            "usuariosAfectados",
            "solucionPropuesta",
            "funcionalidadesClave",
            "beneficiosEsperados",
            "impactoPotencial"
        ]
    })
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn render(template: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });
    env.render_str(template, ctx).map_err(|err| AppError::Template(err.to_string()))
}
