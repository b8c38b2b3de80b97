//! Closed catalogs of selectable generation parameters.
//!
//! Each catalog exposes an ordered `ALL` list for populating selection
//! controls, a CLI key, and a Spanish display label. The labels are injected
//! verbatim into the meta-prompt templates and are part of the contract with
//! the upstream model, so they must never drift from the selectable options.

use std::fmt;

/// The kind of problem the generated prompt should address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemType {
    /// Conceptualize a new application (structured proposal output).
    AppCreation,
    /// Streamline an existing process.
    ProcessOptimization,
    /// Design a marketing strategy.
    MarketingStrategy,
    /// Analyze data for insight.
    DataAnalysis,
    /// Produce creative content.
    ContentCreation,
}

impl ProblemType {
    /// All problem types in form order.
    pub const ALL: [ProblemType; 5] = [
        ProblemType::AppCreation,
        ProblemType::ProcessOptimization,
        ProblemType::MarketingStrategy,
        ProblemType::DataAnalysis,
        ProblemType::ContentCreation,
    ];

    /// Stable CLI identifier.
    pub fn key(&self) -> &'static str {
        match self {
            ProblemType::AppCreation => "app-creation",
            ProblemType::ProcessOptimization => "process-optimization",
            ProblemType::MarketingStrategy => "marketing-strategy",
            ProblemType::DataAnalysis => "data-analysis",
            ProblemType::ContentCreation => "content-creation",
        }
    }

    /// Label shown in the form and woven into the meta-prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProblemType::AppCreation => "Creación de Aplicación",
            ProblemType::ProcessOptimization => "Optimización de Procesos",
            ProblemType::MarketingStrategy => "Estrategia de Marketing",
            ProblemType::DataAnalysis => "Análisis de Datos",
            ProblemType::ContentCreation => "Creación de Contenido",
        }
    }

    /// Parse from a CLI key or display label (case-insensitive).
    pub fn from_name(name: &str) -> Option<ProblemType> {
        let lowered = name.trim().to_lowercase();
        ProblemType::ALL
            .into_iter()
            .find(|p| p.key() == lowered || p.display_name().to_lowercase() == lowered)
    }

    /// Whether the prompt-format selector applies to this problem type.
    ///
    /// App creation uses a fixed structured output, so the selector is
    /// hidden and the builder ignores the format entirely.
    pub fn uses_prompt_format(&self) -> bool {
        !matches!(self, ProblemType::AppCreation)
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Desired depth of the generated prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Complexity {
    /// All complexity levels in ascending order.
    pub const ALL: [Complexity; 4] = [
        Complexity::Beginner,
        Complexity::Intermediate,
        Complexity::Advanced,
        Complexity::Expert,
    ];

    /// Stable CLI identifier.
    pub fn key(&self) -> &'static str {
        match self {
            Complexity::Beginner => "beginner",
            Complexity::Intermediate => "intermediate",
            Complexity::Advanced => "advanced",
            Complexity::Expert => "expert",
        }
    }

    /// Label shown in the form and woven into the meta-prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            Complexity::Beginner => "Principiante",
            Complexity::Intermediate => "Intermedio",
            Complexity::Advanced => "Avanzado",
            Complexity::Expert => "Experto",
        }
    }

    /// Parse from a CLI key or display label (case-insensitive).
    pub fn from_name(name: &str) -> Option<Complexity> {
        let lowered = name.trim().to_lowercase();
        Complexity::ALL
            .into_iter()
            .find(|c| c.key() == lowered || c.display_name().to_lowercase() == lowered)
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Shape requested for free-text prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptFormat {
    /// A list of clear steps or requirements.
    Instructions,
    /// A guided, structured reflection.
    Questions,
    /// A concrete case plus a request for a solution.
    Examples,
    /// A character and situation for the user to act in.
    RolePlay,
}

impl PromptFormat {
    /// All prompt formats in form order.
    pub const ALL: [PromptFormat; 4] = [
        PromptFormat::Instructions,
        PromptFormat::Questions,
        PromptFormat::Examples,
        PromptFormat::RolePlay,
    ];

    /// Stable CLI identifier.
    pub fn key(&self) -> &'static str {
        match self {
            PromptFormat::Instructions => "instructions",
            PromptFormat::Questions => "questions",
            PromptFormat::Examples => "examples",
            PromptFormat::RolePlay => "role-play",
        }
    }

    /// Label shown in the form and woven into the meta-prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            PromptFormat::Instructions => "Instrucciones Detalladas",
            PromptFormat::Questions => "Serie de Preguntas",
            PromptFormat::Examples => "Basado en Ejemplos",
            PromptFormat::RolePlay => "Escenario de Rol",
        }
    }

    /// Parse from a CLI key or display label (case-insensitive).
    pub fn from_name(name: &str) -> Option<PromptFormat> {
        let lowered = name.trim().to_lowercase();
        PromptFormat::ALL
            .into_iter()
            .find(|p| p.key() == lowered || p.display_name().to_lowercase() == lowered)
    }
}

impl fmt::Display for PromptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
