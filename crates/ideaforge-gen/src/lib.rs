pub mod engine;
mod parse;
pub mod prompt;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;

use ideaforge_core::{
    AiSettings, AppCategory, Architecture, Complexity, DocumentKind, DocumentRecord,
    ExperienceLevel, FeatureRecord, IdeaDescriptor, Language, Project,
};

use engine::RequestKind;
use prompt::DocContext;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("API credential not configured; run `ideaforge config set --api-key <key>`")]
    NotConfigured,
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("generation request failed: {0}")]
    Transport(String),
    #[error("model returned an empty response")]
    EmptyResponse,
    #[error("could not parse {expected} from model output: {detail}")]
    Malformed { expected: &'static str, detail: String },
}

/// Document kinds that can be generated after the fact. The build guide is
/// created with the project, never as a companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanionKind {
    Code,
    Style,
}

impl CompanionKind {
    pub fn document_kind(self) -> DocumentKind {
        match self {
            CompanionKind::Code => DocumentKind::Code,
            CompanionKind::Style => DocumentKind::Style,
        }
    }
}

impl TryFrom<DocumentKind> for CompanionKind {
    type Error = ();

    fn try_from(kind: DocumentKind) -> Result<Self, ()> {
        match kind {
            DocumentKind::Code => Ok(CompanionKind::Code),
            DocumentKind::Style => Ok(CompanionKind::Style),
            DocumentKind::BuildGuide => Err(()),
        }
    }
}

/// Form snapshot returned by a surprise-idea request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurpriseIdea {
    #[serde(default)]
    pub app_name: String,
    #[serde(default)]
    pub description: String,
    pub architecture: Option<Architecture>,
    pub primary_language: Option<Language>,
    pub app_type: Option<AppCategory>,
    pub complexity: Option<Complexity>,
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub features: String,
    #[serde(default)]
    pub target_audience: String,
}

impl SurpriseIdea {
    /// Overlay the surprise onto an existing draft: fields the model filled
    /// in win, fields it left out keep their current values. Frameworks and
    /// tools merge into the single selected-tools list.
    pub fn apply_to(self, idea: &mut IdeaDescriptor) {
        if !self.app_name.trim().is_empty() {
            idea.app_name = self.app_name;
        }
        if !self.description.trim().is_empty() {
            idea.description = self.description;
        }
        if self.architecture.is_some() {
            idea.architecture = self.architecture;
        }
        if self.primary_language.is_some() {
            idea.primary_language = self.primary_language;
        }
        if self.app_type.is_some() {
            idea.app_type = self.app_type;
        }
        if self.complexity.is_some() {
            idea.complexity = self.complexity;
        }
        if self.experience_level.is_some() {
            idea.experience_level = self.experience_level;
        }
        if !self.frameworks.is_empty() || !self.tools.is_empty() {
            idea.frameworks = self.frameworks.into_iter().chain(self.tools).collect();
        }
        if !self.features.trim().is_empty() {
            idea.features = self.features;
        }
        if !self.target_audience.trim().is_empty() {
            idea.target_audience = self.target_audience;
        }
    }
}

/// The generation seam: one implementation talks to the real endpoint, test
/// doubles count calls. Each method is a single request/response cycle.
#[async_trait]
pub trait Generator {
    async fn build_guide(&self, idea: &IdeaDescriptor) -> Result<DocumentRecord, GenerateError>;

    async fn companion_doc(
        &self,
        project: &Project,
        kind: CompanionKind,
    ) -> Result<DocumentRecord, GenerateError>;

    async fn feature_suggestions(
        &self,
        idea: &IdeaDescriptor,
    ) -> Result<Vec<FeatureRecord>, GenerateError>;

    async fn surprise_idea(&self, idea: &IdeaDescriptor) -> Result<SurpriseIdea, GenerateError>;
}

/// Generator backed by the configured LLM provider.
pub struct LlmGenerator {
    settings: AiSettings,
}

impl LlmGenerator {
    pub fn new(settings: AiSettings) -> Self {
        LlmGenerator { settings }
    }
}

#[async_trait]
impl Generator for LlmGenerator {
    async fn build_guide(&self, idea: &IdeaDescriptor) -> Result<DocumentRecord, GenerateError> {
        let prompt = prompt::build_guide(idea);
        let content = engine::generate(&self.settings, RequestKind::BuildGuide, &prompt).await?;
        Ok(DocumentRecord {
            title: idea.app_name.clone(),
            content,
            timestamp: Utc::now(),
            file_type: DocumentKind::BuildGuide,
            parent_id: None,
        })
    }

    async fn companion_doc(
        &self,
        project: &Project,
        kind: CompanionKind,
    ) -> Result<DocumentRecord, GenerateError> {
        let idea = &project.data;
        let context = DocContext {
            build_guide: Some(project.content.as_str()),
            code_guide: project.document_content(DocumentKind::Code),
            style_guide: project.document_content(DocumentKind::Style),
        };
        let (request, prompt, title) = match kind {
            CompanionKind::Code => {
                let language = idea
                    .primary_language
                    .map(Language::display_name)
                    .unwrap_or("Code");
                (
                    RequestKind::CodeGuide,
                    prompt::code_guide(idea, &context),
                    format!("{} - {} Guide", project.title, language),
                )
            }
            CompanionKind::Style => (
                RequestKind::StyleGuide,
                prompt::style_guide(idea, &context),
                format!("{} - Style Guide", project.title),
            ),
        };
        let content = engine::generate(&self.settings, request, &prompt).await?;
        Ok(DocumentRecord {
            title,
            content,
            timestamp: Utc::now(),
            file_type: kind.document_kind(),
            parent_id: Some(project.id.clone()),
        })
    }

    async fn feature_suggestions(
        &self,
        idea: &IdeaDescriptor,
    ) -> Result<Vec<FeatureRecord>, GenerateError> {
        let prompt = prompt::feature_suggestions(idea);
        let raw = engine::generate(&self.settings, RequestKind::FeatureSuggestions, &prompt).await?;
        parse::from_model_output(&raw).map_err(|detail| GenerateError::Malformed {
            expected: "a feature suggestion array",
            detail,
        })
    }

    async fn surprise_idea(&self, idea: &IdeaDescriptor) -> Result<SurpriseIdea, GenerateError> {
        let prompt = prompt::surprise_idea(idea);
        let raw = engine::generate(&self.settings, RequestKind::SurpriseIdea, &prompt).await?;
        parse::from_model_output(&raw).map_err(|detail| GenerateError::Malformed {
            expected: "a surprise idea object",
            detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surprise_overlay_keeps_existing_fields() {
        let mut idea = IdeaDescriptor {
            app_name: "Ledger".to_string(),
            target_audience: "Roommates".to_string(),
            ..Default::default()
        };
        let surprise = SurpriseIdea {
            description: "Track shared expenses".to_string(),
            primary_language: Some(Language::Go),
            frameworks: vec!["Gin".to_string()],
            tools: vec!["Docker".to_string()],
            ..Default::default()
        };
        surprise.apply_to(&mut idea);
        assert_eq!(idea.app_name, "Ledger");
        assert_eq!(idea.description, "Track shared expenses");
        assert_eq!(idea.primary_language, Some(Language::Go));
        assert_eq!(idea.frameworks, vec!["Gin".to_string(), "Docker".to_string()]);
        assert_eq!(idea.target_audience, "Roommates");
    }

    #[test]
    fn surprise_parses_from_wire_shape() {
        let raw = r#"{
            "appName": "Plant Pal",
            "description": "Watering reminders",
            "architecture": "mobile",
            "primaryLanguage": "kotlin",
            "appType": "mobile",
            "complexity": "basic",
            "experienceLevel": "beginner",
            "frameworks": ["Jetpack Compose"],
            "tools": ["GitHub"],
            "features": "1. Reminders",
            "targetAudience": "Plant owners"
        }"#;
        let surprise: SurpriseIdea = serde_json::from_str(raw).unwrap();
        assert_eq!(surprise.primary_language, Some(Language::Kotlin));
        assert_eq!(surprise.app_type, Some(AppCategory::Mobile));
    }

    #[test]
    fn build_guide_is_not_a_companion() {
        assert!(CompanionKind::try_from(DocumentKind::BuildGuide).is_err());
        assert_eq!(
            CompanionKind::try_from(DocumentKind::Code).unwrap().document_kind(),
            DocumentKind::Code
        );
    }
}
