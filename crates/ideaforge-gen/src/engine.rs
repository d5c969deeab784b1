use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::ChatMessage;

use ideaforge_core::AiSettings;

use crate::GenerateError;

/// The five request kinds, each with its own generation parameters and
/// model slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    BuildGuide,
    CodeGuide,
    StyleGuide,
    FeatureSuggestions,
    SurpriseIdea,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationProfile {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl RequestKind {
    /// Guides get a high output ceiling; the auxiliary kinds a small one.
    /// Surprise ideas run hotter than feature suggestions.
    pub fn profile(self) -> GenerationProfile {
        let (temperature, max_output_tokens) = match self {
            RequestKind::BuildGuide => (0.8, 30192),
            RequestKind::CodeGuide | RequestKind::StyleGuide => (0.7, 25192),
            RequestKind::FeatureSuggestions => (0.7, 8192),
            RequestKind::SurpriseIdea => (0.8, 8192),
        };
        GenerationProfile {
            temperature,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens,
        }
    }

    /// Feature suggestions and surprise ideas are lower-stakes generations
    /// and run on the cheaper model.
    pub fn uses_fast_model(self) -> bool {
        matches!(self, RequestKind::FeatureSuggestions | RequestKind::SurpriseIdea)
    }
}

pub(crate) fn map_backend(provider: &str) -> Result<LLMBackend, GenerateError> {
    match provider {
        "openai" => Ok(LLMBackend::OpenAI),
        "anthropic" => Ok(LLMBackend::Anthropic),
        "google" => Ok(LLMBackend::Google),
        "ollama" => Ok(LLMBackend::Ollama),
        "groq" => Ok(LLMBackend::Groq),
        "mistral" => Ok(LLMBackend::Mistral),
        "deepseek" => Ok(LLMBackend::DeepSeek),
        other => Err(GenerateError::UnknownProvider(other.to_string())),
    }
}

/// One request/response cycle. No retries, no streaming, no cancellation.
pub async fn generate(
    settings: &AiSettings,
    kind: RequestKind,
    prompt: &str,
) -> Result<String, GenerateError> {
    if !settings.configured() {
        return Err(GenerateError::NotConfigured);
    }
    let backend = map_backend(&settings.provider)?;
    let model = if kind.uses_fast_model() {
        &settings.fast_model
    } else {
        &settings.model
    };
    let profile = kind.profile();

    log::info!("sending {kind:?} request to {} ({model})", settings.provider);

    let mut builder = LLMBuilder::new()
        .backend(backend)
        .model(model)
        .temperature(profile.temperature)
        .top_k(profile.top_k)
        .top_p(profile.top_p)
        .max_tokens(profile.max_output_tokens);
    if !settings.api_key.is_empty() {
        builder = builder.api_key(&settings.api_key);
    }
    let llm = builder
        .build()
        .map_err(|e| GenerateError::Transport(e.to_string()))?;

    let messages = vec![ChatMessage::user().content(prompt).build()];
    let response = llm
        .chat(&messages)
        .await
        .map_err(|e| GenerateError::Transport(e.to_string()))?;

    match response.text() {
        Some(text) if !text.trim().is_empty() => {
            log::debug!("received {} bytes of model output", text.len());
            Ok(text)
        }
        _ => Err(GenerateError::EmptyResponse),
    }
}
