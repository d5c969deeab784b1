pub mod catalog;

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Form vocabulary ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    Frontend,
    Fullstack,
    Backend,
    Mobile,
    Desktop,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Typescript,
    Python,
    Java,
    Csharp,
    Go,
    Rust,
    Swift,
    Kotlin,
    Php,
}

impl Language {
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Javascript => "JavaScript",
            Language::Typescript => "TypeScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Csharp => "C#",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
            Language::Php => "PHP",
        }
    }

    /// Nominal source-file extension used in code-guide prompts and export names.
    pub fn code_extension(self) -> &'static str {
        match self {
            Language::Javascript => "js",
            Language::Typescript => "ts",
            Language::Python => "py",
            Language::Java => "java",
            Language::Csharp => "cs",
            Language::Go => "go",
            Language::Rust => "rs",
            Language::Swift => "swift",
            Language::Kotlin => "kt",
            Language::Php => "php",
        }
    }

    /// Nominal style-file extension. Every supported language documents its
    /// styling in CSS terms.
    pub fn style_extension(self) -> &'static str {
        "css"
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppCategory {
    Web,
    Mobile,
    Desktop,
    Api,
    Game,
    Ai,
    Iot,
}

impl AppCategory {
    /// Long form used inside prompts ("This will be a web application.").
    pub fn prompt_label(self) -> &'static str {
        match self {
            AppCategory::Web => "web application",
            AppCategory::Mobile => "mobile application",
            AppCategory::Desktop => "desktop application",
            AppCategory::Api => "API/backend service",
            AppCategory::Game => "game",
            AppCategory::Ai => "AI/ML application",
            AppCategory::Iot => "IoT application",
        }
    }

    /// Short form used when listing projects.
    pub fn badge_label(self) -> &'static str {
        match self {
            AppCategory::Web => "Web App",
            AppCategory::Mobile => "Mobile App",
            AppCategory::Desktop => "Desktop App",
            AppCategory::Api => "API Service",
            AppCategory::Game => "Game",
            AppCategory::Ai => "AI/ML App",
            AppCategory::Iot => "IoT App",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Basic,
    Moderate,
    Advanced,
    Enterprise,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    None,
}

// --- Idea descriptor ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureRecord {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Out-of-band facts about current AI models, attached to AI-flavored ideas
/// so the remote model is not limited by its own knowledge cutoff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelContext {
    pub last_updated: String,
    pub recent_models: serde_json::Value,
    pub providers: serde_json::Value,
}

/// Snapshot of the idea form. Every field beyond name/description is
/// optional; prompt construction degrades missing fields to empty segments.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdeaDescriptor {
    #[serde(default)]
    pub app_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Architecture>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_type: Option<AppCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub features: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_features: Vec<FeatureRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deferred_features: Vec<FeatureRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_model_info: Option<ModelContext>,
}

impl IdeaDescriptor {
    /// Whether the idea calls for the AI model context block: either the
    /// category is AI or the "AI API calls" tool was selected.
    pub fn wants_model_context(&self) -> bool {
        self.app_type == Some(AppCategory::Ai)
            || self.frameworks.iter().any(|f| f == catalog::AI_API_TOOL)
    }
}

// --- Documents and projects ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    BuildGuide,
    Code,
    Style,
}

impl DocumentKind {
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::BuildGuide => "build guide",
            DocumentKind::Code => "code guide",
            DocumentKind::Style => "style guide",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub file_type: DocumentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// A generated project: the build guide inline (title/content), the form
/// snapshot it was generated from, and any companion documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub data: IdeaDescriptor,
    #[serde(default)]
    pub associated_files: Vec<DocumentRecord>,
}

impl Project {
    pub fn new(guide: DocumentRecord, data: IdeaDescriptor) -> Self {
        Project {
            id: uuid::Uuid::new_v4().to_string(),
            title: guide.title,
            content: guide.content,
            timestamp: guide.timestamp,
            data,
            associated_files: Vec::new(),
        }
    }

    /// Companion document of the given kind, if present. The build guide is
    /// not an associated file; it lives inline on the project.
    pub fn associated(&self, kind: DocumentKind) -> Option<&DocumentRecord> {
        self.associated_files.iter().find(|f| f.file_type == kind)
    }

    pub fn has_document(&self, kind: DocumentKind) -> bool {
        kind == DocumentKind::BuildGuide || self.associated(kind).is_some()
    }

    pub fn document_content(&self, kind: DocumentKind) -> Option<&str> {
        match kind {
            DocumentKind::BuildGuide => Some(&self.content),
            _ => self.associated(kind).map(|f| f.content.as_str()),
        }
    }

    pub fn document_title(&self, kind: DocumentKind) -> Option<&str> {
        match kind {
            DocumentKind::BuildGuide => Some(&self.title),
            _ => self.associated(kind).map(|f| f.title.as_str()),
        }
    }

    /// Attach a companion document, replacing any existing one of the same
    /// kind. At most one code and one style document exist per project.
    pub fn attach_document(&mut self, record: DocumentRecord) {
        self.associated_files.retain(|f| f.file_type != record.file_type);
        self.associated_files.push(record);
    }

    /// Remove a companion document. Returns false if none of that kind
    /// existed. Refusing to remove the build guide is the orchestrator's job.
    pub fn remove_document(&mut self, kind: DocumentKind) -> bool {
        let before = self.associated_files.len();
        self.associated_files.retain(|f| f.file_type != kind);
        self.associated_files.len() != before
    }
}

// --- Feature board ---

/// Suggested, selected, and deferred features are disjoint sets; every
/// operation relocates a record between sets (or drops it), never edits one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureBoard {
    #[serde(default)]
    pub suggested: Vec<FeatureRecord>,
    #[serde(default)]
    pub selected: Vec<FeatureRecord>,
    #[serde(default)]
    pub deferred: Vec<FeatureRecord>,
}

fn take_feature(list: &mut Vec<FeatureRecord>, id: &str) -> Option<FeatureRecord> {
    let idx = list.iter().position(|f| f.id == id)?;
    Some(list.remove(idx))
}

impl FeatureBoard {
    /// Replace the suggestion set with a fresh batch. Selected and deferred
    /// features survive; the previous unclaimed suggestions are discarded.
    pub fn absorb(&mut self, batch: Vec<FeatureRecord>) {
        self.suggested = batch;
    }

    pub fn select(&mut self, id: &str) -> Result<(), String> {
        let feature = take_feature(&mut self.suggested, id)
            .ok_or_else(|| format!("no suggested feature with id '{id}'"))?;
        self.selected.push(feature);
        Ok(())
    }

    pub fn deselect(&mut self, id: &str) -> Result<(), String> {
        let feature = take_feature(&mut self.selected, id)
            .ok_or_else(|| format!("no selected feature with id '{id}'"))?;
        self.suggested.push(feature);
        Ok(())
    }

    pub fn defer(&mut self, id: &str) -> Result<(), String> {
        let feature = take_feature(&mut self.suggested, id)
            .or_else(|| take_feature(&mut self.selected, id))
            .ok_or_else(|| format!("no feature with id '{id}' to defer"))?;
        self.deferred.push(feature);
        Ok(())
    }

    pub fn restore(&mut self, id: &str) -> Result<(), String> {
        let feature = take_feature(&mut self.deferred, id)
            .ok_or_else(|| format!("no deferred feature with id '{id}'"))?;
        self.suggested.push(feature);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<(), String> {
        take_feature(&mut self.suggested, id)
            .or_else(|| take_feature(&mut self.selected, id))
            .or_else(|| take_feature(&mut self.deferred, id))
            .map(|_| ())
            .ok_or_else(|| format!("no feature with id '{id}'"))
    }

    /// Serialized form of the selected features, written back into the
    /// idea's free-text features field after every transition.
    pub fn features_text(&self) -> String {
        self.selected
            .iter()
            .enumerate()
            .map(|(i, f)| format!("{}. {}: {}", i + 1, f.name, f.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The persisted form state: the idea being drafted plus its feature board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    #[serde(default)]
    pub idea: IdeaDescriptor,
    #[serde(default)]
    pub board: FeatureBoard,
}

// --- Storage ---

/// Resolve the global data directory (~/.ideaforge/).
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ideaforge")
}

/// Durable home of the project library. The whole collection is one JSON
/// blob; every mutation rewrites it.
pub trait ProjectStore {
    fn load(&self) -> Result<Vec<Project>, String>;
    fn save(&self, projects: &[Project]) -> Result<(), String>;
}

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new() -> Self {
        FileStore { dir: data_dir() }
    }

    pub fn at(dir: PathBuf) -> Self {
        FileStore { dir }
    }

    fn path(&self) -> PathBuf {
        self.dir.join("projects.json")
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore for FileStore {
    fn load(&self) -> Result<Vec<Project>, String> {
        let path = self.path();
        if !path.exists() {
            return Ok(vec![]);
        }
        let raw = fs::read_to_string(&path).map_err(|e| e.to_string())?;
        let mut value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("discarding unreadable project library: {e}");
                return Ok(vec![]);
            }
        };
        migrate_document_kinds(&mut value);
        match serde_json::from_value(value) {
            Ok(projects) => Ok(projects),
            Err(e) => {
                log::warn!("discarding project library with unrecognized shape: {e}");
                Ok(vec![])
            }
        }
    }

    /// Atomic write (temp file + rename) so a crash mid-save never leaves a
    /// half-written library behind.
    fn save(&self, projects: &[Project]) -> Result<(), String> {
        fs::create_dir_all(&self.dir).map_err(|e| e.to_string())?;
        let json = serde_json::to_string_pretty(projects).map_err(|e| e.to_string())?;
        let tmp = self.dir.join(".projects.json.tmp");
        fs::write(&tmp, json).map_err(|e| e.to_string())?;
        fs::rename(&tmp, self.path()).map_err(|e| e.to_string())
    }
}

/// In-memory store; backs orchestrator tests and ephemeral runs.
#[derive(Default)]
pub struct MemStore(Mutex<Vec<Project>>);

impl ProjectStore for MemStore {
    fn load(&self) -> Result<Vec<Project>, String> {
        Ok(self.0.lock().unwrap().clone())
    }

    fn save(&self, projects: &[Project]) -> Result<(), String> {
        *self.0.lock().unwrap() = projects.to_vec();
        Ok(())
    }
}

impl<S: ProjectStore + ?Sized> ProjectStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Vec<Project>, String> {
        (**self).load()
    }

    fn save(&self, projects: &[Project]) -> Result<(), String> {
        (**self).save(projects)
    }
}

/// Normalize legacy document kind labels ("js" → "code", "css" → "style")
/// in a raw library blob. Applied once at load time; the stored blob is
/// left as written.
pub fn migrate_document_kinds(projects: &mut serde_json::Value) {
    let Some(list) = projects.as_array_mut() else {
        return;
    };
    for project in list {
        let Some(files) = project
            .get_mut("associatedFiles")
            .and_then(|f| f.as_array_mut())
        else {
            continue;
        };
        for file in files {
            if let Some(kind) = file.get_mut("fileType") {
                match kind.as_str() {
                    Some("js") => *kind = serde_json::Value::String("code".to_string()),
                    Some("css") => *kind = serde_json::Value::String("style".to_string()),
                    _ => {}
                }
            }
        }
    }
}

// --- AI settings ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiSettings {
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub api_key: String,
    /// Reasoning model used for build/code/style guide generation.
    #[serde(default)]
    pub model: String,
    /// Cheaper model used for feature suggestions and surprise ideas.
    #[serde(default)]
    pub fast_model: String,
}

impl Default for AiSettings {
    fn default() -> Self {
        AiSettings {
            provider: "google".to_string(),
            api_key: String::new(),
            model: "gemini-2.5-pro-exp-03-25".to_string(),
            fast_model: "gemini-2.0-flash-thinking-exp-01-21".to_string(),
        }
    }
}

impl AiSettings {
    pub fn configured(&self) -> bool {
        !self.provider.is_empty()
            && !self.model.is_empty()
            && (self.provider == "ollama" || !self.api_key.is_empty())
    }
}

fn settings_path() -> PathBuf {
    data_dir().join("settings.json")
}

pub fn read_settings() -> AiSettings {
    let path = settings_path();
    if !path.exists() {
        return AiSettings::default();
    }
    fs::read_to_string(&path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn write_settings(settings: &AiSettings) -> Result<(), String> {
    let dir = data_dir();
    fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
    fs::write(settings_path(), json).map_err(|e| e.to_string())
}

// --- Draft persistence ---

fn draft_path() -> PathBuf {
    data_dir().join("draft.json")
}

pub fn read_draft() -> Draft {
    let path = draft_path();
    if !path.exists() {
        return Draft::default();
    }
    fs::read_to_string(&path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn write_draft(draft: &Draft) -> Result<(), String> {
    let dir = data_dir();
    fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(draft).map_err(|e| e.to_string())?;
    fs::write(draft_path(), json).map_err(|e| e.to_string())
}

pub fn clear_draft() -> Result<(), String> {
    let path = draft_path();
    if path.exists() {
        fs::remove_file(&path).map_err(|e| e.to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(id: &str, name: &str) -> FeatureRecord {
        FeatureRecord {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{name} description"),
        }
    }

    fn sample_project(name: &str) -> Project {
        let guide = DocumentRecord {
            title: name.to_string(),
            content: format!("# {name}\n\nBuild guide body."),
            timestamp: Utc::now(),
            file_type: DocumentKind::BuildGuide,
            parent_id: None,
        };
        let idea = IdeaDescriptor {
            app_name: name.to_string(),
            description: "a test app".to_string(),
            primary_language: Some(Language::Rust),
            ..Default::default()
        };
        Project::new(guide, idea)
    }

    #[test]
    fn attach_replaces_same_kind() {
        let mut project = sample_project("Ledger");
        let project_id = project.id.clone();
        let doc = |title: &str| DocumentRecord {
            title: title.to_string(),
            content: title.to_string(),
            timestamp: Utc::now(),
            file_type: DocumentKind::Code,
            parent_id: Some(project_id.clone()),
        };
        project.attach_document(doc("first"));
        project.attach_document(doc("second"));
        assert_eq!(project.associated_files.len(), 1);
        assert_eq!(project.associated(DocumentKind::Code).unwrap().title, "second");
    }

    #[test]
    fn build_guide_is_inline_not_associated() {
        let project = sample_project("Ledger");
        assert!(project.has_document(DocumentKind::BuildGuide));
        assert!(project.associated(DocumentKind::BuildGuide).is_none());
        assert_eq!(
            project.document_content(DocumentKind::BuildGuide),
            Some(project.content.as_str())
        );
        assert_eq!(project.document_content(DocumentKind::Style), None);
    }

    #[test]
    fn project_ids_are_unique() {
        assert_ne!(sample_project("A").id, sample_project("B").id);
    }

    #[test]
    fn board_moves_are_disjoint() {
        let mut board = FeatureBoard::default();
        board.absorb(vec![feature("f1", "Search"), feature("f2", "Export")]);

        board.select("f1").unwrap();
        assert_eq!(board.suggested.len(), 1);
        assert_eq!(board.selected.len(), 1);

        board.defer("f2").unwrap();
        assert!(board.suggested.is_empty());
        assert_eq!(board.deferred.len(), 1);

        board.restore("f2").unwrap();
        assert_eq!(board.suggested.len(), 1);
        assert!(board.deferred.is_empty());

        board.deselect("f1").unwrap();
        assert_eq!(board.suggested.len(), 2);
        assert!(board.selected.is_empty());

        board.remove("f1").unwrap();
        board.remove("f2").unwrap();
        assert!(board.suggested.is_empty());
        assert!(board.remove("f1").is_err());
    }

    #[test]
    fn features_text_numbers_selected() {
        let mut board = FeatureBoard::default();
        board.absorb(vec![feature("f1", "Search"), feature("f2", "Export")]);
        board.select("f1").unwrap();
        board.select("f2").unwrap();
        assert_eq!(
            board.features_text(),
            "1. Search: Search description\n2. Export: Export description"
        );
        board.deselect("f1").unwrap();
        assert_eq!(board.features_text(), "1. Export: Export description");
    }

    #[test]
    fn store_roundtrip_is_byte_stable() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::at(tmp.path().to_path_buf());
        let projects = vec![sample_project("Ledger"), sample_project("Tracker")];
        store.save(&projects).unwrap();

        let first = fs::read_to_string(tmp.path().join("projects.json")).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, projects);
        store.save(&loaded).unwrap();
        let second = fs::read_to_string(tmp.path().join("projects.json")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_library_loads_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::at(tmp.path().join("nested"));
        assert_eq!(store.load().unwrap(), vec![]);
    }

    #[test]
    fn corrupt_library_heals_to_empty() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("projects.json"), "{not json").unwrap();
        let store = FileStore::at(tmp.path().to_path_buf());
        assert_eq!(store.load().unwrap(), vec![]);
    }

    #[test]
    fn legacy_kinds_normalize_on_load() {
        let tmp = tempfile::tempdir().unwrap();
        let mut project = sample_project("Old");
        project.attach_document(DocumentRecord {
            title: "Old - JS Guide".to_string(),
            content: "js guide".to_string(),
            timestamp: Utc::now(),
            file_type: DocumentKind::Code,
            parent_id: Some(project.id.clone()),
        });
        let mut blob = serde_json::to_value(vec![project]).unwrap();
        blob[0]["associatedFiles"][0]["fileType"] = serde_json::Value::String("js".to_string());
        fs::write(
            tmp.path().join("projects.json"),
            serde_json::to_string_pretty(&blob).unwrap(),
        )
        .unwrap();

        let store = FileStore::at(tmp.path().to_path_buf());
        let loaded = store.load().unwrap();
        assert_eq!(loaded[0].associated_files[0].file_type, DocumentKind::Code);

        // Read-time normalization only: the stored blob keeps the old label.
        let raw = fs::read_to_string(tmp.path().join("projects.json")).unwrap();
        assert!(raw.contains("\"js\""));
    }

    #[test]
    fn settings_require_credential_except_ollama() {
        let mut settings = AiSettings::default();
        assert!(!settings.configured());
        settings.api_key = "k".to_string();
        assert!(settings.configured());
        settings.api_key.clear();
        settings.provider = "ollama".to_string();
        assert!(settings.configured());
    }

    #[test]
    fn descriptor_serializes_camel_case() {
        let idea = IdeaDescriptor {
            app_name: "Ledger".to_string(),
            primary_language: Some(Language::Csharp),
            app_type: Some(AppCategory::Api),
            ..Default::default()
        };
        let value = serde_json::to_value(&idea).unwrap();
        assert_eq!(value["appName"], "Ledger");
        assert_eq!(value["primaryLanguage"], "csharp");
        assert_eq!(value["appType"], "api");
        assert!(value.get("aiModelInfo").is_none());
    }

    #[test]
    fn wants_model_context_on_category_or_tool() {
        let mut idea = IdeaDescriptor::default();
        assert!(!idea.wants_model_context());
        idea.app_type = Some(AppCategory::Ai);
        assert!(idea.wants_model_context());
        idea.app_type = Some(AppCategory::Web);
        idea.frameworks.push(catalog::AI_API_TOOL.to_string());
        assert!(idea.wants_model_context());
    }
}
