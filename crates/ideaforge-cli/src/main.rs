mod export;
mod workbench;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Error, Result};
use clap::{Parser, Subcommand, ValueEnum};

use ideaforge_core::{
    catalog, clear_draft, read_draft, read_settings, write_draft, write_settings, AppCategory,
    Architecture, Complexity, DocumentKind, Draft, ExperienceLevel, FeatureRecord, FileStore,
    Language, ModelContext, ProjectStore,
};
use ideaforge_gen::{Generator, LlmGenerator};

use workbench::Workbench;

#[derive(Debug, Parser)]
#[command(
    name = "ideaforge",
    version,
    about = "Turn an application idea into AI-generated build, code, and style guides"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Configure the AI provider, credential, and models.
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
    /// Edit or inspect the idea draft.
    Draft {
        #[command(subcommand)]
        cmd: DraftCmd,
    },
    /// Show the framework/database/cloud/tool catalog.
    Catalog {
        /// Language whose frameworks to show; defaults to the draft's.
        #[arg(long, value_enum)]
        language: Option<LangArg>,
    },
    /// Fill the draft with a complete AI-generated app idea.
    Surprise,
    /// Suggest and curate features for the draft.
    Features {
        #[command(subcommand)]
        cmd: FeatureCmd,
    },
    /// Generate the build guide from the draft and save it as a project.
    Generate,
    /// List saved projects, newest first.
    List,
    /// Print a project document.
    View {
        id: String,
        #[arg(long, value_enum, default_value = "build-guide")]
        doc: DocArg,
    },
    /// Generate or remove companion documents.
    Docs {
        #[command(subcommand)]
        cmd: DocsCmd,
    },
    /// Delete a project.
    Delete { id: String },
    /// Write a project document to a Markdown file.
    Export {
        id: String,
        #[arg(long, value_enum, default_value = "build-guide")]
        doc: DocArg,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCmd {
    /// Update one or more settings; omitted options keep their value.
    Set {
        #[arg(long)]
        provider: Option<String>,
        #[arg(long)]
        api_key: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        fast_model: Option<String>,
    },
    /// Show the current settings with the credential masked.
    Show,
}

#[derive(Debug, Subcommand)]
enum DraftCmd {
    /// Update draft fields; omitted options keep their value.
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_enum)]
        architecture: Option<ArchArg>,
        #[arg(long, value_enum)]
        language: Option<LangArg>,
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
        #[arg(long, value_enum)]
        complexity: Option<ComplexityArg>,
        #[arg(long, value_enum)]
        experience: Option<ExperienceArg>,
        /// Add a framework or tool to the selection (repeatable).
        #[arg(long)]
        framework: Vec<String>,
        #[arg(long)]
        features: Option<String>,
        #[arg(long)]
        audience: Option<String>,
    },
    Show,
    Clear,
}

#[derive(Debug, Subcommand)]
enum FeatureCmd {
    /// Ask the fast model for a batch of feature suggestions.
    Suggest,
    /// Show the suggested, selected, and deferred feature sets.
    List,
    /// Move a suggested feature into the selected set.
    Select { id: String },
    /// Move a selected feature back to the suggestions.
    Deselect { id: String },
    /// Park a feature for later implementation.
    Defer { id: String },
    /// Bring a deferred feature back into the suggestions.
    Restore { id: String },
    /// Drop a feature from whichever set holds it.
    Remove { id: String },
}

#[derive(Debug, Subcommand)]
enum DocsCmd {
    /// Generate a companion document (or just switch to it if present).
    Add {
        id: String,
        #[arg(long, value_enum)]
        doc: CompanionArg,
    },
    /// Remove a companion document. The build guide cannot be removed.
    Rm {
        id: String,
        #[arg(long, value_enum)]
        doc: DocArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DocArg {
    BuildGuide,
    Code,
    Style,
}

impl From<DocArg> for DocumentKind {
    fn from(arg: DocArg) -> Self {
        match arg {
            DocArg::BuildGuide => DocumentKind::BuildGuide,
            DocArg::Code => DocumentKind::Code,
            DocArg::Style => DocumentKind::Style,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CompanionArg {
    Code,
    Style,
}

impl From<CompanionArg> for DocumentKind {
    fn from(arg: CompanionArg) -> Self {
        match arg {
            CompanionArg::Code => DocumentKind::Code,
            CompanionArg::Style => DocumentKind::Style,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ArchArg {
    Frontend,
    Fullstack,
    Backend,
    Mobile,
    Desktop,
}

impl From<ArchArg> for Architecture {
    fn from(arg: ArchArg) -> Self {
        match arg {
            ArchArg::Frontend => Architecture::Frontend,
            ArchArg::Fullstack => Architecture::Fullstack,
            ArchArg::Backend => Architecture::Backend,
            ArchArg::Mobile => Architecture::Mobile,
            ArchArg::Desktop => Architecture::Desktop,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LangArg {
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

impl From<LangArg> for Language {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Javascript => Language::Javascript,
            LangArg::Typescript => Language::Typescript,
            LangArg::Python => Language::Python,
            LangArg::Java => Language::Java,
            LangArg::Csharp => Language::Csharp,
            LangArg::Go => Language::Go,
            LangArg::Rust => Language::Rust,
            LangArg::Swift => Language::Swift,
            LangArg::Kotlin => Language::Kotlin,
            LangArg::Php => Language::Php,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryArg {
    Web,
    Mobile,
    Desktop,
    Api,
    Game,
    Ai,
    Iot,
}

impl From<CategoryArg> for AppCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Web => AppCategory::Web,
            CategoryArg::Mobile => AppCategory::Mobile,
            CategoryArg::Desktop => AppCategory::Desktop,
            CategoryArg::Api => AppCategory::Api,
            CategoryArg::Game => AppCategory::Game,
            CategoryArg::Ai => AppCategory::Ai,
            CategoryArg::Iot => AppCategory::Iot,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ComplexityArg {
    Basic,
    Moderate,
    Advanced,
    Enterprise,
}

impl From<ComplexityArg> for Complexity {
    fn from(arg: ComplexityArg) -> Self {
        match arg {
            ComplexityArg::Basic => Complexity::Basic,
            ComplexityArg::Moderate => Complexity::Moderate,
            ComplexityArg::Advanced => Complexity::Advanced,
            ComplexityArg::Enterprise => Complexity::Enterprise,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExperienceArg {
    Beginner,
    Intermediate,
    Advanced,
    None,
}

impl From<ExperienceArg> for ExperienceLevel {
    fn from(arg: ExperienceArg) -> Self {
        match arg {
            ExperienceArg::Beginner => ExperienceLevel::Beginner,
            ExperienceArg::Intermediate => ExperienceLevel::Intermediate,
            ExperienceArg::Advanced => ExperienceLevel::Advanced,
            ExperienceArg::None => ExperienceLevel::None,
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.cmd {
        Command::Config { cmd } => config_cmd(cmd),
        Command::Draft { cmd } => draft_cmd(cmd),
        Command::Catalog { language } => catalog_cmd(language),
        Command::Surprise => surprise_cmd().await,
        Command::Features { cmd } => features_cmd(cmd).await,
        Command::Generate => generate_cmd().await,
        Command::List => list_cmd(),
        Command::View { id, doc } => view_cmd(&id, doc.into()),
        Command::Docs { cmd } => docs_cmd(cmd).await,
        Command::Delete { id } => delete_cmd(&id),
        Command::Export { id, doc, out } => export_cmd(&id, doc.into(), &out),
    }
}

fn store() -> Box<dyn ProjectStore + Send + Sync> {
    Box::new(FileStore::new())
}

fn generator() -> Box<dyn Generator + Send + Sync> {
    Box::new(LlmGenerator::new(read_settings()))
}

fn open_workbench() -> Result<Workbench> {
    Workbench::new(store(), generator()).map_err(Error::msg)
}

fn config_cmd(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Set {
            provider,
            api_key,
            model,
            fast_model,
        } => {
            let mut settings = read_settings();
            if let Some(provider) = provider {
                settings.provider = provider;
            }
            if let Some(api_key) = api_key {
                settings.api_key = api_key;
            }
            if let Some(model) = model {
                settings.model = model;
            }
            if let Some(fast_model) = fast_model {
                settings.fast_model = fast_model;
            }
            write_settings(&settings).map_err(Error::msg)?;
            println!("Settings saved.");
            if !settings.configured() {
                println!("An API key is still required before generating.");
            }
        }
        ConfigCmd::Show => {
            let settings = read_settings();
            println!("provider:   {}", settings.provider);
            println!("model:      {}", settings.model);
            println!("fast model: {}", settings.fast_model);
            // Never echo the credential itself.
            println!(
                "api key:    {}",
                if settings.api_key.is_empty() { "(not set)" } else { "(set)" }
            );
            println!("configured: {}", settings.configured());
        }
    }
    Ok(())
}

fn draft_cmd(cmd: DraftCmd) -> Result<()> {
    match cmd {
        DraftCmd::Set {
            name,
            description,
            architecture,
            language,
            category,
            complexity,
            experience,
            framework,
            features,
            audience,
        } => {
            let mut draft = read_draft();
            if let Some(name) = name {
                draft.idea.app_name = name;
            }
            if let Some(description) = description {
                draft.idea.description = description;
            }
            if let Some(architecture) = architecture {
                draft.idea.architecture = Some(architecture.into());
            }
            if let Some(language) = language {
                draft.idea.primary_language = Some(language.into());
            }
            if let Some(category) = category {
                draft.idea.app_type = Some(category.into());
            }
            if let Some(complexity) = complexity {
                draft.idea.complexity = Some(complexity.into());
            }
            if let Some(experience) = experience {
                draft.idea.experience_level = Some(experience.into());
            }
            draft.idea.frameworks.extend(framework);
            if let Some(features) = features {
                draft.idea.features = features;
            }
            if let Some(audience) = audience {
                draft.idea.target_audience = audience;
            }
            if let (Some(architecture), Some(language)) =
                (draft.idea.architecture, draft.idea.primary_language)
            {
                if !catalog::languages_for(architecture).contains(&language) {
                    log::warn!(
                        "{} is an unusual choice for a {:?} architecture",
                        language.display_name(),
                        architecture
                    );
                }
            }
            write_draft(&draft).map_err(Error::msg)?;
            println!("Draft updated.");
        }
        DraftCmd::Show => {
            let draft = read_draft();
            println!("{}", serde_json::to_string_pretty(&draft)?);
        }
        DraftCmd::Clear => {
            clear_draft().map_err(Error::msg)?;
            println!("Draft cleared.");
        }
    }
    Ok(())
}

fn print_catalog_group(label: &str, entries: &[catalog::CatalogEntry]) {
    println!("{label}:");
    for entry in entries {
        println!("  {} - {}", entry.name, entry.description);
    }
    println!();
}

fn catalog_cmd(language: Option<LangArg>) -> Result<()> {
    let language = language
        .map(Language::from)
        .or_else(|| read_draft().idea.primary_language);
    if let Some(language) = language {
        print_catalog_group(
            &format!("{} Frameworks/Libraries", language.display_name()),
            catalog::frameworks_for(language),
        );
    }
    print_catalog_group("Databases", catalog::DATABASES);
    print_catalog_group("Cloud Platforms", catalog::CLOUD_PLATFORMS);
    print_catalog_group("Common Tools", catalog::COMMON_TOOLS);
    Ok(())
}

async fn surprise_cmd() -> Result<()> {
    let mut draft = read_draft();
    if draft.idea.app_name.trim().is_empty() && draft.idea.description.trim().is_empty() {
        bail!("fill in at least the application name or description first (ideaforge draft set)");
    }
    let surprise = generator().surprise_idea(&draft.idea).await?;
    surprise.apply_to(&mut draft.idea);
    write_draft(&draft).map_err(Error::msg)?;
    println!("Draft filled with a surprise app idea:");
    println!("{}", serde_json::to_string_pretty(&draft.idea)?);
    Ok(())
}

/// Recompute the serialized features field after any board transition.
fn sync_features(draft: &mut Draft) {
    draft.idea.features = draft.board.features_text();
}

fn print_features(label: &str, features: &[FeatureRecord]) {
    println!("{label}:");
    if features.is_empty() {
        println!("  (none)");
        return;
    }
    for feature in features {
        println!("  [{}] {} - {}", feature.id, feature.name, feature.description);
    }
}

async fn features_cmd(cmd: FeatureCmd) -> Result<()> {
    let mut draft = read_draft();
    match cmd {
        FeatureCmd::Suggest => {
            if draft.idea.app_name.trim().is_empty()
                || draft.idea.description.trim().is_empty()
                || draft.idea.primary_language.is_none()
            {
                bail!(
                    "fill in the application name, description, and primary language first \
                     (ideaforge draft set)"
                );
            }
            let batch = generator().feature_suggestions(&draft.idea).await?;
            println!("Received {} feature suggestions.", batch.len());
            draft.board.absorb(batch);
            sync_features(&mut draft);
            write_draft(&draft).map_err(Error::msg)?;
            print_features("Suggested", &draft.board.suggested);
        }
        FeatureCmd::List => {
            print_features("Suggested", &draft.board.suggested);
            print_features("Selected", &draft.board.selected);
            print_features("Deferred", &draft.board.deferred);
            return Ok(());
        }
        FeatureCmd::Select { id } => {
            draft.board.select(&id).map_err(Error::msg)?;
            sync_features(&mut draft);
            write_draft(&draft).map_err(Error::msg)?;
            println!("Feature selected.");
        }
        FeatureCmd::Deselect { id } => {
            draft.board.deselect(&id).map_err(Error::msg)?;
            sync_features(&mut draft);
            write_draft(&draft).map_err(Error::msg)?;
            println!("Feature moved back to suggestions.");
        }
        FeatureCmd::Defer { id } => {
            draft.board.defer(&id).map_err(Error::msg)?;
            sync_features(&mut draft);
            write_draft(&draft).map_err(Error::msg)?;
            println!("Feature deferred.");
        }
        FeatureCmd::Restore { id } => {
            draft.board.restore(&id).map_err(Error::msg)?;
            sync_features(&mut draft);
            write_draft(&draft).map_err(Error::msg)?;
            println!("Feature restored to suggestions.");
        }
        FeatureCmd::Remove { id } => {
            draft.board.remove(&id).map_err(Error::msg)?;
            sync_features(&mut draft);
            write_draft(&draft).map_err(Error::msg)?;
            println!("Feature removed.");
        }
    }
    Ok(())
}

async fn generate_cmd() -> Result<()> {
    let draft = read_draft();
    let mut idea = draft.idea.clone();
    if idea.wants_model_context() {
        idea.ai_model_info = Some(ModelContext::current());
    }
    let mut wb = open_workbench()?;
    let id = wb.submit(idea).await.map_err(Error::msg)?;
    let project = wb.project(&id).context("project missing after save")?;
    println!("{}\n", project.title);
    println!("{}", project.content);
    println!("\nSaved project {id}.");
    Ok(())
}

fn list_cmd() -> Result<()> {
    let projects = store().load().map_err(Error::msg)?;
    if projects.is_empty() {
        println!("No projects yet. Generate your first app idea!");
        return Ok(());
    }
    let mut sorted: Vec<_> = projects.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    for project in sorted {
        let language = project
            .data
            .primary_language
            .map(Language::display_name)
            .unwrap_or("-");
        let badge = project
            .data
            .app_type
            .map(AppCategory::badge_label)
            .unwrap_or("-");
        println!(
            "{}  {}  {}  [{} / {}]",
            project.id,
            project.timestamp.format("%Y-%m-%d"),
            project.title,
            language,
            badge
        );
    }
    Ok(())
}

fn view_cmd(id: &str, kind: DocumentKind) -> Result<()> {
    let mut wb = open_workbench()?;
    if !wb.view_project(id) {
        println!("No project with id '{id}'.");
        return Ok(());
    }
    wb.focus(kind).map_err(Error::msg)?;
    let (project, kind) = wb.current_document().context("nothing is being viewed")?;
    let title = project.document_title(kind).unwrap_or(&project.title);
    let content = project.document_content(kind).unwrap_or("");
    println!("{title}\n");
    println!("{content}");
    Ok(())
}

async fn docs_cmd(cmd: DocsCmd) -> Result<()> {
    match cmd {
        DocsCmd::Add { id, doc } => {
            let kind: DocumentKind = doc.into();
            let mut wb = open_workbench()?;
            if !wb.view_project(&id) {
                bail!("no project with id '{id}'");
            }
            let generated = wb.request_document(kind).await.map_err(Error::msg)?;
            if generated {
                println!("Generated the {}.", kind.label());
            } else {
                println!("The {} already exists; nothing was generated.", kind.label());
            }
        }
        DocsCmd::Rm { id, doc } => {
            let kind: DocumentKind = doc.into();
            let mut wb = open_workbench()?;
            if !wb.view_project(&id) {
                bail!("no project with id '{id}'");
            }
            wb.focus(kind).map_err(Error::msg)?;
            wb.delete_current_document().map_err(Error::msg)?;
            println!("Deleted the {}.", kind.label());
        }
    }
    Ok(())
}

fn delete_cmd(id: &str) -> Result<()> {
    let mut wb = open_workbench()?;
    wb.delete_project(id).map_err(Error::msg)?;
    println!("Project deleted.");
    Ok(())
}

fn export_cmd(id: &str, kind: DocumentKind, out: &Path) -> Result<()> {
    let projects = store().load().map_err(Error::msg)?;
    let project = projects
        .iter()
        .find(|p| p.id == id)
        .with_context(|| format!("no project with id '{id}'"))?;
    let path = export::export_document(project, kind, out).map_err(Error::msg)?;
    println!("Wrote {}", path.display());
    Ok(())
}
