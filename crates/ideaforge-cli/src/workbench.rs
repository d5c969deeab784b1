//! The orchestrator: owns the loaded project list and the current view,
//! drives generation through the injected store and generator, and persists
//! after every mutation so memory and disk never disagree.

use ideaforge_core::{DocumentKind, IdeaDescriptor, Project, ProjectStore};
use ideaforge_gen::{CompanionKind, Generator};

pub type DynStore = Box<dyn ProjectStore + Send + Sync>;
pub type DynGenerator = Box<dyn Generator + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    NoProject,
    Viewing { project_id: String, kind: DocumentKind },
}

pub struct Workbench {
    store: DynStore,
    generator: DynGenerator,
    projects: Vec<Project>,
    view: ViewState,
}

impl Workbench {
    pub fn new(store: DynStore, generator: DynGenerator) -> Result<Self, String> {
        let projects = store.load()?;
        Ok(Workbench {
            store,
            generator,
            projects,
            view: ViewState::NoProject,
        })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }

    pub fn current_document(&self) -> Option<(&Project, DocumentKind)> {
        match &self.view {
            ViewState::Viewing { project_id, kind } => {
                self.project(project_id).map(|p| (p, *kind))
            }
            ViewState::NoProject => None,
        }
    }

    /// Submit the idea form: validate, generate the build guide, persist the
    /// new project, and switch to viewing its build guide. Returns the new
    /// project's id.
    pub async fn submit(&mut self, idea: IdeaDescriptor) -> Result<String, String> {
        if idea.app_name.trim().is_empty() {
            return Err("application name is required".to_string());
        }
        if idea.primary_language.is_none() {
            return Err("primary language is required".to_string());
        }
        let guide = self
            .generator
            .build_guide(&idea)
            .await
            .map_err(|e| e.to_string())?;
        let project = Project::new(guide, idea);
        let project_id = project.id.clone();
        self.projects.push(project);
        self.store.save(&self.projects)?;
        self.view = ViewState::Viewing {
            project_id: project_id.clone(),
            kind: DocumentKind::BuildGuide,
        };
        Ok(project_id)
    }

    /// Switch to a document of the viewed project, generating it first if
    /// absent. Returns true when a generation call was made. An existing
    /// document (the build guide always exists) is shown without touching
    /// the network.
    pub async fn request_document(&mut self, kind: DocumentKind) -> Result<bool, String> {
        let project_id = match &self.view {
            ViewState::Viewing { project_id, .. } => project_id.clone(),
            ViewState::NoProject => return Err("no project selected".to_string()),
        };
        let idx = self
            .position(&project_id)
            .ok_or_else(|| "the viewed project no longer exists".to_string())?;
        if self.projects[idx].has_document(kind) {
            self.view = ViewState::Viewing { project_id, kind };
            return Ok(false);
        }
        let companion = CompanionKind::try_from(kind)
            .map_err(|_| "the build guide is created with the project".to_string())?;
        let record = self
            .generator
            .companion_doc(&self.projects[idx], companion)
            .await
            .map_err(|e| e.to_string())?;
        self.projects[idx].attach_document(record);
        self.store.save(&self.projects)?;
        self.view = ViewState::Viewing { project_id, kind };
        Ok(true)
    }

    /// Switch the view to an already-existing document, never generating.
    pub fn focus(&mut self, kind: DocumentKind) -> Result<(), String> {
        let project_id = match &self.view {
            ViewState::Viewing { project_id, .. } => project_id.clone(),
            ViewState::NoProject => return Err("no project selected".to_string()),
        };
        let project = self
            .project(&project_id)
            .ok_or_else(|| "the viewed project no longer exists".to_string())?;
        if !project.has_document(kind) {
            return Err(format!("this project has no {}", kind.label()));
        }
        self.view = ViewState::Viewing { project_id, kind };
        Ok(())
    }

    /// Delete the document being viewed. The build guide is never deletable;
    /// deleting a companion falls the view back to the build guide.
    pub fn delete_current_document(&mut self) -> Result<(), String> {
        let (project_id, kind) = match &self.view {
            ViewState::Viewing { project_id, kind } => (project_id.clone(), *kind),
            ViewState::NoProject => return Err("no document is being viewed".to_string()),
        };
        if kind == DocumentKind::BuildGuide {
            return Err("the build guide cannot be deleted; delete the project instead".to_string());
        }
        let idx = self
            .position(&project_id)
            .ok_or_else(|| "the viewed project no longer exists".to_string())?;
        self.projects[idx].remove_document(kind);
        self.store.save(&self.projects)?;
        self.view = ViewState::Viewing {
            project_id,
            kind: DocumentKind::BuildGuide,
        };
        Ok(())
    }

    pub fn delete_project(&mut self, id: &str) -> Result<(), String> {
        let idx = self
            .position(id)
            .ok_or_else(|| format!("no project with id '{id}'"))?;
        self.projects.remove(idx);
        self.store.save(&self.projects)?;
        if matches!(&self.view, ViewState::Viewing { project_id, .. } if project_id == id) {
            self.view = ViewState::NoProject;
        }
        Ok(())
    }

    /// Look up a project by id and view its build guide. A miss is a
    /// non-fatal warning; the view is left unchanged.
    pub fn view_project(&mut self, id: &str) -> bool {
        if self.position(id).is_none() {
            log::warn!("no project with id '{id}'");
            return false;
        }
        self.view = ViewState::Viewing {
            project_id: id.to_string(),
            kind: DocumentKind::BuildGuide,
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::Utc;
    use ideaforge_core::{
        Architecture, DocumentRecord, FeatureRecord, Language, MemStore,
    };
    use ideaforge_gen::{GenerateError, SurpriseIdea};

    struct StubGenerator {
        guide_calls: Arc<AtomicUsize>,
        companion_calls: Arc<AtomicUsize>,
    }

    impl StubGenerator {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let guide_calls = Arc::new(AtomicUsize::new(0));
            let companion_calls = Arc::new(AtomicUsize::new(0));
            (
                StubGenerator {
                    guide_calls: guide_calls.clone(),
                    companion_calls: companion_calls.clone(),
                },
                guide_calls,
                companion_calls,
            )
        }
    }

    #[async_trait]
    impl Generator for StubGenerator {
        async fn build_guide(
            &self,
            idea: &IdeaDescriptor,
        ) -> Result<DocumentRecord, GenerateError> {
            self.guide_calls.fetch_add(1, Ordering::SeqCst);
            Ok(DocumentRecord {
                title: idea.app_name.clone(),
                content: format!("# {} build guide", idea.app_name),
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
            self.companion_calls.fetch_add(1, Ordering::SeqCst);
            Ok(DocumentRecord {
                title: format!("{} companion", project.title),
                content: "# companion".to_string(),
                timestamp: Utc::now(),
                file_type: kind.document_kind(),
                parent_id: Some(project.id.clone()),
            })
        }

        async fn feature_suggestions(
            &self,
            _idea: &IdeaDescriptor,
        ) -> Result<Vec<FeatureRecord>, GenerateError> {
            Ok(vec![])
        }

        async fn surprise_idea(
            &self,
            _idea: &IdeaDescriptor,
        ) -> Result<SurpriseIdea, GenerateError> {
            Ok(SurpriseIdea::default())
        }
    }

    fn workbench() -> (Workbench, Arc<MemStore>, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let store = Arc::new(MemStore::default());
        let (stub, guides, companions) = StubGenerator::new();
        let wb = Workbench::new(Box::new(store.clone()), Box::new(stub)).unwrap();
        (wb, store, guides, companions)
    }

    fn ledger_idea() -> IdeaDescriptor {
        IdeaDescriptor {
            app_name: "Ledger".to_string(),
            description: "Track shared expenses".to_string(),
            architecture: Some(Architecture::Backend),
            primary_language: Some(Language::Python),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn submit_creates_and_persists_a_project() {
        let (mut wb, store, guides, _) = workbench();
        let id = wb.submit(ledger_idea()).await.unwrap();

        let project = wb.project(&id).unwrap();
        assert_eq!(project.data.primary_language, Some(Language::Python));
        assert_eq!(project.title, "Ledger");
        assert!(project.associated_files.is_empty());
        assert_eq!(guides.load(Ordering::SeqCst), 1);
        assert_eq!(
            wb.view(),
            &ViewState::Viewing {
                project_id: id,
                kind: DocumentKind::BuildGuide
            }
        );
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn submit_validates_before_any_generation() {
        let (mut wb, _, guides, _) = workbench();

        let mut nameless = ledger_idea();
        nameless.app_name = "  ".to_string();
        assert!(wb.submit(nameless).await.is_err());

        let mut languageless = ledger_idea();
        languageless.primary_language = None;
        assert!(wb.submit(languageless).await.is_err());

        assert_eq!(guides.load(Ordering::SeqCst), 0);
        assert!(wb.projects().is_empty());
    }

    #[tokio::test]
    async fn existing_document_is_shown_without_generating() {
        let (mut wb, _, _, companions) = workbench();
        wb.submit(ledger_idea()).await.unwrap();

        assert!(wb.request_document(DocumentKind::Style).await.unwrap());
        assert_eq!(companions.load(Ordering::SeqCst), 1);
        assert_eq!(wb.current_document().unwrap().0.associated_files.len(), 1);

        // Second request: no call, no new record, just a view switch.
        assert!(!wb.request_document(DocumentKind::Style).await.unwrap());
        assert_eq!(companions.load(Ordering::SeqCst), 1);
        assert_eq!(wb.current_document().unwrap().0.associated_files.len(), 1);
    }

    #[tokio::test]
    async fn build_guide_requests_never_generate() {
        let (mut wb, _, _, companions) = workbench();
        wb.submit(ledger_idea()).await.unwrap();
        assert!(!wb.request_document(DocumentKind::BuildGuide).await.unwrap());
        assert_eq!(companions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn request_without_a_project_fails() {
        let (mut wb, _, _, companions) = workbench();
        assert!(wb.request_document(DocumentKind::Code).await.is_err());
        assert_eq!(companions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn build_guide_deletion_is_always_rejected() {
        let (mut wb, _, _, _) = workbench();
        wb.submit(ledger_idea()).await.unwrap();
        assert!(wb.delete_current_document().is_err());

        // Still rejected after visiting another document and coming back.
        wb.request_document(DocumentKind::Code).await.unwrap();
        wb.focus(DocumentKind::BuildGuide).unwrap();
        assert!(wb.delete_current_document().is_err());
    }

    #[tokio::test]
    async fn deleting_a_companion_falls_back_to_the_build_guide() {
        let (mut wb, store, _, _) = workbench();
        wb.submit(ledger_idea()).await.unwrap();
        wb.request_document(DocumentKind::Style).await.unwrap();

        wb.delete_current_document().unwrap();
        let (project, kind) = wb.current_document().unwrap();
        assert_eq!(kind, DocumentKind::BuildGuide);
        assert!(project.associated_files.is_empty());
        assert!(store.load().unwrap()[0].associated_files.is_empty());
    }

    #[tokio::test]
    async fn deleting_the_viewed_project_resets_the_view() {
        let (mut wb, store, _, _) = workbench();
        let id = wb.submit(ledger_idea()).await.unwrap();
        wb.delete_project(&id).unwrap();
        assert_eq!(wb.view(), &ViewState::NoProject);
        assert!(store.load().unwrap().is_empty());
        assert!(wb.delete_project(&id).is_err());
    }

    #[tokio::test]
    async fn unknown_project_view_is_a_no_op() {
        let (mut wb, _, _, _) = workbench();
        let id = wb.submit(ledger_idea()).await.unwrap();
        assert!(!wb.view_project("missing"));
        assert_eq!(
            wb.view(),
            &ViewState::Viewing {
                project_id: id,
                kind: DocumentKind::BuildGuide
            }
        );
    }

    #[tokio::test]
    async fn focus_requires_an_existing_document() {
        let (mut wb, _, _, _) = workbench();
        wb.submit(ledger_idea()).await.unwrap();
        assert!(wb.focus(DocumentKind::Code).is_err());
        wb.request_document(DocumentKind::Code).await.unwrap();
        assert!(wb.focus(DocumentKind::Code).is_ok());
    }
}
