//! On-demand export of a project document to a Markdown file.

use std::fs;
use std::path::{Path, PathBuf};

use ideaforge_core::{DocumentKind, Language, Project};

/// File stem derived from a project title: every non-alphanumeric character
/// becomes an underscore, the rest is lowercased.
fn slug(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Deterministic export name: the slugged title, plus the language-specific
/// extension tag for code/style documents.
pub fn export_file_name(project: &Project, kind: DocumentKind) -> String {
    let stem = slug(&project.title);
    match kind {
        DocumentKind::BuildGuide => format!("{stem}.md"),
        DocumentKind::Code => {
            let ext = project
                .data
                .primary_language
                .map(Language::code_extension)
                .unwrap_or("code");
            format!("{stem}_{ext}.md")
        }
        DocumentKind::Style => {
            let ext = project
                .data
                .primary_language
                .map(Language::style_extension)
                .unwrap_or("css");
            format!("{stem}_{ext}.md")
        }
    }
}

pub fn export_document(
    project: &Project,
    kind: DocumentKind,
    out_dir: &Path,
) -> Result<PathBuf, String> {
    let Some(content) = project.document_content(kind) else {
        return Err(format!("this project has no {}", kind.label()));
    };
    fs::create_dir_all(out_dir).map_err(|e| e.to_string())?;
    let path = out_dir.join(export_file_name(project, kind));
    fs::write(&path, content).map_err(|e| e.to_string())?;
    Ok(path)
}
