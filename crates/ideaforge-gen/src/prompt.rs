//! Prompt construction for the five request kinds. Every builder is a pure
//! function of the idea snapshot; missing optional fields become empty
//! segments, never placeholder text.

use ideaforge_core::{ExperienceLevel, IdeaDescriptor, Language};

/// Already-generated sibling documents, embedded into code/style prompts so
/// the documents stay mutually consistent.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocContext<'a> {
    pub build_guide: Option<&'a str>,
    pub code_guide: Option<&'a str>,
    pub style_guide: Option<&'a str>,
}

/// Render the feature lists: selected then deferred as labeled numbered
/// lists, falling back to the free-text field when both are empty.
pub fn features_text(idea: &IdeaDescriptor) -> String {
    let mut out = String::new();
    if !idea.selected_features.is_empty() {
        out.push_str("Core Features to implement:\n");
        for (i, feature) in idea.selected_features.iter().enumerate() {
            out.push_str(&format!("{}. {}: {}\n", i + 1, feature.name, feature.description));
        }
    }
    if !idea.deferred_features.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("Future Features (to implement later):\n");
        for (i, feature) in idea.deferred_features.iter().enumerate() {
            out.push_str(&format!("{}. {}: {}\n", i + 1, feature.name, feature.description));
        }
    }
    if out.is_empty() {
        out = idea.features.clone();
    }
    out
}

fn language_name(idea: &IdeaDescriptor) -> &'static str {
    idea.primary_language
        .map(Language::display_name)
        .unwrap_or("")
}

fn details_block(idea: &IdeaDescriptor) -> String {
    let mut out = String::with_capacity(512);
    out.push_str("- Description: ");
    out.push_str(&idea.description);
    out.push_str("\n- Primary Language: ");
    out.push_str(language_name(idea));
    out.push_str("\n- Application Type: ");
    if let Some(category) = idea.app_type {
        out.push_str("This will be a ");
        out.push_str(category.prompt_label());
        out.push('.');
    }
    out.push_str("\n- Frameworks/Tools: ");
    out.push_str(&idea.frameworks.join(", "));
    out.push_str("\n- Features: ");
    out.push_str(&features_text(idea));
    out.push_str("\n- Target Audience: ");
    out.push_str(&idea.target_audience);
    out.push('\n');
    out
}

fn experience_note(idea: &IdeaDescriptor) -> String {
    match idea.experience_level {
        Some(ExperienceLevel::Beginner) => tailored("beginner"),
        Some(ExperienceLevel::Intermediate) => tailored("intermediate"),
        Some(ExperienceLevel::Advanced) => tailored("advanced"),
        Some(ExperienceLevel::None) => tailored("no"),
        None => String::new(),
    }
}

fn tailored(level: &str) -> String {
    format!("The guide should be tailored for someone with {level} coding experience.\n")
}

/// Serialize the AI model context block verbatim so the remote model sees
/// current model facts past its own knowledge cutoff.
fn model_context_block(idea: &IdeaDescriptor) -> String {
    match &idea.ai_model_info {
        Some(ctx) => format!(
            "\nLatest AI Model Information (as of {}):\n{}\n",
            ctx.last_updated,
            serde_json::to_string_pretty(ctx).unwrap_or_default()
        ),
        None => String::new(),
    }
}

fn is_novice(idea: &IdeaDescriptor) -> bool {
    matches!(
        idea.experience_level,
        Some(ExperienceLevel::Beginner) | Some(ExperienceLevel::None)
    )
}

fn context_fence(label: &str, content: Option<&str>) -> String {
    match content {
        Some(text) => format!(
            "\nI'm including the {label} content for context and consistency:\n\n\
             ---{upper} CONTENT---\n{text}\n---END {upper} CONTENT---\n",
            upper = label.to_uppercase(),
        ),
        None => String::new(),
    }
}

pub fn build_guide(idea: &IdeaDescriptor) -> String {
    let setup_note = if is_novice(idea) {
        " (beginner-friendly with detailed steps)"
    } else {
        ""
    };
    let ai_section = if idea.ai_model_info.is_some() {
        "\n12. AI Model Integration Guide with current model capabilities"
    } else {
        ""
    };
    format!(
        "Create a comprehensive Markdown build guide for an application called \"{name}\".\n\n\
         Application Details:\n{details}{model_info}\n\
         Please generate a complete and AI coding focused build guide for this application in Markdown format.\n\
         {experience}\n\
         The guide should include:\n\n\
         1. Project Overview\n\
         2. Technical Stack (with detailed explanations of why each technology was chosen)\n\
         3. System Architecture (with components and their interactions)\n\
         4. Feature Implementation Details (current and planned features)\n\
         5. Development Roadmap\n\
         6. Setup Instructions{setup_note}\n\
         7. File Structure (organized in a clear way)\n\
         8. Best Practices for Implementation\n\
         9. Potential Challenges and Solutions\n\
         10. A changelog template to track version history\n\
         11. Instructions for AI assistants on how to navigate and update the project{ai_section}\n\n\
         Format the output as clean Markdown that renders well and follows best practices.\n\
         Include code examples where relevant.\n\
         The guide should be comprehensive enough that a developer could implement the application based on these specifications.\n\n\
         Return ONLY the markdown content, properly formatted.",
        name = idea.app_name,
        details = details_block(idea),
        model_info = model_context_block(idea),
        experience = experience_note(idea),
    )
}

pub fn code_guide(idea: &IdeaDescriptor, context: &DocContext) -> String {
    let lang = idea.primary_language;
    let lang_name = lang.map(Language::display_name).unwrap_or("the primary language");
    let extension = lang.map(Language::code_extension).unwrap_or("code");
    format!(
        "Create a detailed {lang_name} implementation guide in Markdown format for an application called \"{name}\".\n\n\
         Application Details:\n{details}{model_info}\n\
         {experience}\n\
         This {ext}.md file should focus specifically on {lang_name} implementation details including:\n\n\
         1. {lang_name} Architecture Overview\n\
         2. Core {lang_name} Functions and Classes/Modules\n\
         3. API Integration (if applicable)\n\
         4. State Management Approach (if applicable)\n\
         5. Event Handling / Control Flow\n\
         6. Data Processing Logic\n\
         7. Code Examples for Key Features (using {lang_name})\n\
         8. Performance Optimization Tips for {lang_name}\n\
         9. Testing Strategies for {lang_name} code\n\
         10. Integration with UI components or other parts of the system\n\n\
         Include actual {lang_name} code examples that demonstrate implementation of the key features.\n\
         For complex features, include step-by-step implementation details.\n\
         Organize the document in a way that developers can use it as a reference during implementation.\n\n\
         Make sure your {lang_name} implementation guide is consistent with the other documentation \
         (Build Guide, Style Guide) and follows the same architectural approach.\n\
         {build_ctx}{style_ctx}\n\
         Return ONLY the markdown content, properly formatted.",
        name = idea.app_name,
        details = details_block(idea),
        model_info = model_context_block(idea),
        experience = experience_note(idea),
        ext = extension.to_uppercase(),
        build_ctx = context_fence("Build Guide", context.build_guide),
        style_ctx = context_fence("Style Guide", context.style_guide),
    )
}

pub fn style_guide(idea: &IdeaDescriptor, context: &DocContext) -> String {
    let extension = idea
        .primary_language
        .map(Language::style_extension)
        .unwrap_or("css");
    let code_label = match idea.primary_language {
        Some(lang) => format!("Code ({}) Guide", lang.display_name()),
        None => "Code Guide".to_string(),
    };
    format!(
        "Create a detailed Styling guide (e.g., CSS, UI components) in Markdown format for an application called \"{name}\".\n\n\
         Application Details:\n{details}{model_info}\n\
         {experience}\n\
         This {ext}.md file should focus specifically on styling and UI implementation details including:\n\n\
         1. UI/UX Design Philosophy Overview\n\
         2. Color Palette (with Hex/RGB values)\n\
         3. Typography Guidelines (Fonts, sizes, weights)\n\
         4. Layout System (e.g., Grid/Flexbox usage, spacing units)\n\
         5. Component Styling Patterns (How common UI elements should look and behave)\n\
         6. Responsive Design Strategy (Breakpoints, mobile-first approach, etc.)\n\
         7. Animation and Transition Specifications (if any)\n\
         8. CSS Variables / Theming Structure (if applicable)\n\
         9. CSS Architecture / Naming Conventions (e.g., BEM, SMACSS, Utility Classes)\n\
         10. Style Code Examples for Key Components (using {extension} or relevant framework syntax)\n\n\
         Include actual {extension} code examples (or relevant framework code like JSX with Tailwind/Styled \
         Components) that demonstrate styling for key components and features.\n\
         For complex UI elements, include detailed styling instructions.\n\
         Provide guidance on maintaining style consistency across the application.\n\n\
         Make sure your styling guide is consistent with the other documentation (Build Guide, Code Guide) \
         and follows the same design approach.\n\
         {build_ctx}{code_ctx}\n\
         Return ONLY the markdown content, properly formatted.",
        name = idea.app_name,
        details = details_block(idea),
        model_info = model_context_block(idea),
        experience = experience_note(idea),
        ext = extension.to_uppercase(),
        build_ctx = context_fence("Build Guide", context.build_guide),
        code_ctx = context_fence(&code_label, context.code_guide),
    )
}

pub fn surprise_idea(idea: &IdeaDescriptor) -> String {
    let has_name = !idea.app_name.trim().is_empty();
    let has_description = !idea.description.trim().is_empty();
    let basis = match (has_name, has_description) {
        (true, true) => "application name and description",
        (true, false) => "application name",
        (false, true) => "description",
        (false, false) => "details below",
    };
    let mut given = String::new();
    if has_name {
        given.push_str(&format!("Application Name: {}\n", idea.app_name));
    }
    if has_description {
        given.push_str(&format!("Description: {}\n", idea.description));
    }
    format!(
        "Based on the following {basis}, please generate a complete and creative app idea form data.\n\n\
         {given}\n\
         Please return a JSON object with the following properties:\n\n\
         {{\n\
         \x20 \"appName\": \"Name of the application\",\n\
         \x20 \"description\": \"A detailed description of what the application does\",\n\
         \x20 \"architecture\": \"One of: frontend, fullstack, backend, mobile, desktop\",\n\
         \x20 \"primaryLanguage\": \"One of: javascript, typescript, python, java, csharp, go, rust, swift, kotlin, php\",\n\
         \x20 \"appType\": \"One of: web, mobile, desktop, api, game, ai, iot\",\n\
         \x20 \"complexity\": \"One of: basic, moderate, advanced, enterprise\",\n\
         \x20 \"experienceLevel\": \"One of: beginner, intermediate, advanced, none\",\n\
         \x20 \"frameworks\": [\"List of frameworks/libraries that make sense for this application\"],\n\
         \x20 \"tools\": [\"List of developer tools that would be helpful\"],\n\
         \x20 \"features\": \"A list of 5-10 key features formatted as a numbered list\",\n\
         \x20 \"targetAudience\": \"Who this application is designed for\"\n\
         }}\n\n\
         Be creative but realistic - the application should be technically feasible with the technologies you suggest.\n\
         Make sure the selected language is appropriate for the application architecture.\n\
         Return ONLY the JSON with no additional explanation or markdown formatting."
    )
}

pub fn feature_suggestions(idea: &IdeaDescriptor) -> String {
    let category = idea
        .app_type
        .map(|c| c.prompt_label().to_string())
        .unwrap_or_else(|| "Not specified".to_string());
    let frameworks = if idea.frameworks.is_empty() {
        "Not specified".to_string()
    } else {
        idea.frameworks.join(", ")
    };
    format!(
        "Generate 20 potential features for an application with the following details:\n\n\
         Application Name: {name}\n\
         Description: {description}\n\
         Primary Language: {language}\n\
         Application Type: {category}\n\
         Frameworks/Tools: {frameworks}\n\n\
         Please provide the features in a JSON array format with exactly 20 features.\n\
         Each feature should be an object with the following structure:\n\
         {{\n\
         \x20 \"id\": \"unique_id\",\n\
         \x20 \"name\": \"Feature Name\",\n\
         \x20 \"description\": \"Feature description\"\n\
         }}\n\n\
         The features should be practical, aligned with the application's purpose, and appropriate for the \
         technologies mentioned.\n\
         Ensure they range from basic core functionality to more advanced features.\n\n\
         Return ONLY the JSON array without explanations, markdown formatting, or code blocks.",
        name = idea.app_name,
        description = idea.description,
        language = language_name(idea),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideaforge_core::{AppCategory, FeatureRecord, ModelContext};

    fn idea() -> IdeaDescriptor {
        IdeaDescriptor {
            app_name: "Ledger".to_string(),
            description: "Track shared expenses".to_string(),
            primary_language: Some(Language::Python),
            app_type: Some(AppCategory::Web),
            frameworks: vec!["FastAPI".to_string(), "PostgreSQL".to_string()],
            target_audience: "Roommates".to_string(),
            ..Default::default()
        }
    }

    fn feature(id: &str, name: &str) -> FeatureRecord {
        FeatureRecord {
            id: id.to_string(),
            name: name.to_string(),
            description: "does a thing".to_string(),
        }
    }

    #[test]
    fn empty_descriptor_leaks_no_placeholders() {
        let blank = IdeaDescriptor::default();
        let context = DocContext::default();
        for prompt in [
            build_guide(&blank),
            code_guide(&blank, &context),
            style_guide(&blank, &context),
            surprise_idea(&blank),
            feature_suggestions(&blank),
        ] {
            assert!(!prompt.contains("None"), "prompt leaked None:\n{prompt}");
            assert!(!prompt.contains("null"), "prompt leaked null:\n{prompt}");
            assert!(!prompt.contains("undefined"), "prompt leaked undefined:\n{prompt}");
        }
    }

    #[test]
    fn features_render_as_labeled_numbered_lists() {
        let mut idea = idea();
        idea.selected_features = vec![feature("f1", "Search"), feature("f2", "Split bills")];
        idea.deferred_features = vec![feature("f3", "Dark mode")];
        let text = features_text(&idea);
        assert!(text.contains("Core Features to implement:\n1. Search: does a thing"));
        assert!(text.contains("2. Split bills: does a thing"));
        assert!(text.contains("Future Features (to implement later):\n1. Dark mode: does a thing"));
    }

    #[test]
    fn features_fall_back_to_free_text() {
        let mut idea = idea();
        idea.features = "1. Just the basics".to_string();
        assert_eq!(features_text(&idea), "1. Just the basics");
    }

    #[test]
    fn build_guide_names_app_and_format_contract() {
        let prompt = build_guide(&idea());
        assert!(prompt.contains("an application called \"Ledger\""));
        assert!(prompt.contains("This will be a web application."));
        assert!(prompt.ends_with("Return ONLY the markdown content, properly formatted."));
        assert!(!prompt.contains("12. AI Model Integration Guide"));
    }

    #[test]
    fn build_guide_includes_model_context_when_attached() {
        let mut idea = idea();
        idea.ai_model_info = Some(ModelContext::current());
        let prompt = build_guide(&idea);
        assert!(prompt.contains("Latest AI Model Information (as of"));
        assert!(prompt.contains("12. AI Model Integration Guide"));
    }

    #[test]
    fn code_guide_names_language_and_extension() {
        let prompt = code_guide(&idea(), &DocContext::default());
        assert!(prompt.contains("detailed Python implementation guide"));
        assert!(prompt.contains("This PY.md file"));
        assert!(!prompt.contains("BUILD GUIDE CONTENT"));
    }

    #[test]
    fn code_guide_embeds_sibling_context() {
        let context = DocContext {
            build_guide: Some("# Ledger build guide"),
            style_guide: Some("# Ledger style guide"),
            code_guide: None,
        };
        let prompt = code_guide(&idea(), &context);
        assert!(prompt.contains("---BUILD GUIDE CONTENT---\n# Ledger build guide\n---END BUILD GUIDE CONTENT---"));
        assert!(prompt.contains("---STYLE GUIDE CONTENT---\n# Ledger style guide\n---END STYLE GUIDE CONTENT---"));
    }

    #[test]
    fn style_guide_requests_css_and_embeds_code_context() {
        let context = DocContext {
            build_guide: None,
            code_guide: Some("# code"),
            style_guide: None,
        };
        let prompt = style_guide(&idea(), &context);
        assert!(prompt.contains("This CSS.md file"));
        assert!(prompt.contains("---CODE (PYTHON) GUIDE CONTENT---"));
    }

    #[test]
    fn surprise_prompt_reflects_provided_fields() {
        let mut idea = IdeaDescriptor::default();
        idea.app_name = "Ledger".to_string();
        let prompt = surprise_idea(&idea);
        assert!(prompt.contains("Based on the following application name,"));
        assert!(prompt.contains("Application Name: Ledger"));
        assert!(!prompt.contains("Description:"));
        assert!(prompt.contains("Return ONLY the JSON"));
    }

    #[test]
    fn feature_prompt_defaults_unspecified_fields() {
        let mut idea = idea();
        idea.app_type = None;
        idea.frameworks.clear();
        let prompt = feature_suggestions(&idea);
        assert!(prompt.contains("Application Type: Not specified"));
        assert!(prompt.contains("Frameworks/Tools: Not specified"));
        assert!(prompt.contains("exactly 20 features"));
    }
}
