//! Static reference tables: frameworks and tools per language, shared
//! database/cloud/tool catalogs, architecture→language fit, and the AI model
//! facts attached to AI-flavored ideas.

use serde::Serialize;

use crate::{Architecture, Language, ModelContext};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const fn entry(id: &'static str, name: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry { id, name, description }
}

/// Tool entry whose selection pulls the AI model context into prompts.
pub const AI_API_TOOL: &str = "AI API calls";

const JAVASCRIPT_FRAMEWORKS: &[CatalogEntry] = &[
    entry("react", "React", "A JavaScript library for building user interfaces"),
    entry("vue", "Vue.js", "Progressive JavaScript framework for building UIs"),
    entry("angular", "Angular", "Platform for building mobile and desktop web applications"),
    entry("node", "Node.js", "JavaScript runtime built on Chrome's V8 JavaScript engine"),
    entry("express", "Express.js", "Fast, unopinionated, minimalist web framework for Node.js"),
    entry("next", "Next.js", "React framework with hybrid static & server rendering"),
    entry("gatsby", "Gatsby", "Static site generator built on React"),
    entry("electron", "Electron", "Framework for creating native applications with web technologies"),
    entry("jquery", "jQuery", "Fast, small, and feature-rich JavaScript library"),
    entry("svelte", "Svelte", "Compiler that converts your components into highly efficient imperative code"),
];

const TYPESCRIPT_FRAMEWORKS: &[CatalogEntry] = &[
    entry("react-ts", "React with TypeScript", "React using TypeScript for type safety"),
    entry("angular-ts", "Angular (TypeScript native)", "Angular framework which uses TypeScript by default"),
    entry("nest", "NestJS", "Progressive Node.js framework for building server-side applications"),
    entry("next-ts", "Next.js with TypeScript", "Next.js with TypeScript support"),
    entry("deno", "Deno", "A secure runtime for JavaScript and TypeScript"),
    entry("vue-ts", "Vue with TypeScript", "Vue.js with TypeScript support"),
    entry("ts-node", "ts-node", "TypeScript execution and REPL for Node.js"),
];

const PYTHON_FRAMEWORKS: &[CatalogEntry] = &[
    entry("django", "Django", "High-level Python web framework that encourages rapid development"),
    entry("flask", "Flask", "Lightweight WSGI web application framework"),
    entry("fastapi", "FastAPI", "Modern, fast web framework for building APIs"),
    entry("pytorch", "PyTorch", "Open source machine learning framework"),
    entry("tensorflow", "TensorFlow", "End-to-end open source platform for machine learning"),
    entry("pandas", "Pandas", "Data analysis and manipulation tool"),
    entry("numpy", "NumPy", "Fundamental package for scientific computing"),
    entry("matplotlib", "Matplotlib", "Comprehensive library for creating static, animated, and interactive visualizations"),
    entry("scikit", "Scikit-learn", "Machine learning library for Python"),
    entry("streamlit", "Streamlit", "Turn data scripts into shareable web apps in minutes"),
];

const JAVA_FRAMEWORKS: &[CatalogEntry] = &[
    entry("spring", "Spring", "Application framework and inversion of control container"),
    entry("android", "Android SDK", "Software development kit for the Android mobile OS"),
    entry("hibernate", "Hibernate", "Object-relational mapping framework"),
    entry("quarkus", "Quarkus", "Kubernetes native Java stack tailored for OpenJDK HotSpot & GraalVM"),
    entry("micronaut", "Micronaut", "Modern, JVM-based, full-stack framework"),
];

const CSHARP_FRAMEWORKS: &[CatalogEntry] = &[
    entry("aspnet", "ASP.NET Core", "Cross-platform, high-performance web framework"),
    entry("unity", "Unity", "Cross-platform game engine"),
    entry("xamarin", "Xamarin", "Platform for building mobile apps"),
    entry("maui", ".NET MAUI", "Cross-platform framework for creating native mobile and desktop apps"),
    entry("blazor", "Blazor", "Framework for building web applications with C#/Razor and HTML"),
];

const GO_FRAMEWORKS: &[CatalogEntry] = &[
    entry("gin", "Gin", "HTTP web framework in Go"),
    entry("echo", "Echo", "High performance, minimalist web framework"),
    entry("fiber", "Fiber", "Express inspired web framework built on top of Fasthttp"),
    entry("gorilla", "Gorilla", "Web toolkit for the Go programming language"),
    entry("gorm", "GORM", "The fantastic ORM library for Go"),
];

const RUST_FRAMEWORKS: &[CatalogEntry] = &[
    entry("actix", "Actix Web", "Powerful, pragmatic, and extremely fast web framework"),
    entry("rocket", "Rocket", "Web framework for Rust that makes it simple to write fast, secure web applications"),
    entry("yew", "Yew", "Modern Rust framework for creating multi-threaded front-end web apps"),
    entry("tokio", "Tokio", "Platform for writing asynchronous I/O backed applications"),
    entry("wasm", "WebAssembly (wasm-bindgen)", "Facilitating high-level interactions between Rust and JavaScript"),
];

const SWIFT_FRAMEWORKS: &[CatalogEntry] = &[
    entry("uikit", "UIKit", "Framework for building interfaces in iOS and tvOS apps"),
    entry("swiftui", "SwiftUI", "Declarative framework for building UIs across Apple platforms"),
    entry("combine", "Combine", "Framework for handling asynchronous events"),
    entry("vapor", "Vapor", "Server-side Swift framework"),
    entry("swift-nio", "SwiftNIO", "Cross-platform asynchronous event-driven network application framework"),
];

const KOTLIN_FRAMEWORKS: &[CatalogEntry] = &[
    entry("kotlin-android", "Kotlin for Android", "Android app development using Kotlin"),
    entry("ktor", "Ktor", "Framework for building asynchronous servers and clients"),
    entry("spring-kotlin", "Spring with Kotlin", "Spring framework with Kotlin support"),
    entry("compose", "Jetpack Compose", "Modern UI toolkit for Android"),
    entry("kotlinx", "KotlinX libraries", "Extensions and additional libraries for Kotlin"),
];

const PHP_FRAMEWORKS: &[CatalogEntry] = &[
    entry("laravel", "Laravel", "PHP framework for web application development"),
    entry("symfony", "Symfony", "Set of reusable PHP components and a framework"),
    entry("wordpress", "WordPress", "CMS and blogging platform"),
    entry("codeigniter", "CodeIgniter", "Powerful PHP framework with a small footprint"),
    entry("drupal", "Drupal", "Content management system and framework"),
];

pub fn frameworks_for(language: Language) -> &'static [CatalogEntry] {
    match language {
        Language::Javascript => JAVASCRIPT_FRAMEWORKS,
        Language::Typescript => TYPESCRIPT_FRAMEWORKS,
        Language::Python => PYTHON_FRAMEWORKS,
        Language::Java => JAVA_FRAMEWORKS,
        Language::Csharp => CSHARP_FRAMEWORKS,
        Language::Go => GO_FRAMEWORKS,
        Language::Rust => RUST_FRAMEWORKS,
        Language::Swift => SWIFT_FRAMEWORKS,
        Language::Kotlin => KOTLIN_FRAMEWORKS,
        Language::Php => PHP_FRAMEWORKS,
    }
}

pub const DATABASES: &[CatalogEntry] = &[
    entry("mysql", "MySQL", "Open-source relational database management system"),
    entry("postgresql", "PostgreSQL", "Powerful, open-source object-relational database"),
    entry("mongodb", "MongoDB", "Document-oriented NoSQL database"),
    entry("redis", "Redis", "In-memory data structure store"),
    entry("sqlite", "SQLite", "Self-contained, serverless database engine"),
    entry("firebase", "Firebase", "Google's mobile app development platform with realtime database"),
    entry("dynamodb", "DynamoDB", "Amazon's NoSQL database service"),
    entry("cosmos", "Azure Cosmos DB", "Microsoft's globally distributed, multi-model database service"),
];

pub const CLOUD_PLATFORMS: &[CatalogEntry] = &[
    entry("aws", "AWS", "Amazon Web Services cloud platform"),
    entry("azure", "Azure", "Microsoft's cloud computing platform"),
    entry("gcp", "Google Cloud", "Google's cloud computing services"),
    entry("heroku", "Heroku", "Platform as a service (PaaS) that enables developers to build and run applications"),
    entry("vercel", "Vercel", "Platform for frontend frameworks and static sites"),
    entry("netlify", "Netlify", "Platform for modern web projects"),
];

pub const COMMON_TOOLS: &[CatalogEntry] = &[
    entry("docker", "Docker", "Platform for developing, shipping, and running applications in containers"),
    entry("kubernetes", "Kubernetes", "Container orchestration system"),
    entry("git", "Git", "Distributed version control system"),
    entry("github", "GitHub", "Hosting platform for software development and version control using Git"),
    entry("gitlab", "GitLab", "Web-based DevOps lifecycle tool"),
    entry("jenkins", "Jenkins", "Open source automation server"),
    entry("graphql", "GraphQL", "Query language for APIs"),
    entry("rest", "REST API", "Architectural style for distributed systems"),
    entry("ai-api", AI_API_TOOL, "APIs for integrating AI capabilities into applications"),
];

/// Languages that fit a target architecture. Drafting a language outside
/// this set is worth a warning, not an error.
pub fn languages_for(architecture: Architecture) -> &'static [Language] {
    use Language::*;
    match architecture {
        Architecture::Frontend => &[Javascript, Typescript],
        Architecture::Fullstack | Architecture::Backend => {
            &[Javascript, Typescript, Python, Java, Csharp, Go, Rust, Php]
        }
        Architecture::Mobile => &[Javascript, Typescript, Java, Swift, Kotlin],
        Architecture::Desktop => &[Javascript, Typescript, Csharp, Java, Python, Rust],
    }
}

// --- AI model facts ---

/// Date the model tables below were last refreshed.
pub const CATALOG_UPDATED: &str = "April 1, 2025";

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelFact {
    pub name: &'static str,
    pub code_name: &'static str,
    pub release_date: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub availability: &'static str,
}

pub const GOOGLE_MODELS: &[ModelFact] = &[
    ModelFact {
        name: "Gemini 2.5 Pro Experimental",
        code_name: "gemini-2.5-pro-exp-03-25",
        release_date: "2025-03",
        description: "Google's most advanced \"thinking\" model with a 1M token context window",
        strengths: &["Advanced reasoning", "Large context window", "In-depth analysis"],
        availability: "Google AI Studio and Gemini Advanced",
    },
    ModelFact {
        name: "Gemini 2.0 Flash",
        code_name: "gemini-2.0-flash-001",
        release_date: "2025-01",
        description: "Fast multimodal model optimized for speed",
        strengths: &["Speed", "Multimodal capabilities", "Efficient processing"],
        availability: "Gemini API",
    },
];

pub const OPENAI_MODELS: &[ModelFact] = &[
    ModelFact {
        name: "GPT-4o",
        code_name: "gpt-4o-2025-03",
        release_date: "2025-03",
        description: "Advanced multimodal model with native image generation",
        strengths: &["Image generation", "Multimodal reasoning", "High accuracy"],
        availability: "ChatGPT and API",
    },
    ModelFact {
        name: "o3-mini",
        code_name: "o3-mini-2025-02",
        release_date: "2025-02",
        description: "Advanced reasoning model optimized for STEM tasks and coding",
        strengths: &["STEM tasks", "Coding", "Compact size"],
        availability: "OpenAI API",
    },
];

pub const ANTHROPIC_MODELS: &[ModelFact] = &[
    ModelFact {
        name: "Claude 3.7 Sonnet",
        code_name: "claude-3.7-sonnet-2025-03",
        release_date: "2025-03",
        description: "High-performance model for workplace AI applications",
        strengths: &["Workplace AI", "Benchmark performance", "Balanced capabilities"],
        availability: "Anthropic API",
    },
    ModelFact {
        name: "Claude 3.5 Sonnet",
        code_name: "claude-3.5-sonnet-2024-12",
        release_date: "2024-12",
        description: "Balanced model with competitive performance at lower cost",
        strengths: &["Cost efficiency", "Speed", "Comparable to GPT-4o"],
        availability: "Anthropic API",
    },
];

pub fn all_models() -> Vec<&'static ModelFact> {
    GOOGLE_MODELS
        .iter()
        .chain(OPENAI_MODELS)
        .chain(ANTHROPIC_MODELS)
        .collect()
}

/// The `count` most recently released models across all providers.
pub fn most_recent_models(count: usize) -> Vec<&'static ModelFact> {
    let mut models = all_models();
    models.sort_by(|a, b| b.release_date.cmp(a.release_date));
    models.truncate(count);
    models
}

impl ModelContext {
    /// Assemble the knowledge-cutoff mitigation block from the tables above.
    pub fn current() -> Self {
        ModelContext {
            last_updated: CATALOG_UPDATED.to_string(),
            recent_models: serde_json::to_value(most_recent_models(4))
                .unwrap_or(serde_json::Value::Null),
            providers: serde_json::json!({
                "google": GOOGLE_MODELS,
                "openai": OPENAI_MODELS,
                "anthropic": ANTHROPIC_MODELS,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_frameworks() {
        for language in [
            Language::Javascript,
            Language::Typescript,
            Language::Python,
            Language::Java,
            Language::Csharp,
            Language::Go,
            Language::Rust,
            Language::Swift,
            Language::Kotlin,
            Language::Php,
        ] {
            assert!(!frameworks_for(language).is_empty());
        }
    }

    #[test]
    fn recent_models_sorted_newest_first() {
        let recent = most_recent_models(4);
        assert_eq!(recent.len(), 4);
        for pair in recent.windows(2) {
            assert!(pair[0].release_date >= pair[1].release_date);
        }
        assert_eq!(recent[0].release_date, "2025-03");
    }

    #[test]
    fn frontend_fit_excludes_systems_languages() {
        let fit = languages_for(Architecture::Frontend);
        assert!(fit.contains(&Language::Typescript));
        assert!(!fit.contains(&Language::Rust));
        assert!(languages_for(Architecture::Backend).contains(&Language::Rust));
    }

    #[test]
    fn model_context_carries_provider_tables() {
        let ctx = ModelContext::current();
        assert_eq!(ctx.last_updated, CATALOG_UPDATED);
        assert_eq!(ctx.recent_models.as_array().unwrap().len(), 4);
        assert!(ctx.providers["anthropic"].is_array());
    }

    #[test]
    fn ai_tool_is_in_common_tools() {
        assert!(COMMON_TOOLS.iter().any(|t| t.name == AI_API_TOOL));
    }
}
