//! Static pattern tables shared by the analyzers.
//!
//! Everything here is read-only data: marker word lists, path signatures,
//! and regexes compiled once on first use.

use std::sync::LazyLock;

use regex::Regex;

use crate::data::{BranchType, Severity, TodoMarker};

// ── path signatures ──────────────────────────────────────────────────

/// Substrings identifying test files.
const TEST_SIGNATURES: &[&str] = &[".test.", ".spec.", "__tests__", "/tests/"];

/// Extensions identifying documentation files.
const DOC_EXTENSIONS: &[&str] = &[".md", ".mdx"];

/// Directory fragments identifying documentation files.
const DOC_DIRECTORIES: &[&str] = &["/docs/", "/documentation/"];

/// File names (matched as path suffixes) identifying configuration files.
const CONFIG_FILE_NAMES: &[&str] = &[
    "package.json",
    "tsconfig.json",
    ".gitignore",
    ".env",
    ".env.example",
    "Dockerfile",
    "docker-compose.yml",
    "Cargo.toml",
    "Cargo.lock",
];

/// Extensions counted as source code for the advisory checks.
const CODE_EXTENSIONS: &[&str] = &[
    ".ts", ".js", ".tsx", ".jsx", ".vue", ".py", ".java", ".go", ".rs", ".rb", ".kt", ".swift",
    ".c", ".cpp", ".cs", ".php",
];

/// Human labels for well-known scopes.
const SCOPE_LABELS: &[(&str, &str)] = &[
    ("api", "Backend API"),
    ("components", "Frontend Components"),
    ("pages", "Frontend Pages"),
    ("views", "Frontend Views"),
    ("utils", "Utilities"),
    ("core", "Core"),
    ("services", "Services"),
    ("models", "Models"),
    ("cli", "CLI"),
    ("docs", "Documentation"),
    ("tests", "Tests"),
    ("root", "Root"),
];

/// Checks if a path looks like a test file.
pub fn is_test_path(path: &str) -> bool {
    TEST_SIGNATURES.iter().any(|sig| path.contains(sig))
}

/// Checks if a path looks like documentation.
pub fn is_doc_path(path: &str) -> bool {
    path == "README.md"
        || DOC_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
        || DOC_DIRECTORIES.iter().any(|dir| path.contains(dir))
}

/// Checks if a path looks like configuration.
pub fn is_config_path(path: &str) -> bool {
    CONFIG_FILE_NAMES.iter().any(|name| path.ends_with(name))
        || path.starts_with('.')
        || path.contains("config")
}

/// Checks if a path has a source-code extension.
pub fn is_code_path(path: &str) -> bool {
    CODE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Returns the display label for a scope token.
///
/// Unknown scopes are returned with their first character uppercased.
pub fn scope_label(scope: &str) -> String {
    if let Some((_, label)) = SCOPE_LABELS.iter().find(|(key, _)| *key == scope) {
        return (*label).to_string();
    }

    let mut chars = scope.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ── security ─────────────────────────────────────────────────────────

/// Remediation advice for sensitive files.
pub const SENSITIVE_FILE_SUGGESTION: &str =
    "Consider removing this file from the commit or adding it to .gitignore";

/// Remediation advice for hardcoded secrets.
pub const SECRET_PATTERN_SUGGESTION: &str =
    "Avoid hardcoding secrets. Use environment variables instead.";

/// A named regex rule.
#[derive(Debug)]
pub struct NamedPattern {
    /// Human-readable rule name.
    pub name: String,
    /// Compiled pattern.
    pub regex: Regex,
}

/// A secret-literal rule with its fixed severity.
#[derive(Debug)]
pub struct SecretRule {
    /// Human-readable rule name.
    pub name: String,
    /// Severity of every match.
    pub severity: Severity,
    /// Compiled pattern.
    pub regex: Regex,
}

const SENSITIVE_FILE_TABLE: &[(&str, &str)] = &[
    (r"\.env$", ".env file"),
    (r"\.env\.local$", ".env.local file"),
    (r"\.env\.production$", ".env.production file"),
    (r"credentials\.json$", "credentials file"),
    (r"secrets\.json$", "secrets file"),
    (r"\.pem$", "private key file"),
    (r"\.key$", "key file"),
    (r"\.p12$", "certificate file"),
    (r"id_rsa$", "SSH private key"),
    (r"\.aws/credentials$", "AWS credentials"),
];

const SECRET_PATTERN_TABLE: &[(&str, Severity, &str)] = &[
    (
        "API Key",
        Severity::High,
        r#"(?i)(?:api[_-]?key|apikey)\s*[:=]\s*['"]([^'"]+)['"]"#,
    ),
    (
        "Password/Secret",
        Severity::High,
        r#"(?i)(?:secret|password|passwd)\s*[:=]\s*['"]([^'"]+)['"]"#,
    ),
    (
        "Auth Token",
        Severity::High,
        r#"(?i)(?:token|auth[_-]?token)\s*[:=]\s*['"]([^'"]+)['"]"#,
    ),
    ("API Key (sk- prefix)", Severity::High, r"sk-[a-zA-Z0-9]{20,}"),
    (
        "Private Key",
        Severity::High,
        r#"(?i)(?:private[_-]?key)\s*[:=]\s*['"]([^'"]+)['"]"#,
    ),
    (
        "Bearer Token",
        Severity::Medium,
        r"Bearer\s+[a-zA-Z0-9\-._~+/]+=*",
    ),
];

/// Sensitive file-name rules, in priority order.
#[allow(clippy::unwrap_used)] // Compile-time constant regex patterns
pub static SENSITIVE_FILES: LazyLock<Vec<NamedPattern>> = LazyLock::new(|| {
    SENSITIVE_FILE_TABLE
        .iter()
        .map(|(source, name)| NamedPattern {
            name: (*name).to_string(),
            regex: Regex::new(source).unwrap(),
        })
        .collect()
});

/// Secret-literal rules, each tested independently.
#[allow(clippy::unwrap_used)] // Compile-time constant regex patterns
pub static SECRET_PATTERNS: LazyLock<Vec<SecretRule>> = LazyLock::new(|| {
    SECRET_PATTERN_TABLE
        .iter()
        .map(|(name, severity, source)| SecretRule {
            name: (*name).to_string(),
            severity: *severity,
            regex: Regex::new(source).unwrap(),
        })
        .collect()
});

/// TODO-style comment rules; group 1 captures the trailing text.
#[allow(clippy::unwrap_used)] // Compile-time constant regex patterns
pub static TODO_PATTERNS: LazyLock<Vec<(TodoMarker, Regex)>> = LazyLock::new(|| {
    TodoMarker::ALL
        .iter()
        .map(|marker| {
            let source = format!(r"(?i)//\s*{}[:\s](.+)", marker.as_str());
            (*marker, Regex::new(&source).unwrap())
        })
        .collect()
});

// ── branch naming ────────────────────────────────────────────────────

/// Diff keyword classes, scanned in order.
#[allow(clippy::unwrap_used)] // Compile-time constant regex patterns
pub static BRANCH_TYPE_KEYWORDS: LazyLock<Vec<(BranchType, Regex)>> = LazyLock::new(|| {
    vec![
        (
            BranchType::Fix,
            Regex::new(r"(?i)\b(?:fix|bug|issue|error)\b").unwrap(),
        ),
        (
            BranchType::Feat,
            Regex::new(r"(?i)\b(?:feat|feature|add|implement|new)\b").unwrap(),
        ),
        (
            BranchType::Refactor,
            Regex::new(r"(?i)\b(?:refactor|restructure|reorganize)\b").unwrap(),
        ),
    ]
});

/// Path patterns that name a branch scope, scanned in order.
#[allow(clippy::unwrap_used)] // Compile-time constant regex patterns
pub static BRANCH_SCOPE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    ["api", "components", "services", "core", "cli", "utils"]
        .iter()
        .map(|scope| {
            let source = format!("src/{scope}/[^/]+");
            (*scope, Regex::new(&source).unwrap())
        })
        .collect()
});

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static BRANCH_CONFIG_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(?:config|rc)\.(?:js|ts|json)$").unwrap());

/// Source extensions stripped from branch descriptions.
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
pub static SOURCE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(?:ts|js|tsx|jsx|md|rs|py|go|vue)$").unwrap());

/// Checks if a path is a configuration file for branch-type purposes.
pub fn is_branch_config_path(path: &str) -> bool {
    BRANCH_CONFIG_FILE.is_match(path)
        || matches!(path, "package.json" | "tsconfig.json" | "Cargo.toml")
}

// ── commit style ─────────────────────────────────────────────────────

/// Words whose presence suggests a French subject.
pub const FRENCH_MARKERS: &[&str] = &[
    "ajoute",
    "ajout",
    "correction",
    "corrige",
    "mise",
    "jour",
    "suppression",
    "supprime",
    "modification",
    "modifie",
    "amélioration",
    "améliore",
    "création",
    "crée",
    "implémentation",
    "implémente",
    "refactorisation",
    "nouveau",
    "nouvelle",
    "pour",
    "dans",
    "avec",
    "sans",
    "les",
    "des",
    "une",
    "sur",
    "est",
    "sont",
];

/// Words whose presence suggests an English subject.
pub const ENGLISH_MARKERS: &[&str] = &[
    "add",
    "added",
    "fix",
    "fixed",
    "update",
    "updated",
    "remove",
    "removed",
    "change",
    "changed",
    "improve",
    "improved",
    "create",
    "created",
    "implement",
    "implemented",
    "refactor",
    "new",
    "for",
    "with",
    "without",
    "the",
    "and",
];

/// Conventional emoji and the commit type they usually stand for.
pub const EMOJI_TYPES: &[(&str, &str)] = &[
    ("✨", "feat"),
    ("🎉", "feat"),
    ("🚀", "feat"),
    ("🐛", "fix"),
    ("🔧", "fix"),
    ("📝", "docs"),
    ("📚", "docs"),
    ("♻️", "refactor"),
    ("🔨", "refactor"),
    ("✅", "test"),
    ("🧪", "test"),
    ("🎨", "style"),
    ("💄", "style"),
    ("⚡", "perf"),
    ("🔥", "chore"),
    ("🗑️", "chore"),
    ("⬆️", "chore"),
    ("📦", "chore"),
];

/// Returns the first conventional emoji associated with a commit type.
pub fn default_emoji_for_type(commit_type: &str) -> Option<&'static str> {
    EMOJI_TYPES
        .iter()
        .find(|(_, t)| *t == commit_type)
        .map(|(emoji, _)| *emoji)
}

/// Returns the commit type conventionally associated with an emoji.
pub fn type_for_emoji(emoji: &str) -> Option<&'static str> {
    EMOJI_TYPES
        .iter()
        .find(|(e, _)| *e == emoji)
        .map(|(_, t)| *t)
}

/// Leading emoji, optionally followed by a variation selector.
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
pub static LEADING_EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\p{Emoji_Presentation}\x{FE0F}?|\p{Emoji}\x{FE0F})").unwrap()
});

/// Leading emoji plus trailing whitespace, for stripping.
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
pub static LEADING_EMOJI_WITH_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\p{Emoji_Presentation}\x{FE0F}?|\p{Emoji}\x{FE0F})\s*").unwrap()
});

/// `type(scope): ` header; group 1 is the type, group 2 the scope.
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
pub static CONVENTIONAL_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+)(?:\(([^)]+)\))?:\s").unwrap());

/// `type(scope):` prefix plus trailing whitespace, for stripping.
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
pub static CONVENTIONAL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+(?:\([^)]+\))?:\s*").unwrap());

/// A ticket reference form.
#[derive(Debug)]
pub struct TicketPattern {
    /// Regex source recorded in the style profile.
    pub source: &'static str,
    /// Compiled pattern; group 1 captures the reference.
    pub regex: Regex,
}

/// Project-key ticket form, e.g. `PROJ-123`.
pub const PROJECT_KEY_TICKET_SOURCE: &str = r"[A-Z]{2,10}-\d+";

/// Numeric issue form, e.g. `#42`.
pub const HASH_TICKET_SOURCE: &str = r"#\d+";

/// Ticket reference forms, tested in order.
#[allow(clippy::unwrap_used)] // Compile-time constant regex patterns
pub static TICKET_PATTERNS: LazyLock<Vec<TicketPattern>> = LazyLock::new(|| {
    vec![
        TicketPattern {
            source: PROJECT_KEY_TICKET_SOURCE,
            regex: Regex::new(r"([A-Z]{2,10}-\d+)").unwrap(),
        },
        TicketPattern {
            source: HASH_TICKET_SOURCE,
            regex: Regex::new(r"#(\d+)").unwrap(),
        },
        TicketPattern {
            source: r"\(#\d+\)",
            regex: Regex::new(r"\(#(\d+)\)").unwrap(),
        },
    ]
});
