use crate::env::normalize_separators;

/// The two paths baked into the environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvProject {
    /// Root of the consuming project, kept exactly as the caller supplied it.
    pub project_path: String,
    /// Root of the framework, always with forward slashes.
    pub framework_path: String,
}

impl EnvProject {
    pub fn new(project_path: impl Into<String>, framework_path: &str) -> Self {
        Self {
            project_path: project_path.into(),
            framework_path: normalize_separators(framework_path),
        }
    }
}

/// How path values end up inside the generated C# string literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LiteralMode {
    /// Substitute the paths verbatim. A path containing `"` yields invalid C#.
    #[default]
    Raw,
    /// Escape `\` and `"` so every path yields a valid literal.
    Escaped,
}

#[derive(Debug, Clone, Default)]
pub struct EnvGeneratorConfig {
    pub literal_mode: LiteralMode,
}
