pub const ENV_FILE_NAME: &str = "OwlTreeEnv.cs";
pub const ENV_NAMESPACE: &str = "OwlTree";
pub const ENV_CLASS_NAME: &str = "OwlTreeEnv";

/// Fills the environment file template with both path values.
///
/// Values are inserted as given: callers decide whether they are escaped.
/// The output opens with a newline and has no trailing newline.
pub fn render(project_path: &str, framework_path: &str) -> String {
    format!(
        "
namespace {ENV_NAMESPACE}
{{
    public static class {ENV_CLASS_NAME}
    {{
        public const string ProjectPath = \"{project_path}\";
        public const string FrameworkPath = \"{framework_path}\";
    }}
}}"
    )
}
