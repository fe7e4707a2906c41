use crate::project::{EnvGeneratorConfig, EnvProject, LiteralMode};
use crate::{CodeGenerator, CodeGeneratorError, GeneratorOutput};
use std::path::Path;

mod template;
mod util;


pub use template::{ENV_CLASS_NAME, ENV_FILE_NAME, ENV_NAMESPACE, render};
pub use util::{escape_literal, normalize_separators};

/// Generates `OwlTreeEnv.cs` inside the consuming project.
pub struct EnvFileGenerator {
    project: EnvProject,
    config: EnvGeneratorConfig,
}

impl EnvFileGenerator {
    pub fn new(project: EnvProject, config: EnvGeneratorConfig) -> Self {
        Self { project, config }
    }

    fn literal(&self, value: &str) -> String {
        match self.config.literal_mode {
            LiteralMode::Raw => value.to_string(),
            LiteralMode::Escaped => escape_literal(value),
        }
    }
}

impl CodeGenerator for EnvFileGenerator {
    type Error = CodeGeneratorError;

    fn generate(&self) -> Result<Vec<GeneratorOutput>, Self::Error> {
        let project_literal = self.literal(&self.project.project_path);
        let framework_literal = self.literal(&self.project.framework_path);

        let path = Path::new(&self.project.project_path).join(ENV_FILE_NAME);
        tracing::info!(
            generator = self.name(),
            path = %path.display(),
            literal_mode = ?self.config.literal_mode,
            "rendering environment file"
        );

        Ok(vec![GeneratorOutput {
            path,
            content: render(&project_literal, &framework_literal),
        }])
    }

    fn name(&self) -> &'static str {
        "owltree-env"
    }
}
