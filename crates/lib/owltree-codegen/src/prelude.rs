pub use crate::env::{
    ENV_CLASS_NAME, ENV_FILE_NAME, ENV_NAMESPACE, EnvFileGenerator, escape_literal,
    normalize_separators, render,
};
pub use crate::error::CodeGeneratorError;
pub use crate::project::{EnvGeneratorConfig, EnvProject, LiteralMode};
pub use crate::{CodeGenerator, GeneratorOutput, write_outputs};
