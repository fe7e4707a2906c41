use std::path::PathBuf;

pub mod env;
mod error;
pub mod prelude;
pub mod project;

pub use crate::error::CodeGeneratorError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOutput {
    pub path: PathBuf,
    pub content: String,
}

/// Trait defining the interface for code generators
///
/// This trait provides a common interface for every generator in the OwlTree
/// setup tooling. A generator only produces [`GeneratorOutput`] values; writing
/// them to disk is left to [`write_outputs`] so rendering stays free of I/O.
///
/// # Examples
///
/// ```rust,no_run
/// use owltree_codegen::{CodeGenerator, CodeGeneratorError, GeneratorOutput};
///
/// struct MyGenerator;
///
/// impl CodeGenerator for MyGenerator {
///     type Error = CodeGeneratorError;
///
///     fn generate(&self) -> Result<Vec<GeneratorOutput>, Self::Error> {
///         // Generate code here
///         Ok(vec![])
///     }
///
///     fn name(&self) -> &'static str {
///         "my-generator"
///     }
/// }
/// ```
pub trait CodeGenerator {
    /// The error type returned by this generator
    type Error: std::error::Error;

    /// Generate the files this generator is responsible for
    ///
    /// # Returns
    ///
    /// A list of generated files or an error if code generation fails.
    fn generate(&self) -> Result<Vec<GeneratorOutput>, Self::Error>;

    /// Get the name of this generator
    ///
    /// Used to identify the generator in log output.
    fn name(&self) -> &'static str;
}

/// Writes every output to disk, replacing any existing file.
///
/// Parent directories are never created: a missing target directory is
/// reported as [`CodeGeneratorError::Write`].
pub fn write_outputs(outputs: &[GeneratorOutput]) -> Result<(), CodeGeneratorError> {
    for output in outputs {
        std::fs::write(&output.path, &output.content).map_err(|source| {
            CodeGeneratorError::Write {
                path: output.path.clone(),
                source,
            }
        })?;

        tracing::debug!(path = %output.path.display(), bytes = output.content.len(), "wrote generated file");
    }

    Ok(())
}
