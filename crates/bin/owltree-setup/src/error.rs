use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Expected exactly one project path")]
    Usage,

    #[error("No project path was provided")]
    MissingProjectPath,

    #[error("Unable to print the usage message: {0}")]
    Output(std::io::Error),

    #[error("The generator produced no file")]
    NothingGenerated,

    #[error("Unable to read the current working directory: {0}")]
    WorkingDirectory(std::io::Error),

    #[error("A code generation error occurred: {0}")]
    Codegen(#[from] owltree_codegen::prelude::CodeGeneratorError),
}
