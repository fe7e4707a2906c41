use crate::cli::{Cli, check_arguments};
use crate::error::SetupError;
use owltree_codegen::prelude::{
    CodeGenerator, EnvFileGenerator, EnvGeneratorConfig, EnvProject, GeneratorOutput,
    write_outputs,
};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct Setup;

impl Setup {
    /// Writes the environment file for the project named on the command line.
    ///
    /// `framework_dir` is the process working directory, read once by the caller.
    /// Usage messages go to `out`. Returns the path of the written file.
    pub fn run(
        cli: &Cli,
        framework_dir: &Path,
        out: &mut impl Write,
    ) -> Result<PathBuf, SetupError> {
        let project_path = check_arguments(&cli.project_paths, cli.usage_policy(), out)?;

        let project = EnvProject::new(project_path, &framework_dir.to_string_lossy());
        let config = EnvGeneratorConfig {
            literal_mode: cli.literal_mode(),
        };
        let generator = EnvFileGenerator::new(project, config);

        let outputs = generator.generate()?;
        write_outputs(&outputs)?;

        Self::written_path(&outputs)
    }

    fn written_path(outputs: &[GeneratorOutput]) -> Result<PathBuf, SetupError> {
        outputs
            .first()
            .map(|output| output.path.clone())
            .ok_or(SetupError::NothingGenerated)
    }
}
