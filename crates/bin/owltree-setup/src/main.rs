use crate::cli::Cli;
use crate::error::SetupError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod setup;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(SetupError::WorkingDirectory)
        .and_then(|framework_dir| {
            tracing::debug!(framework_dir = %framework_dir.display(), "resolved framework path");
            setup::Setup::run(&cli, &framework_dir, &mut std::io::stdout())
        });

    match result {
        Ok(path) => println!("🦉 OwlTree environment written to {}", path.display()),
        Err(error) => {
            match error {
                SetupError::Usage => {
                    eprintln!("😢 Setup aborted: exactly one project path is required");
                }
                SetupError::MissingProjectPath => {
                    eprintln!("😢 No project path was provided");
                }
                SetupError::Output(error) => {
                    eprintln!("😭 Unable to print to stdout: {error}");
                }
                SetupError::NothingGenerated => {
                    eprintln!("😭 Nothing was generated");
                }
                SetupError::WorkingDirectory(error) => {
                    eprintln!("😭 Unable to resolve the framework directory: {error}");
                }
                SetupError::Codegen(error) => {
                    eprintln!("😭 Unable to write the environment file: {error}");
                }
            }

            std::process::exit(1);
        }
    }

    Ok(())
}
