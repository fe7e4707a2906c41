use crate::error::SetupError;
use clap::Parser;
use owltree_codegen::prelude::LiteralMode;
use std::io::Write;

pub const USAGE_MESSAGE: &str =
    "You must provide a path to your project for Owl Tree to set itself up.";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the root of the project that will consume OwlTree.
    ///
    /// Exactly one path is expected. `OwlTreeEnv.cs` is written inside it,
    /// overwriting any previous copy.
    #[arg(value_name = "PROJECT_PATH")]
    pub project_paths: Vec<String>,

    /// Stop before writing anything when the path count is wrong.
    #[arg(long)]
    pub strict: bool,

    /// Escape `\` and `"` in the generated string literals.
    #[arg(long)]
    pub escape: bool,
}

impl Cli {
    pub fn usage_policy(&self) -> UsagePolicy {
        if self.strict {
            UsagePolicy::Strict
        } else {
            UsagePolicy::WarnAndContinue
        }
    }

    pub fn literal_mode(&self) -> LiteralMode {
        if self.escape {
            LiteralMode::Escaped
        } else {
            LiteralMode::Raw
        }
    }
}

/// What to do once the usage message has been printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UsagePolicy {
    #[default]
    WarnAndContinue,
    Strict,
}

/// Picks the project path out of the positional arguments.
///
/// A wrong count always prints the usage message to `out`. In warn mode the
/// first path is still used when there is one. An empty path is never used.
pub fn check_arguments(
    paths: &[String],
    policy: UsagePolicy,
    out: &mut impl Write,
) -> Result<String, SetupError> {
    if paths.len() != 1 {
        writeln!(out, "{USAGE_MESSAGE}").map_err(SetupError::Output)?;

        if policy == UsagePolicy::Strict {
            return Err(SetupError::Usage);
        }
    }

    paths
        .first()
        .filter(|path| !path.is_empty())
        .cloned()
        .ok_or(SetupError::MissingProjectPath)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_parse_single_path() {
        let cli = Cli::try_parse_from(["owltree-setup", "/home/user/myproj"]).unwrap();

        assert_eq!(cli.project_paths, paths(&["/home/user/myproj"]));
        assert_eq!(cli.usage_policy(), UsagePolicy::WarnAndContinue);
        assert_eq!(cli.literal_mode(), LiteralMode::Raw);
    }

    #[test]
    fn test_parse_without_path_is_accepted() {
        let cli = Cli::try_parse_from(["owltree-setup"]).unwrap();

        assert!(cli.project_paths.is_empty());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["owltree-setup", "--strict", "--escape", "proj"]).unwrap();

        assert_eq!(cli.usage_policy(), UsagePolicy::Strict);
        assert_eq!(cli.literal_mode(), LiteralMode::Escaped);
    }

    fn check(values: &[&str], policy: UsagePolicy) -> (Result<String, SetupError>, String) {
        let mut out = Vec::new();
        let result = check_arguments(&paths(values), policy, &mut out);

        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_check_arguments_single_path() {
        for policy in [UsagePolicy::WarnAndContinue, UsagePolicy::Strict] {
            let (result, printed) = check(&["proj"], policy);
            assert_eq!(result.unwrap(), "proj");
            assert!(printed.is_empty());
        }
    }

    #[test]
    fn test_check_arguments_prints_usage_on_wrong_count() {
        for policy in [UsagePolicy::WarnAndContinue, UsagePolicy::Strict] {
            for values in [&[][..], &["first", "second"][..]] {
                let (_, printed) = check(values, policy);
                assert_eq!(printed, format!("{USAGE_MESSAGE}\n"));
            }
        }
    }

    #[test]
    fn test_check_arguments_warn_without_path() {
        let (result, _) = check(&[], UsagePolicy::WarnAndContinue);

        assert!(matches!(result, Err(SetupError::MissingProjectPath)));
    }

    #[test]
    fn test_check_arguments_warn_with_extra_paths() {
        let (result, _) = check(&["first", "second"], UsagePolicy::WarnAndContinue);

        assert_eq!(result.unwrap(), "first");
    }

    #[test]
    fn test_check_arguments_empty_path() {
        for policy in [UsagePolicy::WarnAndContinue, UsagePolicy::Strict] {
            let (result, printed) = check(&[""], policy);
            assert!(matches!(result, Err(SetupError::MissingProjectPath)));
            assert!(printed.is_empty());
        }

        let (result, _) = check(&["", "second"], UsagePolicy::WarnAndContinue);
        assert!(matches!(result, Err(SetupError::MissingProjectPath)));
    }

    #[test]
    fn test_check_arguments_strict() {
        let (result, _) = check(&[], UsagePolicy::Strict);
        assert!(matches!(result, Err(SetupError::Usage)));

        let (result, _) = check(&["first", "second"], UsagePolicy::Strict);
        assert!(matches!(result, Err(SetupError::Usage)));
    }
}
