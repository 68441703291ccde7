//! Session configuration from the environment and the command line.

use std::path::PathBuf;

pub const SAVE_FILE_ENV: &str = "CHESS_ARBITER_SAVE_FILE";
pub const DEFAULT_SAVE_FILE: &str = "save_data.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Target of the `save` and `load` commands.
    pub save_file: PathBuf,
    /// Skip the banner and the board after each move.
    pub quiet: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            save_file: PathBuf::from(DEFAULT_SAVE_FILE),
            quiet: false,
        }
    }
}

impl SessionConfig {
    /// Reads [`SAVE_FILE_ENV`] and the process arguments.
    pub fn from_env() -> Result<Self, String> {
        Self::from_sources(std::env::var(SAVE_FILE_ENV).ok(), std::env::args().skip(1))
    }

    /// Arguments win over the environment, which wins over the defaults.
    ///
    /// Accepted arguments: `--save-file <path>` and `--quiet` / `-q`.
    pub fn from_sources<I>(env_save_file: Option<String>, args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = SessionConfig::default();
        if let Some(path) = env_save_file.filter(|path| !path.trim().is_empty()) {
            config.save_file = PathBuf::from(path);
        }

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--save-file" => {
                    let path = args
                        .next()
                        .ok_or_else(|| "--save-file requires a path".to_owned())?;
                    config.save_file = PathBuf::from(path);
                }
                "--quiet" | "-q" => config.quiet = true,
                other => return Err(format!("unknown argument: {other}")),
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{SessionConfig, DEFAULT_SAVE_FILE};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| (*arg).to_owned()).collect()
    }

    #[test]
    fn defaults_without_sources() {
        let config = SessionConfig::from_sources(None, args(&[])).expect("no args is valid");
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.save_file, PathBuf::from(DEFAULT_SAVE_FILE));
    }

    #[test]
    fn arguments_override_environment() {
        let config = SessionConfig::from_sources(Some("env.json".to_owned()), args(&["-q"]))
            .expect("valid args");
        assert_eq!(config.save_file, PathBuf::from("env.json"));
        assert!(config.quiet);

        let config = SessionConfig::from_sources(
            Some("env.json".to_owned()),
            args(&["--save-file", "cli.json"]),
        )
        .expect("valid args");
        assert_eq!(config.save_file, PathBuf::from("cli.json"));
        assert!(!config.quiet);
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(SessionConfig::from_sources(None, args(&["--save-file"])).is_err());
        assert_eq!(
            SessionConfig::from_sources(None, args(&["--verbose"])),
            Err("unknown argument: --verbose".to_owned())
        );
    }
}
