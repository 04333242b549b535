#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_CONFIG_FILE: &str = "staffbook.toml";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "staffbook")]
#[command(about = "Keep track of employees, their skills and their bonuses")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to the TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Employee store, overrides store.path")]
    pub store: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the configuration file and applies command line overrides.
    ///
    /// Without `--config`, `staffbook.toml` in the working directory is used
    /// when present and built-in defaults otherwise.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = load_config_file(self.config.as_ref())?;
        if let Some(store) = &self.store {
            config.store.path = store.clone();
        }
        Ok(config)
    }
}

pub fn load_config_file(path: Option<&PathBuf>) -> Result<TomlConfig> {
    match path {
        Some(path) => TomlConfig::from_file(path),
        None if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() => {
            TomlConfig::from_file(DEFAULT_CONFIG_FILE)
        }
        None => Ok(TomlConfig::default()),
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::domain::model::Role;
    use crate::domain::ports::ConfigProvider;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_hire_command() {
        let cli = CliConfig::parse_from([
            "staffbook",
            "hire",
            "Ana",
            "4200.5",
            "--role",
            "Developer",
            "--skill",
            "rust,sql",
            "--hired-on",
            "2024-03-01",
        ]);

        match cli.command {
            cli::Command::Hire {
                name,
                salary,
                role,
                skills,
                hired_on,
            } => {
                assert_eq!(name, "Ana");
                assert_eq!(salary, 4200.5);
                assert_eq!(role, Role::Developer);
                assert_eq!(skills, vec!["rust".to_string(), "sql".to_string()]);
                assert_eq!(hired_on, NaiveDate::from_ymd_opt(2024, 3, 1));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_store_flag_overrides_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[store]\npath = \"from-file.json\"").unwrap();
        let config_path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "staffbook",
            "--config",
            config_path.as_str(),
            "list",
            "--store",
            "override.json",
        ]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.store_path(), "override.json");
    }
}
