use crate::domain::model::{Role, BASE_BONUS_RATE};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StaffError};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_rate, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_STORE_PATH: &str = "./staffbook.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub bonus: BonusConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_STORE_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BonusConfig {
    pub default_rate: Option<f64>,
    /// Role name to bonus rate, e.g. `manager = 0.2`.
    pub roles: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
}

impl TomlConfig {
    /// Reads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StaffError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration text after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StaffError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are kept verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StaffError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("store.path", &self.store.path)?;

        if let Some(rate) = self.bonus.default_rate {
            validate_rate("bonus.default_rate", rate)?;
        }

        if let Some(roles) = &self.bonus.roles {
            let mut seen: HashMap<Role, &str> = HashMap::new();
            for (role, rate) in roles {
                validate_non_empty_string("bonus.roles", role)?;
                validate_rate(&format!("bonus.roles.{}", role), *rate)?;

                if let Some(other) = seen.insert(Role::from(role.as_str()), role) {
                    return Err(StaffError::InvalidConfigValueError {
                        field: "bonus.roles".to_string(),
                        value: role.clone(),
                        reason: format!(
                            "'{}' and '{}' name the same role; role names are case-insensitive",
                            other, role
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn store_path(&self) -> &str {
        &self.store.path
    }

    fn default_bonus_rate(&self) -> f64 {
        self.bonus.default_rate.unwrap_or(BASE_BONUS_RATE)
    }

    /// Keys are folded in sorted order so the result does not depend on
    /// hash iteration; `validate` rejects keys that fold to the same role.
    fn role_rates(&self) -> HashMap<Role, f64> {
        let mut roles: Vec<_> = self.bonus.roles.iter().flatten().collect();
        roles.sort_by(|a, b| a.0.cmp(b.0));
        roles
            .into_iter()
            .map(|(role, rate)| (Role::from(role.as_str()), *rate))
            .collect()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[store]
path = "./data/staff.json"

[bonus]
default_rate = 0.08

[bonus.roles]
Manager = 0.25
intern = 0.02

[logging]
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.store_path(), "./data/staff.json");
        assert_eq!(config.default_bonus_rate(), 0.08);
        let rates = config.role_rates();
        assert_eq!(rates.get(&Role::Manager), Some(&0.25));
        assert_eq!(rates.get(&Role::from("intern")), Some(&0.02));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.store_path(), DEFAULT_STORE_PATH);
        assert_eq!(config.default_bonus_rate(), BASE_BONUS_RATE);
        assert!(config.role_rates().is_empty());
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STAFFBOOK_TEST_STORE", "/tmp/staffbook-test.json");

        let config = TomlConfig::from_toml_str(
            r#"
[store]
path = "${STAFFBOOK_TEST_STORE}"
"#,
        )
        .unwrap();
        assert_eq!(config.store.path, "/tmp/staffbook-test.json");

        std::env::remove_var("STAFFBOOK_TEST_STORE");
    }

    #[test]
    fn test_unknown_env_var_is_left_alone() {
        let config = TomlConfig::from_toml_str(
            r#"
[store]
path = "${STAFFBOOK_SURELY_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(config.store.path, "${STAFFBOOK_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_validation_rejects_bad_rates() {
        let config = TomlConfig::from_toml_str(
            r#"
[bonus.roles]
manager = 1.5
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(StaffError::InvalidConfigValueError { .. })
        ));

        let config = TomlConfig::from_toml_str(
            r#"
[bonus]
default_rate = -0.1
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_roles_differing_only_in_case() {
        let config = TomlConfig::from_toml_str(
            r#"
[bonus.roles]
Manager = 0.3
manager = 0.05
"#,
        )
        .unwrap();

        match config.validate() {
            Err(StaffError::InvalidConfigValueError { field, reason, .. }) => {
                assert_eq!(field, "bonus.roles");
                assert!(reason.contains("same role"));
            }
            other => panic!("expected duplicate role error, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_rejects_staff_aliases() {
        let config = TomlConfig::from_toml_str(
            r#"
[bonus.roles]
staff = 0.1
employee = 0.2
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            TomlConfig::from_toml_str("[store\npath = 1"),
            Err(StaffError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[store]\npath = \"team.json\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.store_path(), "team.json");
    }
}
