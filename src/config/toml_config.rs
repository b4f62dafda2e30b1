use crate::core::{ConfigProvider, Mode};
use crate::utils::error::{DefangError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub transform: TransformConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default)]
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformConfig {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
    /// "compact" 或 "json"
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DefangError::TomlParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${INPUT_DIR})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_REGEX
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().map(|l| l.verbose).unwrap_or(false)
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn addresses(&self) -> &[String] {
        &self.input.addresses
    }

    fn input_files(&self) -> &[String] {
        &self.input.files
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    fn output_format(&self) -> &str {
        &self.output.format
    }

    fn mode(&self) -> Mode {
        self.transform.mode
    }

    fn strict(&self) -> bool {
        self.transform.strict
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_has_input(&self.input.addresses, &self.input.files)?;

        for file in &self.input.files {
            validation::validate_path("input.files", file)?;
        }

        if let Some(path) = &self.output.path {
            validation::validate_path("output.path", path)?;
        }

        validation::validate_output_format("output.format", &self.output.format)?;

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            if !["compact", "json"].contains(&format.to_ascii_lowercase().as_str()) {
                return Err(DefangError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: "Valid formats: compact, json".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[input]
addresses = ["1.1.1.1", "255.100.50.0"]
files = ["ips.txt"]

[transform]
mode = "refang"
strict = true

[output]
path = "./out/report.json"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.addresses().len(), 2);
        assert_eq!(config.input_files(), ["ips.txt".to_string()]);
        assert_eq!(config.mode(), Mode::Refang);
        assert!(config.strict());
        assert_eq!(config.output_path(), Some("./out/report.json"));
        assert_eq!(config.output_format(), "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_when_sections_omitted() {
        let config = TomlConfig::from_toml_str(
            r#"
[input]
addresses = ["10.0.0.1"]
"#,
        )
        .unwrap();

        assert_eq!(config.mode(), Mode::Defang);
        assert!(!config.strict());
        assert_eq!(config.output_path(), None);
        assert_eq!(config.output_format(), "text");
        assert!(!config.verbose());
        assert!(!config.json_logging());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DEFANG_TEST_INPUT_FILE", "/var/log/ips.txt");

        let toml_content = r#"
[input]
files = ["${DEFANG_TEST_INPUT_FILE}", "${DEFANG_TEST_UNSET_VAR}"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.files[0], "/var/log/ips.txt");
        assert_eq!(config.input.files[1], "${DEFANG_TEST_UNSET_VAR}");

        std::env::remove_var("DEFANG_TEST_INPUT_FILE");
    }

    #[test]
    fn test_config_validation() {
        let no_input = TomlConfig::from_toml_str("[transform]\nstrict = true\n").unwrap();
        assert!(no_input.validate().is_err());

        let bad_format = TomlConfig::from_toml_str(
            r#"
[input]
addresses = ["1.1.1.1"]

[output]
format = "csv"
"#,
        )
        .unwrap();
        assert!(bad_format.validate().is_err());

        let bad_logging = TomlConfig::from_toml_str(
            r#"
[input]
addresses = ["1.1.1.1"]

[logging]
format = "xml"
"#,
        )
        .unwrap();
        assert!(bad_logging.validate().is_err());
    }

    #[test]
    fn test_invalid_mode_is_parse_error() {
        let result = TomlConfig::from_toml_str(
            r#"
[input]
addresses = ["1.1.1.1"]

[transform]
mode = "obfuscate"
"#,
        );
        assert!(matches!(result, Err(DefangError::TomlParseError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[input]
addresses = ["8.8.8.8"]

[logging]
verbose = true
format = "json"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.addresses(), ["8.8.8.8".to_string()]);
        assert!(config.verbose());
        assert!(config.json_logging());
    }
}
