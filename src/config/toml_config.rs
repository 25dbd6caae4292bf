use crate::core::extractor::{DEFAULT_PREFIX, DEFAULT_SUFFIX};
use crate::core::renderer::DEFAULT_INDENT;
use crate::core::ConfigProvider;
use crate::utils::error::{AccessorGenError, Result};
use crate::utils::validation::{validate_identifier_fragment, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_INDENT: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub declaration: DeclarationConfig,
    pub extract: ExtractConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclarationConfig {
    pub prefix: String,
    pub suffix: String,
}

impl Default for DeclarationConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub skip_blank_lines: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AccessorGenError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_identifier_fragment("declaration.prefix", &self.declaration.prefix)?;
        validate_identifier_fragment("declaration.suffix", &self.declaration.suffix)?;
        validate_range("render.indent", self.render.indent, 0, MAX_INDENT)?;

        if self.declaration.prefix.is_empty() && self.declaration.suffix.is_empty() {
            tracing::debug!("Empty prefix and suffix, the interface shares the file's name");
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn declaration_prefix(&self) -> &str {
        &self.declaration.prefix
    }

    fn declaration_suffix(&self) -> &str {
        &self.declaration.suffix
    }

    fn skip_blank_lines(&self) -> bool {
        self.extract.skip_blank_lines
    }

    fn indent_width(&self) -> usize {
        self.render.indent
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
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.declaration_prefix(), "I");
        assert_eq!(config.declaration_suffix(), "Data");
        assert!(!config.skip_blank_lines());
        assert_eq!(config.indent_width(), 2);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[declaration]
prefix = ""
suffix = "Props"

[extract]
skip_blank_lines = true

[render]
indent = 4
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.declaration_prefix(), "");
        assert_eq!(config.declaration_suffix(), "Props");
        assert!(config.skip_blank_lines());
        assert_eq!(config.indent_width(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = TomlConfig::from_toml_str("[declaration]\nsuffix = \"Model\"\n").unwrap();

        assert_eq!(config.declaration_prefix(), "I");
        assert_eq!(config.declaration_suffix(), "Model");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let result = TomlConfig::from_toml_str("[render]\nindent = \"wide\"\n");
        assert!(matches!(result, Err(AccessorGenError::TomlParseError(_))));
    }

    #[test]
    fn test_config_validation() {
        let wide = TomlConfig::from_toml_str("[render]\nindent = 12\n").unwrap();
        assert!(wide.validate().is_err());

        let pattern = TomlConfig::from_toml_str("[declaration]\nsuffix = \"Data|.*\"\n").unwrap();
        assert!(pattern.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[render]\nindent = 3\n").unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.indent_width(), 3);
    }
}
