use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccessorGenError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Invalid declaration pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Editor rejected the edit: {message}")]
    EditorError { message: String },

    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },
}

impl AccessorGenError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write the document: {}", e),
            Self::SerializationError(e) => format!("Could not serialize the properties: {}", e),
            Self::TomlParseError(e) => format!("The configuration file is not valid TOML: {}", e),
            Self::PatternError(_) => {
                "The declaration prefix/suffix produced an invalid search pattern".to_string()
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::EditorError { message } => format!("The edit could not be applied: {}", message),
            Self::UnknownCommand { command } => format!("No command named '{}'", command),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the file exists and is writable",
            Self::SerializationError(_) => "Re-run without --list",
            Self::TomlParseError(_) | Self::ConfigError { .. } => {
                "Fix the configuration file or run without --config"
            }
            Self::PatternError(_) | Self::InvalidConfigValueError { .. } => {
                "Use word characters only for prefix/suffix and an indent between 0 and 8"
            }
            Self::EditorError { .. } => "Make sure the document was not modified concurrently",
            Self::UnknownCommand { .. } => "Use extension.genGettersSetters",
        }
    }
}

pub type Result<T> = std::result::Result<T, AccessorGenError>;
