use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::ErrorCode;
pub use helpers::common;

/// The error type for retreat economics operations
#[derive(Error, Debug)]
pub enum RetreatError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Input error: {message}")]
    Input {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Team error: {message}")]
    Team {
        code: u16,
        message: String,
        member_index: Option<usize>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Validation error: {message}")]
    Validation {
        code: u16,
        message: String,
        field: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RetreatError {
    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create an input error with specific code and path
    pub fn input_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Input {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a team error with specific code and member index
    pub fn team_with_code(
        code: u16,
        message: impl Into<String>,
        member_index: Option<usize>,
    ) -> Self {
        Self::Team {
            code,
            message: message.into(),
            member_index,
            source: None,
        }
    }

    /// Create a validation error with specific code and field
    pub fn validation_with_code(
        code: u16,
        message: impl Into<String>,
        field: Option<String>,
    ) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            field,
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Input { source: src, .. }
            | Self::Team { source: src, .. }
            | Self::Validation { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Attach the offending file path to an input error
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        if let Self::Input {
            path: ref mut p, ..
        } = self
        {
            *p = Some(path.into());
        }
        self
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Input { .. } => 3,
            Self::Team { .. } => 5,
            Self::Validation { .. } => 8,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Input { code, .. }
            | Self::Team { code, .. }
            | Self::Validation { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::Input { message, path, .. } => {
                if let Some(p) = path {
                    format!("Could not read retreat {}: {}", p.display(), message)
                } else {
                    format!("Input error: {}", message)
                }
            }
            Self::Team {
                message,
                member_index,
                ..
            } => {
                if let Some(index) = member_index {
                    format!("Team member #{}: {}", index, message)
                } else {
                    format!("Team error: {}", message)
                }
            }
            Self::Validation { message, field, .. } => {
                if let Some(f) = field {
                    format!("Validation error for '{}': {}", f, message)
                } else {
                    format!("Validation error: {}", message)
                }
            }
        }
    }
}

/// Type alias for Results using RetreatError
pub type Result<T> = std::result::Result<T, RetreatError>;

impl From<std::io::Error> for RetreatError {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let (code, message) = match err.kind() {
            ErrorKind::NotFound => (ErrorCode::INPUT_NOT_FOUND, "File not found"),
            ErrorKind::InvalidData => (ErrorCode::INPUT_PARSE_ERROR, "Invalid data"),
            _ => (ErrorCode::INPUT_IO_ERROR, "IO operation failed"),
        };

        RetreatError::input_with_code(code, message, None).with_source(err)
    }
}

impl From<serde_yaml::Error> for RetreatError {
    fn from(err: serde_yaml::Error) -> Self {
        RetreatError::input_with_code(ErrorCode::INPUT_PARSE_ERROR, "Invalid YAML syntax", None)
            .with_source(err)
    }
}

impl From<serde_json::Error> for RetreatError {
    fn from(err: serde_json::Error) -> Self {
        RetreatError::input_with_code(ErrorCode::INPUT_PARSE_ERROR, "Invalid JSON syntax", None)
            .with_source(err)
    }
}

impl From<toml::de::Error> for RetreatError {
    fn from(err: toml::de::Error) -> Self {
        RetreatError::input_with_code(ErrorCode::INPUT_PARSE_ERROR, "Invalid TOML syntax", None)
            .with_source(err)
    }
}
