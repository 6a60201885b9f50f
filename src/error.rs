use serde::{Serialize, Deserialize};
use std::fmt;

/// Category of an [`OjError`].
///
/// Callers match on the kind to pick a response; the message and context are
/// for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    #[error("profile not found")]
    ProfileNotFound,
    #[error("problem not found")]
    ProblemNotFound,
    #[error("no problem available")]
    NoProblemAvailable,
    #[error("invalid argument")]
    InvalidArgument,
    #[error("i/o failure")]
    Io,
    #[error("malformed json")]
    Json,
    #[error("invalid configuration")]
    Config,
    #[error("internal error")]
    Internal,
}

/// Unified error type for the crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OjError {
    pub kind: ErrorKind,
    pub message: String,
    pub stage: String,
    pub context: Option<String>,
    pub source: Option<String>,
}

impl OjError {
    /// Create a new error with kind, message and stage
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S, stage: &'static str) -> Self {
        OjError {
            kind,
            message: message.into(),
            stage: stage.to_string(),
            context: None,
            source: None,
        }
    }

    pub fn profile_not_found(user_id: u64) -> Self {
        OjError::new(ErrorKind::ProfileNotFound, "User does not exist", "profile")
            .with_context(format!("user_id: {}", user_id))
    }

    /// Add additional context information
    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add source error information
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::ProfileNotFound | ErrorKind::ProblemNotFound)
    }
}

impl fmt::Display for OjError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.kind, self.message)?;
        if let Some(ref context) = self.context {
            write!(f, " (context: {})", context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, " (source: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for OjError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<anyhow::Error> for OjError {
    fn from(err: anyhow::Error) -> Self {
        OjError::new(ErrorKind::Internal, err.to_string(), "unknown").with_source("anyhow")
    }
}

impl From<std::io::Error> for OjError {
    fn from(err: std::io::Error) -> Self {
        OjError::new(ErrorKind::Io, format!("I/O error: {}", err), "io").with_source("std::io")
    }
}

impl From<serde_json::Error> for OjError {
    fn from(err: serde_json::Error) -> Self {
        OjError::new(ErrorKind::Json, format!("JSON error: {}", err), "json_parse")
            .with_source("serde_json")
    }
}

impl From<toml::de::Error> for OjError {
    fn from(err: toml::de::Error) -> Self {
        OjError::new(ErrorKind::Config, format!("TOML error: {}", err), "config")
            .with_source("toml")
    }
}
