//! Error handling for opsheet
//!
//! This module provides a unified error type and result type for every
//! rendering stage. Each variant is fatal: the pipeline stops at the first
//! one and the binary turns it into a process exit status.

use std::fmt;
use std::path::{Path, PathBuf};

/// Rendering error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The preamble fragment could not be found
    PreambleNotFound { path: PathBuf },
    /// Reading, writing or removing a file failed
    Io { path: PathBuf, message: String },
    /// The external compiler could not be started
    CompilerUnavailable { program: String, message: String },
    /// The external compiler ran and exited non-zero
    CompilerFailed {
        program: String,
        code: Option<i32>,
        log: PathBuf,
    },
    /// The CSV writer failed
    Export { message: String },
    /// Configuration is unusable
    InvalidConfig { message: String },
    /// The catalog audit found error-level problems
    AuditFailed { errors: usize },
    /// No catalog entry lists the requested alias
    UnknownAlias { alias: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::PreambleNotFound { path } => {
                write!(f, "Preamble not found: {}", path.display())
            }
            RenderError::Io { path, message } => {
                write!(f, "IO error on {}: {}", path.display(), message)
            }
            RenderError::CompilerUnavailable { program, message } => {
                write!(f, "Could not run {}: {}", program, message)
            }
            RenderError::CompilerFailed { program, code, log } => {
                if let Some(c) = code {
                    write!(f, "{} exited with code {}. Read {}", program, c, log.display())
                } else {
                    write!(
                        f,
                        "{} was terminated by a signal. Read {}",
                        program,
                        log.display()
                    )
                }
            }
            RenderError::Export { message } => {
                write!(f, "CSV export error: {}", message)
            }
            RenderError::InvalidConfig { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
            RenderError::AuditFailed { errors } => {
                let noun = if *errors == 1 { "error" } else { "errors" };
                write!(f, "Catalog audit failed with {} {}", errors, noun)
            }
            RenderError::UnknownAlias { alias } => {
                write!(f, "No symbol uses alias `{}`", alias)
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl From<csv::Error> for RenderError {
    fn from(err: csv::Error) -> Self {
        RenderError::Export {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for RenderError {
    fn from(err: toml::de::Error) -> Self {
        RenderError::InvalidConfig {
            message: err.to_string(),
        }
    }
}

impl From<WorkspaceError> for RenderError {
    fn from(err: WorkspaceError) -> Self {
        match err {
            WorkspaceError::NotFound(path) => RenderError::Io {
                path,
                message: "file not found".to_string(),
            },
            WorkspaceError::Io { path, message } => RenderError::Io { path, message },
        }
    }
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

// Convenience constructors
impl RenderError {
    pub fn io(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        RenderError::Io {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        RenderError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Process exit status for this failure.
    ///
    /// A compiler's own non-zero code is passed through; everything else
    /// exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            RenderError::CompilerFailed {
                code: Some(c), ..
            } if *c != 0 => *c,
            _ => 1,
        }
    }

    /// True for the missing-file family of failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RenderError::PreambleNotFound { .. })
    }
}

/// Error type for [`crate::utils::files::Workspace`] operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    NotFound(PathBuf),
    Io { path: PathBuf, message: String },
}

impl fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            WorkspaceError::Io { path, message } => {
                write!(f, "IO error on {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for WorkspaceError {}

impl WorkspaceError {
    pub(crate) fn from_io(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            WorkspaceError::NotFound(path.to_path_buf())
        } else {
            WorkspaceError::Io {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiler_failed_display() {
        let err = RenderError::CompilerFailed {
            program: "pdflatex".to_string(),
            code: Some(1),
            log: PathBuf::from("all-operators.log"),
        };
        assert_eq!(
            err.to_string(),
            "pdflatex exited with code 1. Read all-operators.log"
        );
    }

    #[test]
    fn test_exit_code_passthrough() {
        let err = RenderError::CompilerFailed {
            program: "pdflatex".to_string(),
            code: Some(12),
            log: PathBuf::from("x.log"),
        };
        assert_eq!(err.exit_code(), 12);

        let killed = RenderError::CompilerFailed {
            program: "pdflatex".to_string(),
            code: None,
            log: PathBuf::from("x.log"),
        };
        assert_eq!(killed.exit_code(), 1);
        assert!(killed.to_string().contains("signal"));

        assert_eq!(RenderError::invalid_config("nope").exit_code(), 1);
    }

    #[test]
    fn test_preamble_not_found() {
        let err = RenderError::PreambleNotFound {
            path: PathBuf::from("all-operators-preamble.tex"),
        };
        assert!(err.is_not_found());
        assert!(err.to_string().contains("all-operators-preamble.tex"));
    }

    #[test]
    fn test_workspace_error_conversion() {
        let missing = WorkspaceError::from_io(
            Path::new("a.csv"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(missing, WorkspaceError::NotFound(PathBuf::from("a.csv")));

        let denied = WorkspaceError::from_io(
            Path::new("a.csv"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let err: RenderError = denied.into();
        assert!(matches!(err, RenderError::Io { .. }));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_command_failures_exit_one() {
        let audit = RenderError::AuditFailed { errors: 2 };
        assert_eq!(audit.exit_code(), 1);
        assert_eq!(audit.to_string(), "Catalog audit failed with 2 errors");
        assert_eq!(
            RenderError::AuditFailed { errors: 1 }.to_string(),
            "Catalog audit failed with 1 error"
        );

        let alias = RenderError::UnknownAlias {
            alias: "=>>".to_string(),
        };
        assert_eq!(alias.exit_code(), 1);
        assert_eq!(alias.to_string(), "No symbol uses alias `=>>`");
        assert!(!alias.is_not_found());
    }
}
