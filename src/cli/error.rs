//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::Application(e) => match e {
                ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                ApplicationError::InvalidInput(_) => crate::exitcode::DATAERR,
                ApplicationError::EmptyTree => crate::exitcode::NOINPUT,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
            },
        }
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_exit_codes() {
        let domain: CliError = ApplicationError::from(DomainError::InvalidDecodeInput('x')).into();
        assert_eq!(domain.exit_code(), crate::exitcode::DATAERR);
        assert_eq!(
            CliError::from(ApplicationError::EmptyTree).exit_code(),
            crate::exitcode::NOINPUT
        );
        let config = CliError::from(ApplicationError::Config {
            message: "cannot determine config directory".into(),
        });
        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);
        assert_eq!(
            CliError::io("read", std::io::Error::other("x")).exit_code(),
            crate::exitcode::IOERR
        );
    }
}
