//! CLI errors and exit codes for scripting.
//!
//! Responsibilities:
//! - Define command-level errors that are not config or client failures.
//! - Map ConfigError and ClientError variants to structured exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Every failure exits non-zero.

use kishell_client::ClientError;
use kishell_config::ConfigError;
use thiserror::Error;

/// Errors raised by command handlers themselves.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("missing parameter. One of the following is expected: {0}")]
    MissingParameter(&'static str),

    #[error("{0} name must not be empty")]
    EmptyName(&'static str),
}

/// Structured exit codes for kishell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled failure, config file I/O.
    GeneralError = 1,

    /// Authentication failure - HTTP 401/403 from the server.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ConnectionError = 3,

    /// Named server or role not found.
    NotFound = 4,

    /// Validation error - missing parameter, bad period, bad URL.
    ValidationError = 5,

    /// No servers or roles configured yet.
    NotConfigured = 6,

    /// The server answered with something that is not a search result.
    InvalidResponse = 7,

    /// Server error - HTTP 5xx.
    ServiceUnavailable = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        if err.is_network_error() {
            return ExitCode::ConnectionError;
        }
        if err.is_response_error() {
            return ExitCode::InvalidResponse;
        }

        match err {
            ClientError::InvalidPeriod { .. } | ClientError::InvalidUrl(_) => {
                ExitCode::ValidationError
            }
            ClientError::ApiError {
                status: 401 | 403, ..
            } => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status, .. } if *status >= 500 => {
                ExitCode::ServiceUnavailable
            }
            ClientError::ApiError { .. } => ExitCode::InvalidResponse,
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        if err.is_lookup_error() {
            return ExitCode::NotFound;
        }
        match err {
            ConfigError::NotConfigured => ExitCode::NotConfigured,
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<&CommandError> for ExitCode {
    fn from(err: &CommandError) -> Self {
        match err {
            CommandError::MissingParameter(_) | CommandError::EmptyName(_) => {
                ExitCode::ValidationError
            }
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<CommandError>() {
                return ExitCode::from(err);
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::NotConfigured.as_i32(), 6);
    }

    #[test]
    fn test_from_client_error_timeout() {
        let err = ClientError::Timeout(Duration::from_secs(5));
        assert_eq!(ExitCode::from(&err), ExitCode::ConnectionError);
    }

    #[test]
    fn test_from_client_error_content_type() {
        let err = ClientError::UnexpectedContentType {
            content_type: "application/xml".to_string(),
            status: 200,
        };
        assert_eq!(ExitCode::from(&err), ExitCode::InvalidResponse);
    }

    #[test]
    fn test_from_client_error_network_and_response_groups() {
        let refused = ClientError::ConnectionRefused("127.0.0.1:1".to_string());
        assert_eq!(ExitCode::from(&refused), ExitCode::ConnectionError);

        let failed = ClientError::SearchFailed {
            index: "logs-*".to_string(),
            reason: "no such index [logs-*] (status 404)".to_string(),
        };
        assert_eq!(ExitCode::from(&failed), ExitCode::InvalidResponse);

        let malformed = ClientError::InvalidResponse("field 'responses': missing hits".to_string());
        assert_eq!(ExitCode::from(&malformed), ExitCode::InvalidResponse);
    }

    #[test]
    fn test_from_client_error_api_statuses() {
        let api = |status| ClientError::ApiError {
            status,
            url: "http://localhost:5601/elasticsearch/_msearch".to_string(),
            message: String::new(),
        };
        assert_eq!(ExitCode::from(&api(401)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&api(403)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&api(400)), ExitCode::InvalidResponse);
        assert_eq!(ExitCode::from(&api(503)), ExitCode::ServiceUnavailable);
    }

    #[test]
    fn test_from_client_error_invalid_period() {
        let err = ClientError::InvalidPeriod {
            input: "banana".to_string(),
            reason: "expected a number".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
    }

    #[test]
    fn test_from_config_errors() {
        assert_eq!(
            ExitCode::from(&ConfigError::NotConfigured),
            ExitCode::NotConfigured
        );
        assert_eq!(
            ExitCode::from(&ConfigError::ServerNotFound("x".to_string())),
            ExitCode::NotFound
        );
        assert_eq!(
            ExitCode::from(&ConfigError::RoleNotFound("app".to_string())),
            ExitCode::NotFound
        );
        assert_eq!(
            ExitCode::from(&ConfigError::HomeDirUnavailable),
            ExitCode::GeneralError
        );
    }

    #[test]
    fn test_exit_code_ext_walks_chain() {
        let err = anyhow::Error::new(ConfigError::RoleNotFound("app".to_string()))
            .context("Failed to resolve role");
        assert_eq!(err.exit_code(), ExitCode::NotFound);

        let err = anyhow::Error::new(CommandError::MissingParameter("--server | --role"));
        assert_eq!(err.exit_code(), ExitCode::ValidationError);

        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
