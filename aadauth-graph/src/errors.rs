//! Graph client error types

use aadauth_rbac::DirectoryError;

/// Error type for Graph API operations
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Directory returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<aadauth_config::ConfigError> for GraphError {
    fn from(err: aadauth_config::ConfigError) -> Self {
        GraphError::ConfigError(err.to_string())
    }
}

impl From<GraphError> for DirectoryError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::Status { status, body } => DirectoryError::from_status(status, body),
            GraphError::NetworkError(e) if e.is_decode() => {
                DirectoryError::MalformedResponse(e.to_string())
            }
            GraphError::NetworkError(e) => DirectoryError::Network(e.to_string()),
            GraphError::InvalidJson(e) => DirectoryError::MalformedResponse(e.to_string()),
            GraphError::InvalidUrl(e) => DirectoryError::Configuration(e.to_string()),
            GraphError::ConfigError(message) => DirectoryError::Configuration(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_are_classified() {
        let forbidden: DirectoryError = GraphError::Status {
            status: 403,
            body: "Connection returned 403".to_string(),
        }
        .into();
        assert!(forbidden.is_forbidden());

        let unauthorized: DirectoryError = GraphError::Status {
            status: 401,
            body: String::new(),
        }
        .into();
        assert!(matches!(unauthorized, DirectoryError::Unauthorized { .. }));
    }

    #[test]
    fn test_json_errors_are_malformed_responses() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DirectoryError = GraphError::InvalidJson(json_err).into();
        assert!(matches!(err, DirectoryError::MalformedResponse(_)));
    }

    #[test]
    fn test_config_errors_are_configuration_errors() {
        let err: DirectoryError = GraphError::from(url::Url::parse("nope").unwrap_err()).into();
        assert!(matches!(err, DirectoryError::Configuration(_)));
    }

    #[test]
    fn test_lookup_failures_are_never_configuration_errors() {
        for status in [400, 401, 403, 404, 500, 503] {
            let err: DirectoryError = GraphError::Status {
                status,
                body: String::new(),
            }
            .into();
            assert!(!matches!(err, DirectoryError::Configuration(_)), "status {status}");
        }

        let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err: DirectoryError = GraphError::InvalidJson(json_err).into();
        assert!(!matches!(err, DirectoryError::Configuration(_)));
    }
}
