//! Client error model.

/// Result type used across the client.
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status, with whatever body came back.
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
    /// The server answered with its `{"error": ...}` envelope.
    #[error("server error: {0}")]
    Server(String),
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("render error: {0}")]
    Render(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::Url(err.to_string())
    }
}

impl From<askama::Error> for ClientError {
    fn from(err: askama::Error) -> Self {
        ClientError::Render(err.to_string())
    }
}
