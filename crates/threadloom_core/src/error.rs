use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThreadloomError {
    /// Credential for the completion provider is absent. Raised before any
    /// network traffic.
    #[error("{0} not found in environment variables")]
    MissingCredential(String),

    /// Request payload failed validation.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The completion call failed (transport, API status, malformed body).
    #[error(transparent)]
    Provider(#[from] threadloom_llms::Error),

    /// The provider answered but the text was blank after trimming.
    #[error("completion provider returned no text")]
    EmptyCompletion,
}

impl ThreadloomError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// True for errors caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}

pub type Result<T> = std::result::Result<T, ThreadloomError>;
