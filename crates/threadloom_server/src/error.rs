//! Error responses. Every failure is `{"detail": "..."}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use threadloom_core::ThreadloomError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }

    /// Map a failed generation of `kind` ("thread", "tweet", "bio").
    ///
    /// Provider failures were already logged inside the `provider.call`
    /// span; only the response is built here.
    pub fn generation(kind: &str, err: ThreadloomError) -> Self {
        match err {
            ThreadloomError::InvalidRequest(msg) => Self::bad_request(msg),
            ThreadloomError::MissingCredential(_) => {
                tracing::error!(error = %err, "completion provider not configured");
                Self::internal(err.to_string())
            }
            ThreadloomError::Provider(_) | ThreadloomError::EmptyCompletion => {
                Self::internal(format!("Error generating {kind}: {err}"))
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        Self::new(status, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_is_bad_request() {
        let err = ApiError::generation("thread", ThreadloomError::invalid("content must not be empty"));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.detail, "content must not be empty");
    }

    #[test]
    fn test_missing_credential_is_internal() {
        let err = ApiError::generation(
            "bio",
            ThreadloomError::MissingCredential("OPENAI_API_KEY".to_string()),
        );
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail, "OPENAI_API_KEY not found in environment variables");
    }

    #[test]
    fn test_provider_failure_names_the_kind() {
        let err = ApiError::generation(
            "tweet",
            ThreadloomError::Provider(threadloom_llms::Error::provider_error(
                "OpenAI API error 503: overloaded",
            )),
        );
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.detail.starts_with("Error generating tweet: "));
        assert!(err.detail.contains("overloaded"));
    }

    /// Counts error-level events.
    #[derive(Clone, Default)]
    struct ErrorEvents(std::sync::Arc<std::sync::atomic::AtomicUsize>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for ErrorEvents {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_provider_failure_is_not_logged_again() {
        use tracing_subscriber::layer::SubscriberExt;

        let errors = ErrorEvents::default();
        let subscriber = tracing_subscriber::registry().with(errors.clone());
        tracing::subscriber::with_default(subscriber, || {
            ApiError::generation(
                "thread",
                ThreadloomError::Provider(threadloom_llms::Error::provider_error("boom")),
            );
            ApiError::generation("bio", ThreadloomError::EmptyCompletion);
        });
        assert_eq!(errors.0.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_completion() {
        let err = ApiError::generation("bio", ThreadloomError::EmptyCompletion);
        assert_eq!(err.detail, "Error generating bio: completion provider returned no text");
    }
}
