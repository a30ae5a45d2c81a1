//! Span macros and recording helpers

/// Create a span with common HTTP request fields
///
/// `http.status_code` starts empty; record it once the response is known.
///
/// # Example
///
/// ```rust
/// use threadloom_observability::http_request_span;
///
/// let span = http_request_span!("POST", "/generate-thread", "b1946ac9");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! http_request_span {
    ($method:expr, $path:expr, $request_id:expr) => {
        tracing::info_span!(
            "http.request",
            http.method = $method,
            http.route = $path,
            http.status_code = tracing::field::Empty,
            request.id = $request_id,
            duration_ms = tracing::field::Empty,
        )
    };
}

/// Create a span for one completion call
///
/// # Example
///
/// ```rust
/// use threadloom_observability::provider_span;
///
/// let span = provider_span!("openai", "gpt-4o-mini", "thread");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! provider_span {
    ($provider:expr, $model:expr, $operation:expr) => {
        tracing::info_span!(
            "provider.call",
            provider.id = $provider,
            provider.model = $model,
            operation = $operation,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span
///
/// Marks the span as failed and logs the error with its source chain.
///
/// # Example
///
/// ```rust,ignore
/// use threadloom_observability::record_error;
///
/// if let Err(e) = provider.generate(request).await {
///     record_error(&e);
///     return Err(e.into());
/// }
/// ```
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::error!(error = %error_chain(error), "Operation failed");
}

/// `error: cause: root cause` for an error and its sources.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.ends_with(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

/// Record latency/duration on the current span
///
/// # Example
///
/// ```rust
/// use threadloom_observability::record_duration;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// // ... operation ...
/// record_duration("duration_ms", start.elapsed());
/// ```
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
