//! Defaults for completion calls and output shaping.

/// Model used when `OPENAI_MODEL` is not set
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Provider request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Output token budgets per endpoint
pub const THREAD_MAX_TOKENS: u32 = 2000;
pub const TWEET_MAX_TOKENS: u32 = 200;
pub const BIO_MAX_TOKENS: u32 = 200;

/// Number of tweets in a thread when the request does not say
pub const DEFAULT_THREAD_LENGTH: i64 = 5;
pub const DEFAULT_TONE: &str = "neutral";
pub const DEFAULT_BIO_TONE: &str = "professional";

/// Platform limits quoted in prompts
pub const TWEET_CHAR_LIMIT: usize = 280;
pub const BIO_CHAR_LIMIT: usize = 160;
