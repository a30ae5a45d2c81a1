//! Application metadata constants

pub const NAME: &str = "threadloom";
pub const DISPLAY_NAME: &str = "Threadloom";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Turns long-form content into tweet threads, tweets and bios";

/// Default bind address for `threadloom serve`
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listen port for `threadloom serve`
pub const DEFAULT_PORT: u16 = 8000;
/// Default cap on request body size (1 MiB)
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;
