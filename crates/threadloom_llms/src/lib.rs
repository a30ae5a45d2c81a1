//! threadloom_llms: provider-agnostic completion SDK.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            Arc<dyn Provider>                 │
//! │                    │                         │
//! │          ┌─────────┴─────────┐               │
//! │          ▼                   ▼               │
//! │   ┌─────────────┐     ┌─────────────┐        │
//! │   │   OpenAI    │     │  (test mock)│        │
//! │   │  Provider   │     │             │        │
//! │   └─────────────┘     └─────────────┘        │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use threadloom_llms::{GenerateRequest, Message, OpenAIProvider, Provider};
//!
//! # async fn demo() -> threadloom_llms::Result<()> {
//! let provider = OpenAIProvider::from_env()?;
//! let request = GenerateRequest::new(
//!     "gpt-4o-mini",
//!     vec![Message::system("Be brief."), Message::user("Say hi")],
//! )
//! .with_temperature(0.7)
//! .with_max_tokens(200);
//! let response = provider.generate(request).await?;
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod provider;
pub mod providers;
pub mod types;


// Re-export core abstractions
pub use error::{Error, Result};
pub use provider::Provider;

// Re-export provider implementations
pub use providers::OpenAIProvider;
pub use providers::openai::OpenAIConfig;

// Re-export commonly used types
pub use types::{
    FinishReason, FinishReasonKind, GenerateOptions, GenerateRequest, GenerateResponse, Headers,
    Message, Role, Usage,
};
